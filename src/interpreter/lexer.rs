use logos::Logos;

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(extras = LexerExtras)]
pub enum Token {
    /// Numeric literal tokens, such as `3.14`, `.5`, `2`, or `2.1e-10`.
    #[regex(r"[0-9]+\.[0-9]+([eE][+-]?[0-9]+)?", parse_float)]
    #[regex(r"\.[0-9]+([eE][+-]?[0-9]+)?", parse_float)]
    #[regex(r"[0-9]+[eE][+-]?[0-9]+", parse_float)]
    #[regex(r"[0-9]+", parse_float)]
    Number(f64),
    /// Identifier tokens; variables, functions and units such as `x`, `sin`
    /// or `deg`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `// Comments.`
    #[regex(r"//[^\n\r]*", logos::skip, allow_greedy = true)]
    Comment,
    /// `# Comments.`
    #[regex(r"#[^\n\r]*", logos::skip, allow_greedy = true)]
    HashComment,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `**`, an alias of `^`.
    #[token("**")]
    StarStar,
    /// `/`
    #[token("/")]
    Slash,
    /// `%`
    #[token("%")]
    Percent,
    /// `^`
    #[token("^")]
    Caret,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `,`
    #[token(",")]
    Comma,
    /// `=`
    #[token("=")]
    Equals,
    /// `;`
    #[token(";")]
    Semicolon,
    /// Line breaks; they separate statements.
    #[token("\n", |lex| {
        lex.extras.line += 1;
    })]
    NewLine,
    /// Spaces, tabs, carriage returns and feeds.
    #[regex(r"[ \t\f\r]+", logos::skip)]
    Ignored,
}

impl Token {
    /// Returns `true` if the token ends a statement.
    #[must_use]
    pub const fn is_separator(&self) -> bool {
        matches!(self, Self::NewLine | Self::Semicolon)
    }

    /// Returns `true` if the token can begin an atom (`NUMBER`, `SYMBOL` or
    /// `(`), which is what continues a call chain.
    #[must_use]
    pub const fn starts_atom(&self) -> bool {
        matches!(self, Self::Number(_) | Self::Identifier(_) | Self::LParen)
    }
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for error reporting and diagnostics.
#[derive(Default)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

/// Parses a floating-point literal from the current token slice.
fn parse_float(lex: &logos::Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lex(source: &str) -> Vec<Token> {
        Token::lexer_with_extras(source, LexerExtras { line: 1 }).map(|t| t.expect("valid token"))
                                                                   .collect()
    }

    #[test]
    fn numbers_and_unit_suffixes_split() {
        assert_eq!(lex("1d 2.5h .5 1e3"),
                   vec![Token::Number(1.0),
                        Token::Identifier("d".to_string()),
                        Token::Number(2.5),
                        Token::Identifier("h".to_string()),
                        Token::Number(0.5),
                        Token::Number(1000.0)]);
    }

    #[test]
    fn double_star_is_one_token() {
        assert_eq!(lex("2 ** 3 * 4"),
                   vec![Token::Number(2.0),
                        Token::StarStar,
                        Token::Number(3.0),
                        Token::Star,
                        Token::Number(4.0)]);
    }

    #[test]
    fn comments_are_skipped_and_lines_counted() {
        let mut lexer = Token::lexer_with_extras("a # one\n// two\nb", LexerExtras { line: 1 });
        let mut tokens = Vec::new();
        while let Some(token) = lexer.next() {
            tokens.push((token.expect("valid token"), lexer.extras.line));
        }
        assert_eq!(tokens,
                   vec![(Token::Identifier("a".to_string()), 1),
                        (Token::NewLine, 2),
                        (Token::NewLine, 3),
                        (Token::Identifier("b".to_string()), 3)]);
    }

    #[test]
    fn unknown_characters_are_errors() {
        let mut lexer = Token::lexer_with_extras("2 $ 3", LexerExtras { line: 1 });
        assert_eq!(lexer.next(), Some(Ok(Token::Number(2.0))));
        assert!(matches!(lexer.next(), Some(Err(()))));
    }
}
