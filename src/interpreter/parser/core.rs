use std::iter::Peekable;

use logos::Logos;

use crate::{
    ast::{Expr, Statement},
    error::ParseError,
    interpreter::{
        lexer::{LexerExtras, Token},
        parser::{binary::parse_additive, statement::parse_statement},
    },
};

/// Result type used by the parser.
///
/// All parsing functions return either a value of type `T` or a
/// `ParseError` describing where the input stopped making sense.
pub type ParseResult<T> = Result<T, ParseError>;

/// Converts source text into `(Token, line)` pairs.
///
/// Comments and blank space are dropped by the lexer; newlines are kept
/// because they separate statements.
///
/// # Errors
/// Returns `ParseError::InvalidNumber` if the first slice the lexer cannot
/// recognize looks like a number (a lone `.`), otherwise
/// `ParseError::UnexpectedToken`. A stray slice glued to the number before it
/// (`1.`) is reported together with that number.
pub fn tokenize(source: &str) -> ParseResult<Vec<(Token, usize)>> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer_with_extras(source, LexerExtras { line: 1 });
    let mut last_number = None;

    while let Some(token) = lexer.next() {
        if let Ok(tok) = token {
            last_number = matches!(tok, Token::Number(_)).then(|| lexer.span());
            tokens.push((tok, lexer.extras.line));
        } else {
            let span = lexer.span();
            let start = match last_number {
                Some(number) if number.end == span.start => number.start,
                _ => span.start,
            };
            let slice = source[start..span.end].to_string();
            let line = lexer.extras.line;
            if slice.starts_with(|c: char| c.is_ascii_digit() || c == '.') {
                return Err(ParseError::InvalidNumber { literal: slice,
                                                       line });
            }
            return Err(ParseError::UnexpectedToken { token: slice,
                                                     line });
        }
    }

    Ok(tokens)
}

/// Tokenizes and parses a complete program.
///
/// # Example
/// ```
/// use symcalc::interpreter::parser::core::parse_source;
///
/// let program = parse_source("a = 3; a * 2\n# comment").unwrap();
/// assert_eq!(program.len(), 2);
/// ```
pub fn parse_source(source: &str) -> ParseResult<Vec<Statement>> {
    let tokens = tokenize(source)?;
    let mut iter = tokens.iter().peekable();
    parse_program(&mut iter)
}

/// Parses a program: statements separated by `;` or newlines.
///
/// Grammar: `program := (statement (";" | NEWLINE))* statement?`
///
/// Empty statements (consecutive separators) are skipped.
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, line)` pairs.
///
/// # Returns
/// The statements in source order.
pub fn parse_program<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Vec<Statement>>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut statements = Vec::new();

    loop {
        while let Some((token, _)) = tokens.peek()
              && token.is_separator()
        {
            tokens.next();
        }
        if tokens.peek().is_none() {
            break;
        }

        statements.push(parse_statement(tokens)?);

        match tokens.next() {
            None => break,
            Some((token, _)) if token.is_separator() => {},
            Some((token, line)) => {
                return Err(ParseError::UnexpectedToken { token: format!("{token:?}"),
                                                         line:  *line, });
            },
        }
    }

    Ok(statements)
}

/// Parses a full expression.
///
/// A full expression is one additive expression, or several separated by
/// commas, in which case an `Expr::Tuple` is produced.
///
/// Grammar: `expression := additive ("," additive)*`
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, line)` pairs.
///
/// # Returns
/// The parsed expression node.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let first = parse_additive(tokens)?;

    if !matches!(tokens.peek(), Some((Token::Comma, _))) {
        return Ok(first);
    }

    let line = first.line();
    let mut elements = vec![first];
    while let Some((Token::Comma, _)) = tokens.peek() {
        tokens.next();
        elements.push(parse_additive(tokens)?);
    }

    Ok(Expr::Tuple { elements, line })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::BinaryOperator;

    fn number(value: f64, line: usize) -> Expr {
        Expr::Number { value, line }
    }

    fn symbol(name: &str, line: usize) -> Expr {
        Expr::Symbol { name: name.to_string(),
                       line }
    }

    #[test]
    fn precedence_levels_nest() {
        let program = parse_source("2 + 2 * 2").unwrap();
        let expected = Expr::Additive { operands:  vec![number(2.0, 1),
                                                        Expr::Multiplicative { operands:  vec![number(2.0, 1),
                                                                                               number(2.0, 1)],
                                                                               operators: vec![BinaryOperator::Mul],
                                                                               line:      1, }],
                                        operators: vec![BinaryOperator::Add],
                                        line:      1, };
        assert_eq!(program,
                   vec![Statement::Expression { expr: expected,
                                                line: 1, }]);
    }

    #[test]
    fn juxtaposition_builds_a_call_chain() {
        let program = parse_source("sin 90 deg").unwrap();
        assert_eq!(program,
                   vec![Statement::Expression { expr: Expr::Call { atoms: vec![symbol("sin", 1),
                                                                               number(90.0, 1),
                                                                               symbol("deg", 1)],
                                                                   line:  1, },
                                                line: 1, }]);
    }

    #[test]
    fn parenthesized_list_is_a_tuple() {
        let program = parse_source("(3, 2)").unwrap();
        assert_eq!(program,
                   vec![Statement::Expression { expr: Expr::Tuple { elements: vec![number(3.0, 1),
                                                                                   number(2.0, 1)],
                                                                    line:     1, },
                                                line: 1, }]);
    }

    #[test]
    fn signs_repeat_and_plus_is_identity() {
        let program = parse_source("-5++1").unwrap();
        let expected = Expr::Additive { operands:  vec![Expr::Negate { expr: Box::new(number(5.0, 1)),
                                                                       line: 1, },
                                                        number(1.0, 1)],
                                        operators: vec![BinaryOperator::Add],
                                        line:      1, };
        assert_eq!(program,
                   vec![Statement::Expression { expr: expected,
                                                line: 1, }]);
    }

    #[test]
    fn separators_and_blank_lines_split_statements() {
        let program = parse_source("\n\na = 3;; b = 2\n\nb\n").unwrap();
        assert_eq!(program.len(), 3);
        assert!(matches!(&program[0], Statement::Assignment { name, line: 3, .. } if name == "a"));
        assert!(matches!(&program[2], Statement::Expression { line: 5, .. }));
    }

    #[test]
    fn unbalanced_parenthesis_is_an_error() {
        assert_eq!(parse_source("7 / 5 * ((2 + 2) / 3"),
                   Err(ParseError::ExpectedClosingParen { line: 1 }));
    }

    #[test]
    fn stray_characters_are_reported() {
        assert_eq!(parse_source("2 +\n3 $"),
                   Err(ParseError::UnexpectedToken { token: "$".to_string(),
                                                     line:  2, }));
        assert_eq!(parse_source("1 + ."),
                   Err(ParseError::InvalidNumber { literal: ".".to_string(),
                                                   line:    1, }));
        assert_eq!(parse_source("x = 2\ny = 1."),
                   Err(ParseError::InvalidNumber { literal: "1.".to_string(),
                                                   line:    2, }));
    }

    #[test]
    fn dangling_operator_is_an_error() {
        assert!(parse_source("2 +").is_err());
        assert!(parse_source("2 )").is_err());
    }
}
