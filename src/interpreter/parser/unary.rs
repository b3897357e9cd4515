use std::iter::Peekable;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, parse_expression},
    },
};

/// Parses a signed atom.
///
/// Supports the prefix operators:
/// - `-`  (negation, evaluated as multiplication by `-1`)
/// - `+`  (identity)
///
/// Signs may repeat, so `-5++1` parses as `(-5) + (+1)`.
///
/// Grammar:
/// ```text
///     signed_atom := ("-" | "+") signed_atom
///                  | call
/// ```
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
///
/// # Returns
/// An [`Expr::Negate`] or a call chain / atom.
pub(crate) fn parse_signed_atom<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    match tokens.peek() {
        Some((Token::Minus, line)) => {
            tokens.next();
            let expr = parse_signed_atom(tokens)?;
            Ok(Expr::Negate { expr: Box::new(expr),
                              line: *line, })
        },
        Some((Token::Plus, _)) => {
            tokens.next();
            parse_signed_atom(tokens)
        },
        _ => parse_call(tokens),
    }
}

/// Parses a call chain of juxtaposed atoms.
///
/// Juxtaposition covers function application (`sin 0`, `f(x, y)`), unit
/// tagging (`2 deg`) and mixed-unit literals (`1h 30m`). Which of these a
/// chain means is decided at evaluation time.
///
/// Grammar: `call := atom+`
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the first atom.
///
/// # Returns
/// An [`Expr::Call`] when two or more atoms follow each other, otherwise the
/// single atom.
fn parse_call<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let first = parse_atom(tokens)?;
    let line = first.line();
    let mut atoms = vec![first];

    while let Some((token, _)) = tokens.peek()
          && token.starts_atom()
    {
        atoms.push(parse_atom(tokens)?);
    }

    if atoms.len() == 1 {
        return Ok(atoms.remove(0));
    }
    Ok(Expr::Call { atoms, line })
}

/// Parses an atom: a number, a symbol, or a parenthesized expression.
///
/// Grammar: `atom := NUMBER | SYMBOL | "(" expression ")"`
///
/// # Errors
/// - `UnexpectedToken` for any other token.
/// - `UnexpectedEndOfInput` when the stream is exhausted.
fn parse_atom<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let peeked = tokens.peek()
                       .ok_or(ParseError::UnexpectedEndOfInput { line: 0 })?;

    match peeked {
        (Token::Number(value), line) => {
            let expr = Expr::Number { value: *value,
                                      line:  *line, };
            tokens.next();
            Ok(expr)
        },
        (Token::Identifier(name), line) => {
            let expr = Expr::Symbol { name: name.clone(),
                                      line: *line, };
            tokens.next();
            Ok(expr)
        },
        (Token::LParen, _) => parse_grouping(tokens),
        (tok, line) => Err(ParseError::UnexpectedToken { token: format!("{tok:?}"),
                                                         line:  *line, }),
    }
}

/// Parses an expression wrapped in parentheses.
///
/// The inner expression may be a comma separated list, which yields an
/// [`Expr::Tuple`].
///
/// # Errors
/// Returns `ExpectedClosingParen` with the line of the opening parenthesis if
/// the matching `)` is missing.
fn parse_grouping<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let line = match tokens.next() {
        Some((Token::LParen, line)) => *line,
        Some((tok, line)) => {
            return Err(ParseError::UnexpectedToken { token: format!("Expected '(', found {tok:?}"),
                                                     line:  *line, });
        },
        None => return Err(ParseError::UnexpectedEndOfInput { line: 0 }),
    };

    let expr = parse_expression(tokens)?;
    match tokens.next() {
        Some((Token::RParen, _)) => Ok(expr),
        _ => Err(ParseError::ExpectedClosingParen { line }),
    }
}
