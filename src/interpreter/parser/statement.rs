use std::iter::Peekable;

use crate::{
    ast::Statement,
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, parse_expression},
    },
};

/// Parses a single statement.
///
/// A statement is either an assignment (`name = expression`) or a bare
/// expression. `clear` is not special here: it is an ordinary symbol that the
/// evaluator resolves to the registry-reset function.
///
/// # Parameters
/// - `tokens`: Token iterator containing `(Token, line)` pairs.
///
/// # Returns
/// A parsed [`Statement`] node.
pub fn parse_statement<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    if let Some(statement) = parse_assignment(tokens)? {
        return Ok(statement);
    }

    let current_line = tokens.peek().map_or(0, |(_, l)| *l);
    let expr = parse_expression(tokens)?;

    Ok(Statement::Expression { expr,
                               line: current_line })
}

/// Parses an assignment of the form `name = expression`.
///
/// Uses one token of lookahead on a cloned iterator; if the identifier is not
/// followed by `=`, nothing is consumed and `Ok(None)` is returned.
///
/// # Parameters
/// - `tokens`: Token stream positioned at a possible identifier.
///
/// # Returns
/// - `Ok(Some(statement))` if an assignment was parsed,
/// - `Ok(None)` if the tokens do not start an assignment.
fn parse_assignment<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Option<Statement>>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let Some((Token::Identifier(name), _)) = tokens.peek() else {
        return Ok(None);
    };
    let name = name.clone();

    let mut lookahead = tokens.clone();
    lookahead.next();
    let Some((Token::Equals, line)) = lookahead.peek() else {
        return Ok(None);
    };
    let line = *line;

    tokens.next();
    tokens.next();

    let value = parse_expression(tokens)?;
    Ok(Some(Statement::Assignment { name,
                                    value,
                                    line }))
}
