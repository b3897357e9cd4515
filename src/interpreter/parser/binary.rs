use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        lexer::Token,
        parser::{core::ParseResult, unary::parse_signed_atom},
    },
};

/// Parses addition and subtraction expressions.
///
/// Handles left-associative binary operators: `+` and `-`. All operands of the
/// level are collected into one `Expr::Additive` node.
///
/// The rule is: `additive := multiplicative (("+" | "-") multiplicative)*`
///
/// # Parameters
/// - `tokens`: Token stream with line information.
///
/// # Returns
/// An `Expr::Additive` chain, or the single operand if no operator follows.
pub fn parse_additive<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let first = parse_multiplicative(tokens)?;
    let line = first.line();
    let mut operands = vec![first];
    let mut operators = Vec::new();

    while let Some((token, _)) = tokens.peek()
          && let Some(op) = token_to_binary_operator(token)
          && matches!(op, BinaryOperator::Add | BinaryOperator::Sub)
    {
        tokens.next();
        operators.push(op);
        operands.push(parse_multiplicative(tokens)?);
    }

    Ok(chain(operands, operators, line, |operands, operators, line| {
        Expr::Additive { operands,
                         operators,
                         line }
    }))
}

/// Parses multiplication-level expressions.
///
/// Handles left-associative operators: `*`, `/` and `%`.
///
/// The rule is: `multiplicative := exponential (("*" | "/" | "%")
/// exponential)*`
///
/// # Parameters
/// - `tokens`: Token stream with line information.
///
/// # Returns
/// An `Expr::Multiplicative` chain, or the single operand.
pub fn parse_multiplicative<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let first = parse_exponential(tokens)?;
    let line = first.line();
    let mut operands = vec![first];
    let mut operators = Vec::new();

    while let Some((token, _)) = tokens.peek()
          && let Some(op) = token_to_binary_operator(token)
          && matches!(op, BinaryOperator::Mul | BinaryOperator::Div | BinaryOperator::Mod)
    {
        tokens.next();
        operators.push(op);
        operands.push(parse_exponential(tokens)?);
    }

    Ok(chain(operands, operators, line, |operands, operators, line| {
        Expr::Multiplicative { operands,
                               operators,
                               line }
    }))
}

/// Parses exponentiation expressions.
///
/// Operands are collected in source order; the evaluator folds them from the
/// right, so `a ^ b ^ c` means `a ^ (b ^ c)`. `**` is accepted as an alias.
///
/// The rule is: `exponential := signed_atom (("^" | "**") signed_atom)*`
///
/// # Parameters
/// - `tokens`: Token stream.
///
/// # Returns
/// An `Expr::Exponential` chain, or the single operand.
pub fn parse_exponential<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let first = parse_signed_atom(tokens)?;
    let line = first.line();
    let mut operands = vec![first];

    while let Some((token, _)) = tokens.peek()
          && token_to_binary_operator(token) == Some(BinaryOperator::Pow)
    {
        tokens.next();
        operands.push(parse_signed_atom(tokens)?);
    }

    if operands.len() == 1 {
        return Ok(operands.remove(0));
    }
    Ok(Expr::Exponential { operands, line })
}

/// Maps a token to its corresponding binary operator.
///
/// Returns `None` for all tokens that are not arithmetic operators.
///
/// # Example
/// ```
/// use symcalc::{
///     ast::BinaryOperator,
///     interpreter::{lexer::Token, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(&Token::StarStar), Some(BinaryOperator::Pow));
/// assert_eq!(token_to_binary_operator(&Token::Comma), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Star => Some(BinaryOperator::Mul),
        Token::Slash => Some(BinaryOperator::Div),
        Token::Percent => Some(BinaryOperator::Mod),
        Token::Caret | Token::StarStar => Some(BinaryOperator::Pow),
        _ => None,
    }
}

/// Builds a chain node, or returns the lone operand when no operator was
/// consumed.
fn chain(mut operands: Vec<Expr>,
         operators: Vec<BinaryOperator>,
         line: usize,
         build: impl FnOnce(Vec<Expr>, Vec<BinaryOperator>, usize) -> Expr)
         -> Expr {
    if operators.is_empty() {
        operands.remove(0)
    } else {
        build(operands, operators, line)
    }
}
