use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        lexer::{Spanned, Token},
        parser::{core::ParseResult, unary::parse_unary},
    },
};

/// Maps a token to its corresponding binary operator.
///
/// Returns `Some(BinaryOperator)` when the token represents a binary
/// operator, `None` for all other tokens.
///
/// # Example
/// ```
/// use voidlang::{
///     ast::BinaryOperator,
///     interpreter::{lexer::Token, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(&Token::Plus),
///            Some(BinaryOperator::Add));
/// assert_eq!(token_to_binary_operator(&Token::Semicolon), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Star => Some(BinaryOperator::Mul),
        Token::Slash => Some(BinaryOperator::Div),
        Token::Percent => Some(BinaryOperator::Mod),
        Token::DoubleStar => Some(BinaryOperator::Pow),
        Token::Less => Some(BinaryOperator::Less),
        Token::Greater => Some(BinaryOperator::Greater),
        Token::LessEqual => Some(BinaryOperator::LessEqual),
        Token::GreaterEqual => Some(BinaryOperator::GreaterEqual),
        Token::EqualEqual => Some(BinaryOperator::Equal),
        Token::BangEqual => Some(BinaryOperator::NotEqual),
        Token::AmpAmp => Some(BinaryOperator::And),
        Token::PipePipe => Some(BinaryOperator::Or),
        _ => None,
    }
}

/// Parses logical OR expressions, the lowest precedence level.
///
/// Grammar: `logical_or := logical_and ("||" logical_and)*`
///
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
///
/// # Returns
/// A binary expression tree using `BinaryOperator::Or`.
pub fn parse_logical_or<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Spanned> + Clone
{
    parse_left_associative(tokens,
                           parse_logical_and,
                           |op| matches!(op, BinaryOperator::Or))
}

/// Parses logical AND expressions.
///
/// Grammar: `logical_and := equality ("&&" equality)*`
pub fn parse_logical_and<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Spanned> + Clone
{
    parse_left_associative(tokens,
                           parse_equality,
                           |op| matches!(op, BinaryOperator::And))
}

/// Parses equality expressions.
///
/// Grammar: `equality := relational (("==" | "!=") relational)*`
pub fn parse_equality<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Spanned> + Clone
{
    parse_left_associative(tokens, parse_relational, |op| {
        matches!(op, BinaryOperator::Equal | BinaryOperator::NotEqual)
    })
}

/// Parses relational expressions.
///
/// Grammar: `relational := additive (("<" | ">" | "<=" | ">=") additive)*`
pub fn parse_relational<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Spanned> + Clone
{
    parse_left_associative(tokens, parse_additive, |op| {
        matches!(op,
                 BinaryOperator::Less
                 | BinaryOperator::Greater
                 | BinaryOperator::LessEqual
                 | BinaryOperator::GreaterEqual)
    })
}

/// Parses addition and subtraction expressions.
///
/// Grammar: `additive := multiplicative (("+" | "-") multiplicative)*`
pub fn parse_additive<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Spanned> + Clone
{
    parse_left_associative(tokens, parse_multiplicative, |op| {
        matches!(op, BinaryOperator::Add | BinaryOperator::Sub)
    })
}

/// Parses multiplication-level expressions.
///
/// Grammar: `multiplicative := power (("*" | "/" | "%") power)*`
pub fn parse_multiplicative<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Spanned> + Clone
{
    parse_left_associative(tokens, parse_power, |op| {
        matches!(op,
                 BinaryOperator::Mul | BinaryOperator::Div | BinaryOperator::Mod)
    })
}

/// Parses exponentiation expressions.
///
/// `**` is right-associative: `2 ** 3 ** 2` parses as `2 ** (3 ** 2)`.
///
/// Grammar: `power := unary ("**" power)?`
pub fn parse_power<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Spanned> + Clone
{
    let left = parse_unary(tokens)?;

    if let Some(Spanned { token: Token::DoubleStar,
                          line,
                          .. }) = tokens.peek()
    {
        let line = *line;
        tokens.next();

        let right = parse_power(tokens)?;
        return Ok(Expr::Binary { left: Box::new(left),
                                 op: BinaryOperator::Pow,
                                 right: Box::new(right),
                                 line });
    }

    Ok(left)
}

/// Parses one left-associative precedence level.
///
/// Repeatedly parses `next_level` operands joined by any operator that
/// `belongs` accepts, folding them into a left-leaning tree.
fn parse_left_associative<'a, I>(tokens: &mut Peekable<I>,
                                 next_level: fn(&mut Peekable<I>) -> ParseResult<Expr>,
                                 belongs: fn(BinaryOperator) -> bool)
                                 -> ParseResult<Expr>
    where I: Iterator<Item = &'a Spanned> + Clone
{
    let mut left = next_level(tokens)?;
    loop {
        if let Some(sp) = tokens.peek()
           && let Some(op) = token_to_binary_operator(&sp.token)
           && belongs(op)
        {
            let line = sp.line;
            tokens.next();

            let right = next_level(tokens)?;
            left = Expr::Binary { left: Box::new(left),
                                  op,
                                  right: Box::new(right),
                                  line };
            continue;
        }
        break;
    }
    Ok(left)
}
