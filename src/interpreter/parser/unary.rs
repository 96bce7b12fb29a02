use std::iter::Peekable;

use crate::{
    ast::{Expr, LiteralValue, UnaryOperator},
    error::ParseError,
    interpreter::{
        lexer::{Spanned, Token},
        parser::{
            core::{ParseResult, parse_expression},
            utils::{end_of_input, expect_token, parse_comma_separated},
        },
    },
};

/// Parses a unary expression.
///
/// Supports prefix operators:
/// - `-`  (numeric negation)
/// - `!`  (logical not)
///
/// Unary operators are right-associative, so an input like `!-x` is parsed
/// as `!( -x )`.
///
/// If no unary operator is present, the function delegates to
/// [`parse_primary`] and then applies any postfix indexing via
/// [`parse_postfix`].
///
/// Grammar:
/// ```text
///     unary := ("-" | "!") unary
///            | primary postfix*
/// ```
pub(crate) fn parse_unary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Spanned> + Clone
{
    if let Some(Spanned { token: Token::Minus, line, .. }) = tokens.peek() {
        let line = *line;
        tokens.next();
        let expr = parse_unary(tokens)?;
        Ok(Expr::Unary { op: UnaryOperator::Negate,
                         expr: Box::new(expr),
                         line })
    } else if let Some(Spanned { token: Token::Bang, line, .. }) = tokens.peek() {
        let line = *line;
        tokens.next();
        let expr = parse_unary(tokens)?;
        Ok(Expr::Unary { op: UnaryOperator::Not,
                         expr: Box::new(expr),
                         line })
    } else {
        let primary = parse_primary(tokens)?;
        parse_postfix(tokens, primary)
    }
}

/// Parses chained postfix indexing applied to an expression.
///
/// Multiple chained indices are allowed, e.g. `grid[0][1]`.
///
/// Grammar:
/// ```text
///     postfix := primary ("[" expression "]")*
/// ```
fn parse_postfix<'a, I>(tokens: &mut Peekable<I>, mut node: Expr) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Spanned> + Clone
{
    while let Some(Spanned { token: Token::LBracket,
                             line,
                             .. }) = tokens.peek()
    {
        let line = *line;
        tokens.next();

        let index = parse_expression(tokens)?;
        expect_token(tokens, &Token::RBracket, "']'")?;

        node = Expr::Index { object: Box::new(node),
                             index: Box::new(index),
                             line };
    }
    Ok(node)
}

/// Parses a primary (atomic) expression.
///
/// Primary expressions form the base of the expression grammar and
/// include:
/// - int, float, string, and boolean literals
/// - list literals (`[ … ]`) and dictionary literals (`{ k : v, … }`)
/// - identifiers and function calls
/// - `write(prompt)` and `rand(min, max)`
/// - parenthesized expressions
///
/// Grammar (simplified):
/// ```text
///     primary := literal
///              | "[" elements "]"
///              | "{" entries "}"
///              | identifier ["(" args ")"]
///              | "write" "(" expression ")"
///              | "rand" "(" expression "," expression ")"
///              | "(" expression ")"
/// ```
pub(crate) fn parse_primary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Spanned> + Clone
{
    match tokens.peek() {
        Some(Spanned { token: Token::Int(_) | Token::Float(_) | Token::Str(_) | Token::Bool(_),
                       .. }) => parse_literal(tokens),
        Some(Spanned { token: Token::LBracket, .. }) => parse_list_literal(tokens),
        Some(Spanned { token: Token::LBrace, .. }) => parse_dict_literal(tokens),
        Some(Spanned { token: Token::LParen, .. }) => parse_grouping(tokens),
        Some(Spanned { token: Token::Write, .. }) => parse_write(tokens),
        Some(Spanned { token: Token::Rand, .. }) => parse_rand(tokens),
        Some(Spanned { token: Token::Identifier(_), .. }) => parse_identifier_or_call(tokens),
        Some(sp) => Err(ParseError::UnexpectedToken { token:  sp.token.to_string(),
                                                      line:   sp.line,
                                                      column: sp.column, }),
        None => Err(end_of_input()),
    }
}

/// Parses an int, float, string, or boolean literal.
fn parse_literal<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Spanned> + Clone
{
    let Some(sp) = tokens.next() else {
        return Err(end_of_input());
    };
    let value = match &sp.token {
        Token::Int(n) => LiteralValue::Int(*n),
        Token::Float(n) => LiteralValue::Float(*n),
        Token::Str(s) => LiteralValue::Str(s.clone()),
        Token::Bool(b) => LiteralValue::Bool(*b),
        _ => unreachable!("parse_primary dispatched on a literal token"),
    };
    Ok(Expr::Literal { value, line: sp.line })
}

/// Parses a list literal of the form `[expr1, expr2, …, exprN]`.
///
/// An empty list `[]` is accepted; a trailing comma is not.
fn parse_list_literal<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Spanned> + Clone
{
    let Some(sp) = tokens.next() else {
        return Err(end_of_input());
    };
    let line = sp.line;
    let elements = parse_comma_separated(tokens, parse_expression, &Token::RBracket)?;
    Ok(Expr::ListLiteral { elements, line })
}

/// Parses a dictionary literal of the form `{ key : value, … }`.
///
/// Keys are arbitrary expressions; the `:` between key and value is
/// mandatory. An empty dictionary `{}` is accepted; a trailing comma is
/// not.
fn parse_dict_literal<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Spanned> + Clone
{
    let Some(sp) = tokens.next() else {
        return Err(end_of_input());
    };
    let line = sp.line;

    let mut entries = Vec::new();
    if let Some(Spanned { token: Token::RBrace, .. }) = tokens.peek() {
        tokens.next();
        return Ok(Expr::DictLiteral { entries, line });
    }
    loop {
        let key = parse_expression(tokens)?;
        expect_token(tokens, &Token::Colon, "':' between key and value")?;
        let value = parse_expression(tokens)?;
        entries.push((key, value));

        match tokens.next() {
            Some(Spanned { token: Token::Comma, .. }) => {},
            Some(Spanned { token: Token::RBrace, .. }) => break,
            Some(sp) => {
                return Err(ParseError::ExpectedToken { expected: "',' or '}'".to_string(),
                                                       found:    sp.token.to_string(),
                                                       line:     sp.line,
                                                       column:   sp.column, });
            },
            None => return Err(end_of_input()),
        }
    }
    Ok(Expr::DictLiteral { entries, line })
}

/// Parses a parenthesized expression.
///
/// The inner expression is returned as-is (no wrapper node).
fn parse_grouping<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Spanned> + Clone
{
    tokens.next();
    let expr = parse_expression(tokens)?;
    expect_token(tokens, &Token::RParen, "')'")?;
    Ok(expr)
}

/// Parses a `write(prompt)` expression.
fn parse_write<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Spanned> + Clone
{
    let Some(sp) = tokens.next() else {
        return Err(end_of_input());
    };
    let line = sp.line;
    expect_token(tokens, &Token::LParen, "'(' after 'write'")?;
    let prompt = parse_expression(tokens)?;
    expect_token(tokens, &Token::RParen, "')'")?;
    Ok(Expr::Write { prompt: Box::new(prompt),
                     line })
}

/// Parses a `rand(min, max)` expression.
fn parse_rand<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Spanned> + Clone
{
    let Some(sp) = tokens.next() else {
        return Err(end_of_input());
    };
    let line = sp.line;
    expect_token(tokens, &Token::LParen, "'(' after 'rand'")?;
    let min = parse_expression(tokens)?;
    expect_token(tokens, &Token::Comma, "','")?;
    let max = parse_expression(tokens)?;
    expect_token(tokens, &Token::RParen, "')'")?;
    Ok(Expr::Rand { min: Box::new(min),
                    max: Box::new(max),
                    line })
}

/// Parses an identifier or a function-call expression.
///
/// If the identifier is immediately followed by `(`, a call expression is
/// parsed; otherwise it is a variable reference.
fn parse_identifier_or_call<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Spanned> + Clone
{
    let (name, line) = match tokens.next() {
        Some(Spanned { token: Token::Identifier(n),
                       line,
                       .. }) => (n.clone(), *line),
        Some(sp) => {
            return Err(ParseError::UnexpectedToken { token:  sp.token.to_string(),
                                                     line:   sp.line,
                                                     column: sp.column, });
        },
        None => return Err(end_of_input()),
    };

    if let Some(Spanned { token: Token::LParen, .. }) = tokens.peek() {
        tokens.next();
        let args = parse_comma_separated(tokens, parse_expression, &Token::RParen)?;
        Ok(Expr::Call { name, args, line })
    } else {
        Ok(Expr::Variable { name, line })
    }
}
