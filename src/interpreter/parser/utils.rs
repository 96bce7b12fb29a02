use std::iter::Peekable;

use crate::{
    error::ParseError,
    interpreter::{
        lexer::{Spanned, Token},
        parser::core::ParseResult,
    },
};

/// Builds the error for a token stream that ended mid-construct.
pub(in crate::interpreter::parser) const fn end_of_input() -> ParseError {
    ParseError::UnexpectedEndOfInput { line: 0, column: 0 }
}

/// Consumes the next token, which must equal `expected`.
///
/// `description` is the source spelling shown in diagnostics, e.g. `"';'"`.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the expected token.
/// - `expected`: The token that must come next.
/// - `description`: How to name the expectation in an error message.
///
/// # Returns
/// The (line, column) of the consumed token.
///
/// # Errors
/// Returns a `ParseError` if a different token or the end of input is
/// found.
pub(in crate::interpreter::parser) fn expect_token<'a, I>(tokens: &mut Peekable<I>,
                                                          expected: &Token,
                                                          description: &str)
                                                          -> ParseResult<(usize, usize)>
    where I: Iterator<Item = &'a Spanned>
{
    match tokens.next() {
        Some(sp) if sp.token == *expected => Ok((sp.line, sp.column)),
        Some(sp) => Err(ParseError::ExpectedToken { expected: description.to_string(),
                                                    found:    sp.token.to_string(),
                                                    line:     sp.line,
                                                    column:   sp.column, }),
        None => Err(end_of_input()),
    }
}

/// Parses a plain identifier and returns its name and line.
///
/// The next token must be `Token::Identifier`.
///
/// # Errors
/// Returns a `ParseError` if the next token is not an identifier or the
/// input ends unexpectedly.
pub(in crate::interpreter::parser) fn parse_identifier<'a, I>(tokens: &mut Peekable<I>)
                                                              -> ParseResult<(String, usize)>
    where I: Iterator<Item = &'a Spanned>
{
    match tokens.next() {
        Some(Spanned { token: Token::Identifier(name),
                       line,
                       .. }) => Ok((name.clone(), *line)),
        Some(sp) => Err(ParseError::ExpectedToken { expected: "an identifier".to_string(),
                                                    found:    sp.token.to_string(),
                                                    line:     sp.line,
                                                    column:   sp.column, }),
        None => Err(end_of_input()),
    }
}

/// Parses a comma-separated list of items until a closing token.
///
/// This utility is shared by list literals, echo arguments, and call
/// argument lists. It repeatedly calls `parse_item` to parse one element,
/// expecting either:
///
/// - a comma, to continue the list, or
/// - the specified closing token, to end it.
///
/// An immediately encountered closing token produces an empty list. A
/// trailing comma is rejected, because after a comma another item is
/// required.
///
/// Grammar (simplified): `list := item ("," item)*`
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the first item or closing
///   token.
/// - `parse_item`: Function used to parse each list element.
/// - `closing`: The token that terminates the list (e.g., `]` or `)`).
///
/// # Errors
/// Returns a `ParseError` if an item fails to parse, an unexpected token is
/// encountered, or the stream ends before the closing token.
pub(in crate::interpreter::parser) fn parse_comma_separated<'a, I, T>(
    tokens: &mut Peekable<I>,
    parse_item: impl Fn(&mut Peekable<I>) -> ParseResult<T>,
    closing: &Token)
    -> ParseResult<Vec<T>>
    where I: Iterator<Item = &'a Spanned> + Clone
{
    let mut items = Vec::new();
    if let Some(sp) = tokens.peek()
       && sp.token == *closing
    {
        tokens.next();

        return Ok(items);
    }
    loop {
        items.push(parse_item(tokens)?);
        match tokens.next() {
            Some(Spanned { token: Token::Comma, .. }) => {},
            Some(sp) if sp.token == *closing => break,
            Some(sp) => {
                return Err(ParseError::ExpectedToken { expected: format!("',' or {closing}"),
                                                       found:    sp.token.to_string(),
                                                       line:     sp.line,
                                                       column:   sp.column, });
            },
            None => return Err(end_of_input()),
        }
    }
    Ok(items)
}
