use std::iter::Peekable;

use crate::{
    ast::{Expr, Program, TopLevel},
    error::ParseError,
    interpreter::{
        lexer::{Spanned, Token},
        parser::{
            binary::parse_logical_or,
            block::parse_block,
            utils::{end_of_input, expect_token},
        },
    },
};

/// Result type used throughout the parser.
pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a full expression.
///
/// This is the entry point for expression parsing. It begins at the
/// lowest-precedence level, logical OR, and recursively descends through
/// the precedence hierarchy.
///
/// Grammar: `expression := logical_or`
///
/// # Parameters
/// - `tokens`: Token iterator providing [`Spanned`] tokens.
///
/// # Returns
/// The parsed expression node.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Spanned> + Clone
{
    parse_logical_or(tokens)
}

/// Parses a complete program from its token stream.
///
/// The program shell is:
///
/// ```text
/// @VoidApp "<name>" ;
/// [ using style "<style>" ; ]
/// main ( ) block
/// [ @VoidEnd ; ]
/// ```
///
/// Exactly one `main` block is required. The driver may already have
/// truncated the source at `@VoidEnd;`; both a present and an absent
/// trailing marker are accepted. Tokens after the marker are an error.
///
/// # Errors
/// Returns a `ParseError` for a missing or malformed header, any top-level
/// form other than `main`, a missing or repeated `main` block, or trailing
/// tokens after `@VoidEnd;`.
///
/// # Example
/// ```
/// use voidlang::interpreter::{lexer::lex, parser::core::parse_program};
///
/// let tokens = lex("@VoidApp \"Demo\"; main() { echo(1); } @VoidEnd;").unwrap();
/// let program = parse_program(&tokens).unwrap();
///
/// assert_eq!(program.app_name, "Demo");
/// assert_eq!(program.body.len(), 1);
/// ```
pub fn parse_program(tokens: &[Spanned]) -> ParseResult<Program> {
    let mut iter = tokens.iter().peekable();

    match iter.next() {
        Some(Spanned { token: Token::AppDirective, .. }) => {},
        Some(sp) => {
            return Err(ParseError::InvalidHeader { details: format!("expected '@VoidApp', found {}", sp.token),
                                                   line:    sp.line,
                                                   column:  sp.column, });
        },
        None => {
            return Err(ParseError::InvalidHeader { details: "the source is empty".to_string(),
                                                   line:    1,
                                                   column:  1, });
        },
    }

    let app_name = match iter.next() {
        Some(Spanned { token: Token::Str(name), .. }) => name.clone(),
        Some(sp) => {
            return Err(ParseError::InvalidHeader { details: format!("expected the application name string, found {}", sp.token),
                                                   line:    sp.line,
                                                   column:  sp.column, });
        },
        None => return Err(end_of_input()),
    };
    expect_token(&mut iter, &Token::Semicolon, "';' after the application name")?;

    let style = parse_style_directive(&mut iter)?;

    let mut body = Vec::new();
    loop {
        match iter.peek() {
            Some(Spanned { token: Token::EndDirective, .. }) => {
                iter.next();
                expect_token(&mut iter, &Token::Semicolon, "';' after '@VoidEnd'")?;
                if let Some(extra) = iter.next() {
                    return Err(ParseError::UnexpectedTrailingTokens { token:  extra.token.to_string(),
                                                                      line:   extra.line,
                                                                      column: extra.column, });
                }
                break;
            },
            Some(Spanned { token: Token::Main, line, column }) => {
                let (line, column) = (*line, *column);
                if !body.is_empty() {
                    return Err(ParseError::ExpectedToken { expected: "'@VoidEnd' or the end of the program".to_string(),
                                                           found:    "a second 'main' block".to_string(),
                                                           line,
                                                           column, });
                }
                iter.next();
                expect_token(&mut iter, &Token::LParen, "'(' after 'main'")?;
                expect_token(&mut iter, &Token::RParen, "')'")?;
                let block = parse_block(&mut iter)?;
                body.push(TopLevel::Main { body: block, line });
            },
            Some(sp) => {
                return Err(ParseError::ExpectedToken { expected: "'main' or '@VoidEnd'".to_string(),
                                                       found:    sp.token.to_string(),
                                                       line:     sp.line,
                                                       column:   sp.column, });
            },
            None => break,
        }
    }

    if body.is_empty() {
        let last = tokens.last().expect("the header is non-empty");
        return Err(ParseError::MissingMainBlock { line:   last.line,
                                                  column: last.column, });
    }

    Ok(Program { app_name, style, body })
}

/// Parses the optional `using style "<name>";` directive.
fn parse_style_directive<'a, I>(iter: &mut Peekable<I>) -> ParseResult<Option<String>>
    where I: Iterator<Item = &'a Spanned>
{
    if let Some(Spanned { token: Token::Using, .. }) = iter.peek() {
        iter.next();
        expect_token(iter, &Token::Style, "'style' after 'using'")?;
        let name = match iter.next() {
            Some(Spanned { token: Token::Str(name), .. }) => name.clone(),
            Some(sp) => {
                return Err(ParseError::ExpectedToken { expected: "a style name string".to_string(),
                                                       found:    sp.token.to_string(),
                                                       line:     sp.line,
                                                       column:   sp.column, });
            },
            None => return Err(end_of_input()),
        };
        expect_token(iter, &Token::Semicolon, "';' after the style name")?;
        Ok(Some(name))
    } else {
        Ok(None)
    }
}
