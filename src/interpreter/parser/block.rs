use std::iter::Peekable;

use crate::{
    ast::Block,
    interpreter::{
        lexer::{Spanned, Token},
        parser::{
            core::ParseResult,
            statement::parse_statement,
            utils::{end_of_input, expect_token},
        },
    },
};

/// Parses a brace-delimited block.
///
/// A block consists of `{`, zero or more statements, and a closing `}`.
/// Each block introduces its own lexical scope at evaluation time.
///
/// Grammar: `block := "{" statement* "}"`
///
/// # Parameters
/// - `tokens`: Token stream positioned at the opening brace.
///
/// # Returns
/// A [`Block`] containing all parsed statements.
pub fn parse_block<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Block>
    where I: Iterator<Item = &'a Spanned> + Clone
{
    expect_token(tokens, &Token::LBrace, "'{'")?;

    let mut statements = Vec::new();
    loop {
        match tokens.peek() {
            Some(Spanned { token: Token::RBrace, .. }) => {
                tokens.next();
                break;
            },
            Some(_) => statements.push(parse_statement(tokens)?),
            None => return Err(end_of_input()),
        }
    }

    Ok(Block { statements })
}
