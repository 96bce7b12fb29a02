use std::iter::Peekable;

use crate::{
    ast::{CollectionKind, CollectionMethod, ElseArm, Stmt, VarType},
    error::ParseError,
    interpreter::{
        lexer::{Spanned, Token},
        parser::{
            block::parse_block,
            core::{ParseResult, parse_expression},
            utils::{end_of_input, expect_token, parse_comma_separated, parse_identifier},
        },
    },
};

/// Parses a single statement.
///
/// A statement may be one of:
/// - `echo(…);`
/// - `create:<type> name = expr;`
/// - an assignment, indexed assignment, method call, or call statement,
///   all of which begin with an identifier,
/// - `if`, `while`, or `for`.
///
/// The leading token decides the form; anything else is a parse error.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of a statement.
///
/// # Returns
/// A parsed [`Stmt`] node.
pub fn parse_statement<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Stmt>
    where I: Iterator<Item = &'a Spanned> + Clone
{
    match tokens.peek() {
        Some(Spanned { token: Token::Echo, .. }) => parse_echo(tokens),
        Some(Spanned { token: Token::Create, .. }) => parse_create(tokens),
        Some(Spanned { token: Token::If, .. }) => parse_if(tokens),
        Some(Spanned { token: Token::While, .. }) => parse_while(tokens),
        Some(Spanned { token: Token::For, .. }) => parse_for(tokens),
        Some(Spanned { token: Token::Identifier(_), .. }) => parse_identifier_statement(tokens),
        Some(sp) => Err(ParseError::UnexpectedToken { token:  sp.token.to_string(),
                                                      line:   sp.line,
                                                      column: sp.column, }),
        None => Err(end_of_input()),
    }
}

/// Parses an `echo(e1, e2, …);` statement. At least one argument is
/// required.
fn parse_echo<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Stmt>
    where I: Iterator<Item = &'a Spanned> + Clone
{
    let Some(first) = tokens.next() else {
        return Err(end_of_input());
    };
    let line = first.line;

    expect_token(tokens, &Token::LParen, "'(' after 'echo'")?;
    let mut args = vec![parse_expression(tokens)?];
    loop {
        match tokens.next() {
            Some(Spanned { token: Token::Comma, .. }) => args.push(parse_expression(tokens)?),
            Some(Spanned { token: Token::RParen, .. }) => break,
            Some(sp) => {
                return Err(ParseError::ExpectedToken { expected: "',' or ')'".to_string(),
                                                       found:    sp.token.to_string(),
                                                       line:     sp.line,
                                                       column:   sp.column, });
            },
            None => return Err(end_of_input()),
        }
    }
    expect_token(tokens, &Token::Semicolon, "';' after 'echo'")?;

    Ok(Stmt::Echo { args, line })
}

/// Parses a declaration: `create:<type> name = expr;`.
///
/// The type must be one of the six type names; the initializer is
/// mandatory.
fn parse_create<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Stmt>
    where I: Iterator<Item = &'a Spanned> + Clone
{
    let Some(first) = tokens.next() else {
        return Err(end_of_input());
    };
    let line = first.line;

    let declared = match tokens.next() {
        Some(sp) => match &sp.token {
            Token::StringType => VarType::String,
            Token::IntType => VarType::Int,
            Token::FloatType => VarType::Float,
            Token::BoolType => VarType::Bool,
            Token::ListType => VarType::List,
            Token::DictType => VarType::Dict,
            other => {
                return Err(ParseError::ExpectedTypeName { found:  other.to_string(),
                                                          line:   sp.line,
                                                          column: sp.column, });
            },
        },
        None => return Err(end_of_input()),
    };

    let (name, _) = parse_identifier(tokens)?;
    expect_token(tokens, &Token::Equals, "'='")?;
    let init = parse_expression(tokens)?;
    expect_token(tokens, &Token::Semicolon, "';' after the declaration")?;

    Ok(Stmt::CreateVar { declared, name, init, line })
}

/// Parses the statements that begin with an identifier.
///
/// The token after the name picks the form:
/// - `=` — assignment
/// - `[` — indexed assignment
/// - `.` — collection method call
/// - `(` — call statement
fn parse_identifier_statement<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Stmt>
    where I: Iterator<Item = &'a Spanned> + Clone
{
    let (name, line) = parse_identifier(tokens)?;

    match tokens.peek() {
        Some(Spanned { token: Token::Equals, .. }) => {
            tokens.next();
            let value = parse_expression(tokens)?;
            expect_token(tokens, &Token::Semicolon, "';' after the assignment")?;
            Ok(Stmt::AssignVar { name, value, line })
        },
        Some(Spanned { token: Token::LBracket, .. }) => {
            tokens.next();
            let index = parse_expression(tokens)?;
            expect_token(tokens, &Token::RBracket, "']'")?;
            expect_token(tokens, &Token::Equals, "'=' after the index")?;
            let value = parse_expression(tokens)?;
            expect_token(tokens, &Token::Semicolon, "';' after the assignment")?;
            Ok(Stmt::IndexAssign { name, index, value, line })
        },
        Some(Spanned { token: Token::Dot, .. }) => {
            tokens.next();
            parse_method_call(tokens, name, line)
        },
        Some(Spanned { token: Token::LParen, .. }) => {
            tokens.next();
            let args = parse_comma_separated(tokens, parse_expression, &Token::RParen)?;
            expect_token(tokens, &Token::Semicolon, "';' after the call")?;
            Ok(Stmt::Call { name, args, line })
        },
        Some(sp) => Err(ParseError::ExpectedToken { expected: "'=', '[', '.', or '('".to_string(),
                                                    found:    sp.token.to_string(),
                                                    line:     sp.line,
                                                    column:   sp.column, }),
        None => Err(end_of_input()),
    }
}

/// Parses a collection method call after the dot:
/// `name.<method>:<kind>(args);`.
///
/// `add:dict` takes its first argument as a `key : value` pair; the
/// grammar tolerates additional comma-separated expressions after it.
fn parse_method_call<'a, I>(tokens: &mut Peekable<I>,
                            object: String,
                            line: usize)
                            -> ParseResult<Stmt>
    where I: Iterator<Item = &'a Spanned> + Clone
{
    let method = match tokens.next() {
        Some(Spanned { token: Token::Add, .. }) => CollectionMethod::Add,
        Some(Spanned { token: Token::Delete, .. }) => CollectionMethod::Delete,
        Some(Spanned { token: Token::Clear, .. }) => CollectionMethod::Clear,
        Some(sp) => {
            return Err(ParseError::ExpectedToken { expected: "'add', 'delete', or 'clear'".to_string(),
                                                   found:    sp.token.to_string(),
                                                   line:     sp.line,
                                                   column:   sp.column, });
        },
        None => return Err(end_of_input()),
    };

    expect_token(tokens, &Token::Colon, "':' after the method name")?;

    let target = match tokens.next() {
        Some(Spanned { token: Token::ListType, .. }) => CollectionKind::List,
        Some(Spanned { token: Token::DictType, .. }) => CollectionKind::Dict,
        Some(sp) => {
            return Err(ParseError::ExpectedToken { expected: "'list' or 'dict'".to_string(),
                                                   found:    sp.token.to_string(),
                                                   line:     sp.line,
                                                   column:   sp.column, });
        },
        None => return Err(end_of_input()),
    };

    expect_token(tokens, &Token::LParen, "'('")?;

    let args = if method == CollectionMethod::Add && target == CollectionKind::Dict {
        let key = parse_expression(tokens)?;
        expect_token(tokens, &Token::Colon, "':' between key and value")?;
        let value = parse_expression(tokens)?;

        let mut args = vec![key, value];
        loop {
            match tokens.next() {
                Some(Spanned { token: Token::Comma, .. }) => args.push(parse_expression(tokens)?),
                Some(Spanned { token: Token::RParen, .. }) => break,
                Some(sp) => {
                    return Err(ParseError::ExpectedToken { expected: "',' or ')'".to_string(),
                                                           found:    sp.token.to_string(),
                                                           line:     sp.line,
                                                           column:   sp.column, });
                },
                None => return Err(end_of_input()),
            }
        }
        args
    } else {
        parse_comma_separated(tokens, parse_expression, &Token::RParen)?
    };

    expect_token(tokens, &Token::Semicolon, "';' after the call")?;

    Ok(Stmt::MethodCall { object, method, target, args, line })
}

/// Parses an `if` statement with optional `else` and chained `else if`.
///
/// Syntax:
/// ```text
///     if (condition) { … }
///     else if (condition) { … }
///     else { … }
/// ```
/// Nested `else if` constructs are parsed recursively.
fn parse_if<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Stmt>
    where I: Iterator<Item = &'a Spanned> + Clone
{
    let Some(first) = tokens.next() else {
        return Err(end_of_input());
    };
    let line = first.line;

    expect_token(tokens, &Token::LParen, "'(' after 'if'")?;
    let condition = parse_expression(tokens)?;
    expect_token(tokens, &Token::RParen, "')' after the condition")?;

    let then_branch = parse_block(tokens)?;

    let else_branch = if let Some(Spanned { token: Token::Else, .. }) = tokens.peek() {
        tokens.next();

        match tokens.peek() {
            Some(Spanned { token: Token::If, .. }) => Some(ElseArm::If(Box::new(parse_if(tokens)?))),
            Some(Spanned { token: Token::LBrace, .. }) => Some(ElseArm::Block(parse_block(tokens)?)),
            Some(sp) => {
                return Err(ParseError::ExpectedToken { expected: "'if' or '{' after 'else'".to_string(),
                                                       found:    sp.token.to_string(),
                                                       line:     sp.line,
                                                       column:   sp.column, });
            },
            None => return Err(end_of_input()),
        }
    } else {
        None
    };

    Ok(Stmt::If { condition,
                  then_branch,
                  else_branch,
                  line })
}

/// Parses a `while (condition) { … }` statement.
fn parse_while<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Stmt>
    where I: Iterator<Item = &'a Spanned> + Clone
{
    let Some(first) = tokens.next() else {
        return Err(end_of_input());
    };
    let line = first.line;

    expect_token(tokens, &Token::LParen, "'(' after 'while'")?;
    let condition = parse_expression(tokens)?;
    expect_token(tokens, &Token::RParen, "')' after the condition")?;
    let body = parse_block(tokens)?;

    Ok(Stmt::While { condition, body, line })
}

/// Parses a `for (init?; cond?; update?) { … }` statement.
///
/// The initializer may be a declaration or an assignment and consumes its
/// own `;`; an omitted condition defaults to `true`; the update is a plain
/// assignment without a trailing `;`.
fn parse_for<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Stmt>
    where I: Iterator<Item = &'a Spanned> + Clone
{
    let Some(first) = tokens.next() else {
        return Err(end_of_input());
    };
    let line = first.line;

    expect_token(tokens, &Token::LParen, "'(' after 'for'")?;

    let init = match tokens.peek() {
        Some(Spanned { token: Token::Semicolon, .. }) => {
            tokens.next();
            None
        },
        Some(Spanned { token: Token::Create, .. }) => Some(Box::new(parse_create(tokens)?)),
        _ => {
            let (name, init_line) = parse_identifier(tokens)?;
            expect_token(tokens, &Token::Equals, "'='")?;
            let value = parse_expression(tokens)?;
            expect_token(tokens, &Token::Semicolon, "';' after the initializer")?;
            Some(Box::new(Stmt::AssignVar { name,
                                            value,
                                            line: init_line }))
        },
    };

    let condition = match tokens.peek() {
        Some(Spanned { token: Token::Semicolon, .. }) => {
            tokens.next();
            None
        },
        _ => {
            let condition = parse_expression(tokens)?;
            expect_token(tokens, &Token::Semicolon, "';' after the condition")?;
            Some(condition)
        },
    };

    let update = match tokens.peek() {
        Some(Spanned { token: Token::RParen, .. }) => None,
        _ => {
            let (name, update_line) = parse_identifier(tokens)?;
            expect_token(tokens, &Token::Equals, "'='")?;
            let value = parse_expression(tokens)?;
            Some(Box::new(Stmt::AssignVar { name,
                                            value,
                                            line: update_line }))
        },
    };

    expect_token(tokens, &Token::RParen, "')' after the loop header")?;
    let body = parse_block(tokens)?;

    Ok(Stmt::For { init,
                   condition,
                   update,
                   body,
                   line })
}
