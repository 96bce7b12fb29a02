/// Lexing errors.
///
/// Defines the errors the tokenizer can raise while scanning source text:
/// unexpected characters, unterminated literals and comments, and unknown
/// `@` directives. Every variant carries the 1-based line and column of the
/// offending character.
pub mod lexer_error;
/// Parsing errors.
///
/// Defines all error types that can occur while building the syntax tree
/// from tokens: unexpected tokens, missing punctuation, missing type names,
/// and ill-formed program headers. Every variant carries the 1-based line
/// and column of the offending token.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation: unknown
/// or redefined variables, type mismatches, division by zero, bad indices,
/// missing dictionary keys, builtin misuse, and the loop iteration ceiling.
pub mod runtime_error;

pub use lexer_error::LexerError;
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
