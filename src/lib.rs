//! # voidlang
//!
//! voidlang is a tree-walking interpreter for Void, a small imperative
//! scripting language. It lexes, parses, and executes a single source
//! text, emitting output to a console sink and reading input from a
//! blocking prompt.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use crate::interpreter::{evaluator::core::Context, evaluator::io::Console, lexer, parser};

/// Defines the structure of parsed code.
///
/// This module declares the `Program`, `Stmt`, and `Expr` types that
/// represent the syntactic structure of source code as a tree. The AST is
/// built by the parser and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines statement and expression types for all language constructs.
/// - Attaches source lines to AST nodes for error reporting.
pub mod ast;
/// Provides unified error types for lexing, parsing, and evaluation.
///
/// This module defines all errors that can be raised while interpreting a
/// program. It standardizes error reporting and carries detailed
/// information about failures, including source locations.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Attaches positions and detailed messages for context.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation, value
/// representations, error handling, and console I/O to provide a complete
/// runtime for Void programs.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, values.
/// - Provides the entry points for executing programs.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// General utilities for safe numeric conversion.
///
/// Reusable helpers shared by the evaluator for converting between `i64`
/// and `f64` without silent data loss.
pub mod util;

/// Truncates a source text at the first `@VoidEnd … ;` marker.
///
/// The driver calls this before lexing so that anything after the marker
/// is invisible to the interpreter. The parser independently tolerates
/// both a present and an absent trailing marker, so truncated input with
/// no marker is accepted too.
///
/// # Example
/// ```
/// use voidlang::strip_after_end_marker;
///
/// let source = "@VoidApp \"A\"; main() {} @VoidEnd; leftover notes";
/// assert_eq!(strip_after_end_marker(source),
///            "@VoidApp \"A\"; main() {} @VoidEnd;");
///
/// let bare = "@VoidApp \"A\"; main() {}";
/// assert_eq!(strip_after_end_marker(bare), bare);
/// ```
#[must_use]
pub fn strip_after_end_marker(source: &str) -> &str {
    if let Some(start) = source.find("@VoidEnd")
       && let Some(semi) = source[start..].find(';')
    {
        &source[..start + semi + 1]
    } else {
        source
    }
}

/// Executes a complete Void program.
///
/// Lexes and parses the source, then walks the tree against `console`.
/// `seed` fixes the random number source: with identical input lines and
/// an identical seed, the output is byte-identical across runs.
///
/// # Errors
/// Returns the first [`error::LexerError`], [`error::ParseError`], or
/// [`error::RuntimeError`] encountered, boxed.
///
/// # Examples
/// ```
/// use voidlang::{interpreter::evaluator::io::CaptureConsole, run_script};
///
/// let mut console = CaptureConsole::new();
/// run_script("@VoidApp \"Demo\"; main() { echo(\"hi\"); }", &mut console, 7).unwrap();
///
/// assert!(console.output().contains("hi"));
///
/// // A malformed program surfaces its error instead.
/// let mut console = CaptureConsole::new();
/// assert!(run_script("main() {}", &mut console, 7).is_err());
/// ```
pub fn run_script(source: &str,
                  console: &mut dyn Console,
                  seed: u64)
                  -> Result<(), Box<dyn std::error::Error>> {
    let tokens = lexer::lex(source)?;
    let program = parser::core::parse_program(&tokens)?;

    let mut context = Context::new(console, seed);
    context.execute(&program)?;
    Ok(())
}
