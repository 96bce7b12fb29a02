/// Core parsing logic for the program shell and expressions.
///
/// Contains the program-header parser, the `main` block driver, and the
/// expression entry point.
pub mod core;

/// Statement parsing.
///
/// Implements logic for every statement form: echo, declarations,
/// assignments, indexed assignments, collection method calls, call
/// statements, and the control-flow constructs.
pub mod statement;

/// Block parsing.
///
/// Parses brace-delimited statement sequences.
pub mod block;

/// Binary operator parsing.
///
/// Implements the operator-precedence ladder for all binary operators.
pub mod binary;

/// Unary, postfix, and primary parsing.
///
/// Handles prefix operators, chained `[…]` indexing, and every atomic
/// expression form.
pub mod unary;

/// Utility functions for the parser.
///
/// Provides token-expectation helpers and comma-separated list parsing.
pub mod utils;
