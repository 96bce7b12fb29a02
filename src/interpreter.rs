/// The evaluator module executes AST nodes and produces side effects.
///
/// The evaluator walks the program tree against a stack of lexical scopes,
/// performs arithmetic and logical operations, mutates collections, and
/// drives console output and input. It is the core execution engine of the
/// interpreter.
///
/// # Responsibilities
/// - Executes statements and evaluates expressions.
/// - Manages variable bindings, scoping, and declared-type coercion.
/// - Reports runtime errors such as division by zero or unknown variables.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw source text and produces a stream of tokens,
/// each corresponding to a meaningful language element such as a number,
/// identifier, operator, delimiter, keyword, or directive. This is the
/// first stage of interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with 1-based line and
///   column positions.
/// - Handles numeric, string, and boolean literals, comments, and escapes.
/// - Reports lexical errors for invalid or malformed input.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token stream produced by the lexer and
/// constructs an AST representing the program shell, its statements, and
/// their expressions.
///
/// # Responsibilities
/// - Validates the `@VoidApp` … `@VoidEnd` program shell.
/// - Converts tokens into structured AST nodes with location info.
/// - Implements the operator-precedence ladder for expressions.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
///
/// This module declares the dynamic `Value` union used during execution,
/// its truthiness and equality rules, the canonical string rendering, and
/// the insertion-ordered dictionary container.
///
/// # Responsibilities
/// - Defines the `Value` enum and all supported value variants.
/// - Implements truthiness, cross-type equality, and stringification.
/// - Provides the reference-semantics containers for lists and dicts.
pub mod value;
