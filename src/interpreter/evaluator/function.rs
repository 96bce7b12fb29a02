/// Builtin dispatch.
///
/// The static builtin table, arity checking, and the lookup path from a
/// call site to its handler.
pub mod core;

/// The builtin handlers.
///
/// Numeric, string, conversion, and collection-query builtins, each a
/// small pure function over evaluated arguments.
pub mod builtin;

/// The deterministic random number source.
///
/// A seedable generator plus the `random()` and `rand(min, max)`
/// builtins.
pub mod random;
