/// Core value representation.
///
/// Defines the dynamic `Value` union, truthiness, the cross-type equality
/// relation, whole-number normalization, and the canonical string rendering
/// used by `echo`, `toString`, and string concatenation.
pub mod core;

/// The dictionary container.
///
/// An insertion-ordered association from value keys to values, with
/// equality-based lookup. Kept in its own module because the ordering and
/// replacement rules are observable in program output.
pub mod dict;
