/// Numeric conversion helpers.
///
/// This module provides safe functions for converting between floating-point
/// and integer values without silently producing nonsense. The evaluator
/// funnels every float-to-index and float-to-int conversion through these
/// helpers.
pub mod num;
