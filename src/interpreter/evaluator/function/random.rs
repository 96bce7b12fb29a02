use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::{
            cast,
            core::{Context, EvalResult},
        },
        value::core::Value,
    },
    util::num::f64_floor_to_i64,
};

/// A small xorshift* generator.
///
/// The interpreter needs a randomness source that is seedable, so that a
/// fixed seed makes program output byte-identical across runs. A 64-bit
/// xorshift with a multiplicative finalizer is plenty for scripting-level
/// randomness and keeps the runtime dependency-free.
///
/// # Example
/// ```
/// use voidlang::interpreter::evaluator::function::random::Rng;
///
/// let mut a = Rng::seeded(42);
/// let mut b = Rng::seeded(42);
///
/// assert_eq!(a.next_unit(), b.next_unit());
/// assert_eq!(a.next_in_range(1, 6), b.next_in_range(1, 6));
/// ```
#[derive(Debug, Clone)]
pub struct Rng {
    state: u64,
}

impl Rng {
    /// Creates a generator from a seed. A zero seed is remapped to a fixed
    /// odd constant, since the all-zero state never leaves zero.
    #[must_use]
    pub const fn seeded(seed: u64) -> Self {
        Self { state: if seed == 0 { 0x9E37_79B9_7F4A_7C15 } else { seed } }
    }

    fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x >> 12;
        x ^= x << 25;
        x ^= x >> 27;
        self.state = x;
        x.wrapping_mul(0x2545_F491_4F6C_DD1D)
    }

    /// A uniform float in `[0, 1)`, built from the top 53 bits.
    #[allow(clippy::cast_precision_loss)]
    pub fn next_unit(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// A uniform integer in the inclusive range `[min, max]`.
    #[allow(clippy::cast_possible_wrap)]
    #[allow(clippy::cast_sign_loss)]
    pub fn next_in_range(&mut self, min: i64, max: i64) -> i64 {
        let span = max.wrapping_sub(min).wrapping_add(1) as u64;
        if span == 0 {
            // The full 64-bit range.
            return self.next_u64() as i64;
        }
        min.wrapping_add((self.next_u64() % span) as i64)
    }
}

/// `random()` — a uniform float in `[0, 1)`.
pub fn random(context: &mut Context<'_>, _args: &[Value], _line: usize) -> EvalResult<Value> {
    Ok(Value::Float(context.rng_mut().next_unit()))
}

/// `rand(min, max)` — a uniform integer in the inclusive range.
///
/// Both bounds are coerced to numbers and floored; a non-numeric bound or
/// a reversed range is fatal.
///
/// # Errors
/// - `ExpectedNumber` when a bound has no numeric reading.
/// - `InvalidRandRange` when `min > max`.
pub fn rand_range(context: &mut Context<'_>,
                  min: &Value,
                  max: &Value,
                  line: usize)
                  -> EvalResult<Value> {
    let low = f64_floor_to_i64(cast::to_number(min, line)?, line)?;
    let high = f64_floor_to_i64(cast::to_number(max, line)?, line)?;

    if low > high {
        return Err(RuntimeError::InvalidRandRange { min: low,
                                                    max: high,
                                                    line });
    }
    Ok(Value::Int(context.rng_mut().next_in_range(low, high)))
}
