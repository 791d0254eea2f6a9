// Uniform sampling over half-open integer ranges
//
// Two reductions are used:
//
// * Widths up to 128 bits reduce one 256-bit draw modulo the range. The
//   statistical distance from uniform is below `range / 2^256`, which is at
//   most `2^-128` for every representable range. That is the accepted bias
//   ceiling; no rejection loop is run so each call costs exactly one block.
//
// * 256-bit ranges combine two draws as `(r0 + r1 * 2^256) mod range`,
//   bias below `range / 2^512 <= 2^-256`. The 512-bit value is never
//   materialised: `r1 mod range` is doubled 256 times modulo `range`, then
//   `r0 mod range` is added.

use crate::primitives::{NarrowWord, UnsignedWord, U256};
use crate::randomness::context::ExecutionContext;
use crate::randomness::extract::next_integer;
use crate::randomness::stream::ByteStream;
use crate::randomness::RandomnessError;

/// Upper bound on the statistical distance of the single-draw path, as a
/// power of two (`2^-128`).
pub const NARROW_BIAS_BOUND_LOG2: i32 = -128;

pub fn check_range<T: Ord>(min_incl: &T, max_excl: &T) -> Result<(), RandomnessError> {
    if min_incl < max_excl {
        Ok(())
    } else {
        Err(RandomnessError::InvalidRange)
    }
}

/// `(a + b) mod m` for `a, b < m`, computed without exceeding the width.
pub fn safe_add_mod<T: UnsignedWord>(a: T, b: T, m: T) -> T {
    debug_assert!(a < m && b < m, "operands must be reduced: {:?}, {:?} mod {:?}", a, b, m);
    let neg_b = m.wrapping_sub(b);
    if a < neg_b {
        a.wrapping_add(b)
    } else {
        a.wrapping_sub(neg_b)
    }
}

/// `(r0 + r1 * 2^256) mod range` using only modular addition.
///
/// Panics if `range` is zero.
pub fn uniform_double_width(r0: U256, r1: U256, range: U256) -> U256 {
    let mut sample = r1 % range;
    for _ in 0..U256::BITS {
        sample = safe_add_mod(sample, sample, range);
    }
    safe_add_mod(sample, r0 % range, range)
}

/// Map one 256-bit draw into `[min_incl, max_excl)`.
pub fn reduce_narrow<T: NarrowWord>(draw: U256, min_incl: T, max_excl: T) -> Result<T, RandomnessError> {
    check_range(&min_incl, &max_excl)?;
    let range = max_excl.wrapping_sub(min_incl).widen();
    let sample = T::narrow(draw % range);
    Ok(min_incl.wrapping_add(sample))
}

/// Map two 256-bit draws into `[min_incl, max_excl)`.
pub fn reduce_wide(r0: U256, r1: U256, min_incl: U256, max_excl: U256) -> Result<U256, RandomnessError> {
    check_range(&min_incl, &max_excl)?;
    let range = max_excl.wrapping_sub(min_incl);
    Ok(min_incl.wrapping_add(uniform_double_width(r0, r1, range)))
}

/// Sample `[min_incl, max_excl)` for widths up to 128 bits. One block.
pub fn sample_narrow<T, C>(stream: &mut ByteStream<'_, C>, min_incl: T, max_excl: T) -> Result<T, RandomnessError>
where
    T: NarrowWord,
    C: ExecutionContext,
{
    check_range(&min_incl, &max_excl)?;
    let draw = next_integer::<U256, C>(stream)?;
    reduce_narrow(draw, min_incl, max_excl)
}

/// Sample `[min_incl, max_excl)` over 256 bits. Two blocks.
pub fn sample_wide<C: ExecutionContext>(
    stream: &mut ByteStream<'_, C>,
    min_incl: U256,
    max_excl: U256,
) -> Result<U256, RandomnessError> {
    check_range(&min_incl, &max_excl)?;
    let r0 = next_integer::<U256, C>(stream)?;
    let r1 = next_integer::<U256, C>(stream)?;
    reduce_wide(r0, r1, min_incl, max_excl)
}
