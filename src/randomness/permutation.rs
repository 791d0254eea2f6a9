// Uniform permutations by Fisher-Yates

use crate::randomness::context::ExecutionContext;
use crate::randomness::range::sample_narrow;
use crate::randomness::stream::ByteStream;
use crate::randomness::RandomnessError;

/// Shuffle `0..n` with `sample(min_incl, max_excl)` as the entropy source.
///
/// Draws `n - 1` samples; `n = 0` draws nothing.
pub fn shuffle<F>(n: u64, mut sample: F) -> Result<Vec<u64>, RandomnessError>
where
    F: FnMut(u64, u64) -> Result<u64, RandomnessError>,
{
    if n == 0 {
        return Ok(Vec::new());
    }

    let mut values: Vec<u64> = (0..n).collect();
    let mut tail = n - 1;
    while tail > 0 {
        let position = sample(0, tail + 1)?;
        values.swap(position as usize, tail as usize);
        tail -= 1;
    }
    Ok(values)
}

/// Uniformly random permutation of `0..n` drawn from `stream`.
pub fn permutation<C: ExecutionContext>(stream: &mut ByteStream<'_, C>, n: u64) -> Result<Vec<u64>, RandomnessError> {
    shuffle(n, |min_incl, max_excl| sample_narrow(stream, min_incl, max_excl))
}
