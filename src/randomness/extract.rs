// Fixed-width integers from hash blocks

use crate::primitives::UnsignedWord;
use crate::randomness::context::ExecutionContext;
use crate::randomness::stream::{ByteBlock, ByteStream};
use crate::randomness::RandomnessError;

/// Fold the block into a `T`, starting from its last byte.
///
/// The last byte of the block becomes the most significant byte of the
/// result, so `u16` is `block[31] << 8 | block[30]` and a full `U256` is the
/// block read little-endian. Bytes beyond the width are discarded.
pub fn extract<T: UnsignedWord>(block: &ByteBlock) -> T {
    block
        .as_bytes()
        .iter()
        .rev()
        .take(T::BYTES)
        .fold(T::ZERO, |acc, &byte| acc.push_byte(byte))
}

/// Draw one block and extract a `T` from it, whatever the width.
pub fn next_integer<T, C>(stream: &mut ByteStream<'_, C>) -> Result<T, RandomnessError>
where
    T: UnsignedWord,
    C: ExecutionContext,
{
    let block = stream.next_block()?;
    Ok(extract(&block))
}
