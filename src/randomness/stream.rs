// Pseudorandom 32-byte blocks derived from the block seed

use log::trace;

use crate::crypto::hash::{HashFunction, DIGEST_SIZE};
use crate::randomness::context::{ensure_unbiasable, ExecutionContext};
use crate::randomness::seed::SeedStore;
use crate::randomness::RandomnessError;

/// One hash output, consumed immediately by an extractor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ByteBlock([u8; DIGEST_SIZE]);

impl ByteBlock {
    pub fn new(bytes: [u8; DIGEST_SIZE]) -> Self {
        ByteBlock(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; DIGEST_SIZE] {
        &self.0
    }
}

/// Block derivation for one execution.
///
/// Block `i` is `H(tag || seed || tx_hash || counter_i)`. The counter comes
/// from the execution context, so no two calls in one execution hash the
/// same input and nothing is cached between calls.
pub struct ByteStream<'s, C> {
    store: &'s SeedStore,
    context: C,
}

impl<'s, C: ExecutionContext> ByteStream<'s, C> {
    pub fn new(store: &'s SeedStore, context: C) -> Self {
        ByteStream { store, context }
    }

    pub fn context(&self) -> &C {
        &self.context
    }

    pub fn into_context(self) -> C {
        self.context
    }

    pub fn next_block(&mut self) -> Result<ByteBlock, RandomnessError> {
        ensure_unbiasable(&self.context)?;
        let seed = self.store.seed()?;
        let config = self.store.config();
        let tx_hash = self.context.transaction_hash();

        let mut input = Vec::with_capacity(config.domain_tag().len() + seed.len() + tx_hash.len() + 8);
        input.extend_from_slice(config.domain_tag());
        input.extend_from_slice(&seed);
        input.extend_from_slice(tx_hash);
        input.extend_from_slice(&self.context.fetch_and_increment_counter()?);

        trace!("derived randomness block from {} input bytes", input.len());
        Ok(ByteBlock(config.hash().hash(&input)))
    }
}
