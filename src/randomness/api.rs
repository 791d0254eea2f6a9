// Public randomness API

use log::trace;

use crate::crypto::hash::DIGEST_SIZE;
use crate::primitives::{NarrowWord, UnsignedWord, U256};
use crate::randomness::context::{ensure_unbiasable, ExecutionContext};
use crate::randomness::events::{EventSink, RandomnessGeneratedEvent};
use crate::randomness::extract::next_integer;
use crate::randomness::permutation::permutation;
use crate::randomness::range::{sample_narrow, sample_wide};
use crate::randomness::seed::SeedStore;
use crate::randomness::stream::ByteStream;
use crate::randomness::RandomnessError;

/// Randomness for one execution.
///
/// Every method returns an error instead of a value when the execution is
/// not unbiasable, the block has no seed or a range is empty. A successful
/// call emits exactly one [`RandomnessGeneratedEvent`], however many blocks
/// it consumed. The one exception is `permutation(0)`, which is free.
///
/// ```
/// use chain_randomness::randomness::{
///     AccountAddress, EntryPoint, EventLog, Randomness, SeedStore, TransactionContext,
/// };
/// use chain_randomness::randomness::RandomnessConfig;
///
/// let store = SeedStore::new(RandomnessConfig::default());
/// store.initialize(&AccountAddress::FRAMEWORK).unwrap();
/// store.on_new_block(&AccountAddress::VM, 1, 1, Some([0u8; 32])).unwrap();
///
/// let context = TransactionContext::new([1u8; 32], EntryPoint::private_randomness());
/// let mut events = EventLog::new();
/// let mut randomness = Randomness::new(&store, context, &mut events);
///
/// let roll = randomness.u8_range(1, 7).unwrap();
/// assert!((1..7).contains(&roll));
/// drop(randomness);
/// assert_eq!(events.len(), 1);
/// ```
pub struct Randomness<'s, C, E> {
    stream: ByteStream<'s, C>,
    events: E,
}

impl<'s, C: ExecutionContext, E: EventSink> Randomness<'s, C, E> {
    pub fn new(store: &'s SeedStore, context: C, events: E) -> Self {
        Randomness { stream: ByteStream::new(store, context), events }
    }

    pub fn context(&self) -> &C {
        self.stream.context()
    }

    pub fn into_parts(self) -> (C, E) {
        (self.stream.into_context(), self.events)
    }

    /// `n` random bytes: successive blocks concatenated, then truncated.
    pub fn bytes(&mut self, n: usize) -> Result<Vec<u8>, RandomnessError> {
        ensure_unbiasable(self.stream.context())?;

        let mut out = Vec::with_capacity(n.div_ceil(DIGEST_SIZE) * DIGEST_SIZE);
        while out.len() < n {
            out.extend_from_slice(self.stream.next_block()?.as_bytes());
        }
        out.truncate(n);

        self.emit("bytes");
        Ok(out)
    }

    pub fn u8_integer(&mut self) -> Result<u8, RandomnessError> {
        self.integer("u8_integer")
    }

    pub fn u16_integer(&mut self) -> Result<u16, RandomnessError> {
        self.integer("u16_integer")
    }

    pub fn u32_integer(&mut self) -> Result<u32, RandomnessError> {
        self.integer("u32_integer")
    }

    pub fn u64_integer(&mut self) -> Result<u64, RandomnessError> {
        self.integer("u64_integer")
    }

    pub fn u128_integer(&mut self) -> Result<u128, RandomnessError> {
        self.integer("u128_integer")
    }

    pub fn u256_integer(&mut self) -> Result<U256, RandomnessError> {
        self.integer("u256_integer")
    }

    pub fn u8_range(&mut self, min_incl: u8, max_excl: u8) -> Result<u8, RandomnessError> {
        self.narrow_range("u8_range", min_incl, max_excl)
    }

    pub fn u16_range(&mut self, min_incl: u16, max_excl: u16) -> Result<u16, RandomnessError> {
        self.narrow_range("u16_range", min_incl, max_excl)
    }

    pub fn u32_range(&mut self, min_incl: u32, max_excl: u32) -> Result<u32, RandomnessError> {
        self.narrow_range("u32_range", min_incl, max_excl)
    }

    pub fn u64_range(&mut self, min_incl: u64, max_excl: u64) -> Result<u64, RandomnessError> {
        self.narrow_range("u64_range", min_incl, max_excl)
    }

    pub fn u128_range(&mut self, min_incl: u128, max_excl: u128) -> Result<u128, RandomnessError> {
        self.narrow_range("u128_range", min_incl, max_excl)
    }

    /// Uniform in `[min_incl, max_excl)` from two blocks; see
    /// [`uniform_double_width`](crate::randomness::range::uniform_double_width).
    pub fn u256_range(&mut self, min_incl: U256, max_excl: U256) -> Result<U256, RandomnessError> {
        let value = sample_wide(&mut self.stream, min_incl, max_excl)?;
        self.emit("u256_range");
        Ok(value)
    }

    /// Uniformly random permutation of `0..n`.
    pub fn permutation(&mut self, n: u64) -> Result<Vec<u64>, RandomnessError> {
        if n == 0 {
            return Ok(Vec::new());
        }
        let values = permutation(&mut self.stream, n)?;
        self.emit("permutation");
        Ok(values)
    }

    fn integer<T: UnsignedWord>(&mut self, call: &str) -> Result<T, RandomnessError> {
        let value = next_integer(&mut self.stream)?;
        self.emit(call);
        Ok(value)
    }

    fn narrow_range<T: NarrowWord>(&mut self, call: &str, min_incl: T, max_excl: T) -> Result<T, RandomnessError> {
        let value = sample_narrow(&mut self.stream, min_incl, max_excl)?;
        self.emit(call);
        Ok(value)
    }

    fn emit(&mut self, call: &str) {
        trace!("{} generated randomness", call);
        self.events.emit(RandomnessGeneratedEvent);
    }
}
