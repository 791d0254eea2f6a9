// Execution context oracle and the unbiasability gate

use log::warn;

use crate::randomness::RandomnessError;

/// Length of the transaction identifier mixed into every block
pub const TRANSACTION_HASH_SIZE: usize = 32;

/// Whether an entry point can be invoked by arbitrary code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Public,
    Private,
}

/// The entry point an execution was started from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntryPoint {
    visibility: Visibility,
    randomness_annotated: bool,
}

impl EntryPoint {
    pub fn new(visibility: Visibility, randomness_annotated: bool) -> Self {
        EntryPoint { visibility, randomness_annotated }
    }

    /// Private entry explicitly marked as consuming randomness.
    pub fn private_randomness() -> Self {
        Self::new(Visibility::Private, true)
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    pub fn randomness_annotated(&self) -> bool {
        self.randomness_annotated
    }

    /// A caller can only abort on an unfavourable sample if it can observe
    /// the result before completion, which requires a public entry. The
    /// annotation is the author's explicit opt-in.
    pub fn is_unbiasable(&self) -> bool {
        self.visibility == Visibility::Private && self.randomness_annotated
    }
}

/// Host capabilities the randomness core depends on
pub trait ExecutionContext {
    /// Identifier of the running transaction, stable for its lifetime
    fn transaction_hash(&self) -> &[u8];

    /// Whether the execution is structurally unable to bias a sample
    fn is_unbiasable(&self) -> bool;

    /// Next value of the execution-scoped derivation counter.
    ///
    /// Fails with `UnsafeCallContext` when the context is not unbiasable.
    fn fetch_and_increment_counter(&mut self) -> Result<[u8; 8], RandomnessError>;
}

impl<T: ExecutionContext + ?Sized> ExecutionContext for &mut T {
    fn transaction_hash(&self) -> &[u8] {
        (**self).transaction_hash()
    }

    fn is_unbiasable(&self) -> bool {
        (**self).is_unbiasable()
    }

    fn fetch_and_increment_counter(&mut self) -> Result<[u8; 8], RandomnessError> {
        (**self).fetch_and_increment_counter()
    }
}

/// Fail with `UnsafeCallContext` unless `context` is unbiasable.
pub fn ensure_unbiasable<C: ExecutionContext + ?Sized>(context: &C) -> Result<(), RandomnessError> {
    if context.is_unbiasable() {
        Ok(())
    } else {
        warn!("randomness requested from a biasable call context");
        Err(RandomnessError::UnsafeCallContext)
    }
}

/// A single transaction execution
#[derive(Debug, Clone)]
pub struct TransactionContext {
    transaction_hash: [u8; TRANSACTION_HASH_SIZE],
    entry_point: EntryPoint,
    counter: u64,
}

impl TransactionContext {
    pub fn new(transaction_hash: [u8; TRANSACTION_HASH_SIZE], entry_point: EntryPoint) -> Self {
        TransactionContext { transaction_hash, entry_point, counter: 0 }
    }

    pub fn entry_point(&self) -> EntryPoint {
        self.entry_point
    }

    /// Number of counter values handed out so far
    pub fn counter(&self) -> u64 {
        self.counter
    }
}

impl ExecutionContext for TransactionContext {
    fn transaction_hash(&self) -> &[u8] {
        &self.transaction_hash
    }

    fn is_unbiasable(&self) -> bool {
        self.entry_point.is_unbiasable()
    }

    fn fetch_and_increment_counter(&mut self) -> Result<[u8; 8], RandomnessError> {
        ensure_unbiasable(&*self)?;
        let value = self.counter;
        self.counter += 1;
        Ok(value.to_le_bytes())
    }
}
