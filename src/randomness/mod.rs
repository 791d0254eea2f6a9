//! Unbiasable randomness derived from the per-block seed.
//!
//! ```text
//! SeedStore ──> ByteStream ──> extract / range ──> permutation
//!                   ^
//!                   └── unbiasability gate (ExecutionContext)
//! ```
//!
//! [`Randomness`] is the public entry point. Every successful call appends
//! exactly one [`RandomnessGeneratedEvent`] to its [`EventSink`].

pub mod api;
pub mod config;
pub mod context;
pub mod events;
pub mod extract;
pub mod permutation;
pub mod range;
pub mod seed;
pub mod stream;

use thiserror::Error;

pub use api::Randomness;
pub use config::{AccountAddress, RandomnessConfig};
pub use context::{EntryPoint, ExecutionContext, TransactionContext, Visibility};
pub use events::{EventLog, EventSink, RandomnessGeneratedEvent};
pub use seed::{PerBlockRandomness, SeedStore};
pub use stream::{ByteBlock, ByteStream};

/// Length of the per-block seed in bytes
pub const SEED_SIZE: usize = 32;

/// Errors raised by the randomness core.
///
/// Every variant aborts the calling execution; nothing is retried.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RandomnessError {
    #[error("caller {0} is not authorized for this operation")]
    Unauthorized(AccountAddress),

    #[error("per-block seed has not been installed")]
    SeedNotInitialized,

    #[error("randomness requested from a context that can observe and abort on the result")]
    UnsafeCallContext,

    #[error("invalid range: min_incl must be strictly below max_excl")]
    InvalidRange,
}
