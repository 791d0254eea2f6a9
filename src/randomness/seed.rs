// Per-block seed state

use std::sync::{OnceLock, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use log::{debug, info, warn};

use crate::randomness::config::{AccountAddress, RandomnessConfig};
use crate::randomness::{RandomnessError, SEED_SIZE};

/// Seed state for the block currently being executed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PerBlockRandomness {
    pub epoch: u64,
    pub round: u64,
    pub seed: Option<[u8; SEED_SIZE]>,
}

/// Owner-checked holder of [`PerBlockRandomness`].
///
/// The state only exists after the framework identity calls
/// [`SeedStore::initialize`], and only the block producer identity may
/// replace it. Readers never observe a partially written block.
#[derive(Debug)]
pub struct SeedStore {
    config: RandomnessConfig,
    state: RwLock<Option<PerBlockRandomness>>,
}

impl SeedStore {
    pub fn new(config: RandomnessConfig) -> Self {
        SeedStore { config, state: RwLock::new(None) }
    }

    /// The process-wide store, built with the default configuration.
    pub fn global() -> &'static SeedStore {
        static GLOBAL: OnceLock<SeedStore> = OnceLock::new();
        GLOBAL.get_or_init(|| SeedStore::new(RandomnessConfig::default()))
    }

    pub fn config(&self) -> &RandomnessConfig {
        &self.config
    }

    /// Create the seed state if it does not exist yet. Idempotent.
    pub fn initialize(&self, caller: &AccountAddress) -> Result<(), RandomnessError> {
        self.authorize(caller, self.config.framework())?;

        let mut state = self.write();
        if state.is_none() {
            *state = Some(PerBlockRandomness { epoch: 0, round: 0, seed: None });
            info!("randomness seed state initialized by {}", caller);
        }
        Ok(())
    }

    /// Install the seed for a new block.
    ///
    /// Epoch, round and seed are replaced together. Before [`initialize`]
    /// this is a no-op.
    ///
    /// [`initialize`]: SeedStore::initialize
    pub fn on_new_block(
        &self,
        caller: &AccountAddress,
        epoch: u64,
        round: u64,
        seed: Option<[u8; SEED_SIZE]>,
    ) -> Result<(), RandomnessError> {
        self.authorize(caller, self.config.vm())?;

        let mut state = self.write();
        match state.as_mut() {
            Some(block) => {
                *block = PerBlockRandomness { epoch, round, seed };
                debug!(
                    "installed block randomness epoch={} round={} seeded={}",
                    epoch,
                    round,
                    seed.is_some()
                );
            }
            None => warn!("on_new_block(epoch={}, round={}) before initialize; ignored", epoch, round),
        }
        Ok(())
    }

    pub fn is_initialized(&self) -> bool {
        self.read().is_some()
    }

    /// Snapshot of the current block state
    pub fn current(&self) -> Option<PerBlockRandomness> {
        (*self.read()).clone()
    }

    /// The seed of the current block
    pub fn seed(&self) -> Result<[u8; SEED_SIZE], RandomnessError> {
        self.read()
            .as_ref()
            .and_then(|block| block.seed)
            .ok_or(RandomnessError::SeedNotInitialized)
    }

    fn authorize(&self, caller: &AccountAddress, expected: &AccountAddress) -> Result<(), RandomnessError> {
        if caller == expected {
            Ok(())
        } else {
            warn!("rejected privileged seed-store call from {}", caller);
            Err(RandomnessError::Unauthorized(*caller))
        }
    }

    // Writers replace the whole value, so a poisoned lock never holds a torn block.
    fn read(&self) -> RwLockReadGuard<'_, Option<PerBlockRandomness>> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Option<PerBlockRandomness>> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> SeedStore {
        SeedStore::new(RandomnessConfig::default())
    }

    #[test]
    fn test_initialize_is_idempotent() {
        let store = store();
        assert!(!store.is_initialized());

        store.initialize(&AccountAddress::FRAMEWORK).unwrap();
        store.on_new_block(&AccountAddress::VM, 3, 7, Some([9u8; 32])).unwrap();

        // A second initialize must not reset the installed block.
        store.initialize(&AccountAddress::FRAMEWORK).unwrap();
        let block = store.current().unwrap();
        assert_eq!((block.epoch, block.round), (3, 7));
        assert_eq!(block.seed, Some([9u8; 32]));
    }

    #[test]
    fn test_initialize_requires_framework() {
        let store = store();
        let intruder = AccountAddress::from_u8(0x77);
        assert_eq!(store.initialize(&intruder), Err(RandomnessError::Unauthorized(intruder)));
        assert_eq!(
            store.initialize(&AccountAddress::VM),
            Err(RandomnessError::Unauthorized(AccountAddress::VM))
        );
        assert!(!store.is_initialized());
    }

    #[test]
    fn test_on_new_block_requires_vm() {
        let store = store();
        store.initialize(&AccountAddress::FRAMEWORK).unwrap();

        let result = store.on_new_block(&AccountAddress::FRAMEWORK, 1, 1, Some([1u8; 32]));
        assert_eq!(result, Err(RandomnessError::Unauthorized(AccountAddress::FRAMEWORK)));
        assert_eq!(store.seed(), Err(RandomnessError::SeedNotInitialized));
    }

    #[test]
    fn test_on_new_block_before_initialize_is_ignored() {
        let store = store();
        store.on_new_block(&AccountAddress::VM, 1, 1, Some([1u8; 32])).unwrap();
        assert!(store.current().is_none());
        assert_eq!(store.seed(), Err(RandomnessError::SeedNotInitialized));
    }

    #[test]
    fn test_block_replaces_all_fields() {
        let store = store();
        store.initialize(&AccountAddress::FRAMEWORK).unwrap();
        store.on_new_block(&AccountAddress::VM, 1, 2, Some([5u8; 32])).unwrap();
        assert_eq!(store.seed(), Ok([5u8; 32]));

        // A block without randomness clears the seed.
        store.on_new_block(&AccountAddress::VM, 1, 3, None).unwrap();
        assert_eq!(
            store.current(),
            Some(PerBlockRandomness { epoch: 1, round: 3, seed: None })
        );
        assert_eq!(store.seed(), Err(RandomnessError::SeedNotInitialized));
    }

    #[test]
    fn test_global_store_is_singleton() {
        assert!(std::ptr::eq(SeedStore::global(), SeedStore::global()));
        assert_eq!(SeedStore::global().config(), &RandomnessConfig::default());
    }
}
