use chain_randomness::crypto::random::{OsSeedSource, SeedSource};
use chain_randomness::randomness::{
    AccountAddress, EntryPoint, EventLog, Randomness, RandomnessConfig, SeedStore,
    TransactionContext, Visibility,
};
use chain_randomness::U256;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    println!("Chain randomness demo");

    // Block producer side: install a fresh seed for block (epoch 1, round 1).
    let store = SeedStore::new(RandomnessConfig::default());
    store.initialize(&AccountAddress::FRAMEWORK)?;
    let seed = OsSeedSource::new().next_seed();
    store.on_new_block(&AccountAddress::VM, 1, 1, Some(seed))?;
    println!("✓ Block seed installed: {}", hex::encode(seed));

    // A private, randomness-annotated transaction.
    let tx_hash = OsSeedSource::new().next_seed();
    let context = TransactionContext::new(tx_hash, EntryPoint::private_randomness());
    let mut events = EventLog::new();
    let mut randomness = Randomness::new(&store, context, &mut events);

    println!("  bytes(8)        = {}", hex::encode(randomness.bytes(8)?));
    println!("  u64_integer     = {}", randomness.u64_integer()?);
    println!("  u256_integer    = {}", randomness.u256_integer()?);
    println!("  dice u8_range   = {}", randomness.u8_range(1, 7)?);
    println!("  u256_range      = {}", randomness.u256_range(U256::ZERO, U256::MAX)?);
    println!("  permutation(10) = {:?}", randomness.permutation(10)?);

    let (context, _) = randomness.into_parts();
    println!("✓ {} blocks derived, {} events emitted", context.counter(), events.len());

    // A public entry could observe the value and abort, so it is refused.
    let public = TransactionContext::new(tx_hash, EntryPoint::new(Visibility::Public, true));
    let mut events = EventLog::new();
    let mut randomness = Randomness::new(&store, public, &mut events);
    match randomness.u64_integer() {
        Ok(value) => println!("✗ Public entry unexpectedly received {}", value),
        Err(err) => println!("✓ Public entry rejected: {}", err),
    }

    Ok(())
}
