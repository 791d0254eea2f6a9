pub mod crypto;
pub mod primitives;
pub mod randomness;

pub use primitives::U256;
pub use randomness::{Randomness, RandomnessError};
