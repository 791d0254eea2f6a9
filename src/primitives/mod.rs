pub mod u256;
pub mod word;

pub use u256::U256;
pub use word::{NarrowWord, UnsignedWord};
