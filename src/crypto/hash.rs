// Hash function abstractions

use sha2::{Digest, Sha256};
use sha3::Sha3_256;

/// Digest length shared by every supported hash function.
pub const DIGEST_SIZE: usize = 32;

/// Trait for 256-bit hash functions
pub trait HashFunction {
    /// Hash input data
    fn hash(&self, data: &[u8]) -> [u8; DIGEST_SIZE];

    /// Get output size in bytes
    fn output_size(&self) -> usize {
        DIGEST_SIZE
    }
}

/// SHA-256 hash function
#[derive(Debug, Clone, Copy, Default)]
pub struct SHA256;

impl SHA256 {
    pub fn new() -> Self {
        SHA256
    }
}

impl HashFunction for SHA256 {
    fn hash(&self, data: &[u8]) -> [u8; DIGEST_SIZE] {
        let mut hasher = Sha256::new();
        hasher.update(data);
        let mut digest = [0u8; DIGEST_SIZE];
        digest.copy_from_slice(&hasher.finalize());
        digest
    }
}

/// SHA3-256 hash function
#[derive(Debug, Clone, Copy, Default)]
pub struct SHA3_256;

impl SHA3_256 {
    pub fn new() -> Self {
        SHA3_256
    }
}

impl HashFunction for SHA3_256 {
    fn hash(&self, data: &[u8]) -> [u8; DIGEST_SIZE] {
        let mut hasher = Sha3_256::new();
        hasher.update(data);
        let mut digest = [0u8; DIGEST_SIZE];
        digest.copy_from_slice(&hasher.finalize());
        digest
    }
}

/// Hash selection carried by configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HashAlgorithm {
    #[default]
    Sha3_256,
    Sha256,
}

impl HashFunction for HashAlgorithm {
    fn hash(&self, data: &[u8]) -> [u8; DIGEST_SIZE] {
        match self {
            HashAlgorithm::Sha3_256 => SHA3_256.hash(data),
            HashAlgorithm::Sha256 => SHA256.hash(data),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_digests() {
        assert_eq!(
            hex::encode(SHA3_256::new().hash(b"")),
            "a7ffc6f8bf1ed76651c14756a061d662f580ff4de43b49fa82d80a4b80f8434a"
        );
        assert_eq!(
            hex::encode(SHA256::new().hash(b"")),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn test_algorithm_dispatch() {
        let data = b"chain randomness";
        assert_eq!(HashAlgorithm::Sha3_256.hash(data), SHA3_256.hash(data));
        assert_eq!(HashAlgorithm::Sha256.hash(data), SHA256.hash(data));
        assert_ne!(HashAlgorithm::Sha3_256.hash(data), HashAlgorithm::Sha256.hash(data));
        assert_eq!(HashAlgorithm::default(), HashAlgorithm::Sha3_256);
        assert_eq!(HashAlgorithm::Sha256.output_size(), 32);
    }
}
