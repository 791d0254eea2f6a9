// Identities and parameters for the randomness core

use std::fmt;

use crate::crypto::hash::HashAlgorithm;

/// Domain-separation tag prefixed to every block derivation
pub const DEFAULT_DOMAIN_TAG: &[u8] = b"APTOS_RANDOMNESS";

/// 32-byte account identity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AccountAddress([u8; 32]);

impl AccountAddress {
    pub const LENGTH: usize = 32;

    /// Reserved identity of the block producer.
    pub const VM: Self = AccountAddress([0u8; 32]);

    /// Framework identity that owns the seed state.
    pub const FRAMEWORK: Self = Self::from_u8(1);

    pub const fn new(bytes: [u8; 32]) -> Self {
        AccountAddress(bytes)
    }

    /// Short address with `value` in the last byte, e.g. `0x1`.
    pub const fn from_u8(value: u8) -> Self {
        let mut bytes = [0u8; 32];
        bytes[31] = value;
        AccountAddress(bytes)
    }

    /// Parse a hex address; the `0x` prefix is optional and short forms are
    /// left-padded with zeros.
    pub fn from_hex(literal: &str) -> Result<Self, hex::FromHexError> {
        let digits = literal.strip_prefix("0x").unwrap_or(literal);
        if digits.len() > Self::LENGTH * 2 {
            return Err(hex::FromHexError::InvalidStringLength);
        }
        let padded = format!("{:0>64}", digits);

        let mut bytes = [0u8; 32];
        hex::decode_to_slice(padded, &mut bytes)?;
        Ok(AccountAddress(bytes))
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl fmt::Display for AccountAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

/// Parameters for the randomness core
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RandomnessConfig {
    domain_tag: Vec<u8>,
    hash: HashAlgorithm,
    framework: AccountAddress,
    vm: AccountAddress,
}

impl RandomnessConfig {
    pub fn new() -> Self {
        RandomnessConfig {
            domain_tag: DEFAULT_DOMAIN_TAG.to_vec(),
            hash: HashAlgorithm::default(),
            framework: AccountAddress::FRAMEWORK,
            vm: AccountAddress::VM,
        }
    }

    pub fn with_domain_tag(mut self, tag: &[u8]) -> Self {
        assert!(!tag.is_empty(), "Domain tag must not be empty");
        self.domain_tag = tag.to_vec();
        self
    }

    pub fn with_hash(mut self, hash: HashAlgorithm) -> Self {
        self.hash = hash;
        self
    }

    pub fn with_framework(mut self, framework: AccountAddress) -> Self {
        self.framework = framework;
        self
    }

    pub fn with_vm(mut self, vm: AccountAddress) -> Self {
        self.vm = vm;
        self
    }

    pub fn domain_tag(&self) -> &[u8] {
        &self.domain_tag
    }

    pub fn hash(&self) -> HashAlgorithm {
        self.hash
    }

    pub fn framework(&self) -> &AccountAddress {
        &self.framework
    }

    pub fn vm(&self) -> &AccountAddress {
        &self.vm
    }
}

impl Default for RandomnessConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_address_hex_round_trip() {
        let framework = AccountAddress::from_hex("0x1").unwrap();
        assert_eq!(framework, AccountAddress::FRAMEWORK);
        assert_eq!(framework.to_string(), format!("0x{}01", "0".repeat(62)));
        assert_eq!(AccountAddress::from_hex("00").unwrap(), AccountAddress::VM);
    }

    #[test]
    fn test_address_hex_rejects_garbage() {
        assert!(AccountAddress::from_hex("0xzz").is_err());
        assert!(AccountAddress::from_hex(&"1".repeat(65)).is_err());
    }

    #[test]
    fn test_config_defaults_and_builders() {
        let config = RandomnessConfig::default();
        assert_eq!(config.domain_tag(), DEFAULT_DOMAIN_TAG);
        assert_eq!(config.hash(), HashAlgorithm::Sha3_256);
        assert_eq!(config.framework(), &AccountAddress::FRAMEWORK);
        assert_eq!(config.vm(), &AccountAddress::VM);

        let producer = AccountAddress::from_u8(0x42);
        let config = RandomnessConfig::new()
            .with_domain_tag(b"TEST_TAG")
            .with_hash(HashAlgorithm::Sha256)
            .with_vm(producer);
        assert_eq!(config.domain_tag(), b"TEST_TAG");
        assert_eq!(config.hash(), HashAlgorithm::Sha256);
        assert_eq!(config.vm(), &producer);
    }

    #[test]
    #[should_panic(expected = "Domain tag must not be empty")]
    fn test_empty_domain_tag_rejected() {
        let _ = RandomnessConfig::new().with_domain_tag(b"");
    }
}
