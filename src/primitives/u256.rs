// Fixed-width 256-bit unsigned integer

use std::cmp::Ordering;
use std::fmt;
use std::ops::Rem;

use num_bigint::BigUint;
use num_traits::Zero;

/// 256-bit unsigned integer stored as four little-endian `u64` limbs.
///
/// This is deliberately not a big-integer library: it carries only what the
/// samplers need (ordering, add/sub with explicit overflow handling and
/// remainder). Anything wider goes through `num_bigint::BigUint`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct U256([u64; 4]);

impl U256 {
    pub const ZERO: Self = U256([0; 4]);
    pub const ONE: Self = U256([1, 0, 0, 0]);
    pub const MAX: Self = U256([u64::MAX; 4]);
    pub const BITS: u32 = 256;

    /// Build from limbs, least significant first.
    pub const fn from_limbs(limbs: [u64; 4]) -> Self {
        U256(limbs)
    }

    pub fn from_be_bytes(bytes: [u8; 32]) -> Self {
        let mut limbs = [0u64; 4];
        for (i, chunk) in bytes.chunks_exact(8).enumerate() {
            let mut word = [0u8; 8];
            word.copy_from_slice(chunk);
            limbs[3 - i] = u64::from_be_bytes(word);
        }
        U256(limbs)
    }

    pub fn from_le_bytes(bytes: [u8; 32]) -> Self {
        let mut limbs = [0u64; 4];
        for (i, chunk) in bytes.chunks_exact(8).enumerate() {
            let mut word = [0u8; 8];
            word.copy_from_slice(chunk);
            limbs[i] = u64::from_le_bytes(word);
        }
        U256(limbs)
    }

    pub fn to_be_bytes(&self) -> [u8; 32] {
        let mut out = [0u8; 32];
        for (i, chunk) in out.chunks_exact_mut(8).enumerate() {
            chunk.copy_from_slice(&self.0[3 - i].to_be_bytes());
        }
        out
    }

    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|&limb| limb == 0)
    }

    /// Number of significant bits, `0` for zero.
    pub fn bits(&self) -> u32 {
        for i in (0..4).rev() {
            if self.0[i] != 0 {
                return i as u32 * 64 + (64 - self.0[i].leading_zeros());
            }
        }
        0
    }

    pub fn bit(&self, index: u32) -> bool {
        assert!(index < Self::BITS, "bit index {} out of range", index);
        (self.0[(index / 64) as usize] >> (index % 64)) & 1 == 1
    }

    /// The low 128 bits, discarding the rest.
    pub fn low_u128(&self) -> u128 {
        ((self.0[1] as u128) << 64) | self.0[0] as u128
    }

    /// `(self << 8) | byte`, dropping the bits shifted out of the top.
    pub fn shl_byte(self, byte: u8) -> Self {
        let mut out = [0u64; 4];
        out[0] = (self.0[0] << 8) | byte as u64;
        for i in 1..4 {
            out[i] = (self.0[i] << 8) | (self.0[i - 1] >> 56);
        }
        U256(out)
    }

    pub fn overflowing_add(self, rhs: Self) -> (Self, bool) {
        let mut out = [0u64; 4];
        let mut carry = false;
        for i in 0..4 {
            let (sum, c1) = self.0[i].overflowing_add(rhs.0[i]);
            let (sum, c2) = sum.overflowing_add(carry as u64);
            out[i] = sum;
            carry = c1 || c2;
        }
        (U256(out), carry)
    }

    pub fn overflowing_sub(self, rhs: Self) -> (Self, bool) {
        let mut out = [0u64; 4];
        let mut borrow = false;
        for i in 0..4 {
            let (diff, b1) = self.0[i].overflowing_sub(rhs.0[i]);
            let (diff, b2) = diff.overflowing_sub(borrow as u64);
            out[i] = diff;
            borrow = b1 || b2;
        }
        (U256(out), borrow)
    }

    pub fn checked_add(self, rhs: Self) -> Option<Self> {
        match self.overflowing_add(rhs) {
            (sum, false) => Some(sum),
            (_, true) => None,
        }
    }

    pub fn wrapping_add(self, rhs: Self) -> Self {
        self.overflowing_add(rhs).0
    }

    pub fn checked_sub(self, rhs: Self) -> Option<Self> {
        match self.overflowing_sub(rhs) {
            (diff, false) => Some(diff),
            (_, true) => None,
        }
    }

    pub fn wrapping_sub(self, rhs: Self) -> Self {
        self.overflowing_sub(rhs).0
    }

    /// Remainder by binary long division, `None` when `modulus` is zero.
    pub fn checked_rem(self, modulus: Self) -> Option<Self> {
        if modulus.is_zero() {
            return None;
        }
        if self < modulus {
            return Some(self);
        }

        let mut rem = U256::ZERO;
        for index in (0..self.bits()).rev() {
            // rem < modulus, so 2*rem + 1 < 2*modulus: one subtraction suffices,
            // and a carry out of bit 255 means the true value already exceeds it.
            let (mut shifted, carry) = rem.overflowing_add(rem);
            if self.bit(index) {
                shifted.0[0] |= 1;
            }
            rem = if carry || shifted >= modulus {
                shifted.wrapping_sub(modulus)
            } else {
                shifted
            };
        }
        Some(rem)
    }

    /// Convert from a `BigUint`, `None` if it does not fit in 256 bits.
    pub fn from_biguint(value: &BigUint) -> Option<Self> {
        if value.is_zero() {
            return Some(U256::ZERO);
        }
        if value.bits() > Self::BITS as u64 {
            return None;
        }
        let mut limbs = [0u64; 4];
        for (limb, digit) in limbs.iter_mut().zip(value.to_u64_digits()) {
            *limb = digit;
        }
        Some(U256(limbs))
    }
}

impl Ord for U256 {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.iter().rev().cmp(other.0.iter().rev())
    }
}

impl PartialOrd for U256 {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Panics on a zero divisor, like the native integer types.
impl Rem for U256 {
    type Output = U256;

    fn rem(self, modulus: U256) -> Self::Output {
        match self.checked_rem(modulus) {
            Some(rem) => rem,
            None => panic!("attempt to calculate the remainder with a divisor of zero"),
        }
    }
}

macro_rules! impl_from_native {
    ($($t:ty),*) => {
        $(
            impl From<$t> for U256 {
                fn from(value: $t) -> Self {
                    let value = value as u128;
                    U256([value as u64, (value >> 64) as u64, 0, 0])
                }
            }
        )*
    };
}

impl_from_native!(u8, u16, u32, u64, u128);

impl From<U256> for BigUint {
    fn from(value: U256) -> Self {
        BigUint::from_bytes_be(&value.to_be_bytes())
    }
}

impl fmt::Display for U256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", BigUint::from(*self))
    }
}

impl fmt::LowerHex for U256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.to_be_bytes()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_byte_order_conversions() {
        let mut bytes = [0u8; 32];
        bytes[31] = 0x01;
        bytes[0] = 0x80;
        let value = U256::from_be_bytes(bytes);
        assert_eq!(value.bits(), 256);
        assert!(value.bit(0));
        assert!(value.bit(255));
        assert_eq!(value.to_be_bytes(), bytes);

        let mut reversed = bytes;
        reversed.reverse();
        assert_eq!(U256::from_le_bytes(reversed), value);
    }

    #[test]
    fn test_ordering_uses_high_limbs_first() {
        let high = U256::from_limbs([0, 0, 0, 1]);
        let low = U256::from_limbs([u64::MAX, u64::MAX, u64::MAX, 0]);
        assert!(high > low);
        assert!(U256::MAX > high);
        assert!(U256::ZERO < U256::ONE);
    }

    #[test]
    fn test_add_sub_overflow() {
        assert_eq!(U256::MAX.checked_add(U256::ONE), None);
        assert_eq!(U256::MAX.wrapping_add(U256::ONE), U256::ZERO);
        assert_eq!(U256::ZERO.checked_sub(U256::ONE), None);
        assert_eq!(U256::ZERO.wrapping_sub(U256::ONE), U256::MAX);

        let carry = U256::from(u64::MAX).wrapping_add(U256::ONE);
        assert_eq!(carry, U256::from_limbs([0, 1, 0, 0]));
        assert_eq!(carry.wrapping_sub(U256::ONE), U256::from(u64::MAX));
    }

    #[test]
    fn test_rem_small_values() {
        assert_eq!(U256::from(17u8) % U256::from(5u8), U256::from(2u8));
        assert_eq!(U256::from(4u8) % U256::from(5u8), U256::from(4u8));
        assert_eq!(U256::MAX % U256::MAX, U256::ZERO);
        assert_eq!(U256::MAX % U256::ONE, U256::ZERO);
        // 2^256 - 1 = 3 * 5 * 17 * 257 * ..., so divisible by 255.
        assert_eq!(U256::MAX % U256::from(255u8), U256::ZERO);
    }

    #[test]
    fn test_rem_with_top_bit_modulus() {
        let modulus = U256::from_limbs([0, 0, 0, 1 << 63]).wrapping_add(U256::ONE);
        let expected = U256::MAX.wrapping_sub(modulus);
        assert_eq!(U256::MAX % modulus, expected);
    }

    #[test]
    #[should_panic(expected = "divisor of zero")]
    fn test_rem_by_zero_panics() {
        let _ = U256::ONE % U256::ZERO;
    }

    #[test]
    fn test_shl_byte() {
        let value = U256::from(u64::MAX).shl_byte(0xab);
        assert_eq!(value, U256::from_limbs([(u64::MAX << 8) | 0xab, 0xff, 0, 0]));
        assert_eq!(U256::MAX.shl_byte(0), U256::MAX.wrapping_sub(U256::from(0xffu8)));
    }

    #[test]
    fn test_biguint_interop() {
        let value = U256::from_limbs([1, 2, 3, 4]);
        let big = BigUint::from(value);
        assert_eq!(U256::from_biguint(&big), Some(value));
        assert_eq!(U256::from_biguint(&BigUint::from(0u8)), Some(U256::ZERO));

        let too_big = BigUint::from(U256::MAX) + 1u8;
        assert_eq!(U256::from_biguint(&too_big), None);
    }

    #[test]
    fn test_display_and_hex() {
        assert_eq!(U256::from(1234u32).to_string(), "1234");
        assert_eq!(
            U256::MAX.to_string(),
            "115792089237316195423570985008687907853269984665640564039457584007913129639935"
        );
        assert_eq!(format!("{:x}", U256::ONE), format!("{}01", "0".repeat(62)));
    }
}
