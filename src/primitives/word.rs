// Unsigned integer widths the extractors and samplers work over

use std::fmt::Debug;

use crate::primitives::u256::U256;

/// An unsigned integer width that can be produced from a hash block.
///
/// Implemented for `u8`, `u16`, `u32`, `u64`, `u128` and [`U256`].
pub trait UnsignedWord: Copy + Ord + Debug {
    /// Width in bytes.
    const BYTES: usize;
    const ZERO: Self;

    /// `(self << 8) | byte`, discarding bits shifted out of the width.
    fn push_byte(self, byte: u8) -> Self;

    /// Lossless conversion into the 256-bit working width.
    fn widen(self) -> U256;

    /// Keep the low `BYTES` bytes of `value`.
    fn narrow(value: U256) -> Self;

    fn wrapping_add(self, rhs: Self) -> Self;

    fn wrapping_sub(self, rhs: Self) -> Self;
}

/// Widths of at most 128 bits, reducible from a single 256-bit draw.
pub trait NarrowWord: UnsignedWord {}

macro_rules! impl_unsigned_word {
    ($($t:ty),*) => {
        $(
            impl UnsignedWord for $t {
                const BYTES: usize = std::mem::size_of::<$t>();
                const ZERO: Self = 0;

                fn push_byte(self, byte: u8) -> Self {
                    ((self as u128) << 8 | byte as u128) as $t
                }

                fn widen(self) -> U256 {
                    U256::from(self)
                }

                fn narrow(value: U256) -> Self {
                    value.low_u128() as $t
                }

                fn wrapping_add(self, rhs: Self) -> Self {
                    <$t>::wrapping_add(self, rhs)
                }

                fn wrapping_sub(self, rhs: Self) -> Self {
                    <$t>::wrapping_sub(self, rhs)
                }
            }

            impl NarrowWord for $t {}
        )*
    };
}

impl_unsigned_word!(u8, u16, u32, u64, u128);

impl UnsignedWord for U256 {
    const BYTES: usize = 32;
    const ZERO: Self = U256::ZERO;

    fn push_byte(self, byte: u8) -> Self {
        self.shl_byte(byte)
    }

    fn widen(self) -> U256 {
        self
    }

    fn narrow(value: U256) -> Self {
        value
    }

    fn wrapping_add(self, rhs: Self) -> Self {
        U256::wrapping_add(self, rhs)
    }

    fn wrapping_sub(self, rhs: Self) -> Self {
        U256::wrapping_sub(self, rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_byte_discards_overflow() {
        assert_eq!(0xabu8.push_byte(0xcd), 0xcd);
        assert_eq!(0xabu16.push_byte(0xcd), 0xabcd);
        assert_eq!(u128::MAX.push_byte(0), u128::MAX << 8);
    }

    #[test]
    fn test_narrow_keeps_low_bytes() {
        let value = U256::from_limbs([0x1122_3344_5566_7788, 0x99, 0xff, 0xff]);
        assert_eq!(u8::narrow(value), 0x88);
        assert_eq!(u32::narrow(value), 0x5566_7788);
        assert_eq!(u128::narrow(value), (0x99u128 << 64) | 0x1122_3344_5566_7788);
        assert_eq!(U256::narrow(value), value);
    }

    #[test]
    fn test_widths() {
        assert_eq!(<u8 as UnsignedWord>::BYTES, 1);
        assert_eq!(<u64 as UnsignedWord>::BYTES, 8);
        assert_eq!(<u128 as UnsignedWord>::BYTES, 16);
        assert_eq!(<U256 as UnsignedWord>::BYTES, 32);
    }
}
