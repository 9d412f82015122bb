//! Fowler-Noll-Vo hashes in the 0, 1 and 1a variants, over 32-, 64- and 128-bit words.
//!
//! FNV-0 starts from zero and exists mostly for completeness: it hashes the empty input (and any
//! run of leading zero bytes) to zero. Prefer FNV-1a.
use num_traits::{WrappingMul, Zero};
use std::{fmt, fmt::Formatter, ops::BitXor};

/// An accumulator width with FNV constants. Only `u32`, `u64` and `u128` have them, so other
/// widths do not compile:
///
/// ```compile_fail
/// use gg_math::core::prelude::*;
/// let hash = fnv::fnv1a::<u16>("abc");
/// ```
pub trait FnvWord: Copy + Zero + WrappingMul + BitXor<Output = Self> + From<u8> {
    const PRIME: Self;
    const OFFSET_BASIS: Self;
}

impl FnvWord for u32 {
    const PRIME: Self = 0x0100_0193;
    const OFFSET_BASIS: Self = 0x811c_9dc5;
}
impl FnvWord for u64 {
    const PRIME: Self = 0x0000_0100_0000_01b3;
    const OFFSET_BASIS: Self = 0xcbf2_9ce4_8422_2325;
}
impl FnvWord for u128 {
    // 2^88 + 0x13b
    const PRIME: Self = 0x0000_0000_0100_0000_0000_0000_0000_013b;
    const OFFSET_BASIS: Self = 0x6c62_272e_07bb_0142_62b8_2175_6295_c58d;
}

fn multiply_then_xor<W: FnvWord>(init: W, data: &[u8]) -> W {
    data.iter()
        .fold(init, |hash, &byte| hash.wrapping_mul(&W::PRIME) ^ W::from(byte))
}

/// FNV-0: multiply then xor, starting from zero.
///
/// # Examples
/// ```
/// use gg_math::core::prelude::*;
/// assert_eq!(fnv::fnv0::<u32>(""), 0);
/// assert_eq!(fnv::fnv0::<u64>([0_u8, 0, 0]), 0);
/// ```
pub fn fnv0<W: FnvWord>(data: impl AsRef<[u8]>) -> W {
    multiply_then_xor(W::zero(), data.as_ref())
}

/// FNV-1: multiply then xor, starting from the offset basis.
pub fn fnv1<W: FnvWord>(data: impl AsRef<[u8]>) -> W {
    multiply_then_xor(W::OFFSET_BASIS, data.as_ref())
}

/// FNV-1a: xor then multiply, starting from the offset basis.
///
/// # Examples
/// ```
/// use gg_math::core::prelude::*;
/// assert_eq!(fnv::fnv1a::<u32>("A"), 0xc40bf6cc);
/// assert_eq!(fnv::fnv1a_64(b"foobar"), 0x85944171f73967e8);
/// ```
pub fn fnv1a<W: FnvWord>(data: impl AsRef<[u8]>) -> W {
    data.as_ref()
        .iter()
        .fold(W::OFFSET_BASIS, |hash, &byte| {
            (hash ^ W::from(byte)).wrapping_mul(&W::PRIME)
        })
}

pub fn fnv0_32(data: impl AsRef<[u8]>) -> u32 {
    fnv0(data)
}
pub fn fnv0_64(data: impl AsRef<[u8]>) -> u64 {
    fnv0(data)
}
pub fn fnv0_128(data: impl AsRef<[u8]>) -> Digest128 {
    fnv0::<u128>(data).into()
}

pub fn fnv1_32(data: impl AsRef<[u8]>) -> u32 {
    fnv1(data)
}
pub fn fnv1_64(data: impl AsRef<[u8]>) -> u64 {
    fnv1(data)
}
pub fn fnv1_128(data: impl AsRef<[u8]>) -> Digest128 {
    fnv1::<u128>(data).into()
}

pub fn fnv1a_32(data: impl AsRef<[u8]>) -> u32 {
    fnv1a(data)
}
pub fn fnv1a_64(data: impl AsRef<[u8]>) -> u64 {
    fnv1a(data)
}
pub fn fnv1a_128(data: impl AsRef<[u8]>) -> Digest128 {
    fnv1a::<u128>(data).into()
}

/// A 128-bit hash, viewable either as 16 bytes or as four 32-bit chunks. Both views are
/// little-endian: chunk `i` is made of bytes `4i..4i + 4`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Digest128(u128);

const _: () = assert!(
    size_of::<[u8; 16]>() == size_of::<[u32; 4]>(),
    "Digest128 views must have the same size"
);

impl Digest128 {
    #[must_use]
    pub fn value(self) -> u128 {
        self.0
    }

    #[must_use]
    pub fn bytes(self) -> [u8; 16] {
        self.0.to_le_bytes()
    }

    /// # Examples
    /// ```
    /// use gg_math::core::prelude::*;
    /// let digest = Digest128::from(0x0000_0004_0000_0003_0000_0002_0000_0001);
    /// assert_eq!(digest.chunks(), [1, 2, 3, 4]);
    /// ```
    #[must_use]
    pub fn chunks(self) -> [u32; 4] {
        let bytes = self.bytes();
        std::array::from_fn(|i| {
            u32::from_le_bytes([bytes[4 * i], bytes[4 * i + 1], bytes[4 * i + 2], bytes[4 * i + 3]])
        })
    }
}

impl From<u128> for Digest128 {
    fn from(value: u128) -> Self {
        Self(value)
    }
}
impl From<Digest128> for u128 {
    fn from(value: Digest128) -> Self {
        value.0
    }
}
impl From<[u8; 16]> for Digest128 {
    fn from(value: [u8; 16]) -> Self {
        Self(u128::from_le_bytes(value))
    }
}

impl fmt::Display for Digest128 {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{:032x}", self.0)
    }
}
