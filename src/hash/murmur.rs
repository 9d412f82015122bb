//! Austin Appleby's MurmurHash family: MurmurHash2 (32-bit), MurmurHash64A, MurmurHash64B and
//! MurmurHash3 (x86, 32-bit).
//!
//! Blocks are always read little-endian, so results do not depend on the host.

const M32: u32 = 0x5bd1_e995;
const R32: u32 = 24;
const M64: u64 = 0xc6a4_a793_5bd1_e995;
const R64: u32 = 47;

fn read_u32(block: &[u8]) -> u32 {
    u32::from_le_bytes([block[0], block[1], block[2], block[3]])
}
fn read_u64(block: &[u8]) -> u64 {
    u64::from_le_bytes([
        block[0], block[1], block[2], block[3], block[4], block[5], block[6], block[7],
    ])
}

/// The MurmurHash2 block mix, shared by the 32-bit hash and both lanes of MurmurHash64B.
fn mix2(k: u32) -> u32 {
    let k = k.wrapping_mul(M32);
    (k ^ (k >> R32)).wrapping_mul(M32)
}

/// Xors up to seven trailing bytes into a word, little-endian.
fn fold_tail<W: From<u8> + std::ops::BitXor<Output = W> + std::ops::Shl<usize, Output = W>>(
    mut h: W,
    tail: &[u8],
) -> W {
    for (i, &byte) in tail.iter().enumerate() {
        h = h ^ (W::from(byte) << (8 * i));
    }
    h
}

/// MurmurHash2, 32-bit.
///
/// # Examples
/// ```
/// use gg_math::core::prelude::*;
/// assert_eq!(murmur::murmur2("", 0), 0);
/// assert_ne!(murmur::murmur2("hello", 0), murmur::murmur2("hello", 1));
/// ```
pub fn murmur2(data: impl AsRef<[u8]>, seed: u32) -> u32 {
    let data = data.as_ref();
    // Only the low 32 bits of the length take part.
    let mut h = seed ^ data.len() as u32;

    let blocks = data.chunks_exact(4);
    let tail = blocks.remainder();
    for block in blocks {
        h = h.wrapping_mul(M32) ^ mix2(read_u32(block));
    }
    if !tail.is_empty() {
        h = fold_tail(h, tail).wrapping_mul(M32);
    }

    h ^= h >> 13;
    h = h.wrapping_mul(M32);
    h ^ (h >> 15)
}

/// MurmurHash64A: the 64-bit variant for 64-bit platforms.
pub fn murmur2_64a(data: impl AsRef<[u8]>, seed: u64) -> u64 {
    let data = data.as_ref();
    let mut h = seed ^ (data.len() as u64).wrapping_mul(M64);

    let blocks = data.chunks_exact(8);
    let tail = blocks.remainder();
    for block in blocks {
        let mut k = read_u64(block).wrapping_mul(M64);
        k ^= k >> R64;
        k = k.wrapping_mul(M64);
        h = (h ^ k).wrapping_mul(M64);
    }
    if !tail.is_empty() {
        h = fold_tail(h, tail).wrapping_mul(M64);
    }

    h ^= h >> R64;
    h = h.wrapping_mul(M64);
    h ^ (h >> R64)
}

/// MurmurHash64B: the 64-bit variant for 32-bit platforms, built from two interleaved 32-bit
/// lanes. Not interchangeable with [`murmur2_64a`].
pub fn murmur2_64b(data: impl AsRef<[u8]>, seed: u64) -> u64 {
    let data = data.as_ref();
    let mut h1 = (seed as u32) ^ data.len() as u32;
    let mut h2 = (seed >> 32) as u32;

    let pairs = data.chunks_exact(8);
    let mut rest = pairs.remainder();
    for pair in pairs {
        h1 = h1.wrapping_mul(M32) ^ mix2(read_u32(&pair[..4]));
        h2 = h2.wrapping_mul(M32) ^ mix2(read_u32(&pair[4..]));
    }
    if rest.len() >= 4 {
        h1 = h1.wrapping_mul(M32) ^ mix2(read_u32(rest));
        rest = &rest[4..];
    }
    if !rest.is_empty() {
        h2 = fold_tail(h2, rest).wrapping_mul(M32);
    }

    h1 ^= h2 >> 18;
    h1 = h1.wrapping_mul(M32);
    h2 ^= h1 >> 22;
    h2 = h2.wrapping_mul(M32);
    h1 ^= h2 >> 17;
    h1 = h1.wrapping_mul(M32);
    h2 ^= h1 >> 19;
    h2 = h2.wrapping_mul(M32);

    (u64::from(h1) << 32) | u64::from(h2)
}

const C1: u32 = 0xcc9e_2d51;
const C2: u32 = 0x1b87_3593;
const C3: u32 = 0xe654_6b64;
const F1: u32 = 0x85eb_ca6b;
const F2: u32 = 0xc2b2_ae35;

const fn scramble3(k: u32) -> u32 {
    k.wrapping_mul(C1).rotate_left(15).wrapping_mul(C2)
}

const fn fmix32(mut h: u32) -> u32 {
    h ^= h >> 16;
    h = h.wrapping_mul(F1);
    h ^= h >> 13;
    h = h.wrapping_mul(F2);
    h ^ (h >> 16)
}

/// MurmurHash3 (x86, 32-bit).
///
/// This is a `const fn`, so literals can be hashed at compile time:
///
/// ```
/// use gg_math::core::prelude::*;
/// const HELLO: u32 = murmur::murmur3(b"Hello, world!", 0x9747b28c);
/// assert_eq!(HELLO, 0x24884cba);
/// assert_eq!(HELLO, murmur::murmur3("Hello, world!".as_bytes(), 0x9747b28c));
/// ```
pub const fn murmur3(data: &[u8], seed: u32) -> u32 {
    let len = data.len();
    let mut h = seed;

    let mut i = 0;
    while i + 4 <= len {
        let k = u32::from_le_bytes([data[i], data[i + 1], data[i + 2], data[i + 3]]);
        h ^= scramble3(k);
        h = h.rotate_left(13).wrapping_mul(5).wrapping_add(C3);
        i += 4;
    }

    let mut k = 0;
    let tail = len - i;
    if tail >= 3 {
        k ^= (data[i + 2] as u32) << 16;
    }
    if tail >= 2 {
        k ^= (data[i + 1] as u32) << 8;
    }
    if tail >= 1 {
        k ^= data[i] as u32;
        h ^= scramble3(k);
    }

    // Only the low 32 bits of the length take part.
    h ^= len as u32;
    fmix32(h)
}

/// [`murmur3`] over the UTF-8 bytes of `s`; also usable in `const` context.
pub const fn murmur3_str(s: &str, seed: u32) -> u32 {
    murmur3(s.as_bytes(), seed)
}
