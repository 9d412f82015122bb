//! Non-cryptographic hash functions. Each is a pure function of its input bytes (and seed, where
//! there is one); none keeps state between calls.
pub mod fnv;
pub mod murmur;
