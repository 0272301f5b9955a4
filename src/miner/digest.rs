// src/miner/digest.rs
//! Digest engine
//!
//! Computes the SHA-256 digest of a candidate input. Pure and infallible:
//! any byte sequence hashes to a fixed 32-byte [`Digest`], and the
//! leading-zero-nibble score is derived from the digest itself
//! (see [`Digest::leading_zero_nibbles`]).

use crate::types::Digest;
use sha2::{Digest as _, Sha256};

/// Computes the SHA-256 digest of the given input bytes
pub fn sha256(input: &[u8]) -> Digest {
    Digest::new(Sha256::digest(input).into())
}
