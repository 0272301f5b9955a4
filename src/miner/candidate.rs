// src/miner/candidate.rs
//! Candidate input generation
//!
//! A candidate is `prefix/suffix` where the suffix is the lowercase-hex
//! encoding of a randomly sized random byte run. The combined input never
//! exceeds [`MAX_INPUT_LEN`] bytes: an oversized hex suffix is sliced down
//! to fit exactly rather than regenerated, so truncated suffixes are not
//! uniformly distributed over their length.

use crate::utils::error::MinerError;
use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};

/// Maximum total length of a candidate input in bytes
pub const MAX_INPUT_LEN: usize = 64;

/// Separator between the fixed prefix and the random suffix
pub const SEPARATOR: char = '/';

/// Fixed search parameters derived from the startup prefix
///
/// Validated once at startup; every generator instance works from a clone.
#[derive(Debug, Clone)]
pub struct SearchParams {
    prefix: String,
    max_suffix_len: usize,
}

impl SearchParams {
    /// Validates the prefix and derives the suffix length bound
    ///
    /// # Errors
    /// `ConfigError` when the prefix is empty, or so long that no suffix
    /// byte fits within [`MAX_INPUT_LEN`] (longer than 62 bytes).
    pub fn new(prefix: impl Into<String>) -> Result<Self, MinerError> {
        let prefix = prefix.into();
        if prefix.is_empty() {
            return Err(MinerError::ConfigError("prefix must not be empty".into()));
        }
        if prefix.len() + 2 > MAX_INPUT_LEN {
            return Err(MinerError::ConfigError(format!(
                "prefix is {} bytes; at most {} fit alongside a separator and suffix",
                prefix.len(),
                MAX_INPUT_LEN - 2
            )));
        }
        let max_suffix_len = MAX_INPUT_LEN - prefix.len() - 1;
        Ok(SearchParams {
            prefix,
            max_suffix_len,
        })
    }

    /// The fixed prefix every candidate starts with
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Upper bound on the random suffix, in raw bytes drawn per attempt
    ///
    /// Also the exact number of hex characters a suffix may occupy once
    /// encoded, so encoded suffixes longer than this are truncated.
    pub fn max_suffix_len(&self) -> usize {
        self.max_suffix_len
    }
}

/// Per-worker candidate generator
///
/// Owned by exactly one worker; never shared. Each instance carries its own
/// RNG so sequences are uncorrelated across workers.
pub struct CandidateGenerator<R: RngCore> {
    params: SearchParams,
    rng: R,
    buf: Vec<u8>,
}

impl CandidateGenerator<StdRng> {
    /// Creates a generator with a fresh RNG seeded from OS entropy
    pub fn new(params: SearchParams) -> Self {
        Self::with_rng(params, StdRng::from_entropy())
    }
}

impl<R: RngCore> CandidateGenerator<R> {
    /// Creates a generator over an explicit RNG
    ///
    /// Seeded RNGs make a search run reproducible; used by tests.
    pub fn with_rng(params: SearchParams, rng: R) -> Self {
        let buf = vec![0u8; params.max_suffix_len()];
        CandidateGenerator { params, rng, buf }
    }

    /// Produces the next candidate input string
    ///
    /// Draws a suffix byte-length uniformly from `[1, max_suffix_len]`,
    /// fills that many random bytes, hex-encodes, and slices the encoding
    /// down if the combined input would exceed [`MAX_INPUT_LEN`].
    ///
    /// # Errors
    /// `RandomnessError` when the byte fill fails; the attempt is skippable
    /// and the generator stays usable.
    pub fn next_candidate(&mut self) -> Result<String, MinerError> {
        let len = self.rng.gen_range(1..=self.params.max_suffix_len());
        self.rng.try_fill_bytes(&mut self.buf[..len])?;

        let mut suffix = hex::encode(&self.buf[..len]);
        if suffix.len() > self.params.max_suffix_len() {
            suffix.truncate(self.params.max_suffix_len());
        }

        let mut input =
            String::with_capacity(self.params.prefix().len() + 1 + suffix.len());
        input.push_str(self.params.prefix());
        input.push(SEPARATOR);
        input.push_str(&suffix);
        Ok(input)
    }
}
