use std::{fmt, str::FromStr};

use rand::Rng;

use crate::{OracleError, Result, constants::{BASES, INVALID_BASE}, util::base_index};

/// A DNA sequence over `{A, C, G, T}`.
///
/// The alphabet is checked once on construction; everything downstream
/// relies on it and never re-validates.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Sequence(Vec<u8>);

impl Sequence {
    /// Wraps `bytes` after checking every byte is one of `A`, `C`, `G`, `T`.
    ///
    /// # Returns
    ///
    /// * `Ok(Self)` – on a valid sequence (the empty sequence is valid here;
    ///   `Params` rejects it as a run input).
    /// * `Err(OracleError::InvalidSymbol)` – naming the first offending byte.
    pub fn new(bytes: impl Into<Vec<u8>>) -> Result<Self> {
        let bytes = bytes.into();
        if let Some(position) = bytes.iter().position(|&b| base_index(b) == INVALID_BASE) {
            return Err(OracleError::InvalidSymbol { symbol: bytes[position] as char, position });
        }
        Ok(Self(bytes))
    }

    /// Draws `len` bases uniformly from `{A, C, G, T}` using `rng`.
    ///
    /// Seed the generator to make the sequence reproducible.
    pub fn random<R: Rng>(rng: &mut R, len: usize) -> Self {
        Self((0..len).map(|_| BASES[rng.random_range(0..4)]).collect())
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromStr for Sequence {
    type Err = OracleError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s.as_bytes())
    }
}

impl AsRef<[u8]> for Sequence {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Only ASCII bases can be stored, so this is always valid UTF-8.
        f.write_str(std::str::from_utf8(&self.0).map_err(|_| fmt::Error)?)
    }
}
