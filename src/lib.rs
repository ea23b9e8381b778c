mod constants;
#[macro_use]
mod util;
mod boundary;
mod encoding;
mod minimizer;
mod normalize;
mod oracle;
mod params;
mod render;
mod sequence;
mod strand;

pub use boundary::extend_boundaries;
pub use constants::*;
pub use encoding::{BaseMapping, encode};
pub use minimizer::{Minimizer, find_minimizers};
pub use normalize::normalize;
pub use oracle::{Oracle, OracleConfig};
pub use params::Params;
pub use render::{render, render_all};
pub use sequence::Sequence;
pub use strand::{Canonicalization, Strand, canonical_form, complement, reverse_complement};

/// Common `Result` type for all library operations, using `OracleError` for errors.
pub type Result<T, E = OracleError> = core::result::Result<T, E>;

/// Error variants for oracle construction and input validation.
///
/// Validation happens once, at the boundary (`Sequence::new`, `Params::new`,
/// `Oracle::run`). The minimizer core itself never fails.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum OracleError {
    /// The sequence contains a byte outside `{A, C, G, T}`.
    #[error("invalid symbol {symbol:?} at position {position} (expected one of A, C, G, T)")]
    InvalidSymbol { symbol: char, position: usize },

    /// A run parameter or the base mapping violates one of its invariants.
    #[error("invalid parameters: {0}")]
    InvalidParameters(#[from] ParameterError),
}

/// The specific invariant a parameter set failed.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ParameterError {
    /// `seq_len`, `k` and `win_len` must all be at least 1.
    #[error("{name} must be ≥ 1")]
    Zero { name: &'static str },

    /// Thrown when `k > win_len`.
    #[error("k-mer length ({k}) exceeds window length ({win_len})")]
    KmerLongerThanWindow { k: usize, win_len: usize },

    /// Thrown when `win_len > seq_len`.
    #[error("window length ({win_len}) exceeds sequence length ({seq_len})")]
    WindowLongerThanSequence { win_len: usize, seq_len: usize },

    /// Encoded values are packed into a `u64`, so `k` is capped at 32.
    #[error("k-mer length ({k}) must be ≤ {max}", max = MAX_KMER_LENGTH)]
    KmerTooLong { k: usize },

    /// The declared `seq_len` does not match the sequence handed to the oracle.
    #[error("declared sequence length ({expected}) differs from actual length ({actual})")]
    SequenceLengthMismatch { expected: usize, actual: usize },

    /// A base mapping must assign each of the four codes to exactly one base.
    #[error("base mapping {codes:?} is not a bijection onto 0..4")]
    NotABijection { codes: [u8; 4] },

    /// The parameter line could not be parsed.
    #[error("malformed parameter line {line:?}: expected `seq_len k win_len`")]
    Malformed { line: String },
}
