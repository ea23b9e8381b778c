use crate::constants::{BASE_INDEX, COMPL_BASES};

/// Returns the complementary DNA base for the given ASCII byte.
///
/// Looks up the byte in the `COMPL_BASES` table, which maps
/// `A ↔ T`, `C ↔ G` and all others to `N`.
#[inline(always)]
pub const fn complement_base(b: u8) -> u8 {
    COMPL_BASES[b as usize]
}

/// Index of a base in `BASES` (0..=3), or `INVALID_BASE` for any other byte.
#[inline(always)]
pub const fn base_index(b: u8) -> u8 {
    BASE_INDEX[b as usize]
}

/// `4^k`, the exclusive upper bound on encoded values for k-mers of length `k`.
///
/// Only meaningful for `k ≤ 31`; `k = 32` saturates to `u64::MAX`.
#[inline(always)]
pub const fn kmer_space(k: usize) -> u64 {
    if k >= 32 { u64::MAX } else { 1u64 << (2 * k) }
}

/// Validates run parameters and returns early on error.
///
/// Intended for the start of constructors that require:
/// - `$seq_len`, `$k` and `$win_len` all ≥ 1
/// - `$k` ≤ `MAX_KMER_LENGTH`
/// - `$k ≤ $win_len ≤ $seq_len`
///
/// Each failure maps to the `ParameterError` variant naming the broken invariant.
///
/// # Example
///
/// ```ignore
/// validate_params!(seq_len, k, win_len);
/// ```
macro_rules! validate_params {
    ($seq_len:expr, $k:expr, $win_len:expr) => {{
        use $crate::ParameterError;
        if $seq_len == 0 {
            return Err(ParameterError::Zero { name: "seq_len" }.into());
        }
        if $k == 0 {
            return Err(ParameterError::Zero { name: "k" }.into());
        }
        if $win_len == 0 {
            return Err(ParameterError::Zero { name: "win_len" }.into());
        }
        if $k > $crate::constants::MAX_KMER_LENGTH {
            return Err(ParameterError::KmerTooLong { k: $k }.into());
        }
        if $k > $win_len {
            return Err(ParameterError::KmerLongerThanWindow { k: $k, win_len: $win_len }.into());
        }
        if $win_len > $seq_len {
            return Err(ParameterError::WindowLongerThanSequence {
                win_len: $win_len,
                seq_len: $seq_len,
            }
            .into());
        }
    }};
}
