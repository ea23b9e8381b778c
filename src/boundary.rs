use tracing::debug;

use crate::{minimizer::{Minimizer, find_minimizers}, oracle::OracleConfig, sequence::Sequence};

/// Minimizers of the truncated windows at both ends of the sequence.
///
/// A streaming minimizer algorithm with window length `win_len` still emits
/// results before the first full window and after the last one. To match it,
/// the finder is rerun with every shorter window length anchored at each end:
///
/// - head: `u` in `[1, win_len - 1]`, one window over `[0, u)`;
/// - tail (only when `k < win_len`): `u` in `[k, win_len - 1]`, one window
///   over `[seq_len - u, seq_len)`.
///
/// Head lengths below `k` contain no k-mer and contribute nothing.
/// The output is not deduplicated.
pub fn extend_boundaries(
    seq: &Sequence,
    k: usize,
    win_len: usize,
    config: &OracleConfig,
) -> Vec<Minimizer> {
    let seq_len = seq.len();
    let mut out = Vec::new();

    for u in 1..win_len {
        out.extend(find_minimizers(seq, k, u, 0, u, config));
    }

    if k < win_len {
        for u in k..win_len {
            out.extend(find_minimizers(seq, k, u, seq_len.saturating_sub(u), seq_len, config));
        }
    }

    debug!(k, win_len, count = out.len(), "boundary windows extended");
    out
}
