use std::fmt;

use tracing::trace;

use crate::{
    oracle::OracleConfig,
    sequence::Sequence,
    strand::{Strand, canonical_form},
    util::kmer_space,
};

/// The minimal k-mer of one window.
///
/// Field order is the comparison order: `value` first, then `position`,
/// then `strand` (forward wins ties).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Minimizer {
    /// Packed 2-bit encoding of the selected k-mer form.
    pub value: u64,
    /// Start offset of the k-mer in the sequence.
    pub position: usize,
    /// Which form of the k-mer produced `value`.
    pub strand: Strand,
}

impl Minimizer {
    pub fn new(value: u64, position: usize, strand: Strand) -> Self {
        Self { value, position, strand }
    }
}

/// Initializer-literal form: `{value, position, strand}`.
impl fmt::Display for Minimizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}, {}, {}}}", self.value, self.position, self.strand.flag())
    }
}

/// Brute-force minimizers for every window start in `[begin, end - win_len]`.
///
/// For each window, every sub-k-mer contributes two candidates, its forward
/// encoding (strand 0) and the encoding of its canonical form (strand 1),
/// and the smallest `(value, position, strand)` is kept. Sub-k-mers running
/// past the end of the sequence are not considered, and a window left with
/// no candidates emits nothing. This also covers `win_len < k` and
/// `end < begin + win_len`, which yield an empty result.
///
/// Inputs are assumed validated: `seq` is over `{A, C, G, T}`, `1 ≤ k ≤ 32`.
pub fn find_minimizers(
    seq: &Sequence,
    k: usize,
    win_len: usize,
    begin: usize,
    end: usize,
    config: &OracleConfig,
) -> Vec<Minimizer> {
    let bytes = seq.as_bytes();
    let Some(last_start) = end.checked_sub(win_len) else {
        return Vec::new();
    };
    if win_len < k || last_start < begin {
        return Vec::new();
    }

    let mut out = Vec::with_capacity(last_start - begin + 1);
    for i in begin..=last_start {
        let mut best: Option<Minimizer> = None;
        for start in i..=i + (win_len - k) {
            if start + k > bytes.len() {
                break;
            }
            let kmer = &bytes[start..start + k];
            let fwd = Minimizer::new(config.mapping.pack(kmer), start, Strand::Forward);
            let rev = Minimizer::new(
                config.mapping.pack(&canonical_form(kmer, config.canonicalization)),
                start,
                Strand::Complementary,
            );
            let local = fwd.min(rev);
            best = Some(best.map_or(local, |b| b.min(local)));
        }

        match best {
            Some(m) => {
                debug_assert!(k == 32 || m.value < kmer_space(k));
                trace!(window = i, win_len, minimizer = %m, "window minimizer");
                out.push(m);
            }
            None => trace!(window = i, win_len, "empty window skipped"),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seq(s: &str) -> Sequence {
        s.parse().unwrap()
    }

    #[test]
    fn one_triple_per_window() {
        let s = seq("TCAGGAAGAAGCAGA");
        let mins = find_minimizers(&s, 3, 5, 0, s.len(), &OracleConfig::default());
        assert_eq!(mins.len(), 11);
    }

    #[test]
    fn k_equals_window() {
        // Each window holds one k-mer; strand 1 wins only when strictly smaller.
        let s = seq("AT");
        let mins = find_minimizers(&s, 2, 2, 0, 2, &OracleConfig::default());
        // AT = 0011, complement TA = 1100.
        assert_eq!(mins, vec![Minimizer::new(0b0011, 0, Strand::Forward)]);
    }

    #[test]
    fn forward_wins_value_and_position_ties() {
        // Reverse complement of the palindrome ACGT is ACGT itself.
        let s = seq("ACGT");
        let cfg = OracleConfig::default()
            .with_canonicalization(crate::Canonicalization::ReverseComplement);
        let mins = find_minimizers(&s, 4, 4, 0, 4, &cfg);
        assert_eq!(mins, vec![Minimizer::new(0b00_01_10_11, 0, Strand::Forward)]);
    }

    #[test]
    fn leftmost_position_wins_value_ties() {
        let s = seq("AAAA");
        let mins = find_minimizers(&s, 2, 4, 0, 4, &OracleConfig::default());
        assert_eq!(mins, vec![Minimizer::new(0, 0, Strand::Forward)]);
    }

    #[test]
    fn degenerate_ranges_are_empty() {
        let s = seq("ACGTACGT");
        let cfg = OracleConfig::default();
        // Window shorter than k.
        assert!(find_minimizers(&s, 3, 2, 0, 2, &cfg).is_empty());
        // Range shorter than one window.
        assert!(find_minimizers(&s, 3, 5, 4, 8, &cfg).is_empty());
        assert!(find_minimizers(&s, 3, 5, 0, 3, &cfg).is_empty());
    }

    #[test]
    fn display_as_initializer() {
        let m = Minimizer::new(17, 4, Strand::Complementary);
        assert_eq!(m.to_string(), "{17, 4, 1}");
    }
}
