use crate::util::complement_base;

/// Which form of a k-mer a candidate was encoded from.
///
/// The discriminants are the strand flags emitted in oracle output, and the
/// derived order makes the forward strand win ties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Strand {
    /// The k-mer as read from the sequence.
    Forward = 0,
    /// The k-mer after canonicalization.
    Complementary = 1,
}

impl Strand {
    /// The 0/1 flag used in rendered output.
    #[inline(always)]
    pub fn flag(self) -> u8 {
        self as u8
    }
}

/// How the second-strand candidate of every k-mer is derived.
///
/// The two strategies produce different minimizer sets for the same input,
/// so the choice is fixed per run in `OracleConfig`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Canonicalization {
    /// Complement every base, keeping order (`ACG` → `TGC`).
    #[default]
    Complement,
    /// Complement every base, then reverse (`ACG` → `CGT`).
    ReverseComplement,
}

/// Watson-Crick complement of each base, order preserved.
pub fn complement(kmer: &[u8]) -> Vec<u8> {
    kmer.iter().map(|&b| complement_base(b)).collect()
}

/// Reverse complement: complement each base and reverse the result.
pub fn reverse_complement(kmer: &[u8]) -> Vec<u8> {
    kmer.iter().rev().map(|&b| complement_base(b)).collect()
}

/// The second-strand form of `kmer` under the chosen strategy.
///
/// The result always has the same length as `kmer`, and both strategies are
/// their own inverse.
pub fn canonical_form(kmer: &[u8], mode: Canonicalization) -> Vec<u8> {
    match mode {
        Canonicalization::Complement => complement(kmer),
        Canonicalization::ReverseComplement => reverse_complement(kmer),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn complement_keeps_order() {
        assert_eq!(complement(b"AACGT"), b"TTGCA");
    }

    #[test]
    fn reverse_complement_reverses() {
        assert_eq!(reverse_complement(b"AACGT"), b"ACGTT");
    }

    #[test]
    fn canonical_form_dispatch() {
        assert_eq!(canonical_form(b"ACG", Canonicalization::Complement), b"TGC");
        assert_eq!(canonical_form(b"ACG", Canonicalization::ReverseComplement), b"CGT");
    }

    #[test]
    fn forward_strand_sorts_first() {
        assert!(Strand::Forward < Strand::Complementary);
        assert_eq!(Strand::Complementary.flag(), 1);
    }
}
