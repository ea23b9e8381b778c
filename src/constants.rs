// Global constants used throughout the oracle.

/// `ASCII_SIZE` – Number of possible ASCII values (0..255).
pub const ASCII_SIZE: usize = 256;

/// Longest k-mer whose 2-bit packing still fits in a `u64`.
pub const MAX_KMER_LENGTH: usize = 32;

/// The four-letter alphabet, in the order used by `BaseMapping` code tables.
pub const BASES: [u8; 4] = *b"ACGT";

/// Sentinel returned by `BASE_INDEX` for bytes outside the alphabet.
pub const INVALID_BASE: u8 = 4;

/// Complement base lookup table: `A ↔ T`, `C ↔ G`.
/// Any other byte maps to `N`.
pub const COMPL_BASES: [u8; ASCII_SIZE] = {
    let mut tbl = [b'N'; ASCII_SIZE];

    tbl[b'A' as usize] = b'T';
    tbl[b'C' as usize] = b'G';
    tbl[b'G' as usize] = b'C';
    tbl[b'T' as usize] = b'A';

    tbl
};

/// Position of each base within `BASES`: A=0, C=1, G=2, T=3, anything else=4.
///
/// This is an index into a mapping's code table, not the code itself.
/// Only uppercase DNA is accepted.
pub const BASE_INDEX: [u8; ASCII_SIZE] = {
    let mut t = [INVALID_BASE; ASCII_SIZE];

    t[b'A' as usize] = 0;
    t[b'C' as usize] = 1;
    t[b'G' as usize] = 2;
    t[b'T' as usize] = 3;

    t
};
