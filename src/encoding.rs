use crate::{
    Result, OracleError, ParameterError,
    constants::{BASES, INVALID_BASE},
    util::base_index,
};

/// A bijection from `{A, C, G, T}` onto the 2-bit codes `{0, 1, 2, 3}`.
///
/// The assignment decides which k-mers compare smaller, so it is part of a
/// run's configuration rather than a hidden constant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BaseMapping {
    // Codes for A, C, G, T, in that order.
    codes: [u8; 4],
}

impl BaseMapping {
    /// `A=00, C=01, G=10, T=11` (lexicographic order on bases).
    pub const ACGT: Self = Self { codes: [0, 1, 2, 3] };

    /// `A=01, C=00, G=11, T=10` (orders bases as C < A < T < G).
    pub const CATG: Self = Self { codes: [1, 0, 3, 2] };

    /// Builds a mapping from the codes assigned to A, C, G and T.
    ///
    /// # Returns
    ///
    /// * `Ok(Self)` – if every code in `0..4` is used exactly once.
    /// * `Err(ParameterError::NotABijection)` – otherwise.
    pub fn new(codes: [u8; 4]) -> Result<Self> {
        let mut seen = [false; 4];
        for &c in &codes {
            if c > 3 || seen[c as usize] {
                return Err(ParameterError::NotABijection { codes }.into());
            }
            seen[c as usize] = true;
        }
        Ok(Self { codes })
    }

    /// The codes assigned to A, C, G and T.
    pub fn codes(&self) -> [u8; 4] {
        self.codes
    }

    /// 2-bit code of a single base, or `None` outside the alphabet.
    #[inline(always)]
    pub fn code(&self, base: u8) -> Option<u8> {
        match base_index(base) {
            INVALID_BASE => None,
            idx => Some(self.codes[idx as usize]),
        }
    }

    /// Packs an already-validated k-mer.
    ///
    /// Bytes outside the alphabet are not detected here; callers must have
    /// validated the sequence first.
    #[inline(always)]
    pub(crate) fn pack(&self, kmer: &[u8]) -> u64 {
        kmer.iter().fold(0u64, |acc, &b| {
            let code = self.codes[(base_index(b) & 3) as usize];
            (acc << 2) | code as u64
        })
    }
}

impl Default for BaseMapping {
    fn default() -> Self {
        Self::ACGT
    }
}

impl std::fmt::Display for BaseMapping {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, (&b, &c)) in BASES.iter().zip(&self.codes).enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{}={:02b}", b as char, c)?;
        }
        Ok(())
    }
}

/// Encodes a k-mer into an integer in `[0, 4^k)`.
///
/// Each base is mapped through `mapping` and the 2-bit codes are concatenated
/// left to right, the first base in the most significant position.
///
/// # Returns
///
/// * `Ok(u64)` – the packed value.
/// * `Err(OracleError::InvalidSymbol)` – if `kmer` contains a byte outside `{A, C, G, T}`.
pub fn encode(kmer: &[u8], mapping: &BaseMapping) -> Result<u64> {
    let mut value = 0u64;
    for (position, &symbol) in kmer.iter().enumerate() {
        let code = mapping
            .code(symbol)
            .ok_or(OracleError::InvalidSymbol { symbol: symbol as char, position })?;
        value = (value << 2) | code as u64;
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_msb_first() {
        // A C G T → 00 01 10 11
        assert_eq!(encode(b"ACGT", &BaseMapping::ACGT).unwrap(), 0b00_01_10_11);
        // A C G T → 01 00 11 10
        assert_eq!(encode(b"ACGT", &BaseMapping::CATG).unwrap(), 0b01_00_11_10);
        assert_eq!(encode(b"TTT", &BaseMapping::ACGT).unwrap(), 63);
    }

    #[test]
    fn encode_rejects_foreign_symbols() {
        assert_eq!(
            encode(b"ACNT", &BaseMapping::ACGT),
            Err(OracleError::InvalidSymbol { symbol: 'N', position: 2 })
        );
        // Lowercase is outside the alphabet.
        assert!(encode(b"acgt", &BaseMapping::ACGT).is_err());
    }

    #[test]
    fn pack_agrees_with_encode() {
        let mapping = BaseMapping::CATG;
        for kmer in [&b"GATTACA"[..], &b"C"[..], &b"TTTTTTTT"[..]] {
            assert_eq!(mapping.pack(kmer), encode(kmer, &mapping).unwrap());
        }
    }

    #[test]
    fn mapping_must_be_bijection() {
        assert!(BaseMapping::new([3, 2, 1, 0]).is_ok());
        assert_eq!(
            BaseMapping::new([0, 0, 1, 2]),
            Err(OracleError::InvalidParameters(ParameterError::NotABijection { codes: [0, 0, 1, 2] }))
        );
        assert!(BaseMapping::new([0, 1, 2, 4]).is_err());
    }

    #[test]
    fn mapping_display() {
        assert_eq!(BaseMapping::CATG.to_string(), "A=01,C=00,G=11,T=10");
    }
}
