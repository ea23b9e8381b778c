use tracing::debug;

use crate::{
    ParameterError, Result,
    boundary::extend_boundaries,
    encoding::BaseMapping,
    minimizer::{Minimizer, find_minimizers},
    normalize::normalize,
    params::Params,
    sequence::Sequence,
    strand::Canonicalization,
};

/// Immutable per-run configuration.
///
/// The historical oracle variants differ only in these three settings, so
/// each of them is one `OracleConfig` over the same algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OracleConfig {
    /// Base → 2-bit code assignment.
    pub mapping: BaseMapping,
    /// How the strand-1 candidate is derived.
    pub canonicalization: Canonicalization,
    /// Whether truncated windows at both ends are included.
    pub boundaries: bool,
}

impl Default for OracleConfig {
    fn default() -> Self {
        Self {
            mapping: BaseMapping::ACGT,
            canonicalization: Canonicalization::Complement,
            boundaries: true,
        }
    }
}

impl OracleConfig {
    pub fn with_mapping(mut self, mapping: BaseMapping) -> Self {
        self.mapping = mapping;
        self
    }

    pub fn with_canonicalization(mut self, canonicalization: Canonicalization) -> Self {
        self.canonicalization = canonicalization;
        self
    }

    pub fn with_boundaries(mut self, boundaries: bool) -> Self {
        self.boundaries = boundaries;
        self
    }
}

/// Brute-force minimizer oracle.
///
/// Runs the full pipeline: full-length windows over the whole sequence,
/// optionally the truncated boundary windows, then sort and dedup.
#[derive(Debug, Clone, Default)]
pub struct Oracle {
    config: OracleConfig,
}

impl Oracle {
    pub fn new(config: OracleConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &OracleConfig {
        &self.config
    }

    /// Computes the normalized minimizer set of `seq`.
    ///
    /// # Returns
    ///
    /// * `Ok(Vec<Minimizer>)` – unique triples in ascending order.
    /// * `Err(ParameterError::SequenceLengthMismatch)` – if `params.seq_len()`
    ///   is not the length of `seq`.
    pub fn run(&self, seq: &Sequence, params: &Params) -> Result<Vec<Minimizer>> {
        if params.seq_len() != seq.len() {
            return Err(ParameterError::SequenceLengthMismatch {
                expected: params.seq_len(),
                actual: seq.len(),
            }
            .into());
        }

        let (k, win_len) = (params.k(), params.win_len());
        let mut all = find_minimizers(seq, k, win_len, 0, seq.len(), &self.config);
        let interior = all.len();
        if self.config.boundaries {
            all.extend(extend_boundaries(seq, k, win_len, &self.config));
        }
        let out = normalize(all);

        debug!(
            seq_len = seq.len(),
            k,
            win_len,
            interior,
            unique = out.len(),
            "oracle run finished"
        );
        Ok(out)
    }

    /// Like [`Oracle::run`], taking `seq_len` from the sequence itself.
    pub fn minimizers(&self, seq: &Sequence, k: usize, win_len: usize) -> Result<Vec<Minimizer>> {
        let params = Params::new(seq.len(), k, win_len)?;
        self.run(seq, &params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::OracleError;

    #[test]
    fn rejects_length_mismatch() {
        let seq: Sequence = "ACGTA".parse().unwrap();
        let params = Params::new(6, 1, 1).unwrap();
        assert_eq!(
            Oracle::default().run(&seq, &params),
            Err(OracleError::InvalidParameters(ParameterError::SequenceLengthMismatch {
                expected: 6,
                actual: 5
            }))
        );
    }

    #[test]
    fn boundaries_only_add() {
        let seq: Sequence = "TCAGGAAGAAGCAGA".parse().unwrap();
        let with = Oracle::default().minimizers(&seq, 3, 5).unwrap();
        let without = Oracle::new(OracleConfig::default().with_boundaries(false))
            .minimizers(&seq, 3, 5)
            .unwrap();
        assert!(without.iter().all(|m| with.contains(m)));
        assert!(with.len() > without.len());
    }

    #[test]
    fn builder_sets_fields() {
        let cfg = OracleConfig::default()
            .with_mapping(BaseMapping::CATG)
            .with_canonicalization(Canonicalization::ReverseComplement)
            .with_boundaries(false);
        assert_eq!(cfg.mapping, BaseMapping::CATG);
        assert_eq!(cfg.canonicalization, Canonicalization::ReverseComplement);
        assert!(!cfg.boundaries);
    }
}
