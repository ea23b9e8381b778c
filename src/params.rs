use std::str::FromStr;

use crate::{OracleError, ParameterError, Result};

/// Validated run parameters: `1 ≤ k ≤ win_len ≤ seq_len` and `k ≤ 32`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Params {
    seq_len: usize,
    k: usize,
    win_len: usize,
}

impl Params {
    /// Checks the invariants and returns the first one violated.
    ///
    /// # Returns
    ///
    /// * `Ok(Self)` – all invariants hold.
    /// * `Err(OracleError::InvalidParameters(_))` – carrying `Zero`,
    ///   `KmerTooLong`, `KmerLongerThanWindow` or `WindowLongerThanSequence`.
    pub fn new(seq_len: usize, k: usize, win_len: usize) -> Result<Self> {
        validate_params!(seq_len, k, win_len);
        Ok(Self { seq_len, k, win_len })
    }

    pub fn seq_len(&self) -> usize {
        self.seq_len
    }

    pub fn k(&self) -> usize {
        self.k
    }

    pub fn win_len(&self) -> usize {
        self.win_len
    }
}

/// Parses `seq_len k win_len` separated by whitespace.
impl FromStr for Params {
    type Err = OracleError;

    fn from_str(line: &str) -> Result<Self> {
        let malformed = || ParameterError::Malformed { line: line.to_owned() };
        let values = line
            .split_whitespace()
            .map(str::parse::<usize>)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|_| malformed())?;
        match values[..] {
            [seq_len, k, win_len] => Self::new(seq_len, k, win_len),
            _ => Err(malformed().into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn err(seq_len: usize, k: usize, win_len: usize) -> ParameterError {
        match Params::new(seq_len, k, win_len) {
            Err(OracleError::InvalidParameters(e)) => e,
            other => panic!("expected parameter error, got {other:?}"),
        }
    }

    #[test]
    fn accepts_valid() {
        let p = Params::new(15, 3, 5).unwrap();
        assert_eq!((p.seq_len(), p.k(), p.win_len()), (15, 3, 5));
        assert!(Params::new(1, 1, 1).is_ok());
    }

    #[test]
    fn names_the_broken_invariant() {
        assert_eq!(err(0, 1, 1), ParameterError::Zero { name: "seq_len" });
        assert_eq!(err(10, 0, 1), ParameterError::Zero { name: "k" });
        assert_eq!(err(10, 1, 0), ParameterError::Zero { name: "win_len" });
        assert_eq!(err(100, 33, 40), ParameterError::KmerTooLong { k: 33 });
        assert_eq!(err(10, 4, 3), ParameterError::KmerLongerThanWindow { k: 4, win_len: 3 });
        assert_eq!(
            err(10, 3, 11),
            ParameterError::WindowLongerThanSequence { win_len: 11, seq_len: 10 }
        );
    }

    #[test]
    fn parses_line() {
        assert_eq!("15 3 5".parse::<Params>().unwrap(), Params::new(15, 3, 5).unwrap());
        assert_eq!("  10\t1 1\n".parse::<Params>().unwrap(), Params::new(10, 1, 1).unwrap());
    }

    #[test]
    fn rejects_malformed_line() {
        for line in ["", "10 3", "10 3 5 7", "10 x 5", "10 -3 5"] {
            assert_eq!(
                line.parse::<Params>(),
                Err(OracleError::InvalidParameters(ParameterError::Malformed { line: line.to_owned() })),
                "{line:?}"
            );
        }
        // Well-formed but invalid is reported as such, not as malformed.
        assert_eq!(
            "10 4 3".parse::<Params>(),
            Err(OracleError::InvalidParameters(ParameterError::KmerLongerThanWindow { k: 4, win_len: 3 }))
        );
    }
}
