use crate::minimizer::Minimizer;

/// Sorts ascending by `(value, position, strand)` and drops duplicates.
///
/// Idempotent: normalizing a normalized set returns it unchanged.
pub fn normalize(mut minimizers: Vec<Minimizer>) -> Vec<Minimizer> {
    minimizers.sort_unstable();
    minimizers.dedup();
    minimizers
}
