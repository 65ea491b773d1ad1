//! Random-keys codec.
//!
//! A permutation is encoded as a vector of real-valued keys; decoding
//! sorts the index set by key value. Only the PSO engine uses this
//! encoding, but the codec itself is representation-only and carries no
//! algorithm state.
//!
//! # References
//!
//! Bean (1994), "Genetic algorithms and random keys for sequencing and
//! optimization"

/// Decodes a key vector into the permutation obtained by sorting
/// indices by key value, ascending.
///
/// The sort is stable, so ties break by original index; identical key
/// vectors always decode to the same tour.
///
/// # Complexity
/// O(n log n)
pub fn decode(keys: &[f64]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..keys.len()).collect();
    order.sort_by(|&a, &b| {
        keys[a]
            .partial_cmp(&keys[b])
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    order
}
