//! Permutation operators used by the GA engine.
//!
//! # References
//!
//! - Davis (1985), "Applying Adaptive Algorithms to Epistatic Domains"
//!   (order crossover)

use rand::Rng;

/// Order Crossover (OX) producing one child.
///
/// Picks two random cut points, copies parent `a`'s segment `[l, r]`
/// verbatim into the child at the same positions, then fills the
/// remaining slots — starting at `(r + 1) mod n` and wrapping — with
/// parent `b`'s cities scanned from `(r + 1) mod n`, skipping any city
/// already placed. The child is always a valid permutation.
///
/// # Complexity
/// O(n) time, O(n) space
///
/// # Panics
/// Panics if parents have different lengths or are empty.
pub fn order_crossover<R: Rng>(a: &[usize], b: &[usize], rng: &mut R) -> Vec<usize> {
    let n = a.len();
    assert_eq!(n, b.len(), "parents must have equal length");
    assert!(n > 0, "parents must not be empty");

    if n == 1 {
        return a.to_vec();
    }

    let i = rng.random_range(0..n);
    let j = rng.random_range(0..n);
    ox_child(a, b, i.min(j), i.max(j))
}

/// Build the OX child for fixed cut points `l <= r < n`.
fn ox_child(a: &[usize], b: &[usize], l: usize, r: usize) -> Vec<usize> {
    let n = a.len();
    let mut child = vec![usize::MAX; n];
    let mut placed = vec![false; n];

    for k in l..=r {
        child[k] = a[k];
        placed[a[k]] = true;
    }

    // Fill the free slots clockwise from r+1 with b's cities in the
    // order they appear from r+1, wrapping.
    let mut slot = (r + 1) % n;
    for k in 0..n {
        let city = b[(r + 1 + k) % n];
        if !placed[city] {
            child[slot] = city;
            placed[city] = true;
            slot = (slot + 1) % n;
        }
    }

    child
}

/// Per-position swap mutation: each position independently swaps with a
/// uniformly random other position with probability `rate`.
///
/// # Complexity
/// O(n)
pub fn swap_mutation<R: Rng>(tour: &mut [usize], rate: f64, rng: &mut R) {
    let n = tour.len();
    if n < 2 {
        return;
    }
    for i in 0..n {
        if rng.random_range(0.0..1.0) < rate {
            let j = rng.random_range(0..n);
            tour.swap(i, j);
        }
    }
}
