//! Point storage and the tour-length objective.
//!
//! This is the leaf layer every engine depends on: 2D points, the
//! Euclidean closed-tour distance, and helpers for generating random
//! instances and random starting tours.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::TspError;

/// A city in the plane. Immutable once generated for a run.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    pub fn distance_to(&self, other: &Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Checks that `tour` is a permutation of `0..n`:
/// correct length, no out-of-range index, no duplicates.
pub fn is_permutation(tour: &[usize], n: usize) -> bool {
    if tour.len() != n {
        return false;
    }
    let mut seen = vec![false; n];
    for &city in tour {
        if city >= n || seen[city] {
            return false;
        }
        seen[city] = true;
    }
    true
}

/// Total length of the closed tour: consecutive edges plus the edge
/// from the last city back to the first.
///
/// Returns [`TspError::InvalidTour`] if `tour` is not a permutation of
/// the instance's indices. Engines never construct such a tour; the
/// check exists for callers evaluating externally supplied tours.
pub fn tour_distance(points: &[Point], tour: &[usize]) -> Result<f64, TspError> {
    if !is_permutation(tour, points.len()) {
        return Err(TspError::InvalidTour);
    }
    Ok(tour_length(points, tour))
}

/// Unchecked closed-tour length. Callers must pass a valid permutation
/// of the instance's indices.
pub(crate) fn tour_length(points: &[Point], tour: &[usize]) -> f64 {
    debug_assert!(is_permutation(tour, points.len()));
    if tour.len() < 2 {
        return 0.0;
    }
    let mut total = 0.0;
    for pair in tour.windows(2) {
        total += points[pair[0]].distance_to(&points[pair[1]]);
    }
    total + points[tour[tour.len() - 1]].distance_to(&points[tour[0]])
}

/// Uniform random permutation of `0..n`.
pub fn random_tour<R: Rng>(n: usize, rng: &mut R) -> Vec<usize> {
    let mut tour: Vec<usize> = (0..n).collect();
    tour.shuffle(rng);
    tour
}

/// `n` uniform random points inside a `width` × `height` rectangle,
/// inset by `pad` on every side.
///
/// # Panics
/// Panics if the padded region is empty (`2 * pad >= width` or `height`).
pub fn random_points<R: Rng>(n: usize, width: f64, height: f64, pad: f64, rng: &mut R) -> Vec<Point> {
    assert!(
        2.0 * pad < width && 2.0 * pad < height,
        "padding leaves no room for points"
    );
    (0..n)
        .map(|_| {
            Point::new(
                rng.random_range(pad..width - pad),
                rng.random_range(pad..height - pad),
            )
        })
        .collect()
}
