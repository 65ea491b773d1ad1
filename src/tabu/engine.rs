//! Tabu Search state machine over the full 2-opt neighborhood.

use std::collections::{HashSet, VecDeque};

use rand::Rng;

use crate::error::TspError;
use crate::geometry::{random_tour, tour_length, Point};

/// A segment-reversal move, identified by its endpoints `(i, j)` with
/// `i < j`.
pub type MoveKey = (usize, usize);

/// Trajectory state of tabu search.
///
/// The tabu list is a bounded FIFO of recent move keys; a `HashSet`
/// mirror gives O(1) membership checks during neighborhood scans.
#[derive(Debug, Clone)]
pub struct TabuState {
    tour: Vec<usize>,
    score: f64,
    best_tour: Vec<usize>,
    best_score: f64,
    tabu_queue: VecDeque<MoveKey>,
    tabu_set: HashSet<MoveKey>,
    tabu_capacity: usize,
    iteration: usize,
}

impl TabuState {
    /// Starts from a uniform-random tour with an empty tabu list of
    /// capacity `max(10, floor(n * 0.1))`.
    pub fn init<R: Rng>(points: &[Point], rng: &mut R) -> Result<Self, TspError> {
        if points.is_empty() {
            return Err(TspError::EmptyInstance);
        }

        let tour = random_tour(points.len(), rng);
        let score = tour_length(points, &tour);
        let tabu_capacity = (points.len() / 10).max(10);

        Ok(Self {
            best_tour: tour.clone(),
            best_score: score,
            tour,
            score,
            tabu_queue: VecDeque::with_capacity(tabu_capacity + 1),
            tabu_set: HashSet::new(),
            tabu_capacity,
            iteration: 0,
        })
    }

    /// Advances one iteration: enumerate every segment reversal `(i, j)`
    /// with `i < j`, skip tabu moves, and take the best remaining
    /// neighbor even when it worsens the current score.
    ///
    /// There is no aspiration criterion: a tabu move is never taken,
    /// even if it would beat the global best. If every move is tabu the
    /// state is left unchanged, but the iteration still counts.
    ///
    /// Cost: O(n²) candidate tours, each evaluated in O(n).
    pub fn step<R: Rng>(&mut self, points: &[Point], _rng: &mut R) {
        let n = self.tour.len();

        let mut best_move: Option<(MoveKey, Vec<usize>, f64)> = None;
        for i in 0..n.saturating_sub(1) {
            for j in (i + 1)..n {
                if self.tabu_set.contains(&(i, j)) {
                    continue;
                }
                let mut candidate = self.tour.clone();
                candidate[i..=j].reverse();
                let score = tour_length(points, &candidate);
                if best_move.as_ref().is_none_or(|(_, _, s)| score < *s) {
                    best_move = Some(((i, j), candidate, score));
                }
            }
        }

        if let Some((key, tour, score)) = best_move {
            self.tour = tour;
            self.score = score;

            self.tabu_queue.push_back(key);
            self.tabu_set.insert(key);
            if self.tabu_queue.len() > self.tabu_capacity {
                if let Some(old) = self.tabu_queue.pop_front() {
                    self.tabu_set.remove(&old);
                }
            }

            if self.score < self.best_score {
                self.best_tour = self.tour.clone();
                self.best_score = self.score;
            }
        }

        self.iteration += 1;
    }

    /// Score of the current tour.
    pub fn current_score(&self) -> f64 {
        self.score
    }

    /// Current tour.
    pub fn current_tour(&self) -> &[usize] {
        &self.tour
    }

    /// Lowest score ever reached. Non-increasing across steps.
    pub fn best_score(&self) -> f64 {
        self.best_score
    }

    /// Tour of the best solution ever reached.
    pub fn best_tour(&self) -> &[usize] {
        &self.best_tour
    }

    /// Number of move keys currently tabu.
    pub fn tabu_len(&self) -> usize {
        self.tabu_queue.len()
    }

    /// Maximum number of move keys held at once.
    pub fn tabu_capacity(&self) -> usize {
        self.tabu_capacity
    }

    /// Number of steps taken so far.
    pub fn iteration(&self) -> usize {
        self.iteration
    }
}
