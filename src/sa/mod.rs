//! Simulated Annealing (SA) engine.
//!
//! Single-solution trajectory search with 2-opt segment-reversal moves
//! and Metropolis acceptance. The temperature starts at
//! `max(1, ln(n) * 100)` and decays geometrically every step, so the
//! probability of accepting a worsening move vanishes as the run
//! progresses. There is no terminal state; the caller decides when to
//! stop stepping.
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Cerny (1985), "Thermodynamical Approach to the Travelling Salesman Problem"

mod engine;

pub use engine::{SaState, COOLING_RATE};
