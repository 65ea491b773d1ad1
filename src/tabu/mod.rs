//! Tabu Search (TS) engine.
//!
//! Best-improvement search over the exhaustive 2-opt neighborhood with
//! short-term memory: recently applied segment reversals are tabu for a
//! bounded number of iterations, forcing the trajectory away from just
//! visited solutions. A tabu move is never taken, even when it would
//! beat the global best (no aspiration criterion).
//!
//! Each step evaluates all O(n²) reversals at O(n) apiece, which bounds
//! practical instance sizes for interactive use.
//!
//! # References
//!
//! - Glover (1989), "Tabu Search—Part I", *ORSA Journal on Computing* 1(3)
//! - Glover (1990), "Tabu Search—Part II", *ORSA Journal on Computing* 2(1)

mod engine;

pub use engine::{MoveKey, TabuState};
