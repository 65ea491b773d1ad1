//! Step-driven metaheuristic engines for the Euclidean TSP.
//!
//! Four optimizers over a fixed set of 2D points, each advanced one
//! iteration at a time so an interactive caller can single-step or run
//! continuously:
//!
//! - **Genetic Algorithm (GA)**: tournament selection, order crossover,
//!   swap mutation, elitism.
//! - **Simulated Annealing (SA)**: 2-opt trajectory with geometric
//!   cooling and Metropolis acceptance.
//! - **Tabu Search (TS)**: best-improvement over the exhaustive 2-opt
//!   neighborhood with a bounded FIFO tabu list.
//! - **PSO**: particle swarm over a continuous random-keys encoding,
//!   decoded to tours by sort order.
//!
//! # Architecture
//!
//! Every engine consumes the shared geometry/objective layer
//! ([`geometry`]) and, for PSO, the random-keys codec ([`keys`]). Each
//! exposes exactly two operations — `init` and `step` — plus read-only
//! accessors for the current score, the best score, the best tour, and
//! an iteration counter. Best scores are monotonically non-increasing
//! across steps; every produced tour is a permutation of the instance's
//! city indices.
//!
//! The [`session`] module wraps the four state shapes in a tagged
//! variant and owns the single random source, which the caller seeds
//! explicitly for reproducible runs. Rendering and pacing live outside
//! this crate entirely.
//!
//! # Example
//!
//! ```
//! use tsp_metaheur::geometry::Point;
//! use tsp_metaheur::session::{EngineParams, Session, SessionConfig};
//!
//! let points = vec![
//!     Point::new(0.0, 0.0),
//!     Point::new(10.0, 0.0),
//!     Point::new(10.0, 10.0),
//!     Point::new(0.0, 10.0),
//! ];
//! let config = SessionConfig::new(EngineParams::Sa)
//!     .with_seed(42)
//!     .with_max_iterations(200);
//! let mut session = Session::new(points, config)?;
//! let result = session.run();
//! assert!(result.best_score.is_finite());
//! # Ok::<(), tsp_metaheur::error::TspError>(())
//! ```

pub mod error;
pub mod ga;
pub mod geometry;
pub mod keys;
pub mod pso;
pub mod sa;
pub mod session;
pub mod tabu;
