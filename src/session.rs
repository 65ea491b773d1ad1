//! Session: the engine-facing half of a run controller.
//!
//! A [`Session`] owns one problem instance, exactly one active engine
//! state, and the single shared random source all engines draw from.
//! The presentation layer (canvas rendering, buttons, frame pacing) sits
//! above this and only ever calls [`Session::step`] and
//! [`Session::snapshot`]; it never reaches into engine internals.
//!
//! Dispatch over the four algorithms is a tagged variant
//! ([`OptimizerState`]), not string-keyed branching, and there is no
//! ambient global run state: everything lives in the session object.

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::error::TspError;
use crate::ga::{GaConfig, GaState};
use crate::geometry::Point;
use crate::pso::{PsoConfig, PsoState};
use crate::sa::SaState;
use crate::tabu::TabuState;

/// Which optimizer drives a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Algorithm {
    Ga,
    Sa,
    Tabu,
    Pso,
}

/// Algorithm choice plus its parameters. SA and TS derive everything
/// from the instance, so they carry none.
#[derive(Debug, Clone)]
pub enum EngineParams {
    Ga(GaConfig),
    Sa,
    Tabu,
    Pso(PsoConfig),
}

impl EngineParams {
    /// The algorithm these parameters select.
    pub fn algorithm(&self) -> Algorithm {
        match self {
            EngineParams::Ga(_) => Algorithm::Ga,
            EngineParams::Sa => Algorithm::Sa,
            EngineParams::Tabu => Algorithm::Tabu,
            EngineParams::Pso(_) => Algorithm::Pso,
        }
    }
}

/// Tagged union over the four engine states. Exactly one is active per
/// session.
#[derive(Debug, Clone)]
pub enum OptimizerState {
    Ga(GaState),
    Sa(SaState),
    Tabu(TabuState),
    Pso(PsoState),
}

/// Read-only view of the active state, for rendering.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Snapshot {
    pub current_score: f64,
    pub best_score: f64,
    pub best_tour: Vec<usize>,
    pub iteration: usize,
}

/// Session construction parameters.
///
/// # Examples
///
/// ```
/// use tsp_metaheur::ga::GaConfig;
/// use tsp_metaheur::session::{EngineParams, SessionConfig};
///
/// let config = SessionConfig::new(EngineParams::Ga(GaConfig::default()))
///     .with_max_iterations(500)
///     .with_seed(42);
/// assert_eq!(config.max_iterations, 500);
/// ```
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Algorithm and its parameters.
    pub params: EngineParams,

    /// Maximum number of iterations [`Session::step`] will run.
    pub max_iterations: usize,

    /// Random seed for reproducibility. `None` uses a random seed.
    pub seed: Option<u64>,
}

impl SessionConfig {
    pub fn new(params: EngineParams) -> Self {
        Self {
            params,
            max_iterations: 1000,
            seed: None,
        }
    }

    /// Sets the iteration cap.
    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// One optimizer run: a fixed instance, one engine state, one RNG.
///
/// Each constructed session starts from fresh state; there is nothing
/// shared across sessions and no in-flight work to cancel — a caller
/// stops a run simply by not calling [`step`](Session::step) again.
#[derive(Debug, Clone)]
pub struct Session {
    points: Vec<Point>,
    state: OptimizerState,
    rng: StdRng,
    max_iterations: usize,
}

impl Session {
    /// Initializes the selected engine over `points`.
    ///
    /// Fails with [`TspError::EmptyInstance`] if `points` is empty.
    pub fn new(points: Vec<Point>, config: SessionConfig) -> Result<Self, TspError> {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::random()),
        };

        let state = match &config.params {
            EngineParams::Ga(ga) => OptimizerState::Ga(GaState::init(&points, ga, &mut rng)?),
            EngineParams::Sa => OptimizerState::Sa(SaState::init(&points, &mut rng)?),
            EngineParams::Tabu => OptimizerState::Tabu(TabuState::init(&points, &mut rng)?),
            EngineParams::Pso(pso) => OptimizerState::Pso(PsoState::init(&points, pso, &mut rng)?),
        };

        Ok(Self {
            points,
            state,
            rng,
            max_iterations: config.max_iterations,
        })
    }

    /// Advances the active engine by one iteration.
    ///
    /// Returns `false` (without stepping) once the iteration cap is
    /// reached.
    pub fn step(&mut self) -> bool {
        if self.iteration() >= self.max_iterations {
            return false;
        }
        match &mut self.state {
            OptimizerState::Ga(s) => s.step(&self.points, &mut self.rng),
            OptimizerState::Sa(s) => s.step(&self.points, &mut self.rng),
            OptimizerState::Tabu(s) => s.step(&self.points, &mut self.rng),
            OptimizerState::Pso(s) => s.step(&self.points, &mut self.rng),
        }
        true
    }

    /// Steps until the iteration cap is reached, returning the final
    /// snapshot.
    pub fn run(&mut self) -> Snapshot {
        while self.step() {}
        self.snapshot()
    }

    /// Read-only view of the active state.
    pub fn snapshot(&self) -> Snapshot {
        match &self.state {
            OptimizerState::Ga(s) => Snapshot {
                current_score: s.current_score(),
                best_score: s.best_score(),
                best_tour: s.best_tour().to_vec(),
                iteration: s.generation(),
            },
            OptimizerState::Sa(s) => Snapshot {
                current_score: s.current_score(),
                best_score: s.best_score(),
                best_tour: s.best_tour().to_vec(),
                iteration: s.iteration(),
            },
            OptimizerState::Tabu(s) => Snapshot {
                current_score: s.current_score(),
                best_score: s.best_score(),
                best_tour: s.best_tour().to_vec(),
                iteration: s.iteration(),
            },
            OptimizerState::Pso(s) => Snapshot {
                current_score: s.current_score(),
                best_score: s.best_score(),
                best_tour: s.best_tour().to_vec(),
                iteration: s.iteration(),
            },
        }
    }

    /// Iterations or generations completed so far.
    pub fn iteration(&self) -> usize {
        match &self.state {
            OptimizerState::Ga(s) => s.generation(),
            OptimizerState::Sa(s) => s.iteration(),
            OptimizerState::Tabu(s) => s.iteration(),
            OptimizerState::Pso(s) => s.iteration(),
        }
    }

    /// Whether the iteration cap has been reached.
    pub fn is_finished(&self) -> bool {
        self.iteration() >= self.max_iterations
    }

    /// The active algorithm.
    pub fn algorithm(&self) -> Algorithm {
        match &self.state {
            OptimizerState::Ga(_) => Algorithm::Ga,
            OptimizerState::Sa(_) => Algorithm::Sa,
            OptimizerState::Tabu(_) => Algorithm::Tabu,
            OptimizerState::Pso(_) => Algorithm::Pso,
        }
    }

    /// The problem instance. Fixed for the session's lifetime.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// The active engine state, read-only.
    pub fn state(&self) -> &OptimizerState {
        &self.state
    }
}
