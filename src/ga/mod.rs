//! Genetic Algorithm (GA) engine.
//!
//! Population-based search over tours: tournament selection (size 2),
//! order crossover, per-position swap mutation, and elitism that carries
//! the top individuals of each generation forward unchanged.
//!
//! # Key Types
//!
//! - [`GaConfig`]: population size (other parameters are fixed)
//! - [`GaState`]: the population plus best-so-far tracking; advanced one
//!   generation at a time via [`GaState::step`]
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Davis (1985), "Applying Adaptive Algorithms to Epistatic Domains"

mod config;
mod engine;
pub mod operators;

pub use config::{GaConfig, ELITE_FRACTION, MAX_POPULATION, MIN_POPULATION, MUTATION_RATE};
pub use engine::{GaIndividual, GaState};
