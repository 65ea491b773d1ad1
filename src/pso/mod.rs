//! Particle Swarm Optimization (PSO) engine over random keys.
//!
//! Tours are encoded as continuous key vectors ([`crate::keys`]); the
//! swarm moves in key space with the standard inertia/cognitive/social
//! velocity update and positions hard-clamped to the key domain. Each
//! step decodes every particle's position to evaluate it, so identical
//! key vectors always score identically.
//!
//! # References
//!
//! - Kennedy & Eberhart (1995), "Particle Swarm Optimization"
//! - Bean (1994), random-keys encoding for sequencing problems

mod config;
mod engine;

pub use config::{PsoConfig, KEY_MAX, KEY_MIN, MAX_PARTICLES, MIN_PARTICLES};
pub use engine::{Particle, PsoState};
