//! Error taxonomy for the engine core.
//!
//! The set is deliberately small: the engines have no I/O, so every error
//! indicates a precondition the caller must prevent rather than a
//! recoverable runtime condition.

use std::fmt;

/// Errors surfaced by engine construction and the checked objective.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TspError {
    /// The problem instance has zero points. Callers must not initialize
    /// or step an engine without cities.
    EmptyInstance,

    /// A tour is not a permutation of the instance's city indices.
    ///
    /// This is an internal invariant violation: engines never construct
    /// such a tour, so seeing this error indicates an engine bug, not a
    /// user error.
    InvalidTour,
}

impl fmt::Display for TspError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TspError::EmptyInstance => write!(f, "problem instance has no points"),
            TspError::InvalidTour => {
                write!(f, "tour is not a permutation of the instance's city indices")
            }
        }
    }
}

impl std::error::Error for TspError {}
