//! GA configuration.

/// Smallest population the engine will run with.
pub const MIN_POPULATION: usize = 20;

/// Largest population the engine will run with.
pub const MAX_POPULATION: usize = 200;

/// Per-position swap mutation probability. Fixed, not configurable.
pub const MUTATION_RATE: f64 = 0.12;

/// Fraction of the population preserved as elites each generation.
/// At least one elite is always kept.
pub const ELITE_FRACTION: f64 = 0.05;

/// Configuration for the genetic algorithm.
///
/// Only the population size is configurable; selection (tournament of
/// two), mutation rate, and elite fraction are fixed by the engine.
/// Out-of-range sizes are clamped rather than rejected.
///
/// # Examples
///
/// ```
/// use tsp_metaheur::ga::GaConfig;
///
/// let config = GaConfig::default().with_population_size(100);
/// assert_eq!(config.population_size, 100);
///
/// // Out-of-range values are clamped, not rejected.
/// let config = GaConfig::default().with_population_size(5);
/// assert_eq!(config.population_size, 20);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaConfig {
    /// Number of individuals in the population, clamped to
    /// [`MIN_POPULATION`]..=[`MAX_POPULATION`] at engine init.
    pub population_size: usize,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 50,
        }
    }
}

impl GaConfig {
    /// Sets the population size, clamping it into the supported range.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n.clamp(MIN_POPULATION, MAX_POPULATION);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GaConfig::default();
        assert_eq!(config.population_size, 50);
    }

    #[test]
    fn test_population_clamped_low() {
        let config = GaConfig::default().with_population_size(3);
        assert_eq!(config.population_size, MIN_POPULATION);
    }

    #[test]
    fn test_population_clamped_high() {
        let config = GaConfig::default().with_population_size(10_000);
        assert_eq!(config.population_size, MAX_POPULATION);
    }
}
