//! PSO configuration.

/// Smallest swarm the engine will run with.
pub const MIN_PARTICLES: usize = 4;

/// Largest swarm the engine will run with.
pub const MAX_PARTICLES: usize = 500;

/// Lower bound of the key domain.
pub const KEY_MIN: f64 = 0.0;

/// Upper bound of the key domain.
pub const KEY_MAX: f64 = 10.0;

/// Configuration for random-keys particle swarm optimization.
///
/// # Examples
///
/// ```
/// use tsp_metaheur::pso::PsoConfig;
///
/// let config = PsoConfig::default()
///     .with_particle_count(60)
///     .with_inertia_weight(0.8)
///     .with_cognitive_weight(1.2)
///     .with_social_weight(1.8);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PsoConfig {
    /// Swarm size, clamped to [`MIN_PARTICLES`]..=[`MAX_PARTICLES`] at
    /// engine init.
    pub particle_count: usize,

    /// Inertia weight `W`: how much of the previous velocity carries over.
    pub inertia_weight: f64,

    /// Cognitive weight `C1`: pull toward each particle's personal best.
    pub cognitive_weight: f64,

    /// Social weight `C2`: pull toward the swarm's global best.
    pub social_weight: f64,
}

impl Default for PsoConfig {
    fn default() -> Self {
        Self {
            particle_count: 30,
            inertia_weight: 0.7,
            cognitive_weight: 1.5,
            social_weight: 1.5,
        }
    }
}

impl PsoConfig {
    /// Sets the swarm size, clamping it into the supported range.
    pub fn with_particle_count(mut self, n: usize) -> Self {
        self.particle_count = n.clamp(MIN_PARTICLES, MAX_PARTICLES);
        self
    }

    /// Sets the inertia weight.
    pub fn with_inertia_weight(mut self, w: f64) -> Self {
        self.inertia_weight = w;
        self
    }

    /// Sets the cognitive weight.
    pub fn with_cognitive_weight(mut self, c1: f64) -> Self {
        self.cognitive_weight = c1;
        self
    }

    /// Sets the social weight.
    pub fn with_social_weight(mut self, c2: f64) -> Self {
        self.social_weight = c2;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if !self.inertia_weight.is_finite() || self.inertia_weight < 0.0 {
            return Err(format!(
                "inertia_weight must be finite and non-negative, got {}",
                self.inertia_weight
            ));
        }
        if !self.cognitive_weight.is_finite() || self.cognitive_weight < 0.0 {
            return Err(format!(
                "cognitive_weight must be finite and non-negative, got {}",
                self.cognitive_weight
            ));
        }
        if !self.social_weight.is_finite() || self.social_weight < 0.0 {
            return Err(format!(
                "social_weight must be finite and non-negative, got {}",
                self.social_weight
            ));
        }
        Ok(())
    }
}
