//! PSO state machine over the random-keys encoding.

use rand::Rng;

use super::config::{PsoConfig, KEY_MAX, KEY_MIN, MAX_PARTICLES, MIN_PARTICLES};
use crate::error::TspError;
use crate::geometry::{tour_length, Point};
use crate::keys;

/// One particle: a continuous key vector, its velocity, and the best
/// position it has personally visited.
#[derive(Debug, Clone)]
pub struct Particle {
    pub position: Vec<f64>,
    pub velocity: Vec<f64>,
    pub personal_best_position: Vec<f64>,
    pub personal_best_score: f64,
}

/// Swarm state of random-keys particle swarm optimization.
#[derive(Debug, Clone)]
pub struct PsoState {
    particles: Vec<Particle>,
    global_best_position: Vec<f64>,
    global_best_score: f64,
    best_tour: Vec<usize>,
    current_score: f64,
    inertia_weight: f64,
    cognitive_weight: f64,
    social_weight: f64,
    iteration: usize,
}

impl PsoState {
    /// Builds the swarm: positions uniform in `[KEY_MIN, KEY_MAX]` per
    /// dimension, zero velocities, personal bests at the starting
    /// positions, and the global best as the swarm minimum.
    ///
    /// The configured particle count is clamped to
    /// [`MIN_PARTICLES`]..=[`MAX_PARTICLES`].
    pub fn init<R: Rng>(
        points: &[Point],
        config: &PsoConfig,
        rng: &mut R,
    ) -> Result<Self, TspError> {
        if points.is_empty() {
            return Err(TspError::EmptyInstance);
        }

        let n = points.len();
        let count = config.particle_count.clamp(MIN_PARTICLES, MAX_PARTICLES);

        let particles: Vec<Particle> = (0..count)
            .map(|_| {
                let position: Vec<f64> =
                    (0..n).map(|_| rng.random_range(KEY_MIN..=KEY_MAX)).collect();
                let tour = keys::decode(&position);
                let score = tour_length(points, &tour);
                Particle {
                    personal_best_position: position.clone(),
                    personal_best_score: score,
                    position,
                    velocity: vec![0.0; n],
                }
            })
            .collect();

        let leader = particles
            .iter()
            .min_by(|a, b| {
                a.personal_best_score
                    .partial_cmp(&b.personal_best_score)
                    .unwrap_or(std::cmp::Ordering::Equal)
            })
            .expect("swarm is never empty");

        let global_best_position = leader.personal_best_position.clone();
        let global_best_score = leader.personal_best_score;
        let best_tour = keys::decode(&global_best_position);

        Ok(Self {
            particles,
            global_best_position,
            global_best_score,
            best_tour,
            current_score: global_best_score,
            inertia_weight: config.inertia_weight,
            cognitive_weight: config.cognitive_weight,
            social_weight: config.social_weight,
            iteration: 0,
        })
    }

    /// Advances one iteration in two phases: evaluate every particle's
    /// current position (updating personal and global bests), then move
    /// every particle by the standard velocity/position update.
    ///
    /// Positions are hard-clamped into `[KEY_MIN, KEY_MAX]` after the
    /// move; velocity is not zeroed or reflected on clamp, so particles
    /// can stick at the boundary while velocity keeps pushing outward.
    pub fn step<R: Rng>(&mut self, points: &[Point], rng: &mut R) {
        // Phase 1: evaluation
        let mut iteration_best = f64::INFINITY;
        for particle in self.particles.iter_mut() {
            let tour = keys::decode(&particle.position);
            let score = tour_length(points, &tour);
            iteration_best = iteration_best.min(score);

            if score < particle.personal_best_score {
                particle.personal_best_score = score;
                particle
                    .personal_best_position
                    .copy_from_slice(&particle.position);

                if score < self.global_best_score {
                    self.global_best_score = score;
                    self.global_best_position.copy_from_slice(&particle.position);
                    self.best_tour = tour;
                }
            }
        }
        self.current_score = iteration_best;

        // Phase 2: move
        for particle in self.particles.iter_mut() {
            for d in 0..particle.position.len() {
                let r1: f64 = rng.random_range(0.0..1.0);
                let r2: f64 = rng.random_range(0.0..1.0);
                let cognitive = self.cognitive_weight
                    * r1
                    * (particle.personal_best_position[d] - particle.position[d]);
                let social = self.social_weight
                    * r2
                    * (self.global_best_position[d] - particle.position[d]);

                particle.velocity[d] =
                    self.inertia_weight * particle.velocity[d] + cognitive + social;
                particle.position[d] =
                    (particle.position[d] + particle.velocity[d]).clamp(KEY_MIN, KEY_MAX);
            }
        }

        self.iteration += 1;
    }

    /// Best score among the particles' positions at the latest
    /// evaluation.
    pub fn current_score(&self) -> f64 {
        self.current_score
    }

    /// Lowest score ever observed by the swarm. Non-increasing across
    /// steps.
    pub fn best_score(&self) -> f64 {
        self.global_best_score
    }

    /// Decoded tour of the global best position.
    pub fn best_tour(&self) -> &[usize] {
        &self.best_tour
    }

    /// Global best key vector.
    pub fn best_position(&self) -> &[f64] {
        &self.global_best_position
    }

    /// Actual (clamped) swarm size.
    pub fn particle_count(&self) -> usize {
        self.particles.len()
    }

    /// The swarm's particles.
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Number of steps taken so far.
    pub fn iteration(&self) -> usize {
        self.iteration
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{is_permutation, random_points};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn instance(n: usize) -> Vec<Point> {
        let mut rng = StdRng::seed_from_u64(7);
        random_points(n, 800.0, 600.0, 30.0, &mut rng)
    }

    #[test]
    fn test_init_empty_instance_fails() {
        let mut rng = StdRng::seed_from_u64(42);
        let result = PsoState::init(&[], &PsoConfig::default(), &mut rng);
        assert_eq!(result.err(), Some(TspError::EmptyInstance));
    }

    #[test]
    fn test_init_swarm_shape() {
        let points = instance(10);
        let mut rng = StdRng::seed_from_u64(42);
        let state = PsoState::init(&points, &PsoConfig::default(), &mut rng).unwrap();

        assert_eq!(state.particle_count(), 30);
        for particle in state.particles() {
            assert_eq!(particle.position.len(), 10);
            assert!(particle.velocity.iter().all(|&v| v == 0.0));
            assert!(particle
                .position
                .iter()
                .all(|&k| (KEY_MIN..=KEY_MAX).contains(&k)));
            assert!(particle.personal_best_score >= state.best_score());
        }
        assert!(is_permutation(state.best_tour(), 10));
    }

    #[test]
    fn test_init_clamps_particle_count() {
        let points = instance(5);
        let mut rng = StdRng::seed_from_u64(42);

        let config = PsoConfig {
            particle_count: 1,
            ..PsoConfig::default()
        };
        let state = PsoState::init(&points, &config, &mut rng).unwrap();
        assert_eq!(state.particle_count(), MIN_PARTICLES);

        let config = PsoConfig {
            particle_count: 100_000,
            ..PsoConfig::default()
        };
        let state = PsoState::init(&points, &config, &mut rng).unwrap();
        assert_eq!(state.particle_count(), MAX_PARTICLES);
    }

    #[test]
    fn test_positions_stay_clamped() {
        let points = instance(8);
        let mut rng = StdRng::seed_from_u64(42);
        let mut state = PsoState::init(&points, &PsoConfig::default(), &mut rng).unwrap();

        for _ in 0..100 {
            state.step(&points, &mut rng);
            for particle in state.particles() {
                assert!(particle
                    .position
                    .iter()
                    .all(|&k| (KEY_MIN..=KEY_MAX).contains(&k)));
            }
        }
    }

    #[test]
    fn test_global_best_non_increasing() {
        let points = instance(12);
        let mut rng = StdRng::seed_from_u64(42);
        let mut state = PsoState::init(&points, &PsoConfig::default(), &mut rng).unwrap();

        let mut prev = state.best_score();
        for _ in 0..100 {
            state.step(&points, &mut rng);
            assert!(state.best_score() <= prev + 1e-12);
            prev = state.best_score();
            assert!(is_permutation(state.best_tour(), 12));
        }
        assert_eq!(state.iteration(), 100);
    }

    #[test]
    fn test_personal_bests_bound_global_best() {
        let points = instance(10);
        let mut rng = StdRng::seed_from_u64(42);
        let mut state = PsoState::init(&points, &PsoConfig::default(), &mut rng).unwrap();

        for _ in 0..20 {
            state.step(&points, &mut rng);
        }
        for particle in state.particles() {
            assert!(particle.personal_best_score >= state.best_score() - 1e-12);
        }
    }

    #[test]
    fn test_best_tour_matches_best_position() {
        let points = instance(9);
        let mut rng = StdRng::seed_from_u64(42);
        let mut state = PsoState::init(&points, &PsoConfig::default(), &mut rng).unwrap();

        for _ in 0..30 {
            state.step(&points, &mut rng);
        }
        assert_eq!(state.best_tour(), keys::decode(state.best_position()));
    }

    #[test]
    fn test_zero_weights_freeze_swarm() {
        let points = instance(6);
        let mut rng = StdRng::seed_from_u64(42);
        let config = PsoConfig::default()
            .with_inertia_weight(0.0)
            .with_cognitive_weight(0.0)
            .with_social_weight(0.0);
        let mut state = PsoState::init(&points, &config, &mut rng).unwrap();

        let positions: Vec<Vec<f64>> = state
            .particles()
            .iter()
            .map(|p| p.position.clone())
            .collect();
        for _ in 0..5 {
            state.step(&points, &mut rng);
        }
        for (particle, original) in state.particles().iter().zip(&positions) {
            assert_eq!(&particle.position, original);
        }
    }
}
