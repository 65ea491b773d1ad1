//! GA state machine: population initialization and per-generation steps.

use rand::Rng;

use super::config::{GaConfig, ELITE_FRACTION, MAX_POPULATION, MIN_POPULATION, MUTATION_RATE};
use super::operators::{order_crossover, swap_mutation};
use crate::error::TspError;
use crate::geometry::{random_tour, tour_length, Point};

/// A scored tour in the population.
#[derive(Debug, Clone)]
pub struct GaIndividual {
    pub tour: Vec<usize>,
    pub score: f64,
}

/// Population state of the genetic algorithm.
///
/// The population is kept sorted ascending by score between steps, so
/// rank 0 is always the current generation's best individual.
#[derive(Debug, Clone)]
pub struct GaState {
    population: Vec<GaIndividual>,
    generation: usize,
    elite_count: usize,
    best: GaIndividual,
}

impl GaState {
    /// Builds the initial population: independent uniform-random
    /// permutations, scored and sorted ascending.
    ///
    /// The configured population size is clamped to
    /// [`MIN_POPULATION`]..=[`MAX_POPULATION`].
    pub fn init<R: Rng>(
        points: &[Point],
        config: &GaConfig,
        rng: &mut R,
    ) -> Result<Self, TspError> {
        if points.is_empty() {
            return Err(TspError::EmptyInstance);
        }

        let pop_size = config.population_size.clamp(MIN_POPULATION, MAX_POPULATION);
        let mut population: Vec<GaIndividual> = (0..pop_size)
            .map(|_| {
                let tour = random_tour(points.len(), rng);
                let score = tour_length(points, &tour);
                GaIndividual { tour, score }
            })
            .collect();
        sort_by_score(&mut population);

        let elite_count = ((pop_size as f64 * ELITE_FRACTION) as usize).max(1);
        let best = population[0].clone();

        Ok(Self {
            population,
            generation: 0,
            elite_count,
            best,
        })
    }

    /// Advances one generation.
    ///
    /// Builds a full next population via tournament selection, order
    /// crossover, and swap mutation, then replaces the worst
    /// `elite_count` slots with the previous generation's best
    /// individuals so the top of the population never regresses.
    pub fn step<R: Rng>(&mut self, points: &[Point], rng: &mut R) {
        let pop_size = self.population.len();

        let mut next: Vec<GaIndividual> = Vec::with_capacity(pop_size);
        while next.len() < pop_size {
            let p1 = tournament(&self.population, rng);
            let p2 = tournament(&self.population, rng);
            let mut tour = order_crossover(&p1.tour, &p2.tour, rng);
            swap_mutation(&mut tour, MUTATION_RATE, rng);
            let score = tour_length(points, &tour);
            next.push(GaIndividual { tour, score });
        }
        sort_by_score(&mut next);

        // Elitism: previous generation's top individuals overwrite the
        // worst offspring, then the ascending order is restored.
        let elites = self.elite_count.min(pop_size);
        for k in 0..elites {
            next[pop_size - 1 - k] = self.population[k].clone();
        }
        sort_by_score(&mut next);

        self.population = next;
        self.generation += 1;

        if self.population[0].score < self.best.score {
            self.best = self.population[0].clone();
        }
    }

    /// Best score in the current population.
    pub fn current_score(&self) -> f64 {
        self.population[0].score
    }

    /// Lowest score ever observed. Non-increasing across generations.
    pub fn best_score(&self) -> f64 {
        self.best.score
    }

    /// Tour of the best individual ever observed.
    pub fn best_tour(&self) -> &[usize] {
        &self.best.tour
    }

    /// Number of generations stepped so far.
    pub fn generation(&self) -> usize {
        self.generation
    }

    /// Actual (clamped) population size.
    pub fn population_size(&self) -> usize {
        self.population.len()
    }

    /// Number of elites carried over each generation.
    pub fn elite_count(&self) -> usize {
        self.elite_count
    }

    /// Current population, sorted ascending by score.
    pub fn population(&self) -> &[GaIndividual] {
        &self.population
    }
}

/// Tournament of two: draw two uniform candidates, the lower score wins.
fn tournament<'a, R: Rng>(population: &'a [GaIndividual], rng: &mut R) -> &'a GaIndividual {
    let a = &population[rng.random_range(0..population.len())];
    let b = &population[rng.random_range(0..population.len())];
    if a.score < b.score {
        a
    } else {
        b
    }
}

fn sort_by_score(population: &mut [GaIndividual]) {
    population.sort_by(|x, y| {
        x.score
            .partial_cmp(&y.score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
}
