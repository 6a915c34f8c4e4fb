//! Parent selection strategies.

use std::cmp::Ordering;

use rand::seq::index;
use rand::Rng;

use crate::models::Route;

/// Strategy for picking parents out of the evaluated population.
///
/// All strategies maximize: higher fitness (inverted cost) is better.
///
/// # Examples
///
/// ```
/// use evoroute::ga::Selection;
///
/// // Moderate selection pressure
/// let sel = Selection::Tournament(3);
///
/// // Fitness-proportionate
/// let sel = Selection::Roulette;
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// Fitness-proportionate (roulette wheel) selection.
    ///
    /// Draws a uniform point on the cumulative fitness wheel. When the
    /// total fitness is zero the draw cannot be weighted and degrades to a
    /// uniform random pick — never an error.
    Roulette,

    /// Tournament selection: sample `k` distinct individuals, keep the
    /// fittest. `k` must be within `1..=population size`.
    Tournament(usize),

    /// Rank-based selection: roulette over ranks `1..=N` (1 = worst)
    /// instead of raw fitness, which compresses the pull of outlier
    /// super-individuals.
    Rank,
}

impl Default for Selection {
    fn default() -> Self {
        Selection::Roulette
    }
}

impl Selection {
    /// Selects one individual and returns its index in `population`.
    ///
    /// # Panics
    ///
    /// Panics if the population is empty, if `fitness` does not match the
    /// population length, or if a tournament size is outside
    /// `1..=population size`.
    pub fn select<R: Rng>(&self, population: &[Route], fitness: &[f64], rng: &mut R) -> usize {
        assert!(!population.is_empty(), "cannot select from an empty population");
        assert_eq!(
            population.len(),
            fitness.len(),
            "fitness scores must match the population"
        );

        match self {
            Selection::Roulette => roulette(fitness, rng),
            Selection::Tournament(k) => tournament(fitness, *k, rng),
            Selection::Rank => rank(fitness, rng),
        }
    }
}

fn roulette<R: Rng>(fitness: &[f64], rng: &mut R) -> usize {
    let n = fitness.len();
    let total: f64 = fitness.iter().sum();
    if total <= 0.0 {
        return rng.random_range(0..n);
    }

    let pick = rng.random_range(0.0..total);
    let mut cumulative = 0.0;
    for (i, &f) in fitness.iter().enumerate() {
        cumulative += f;
        if cumulative > pick {
            return i;
        }
    }
    n - 1 // floating-point fallback
}

fn tournament<R: Rng>(fitness: &[f64], k: usize, rng: &mut R) -> usize {
    let n = fitness.len();
    assert!(
        k >= 1 && k <= n,
        "tournament size must be within 1..=population size"
    );

    index::sample(rng, n, k)
        .iter()
        .max_by(|&a, &b| fitness[a].partial_cmp(&fitness[b]).unwrap_or(Ordering::Equal))
        .expect("tournament has at least one competitor")
}

fn rank<R: Rng>(fitness: &[f64], rng: &mut R) -> usize {
    let n = fitness.len();
    let mut order: Vec<usize> = (0..n).collect();
    // Ascending: worst individual first, so rank = position + 1
    order.sort_by(|&a, &b| fitness[a].partial_cmp(&fitness[b]).unwrap_or(Ordering::Equal));

    let total = (n * (n + 1) / 2) as f64;
    let pick = rng.random_range(0.0..total);
    let mut cumulative = 0.0;
    for (position, &individual) in order.iter().enumerate() {
        cumulative += (position + 1) as f64;
        if cumulative > pick {
            return individual;
        }
    }
    *order.last().expect("non-empty population")
}
