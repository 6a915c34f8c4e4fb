//! Engine configuration.

use super::{Crossover, Mutation, Selection};

/// Parameters controlling the evolutionary loop.
///
/// # Defaults
///
/// ```
/// use evoroute::ga::EngineConfig;
///
/// let config = EngineConfig::default();
/// assert_eq!(config.population_size, 50);
/// assert!(config.elitism);
/// ```
///
/// # Builder pattern
///
/// ```
/// use evoroute::ga::{Crossover, EngineConfig, Mutation, Selection};
///
/// let config = EngineConfig::default()
///     .with_population_size(100)
///     .with_selection(Selection::Tournament(3))
///     .with_crossover(Crossover::Ox1)
///     .with_mutation(Mutation::Inversion)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    /// Number of individuals per generation.
    pub population_size: usize,

    /// Parent selection strategy.
    pub selection: Selection,

    /// Crossover operator applied to each parent pair.
    pub crossover: Crossover,

    /// Mutation operator applied to each child.
    pub mutation: Mutation,

    /// Whether the generation's best individual is carried unchanged into
    /// the next population.
    pub elitism: bool,

    /// Evaluate in VRP fleet mode when a depot and fleet are set;
    /// otherwise the engine scores plain TSP cycles.
    pub use_fleet: bool,

    /// Random seed for reproducible runs. `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            population_size: 50,
            selection: Selection::Roulette,
            crossover: Crossover::Pmx,
            mutation: Mutation::Swap,
            elitism: true,
            use_fleet: true,
            seed: None,
        }
    }
}

impl EngineConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, size: usize) -> Self {
        self.population_size = size;
        self
    }

    /// Sets the selection strategy.
    pub fn with_selection(mut self, selection: Selection) -> Self {
        self.selection = selection;
        self
    }

    /// Sets the crossover operator.
    pub fn with_crossover(mut self, crossover: Crossover) -> Self {
        self.crossover = crossover;
        self
    }

    /// Sets the mutation operator.
    pub fn with_mutation(mut self, mutation: Mutation) -> Self {
        self.mutation = mutation;
        self
    }

    /// Enables or disables elitism.
    pub fn with_elitism(mut self, elitism: bool) -> Self {
        self.elitism = elitism;
        self
    }

    /// Enables or disables VRP fleet evaluation.
    pub fn with_use_fleet(mut self, use_fleet: bool) -> Self {
        self.use_fleet = use_fleet;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    ///
    /// Returns `Err` with a description if any parameter is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.population_size == 0 {
            return Err("population_size must be positive".into());
        }
        if let Selection::Tournament(k) = self.selection {
            if k == 0 || k > self.population_size {
                return Err("tournament size must be within 1..=population_size".into());
            }
        }
        if let Crossover::KPoint(k) = self.crossover {
            if k == 0 {
                return Err("k-point crossover requires k >= 1".into());
            }
        }
        Ok(())
    }
}
