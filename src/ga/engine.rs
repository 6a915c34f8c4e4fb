//! The per-generation evolutionary loop.

use std::cmp::Ordering;
use std::collections::HashMap;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info, warn};

use crate::fitness::{fleet_fitness, tsp_fitness, FitnessConfig, FleetEvaluation};
use crate::models::{DeliveryPoint, Route, VehicleType};
use crate::snapshot::{RouteSnapshot, SolutionSnapshot};

use super::{population, EngineConfig};

/// Statistics of one executed generation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationStats {
    /// Index of the generation these statistics describe.
    pub generation: usize,
    /// Highest fitness in the generation.
    pub max_fitness: f64,
    /// Mean fitness across the generation.
    pub mean_fitness: f64,
}

/// The best solution found so far, deep-copied out of its generation.
#[derive(Debug, Clone)]
pub struct BestSolution {
    /// The winning tour.
    pub route: Route,
    /// Its fitness.
    pub fitness: f64,
    /// Vehicle-labeled sub-routes when evaluated in fleet mode, empty in
    /// TSP mode.
    pub routes: Vec<Route>,
    /// Vehicles used by type name; empty in TSP mode.
    pub vehicle_usage: HashMap<String, usize>,
}

/// Orchestrates the genetic algorithm over a set of delivery points.
///
/// Each [`run_generation`](GeneticEngine::run_generation) call is one
/// self-contained, blocking unit of work: fitness evaluation, best-solution
/// tracking, history bookkeeping, selection, crossover, and mutation. The
/// caller decides when to stop; the engine has no terminal state.
///
/// All state is owned by the engine instance. Downstream consumers read
/// [`best`](GeneticEngine::best) and the histories between generations.
///
/// # Examples
///
/// ```
/// use evoroute::ga::{EngineConfig, GeneticEngine};
/// use evoroute::models::{default_fleet, DeliveryPoint};
///
/// let mut engine = GeneticEngine::new(EngineConfig::default().with_seed(42));
/// engine.set_delivery_points(vec![
///     DeliveryPoint::new(10.0, 0.0),
///     DeliveryPoint::new(0.0, 10.0),
///     DeliveryPoint::new(-10.0, 0.0),
/// ]);
/// engine.set_vrp_context(DeliveryPoint::depot(0.0, 0.0), default_fleet());
///
/// let stats = engine.run_generation();
/// assert_eq!(stats.generation, 0);
/// assert!(engine.best_fitness() > 0.0);
/// ```
pub struct GeneticEngine {
    config: EngineConfig,
    fitness_config: FitnessConfig,
    delivery_points: Vec<DeliveryPoint>,
    depot: Option<DeliveryPoint>,
    fleet: Vec<VehicleType>,
    population: Vec<Route>,
    current_generation: usize,
    best: Option<BestSolution>,
    fitness_history: Vec<f64>,
    mean_fitness_history: Vec<f64>,
    rng: StdRng,
}

impl GeneticEngine {
    /// Creates an engine with the given configuration and the default
    /// fitness constants.
    ///
    /// # Panics
    ///
    /// Panics if the configuration is invalid; call
    /// [`EngineConfig::validate`] first for a descriptive error.
    pub fn new(config: EngineConfig) -> Self {
        config.validate().expect("invalid EngineConfig");
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self {
            config,
            fitness_config: FitnessConfig::default(),
            delivery_points: Vec::new(),
            depot: None,
            fleet: Vec::new(),
            population: Vec::new(),
            current_generation: 0,
            best: None,
            fitness_history: Vec::new(),
            mean_fitness_history: Vec::new(),
            rng,
        }
    }

    /// Replaces the fitness constants.
    pub fn with_fitness_config(mut self, fitness_config: FitnessConfig) -> Self {
        self.fitness_config = fitness_config;
        self
    }

    /// Sets the delivery points to route over.
    ///
    /// Call [`reset`](GeneticEngine::reset) afterwards if a run is already
    /// in progress; the existing population refers to the old point set.
    pub fn set_delivery_points(&mut self, points: Vec<DeliveryPoint>) {
        self.delivery_points = points;
    }

    /// Sets the VRP context: the depot and the available fleet.
    pub fn set_vrp_context(&mut self, depot: DeliveryPoint, fleet: Vec<VehicleType>) {
        self.depot = Some(depot);
        self.fleet = fleet;
    }

    /// Sets or clears the global cap on vehicles used per solution.
    pub fn set_max_vehicles_total(&mut self, limit: Option<usize>) {
        self.fitness_config.max_vehicles_total = limit;
    }

    /// Clears all evolutionary state (population, best, histories,
    /// generation counter) while keeping configuration and inputs.
    pub fn reset(&mut self) {
        self.population.clear();
        self.current_generation = 0;
        self.best = None;
        self.fitness_history.clear();
        self.mean_fitness_history.clear();
    }

    /// Fills the population with independently shuffled tours.
    pub fn initialize_population(&mut self) {
        if self.delivery_points.is_empty() {
            warn!("no delivery points set, population stays empty");
            self.population.clear();
            return;
        }
        self.population = population::random_population(
            &self.delivery_points,
            self.config.population_size,
            &mut self.rng,
        );
    }

    /// Runs one complete generation and returns its statistics.
    ///
    /// Initializes the population on first call. With no delivery points
    /// set this is a warning no-op, never a panic.
    pub fn run_generation(&mut self) -> GenerationStats {
        if self.population.is_empty() {
            self.initialize_population();
        }
        let generation = self.current_generation;
        if self.population.is_empty() {
            return GenerationStats {
                generation,
                max_fitness: 0.0,
                mean_fitness: 0.0,
            };
        }

        let (scores, mut evaluations) = self.evaluate_population();

        let best_idx = argmax(&scores).expect("population is non-empty");
        let max_fitness = scores[best_idx];
        let mean_fitness = scores.iter().sum::<f64>() / scores.len() as f64;

        if max_fitness > self.best_fitness() {
            let (routes, vehicle_usage) = match evaluations.as_mut() {
                Some(evaluations) => {
                    let eval = std::mem::take(&mut evaluations[best_idx]);
                    (eval.routes, eval.vehicle_usage)
                }
                None => (Vec::new(), HashMap::new()),
            };
            info!(generation, fitness = max_fitness, "new best solution");
            self.best = Some(BestSolution {
                route: self.population[best_idx].clone(),
                fitness: max_fitness,
                routes,
                vehicle_usage,
            });
        }

        self.fitness_history.push(max_fitness);
        self.mean_fitness_history.push(mean_fitness);

        if generation % 10 == 0 {
            debug!(generation, max_fitness, mean_fitness, "generation checkpoint");
        }

        self.evolve(&scores, best_idx);
        self.current_generation += 1;

        GenerationStats {
            generation,
            max_fitness,
            mean_fitness,
        }
    }

    fn fleet_mode(&self) -> bool {
        self.config.use_fleet && self.depot.is_some() && !self.fleet.is_empty()
    }

    fn evaluate_population(&self) -> (Vec<f64>, Option<Vec<FleetEvaluation>>) {
        if self.fleet_mode() {
            let depot = self.depot.as_ref().expect("fleet mode requires a depot");
            let evaluations: Vec<FleetEvaluation> = self
                .population
                .iter()
                .map(|route| fleet_fitness(route, depot, &self.fleet, &self.fitness_config))
                .collect();
            let scores = evaluations.iter().map(|e| e.fitness).collect();
            (scores, Some(evaluations))
        } else {
            (self.population.iter().map(tsp_fitness).collect(), None)
        }
    }

    /// Builds the next population: selection, consecutive pairing with
    /// wrap-around, crossover, mutation, and the elitism override.
    fn evolve(&mut self, scores: &[f64], best_idx: usize) {
        let n = self.population.len();

        let mut selected = Vec::with_capacity(n);
        for _ in 0..n {
            let idx = self
                .config
                .selection
                .select(&self.population, scores, &mut self.rng);
            selected.push(self.population[idx].clone());
        }

        let mut next = Vec::with_capacity(n + 1);
        for i in (0..n).step_by(2) {
            let parent1 = &selected[i];
            let parent2 = &selected[(i + 1) % n];
            let (child1, child2) = self.config.crossover.apply(parent1, parent2, &mut self.rng);
            next.push(self.config.mutation.apply(&child1, &mut self.rng));
            next.push(self.config.mutation.apply(&child2, &mut self.rng));
        }
        next.truncate(n);

        if self.config.elitism {
            // The elite lands after crossover/mutation, so the prior best
            // survives verbatim
            let last = next.len() - 1;
            next[last] = self.population[best_idx].clone();
        }

        self.population = next;
    }

    /// The current population.
    pub fn population(&self) -> &[Route] {
        &self.population
    }

    /// The delivery points being routed.
    pub fn delivery_points(&self) -> &[DeliveryPoint] {
        &self.delivery_points
    }

    /// Number of generations executed so far.
    pub fn current_generation(&self) -> usize {
        self.current_generation
    }

    /// The best solution found so far, if any generation has run.
    pub fn best(&self) -> Option<&BestSolution> {
        self.best.as_ref()
    }

    /// The best tour found so far.
    pub fn best_route(&self) -> Option<&Route> {
        self.best.as_ref().map(|b| &b.route)
    }

    /// The best fitness found so far, 0.0 before the first evaluation.
    pub fn best_fitness(&self) -> f64 {
        self.best.as_ref().map_or(0.0, |b| b.fitness)
    }

    /// Maximum fitness per generation, append-only.
    pub fn fitness_history(&self) -> &[f64] {
        &self.fitness_history
    }

    /// Mean fitness per generation, append-only.
    pub fn mean_fitness_history(&self) -> &[f64] {
        &self.mean_fitness_history
    }

    /// The fitness constants in effect.
    pub fn fitness_config(&self) -> &FitnessConfig {
        &self.fitness_config
    }

    /// Builds the reporting snapshot of the best solution, or `None` when
    /// nothing has been evaluated yet.
    ///
    /// Fleet-mode solutions expose one snapshot route per vehicle-labeled
    /// sub-route; TSP solutions expose the single best tour.
    pub fn snapshot(&self) -> Option<SolutionSnapshot> {
        let best = self.best.as_ref()?;
        let routes = if best.routes.is_empty() {
            vec![RouteSnapshot::from_route(&best.route)]
        } else {
            best.routes.iter().map(RouteSnapshot::from_route).collect()
        };
        Some(SolutionSnapshot::new(
            self.current_generation,
            best.fitness,
            routes,
            best.vehicle_usage.clone(),
            &self.fleet,
        ))
    }
}

fn argmax(scores: &[f64]) -> Option<usize> {
    scores
        .iter()
        .enumerate()
        .max_by(|a, b| a.1.partial_cmp(b.1).unwrap_or(Ordering::Equal))
        .map(|(idx, _)| idx)
}
