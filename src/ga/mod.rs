//! Genetic algorithm components.
//!
//! - [`Selection`] — roulette / tournament / rank parent selection
//! - [`Crossover`] — permutation-preserving recombination (OX1, PMX, CX,
//!   k-point, ERX)
//! - [`Mutation`] — swap / inversion / scramble
//! - [`random_population`] — shuffled initial population
//! - [`GeneticEngine`] — the per-generation evolutionary loop
//!
//! Operator choices are enums dispatched per generation, so the hot loop
//! never compares strings and the compiler checks exhaustiveness.

mod config;
mod crossover;
mod engine;
mod mutation;
mod population;
mod selection;

pub use config::EngineConfig;
pub use crossover::{cx, erx, k_point, ox1, pmx, Crossover};
pub use engine::{BestSolution, GenerationStats, GeneticEngine};
pub use mutation::Mutation;
pub use population::{random_population, random_route};
pub use selection::Selection;
