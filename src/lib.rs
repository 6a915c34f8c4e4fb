//! # evoroute
//!
//! Genetic algorithm solver for delivery routing: classic TSP and a
//! capacitated, multi-vehicle VRP with delivery priorities, vehicle
//! autonomy limits, and fleet-size constraints.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (DeliveryPoint, Cargo, Route, VehicleType)
//! - [`fitness`] — TSP and fleet fitness, route-splitting DP with vehicle choice
//! - [`ga`] — Genetic operators (selection, crossover, mutation) and the engine
//! - [`snapshot`] — Serializable route snapshots for downstream reporting
//!
//! ## Quick start
//!
//! ```
//! use evoroute::ga::{EngineConfig, GeneticEngine};
//! use evoroute::models::DeliveryPoint;
//!
//! let points = vec![
//!     DeliveryPoint::new(0.0, 0.0),
//!     DeliveryPoint::new(10.0, 0.0),
//!     DeliveryPoint::new(10.0, 10.0),
//!     DeliveryPoint::new(0.0, 10.0),
//! ];
//!
//! let config = EngineConfig::default()
//!     .with_population_size(20)
//!     .with_use_fleet(false)
//!     .with_seed(42);
//! let mut engine = GeneticEngine::new(config);
//! engine.set_delivery_points(points);
//!
//! for _ in 0..30 {
//!     engine.run_generation();
//! }
//! assert!(engine.best_fitness() > 0.0);
//! ```

pub mod fitness;
pub mod ga;
pub mod models;
pub mod snapshot;
