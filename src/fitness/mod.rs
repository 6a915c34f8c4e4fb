//! Fitness and cost evaluation.
//!
//! Turns a route into a scalar fitness the genetic engine can maximize:
//!
//! - [`tsp_fitness`] — plain inverted cycle distance (classic TSP)
//! - [`constrained_fitness`] — single-vehicle round trip with capacity and
//!   priority penalties
//! - [`split_with_vehicle_choice`] — the VRP route-splitting DP that
//!   partitions a tour into vehicle-feasible sub-routes
//! - [`fleet_fitness`] — split + fleet/priority penalties, inverted
//!
//! All costs are finite and non-negative; infeasible solutions come back as
//! fitness 0.0 with empty routes, never as an error or a NaN.

mod config;
mod fleet;
mod split;
mod tsp;

pub use config::FitnessConfig;
pub use fleet::{fleet_fitness, FleetEvaluation};
pub use split::{split_with_vehicle_choice, SplitOutcome};
pub use tsp::{constrained_fitness, tsp_fitness};
