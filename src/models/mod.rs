//! Domain model types for the routing solver.
//!
//! Provides the core abstractions: delivery points with optional cargo,
//! cargo descriptors with constructor-time validation, routes as ordered
//! point sequences, and vehicle type descriptors for the fleet.

mod cargo;
mod point;
mod route;
mod vehicle;

pub use cargo::{Cargo, CargoError};
pub use point::DeliveryPoint;
pub use route::Route;
pub use vehicle::{default_fleet, VehicleType};
