//! Serializable snapshots of solver output for downstream reporting.
//!
//! The rendering and report-generation layers consume a plain, ordered
//! description of the best solution: stops with coordinates and priorities,
//! per-vehicle route assignment, and the fleet the run was configured with.
//! These types carry exactly that — no solver internals leak through.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::models::{Route, VehicleType};

/// Summary of the cargo at one stop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CargoSummary {
    /// Cargo name.
    pub name: String,
    /// Weight in grams.
    pub weight_g: f64,
    /// Volume in cubic centimeters.
    pub volume_cm3: f64,
}

/// One stop of a route, in visiting order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StopSnapshot {
    /// X-coordinate.
    pub x: f64,
    /// Y-coordinate.
    pub y: f64,
    /// Delivery priority, 0.0 for cargo-less stops.
    pub priority: f64,
    /// Cargo summary, if the stop carries cargo.
    pub cargo: Option<CargoSummary>,
}

/// One route of the solution with its vehicle assignment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteSnapshot {
    /// Assigned vehicle type name, `None` for an unsplit TSP tour.
    pub vehicle: Option<String>,
    /// Stops in visiting order.
    pub stops: Vec<StopSnapshot>,
}

impl RouteSnapshot {
    /// Captures a route's stops and vehicle assignment.
    pub fn from_route(route: &Route) -> Self {
        Self {
            vehicle: route.vehicle().map(str::to_string),
            stops: route
                .points()
                .iter()
                .map(|point| StopSnapshot {
                    x: point.x(),
                    y: point.y(),
                    priority: point.priority(),
                    cargo: point.cargo().map(|cargo| CargoSummary {
                        name: cargo.name().to_string(),
                        weight_g: cargo.weight_g(),
                        volume_cm3: cargo.volume_cm3(),
                    }),
                })
                .collect(),
        }
    }
}

/// Fleet configuration entry, for the constraints section of a report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FleetEntry {
    /// Vehicle type name.
    pub name: String,
    /// Vehicles of this type available.
    pub count: usize,
    /// Maximum round-trip distance in kilometers.
    pub autonomy_km: f64,
    /// Cost per kilometer.
    pub cost_per_km: f64,
}

/// The full reporting snapshot of a solver run's best solution.
///
/// # Examples
///
/// ```
/// use evoroute::ga::{EngineConfig, GeneticEngine};
/// use evoroute::models::DeliveryPoint;
///
/// let mut engine = GeneticEngine::new(
///     EngineConfig::default().with_use_fleet(false).with_seed(42),
/// );
/// engine.set_delivery_points(vec![
///     DeliveryPoint::new(0.0, 0.0),
///     DeliveryPoint::new(5.0, 0.0),
///     DeliveryPoint::new(5.0, 5.0),
/// ]);
/// engine.run_generation();
///
/// let snapshot = engine.snapshot().expect("a best solution exists");
/// let json = snapshot.to_json().expect("serializes");
/// assert!(json.contains("\"routes\""));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolutionSnapshot {
    /// Generations executed when the snapshot was taken.
    pub generation: usize,
    /// Fitness of the best solution.
    pub best_fitness: f64,
    /// Routes of the best solution, one per vehicle in fleet mode.
    pub routes: Vec<RouteSnapshot>,
    /// Vehicles used by type name; empty in TSP mode.
    pub vehicle_usage: HashMap<String, usize>,
    /// The fleet the run was configured with; empty in TSP mode.
    pub fleet: Vec<FleetEntry>,
}

impl SolutionSnapshot {
    /// Assembles a snapshot from solver output.
    pub fn new(
        generation: usize,
        best_fitness: f64,
        routes: Vec<RouteSnapshot>,
        vehicle_usage: HashMap<String, usize>,
        fleet: &[VehicleType],
    ) -> Self {
        Self {
            generation,
            best_fitness,
            routes,
            vehicle_usage,
            fleet: fleet
                .iter()
                .map(|vehicle| FleetEntry {
                    name: vehicle.name().to_string(),
                    count: vehicle.count(),
                    autonomy_km: vehicle.autonomy_km(),
                    cost_per_km: vehicle.cost_per_km(),
                })
                .collect(),
        }
    }

    /// Serializes the snapshot to JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Cargo, DeliveryPoint};

    fn labeled_route() -> Route {
        let cargo = Cargo::new("parcel", 1200.0, 20.0, 15.0, 10.0, 0.7).expect("valid");
        let mut route = Route::new(vec![
            DeliveryPoint::new(1.0, 2.0).with_cargo(cargo),
            DeliveryPoint::new(3.0, 4.0),
        ]);
        route.assign_vehicle("van");
        route
    }

    #[test]
    fn test_route_snapshot_preserves_order_and_cargo() {
        let snapshot = RouteSnapshot::from_route(&labeled_route());

        assert_eq!(snapshot.vehicle.as_deref(), Some("van"));
        assert_eq!(snapshot.stops.len(), 2);
        assert_eq!(snapshot.stops[0].x, 1.0);
        assert_eq!(snapshot.stops[0].priority, 0.7);
        let cargo = snapshot.stops[0].cargo.as_ref().expect("cargo present");
        assert_eq!(cargo.name, "parcel");
        assert_eq!(cargo.weight_g, 1200.0);
        assert!((cargo.volume_cm3 - 3000.0).abs() < 1e-10);
        assert!(snapshot.stops[1].cargo.is_none());
        assert_eq!(snapshot.stops[1].priority, 0.0);
    }

    #[test]
    fn test_solution_snapshot_json_round_trip() {
        let fleet = vec![VehicleType::new("van", 2, 250.0).with_cost_per_km(1.4)];
        let mut usage = HashMap::new();
        usage.insert("van".to_string(), 1);
        let snapshot = SolutionSnapshot::new(
            12,
            0.05,
            vec![RouteSnapshot::from_route(&labeled_route())],
            usage,
            &fleet,
        );

        let json = snapshot.to_json().expect("serializes");
        let parsed: SolutionSnapshot = serde_json::from_str(&json).expect("parses back");
        assert_eq!(parsed, snapshot);
        assert_eq!(parsed.fleet[0].name, "van");
        assert_eq!(parsed.vehicle_usage.get("van"), Some(&1));
    }
}
