//! TSP fitness: inverted tour cost, with an optional capacity-aware variant.

use tracing::warn;

use crate::models::{DeliveryPoint, Route, VehicleType};

use super::FitnessConfig;

/// Classic TSP fitness: the inverse of the closed cycle distance.
///
/// Returns 0.0 for routes whose cycle distance is zero (empty, single
/// point, or all points coincident) — never a division by zero, NaN, or
/// infinity.
///
/// # Examples
///
/// ```
/// use evoroute::fitness::tsp_fitness;
/// use evoroute::models::{DeliveryPoint, Route};
///
/// let route = Route::new(vec![
///     DeliveryPoint::new(0.0, 0.0),
///     DeliveryPoint::new(1.0, 0.0),
///     DeliveryPoint::new(1.0, 1.0),
///     DeliveryPoint::new(0.0, 1.0),
/// ]);
/// assert!((tsp_fitness(&route) - 0.25).abs() < 1e-10);
/// assert_eq!(tsp_fitness(&Route::new(vec![])), 0.0);
/// ```
pub fn tsp_fitness(route: &Route) -> f64 {
    let total_distance = route.cycle_distance();
    if total_distance <= 0.0 {
        warn!(points = route.len(), "fitness requested for zero-distance route");
        return 0.0;
    }
    1.0 / total_distance
}

/// Single-vehicle fitness with capacity and priority penalties.
///
/// The variant used when the tour is served by one vehicle instead of being
/// split across a fleet: cost is the scaled depot round trip plus penalties
/// for exceeding the vehicle's weight/volume capacity and for delivering
/// high-priority cargo late in the tour. Overshoots are penalized, never
/// clamped, so selection pressure can repair them across generations.
pub fn constrained_fitness(
    route: &Route,
    vehicle: &VehicleType,
    depot: &DeliveryPoint,
    config: &FitnessConfig,
) -> f64 {
    let total_distance = route.roundtrip_distance(depot) * config.scale_factor;
    if total_distance <= 0.0 {
        warn!(points = route.len(), "fitness requested for zero-distance route");
        return 0.0;
    }

    let mut total_weight_g = 0.0;
    let mut total_volume_cm3 = 0.0;
    for point in route.points() {
        if let Some(cargo) = point.cargo() {
            total_weight_g += cargo.weight_g();
            total_volume_cm3 += cargo.volume_cm3();
        }
    }

    let weight_overshoot = (total_weight_g - vehicle.max_weight_g()).max(0.0);
    let volume_overshoot = (total_volume_cm3 - vehicle.max_volume_cm3()).max(0.0);
    if weight_overshoot > 0.0 || volume_overshoot > 0.0 {
        warn!(
            vehicle = vehicle.name(),
            weight_overshoot_g = weight_overshoot,
            volume_overshoot_cm3 = volume_overshoot,
            "vehicle capacity exceeded, penalizing route"
        );
    }

    let weight_penalty = weight_overshoot * config.weight_penalty_factor;
    let volume_penalty = volume_overshoot * config.volume_penalty_factor;

    let n = route.len();
    let mut priority_penalty = 0.0;
    for (position, point) in route.points().iter().enumerate() {
        priority_penalty += point.priority() * position as f64 / (n - 1).max(1) as f64;
    }
    priority_penalty *= config.priority_weight;

    // Epsilon keeps the cost strictly positive for degenerate distances
    let total_cost = (total_distance + 1e-6) + weight_penalty + volume_penalty + priority_penalty;
    if total_cost > 0.0 {
        1.0 / total_cost
    } else {
        0.0
    }
}
