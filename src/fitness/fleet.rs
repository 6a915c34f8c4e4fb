//! Fleet fitness: split a tour across vehicle types and invert the cost.

use std::collections::HashMap;

use tracing::{debug, warn};

use crate::models::{DeliveryPoint, Route, VehicleType};

use super::{split_with_vehicle_choice, FitnessConfig};

/// Result of evaluating one tour against a fleet.
///
/// For infeasible tours (no vehicle combination can serve every point)
/// the fitness is 0.0 and `routes`/`vehicle_usage` are empty — a modeled
/// outcome, not an error, so selection pressure eliminates such
/// individuals instead of crashing the run.
#[derive(Debug, Clone, Default)]
pub struct FleetEvaluation {
    /// Inverted total cost; 0.0 for infeasible or empty tours.
    pub fitness: f64,
    /// Vehicle-labeled sub-routes in tour order.
    pub routes: Vec<Route>,
    /// Vehicles used, by type name.
    pub vehicle_usage: HashMap<String, usize>,
}

/// Evaluates a tour in VRP mode: optimal split into vehicle-assigned
/// sub-routes, fleet and priority penalties, then cost inversion.
///
/// # Examples
///
/// ```
/// use evoroute::fitness::{fleet_fitness, FitnessConfig};
/// use evoroute::models::{DeliveryPoint, Route, VehicleType};
///
/// let route = Route::new(vec![
///     DeliveryPoint::new(1.0, 0.0),
///     DeliveryPoint::new(2.0, 0.0),
/// ]);
/// let depot = DeliveryPoint::depot(0.0, 0.0);
/// let fleet = vec![VehicleType::new("van", 2, 100.0)];
/// let config = FitnessConfig::default().with_scale_factor(1.0);
///
/// let eval = fleet_fitness(&route, &depot, &fleet, &config);
/// assert!((eval.fitness - 0.25).abs() < 1e-10); // cost 4.0
/// assert_eq!(eval.routes.len(), 1);
/// ```
pub fn fleet_fitness(
    route: &Route,
    depot: &DeliveryPoint,
    fleet: &[VehicleType],
    config: &FitnessConfig,
) -> FleetEvaluation {
    if route.is_empty() {
        warn!("fleet fitness requested for an empty route");
        return FleetEvaluation::default();
    }

    let outcome = split_with_vehicle_choice(route.points(), depot, fleet, config);

    if outcome.total_cost >= config.big_penalty {
        warn!(
            reason = %infeasibility_reason(route.points(), depot, fleet, config),
            "infeasible fleet split, fitness forced to zero"
        );
        return FleetEvaluation::default();
    }

    debug!(
        total_cost = outcome.total_cost,
        routes = outcome.routes.len(),
        priority_penalty = outcome.priority_penalty,
        "fleet split evaluated"
    );

    let fitness = if outcome.total_cost > 0.0 {
        1.0 / outcome.total_cost
    } else {
        0.0
    };

    FleetEvaluation {
        fitness,
        routes: outcome.routes,
        vehicle_usage: outcome.vehicle_usage,
    }
}

/// Best-effort explanation of why no feasible split exists, for logs.
fn infeasibility_reason(
    points: &[DeliveryPoint],
    depot: &DeliveryPoint,
    fleet: &[VehicleType],
    config: &FitnessConfig,
) -> String {
    if fleet.is_empty() {
        return "fleet is empty".to_string();
    }

    let max_autonomy = fleet
        .iter()
        .map(VehicleType::autonomy_km)
        .fold(0.0, f64::max);
    if max_autonomy <= 0.0 {
        return "maximum fleet autonomy is zero".to_string();
    }

    let unreachable = points
        .iter()
        .filter(|p| 2.0 * depot.distance_to(p) * config.scale_factor > max_autonomy)
        .count();
    if unreachable > 0 {
        return format!(
            "{unreachable} point(s) beyond the maximum autonomy of {max_autonomy} km"
        );
    }

    if let Some(limit) = config.max_vehicles_total {
        return format!("global vehicle cap of {limit} exceeded");
    }

    "undetermined".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::default_fleet;

    fn unscaled() -> FitnessConfig {
        FitnessConfig::default().with_scale_factor(1.0)
    }

    #[test]
    fn test_fitness_is_inverse_cost() {
        let route = Route::new(vec![
            DeliveryPoint::new(1.0, 0.0),
            DeliveryPoint::new(2.0, 0.0),
            DeliveryPoint::new(3.0, 0.0),
        ]);
        let depot = DeliveryPoint::depot(0.0, 0.0);
        let fleet = vec![VehicleType::new("van", 2, 100.0)];
        let eval = fleet_fitness(&route, &depot, &fleet, &unscaled());

        assert!((eval.fitness - 1.0 / 6.0).abs() < 1e-12);
        assert_eq!(eval.routes.len(), 1);
        assert_eq!(eval.vehicle_usage.get("van"), Some(&1));
    }

    #[test]
    fn test_empty_route_yields_zero() {
        let depot = DeliveryPoint::depot(0.0, 0.0);
        let eval = fleet_fitness(&Route::new(vec![]), &depot, &default_fleet(), &unscaled());
        assert_eq!(eval.fitness, 0.0);
        assert!(eval.routes.is_empty());
        assert!(eval.vehicle_usage.is_empty());
    }

    #[test]
    fn test_infeasibility_propagates_as_zero() {
        let route = Route::new(vec![DeliveryPoint::new(1.0, 0.0)]);
        let depot = DeliveryPoint::depot(0.0, 0.0);
        let dead_fleet = vec![VehicleType::new("broken", 3, 0.0)];
        let eval = fleet_fitness(&route, &depot, &dead_fleet, &unscaled());

        assert_eq!(eval.fitness, 0.0);
        assert!(eval.routes.is_empty());
        assert!(eval.vehicle_usage.is_empty());
    }

    #[test]
    fn test_empty_fleet_propagates_as_zero() {
        let route = Route::new(vec![DeliveryPoint::new(1.0, 0.0)]);
        let depot = DeliveryPoint::depot(0.0, 0.0);
        let eval = fleet_fitness(&route, &depot, &[], &unscaled());
        assert_eq!(eval.fitness, 0.0);
        assert!(eval.routes.is_empty());
    }

    #[test]
    fn test_fleet_excess_degrades_but_does_not_zero() {
        // Opposite-side points force two trips with one bike: heavily
        // penalized yet still feasible
        let route = Route::new(vec![
            DeliveryPoint::new(1.0, 0.0),
            DeliveryPoint::new(-1.0, 0.0),
        ]);
        let depot = DeliveryPoint::depot(0.0, 0.0);
        let fleet = vec![VehicleType::new("bike", 1, 3.0)];
        let eval = fleet_fitness(&route, &depot, &fleet, &unscaled());

        assert!(eval.fitness > 0.0);
        assert!(eval.fitness < 1e-9);
        assert_eq!(eval.routes.len(), 2);
    }

    #[test]
    fn test_global_cap_excess_is_infeasible() {
        let route = Route::new(vec![
            DeliveryPoint::new(1.0, 0.0),
            DeliveryPoint::new(-1.0, 0.0),
        ]);
        let depot = DeliveryPoint::depot(0.0, 0.0);
        let fleet = vec![VehicleType::new("bike", 5, 3.0)];
        let config = unscaled().with_max_vehicles_total(Some(1));
        let eval = fleet_fitness(&route, &depot, &fleet, &config);

        assert_eq!(eval.fitness, 0.0);
        assert!(eval.routes.is_empty());
    }

    #[test]
    fn test_infeasibility_reason_strings() {
        let depot = DeliveryPoint::depot(0.0, 0.0);
        let far = vec![DeliveryPoint::new(100.0, 0.0)];
        let config = unscaled();

        assert_eq!(infeasibility_reason(&far, &depot, &[], &config), "fleet is empty");
        assert_eq!(
            infeasibility_reason(&far, &depot, &[VehicleType::new("b", 1, 0.0)], &config),
            "maximum fleet autonomy is zero"
        );
        let reason =
            infeasibility_reason(&far, &depot, &[VehicleType::new("b", 1, 5.0)], &config);
        assert!(reason.contains("1 point(s) beyond"));
    }
}
