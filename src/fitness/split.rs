//! Route-splitting DP with per-segment vehicle choice.
//!
//! # Algorithm
//!
//! Treats a tour (ordered delivery points) as a sequence to be partitioned
//! into contiguous sub-routes, each served by one vehicle on a round trip
//! from the depot. Models the partition as a shortest path over cut points:
//! node `k` is the boundary after point `k`, and edge `(i, k)` means one
//! vehicle serves points `i..k`, priced with the cheapest fleet vehicle
//! whose autonomy covers the segment's round trip.
//!
//! # Complexity
//!
//! O(n² × |fleet|) worst case; in practice much less because a segment
//! stops extending once its round trip exceeds the largest autonomy in the
//! fleet.

use std::collections::HashMap;

use crate::models::{DeliveryPoint, Route, VehicleType};

use super::FitnessConfig;

/// Result of splitting one tour into vehicle-assigned sub-routes.
#[derive(Debug, Clone)]
pub struct SplitOutcome {
    /// DP base cost plus fleet/priority penalties. Values at or above
    /// [`FitnessConfig::big_penalty`] mean the tour is infeasible.
    pub total_cost: f64,
    /// Sub-routes in tour order, each labeled with its chosen vehicle type.
    pub routes: Vec<Route>,
    /// Vehicles used, by type name.
    pub vehicle_usage: HashMap<String, usize>,
    /// The weighted priority-lateness component of `total_cost`.
    pub priority_penalty: f64,
}

impl SplitOutcome {
    fn infeasible(config: &FitnessConfig) -> Self {
        Self {
            total_cost: config.big_penalty,
            routes: Vec::new(),
            vehicle_usage: HashMap::new(),
            priority_penalty: 0.0,
        }
    }
}

/// Splits a tour into contiguous sub-routes, choosing for every segment the
/// cheapest vehicle type whose autonomy covers its round trip.
///
/// Segment distances are round trips (depot → points → depot) scaled by
/// [`FitnessConfig::scale_factor`]. When no partition is feasible — empty
/// fleet, zero autonomy, or a single point out of every vehicle's range —
/// the outcome carries `total_cost = big_penalty` and empty routes/usage.
///
/// # Examples
///
/// ```
/// use evoroute::fitness::{split_with_vehicle_choice, FitnessConfig};
/// use evoroute::models::{DeliveryPoint, VehicleType};
///
/// let points = vec![
///     DeliveryPoint::new(1.0, 0.0),
///     DeliveryPoint::new(2.0, 0.0),
///     DeliveryPoint::new(3.0, 0.0),
/// ];
/// let depot = DeliveryPoint::depot(0.0, 0.0);
/// let fleet = vec![VehicleType::new("van", 2, 100.0)];
/// let config = FitnessConfig::default().with_scale_factor(1.0);
///
/// let outcome = split_with_vehicle_choice(&points, &depot, &fleet, &config);
/// // One van covers everything: 0→1→2→3→0 = 6
/// assert_eq!(outcome.routes.len(), 1);
/// assert!((outcome.total_cost - 6.0).abs() < 1e-10);
/// ```
pub fn split_with_vehicle_choice(
    points: &[DeliveryPoint],
    depot: &DeliveryPoint,
    fleet: &[VehicleType],
    config: &FitnessConfig,
) -> SplitOutcome {
    let n = points.len();
    if n == 0 {
        return SplitOutcome {
            total_cost: 0.0,
            routes: Vec::new(),
            vehicle_usage: HashMap::new(),
            priority_penalty: 0.0,
        };
    }

    let max_autonomy = fleet
        .iter()
        .map(VehicleType::autonomy_km)
        .fold(0.0, f64::max);

    // cost[k] = cheapest way to serve points[0..k]
    let mut cost = vec![f64::INFINITY; n + 1];
    let mut pred = vec![0usize; n + 1];
    let mut vehicle_at: Vec<Option<usize>> = vec![None; n + 1];
    cost[0] = 0.0;

    for i in 0..n {
        if cost[i].is_infinite() {
            continue;
        }

        let mut leg = 0.0;
        for j in i..n {
            if j == i {
                leg = depot.distance_to(&points[j]);
            } else {
                leg += points[j - 1].distance_to(&points[j]);
            }
            let roundtrip = (leg + points[j].distance_to(depot)) * config.scale_factor;

            // Euclidean round trips never shrink as the segment extends, so
            // past the largest autonomy no longer segment from i can fit.
            if roundtrip > max_autonomy {
                break;
            }

            let Some((vehicle_idx, segment_cost)) = cheapest_feasible_vehicle(roundtrip, fleet)
            else {
                continue;
            };

            let candidate = cost[i] + segment_cost;
            if candidate < cost[j + 1] {
                cost[j + 1] = candidate;
                pred[j + 1] = i;
                vehicle_at[j + 1] = Some(vehicle_idx);
            }
        }
    }

    if cost[n].is_infinite() {
        return SplitOutcome::infeasible(config);
    }

    let (routes, vehicle_usage) = reconstruct_routes(points, &pred, &vehicle_at, fleet);

    let priority_penalty = priority_lateness_penalty(&routes, config);
    let mut total_cost =
        cost[n] + priority_penalty + fleet_excess_penalty(&vehicle_usage, fleet, config);

    if let Some(limit) = config.max_vehicles_total {
        let used: usize = vehicle_usage.values().sum();
        if used > limit {
            total_cost += (used - limit) as f64 * config.big_penalty;
        }
    }

    SplitOutcome {
        total_cost,
        routes,
        vehicle_usage,
        priority_penalty,
    }
}

/// Picks the fleet vehicle serving `roundtrip_km` at the lowest cost.
///
/// Returns `(fleet index, segment cost)`, or `None` when no vehicle's
/// autonomy covers the distance.
fn cheapest_feasible_vehicle(roundtrip_km: f64, fleet: &[VehicleType]) -> Option<(usize, f64)> {
    let mut best: Option<(usize, f64)> = None;
    for (idx, vehicle) in fleet.iter().enumerate() {
        if roundtrip_km > vehicle.autonomy_km() {
            continue;
        }
        let segment_cost = vehicle.cost_per_km() * roundtrip_km;
        if best.map_or(true, |(_, c)| segment_cost < c) {
            best = Some((idx, segment_cost));
        }
    }
    best
}

/// Walks the DP back-pointers from `n` to `0`, materializing each segment
/// as a vehicle-labeled route and tallying usage per vehicle type.
fn reconstruct_routes(
    points: &[DeliveryPoint],
    pred: &[usize],
    vehicle_at: &[Option<usize>],
    fleet: &[VehicleType],
) -> (Vec<Route>, HashMap<String, usize>) {
    let mut routes = Vec::new();
    let mut usage: HashMap<String, usize> = HashMap::new();

    let mut end = points.len();
    while end > 0 {
        let start = pred[end];
        let vehicle_idx = vehicle_at[end].expect("reachable DP state has a vehicle");
        let vehicle = &fleet[vehicle_idx];

        let mut route = Route::new(points[start..end].to_vec());
        route.assign_vehicle(vehicle.name());
        routes.push(route);
        *usage.entry(vehicle.name().to_string()).or_insert(0) += 1;

        end = start;
    }

    routes.reverse();
    (routes, usage)
}

/// Penalty for high-priority cargo delivered late within its sub-route.
///
/// Each point contributes `priority × position / (len − 1)` — 0 for the
/// first stop of a segment, up to `priority` for the last. Segments with a
/// single stop contribute nothing.
fn priority_lateness_penalty(routes: &[Route], config: &FitnessConfig) -> f64 {
    let mut acc = 0.0;
    for route in routes {
        let len = route.len();
        if len <= 1 {
            continue;
        }
        for (position, point) in route.points().iter().enumerate() {
            acc += point.priority() * position as f64 / (len - 1) as f64;
        }
    }
    acc * config.priority_weight
}

/// Penalty for using more vehicles of a type than the fleet owns.
fn fleet_excess_penalty(
    usage: &HashMap<String, usize>,
    fleet: &[VehicleType],
    config: &FitnessConfig,
) -> f64 {
    let mut penalty = 0.0;
    for vehicle in fleet {
        let used = usage.get(vehicle.name()).copied().unwrap_or(0);
        if used > vehicle.count() {
            penalty += (used - vehicle.count()) as f64 * config.big_penalty * 0.01;
        }
    }
    penalty
}
