//! Route type: an ordered sequence of delivery points.

use super::DeliveryPoint;

/// An ordered, mutable sequence of delivery points.
///
/// Used both as a full TSP tour (a permutation of the whole point set) and,
/// after VRP splitting, as a contiguous sub-route assigned to one vehicle
/// type via [`assign_vehicle`](Route::assign_vehicle).
///
/// `Clone` produces an independent copy: the point sequence is not aliased
/// with the original.
///
/// # Examples
///
/// ```
/// use evoroute::models::{DeliveryPoint, Route};
///
/// let route = Route::new(vec![
///     DeliveryPoint::new(0.0, 0.0),
///     DeliveryPoint::new(1.0, 0.0),
///     DeliveryPoint::new(1.0, 1.0),
///     DeliveryPoint::new(0.0, 1.0),
/// ]);
/// assert!((route.cycle_distance() - 4.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    points: Vec<DeliveryPoint>,
    vehicle: Option<String>,
}

impl Route {
    /// Creates a route from an ordered point sequence, with no vehicle.
    pub fn new(points: Vec<DeliveryPoint>) -> Self {
        Self {
            points,
            vehicle: None,
        }
    }

    /// Assigns a vehicle type label to this route.
    pub fn assign_vehicle(&mut self, name: impl Into<String>) {
        self.vehicle = Some(name.into());
    }

    /// The assigned vehicle type label, if any.
    pub fn vehicle(&self) -> Option<&str> {
        self.vehicle.as_deref()
    }

    /// The ordered point sequence.
    pub fn points(&self) -> &[DeliveryPoint] {
        &self.points
    }

    /// Number of points in this route.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if the route has no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Total distance of the closed cycle through all points, wrapping from
    /// the last point back to the first.
    ///
    /// Returns 0.0 for empty and single-point routes (a self-loop has
    /// length zero).
    pub fn cycle_distance(&self) -> f64 {
        if self.points.is_empty() {
            return 0.0;
        }
        let n = self.points.len();
        let mut total = 0.0;
        for i in 0..n {
            total += self.points[i].distance_to(&self.points[(i + 1) % n]);
        }
        total
    }

    /// Total distance of the round trip depot → first → … → last → depot.
    ///
    /// Unlike [`cycle_distance`](Route::cycle_distance) there is no wrap
    /// from the last point to the first; the depot is the implicit start
    /// and end. Returns 0.0 for empty routes. Distances are unscaled
    /// geometry; unit conversion is a fitness concern.
    pub fn roundtrip_distance(&self, depot: &DeliveryPoint) -> f64 {
        let Some(first) = self.points.first() else {
            return 0.0;
        };
        let mut total = depot.distance_to(first);
        for pair in self.points.windows(2) {
            total += pair[0].distance_to(&pair[1]);
        }
        total += self.points.last().expect("non-empty").distance_to(depot);
        total
    }
}
