//! Delivery point type.

use std::hash::{Hash, Hasher};

use super::Cargo;

/// A delivery stop (or depot) in the plane, with optional attached cargo.
///
/// Two points are equal iff their coordinates match exactly; cargo is
/// excluded from identity, which supports de-duplication by location.
/// Coordinate identity is bitwise, so points can be used as hash-map keys.
///
/// # Examples
///
/// ```
/// use evoroute::models::{Cargo, DeliveryPoint};
///
/// let cargo = Cargo::new("parcel", 500.0, 10.0, 10.0, 10.0, 0.9).unwrap();
/// let a = DeliveryPoint::new(3.0, 4.0).with_cargo(cargo);
/// let b = DeliveryPoint::new(3.0, 4.0);
///
/// // Same location, different cargo: still equal
/// assert_eq!(a, b);
/// assert!((DeliveryPoint::depot(0.0, 0.0).distance_to(&a) - 5.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone)]
pub struct DeliveryPoint {
    x: f64,
    y: f64,
    cargo: Option<Cargo>,
}

impl DeliveryPoint {
    /// Creates a delivery point with no cargo.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y, cargo: None }
    }

    /// Creates a depot at the given coordinates.
    ///
    /// A depot is an ordinary point that carries no cargo; the alias makes
    /// call sites self-describing.
    pub fn depot(x: f64, y: f64) -> Self {
        Self::new(x, y)
    }

    /// Attaches cargo to this point.
    pub fn with_cargo(mut self, cargo: Cargo) -> Self {
        self.cargo = Some(cargo);
        self
    }

    /// X-coordinate.
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Y-coordinate.
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Attached cargo, if any.
    pub fn cargo(&self) -> Option<&Cargo> {
        self.cargo.as_ref()
    }

    /// Delivery priority of the attached cargo, or 0.0 for cargo-less points.
    pub fn priority(&self) -> f64 {
        self.cargo.as_ref().map_or(0.0, |c| c.priority())
    }

    /// Euclidean distance to another point.
    pub fn distance_to(&self, other: &DeliveryPoint) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    fn coordinate_bits(&self) -> (u64, u64) {
        (self.x.to_bits(), self.y.to_bits())
    }
}

impl PartialEq for DeliveryPoint {
    fn eq(&self, other: &Self) -> bool {
        self.coordinate_bits() == other.coordinate_bits()
    }
}

impl Eq for DeliveryPoint {}

impl Hash for DeliveryPoint {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.coordinate_bits().hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn sample_cargo() -> Cargo {
        Cargo::new("sample", 100.0, 10.0, 10.0, 10.0, 0.5).expect("valid")
    }

    #[test]
    fn test_distance() {
        let a = DeliveryPoint::new(0.0, 0.0);
        let b = DeliveryPoint::new(3.0, 4.0);
        assert!((a.distance_to(&b) - 5.0).abs() < 1e-10);
    }

    #[test]
    fn test_distance_symmetric() {
        let a = DeliveryPoint::new(1.0, 2.0);
        let b = DeliveryPoint::new(4.0, 6.0);
        assert!((a.distance_to(&b) - b.distance_to(&a)).abs() < 1e-10);
    }

    #[test]
    fn test_distance_to_self_is_zero() {
        let a = DeliveryPoint::new(7.0, -3.0);
        assert_eq!(a.distance_to(&a), 0.0);
    }

    #[test]
    fn test_equality_ignores_cargo() {
        let a = DeliveryPoint::new(1.0, 2.0).with_cargo(sample_cargo());
        let b = DeliveryPoint::new(1.0, 2.0);
        assert_eq!(a, b);
        assert_ne!(a, DeliveryPoint::new(1.0, 2.5));
    }

    #[test]
    fn test_depot_has_no_cargo() {
        let d = DeliveryPoint::depot(35.0, 35.0);
        assert!(d.cargo().is_none());
        assert_eq!(d.priority(), 0.0);
    }

    #[test]
    fn test_priority_from_cargo() {
        let p = DeliveryPoint::new(0.0, 0.0).with_cargo(sample_cargo());
        assert_eq!(p.priority(), 0.5);
    }

    #[test]
    fn test_dedup_by_location() {
        let points = vec![
            DeliveryPoint::new(1.0, 1.0).with_cargo(sample_cargo()),
            DeliveryPoint::new(1.0, 1.0),
            DeliveryPoint::new(2.0, 2.0),
        ];
        let unique: HashSet<DeliveryPoint> = points.into_iter().collect();
        assert_eq!(unique.len(), 2);
    }
}
