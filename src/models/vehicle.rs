//! Vehicle type descriptors for the fleet.

/// A vehicle type available to the solver.
///
/// Describes a class of identical vehicles: how many exist, how far one can
/// travel on a round trip (autonomy), what a kilometer costs, and its cargo
/// capacity. The fleet is static per-run configuration, read-only during
/// evolution.
///
/// # Examples
///
/// ```
/// use evoroute::models::VehicleType;
///
/// let van = VehicleType::new("van", 2, 250.0)
///     .with_cost_per_km(1.4)
///     .with_max_weight_g(800_000.0);
/// assert_eq!(van.count(), 2);
/// assert_eq!(van.cost_per_km(), 1.4);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct VehicleType {
    name: String,
    count: usize,
    autonomy_km: f64,
    cost_per_km: f64,
    max_weight_g: f64,
    max_volume_cm3: f64,
}

impl VehicleType {
    /// Creates a vehicle type with the given name, available count, and
    /// autonomy in kilometers.
    ///
    /// Defaults: cost 1.0 per km, unlimited weight and volume capacity.
    pub fn new(name: impl Into<String>, count: usize, autonomy_km: f64) -> Self {
        Self {
            name: name.into(),
            count,
            autonomy_km,
            cost_per_km: 1.0,
            max_weight_g: f64::INFINITY,
            max_volume_cm3: f64::INFINITY,
        }
    }

    /// Sets the cost per kilometer traveled.
    pub fn with_cost_per_km(mut self, cost: f64) -> Self {
        self.cost_per_km = cost;
        self
    }

    /// Sets the maximum total cargo weight in grams.
    pub fn with_max_weight_g(mut self, max: f64) -> Self {
        self.max_weight_g = max;
        self
    }

    /// Sets the maximum total cargo volume in cubic centimeters.
    pub fn with_max_volume_cm3(mut self, max: f64) -> Self {
        self.max_volume_cm3 = max;
        self
    }

    /// Vehicle type name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of vehicles of this type in the fleet.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Maximum round-trip distance in kilometers.
    pub fn autonomy_km(&self) -> f64 {
        self.autonomy_km
    }

    /// Cost per kilometer traveled.
    pub fn cost_per_km(&self) -> f64 {
        self.cost_per_km
    }

    /// Maximum total cargo weight in grams.
    pub fn max_weight_g(&self) -> f64 {
        self.max_weight_g
    }

    /// Maximum total cargo volume in cubic centimeters.
    pub fn max_volume_cm3(&self) -> f64 {
        self.max_volume_cm3
    }
}

/// The stock two-type fleet: short-range cheap motorcycles and
/// longer-range, more expensive vans.
pub fn default_fleet() -> Vec<VehicleType> {
    vec![
        VehicleType::new("motorcycle", 5, 80.0).with_cost_per_km(1.0),
        VehicleType::new("van", 2, 250.0).with_cost_per_km(1.4),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vehicle_defaults() {
        let v = VehicleType::new("bike", 3, 40.0);
        assert_eq!(v.name(), "bike");
        assert_eq!(v.count(), 3);
        assert_eq!(v.autonomy_km(), 40.0);
        assert_eq!(v.cost_per_km(), 1.0);
        assert_eq!(v.max_weight_g(), f64::INFINITY);
        assert_eq!(v.max_volume_cm3(), f64::INFINITY);
    }

    #[test]
    fn test_vehicle_builder() {
        let v = VehicleType::new("truck", 1, 500.0)
            .with_cost_per_km(2.5)
            .with_max_weight_g(2_000_000.0)
            .with_max_volume_cm3(9_000_000.0);
        assert_eq!(v.cost_per_km(), 2.5);
        assert_eq!(v.max_weight_g(), 2_000_000.0);
        assert_eq!(v.max_volume_cm3(), 9_000_000.0);
    }

    #[test]
    fn test_default_fleet() {
        let fleet = default_fleet();
        assert_eq!(fleet.len(), 2);
        assert_eq!(fleet[0].name(), "motorcycle");
        assert_eq!(fleet[0].count(), 5);
        assert_eq!(fleet[1].name(), "van");
        assert!(fleet[1].autonomy_km() > fleet[0].autonomy_km());
    }
}
