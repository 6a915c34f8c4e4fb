//! Fitness engine configuration.

/// Tunable constants of the fitness/cost model.
///
/// The penalty weights are empirical knobs, not derived quantities; expose
/// them per-engine instead of baking them in, so concurrent solvers can run
/// with different trade-offs.
///
/// # Examples
///
/// ```
/// use evoroute::fitness::FitnessConfig;
///
/// let config = FitnessConfig::default()
///     .with_max_vehicles_total(Some(5))
///     .with_priority_weight(3.0);
/// assert_eq!(config.max_vehicles_total, Some(5));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct FitnessConfig {
    /// Conversion factor from point-coordinate units to kilometers.
    ///
    /// The default 0.1 means 10 coordinate units ≈ 1 km.
    pub scale_factor: f64,

    /// Cost assigned to infeasible solutions. Any total cost at or above
    /// this threshold is treated as infeasible (fitness 0).
    pub big_penalty: f64,

    /// Weight of the priority-lateness penalty: high-priority cargo
    /// delivered late within its sub-route.
    pub priority_weight: f64,

    /// Penalty per gram of weight over a vehicle's capacity.
    pub weight_penalty_factor: f64,

    /// Penalty per cubic centimeter of volume over a vehicle's capacity.
    pub volume_penalty_factor: f64,

    /// Optional cap on the total number of vehicles used across all types.
    ///
    /// `None` disables the cap.
    pub max_vehicles_total: Option<usize>,
}

impl Default for FitnessConfig {
    fn default() -> Self {
        Self {
            scale_factor: 0.1,
            big_penalty: 1e12,
            priority_weight: 2.0,
            weight_penalty_factor: 1.0,
            volume_penalty_factor: 0.002,
            max_vehicles_total: None,
        }
    }
}

impl FitnessConfig {
    /// Sets the coordinate→km scale factor.
    pub fn with_scale_factor(mut self, scale: f64) -> Self {
        self.scale_factor = scale;
        self
    }

    /// Sets the infeasibility penalty threshold.
    pub fn with_big_penalty(mut self, penalty: f64) -> Self {
        self.big_penalty = penalty;
        self
    }

    /// Sets the priority-lateness penalty weight.
    pub fn with_priority_weight(mut self, weight: f64) -> Self {
        self.priority_weight = weight;
        self
    }

    /// Sets the weight-overshoot penalty factor.
    pub fn with_weight_penalty_factor(mut self, factor: f64) -> Self {
        self.weight_penalty_factor = factor;
        self
    }

    /// Sets the volume-overshoot penalty factor.
    pub fn with_volume_penalty_factor(mut self, factor: f64) -> Self {
        self.volume_penalty_factor = factor;
        self
    }

    /// Sets or clears the global vehicle-count cap.
    pub fn with_max_vehicles_total(mut self, limit: Option<usize>) -> Self {
        self.max_vehicles_total = limit;
        self
    }
}
