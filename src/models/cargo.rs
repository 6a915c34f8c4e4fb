//! Cargo descriptor with physical constraints.

use thiserror::Error;

/// Validation failure when constructing a [`Cargo`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CargoError {
    /// Weight is zero, negative, or not finite.
    #[error("weight must be > 0 g, got {0}")]
    NonPositiveWeight(f64),
    /// Weight exceeds the maximum allowed.
    #[error("weight must be <= {max} g, got {got}")]
    WeightExceeded { got: f64, max: f64 },
    /// A dimension is zero, negative, or not finite.
    #[error("{dim} must be > 0 cm, got {got}")]
    NonPositiveDimension { dim: &'static str, got: f64 },
    /// A single dimension exceeds the maximum allowed side length.
    #[error("{dim} must be <= {max} cm, got {got}")]
    DimensionExceeded { dim: &'static str, got: f64, max: f64 },
    /// The sum of the three dimensions exceeds the allowed total.
    #[error("dimension sum (length + width + height) must be <= {max} cm, got {got}")]
    DimensionSumExceeded { got: f64, max: f64 },
    /// Priority is outside `[0, 1]`.
    #[error("priority must be within [0, 1], got {0}")]
    PriorityOutOfRange(f64),
}

/// A cargo item attached to a delivery point.
///
/// All physical constraints are checked once, at construction. Invalid
/// values fail with a descriptive [`CargoError`] — they are never clamped.
///
/// Units: weight in grams, dimensions in centimeters, priority in `[0, 1]`
/// (1 = most urgent).
///
/// # Examples
///
/// ```
/// use evoroute::models::Cargo;
///
/// let cargo = Cargo::new("parcel", 1500.0, 30.0, 20.0, 10.0, 0.8).unwrap();
/// assert_eq!(cargo.weight_g(), 1500.0);
/// assert!((cargo.volume_cm3() - 6000.0).abs() < 1e-10);
///
/// // 12 kg is over the 10 kg limit
/// assert!(Cargo::new("too heavy", 12_000.0, 10.0, 10.0, 10.0, 0.0).is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Cargo {
    name: String,
    weight_g: f64,
    length_cm: f64,
    width_cm: f64,
    height_cm: f64,
    priority: f64,
}

impl Cargo {
    /// Maximum weight in grams (10 kg).
    pub const MAX_WEIGHT_G: f64 = 10_000.0;
    /// Maximum length of a single side in centimeters.
    pub const MAX_SIDE_CM: f64 = 100.0;
    /// Maximum sum of the three dimensions in centimeters.
    pub const MAX_DIMENSION_SUM_CM: f64 = 200.0;

    /// Creates a cargo item, validating every physical constraint.
    ///
    /// Returns a [`CargoError`] describing the first violated constraint.
    pub fn new(
        name: impl Into<String>,
        weight_g: f64,
        length_cm: f64,
        width_cm: f64,
        height_cm: f64,
        priority: f64,
    ) -> Result<Self, CargoError> {
        Self::validate_weight(weight_g)?;
        Self::validate_dimensions(length_cm, width_cm, height_cm)?;
        // NaN fails both bounds checks below
        if !(0.0..=1.0).contains(&priority) {
            return Err(CargoError::PriorityOutOfRange(priority));
        }

        Ok(Self {
            name: name.into(),
            weight_g,
            length_cm,
            width_cm,
            height_cm,
            priority,
        })
    }

    fn validate_weight(weight_g: f64) -> Result<(), CargoError> {
        if !(weight_g > 0.0) {
            return Err(CargoError::NonPositiveWeight(weight_g));
        }
        if weight_g > Self::MAX_WEIGHT_G {
            return Err(CargoError::WeightExceeded {
                got: weight_g,
                max: Self::MAX_WEIGHT_G,
            });
        }
        Ok(())
    }

    fn validate_dimensions(length: f64, width: f64, height: f64) -> Result<(), CargoError> {
        for (dim, value) in [("length", length), ("width", width), ("height", height)] {
            if !(value > 0.0) {
                return Err(CargoError::NonPositiveDimension { dim, got: value });
            }
            if value > Self::MAX_SIDE_CM {
                return Err(CargoError::DimensionExceeded {
                    dim,
                    got: value,
                    max: Self::MAX_SIDE_CM,
                });
            }
        }
        let sum = length + width + height;
        if sum > Self::MAX_DIMENSION_SUM_CM {
            return Err(CargoError::DimensionSumExceeded {
                got: sum,
                max: Self::MAX_DIMENSION_SUM_CM,
            });
        }
        Ok(())
    }

    /// Cargo name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Weight in grams.
    pub fn weight_g(&self) -> f64 {
        self.weight_g
    }

    /// Length in centimeters.
    pub fn length_cm(&self) -> f64 {
        self.length_cm
    }

    /// Width in centimeters.
    pub fn width_cm(&self) -> f64 {
        self.width_cm
    }

    /// Height in centimeters.
    pub fn height_cm(&self) -> f64 {
        self.height_cm
    }

    /// Delivery priority in `[0, 1]`, 1 = most urgent.
    pub fn priority(&self) -> f64 {
        self.priority
    }

    /// Volume in cubic centimeters, derived from the dimensions.
    pub fn volume_cm3(&self) -> f64 {
        self.length_cm * self.width_cm * self.height_cm
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_cargo() {
        let c = Cargo::new("box", 2500.0, 40.0, 30.0, 20.0, 0.5).expect("valid");
        assert_eq!(c.name(), "box");
        assert_eq!(c.weight_g(), 2500.0);
        assert!((c.volume_cm3() - 24_000.0).abs() < 1e-10);
        assert_eq!(c.priority(), 0.5);
    }

    #[test]
    fn test_boundary_values_accepted() {
        // Exactly at every limit
        let c = Cargo::new("edge", 10_000.0, 100.0, 50.0, 50.0, 1.0);
        assert!(c.is_ok());
        assert!(Cargo::new("min-prio", 1.0, 1.0, 1.0, 1.0, 0.0).is_ok());
    }

    #[test]
    fn test_weight_rejected() {
        assert_eq!(
            Cargo::new("c", 0.0, 10.0, 10.0, 10.0, 0.0),
            Err(CargoError::NonPositiveWeight(0.0))
        );
        assert_eq!(
            Cargo::new("c", -5.0, 10.0, 10.0, 10.0, 0.0),
            Err(CargoError::NonPositiveWeight(-5.0))
        );
        assert!(matches!(
            Cargo::new("c", 10_000.1, 10.0, 10.0, 10.0, 0.0),
            Err(CargoError::WeightExceeded { .. })
        ));
    }

    #[test]
    fn test_dimension_rejected() {
        assert!(matches!(
            Cargo::new("c", 100.0, 0.0, 10.0, 10.0, 0.0),
            Err(CargoError::NonPositiveDimension { dim: "length", .. })
        ));
        assert!(matches!(
            Cargo::new("c", 100.0, 10.0, 101.0, 10.0, 0.0),
            Err(CargoError::DimensionExceeded { dim: "width", .. })
        ));
    }

    #[test]
    fn test_dimension_sum_rejected() {
        // Each side fits, the sum does not
        assert!(matches!(
            Cargo::new("c", 100.0, 80.0, 80.0, 80.0, 0.0),
            Err(CargoError::DimensionSumExceeded { .. })
        ));
    }

    #[test]
    fn test_priority_rejected() {
        assert_eq!(
            Cargo::new("c", 100.0, 10.0, 10.0, 10.0, 1.5),
            Err(CargoError::PriorityOutOfRange(1.5))
        );
        assert_eq!(
            Cargo::new("c", 100.0, 10.0, 10.0, 10.0, -0.1),
            Err(CargoError::PriorityOutOfRange(-0.1))
        );
    }

    #[test]
    fn test_non_finite_rejected() {
        assert!(Cargo::new("c", f64::NAN, 10.0, 10.0, 10.0, 0.0).is_err());
        assert!(Cargo::new("c", f64::INFINITY, 10.0, 10.0, 10.0, 0.0).is_err());
        assert!(Cargo::new("c", 100.0, f64::NAN, 10.0, 10.0, 0.0).is_err());
        assert!(Cargo::new("c", 100.0, 10.0, 10.0, 10.0, f64::NAN).is_err());
    }

    #[test]
    fn test_error_message_is_descriptive() {
        let err = Cargo::new("c", 12_000.0, 10.0, 10.0, 10.0, 0.0).unwrap_err();
        assert_eq!(err.to_string(), "weight must be <= 10000 g, got 12000");
    }
}
