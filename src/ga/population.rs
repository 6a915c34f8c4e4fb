//! Initial population construction.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::models::{DeliveryPoint, Route};

/// Creates a single route by shuffling the full point set.
///
/// # Panics
///
/// Panics if `points` is empty.
pub fn random_route<R: Rng>(points: &[DeliveryPoint], rng: &mut R) -> Route {
    assert!(!points.is_empty(), "delivery points must not be empty");
    let mut shuffled = points.to_vec();
    shuffled.shuffle(rng);
    Route::new(shuffled)
}

/// Creates an initial population of independently shuffled routes.
///
/// # Panics
///
/// Panics if `points` is empty or `size` is zero.
///
/// # Examples
///
/// ```
/// use evoroute::ga::random_population;
/// use evoroute::models::DeliveryPoint;
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
///
/// let points: Vec<_> = (0..5).map(|i| DeliveryPoint::new(i as f64, 0.0)).collect();
/// let mut rng = StdRng::seed_from_u64(42);
/// let population = random_population(&points, 10, &mut rng);
/// assert_eq!(population.len(), 10);
/// assert!(population.iter().all(|r| r.len() == 5));
/// ```
pub fn random_population<R: Rng>(
    points: &[DeliveryPoint],
    size: usize,
    rng: &mut R,
) -> Vec<Route> {
    assert!(size > 0, "population size must be positive");
    (0..size).map(|_| random_route(points, rng)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn sample_points(n: usize) -> Vec<DeliveryPoint> {
        (0..n).map(|i| DeliveryPoint::new(i as f64, 0.0)).collect()
    }

    #[test]
    fn test_each_route_is_a_permutation() {
        let points = sample_points(8);
        let mut rng = StdRng::seed_from_u64(42);
        let population = random_population(&points, 20, &mut rng);

        for route in &population {
            let mut xs: Vec<u64> = route.points().iter().map(|p| p.x().to_bits()).collect();
            xs.sort_unstable();
            let mut expected: Vec<u64> = points.iter().map(|p| p.x().to_bits()).collect();
            expected.sort_unstable();
            assert_eq!(xs, expected);
        }
    }

    #[test]
    fn test_shuffles_are_independent() {
        let points = sample_points(10);
        let mut rng = StdRng::seed_from_u64(42);
        let population = random_population(&points, 10, &mut rng);

        // With 10! orderings, ten identical shuffles would mean a broken rng
        let first = population[0].points();
        assert!(population.iter().skip(1).any(|r| r.points() != first));
    }

    #[test]
    #[should_panic(expected = "delivery points must not be empty")]
    fn test_empty_points_panics() {
        let mut rng = StdRng::seed_from_u64(1);
        random_route(&[], &mut rng);
    }

    #[test]
    #[should_panic(expected = "population size must be positive")]
    fn test_zero_size_panics() {
        let mut rng = StdRng::seed_from_u64(1);
        random_population(&sample_points(3), 0, &mut rng);
    }
}
