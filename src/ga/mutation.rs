//! Mutation operators over delivery routes.

use rand::seq::{index, SliceRandom};
use rand::Rng;

use crate::models::Route;

use super::crossover::random_slice;

/// Mutation operator choice.
///
/// Every operator works on a copy of the route's point sequence and returns
/// a new route; the input is never mutated. The output is always a
/// permutation of the input's points. Routes shorter than two points come
/// back as unchanged copies.
///
/// # Examples
///
/// ```
/// use evoroute::ga::Mutation;
/// use evoroute::models::{DeliveryPoint, Route};
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
///
/// let route = Route::new(vec![
///     DeliveryPoint::new(0.0, 0.0),
///     DeliveryPoint::new(1.0, 0.0),
///     DeliveryPoint::new(2.0, 0.0),
/// ]);
/// let mut rng = StdRng::seed_from_u64(42);
/// let mutated = Mutation::Swap.apply(&route, &mut rng);
/// assert_eq!(mutated.len(), route.len());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mutation {
    /// Exchange two distinct random positions.
    Swap,
    /// Reverse a random sub-range.
    Inversion,
    /// Shuffle a random sub-range uniformly at random.
    Scramble,
}

impl Default for Mutation {
    fn default() -> Self {
        Mutation::Swap
    }
}

impl Mutation {
    /// Returns a mutated copy of the route.
    pub fn apply<R: Rng>(&self, route: &Route, rng: &mut R) -> Route {
        let n = route.len();
        if n < 2 {
            return route.clone();
        }

        let mut points = route.points().to_vec();
        match self {
            Mutation::Swap => {
                let picked = index::sample(rng, n, 2);
                points.swap(picked.index(0), picked.index(1));
            }
            Mutation::Inversion => {
                let (start, end) = random_slice(n, rng);
                points[start..end].reverse();
            }
            Mutation::Scramble => {
                let (start, end) = random_slice(n, rng);
                points[start..end].shuffle(rng);
            }
        }
        Route::new(points)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DeliveryPoint;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn sample_route(n: usize) -> Route {
        Route::new((0..n).map(|i| DeliveryPoint::new(i as f64, 0.0)).collect())
    }

    fn same_point_set(a: &Route, b: &Route) -> bool {
        let key = |p: &DeliveryPoint| (p.x().to_bits(), p.y().to_bits());
        let mut xs: Vec<_> = a.points().iter().map(key).collect();
        let mut ys: Vec<_> = b.points().iter().map(key).collect();
        xs.sort_unstable();
        ys.sort_unstable();
        xs == ys
    }

    #[test]
    fn test_swap_exchanges_exactly_two_positions() {
        let route = sample_route(10);
        let mut rng = StdRng::seed_from_u64(42);
        let mutated = Mutation::Swap.apply(&route, &mut rng);

        let differing = route
            .points()
            .iter()
            .zip(mutated.points())
            .filter(|(a, b)| a != b)
            .count();
        assert_eq!(differing, 2);
        assert!(same_point_set(&route, &mutated));
    }

    #[test]
    fn test_original_route_is_untouched() {
        let route = sample_route(8);
        let snapshot = route.clone();
        let mut rng = StdRng::seed_from_u64(3);
        for op in [Mutation::Swap, Mutation::Inversion, Mutation::Scramble] {
            let _ = op.apply(&route, &mut rng);
            assert_eq!(route.points(), snapshot.points());
        }
    }

    #[test]
    fn test_short_routes_are_copied() {
        let mut rng = StdRng::seed_from_u64(1);
        let single = sample_route(1);
        let empty = sample_route(0);
        for op in [Mutation::Swap, Mutation::Inversion, Mutation::Scramble] {
            assert_eq!(op.apply(&single, &mut rng).points(), single.points());
            assert!(op.apply(&empty, &mut rng).is_empty());
        }
    }

    proptest! {
        #[test]
        fn prop_mutations_preserve_point_set(n in 2usize..50, seed in any::<u64>()) {
            let route = sample_route(n);
            let mut rng = StdRng::seed_from_u64(seed);
            for op in [Mutation::Swap, Mutation::Inversion, Mutation::Scramble] {
                let mutated = op.apply(&route, &mut rng);
                prop_assert_eq!(mutated.len(), n);
                prop_assert!(same_point_set(&route, &mutated));
            }
        }
    }
}
