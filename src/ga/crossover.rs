//! Permutation crossover operators over delivery routes.
//!
//! Every operator preserves the permutation invariant: each child visits
//! exactly the points its parents visit, no duplicates, no omissions, same
//! length. Routes shorter than two points are returned as unchanged copies.
//!
//! Internally the operators run on index permutations in parent-A space
//! (parent A maps to the identity `0..n`, parent B to the permutation of
//! positions its points occupy in A), then materialize child routes from
//! the index vectors.

use std::collections::{HashMap, HashSet};

use rand::seq::{index, IndexedRandom};
use rand::Rng;

use crate::models::{DeliveryPoint, Route};

/// Crossover operator choice, dispatched per generation.
///
/// # Examples
///
/// ```
/// use evoroute::ga::Crossover;
/// use evoroute::models::{DeliveryPoint, Route};
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
///
/// let a = Route::new(vec![
///     DeliveryPoint::new(0.0, 0.0),
///     DeliveryPoint::new(1.0, 0.0),
///     DeliveryPoint::new(2.0, 0.0),
/// ]);
/// let b = Route::new(a.points().iter().rev().cloned().collect());
///
/// let mut rng = StdRng::seed_from_u64(42);
/// let (child1, child2) = Crossover::Pmx.apply(&a, &b, &mut rng);
/// assert_eq!(child1.len(), 3);
/// assert_eq!(child2.len(), 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Crossover {
    /// Order crossover: keeps a parent slice in place, fills the rest in
    /// the other parent's order.
    Ox1,
    /// Partially mapped crossover: swaps a slice between parents and
    /// repairs duplicates through the induced value mapping.
    Pmx,
    /// Cycle crossover: alternates whole permutation cycles between the
    /// parents.
    Cx,
    /// K-point crossover with `k` cut points; requires `1 <= k < route
    /// length`.
    KPoint(usize),
    /// Edge recombination: greedily follows the merged neighbor map of
    /// both parents.
    Erx,
}

impl Default for Crossover {
    fn default() -> Self {
        Crossover::Pmx
    }
}

impl Crossover {
    /// Produces two children from two parent routes.
    ///
    /// ERX is a one-child operator; the second child comes from a second
    /// pass with the parent roles swapped.
    ///
    /// # Panics
    ///
    /// Panics if the parents are not permutations of the same point set,
    /// or if a `KPoint(k)` is applied with `k` outside `1..length`.
    pub fn apply<R: Rng>(&self, parent1: &Route, parent2: &Route, rng: &mut R) -> (Route, Route) {
        match self {
            Crossover::Ox1 => ox1(parent1, parent2, rng),
            Crossover::Pmx => pmx(parent1, parent2, rng),
            Crossover::Cx => cx(parent1, parent2),
            Crossover::KPoint(k) => k_point(parent1, parent2, *k, rng),
            Crossover::Erx => (erx(parent1, parent2, rng), erx(parent2, parent1, rng)),
        }
    }
}

/// Order crossover (OX1), two-child variant.
///
/// Copies a random slice of each parent verbatim into its child at the same
/// positions, then fills the remaining slots left-to-right with the other
/// parent's points in that parent's order, skipping points already placed.
pub fn ox1<R: Rng>(parent1: &Route, parent2: &Route, rng: &mut R) -> (Route, Route) {
    if parent1.len() < 2 {
        return (parent1.clone(), parent2.clone());
    }
    let (pa, pb) = parent_permutations(parent1, parent2);
    let (start, end) = random_slice(parent1.len(), rng);
    (
        materialize(parent1, &ox1_child(&pa, &pb, start, end)),
        materialize(parent1, &ox1_child(&pb, &pa, start, end)),
    )
}

/// Partially mapped crossover (PMX), two-child variant.
///
/// Each child keeps its base parent outside a random slice and receives the
/// other parent's slice; duplicates outside the slice are repaired by
/// following the value mapping induced by the swapped pairs.
pub fn pmx<R: Rng>(parent1: &Route, parent2: &Route, rng: &mut R) -> (Route, Route) {
    if parent1.len() < 2 {
        return (parent1.clone(), parent2.clone());
    }
    let (pa, pb) = parent_permutations(parent1, parent2);
    let (start, end) = random_slice(parent1.len(), rng);
    (
        materialize(parent1, &pmx_child(&pa, &pb, start, end)),
        materialize(parent1, &pmx_child(&pb, &pa, start, end)),
    )
}

/// Cycle crossover (CX).
///
/// Partitions the index set into the cycles induced by the two parents and
/// alternates cycle ownership: even cycles give child 1 parent-A values,
/// odd cycles give it parent-B values (and the reverse for child 2).
/// Deterministic — no random choice is involved.
pub fn cx(parent1: &Route, parent2: &Route) -> (Route, Route) {
    if parent1.len() < 2 {
        return (parent1.clone(), parent2.clone());
    }
    let (pa, pb) = parent_permutations(parent1, parent2);
    let (c1, c2) = cx_children(&pa, &pb);
    (materialize(parent1, &c1), materialize(parent1, &c2))
}

/// K-point crossover.
///
/// Picks `k` unique ordered cut points in `1..length`, copies the
/// even-numbered segments from each child's base parent, and fills the odd
/// segments left-to-right with the other parent's unused points in order.
///
/// # Panics
///
/// Panics if `k` is outside `1..length` (for routes of length >= 2).
pub fn k_point<R: Rng>(parent1: &Route, parent2: &Route, k: usize, rng: &mut R) -> (Route, Route) {
    if parent1.len() < 2 {
        return (parent1.clone(), parent2.clone());
    }
    let n = parent1.len();
    assert!(k >= 1 && k < n, "k must be within 1..route length");

    let (pa, pb) = parent_permutations(parent1, parent2);
    let mut bounds = Vec::with_capacity(k + 2);
    bounds.push(0);
    let mut cuts: Vec<usize> = index::sample(rng, n - 1, k).iter().map(|c| c + 1).collect();
    cuts.sort_unstable();
    bounds.extend(cuts);
    bounds.push(n);

    (
        materialize(parent1, &k_point_child(&pa, &pb, &bounds)),
        materialize(parent1, &k_point_child(&pb, &pa, &bounds)),
    )
}

/// Edge recombination crossover (ERX), one child.
///
/// Builds a merged neighbor map from both parents (each point's left/right
/// tour neighbors, duplicates collapsed), then grows the child from a
/// random start, always moving to the unvisited neighbor with the fewest
/// remaining edges. On a dead end it jumps to a uniformly random unvisited
/// point.
pub fn erx<R: Rng>(parent1: &Route, parent2: &Route, rng: &mut R) -> Route {
    if parent1.len() < 2 {
        return parent1.clone();
    }
    let (pa, pb) = parent_permutations(parent1, parent2);
    materialize(parent1, &erx_child(&pa, &pb, rng))
}

// ---------------------------------------------------------------------------
// Index-space operators
// ---------------------------------------------------------------------------

fn ox1_child(base: &[usize], donor: &[usize], start: usize, end: usize) -> Vec<usize> {
    let n = base.len();
    let mut child = vec![usize::MAX; n];
    let mut placed = vec![false; n];

    for i in start..end {
        child[i] = base[i];
        placed[base[i]] = true;
    }

    let mut fill = donor.iter().copied().filter(|&v| !placed[v]);
    for slot in child.iter_mut() {
        if *slot == usize::MAX {
            *slot = fill.next().expect("donor supplies every missing value");
        }
    }
    child
}

fn pmx_child(base: &[usize], donor: &[usize], start: usize, end: usize) -> Vec<usize> {
    let n = base.len();
    let mut child = base.to_vec();

    // mapping[v] = replacement for v when v is duplicated outside the slice
    let mut mapping: Vec<Option<usize>> = vec![None; n];
    for i in start..end {
        child[i] = donor[i];
        mapping[donor[i]] = Some(base[i]);
    }

    for i in (0..start).chain(end..n) {
        let mut value = child[i];
        // Each hop lands on a distinct slice position, so the chain ends
        // within slice-length steps.
        while let Some(next) = mapping[value] {
            value = next;
        }
        child[i] = value;
    }
    child
}

/// Index cycles induced by following "value at i in B, located in A".
fn permutation_cycles(pa: &[usize], pb: &[usize]) -> Vec<Vec<usize>> {
    let n = pa.len();
    let mut position_in_a = vec![0usize; n];
    for (i, &v) in pa.iter().enumerate() {
        position_in_a[v] = i;
    }

    let mut cycles = Vec::new();
    let mut visited = vec![false; n];
    for start in 0..n {
        if visited[start] {
            continue;
        }
        let mut cycle = Vec::new();
        let mut idx = start;
        while !visited[idx] {
            visited[idx] = true;
            cycle.push(idx);
            idx = position_in_a[pb[idx]];
        }
        cycles.push(cycle);
    }
    cycles
}

fn cx_children(pa: &[usize], pb: &[usize]) -> (Vec<usize>, Vec<usize>) {
    let n = pa.len();
    let mut child1 = vec![usize::MAX; n];
    let mut child2 = vec![usize::MAX; n];

    for (cycle_number, cycle) in permutation_cycles(pa, pb).iter().enumerate() {
        let keep = cycle_number % 2 == 0;
        for &idx in cycle {
            if keep {
                child1[idx] = pa[idx];
                child2[idx] = pb[idx];
            } else {
                child1[idx] = pb[idx];
                child2[idx] = pa[idx];
            }
        }
    }
    (child1, child2)
}

fn k_point_child(base: &[usize], donor: &[usize], bounds: &[usize]) -> Vec<usize> {
    let n = base.len();
    let mut child = vec![usize::MAX; n];
    let mut placed = vec![false; n];

    for (segment, window) in bounds.windows(2).enumerate() {
        if segment % 2 == 0 {
            for i in window[0]..window[1] {
                child[i] = base[i];
                placed[base[i]] = true;
            }
        }
    }

    let mut fill = donor.iter().copied().filter(|&v| !placed[v]);
    for slot in child.iter_mut() {
        if *slot == usize::MAX {
            *slot = fill.next().expect("donor supplies every missing value");
        }
    }
    child
}

fn erx_child<R: Rng>(pa: &[usize], pb: &[usize], rng: &mut R) -> Vec<usize> {
    let n = pa.len();

    let mut adjacency: Vec<HashSet<usize>> = vec![HashSet::new(); n];
    for parent in [pa, pb] {
        for i in 0..n {
            let value = parent[i];
            adjacency[value].insert(parent[(i + n - 1) % n]);
            adjacency[value].insert(parent[(i + 1) % n]);
        }
    }

    let mut tour = Vec::with_capacity(n);
    let mut visited = vec![false; n];
    let mut current = rng.random_range(0..n);
    visited[current] = true;
    tour.push(current);

    while tour.len() < n {
        // Retire the current point from every neighbor list, so the edge
        // counts below only cover unvisited points
        let neighbors: Vec<usize> = adjacency[current].iter().copied().collect();
        for &u in &neighbors {
            adjacency[u].remove(&current);
        }

        let next = match neighbors
            .iter()
            .copied()
            .filter(|&u| !visited[u])
            .min_by_key(|&u| adjacency[u].len())
        {
            Some(u) => u,
            None => {
                let remaining: Vec<usize> = (0..n).filter(|&v| !visited[v]).collect();
                *remaining.choose(rng).expect("unvisited points remain")
            }
        };

        visited[next] = true;
        tour.push(next);
        current = next;
    }
    tour
}

// ---------------------------------------------------------------------------
// Route <-> index-space plumbing
// ---------------------------------------------------------------------------

/// Maps both parents into parent-A index space: A becomes the identity
/// permutation, B the positions its points occupy in A.
///
/// # Panics
///
/// Panics if the parents differ in length or point set.
fn parent_permutations(a: &Route, b: &Route) -> (Vec<usize>, Vec<usize>) {
    assert_eq!(a.len(), b.len(), "parents must have equal length");

    let positions: HashMap<&DeliveryPoint, usize> = a
        .points()
        .iter()
        .enumerate()
        .map(|(i, p)| (p, i))
        .collect();
    let pb = b
        .points()
        .iter()
        .map(|p| {
            *positions
                .get(p)
                .expect("parents must contain the same delivery points")
        })
        .collect();

    ((0..a.len()).collect(), pb)
}

fn materialize(parent: &Route, indices: &[usize]) -> Route {
    Route::new(indices.iter().map(|&i| parent.points()[i].clone()).collect())
}

/// Random slice `[start, end)` with `start < end`.
pub(super) fn random_slice<R: Rng>(n: usize, rng: &mut R) -> (usize, usize) {
    let picked = index::sample(rng, n, 2);
    let (a, b) = (picked.index(0), picked.index(1));
    if a < b {
        (a, b)
    } else {
        (b, a)
    }
}
