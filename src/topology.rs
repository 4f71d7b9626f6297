//! Counting the topologies on a finite set by exhaustive search.
//!
//! A topology on `{0, ..., n - 1}` always contains the empty set and the full set, so the
//! search only chooses which of the `2^n - 2` intermediate subsets to add. Each choice is
//! kept iff the resulting family is closed under pairwise union and intersection, which for
//! a finite family is the same as closure under arbitrary unions and intersections.

use std::collections::HashSet;
use std::iter;
use std::sync::atomic::{AtomicBool, Ordering};

use rayon::prelude::*;

use crate::combinations::{Combinations, power_set};
use crate::error::Error;
use crate::set::{contains_set, Subset};
use crate::set::traits::SetAlgebra;

/// Upper bound on the number of intermediate subsets whose combinations are spread over the
/// thread pool in `count_topologies_parallel`.
pub const PARALLEL_SPLIT_DEPTH: usize = 10;

pub fn base_set(size: usize) -> Vec<usize> {
    (0..size).collect()
}

/// Every subset of the base set of the given size, the empty subset first and the full set last.
pub fn subset_power_set(size: usize) -> Vec<Subset> {
    power_set(&base_set(size))
        .into_iter()
        .map(|elements| elements.into_iter().collect())
        .collect()
}

/// the power set without its first (empty) and last (full) member
fn intermediate_subsets(all_subsets: &[Subset]) -> &[Subset] {
    if all_subsets.len() > 2 {
        &all_subsets[1..all_subsets.len() - 1]
    } else {
        &[]
    }
}

/// A candidate topology: distinct subsets with a hash index for membership tests.
#[derive(Clone, Debug)]
pub struct Family {
    members: Vec<Subset>,
    index: HashSet<Subset>,
}

impl Family {
    pub fn from_members<I: IntoIterator<Item=Subset>>(members: I) -> Family {
        let mut family = Family {
            members: Vec::new(),
            index: HashSet::new(),
        };
        for subset in members {
            if family.index.insert(subset) {
                family.members.push(subset);
            }
        }
        family
    }

    /// the family `{∅} ∪ middle ∪ {full}`
    pub fn candidate<'a, I: IntoIterator<Item=&'a Subset>>(middle: I, full: Subset) -> Family {
        Family::from_members(
            iter::once(Subset::empty())
                .chain(middle.into_iter().cloned())
                .chain(iter::once(full))
        )
    }

    pub fn members(&self) -> &[Subset] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    #[inline]
    pub fn contains(&self, subset: &Subset) -> bool {
        self.index.contains(subset)
    }

    /// true iff every pair of distinct members has its union and intersection in the family
    pub fn is_topology(&self) -> bool {
        for (i, a) in self.members.iter().enumerate() {
            for b in self.members[i + 1..].iter() {
                if !self.contains(&a.union(b)) || !self.contains(&a.intersection(b)) {
                    return false;
                }
            }
        }
        true
    }
}

/// The closure test over any set representation, using linear membership lookups.
/// `family` is expected to already contain the empty set and the full set.
pub fn is_topology<S: SetAlgebra>(family: &[S]) -> bool {
    for (i, a) in family.iter().enumerate() {
        for b in family[i + 1..].iter() {
            if !contains_set(family, &a.union(b)) || !contains_set(family, &a.intersection(b)) {
                return false;
            }
        }
    }
    true
}

/// Counts the topologies on a set with `size` elements.
///
/// Runs in time exponential in `2^size`; sizes above 4 are not practical.
pub fn count_topologies(size: usize) -> u64 {
    let all_subsets = subset_power_set(size);
    let full = Subset::full(size);
    // {∅, full} is always a topology and is never among the non-empty extensions below
    let extensions = Combinations::new(intermediate_subsets(&all_subsets))
        .filter(|middle| !middle.is_empty() && Family::candidate(middle, full).is_topology())
        .count();
    1 + extensions as u64
}

/// Same as `count_topologies`, but checks `cancelled` before evaluating each candidate and
/// gives up with `Error::Cancelled` once it is set.
pub fn count_topologies_cancellable(size: usize, cancelled: &AtomicBool) -> Result<u64, Error> {
    let all_subsets = subset_power_set(size);
    let full = Subset::full(size);
    let mut count = 1u64;
    for middle in Combinations::new(intermediate_subsets(&all_subsets)) {
        if cancelled.load(Ordering::Relaxed) {
            return Err(Error::Cancelled);
        }
        if !middle.is_empty() && Family::candidate(&middle, full).is_topology() {
            count += 1;
        }
    }
    Ok(count)
}

/// Same as `count_topologies`, with the search spread over the rayon thread pool.
///
/// The intermediate subsets are split into a prefix of at most `PARALLEL_SPLIT_DEPTH` items
/// and the remaining suffix. Every subset of the prefix becomes a task that lazily walks
/// through every subset of the suffix.
pub fn count_topologies_parallel(size: usize) -> u64 {
    let all_subsets = subset_power_set(size);
    let full = Subset::full(size);
    let intermediate = intermediate_subsets(&all_subsets);
    let (prefix_items, suffix_items) = intermediate.split_at(PARALLEL_SPLIT_DEPTH.min(intermediate.len()));

    let extensions: u64 = power_set(prefix_items)
        .par_iter()
        .map(|prefix| {
            iter::once(Vec::new())
                .chain(Combinations::new(suffix_items).filter(|suffix| !suffix.is_empty()))
                .filter(|suffix| !(prefix.is_empty() && suffix.is_empty()))
                .filter(|suffix| Family::candidate(prefix.iter().chain(suffix.iter()), full).is_topology())
                .count() as u64
        })
        .sum();
    1 + extensions
}

#[derive(Copy, Clone, PartialEq, Debug)]
pub enum Strategy {
    Sequential,
    Parallel,
}

impl Strategy {
    pub fn count(&self, size: usize) -> u64 {
        match self {
            Strategy::Sequential => count_topologies(size),
            Strategy::Parallel => count_topologies_parallel(size),
        }
    }
}

/// returns `max_set_size + 1` counts, the `i`-th being the number of topologies on `i` elements
pub fn topology_counts(max_set_size: usize, strategy: Strategy) -> Vec<u64> {
    (0..=max_set_size).map(|size| strategy.count(size)).collect()
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::AtomicBool;

    use crate::combinations::Combinations;
    use crate::error::Error;
    use crate::set::Subset;

    use super::{base_set, count_topologies, count_topologies_cancellable, count_topologies_parallel, Family,
                intermediate_subsets, is_topology, Strategy, subset_power_set, topology_counts};

    const KNOWN_COUNTS: [u64; 5] = [1, 1, 4, 29, 355];

    fn as_lists(family: &Family) -> Vec<Vec<usize>> {
        family.members().iter().map(|s| s.elements().collect()).collect()
    }

    #[test]
    fn test_base_set() {
        assert_eq!(base_set(0), Vec::<usize>::new());
        assert_eq!(base_set(4), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_subset_power_set() {
        assert_eq!(subset_power_set(0), vec![Subset::empty()]);
        for size in 1..=6 {
            let power_set = subset_power_set(size);
            assert_eq!(power_set.len(), 1 << size);
            assert_eq!(power_set[0], Subset::empty());
            assert_eq!(power_set[power_set.len() - 1], Subset::full(size));
            assert_eq!(intermediate_subsets(&power_set).len(), (1 << size) - 2);
        }
        assert!(intermediate_subsets(&subset_power_set(0)).is_empty());
        assert!(intermediate_subsets(&subset_power_set(1)).is_empty());
    }

    #[test]
    fn test_known_counts() {
        for (size, &expected) in KNOWN_COUNTS.iter().enumerate() {
            assert_eq!(count_topologies(size), expected, "size {}", size);
        }
    }

    #[test]
    fn test_parallel_matches_known_counts() {
        for (size, &expected) in KNOWN_COUNTS.iter().enumerate() {
            assert_eq!(count_topologies_parallel(size), expected, "size {}", size);
        }
    }

    #[test]
    fn test_repeated_counts_agree() {
        assert_eq!(count_topologies(3), count_topologies(3));
        assert_eq!(count_topologies_parallel(3), count_topologies_parallel(3));
    }

    #[test]
    fn test_topology_counts() {
        assert_eq!(topology_counts(0, Strategy::Sequential), vec![1]);
        assert_eq!(topology_counts(2, Strategy::Sequential), vec![1, 1, 4]);
        assert_eq!(topology_counts(3, Strategy::Parallel), vec![1, 1, 4, 29]);
    }

    #[test]
    fn test_trivial_and_discrete_families_are_topologies() {
        for size in 0..=6 {
            let trivial = Family::candidate(&[], Subset::full(size));
            assert!(trivial.is_topology(), "size {}", size);
            assert!(is_topology(&as_lists(&trivial)));

            let discrete = Family::from_members(subset_power_set(size));
            assert_eq!(discrete.len(), 1 << size);
            assert!(discrete.is_topology(), "size {}", size);
        }
    }

    #[test]
    fn test_family_has_no_duplicates() {
        let family = Family::candidate(&[Subset::empty()], Subset::full(0));
        assert_eq!(family.members(), &[Subset::empty()]);

        let a = Subset::singleton(0);
        let family = Family::candidate(&[a, a], Subset::full(2));
        assert_eq!(family.len(), 3);
        assert!(family.contains(&a));
        assert!(!family.contains(&Subset::singleton(1)));
    }

    #[test]
    fn test_specific_families() {
        let full = Subset::full(2);
        let sierpinski = Family::candidate(&[Subset::singleton(0)], full);
        assert!(sierpinski.is_topology());

        let full = Subset::full(3);
        let missing_union = Family::candidate(&[Subset::singleton(0), Subset::singleton(1)], full);
        assert!(!missing_union.is_topology());

        let a: Subset = vec![0, 1].into_iter().collect();
        let b: Subset = vec![1, 2].into_iter().collect();
        let missing_intersection = Family::candidate(&[a, b], full);
        assert!(!missing_intersection.is_topology());

        let lists = vec![vec![], vec![0], vec![1], vec![0, 1, 2]];
        assert!(!is_topology(&lists));
        let lists = vec![vec![], vec![0], vec![1], vec![1, 0], vec![0, 1, 2]];
        assert!(is_topology(&lists));
    }

    #[test]
    fn test_hashed_and_linear_predicates_agree() {
        let power_set = subset_power_set(3);
        let full = Subset::full(3);
        let mut candidates = 0;
        for middle in Combinations::new(intermediate_subsets(&power_set)) {
            let family = Family::candidate(&middle, full);
            assert_eq!(family.is_topology(), is_topology(family.members()));
            assert_eq!(family.is_topology(), is_topology(&as_lists(&family)));
            candidates += 1;
        }
        assert_eq!(candidates, (1 << 6) - 1);
    }

    #[test]
    fn test_cancellable() {
        let not_cancelled = AtomicBool::new(false);
        assert_eq!(count_topologies_cancellable(2, &not_cancelled), Ok(4));
        assert_eq!(count_topologies_cancellable(3, &not_cancelled), Ok(29));

        let cancelled = AtomicBool::new(true);
        assert_eq!(count_topologies_cancellable(2, &cancelled), Err(Error::Cancelled));
    }
}
