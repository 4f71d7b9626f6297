use std::fmt;
use std::iter::FromIterator;

use num_traits::cast::ToPrimitive;

use crate::set::traits::{Finite, Set, SetAlgebra};

/// A subset of the base set `{0, 1, ..., CAPACITY - 1}`, stored as a bitmask where bit `i`
/// is set iff element `i` is a member.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
pub struct Subset {
    mask: u64
}

impl Subset {
    pub const CAPACITY: usize = 64;

    pub fn empty() -> Subset {
        Subset {
            mask: 0
        }
    }

    /// the subset `{0, 1, ..., size - 1}`
    pub fn full(size: usize) -> Subset {
        assert!(size <= Subset::CAPACITY, "a subset holds at most {} elements, requested {}",
                Subset::CAPACITY, size);
        let mask = if size == Subset::CAPACITY {
            u64::max_value()
        } else {
            (1u64 << size) - 1
        };
        Subset {
            mask
        }
    }

    pub fn singleton(element: usize) -> Subset {
        let mut subset = Subset::empty();
        subset.insert(element);
        subset
    }

    pub fn from_mask(mask: u64) -> Subset {
        Subset {
            mask
        }
    }

    /// returns None if some element is negative or does not fit in the bitmask
    pub fn from_elements<E: ToPrimitive>(elements: &[E]) -> Option<Subset> {
        let mut subset = Subset::empty();
        for e in elements.iter() {
            match e.to_usize() {
                Some(i) if i < Subset::CAPACITY => subset.insert(i),
                _ => return None
            }
        }
        Some(subset)
    }

    #[inline]
    pub fn mask(&self) -> u64 {
        self.mask
    }

    #[inline]
    pub fn contains(&self, element: usize) -> bool {
        element < Subset::CAPACITY && self.mask & (1u64 << element) != 0
    }

    #[inline]
    pub fn insert(&mut self, element: usize) {
        assert!(element < Subset::CAPACITY, "element {} does not fit in a subset", element);
        self.mask |= 1u64 << element;
    }

    pub fn is_subset_of(&self, other: &Subset) -> bool {
        self.mask & !other.mask == 0
    }

    pub fn elements(&self) -> SubsetIter {
        SubsetIter {
            remaining: self.mask
        }
    }
}

impl Set for Subset {
    #[inline]
    fn is_empty(&self) -> bool {
        self.mask == 0
    }
}

impl Finite for Subset {
    #[inline]
    fn size(&self) -> usize {
        self.mask.count_ones() as usize
    }
}

impl SetAlgebra for Subset {
    #[inline]
    fn union(&self, other: &Subset) -> Subset {
        Subset::from_mask(self.mask | other.mask)
    }

    #[inline]
    fn intersection(&self, other: &Subset) -> Subset {
        Subset::from_mask(self.mask & other.mask)
    }

    #[inline]
    fn set_equal(&self, other: &Subset) -> bool {
        self.mask == other.mask
    }
}

impl FromIterator<usize> for Subset {
    fn from_iter<I: IntoIterator<Item=usize>>(iter: I) -> Subset {
        let mut subset = Subset::empty();
        for element in iter {
            subset.insert(element);
        }
        subset
    }
}

impl fmt::Display for Subset {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{{")?;
        for (i, element) in self.elements().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", element)?;
        }
        write!(f, "}}")
    }
}

/// iterates over the members of a `Subset` in increasing order
pub struct SubsetIter {
    remaining: u64,
}

impl Iterator for SubsetIter {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            None
        } else {
            let element = self.remaining.trailing_zeros() as usize;
            self.remaining &= self.remaining - 1;
            Some(element)
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining.count_ones() as usize;
        (n, Some(n))
    }
}
