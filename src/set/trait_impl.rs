//! The element-list representation of a finite set.
//!
//! A `Vec<E>` is treated as an unordered collection of distinct elements. Operations keep the
//! order in which elements are first seen, but no caller may depend on it.

use crate::set::traits::{Finite, Set, SetAlgebra};

impl<E> Set for Vec<E> {
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<E> Finite for Vec<E> {
    fn size(&self) -> usize {
        self.len()
    }
}

impl<E: PartialEq + Clone> SetAlgebra for Vec<E> {
    fn union(&self, other: &Vec<E>) -> Vec<E> {
        let mut union = self.clone();
        for e in other.iter() {
            if !union.contains(e) {
                union.push(e.clone());
            }
        }
        union
    }

    fn intersection(&self, other: &Vec<E>) -> Vec<E> {
        self.iter().filter(|&e| other.contains(e)).cloned().collect()
    }

    fn set_equal(&self, other: &Vec<E>) -> bool {
        self.len() == other.len() && self.iter().all(|e| other.contains(e))
    }
}
