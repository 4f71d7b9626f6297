pub trait Set {
    fn is_empty(&self) -> bool;
}

pub trait Finite {
    fn size(&self) -> usize;
}

/// Operations on finite sets whose members are distinct.
///
/// `union` and `intersection` are commutative, associative and idempotent.
/// `set_equal` compares by membership only, so two representations listing the same elements
/// in a different order are equal.
pub trait SetAlgebra: Sized {
    fn union(&self, other: &Self) -> Self;

    fn intersection(&self, other: &Self) -> Self;

    fn set_equal(&self, other: &Self) -> bool;
}
