pub use subset::{Subset, SubsetIter};
pub use traits::{Finite, Set, SetAlgebra};

pub mod subset;
pub mod trait_impl;
pub mod traits;

/// returns true iff some member of `family` is set-equal to `set`
pub fn contains_set<S: SetAlgebra>(family: &[S], set: &S) -> bool {
    family.iter().any(|member| member.set_equal(set))
}
