//! Counts the topologies on finite sets by exhaustive search over families of subsets.

pub mod combinations;
pub mod error;
pub mod program_flow;
pub mod set;
pub mod timer;
pub mod topology;
