// cargo watch -x 'fmt' -x 'run'

//! VLSM subnet planner.
//!
//! Splits a base IPv4 network into the smallest sufficient subnets for an
//! ordered list of host-count requirements, packed contiguously. The
//! allocation core lives in [`processing`]; [`input`] and [`output`] are
//! the interactive/presentation glue around it.

pub mod error;
pub mod input;
pub mod models;
pub mod output;
pub mod processing;

pub use models::{AllocationHalt, AllocationPlan, Ipv4, PlanStatus, SubnetAssignment};
pub use processing::{plan, sorted_descending};
