//! Domain models for the VLSM planner.
//!
//! This module contains the core data structures used throughout the crate:
//! - [`Ipv4`] - IPv4 network with CIDR notation support
//! - [`SubnetAssignment`] and [`AllocationPlan`] - allocation results

mod ipv4;
mod plan;

// Re-export public types
pub use ipv4::{
    broadcast_addr, cut_addr, get_cidr_mask, subnet_size, usable_hosts, wildcard_mask, Ipv4,
    MAX_BASE_PREFIX, MAX_LENGTH, MAX_SUBNET_PREFIX, MIN_BASE_PREFIX,
};
pub use plan::{
    AllocationHalt, AllocationPlan, PlanStatus, PrefixClamp, SubnetAssignment, UnmetRequirement,
};
