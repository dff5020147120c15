//! Error types for the VLSM planner.
//!
//! Each layer has its own discriminated enum so callers can branch on the
//! error kind without inspecting message strings:
//! - [`Ipv4Error`] - address/mask arithmetic and CIDR parsing
//! - [`InputError`] - user-supplied values rejected before allocation
//! - [`PlanError`] - invalid inputs handed to the allocator itself

use thiserror::Error;

/// Errors from IPv4 address and mask arithmetic.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Ipv4Error {
    #[error("prefix length /{0} exceeds /32")]
    PrefixTooLong(u8),

    #[error("prefix length /{0} has no usable hosts (smallest allocatable subnet is /30)")]
    NoUsableHosts(u8),

    #[error("invalid CIDR notation: {0}")]
    InvalidCidr(String),

    #[error("invalid IPv4 address: {0}")]
    InvalidAddress(String),

    #[error("invalid prefix length: {0}")]
    InvalidPrefix(String),
}

/// Errors from validating user input, raised before the allocator runs.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("malformed IPv4 address: {0}")]
    MalformedAddress(String),

    #[error("base prefix must be between /8 and /30, got /{0}")]
    PrefixOutOfRange(u8),

    #[error("not a valid integer: {0}")]
    NotAnInteger(String),

    #[error("at least 1 subnet is required")]
    NoSubnetsRequested,
}

/// Hard input errors from [`plan`](crate::processing::plan).
///
/// These mean the allocator was handed invalid input and nothing was
/// allocated. Allocation-domain outcomes (insufficient space, prefix
/// underflow, exhaustion) are not errors here; they travel as
/// [`AllocationHalt`](crate::models::AllocationHalt) inside the returned
/// plan so partial progress is never discarded.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PlanError {
    #[error("base prefix /{0} outside supported range /8..=/30")]
    BasePrefixOutOfRange(u8),

    #[error("host requirement #{index} must be at least 1, got {hosts}")]
    RequirementTooSmall { index: usize, hosts: u32 },

    #[error(transparent)]
    Net(#[from] Ipv4Error),
}
