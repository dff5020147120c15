//! Allocation result data model.
//!
//! All types here are immutable value objects built fresh per allocation
//! run by [`plan`](crate::processing::plan) and handed to the output layer.

use super::Ipv4;
use serde::Serialize;
use std::net::Ipv4Addr;
use thiserror::Error;

/// One subnet carved out of the base network for a single requirement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubnetAssignment {
    /// Position in the (descending-sorted) requirement list, 0-based.
    pub index: usize,
    /// Host count that was requested for this subnet.
    pub requested_hosts: u32,
    /// Assigned network (address + prefix).
    pub subnet: Ipv4,
    /// Subnet mask in dotted-quad form.
    pub netmask: Ipv4Addr,
    /// Wildcard mask (bitwise complement of the netmask).
    pub wildcard: Ipv4Addr,
    /// First usable host address (network + 1).
    pub first_host: Ipv4Addr,
    /// Last usable host address (broadcast - 1).
    pub last_host: Ipv4Addr,
    /// Broadcast address of the subnet.
    pub broadcast: Ipv4Addr,
    /// Usable host addresses (total - 2).
    pub usable_hosts: u64,
    /// Total addresses in the subnet, network and broadcast included.
    pub total_addresses: u64,
}

impl SubnetAssignment {
    /// Display label for this assignment, 1-based ("Sub-1", "Sub-2", ...).
    pub fn label(&self) -> String {
        format!("Sub-{}", self.index + 1)
    }

    /// Prefix rendered in CIDR slash notation ("/26").
    pub fn prefix_str(&self) -> String {
        format!("/{}", self.subnet.mask)
    }
}

/// A requirement the pass could not satisfy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct UnmetRequirement {
    /// Position in the requirement list, 0-based.
    pub index: usize,
    /// Host count that was requested.
    pub hosts: u32,
}

/// Non-fatal note that a computed prefix was clamped to /30.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PrefixClamp {
    /// Requirement index the clamp applied to.
    pub index: usize,
    /// The prefix that was computed before clamping.
    pub computed_prefix: u8,
}

/// Why an allocation pass stopped before satisfying every requirement.
///
/// These are allocation-domain outcomes, not input errors: the plan that
/// carries them still holds every assignment produced before the halt.
#[derive(Debug, Error, Clone, PartialEq, Eq, Serialize)]
pub enum AllocationHalt {
    #[error("insufficient space: {required} addresses required vs {available} available, use a /{suggested_prefix} base or larger")]
    InsufficientSpace {
        required: u64,
        available: u64,
        suggested_prefix: u8,
    },

    #[error("requirement #{index}: prefix /{prefix} must be longer than the base prefix /{base_prefix}")]
    PrefixUnderflow {
        index: usize,
        prefix: u8,
        base_prefix: u8,
    },

    #[error("requirement #{index}: candidate subnet {subnet} exceeds the base network range")]
    OutOfBaseRange { index: usize, subnet: Ipv4 },

    #[error("address space exhausted before requirement #{index}")]
    SpaceExhausted { index: usize },
}

/// Terminal status of an allocation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PlanStatus {
    /// Every requirement was satisfied.
    Success,
    /// Some assignments were produced, some requirements are unmet.
    Partial,
    /// Nothing was allocated.
    Failed,
}

/// The full outcome of one allocation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AllocationPlan {
    /// The base network the subnets were carved from.
    pub base: Ipv4,
    /// Satisfied assignments, in requirement order.
    pub assignments: Vec<SubnetAssignment>,
    /// Requirements that were not satisfied, in requirement order.
    pub unmet: Vec<UnmetRequirement>,
    /// Non-fatal prefix clamp warnings.
    pub warnings: Vec<PrefixClamp>,
    /// Why the pass stopped early, if it did.
    pub halt: Option<AllocationHalt>,
    /// Number of requirements in the request.
    pub requested: usize,
    /// Number of requirements satisfied.
    pub satisfied: usize,
    /// Addresses consumed by all assignments, network/broadcast included.
    pub consumed_addresses: u64,
    /// Total addresses in the base network.
    pub available_addresses: u64,
    /// Terminal status of the run.
    pub status: PlanStatus,
}

impl AllocationPlan {
    /// Build a plan for a run that was rejected before any assignment.
    pub fn halted(base: Ipv4, requirements: &[u32], halt: AllocationHalt) -> AllocationPlan {
        AllocationPlan {
            base,
            assignments: Vec::new(),
            unmet: requirements
                .iter()
                .enumerate()
                .map(|(index, &hosts)| UnmetRequirement { index, hosts })
                .collect(),
            warnings: Vec::new(),
            halt: Some(halt),
            requested: requirements.len(),
            satisfied: 0,
            consumed_addresses: 0,
            available_addresses: base.num_addresses(),
            status: PlanStatus::Failed,
        }
    }

    /// Percentage of the base network consumed by the assignments.
    pub fn utilization_percent(&self) -> f64 {
        if self.available_addresses == 0 {
            return 0.0;
        }
        (self.consumed_addresses as f64 / self.available_addresses as f64) * 100.0
    }

    /// Sum of host counts requested across all requirements.
    pub fn hosts_requested(&self) -> u64 {
        let met: u64 = self
            .assignments
            .iter()
            .map(|a| a.requested_hosts as u64)
            .sum();
        let missed: u64 = self.unmet.iter().map(|u| u.hosts as u64).sum();
        met + missed
    }

    /// Sum of usable hosts across all assignments.
    pub fn hosts_assigned(&self) -> u64 {
        self.assignments.iter().map(|a| a.usable_hosts).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assignment_labels() {
        let a = SubnetAssignment {
            index: 2,
            requested_hosts: 10,
            subnet: Ipv4::new("10.0.0.96/28").unwrap(),
            netmask: Ipv4Addr::new(255, 255, 255, 240),
            wildcard: Ipv4Addr::new(0, 0, 0, 15),
            first_host: Ipv4Addr::new(10, 0, 0, 97),
            last_host: Ipv4Addr::new(10, 0, 0, 110),
            broadcast: Ipv4Addr::new(10, 0, 0, 111),
            usable_hosts: 14,
            total_addresses: 16,
        };
        assert_eq!(a.label(), "Sub-3");
        assert_eq!(a.prefix_str(), "/28");
    }

    #[test]
    fn test_halted_plan() {
        let base = Ipv4::new("192.168.0.0/28").unwrap();
        let halt = AllocationHalt::InsufficientSpace {
            required: 22,
            available: 16,
            suggested_prefix: 27,
        };
        let plan = AllocationPlan::halted(base, &[20], halt.clone());

        assert_eq!(plan.status, PlanStatus::Failed);
        assert!(plan.assignments.is_empty());
        assert_eq!(plan.unmet, vec![UnmetRequirement { index: 0, hosts: 20 }]);
        assert_eq!(plan.halt, Some(halt));
        assert_eq!(plan.available_addresses, 16);
        assert_eq!(plan.utilization_percent(), 0.0);
        assert_eq!(plan.hosts_requested(), 20);
    }

    #[test]
    fn test_halt_messages() {
        let halt = AllocationHalt::InsufficientSpace {
            required: 22,
            available: 16,
            suggested_prefix: 27,
        };
        assert_eq!(
            halt.to_string(),
            "insufficient space: 22 addresses required vs 16 available, use a /27 base or larger"
        );

        let halt = AllocationHalt::PrefixUnderflow {
            index: 0,
            prefix: 29,
            base_prefix: 29,
        };
        assert_eq!(
            halt.to_string(),
            "requirement #0: prefix /29 must be longer than the base prefix /29"
        );
    }
}
