//! VLSM allocation.
//!
//! Carves a base IPv4 network into the smallest sufficient subnets, one per
//! host-count requirement, packed contiguously from the base network address.

use crate::error::PlanError;
use crate::models::{
    cut_addr, get_cidr_mask, subnet_size, usable_hosts, wildcard_mask, AllocationHalt,
    AllocationPlan, Ipv4, PlanStatus, PrefixClamp, SubnetAssignment, UnmetRequirement,
    MAX_BASE_PREFIX, MAX_LENGTH, MAX_SUBNET_PREFIX, MIN_BASE_PREFIX,
};
use std::net::Ipv4Addr;

/// Number of bits needed to address `count` values: ceil(log2(count)).
fn bits_for(count: u64) -> u32 {
    assert!(count >= 1, "bits_for(0) is undefined");
    u64::BITS - (count - 1).leading_zeros()
}

/// Compute a VLSM allocation of `requirements` inside `base`.
///
/// `requirements` is a list of usable-host counts, one per subnet, already
/// sorted in descending order (largest-first packing; see
/// [`sorted_descending`](crate::processing::sorted_descending)). The
/// allocator does not sort. Unsorted input still runs, but the align-down
/// cursor semantics can then produce overlapping subnets or halt the pass
/// early.
///
/// Pure function: no I/O, no shared state. Every warning and halt condition
/// travels inside the returned [`AllocationPlan`], and a halted pass keeps
/// all assignments produced before the halt.
///
/// Returns `Err` only for invalid input: a base prefix outside /8..=/30 or
/// a requirement below 1 host.
pub fn plan(base: Ipv4, requirements: &[u32]) -> Result<AllocationPlan, PlanError> {
    log::info!(
        "#Start plan() base {} with {} requirements",
        base,
        requirements.len()
    );

    if base.mask < MIN_BASE_PREFIX || base.mask > MAX_BASE_PREFIX {
        return Err(PlanError::BasePrefixOutOfRange(base.mask));
    }
    if let Some((index, &hosts)) = requirements.iter().enumerate().find(|&(_, &h)| h < 1) {
        return Err(PlanError::RequirementTooSmall { index, hosts });
    }

    let base_lo = u64::from(u32::from(base.lo()));
    let base_hi = u64::from(u32::from(base.hi()));
    let available = base_hi - base_lo + 1;

    // Capacity pre-check: every subnet needs its host count plus the
    // network and broadcast addresses.
    let required: u64 = requirements.iter().map(|&h| u64::from(h) + 2).sum();
    if required > available {
        let suggested_prefix = (u32::from(MAX_LENGTH)).saturating_sub(bits_for(required)) as u8;
        let halt = AllocationHalt::InsufficientSpace {
            required,
            available,
            suggested_prefix,
        };
        log::warn!("{}", halt);
        return Ok(AllocationPlan::halted(base, requirements, halt));
    }

    let mut assignments: Vec<SubnetAssignment> = Vec::with_capacity(requirements.len());
    let mut warnings: Vec<PrefixClamp> = Vec::new();
    let mut halt: Option<AllocationHalt> = None;
    let mut consumed = 0u64;
    // u64 so broadcast+1 cannot wrap at 255.255.255.255
    let mut cursor = base_lo;

    for (index, &hosts) in requirements.iter().enumerate() {
        let host_bits = bits_for(u64::from(hosts) + 2);
        let candidate = i32::from(MAX_LENGTH) - host_bits as i32;

        // A subnet cannot be as large as (or larger than) its parent.
        if candidate <= i32::from(base.mask) {
            let h = AllocationHalt::PrefixUnderflow {
                index,
                prefix: candidate.max(0) as u8,
                base_prefix: base.mask,
            };
            log::warn!("{}", h);
            halt = Some(h);
            break;
        }

        let mut prefix = candidate as u8;
        if prefix > MAX_SUBNET_PREFIX {
            log::warn!(
                "requirement #{}: clamping computed prefix /{} to /{}",
                index,
                prefix,
                MAX_SUBNET_PREFIX
            );
            warnings.push(PrefixClamp {
                index,
                computed_prefix: prefix,
            });
            prefix = MAX_SUBNET_PREFIX;
        }

        // Candidate subnet: the cursor aligned down to its natural boundary.
        let network = cut_addr(Ipv4Addr::from(cursor as u32), prefix)?;
        let subnet = Ipv4 {
            addr: network,
            mask: prefix,
        };

        if !base.contains_subnet(&subnet) {
            let h = AllocationHalt::OutOfBaseRange { index, subnet };
            log::warn!("{}", h);
            halt = Some(h);
            break;
        }

        let size = subnet_size(prefix)?;
        let usable = usable_hosts(prefix)?;
        let broadcast = subnet.hi();
        assignments.push(SubnetAssignment {
            index,
            requested_hosts: hosts,
            subnet,
            netmask: Ipv4Addr::from(get_cidr_mask(prefix)?),
            wildcard: Ipv4Addr::from(wildcard_mask(prefix)?),
            first_host: Ipv4Addr::from(u32::from(network) + 1),
            last_host: Ipv4Addr::from(u32::from(broadcast) - 1),
            broadcast,
            usable_hosts: usable,
            total_addresses: size,
        });
        consumed += size;

        cursor = u64::from(u32::from(broadcast)) + 1;
        if cursor > base_hi && index + 1 < requirements.len() {
            let h = AllocationHalt::SpaceExhausted { index: index + 1 };
            log::warn!("{}", h);
            halt = Some(h);
            break;
        }
    }

    let unmet: Vec<UnmetRequirement> = requirements
        .iter()
        .enumerate()
        .skip(assignments.len())
        .map(|(index, &hosts)| UnmetRequirement { index, hosts })
        .collect();

    let status = if halt.is_none() && unmet.is_empty() {
        PlanStatus::Success
    } else if assignments.is_empty() {
        PlanStatus::Failed
    } else {
        PlanStatus::Partial
    };
    let satisfied = assignments.len();

    log::info!(
        "# plan() {:?}: {}/{} requirements satisfied, {} of {} addresses consumed",
        status,
        satisfied,
        requirements.len(),
        consumed,
        available
    );

    Ok(AllocationPlan {
        base,
        assignments,
        unmet,
        warnings,
        halt,
        requested: requirements.len(),
        satisfied,
        consumed_addresses: consumed,
        available_addresses: available,
        status,
    })
}
