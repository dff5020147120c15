//! Allocation logic.
//!
//! This module contains the planning pipeline:
//! - [`requirements`] - explicit descending sort of host requirements
//! - [`allocator`] - the VLSM allocation pass

mod allocator;
mod requirements;

// Re-export public functions
pub use allocator::plan;
pub use requirements::sorted_descending;
