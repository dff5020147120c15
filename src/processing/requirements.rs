//! Requirement ordering.
//!
//! Largest-first packing is a correctness-critical policy of the allocator,
//! so the descending sort is an explicit, separate step the caller applies
//! before [`plan`](crate::processing::plan) instead of something the
//! allocator does implicitly.

/// Sort host-count requirements in descending order.
pub fn sorted_descending(mut requirements: Vec<u32>) -> Vec<u32> {
    requirements.sort_unstable_by(|a, b| b.cmp(a));
    requirements
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sorted_descending() {
        assert_eq!(
            sorted_descending(vec![10, 60, 2, 28]),
            vec![60, 28, 10, 2]
        );
        assert_eq!(sorted_descending(vec![5, 5, 5]), vec![5, 5, 5]);
        assert_eq!(sorted_descending(vec![]), Vec::<u32>::new());
        assert_eq!(sorted_descending(vec![7]), vec![7]);
    }
}
