use thiserror::Error;

/// Errors returned by fallible [`LinkedBst`](crate::LinkedBst) operations.
///
/// Lookups that legitimately find nothing (`find`, `successor`, `predecessor`,
/// `replace`) return `None` instead; only operations whose precondition is that
/// the item is present report an error.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Error)]
pub enum TreeError {
    /// The item to remove is not stored in the tree.
    #[error("item not in tree")]
    NotFound,
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use alloc::string::ToString;

    use super::*;

    #[test]
    fn not_found_message() {
        assert_eq!(TreeError::NotFound.to_string(), "item not in tree");
    }
}
