use alloc::vec::Vec;

use smallvec::SmallVec;

use super::LinkedBst;

impl<T> LinkedBst<T> {
    /// Returns the number of edges on the longest path from the root to a leaf.
    ///
    /// An empty tree has height `-1` and a single item has height `0`.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::LinkedBst;
    ///
    /// let mut tree: LinkedBst<i32> = LinkedBst::new();
    /// assert_eq!(tree.height(), -1);
    /// tree.add(1);
    /// assert_eq!(tree.height(), 0);
    /// tree.add(2);
    /// tree.add(3);
    /// assert_eq!(tree.height(), 2);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(n)
    #[must_use]
    pub fn height(&self) -> isize {
        let mut deepest: Option<usize> = None;
        let mut stack: SmallVec<[_; 16]> = SmallVec::new();
        stack.extend(self.root.as_deref().map(|root| (root, 0usize)));

        while let Some((node, depth)) = stack.pop() {
            deepest = deepest.max(Some(depth));
            stack.extend(node.left().map(|left| (left, depth + 1)));
            stack.extend(node.right().map(|right| (right, depth + 1)));
        }

        deepest.map_or(-1, |depth| isize::try_from(depth).unwrap_or(isize::MAX))
    }

    /// Returns `true` if the height is within `2 * log2(len + 1) - 1`.
    ///
    /// This is a loose bound relative to the minimum possible height for `len`
    /// items, not a per-subtree balance property like AVL's.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::LinkedBst;
    ///
    /// let mut tree: LinkedBst<i32> = (0..7).collect();
    /// assert!(!tree.is_balanced());
    /// tree.rebalance();
    /// assert!(tree.is_balanced());
    /// ```
    ///
    /// # Complexity
    ///
    /// O(n)
    #[must_use]
    pub fn is_balanced(&self) -> bool {
        // height <= 2*log2(n+1) - 1  <=>  2^(height+1) <= (n+1)^2
        let Ok(exponent) = u32::try_from(self.height() + 1) else {
            return false;
        };
        let Some(lhs) = 1u128.checked_shl(exponent) else {
            // (n+1)^2 < 2^128 for any n that fits in memory.
            return false;
        };
        let n = self.len as u128 + 1;
        lhs <= n * n
    }

    /// Rebuilds the tree into minimal height.
    ///
    /// The items are drained in ascending order, then re-added middle first: the
    /// middle item of the sorted run becomes the root, and each half is rebuilt the
    /// same way beneath it. The items themselves are unchanged.
    ///
    /// With distinct items the resulting height is `ceil(log2(len + 1)) - 1`.
    /// Duplicates of the middle item still descend to the right, so a tree with
    /// many equal items may end up taller than that.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::LinkedBst;
    ///
    /// let mut tree: LinkedBst<i32> = (1..=7).collect();
    /// assert_eq!(tree.height(), 6);
    ///
    /// tree.rebalance();
    /// assert_eq!(tree.height(), 2);
    /// assert_eq!(tree.iter().copied().collect::<Vec<_>>(), [4, 2, 1, 3, 6, 5, 7]);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(n log n)
    pub fn rebalance(&mut self)
    where
        T: Ord,
    {
        let len = self.len;
        let before = self.height();

        let sorted: Vec<T> = core::mem::take(self).into_iter().collect();
        self.add_middle_first(sorted);

        tracing::debug!(len, before, after = self.height(), "rebalanced tree");
    }

    /// Adds the middle of `sorted`, then each half, recursing once per level.
    fn add_middle_first(&mut self, mut sorted: Vec<T>)
    where
        T: Ord,
    {
        if sorted.is_empty() {
            return;
        }

        let mid = sorted.len() / 2;
        let upper = sorted.split_off(mid + 1);
        if let Some(middle) = sorted.pop() {
            self.add(middle);
        }
        self.add_middle_first(sorted);
        self.add_middle_first(upper);
    }
}
