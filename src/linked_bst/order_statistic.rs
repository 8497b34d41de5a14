use alloc::vec;
use alloc::vec::Vec;
use core::borrow::Borrow;

use super::LinkedBst;

impl<T> LinkedBst<T> {
    /// Returns the smallest stored item strictly greater than `item`, or `None` if
    /// there is no such item.
    ///
    /// `item` does not need to be stored in the tree.
    ///
    /// # Complexity
    ///
    /// O(height)
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::LinkedBst;
    ///
    /// let tree = LinkedBst::from([10, 20, 30]);
    /// assert_eq!(tree.successor(&10), Some(&20));
    /// assert_eq!(tree.successor(&15), Some(&20));
    /// assert_eq!(tree.successor(&30), None);
    /// ```
    #[must_use]
    pub fn successor<Q>(&self, item: &Q) -> Option<&T>
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let mut current = self.root.as_deref();
        let mut candidate = None;

        while let Some(node) = current {
            if item.cmp(node.data.borrow()).is_ge() {
                current = node.right();
            } else {
                candidate = Some(&node.data);
                current = node.left();
            }
        }

        candidate
    }

    /// Returns the largest stored item strictly less than `item`, or `None` if
    /// there is no such item.
    ///
    /// `item` does not need to be stored in the tree.
    ///
    /// # Complexity
    ///
    /// O(height)
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::LinkedBst;
    ///
    /// let tree = LinkedBst::from([10, 20, 30]);
    /// assert_eq!(tree.predecessor(&30), Some(&20));
    /// assert_eq!(tree.predecessor(&25), Some(&20));
    /// assert_eq!(tree.predecessor(&10), None);
    /// ```
    #[must_use]
    pub fn predecessor<Q>(&self, item: &Q) -> Option<&T>
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let mut current = self.root.as_deref();
        let mut candidate = None;

        while let Some(node) = current {
            if item.cmp(node.data.borrow()).is_le() {
                current = node.left();
            } else {
                candidate = Some(&node.data);
                current = node.right();
            }
        }

        candidate
    }

    /// Returns `low` followed by the stored items in `(low, high]`, in ascending
    /// order.
    ///
    /// `low` is always the first element, whether or not it is stored. The rest are
    /// found by repeatedly taking the [`successor`](LinkedBst::successor) of the
    /// last item until `high` is reached, so each distinct value appears once even
    /// if it is stored several times.
    ///
    /// Nothing greater than `high` is returned. The classic successor-walk
    /// formulation stops only once the latest value is `>= high` and so emits one
    /// item past `high` when `high` is not stored; code ported from it may expect
    /// that extra item.
    ///
    /// # Complexity
    ///
    /// O(k * height) for k returned items.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::LinkedBst;
    ///
    /// let tree = LinkedBst::from([5, 3, 8, 1, 4, 7, 9]);
    /// assert_eq!(tree.range_find(&3, &7), [&3, &4, &5, &7]);
    ///
    /// // `low` is emitted even when it is not stored.
    /// assert_eq!(tree.range_find(&2, &4), [&2, &3, &4]);
    /// ```
    #[must_use]
    pub fn range_find<'a>(&'a self, low: &'a T, high: &T) -> Vec<&'a T>
    where
        T: Ord,
    {
        let mut found = vec![low];
        let mut last = low;

        while last < high {
            match self.successor(last) {
                Some(next) if next <= high => {
                    found.push(next);
                    last = next;
                }
                _ => break,
            }
        }

        found
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use alloc::vec::Vec;

    use super::*;

    fn sample() -> LinkedBst<i32> {
        LinkedBst::from([5, 3, 8, 1, 4, 7, 9])
    }

    #[test]
    fn successor_and_predecessor_on_empty_tree() {
        let tree: LinkedBst<i32> = LinkedBst::new();
        assert_eq!(tree.successor(&1), None);
        assert_eq!(tree.predecessor(&1), None);
    }

    #[test]
    fn successor_walks_every_item() {
        let tree = sample();
        let mut chain = Vec::new();
        let mut current = tree.first();
        while let Some(item) = current {
            chain.push(*item);
            current = tree.successor(item);
        }
        assert_eq!(chain, [1, 3, 4, 5, 7, 8, 9]);
    }

    #[test]
    fn predecessor_walks_every_item() {
        let tree = sample();
        let mut chain = Vec::new();
        let mut current = tree.last();
        while let Some(item) = current {
            chain.push(*item);
            current = tree.predecessor(item);
        }
        assert_eq!(chain, [9, 8, 7, 5, 4, 3, 1]);
    }

    #[test]
    fn probes_outside_the_stored_range() {
        let tree = sample();
        assert_eq!(tree.successor(&0), Some(&1));
        assert_eq!(tree.successor(&9), None);
        assert_eq!(tree.successor(&100), None);
        assert_eq!(tree.predecessor(&10), Some(&9));
        assert_eq!(tree.predecessor(&1), None);
        assert_eq!(tree.predecessor(&-100), None);
    }

    #[test]
    fn successor_skips_duplicates() {
        let tree = LinkedBst::from([2, 2, 2, 5]);
        assert_eq!(tree.successor(&2), Some(&5));
        assert_eq!(tree.predecessor(&5), Some(&2));
    }

    #[test]
    fn range_find_within_tree() {
        let tree = sample();
        assert_eq!(tree.range_find(&1, &9), [&1, &3, &4, &5, &7, &8, &9]);
        assert_eq!(tree.range_find(&4, &8), [&4, &5, &7, &8]);
    }

    #[test]
    fn range_find_low_not_stored() {
        let tree = sample();
        assert_eq!(tree.range_find(&6, &8), [&6, &7, &8]);
    }

    #[test]
    fn range_find_high_not_stored() {
        let tree = sample();
        // The successor of 5 is past `high` and is not emitted.
        assert_eq!(tree.range_find(&4, &6), [&4, &5]);
    }

    #[test]
    fn range_find_past_the_maximum() {
        let tree = sample();
        assert_eq!(tree.range_find(&8, &100), [&8, &9]);
        assert_eq!(tree.range_find(&50, &100), [&50]);
    }

    #[test]
    fn range_find_degenerate_bounds() {
        let tree = sample();
        assert_eq!(tree.range_find(&5, &5), [&5]);
        assert_eq!(tree.range_find(&7, &3), [&7]);

        let empty: LinkedBst<i32> = LinkedBst::new();
        assert_eq!(empty.range_find(&1, &10), [&1]);
    }

    #[test]
    fn range_find_with_duplicates() {
        let tree = LinkedBst::from([3, 1, 3, 2, 3, 4]);
        assert_eq!(tree.range_find(&1, &4), [&1, &2, &3, &4]);
    }
}
