use core::borrow::Borrow;
use core::cmp::Ordering::{Equal, Less};
use core::fmt;
use core::mem;

use crate::TreeError;
use crate::raw::{Link, Node, clone_link, teardown};

mod balance;
mod iter;
mod order_statistic;
mod render;

pub use iter::{Inorder, IntoIter, Iter, Levelorder, Postorder};

/// An ordered collection based on a link-based binary search tree.
///
/// Every item in a node's left subtree compares less than the node's item, and
/// every item in its right subtree compares greater than or equal to it. Equal
/// items are not merged: each [`add`](LinkedBst::add) creates a new node, and
/// duplicates always descend to the right.
///
/// The tree does not balance itself. Inserting items in sorted order produces a
/// tree shaped like a linked list, and lookups degrade to linear time until
/// [`rebalance`](LinkedBst::rebalance) is called.
///
/// It is a logic error for an item to be modified in such a way that its ordering
/// relative to any other item changes while it is in the tree. This includes
/// calling [`replace`](LinkedBst::replace) with a value that does not sort into the
/// replaced item's position. The behavior resulting from such a logic error is not
/// specified, but will not result in undefined behavior.
///
/// # Examples
///
/// ```
/// use linked_bst::{LinkedBst, TreeError};
///
/// let mut words = LinkedBst::new();
/// words.add("pear");
/// words.add("apple");
/// words.add("quince");
///
/// assert!(words.contains("apple"));
/// assert_eq!(words.len(), 3);
///
/// assert_eq!(words.remove("pear"), Ok("pear"));
/// assert_eq!(words.remove("pear"), Err(TreeError::NotFound));
///
/// let sorted: Vec<_> = words.inorder().copied().collect();
/// assert_eq!(sorted, ["apple", "quince"]);
/// ```
///
/// A `LinkedBst` can be built from an array; items are inserted in array order:
///
/// ```
/// use linked_bst::LinkedBst;
///
/// let tree = LinkedBst::from([2, 1, 3]);
/// assert_eq!(tree.height(), 1);
/// ```
pub struct LinkedBst<T> {
    root: Link<T>,
    len: usize,
}

impl<T> LinkedBst<T> {
    /// Makes a new, empty `LinkedBst`.
    ///
    /// Does not allocate anything on its own.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::LinkedBst;
    ///
    /// let tree: LinkedBst<i32> = LinkedBst::new();
    /// assert!(tree.is_empty());
    /// ```
    #[must_use]
    pub const fn new() -> LinkedBst<T> {
        LinkedBst {
            root: None,
            len: 0,
        }
    }

    /// Returns the number of items in the tree, duplicates included.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::LinkedBst;
    ///
    /// let mut tree = LinkedBst::new();
    /// tree.add(1);
    /// tree.add(1);
    /// assert_eq!(tree.len(), 2);
    /// ```
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the tree contains no items.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Removes every item from the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::LinkedBst;
    ///
    /// let mut tree = LinkedBst::from([1, 2, 3]);
    /// tree.clear();
    /// assert!(tree.is_empty());
    /// assert_eq!(tree.height(), -1);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(n)
    pub fn clear(&mut self) {
        tracing::trace!(len = self.len, "clearing tree");
        teardown(self.root.take());
        self.len = 0;
    }

    /// Returns the smallest item in the tree, or `None` if it is empty.
    ///
    /// # Complexity
    ///
    /// O(height)
    #[must_use]
    pub fn first(&self) -> Option<&T> {
        let mut node = self.root.as_deref()?;
        while let Some(left) = node.left() {
            node = left;
        }
        Some(&node.data)
    }

    /// Returns the largest item in the tree, or `None` if it is empty.
    ///
    /// When the largest item is stored more than once, the copy returned is the
    /// most recently added one.
    ///
    /// # Complexity
    ///
    /// O(height)
    #[must_use]
    pub fn last(&self) -> Option<&T> {
        let mut node = self.root.as_deref()?;
        while let Some(right) = node.right() {
            node = right;
        }
        Some(&node.data)
    }

    /// Returns the node whose item equals `item`, walking down from the root.
    fn search<Q>(&self, item: &Q) -> Option<&Node<T>>
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            current = match item.cmp(node.data.borrow()) {
                Equal => return Some(node),
                Less => node.left(),
                _ => node.right(),
            };
        }
        None
    }

    /// Returns the owning link of the node whose item equals `item`.
    ///
    /// `self.root` is treated like any other link, so a root match hands back the
    /// root link itself and the caller can replace the root like an interior node.
    fn search_link_mut<Q>(&mut self, item: &Q) -> Option<&mut Link<T>>
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let mut link = &mut self.root;
        loop {
            let go_left = match link.as_deref() {
                None => return None,
                Some(node) => match item.cmp(node.data.borrow()) {
                    Equal => return Some(link),
                    Less => true,
                    _ => false,
                },
            };
            let node = link.as_mut()?;
            link = if go_left { &mut node.left } else { &mut node.right };
        }
    }

    /// Returns a reference to the item in the tree, if any, that is equal to the
    /// given value.
    ///
    /// When the item is stored more than once, the copy closest to the root is
    /// returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::LinkedBst;
    ///
    /// let mut tree: LinkedBst<i32> = LinkedBst::new();
    /// assert_eq!(tree.find(&5), None);
    /// tree.add(5);
    /// assert_eq!(tree.find(&5), Some(&5));
    /// ```
    ///
    /// # Complexity
    ///
    /// O(height)
    #[must_use]
    pub fn find<Q>(&self, item: &Q) -> Option<&T>
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.search(item).map(|node| &node.data)
    }

    /// Returns `true` if the tree contains an item equal to the given value.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::LinkedBst;
    ///
    /// let tree = LinkedBst::from([1, 2, 3]);
    /// assert_eq!(tree.contains(&1), true);
    /// assert_eq!(tree.contains(&4), false);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(height)
    #[must_use]
    pub fn contains<Q>(&self, item: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.search(item).is_some()
    }

    /// Adds an item to the tree.
    ///
    /// The item always becomes a new leaf. An item equal to one already stored is
    /// kept as well, and is placed in the right subtree of its equal.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::LinkedBst;
    ///
    /// let mut tree = LinkedBst::new();
    /// tree.add(2);
    /// tree.add(2);
    /// assert_eq!(tree.len(), 2);
    /// assert_eq!(tree.inorder().collect::<Vec<_>>(), [&2, &2]);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(height)
    pub fn add(&mut self, item: T)
    where
        T: Ord,
    {
        let mut link = &mut self.root;
        while let Some(node) = link {
            link = if item < node.data { &mut node.left } else { &mut node.right };
        }
        *link = Some(Node::new_leaf(item));
        self.len += 1;
    }

    /// Removes the item equal to `item` from the tree and returns it.
    ///
    /// When the item is stored more than once, the copy closest to the root is
    /// removed.
    ///
    /// A node with two children keeps its place: its item is overwritten with the
    /// largest item of its left subtree, and the node that held that item is
    /// unlinked instead. If that item is itself stored more than once, an equal copy
    /// stays in the left subtree; lookups still reach every copy.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::NotFound`] if no equal item is stored. The tree is left
    /// untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::{LinkedBst, TreeError};
    ///
    /// let mut tree = LinkedBst::from([20, 10, 30]);
    /// assert_eq!(tree.remove(&20), Ok(20));
    /// assert_eq!(tree.len(), 2);
    /// assert_eq!(tree.remove(&20), Err(TreeError::NotFound));
    /// ```
    ///
    /// # Complexity
    ///
    /// O(height)
    pub fn remove<Q>(&mut self, item: &Q) -> Result<T, TreeError>
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let link = self.search_link_mut(item).ok_or(TreeError::NotFound)?;
        let Some(node) = link.as_deref_mut() else {
            return Err(TreeError::NotFound);
        };

        let removed = if node.has_two_children() {
            let max = Node::take_max(&mut node.left).ok_or(TreeError::NotFound)?;
            mem::replace(&mut node.data, max)
        } else {
            let child = node.left.take().or_else(|| node.right.take());
            let target = mem::replace(link, child).ok_or(TreeError::NotFound)?;
            target.data
        };

        self.len -= 1;
        Ok(removed)
    }

    /// Overwrites the item equal to `item` with `new_item` and returns the old item,
    /// or returns `None` if no equal item is stored.
    ///
    /// The node is located by `item` alone and stays where it is; the tree is not
    /// reordered. `new_item` must sort into the same position as `item`, otherwise
    /// later lookups may miss it.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::LinkedBst;
    ///
    /// let mut tree = LinkedBst::from([("b", 1), ("a", 1)]);
    /// assert_eq!(tree.replace(&("b", 1), ("b", 2)), Some(("b", 1)));
    /// assert_eq!(tree.replace(&("c", 1), ("c", 2)), None);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(height)
    pub fn replace<Q>(&mut self, item: &Q, new_item: T) -> Option<T>
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let node = self.search_link_mut(item)?.as_deref_mut()?;
        Some(mem::replace(&mut node.data, new_item))
    }
}

impl<T> Drop for LinkedBst<T> {
    fn drop(&mut self) {
        teardown(self.root.take());
    }
}

impl<T: Clone> Clone for LinkedBst<T> {
    /// Copies the tree node by node, keeping its exact shape.
    fn clone(&self) -> Self {
        LinkedBst {
            root: clone_link(&self.root),
            len: self.len,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for LinkedBst<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.inorder()).finish()
    }
}

impl<T> Default for LinkedBst<T> {
    fn default() -> Self {
        LinkedBst::new()
    }
}

impl<T: Ord> FromIterator<T> for LinkedBst<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = LinkedBst::new();
        tree.extend(iter);
        tree
    }
}

impl<T: Ord> Extend<T> for LinkedBst<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.add(item);
        }
    }
}

impl<'a, T: 'a + Ord + Copy> Extend<&'a T> for LinkedBst<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        for &item in iter {
            self.add(item);
        }
    }
}

impl<T: Ord, const N: usize> From<[T; N]> for LinkedBst<T> {
    fn from(arr: [T; N]) -> Self {
        arr.into_iter().collect()
    }
}
