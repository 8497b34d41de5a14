use alloc::boxed::Box;
use alloc::collections::VecDeque;
use core::fmt;
use core::iter::FusedIterator;

use smallvec::SmallVec;

use super::LinkedBst;
use crate::raw::{Link, Node, teardown};

/// Explicit traversal stack; inline capacity covers a balanced tree of 65k items.
type Stack<'a, T> = SmallVec<[&'a Node<T>; 16]>;

/// An iterator over the items of a `LinkedBst` in pre-order.
///
/// This is the tree's default iteration order. Each node is yielded before its
/// left subtree, which is yielded before its right subtree.
///
/// This `struct` is created by the [`iter`] and [`preorder`] methods on
/// [`LinkedBst`]. See their documentation for more.
///
/// [`iter`]: LinkedBst::iter
/// [`preorder`]: LinkedBst::preorder
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Iter<'a, T: 'a> {
    stack: Stack<'a, T>,
    remaining: usize,
}

/// An iterator over the items of a `LinkedBst` in ascending order.
///
/// This `struct` is created by the [`inorder`] method on [`LinkedBst`].
///
/// [`inorder`]: LinkedBst::inorder
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Inorder<'a, T: 'a> {
    stack: Stack<'a, T>,
    current: Option<&'a Node<T>>,
    remaining: usize,
}

/// An iterator over the items of a `LinkedBst` in post-order.
///
/// This `struct` is created by the [`postorder`] method on [`LinkedBst`].
///
/// [`postorder`]: LinkedBst::postorder
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Postorder<'a, T: 'a> {
    // The flag records whether the node's children have already been pushed.
    stack: SmallVec<[(&'a Node<T>, bool); 16]>,
    remaining: usize,
}

/// An iterator over the items of a `LinkedBst` level by level, left to right.
///
/// This `struct` is created by the [`levelorder`] method on [`LinkedBst`].
///
/// [`levelorder`]: LinkedBst::levelorder
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Levelorder<'a, T: 'a> {
    queue: VecDeque<&'a Node<T>>,
    remaining: usize,
}

/// An owning iterator over the items of a `LinkedBst` in ascending order.
///
/// Nodes are freed as the iterator advances. This `struct` is created by the
/// [`into_iter`] method on [`LinkedBst`] (provided by the [`IntoIterator`] trait).
///
/// [`into_iter`]: LinkedBst#method.into_iter
pub struct IntoIter<T> {
    stack: SmallVec<[Box<Node<T>>; 16]>,
    current: Link<T>,
    remaining: usize,
}

impl<T> LinkedBst<T> {
    /// Gets an iterator that visits the items in pre-order, using an explicit stack.
    ///
    /// Every call starts a fresh traversal.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::LinkedBst;
    ///
    /// let tree = LinkedBst::from([5, 3, 8, 1, 4]);
    /// let items: Vec<_> = tree.iter().copied().collect();
    /// assert_eq!(items, [5, 3, 1, 4, 8]);
    /// ```
    pub fn iter(&self) -> Iter<'_, T> {
        let mut stack = Stack::new();
        stack.extend(self.root.as_deref());
        Iter {
            stack,
            remaining: self.len,
        }
    }

    /// Gets an iterator that visits the items in pre-order.
    ///
    /// Identical to [`iter`](LinkedBst::iter). Adding the yielded items to an empty
    /// tree in this order rebuilds the same shape.
    pub fn preorder(&self) -> Iter<'_, T> {
        self.iter()
    }

    /// Gets an iterator that visits the items in ascending order.
    ///
    /// Every call starts a fresh traversal.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::LinkedBst;
    ///
    /// let tree = LinkedBst::from([5, 3, 8, 1, 4, 7, 9]);
    /// let items: Vec<_> = tree.inorder().copied().collect();
    /// assert_eq!(items, [1, 3, 4, 5, 7, 8, 9]);
    /// ```
    pub fn inorder(&self) -> Inorder<'_, T> {
        Inorder {
            stack: Stack::new(),
            current: self.root.as_deref(),
            remaining: self.len,
        }
    }

    /// Gets an iterator that visits both subtrees of a node before the node itself.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::LinkedBst;
    ///
    /// let tree = LinkedBst::from([5, 3, 8, 1, 4]);
    /// let items: Vec<_> = tree.postorder().copied().collect();
    /// assert_eq!(items, [1, 4, 3, 8, 5]);
    /// ```
    pub fn postorder(&self) -> Postorder<'_, T> {
        let mut stack = SmallVec::new();
        stack.extend(self.root.as_deref().map(|root| (root, false)));
        Postorder {
            stack,
            remaining: self.len,
        }
    }

    /// Gets an iterator that visits the items breadth-first, one level at a time.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::LinkedBst;
    ///
    /// let tree = LinkedBst::from([5, 3, 8, 1, 4]);
    /// let items: Vec<_> = tree.levelorder().copied().collect();
    /// assert_eq!(items, [5, 3, 8, 1, 4]);
    /// ```
    pub fn levelorder(&self) -> Levelorder<'_, T> {
        let mut queue = VecDeque::new();
        queue.extend(self.root.as_deref());
        Levelorder {
            queue,
            remaining: self.len,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let node = self.stack.pop()?;
        // Right first, so the left subtree is popped next.
        self.stack.extend(node.right());
        self.stack.extend(node.left());
        self.remaining -= 1;
        Some(&node.data)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> Iterator for Inorder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        while let Some(node) = self.current {
            self.stack.push(node);
            self.current = node.left();
        }
        let node = self.stack.pop()?;
        self.current = node.right();
        self.remaining -= 1;
        Some(&node.data)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> Iterator for Postorder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        loop {
            let (node, expanded) = self.stack.pop()?;
            if expanded || node.is_leaf() {
                self.remaining -= 1;
                return Some(&node.data);
            }
            self.stack.push((node, true));
            self.stack.extend(node.right().map(|right| (right, false)));
            self.stack.extend(node.left().map(|left| (left, false)));
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> Iterator for Levelorder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let node = self.queue.pop_front()?;
        self.queue.extend(node.left());
        self.queue.extend(node.right());
        self.remaining -= 1;
        Some(&node.data)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        while let Some(mut node) = self.current.take() {
            self.current = node.left.take();
            self.stack.push(node);
        }
        let mut node = self.stack.pop()?;
        self.current = node.right.take();
        self.remaining -= 1;
        Some(node.data)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> ExactSizeIterator for Inorder<'_, T> {}
impl<T> ExactSizeIterator for Postorder<'_, T> {}
impl<T> ExactSizeIterator for Levelorder<'_, T> {}
impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for Iter<'_, T> {}
impl<T> FusedIterator for Inorder<'_, T> {}
impl<T> FusedIterator for Postorder<'_, T> {}
impl<T> FusedIterator for Levelorder<'_, T> {}
impl<T> FusedIterator for IntoIter<T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter {
            stack: self.stack.clone(),
            remaining: self.remaining,
        }
    }
}

impl<T> Clone for Inorder<'_, T> {
    fn clone(&self) -> Self {
        Inorder {
            stack: self.stack.clone(),
            current: self.current,
            remaining: self.remaining,
        }
    }
}

impl<T> Clone for Postorder<'_, T> {
    fn clone(&self) -> Self {
        Postorder {
            stack: self.stack.clone(),
            remaining: self.remaining,
        }
    }
}

impl<T> Clone for Levelorder<'_, T> {
    fn clone(&self) -> Self {
        Levelorder {
            queue: self.queue.clone(),
            remaining: self.remaining,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Iter<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

impl<T: fmt::Debug> fmt::Debug for Inorder<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

impl<T: fmt::Debug> fmt::Debug for Postorder<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

impl<T: fmt::Debug> fmt::Debug for Levelorder<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

impl<T: fmt::Debug> fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Pending nodes keep their right subtrees, exactly like a borrowed in-order walk.
        let pending = Inorder {
            stack: self.stack.iter().map(|node| &**node).collect(),
            current: self.current.as_deref(),
            remaining: self.remaining,
        };
        f.debug_list().entries(pending).finish()
    }
}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        teardown(self.current.take());
        for node in self.stack.drain(..) {
            teardown(Some(node));
        }
    }
}

impl<T> IntoIterator for LinkedBst<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    /// Gets an iterator for moving out the tree's items in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::LinkedBst;
    ///
    /// let tree = LinkedBst::from([3, 1, 2]);
    /// let v: Vec<_> = tree.into_iter().collect();
    /// assert_eq!(v, [1, 2, 3]);
    /// ```
    fn into_iter(mut self) -> IntoIter<T> {
        IntoIter {
            stack: SmallVec::new(),
            current: self.root.take(),
            remaining: self.len,
        }
    }
}

impl<'a, T> IntoIterator for &'a LinkedBst<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}
