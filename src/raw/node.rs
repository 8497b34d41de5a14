use alloc::boxed::Box;

use smallvec::SmallVec;

/// An owning, possibly empty, child link.
pub(crate) type Link<T> = Option<Box<Node<T>>>;

// Children are owned exclusively; there are no parent pointers.
pub(crate) struct Node<T> {
    pub(crate) data: T,
    pub(crate) left: Link<T>,
    pub(crate) right: Link<T>,
}

impl<T> Node<T> {
    /// Creates a new boxed leaf holding `data`.
    pub(crate) fn new_leaf(data: T) -> Box<Self> {
        Box::new(Node {
            data,
            left: None,
            right: None,
        })
    }

    /// Returns the left child, if any.
    #[inline]
    pub(crate) fn left(&self) -> Option<&Node<T>> {
        self.left.as_deref()
    }

    /// Returns the right child, if any.
    #[inline]
    pub(crate) fn right(&self) -> Option<&Node<T>> {
        self.right.as_deref()
    }

    /// Returns true if this node has no children.
    pub(crate) fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Returns true if this node has both a left and a right child.
    pub(crate) fn has_two_children(&self) -> bool {
        self.left.is_some() && self.right.is_some()
    }

    /// Unlinks the maximum node of the subtree held by `link` and returns its data.
    ///
    /// The maximum is found by walking right from the subtree root. Its left
    /// subtree takes its place in whichever link held it: the parent's right link,
    /// or `link` itself when the subtree root has no right child.
    ///
    /// Returns `None` only if `link` is empty.
    pub(crate) fn take_max(link: &mut Link<T>) -> Option<T> {
        let mut slot = link;
        while slot.as_ref().is_some_and(|node| node.right.is_some()) {
            slot = &mut slot.as_mut()?.right;
        }

        let mut max = slot.take()?;
        *slot = max.left.take();
        Some(max.data)
    }
}

/// Drops every node in `link` without recursing.
///
/// Dropping a `Box<Node<T>>` directly recurses once per level, which overflows
/// the stack on a degenerate tree.
pub(crate) fn teardown<T>(link: Link<T>) {
    let mut stack: SmallVec<[Box<Node<T>>; 16]> = SmallVec::new();
    stack.extend(link);

    while let Some(mut node) = stack.pop() {
        stack.extend(node.left.take());
        stack.extend(node.right.take());
        // `node` is now a leaf and drops without recursion.
    }
}

/// Copies every node in `link` into a new tree of the same shape, without recursing.
pub(crate) fn clone_link<T: Clone>(link: &Link<T>) -> Link<T> {
    let mut root = None;
    {
        let mut stack: SmallVec<[(&Node<T>, &mut Link<T>); 16]> = SmallVec::new();
        stack.extend(link.as_deref().map(|node| (node, &mut root)));

        while let Some((source, slot)) = stack.pop() {
            let Node { left, right, .. } = &mut **slot.insert(Node::new_leaf(source.data.clone()));
            stack.extend(source.right().map(|node| (node, right)));
            stack.extend(source.left().map(|node| (node, left)));
        }
    }
    root
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use static_assertions::assert_eq_size;

    // Verify the niche optimization: an empty link costs nothing extra.
    assert_eq_size!(Link<u64>, Box<Node<u64>>);

    fn leaf(data: i32) -> Link<i32> {
        Some(Node::new_leaf(data))
    }

    fn branch(data: i32, left: Link<i32>, right: Link<i32>) -> Link<i32> {
        Some(Box::new(Node { data, left, right }))
    }

    #[test]
    fn take_max_from_empty_link() {
        let mut link: Link<i32> = None;
        assert_eq!(Node::take_max(&mut link), None);
    }

    #[test]
    fn take_max_subtree_root_is_max() {
        // 5 with only a left child 3: 5 is the max, 3 moves up into the link.
        let mut link = branch(5, leaf(3), None);
        assert_eq!(Node::take_max(&mut link), Some(5));

        let root = link.as_deref().unwrap();
        assert_eq!(root.data, 3);
        assert!(root.is_leaf());
    }

    #[test]
    fn take_max_reattaches_left_subtree_of_max() {
        //     2
        //    / \
        //   1   6
        //      /
        //     4
        let mut link = branch(2, leaf(1), branch(6, leaf(4), None));
        assert_eq!(Node::take_max(&mut link), Some(6));

        let root = link.as_deref().unwrap();
        assert_eq!(root.data, 2);
        assert_eq!(root.left().unwrap().data, 1);
        assert_eq!(root.right().unwrap().data, 4);
        assert!(root.right().unwrap().is_leaf());
    }

    #[test]
    fn has_two_children() {
        let both = branch(2, leaf(1), leaf(3));
        let one = branch(2, leaf(1), None);
        assert!(both.as_deref().unwrap().has_two_children());
        assert!(!one.as_deref().unwrap().has_two_children());
        assert!(!one.as_deref().unwrap().is_leaf());
    }

    #[test]
    fn clone_link_keeps_shape() {
        // Out of order on purpose: the copy must not re-route anything.
        let link = branch(2, branch(7, None, leaf(7)), leaf(1));
        let copy = clone_link(&link);

        let root = copy.as_deref().unwrap();
        assert_eq!(root.data, 2);
        assert_eq!(root.left().unwrap().data, 7);
        assert_eq!(root.left().unwrap().right().unwrap().data, 7);
        assert!(root.left().unwrap().left().is_none());
        assert_eq!(root.right().unwrap().data, 1);
        assert!(root.right().unwrap().is_leaf());
        assert!(clone_link::<i32>(&None).is_none());
    }

    #[test]
    fn teardown_degenerate_chain() {
        // Deep enough to overflow the default test thread stack if dropped recursively.
        let mut link: Link<u32> = None;
        for data in 0..200_000 {
            link = Some(Box::new(Node {
                data,
                left: None,
                right: link,
            }));
        }
        teardown(link);
    }
}
