use core::fmt;

use smallvec::SmallVec;

use super::LinkedBst;
use crate::raw::Node;

/// Renders the tree rotated 90 degrees counterclockwise.
///
/// Each item is written on its own line, indented by one `"| "` per level below
/// the root. The right subtree is written above its parent and the left subtree
/// below, so reading top to bottom yields the items in descending order.
///
/// # Examples
///
/// ```
/// use linked_bst::LinkedBst;
///
/// let tree = LinkedBst::from([2, 1, 3]);
/// assert_eq!(tree.to_string(), "| 3\n2\n| 1\n");
/// ```
impl<T: fmt::Display> fmt::Display for LinkedBst<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Reverse in-order walk: right, node, left.
        let mut stack: SmallVec<[(&Node<T>, usize); 16]> = SmallVec::new();
        let mut current = self.root.as_deref().map(|root| (root, 0));

        loop {
            while let Some((node, level)) = current {
                stack.push((node, level));
                current = node.right().map(|right| (right, level + 1));
            }
            let Some((node, level)) = stack.pop() else {
                return Ok(());
            };

            for _ in 0..level {
                f.write_str("| ")?;
            }
            writeln!(f, "{}", node.data)?;

            current = node.left().map(|left| (left, level + 1));
        }
    }
}
