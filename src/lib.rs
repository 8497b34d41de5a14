//! A link-based binary search tree with on-demand rebalancing.
//!
//! This crate provides [`LinkedBst`], an ordered container of comparable items
//! stored in an unbalanced binary search tree. Unlike AVL or red-black trees,
//! the tree never restructures itself on insertion or removal. Balance is
//! restored only when [`rebalance`](LinkedBst::rebalance) is called, which
//! rebuilds the tree into minimal height from its sorted contents.
//!
//! # Example
//!
//! ```
//! use linked_bst::LinkedBst;
//!
//! let mut tree = LinkedBst::new();
//! for item in [5, 3, 8, 1, 4, 7, 9] {
//!     tree.add(item);
//! }
//!
//! assert_eq!(tree.find(&4), Some(&4));
//! assert_eq!(tree.successor(&5), Some(&7));
//! assert_eq!(tree.predecessor(&5), Some(&4));
//!
//! // Sorted insertion degenerates into a list...
//! let mut list_like: LinkedBst<i32> = (0..15).collect();
//! assert_eq!(list_like.height(), 14);
//!
//! // ...until it is rebalanced on request.
//! list_like.rebalance();
//! assert_eq!(list_like.height(), 3);
//! assert!(list_like.is_balanced());
//! ```
//!
//! # Features
//!
//! - **`no_std` compatible** - Only requires `alloc`, no standard library dependency
//! - **Duplicates retained** - Equal items are stored as separate nodes, always to the right
//! - **Stack-safe** - Traversal, height, rendering and drop are iterative, so degenerate trees
//!   of any depth are safe to walk and free
//!
//! # Implementation
//!
//! Nodes own their children through `Option<Box<_>>` links and carry no parent pointers.
//! Removal walks a cursor over the owning links instead, so the root is replaced exactly
//! like any interior link.

#![no_std]
#![forbid(unsafe_code)]
#![forbid(keyword_idents)]
#![forbid(non_ascii_idents)]
#![forbid(unreachable_pub)]
#![warn(clippy::all)]
#![warn(clippy::cargo)]
#![warn(clippy::pedantic)]
// Enable coverage attributes for nightly builds.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

extern crate alloc;

mod error;
mod raw;

pub mod linked_bst;

pub use error::TreeError;
pub use linked_bst::LinkedBst;
