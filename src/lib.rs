//! This crate exposes a Binary Search Tree (BST) that stores each
//! distinct key once, together with a count of how many times that key
//! has been inserted.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is defined recursively out of nodes: each node
//! holds a key and up to two children, and the structure maintains two
//! invariants:
//!
//! 1. Every key in a node's left subtree compares less than the node's
//!    own key.
//! 2. Every key in a node's right subtree compares greater than the
//!    node's own key.
//!
//! These invariants mean an in-order traversal (left subtree, node, right
//! subtree) visits keys in ascending order, which is exactly what you want
//! from a frequency table: feed the tree a stream of values and read back
//! `value count` pairs in sorted order.
//!
//! ## Counting
//!
//! The tree in [`counting`] adds one twist to the classic structure: keys
//! are unique, and re-inserting a key bumps a per-node occurrence count
//! instead of creating a second node. Removal is the mirror image - the
//! count is decremented and the node is only unlinked once it reaches
//! zero. The tree is deliberately not self-balancing, so adversarial
//! insertion orders degrade it to a linked list and lookups are
//! `O(height)`.
//!
//! [`letter`] provides the classic key type for this structure: a single
//! character ordered by its code point.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod counting;
pub mod letter;
