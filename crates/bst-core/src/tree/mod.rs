//! Binary search tree container and construction.
//!
//! The tree keeps strict BST ordering under insertion: duplicates are
//! silently discarded, so the stored values behave like a set whose
//! *shape* depends on insertion order.
//!
//! # Example
//!
//! ```
//! use bst_core::BinarySearchTree;
//!
//! let tree = BinarySearchTree::from_values([50, 30, 70, 20, 40]);
//! assert_eq!(tree.in_order(), vec![20, 30, 40, 50, 70]);
//! assert_eq!(tree.search_path(40), vec![50, 30, 40]);
//! ```

mod node;
mod visitor;

use std::collections::HashSet;

use rand::Rng;
use tracing::debug;

use crate::error::{BstError, Result};

pub use node::TreeNode;
pub use visitor::{CollectingVisitor, EdgeVisitor, FnVisitor, TreeVisitor};

/// A binary search tree over `i32` values.
///
/// The tree exclusively owns its nodes and holds a single root reference
/// (absent when empty). Nodes are never removed individually; the whole
/// structure is replaced or cleared as a unit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BinarySearchTree {
    root: Option<Box<TreeNode>>,
}

impl BinarySearchTree {
    /// Creates an empty tree.
    pub fn new() -> Self {
        Self { root: None }
    }

    /// Builds a tree by inserting each value in the given order.
    ///
    /// Later duplicates are no-ops. The input order determines the shape.
    pub fn from_values<I>(values: I) -> Self
    where
        I: IntoIterator<Item = i32>,
    {
        let mut tree = Self::new();
        for value in values {
            tree.insert(value);
        }
        debug!(nodes = tree.len(), depth = tree.depth(), "built tree from values");
        tree
    }

    /// Builds a tree from `count` distinct random values in `[min, max]`
    /// using the thread-local RNG.
    pub fn generate_random(count: usize, min: i32, max: i32) -> Result<Self> {
        Self::generate_random_with(&mut rand::thread_rng(), count, min, max)
    }

    /// Builds a tree from `count` distinct random values in `[min, max]`.
    ///
    /// Values are drawn uniformly with rejection of repeats and inserted in
    /// draw order. Fails fast if the range cannot supply `count` distinct
    /// values instead of looping forever.
    pub fn generate_random_with<R: Rng + ?Sized>(
        rng: &mut R,
        count: usize,
        min: i32,
        max: i32,
    ) -> Result<Self> {
        if min > max {
            return Err(BstError::InvalidRange { min, max });
        }
        let available = (i64::from(max) - i64::from(min) + 1) as u64;
        if count as u64 > available {
            return Err(BstError::RangeTooSmall { count, min, max });
        }

        let mut seen = HashSet::with_capacity(count);
        let mut drawn = Vec::with_capacity(count);
        while drawn.len() < count {
            let value = rng.gen_range(min..=max);
            if seen.insert(value) {
                drawn.push(value);
            }
        }

        Ok(Self::from_values(drawn))
    }

    /// Inserts a value, returning `false` if it was already present.
    pub fn insert(&mut self, value: i32) -> bool {
        TreeNode::insert_into(&mut self.root, value)
    }

    /// Returns `true` iff a node holding exactly `value` exists.
    pub fn search(&self, value: i32) -> bool {
        let mut current = self.root();
        while let Some(node) = current {
            if node.value() == value {
                return true;
            }
            current = node.child_toward(value);
        }
        false
    }

    /// Records the root-to-target descent for `value`.
    ///
    /// Includes the matching node when found; stops at the first match or
    /// the first empty slot.
    pub fn search_path(&self, value: i32) -> Vec<i32> {
        let mut path = Vec::new();
        let mut current = self.root();
        while let Some(node) = current {
            path.push(node.value());
            if node.value() == value {
                break;
            }
            current = node.child_toward(value);
        }
        path
    }

    /// Returns the values in ascending (left, node, right) order.
    pub fn in_order(&self) -> Vec<i32> {
        let mut visitor = CollectingVisitor::new();
        self.traverse_in_order(&mut visitor);
        visitor.into_values()
    }

    /// Returns the values in (node, left, right) order.
    pub fn pre_order(&self) -> Vec<i32> {
        let mut visitor = CollectingVisitor::new();
        self.traverse_pre_order(&mut visitor);
        visitor.into_values()
    }

    /// Traverses the tree left subtree first, then the node, then the right subtree.
    pub fn traverse_in_order<V: TreeVisitor>(&self, visitor: &mut V) {
        traverse_in_order_node(self.root(), None, visitor);
    }

    /// Traverses the tree visiting each node before its children, left first.
    pub fn traverse_pre_order<V: TreeVisitor>(&self, visitor: &mut V) {
        traverse_pre_order_node(self.root(), None, visitor);
    }

    /// Returns every `(parent, child)` value pair, ordered by the child's
    /// pre-order position.
    pub fn edges(&self) -> Vec<(i32, i32)> {
        let mut visitor = EdgeVisitor::with_capacity(self.len().saturating_sub(1));
        self.traverse_pre_order(&mut visitor);
        visitor.into_edges()
    }

    /// Discards every node.
    pub fn clear(&mut self) {
        self.root = None;
    }

    /// Returns `true` if the tree contains no nodes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Returns a reference to the root node, if any.
    #[inline]
    pub fn root(&self) -> Option<&TreeNode> {
        self.root.as_deref()
    }

    /// Returns the total number of nodes in the tree.
    pub fn len(&self) -> usize {
        self.root().map_or(0, TreeNode::len)
    }

    /// Returns the maximum depth of the tree (0 for empty tree).
    pub fn depth(&self) -> usize {
        self.root().map_or(0, TreeNode::depth)
    }
}

/// Recursively visits a subtree in order.
fn traverse_in_order_node<V: TreeVisitor>(
    node: Option<&TreeNode>,
    parent: Option<i32>,
    visitor: &mut V,
) {
    if let Some(n) = node {
        traverse_in_order_node(n.left(), Some(n.value()), visitor);
        visitor.visit(n, parent);
        traverse_in_order_node(n.right(), Some(n.value()), visitor);
    }
}

fn traverse_pre_order_node<V: TreeVisitor>(
    node: Option<&TreeNode>,
    parent: Option<i32>,
    visitor: &mut V,
) {
    if let Some(n) = node {
        visitor.visit(n, parent);
        traverse_pre_order_node(n.left(), Some(n.value()), visitor);
        traverse_pre_order_node(n.right(), Some(n.value()), visitor);
    }
}
