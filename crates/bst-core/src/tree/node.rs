//! Binary search tree node implementation.

use std::cmp::Ordering;

/// A node in the binary search tree.
///
/// Each node owns its children exclusively. Values in the `left` subtree
/// are strictly smaller than `value`; values in the `right` subtree are
/// strictly larger. Nodes are only ever mutated to attach a child.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeNode {
    /// The value stored at this node.
    value: i32,

    /// Subtree holding values SMALLER than `value`.
    left: Option<Box<TreeNode>>,

    /// Subtree holding values LARGER than `value`.
    right: Option<Box<TreeNode>>,
}

impl TreeNode {
    /// Creates a new leaf node.
    pub fn new(value: i32) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }

    /// Returns the value stored at this node.
    #[inline]
    pub fn value(&self) -> i32 {
        self.value
    }

    /// Returns a reference to the left child subtree.
    #[inline]
    pub fn left(&self) -> Option<&TreeNode> {
        self.left.as_deref()
    }

    /// Returns a reference to the right child subtree.
    #[inline]
    pub fn right(&self) -> Option<&TreeNode> {
        self.right.as_deref()
    }

    /// Returns the child a BST-guided descent toward `target` takes next.
    ///
    /// `None` both when `target` equals this node's value and when the
    /// chosen slot is empty; callers compare before descending.
    #[inline]
    pub fn child_toward(&self, target: i32) -> Option<&TreeNode> {
        match target.cmp(&self.value) {
            Ordering::Less => self.left(),
            Ordering::Greater => self.right(),
            Ordering::Equal => None,
        }
    }

    /// Inserts `value` into the subtree rooted at `slot`.
    ///
    /// Walks down by comparison until an empty child slot is found and
    /// places a new leaf there. Returns `false` (and leaves the subtree
    /// untouched) if the value is already present.
    pub(crate) fn insert_into(mut slot: &mut Option<Box<TreeNode>>, value: i32) -> bool {
        while let Some(node) = slot {
            slot = match value.cmp(&node.value) {
                Ordering::Less => &mut node.left,
                Ordering::Greater => &mut node.right,
                Ordering::Equal => return false,
            };
        }
        *slot = Some(Box::new(TreeNode::new(value)));
        true
    }

    /// Checks if this node has any children.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Returns the number of nodes in this subtree.
    pub fn len(&self) -> usize {
        1 + self.left().map_or(0, TreeNode::len) + self.right().map_or(0, TreeNode::len)
    }

    /// Returns the depth of this subtree (1 for a leaf node).
    pub fn depth(&self) -> usize {
        let left_depth = self.left().map_or(0, TreeNode::depth);
        let right_depth = self.right().map_or(0, TreeNode::depth);
        1 + left_depth.max(right_depth)
    }
}
