//! Parent-aware visitors for tree traversal.
//!
//! Every traversal hands the visitor the node together with the value of
//! the node it hangs from, so edge-shaped consumers (drawing, layout
//! checks) need no second pass to recover the structure.

use super::node::TreeNode;

/// Receives nodes in traversal order.
pub trait TreeVisitor {
    /// Called once per node. `parent` is `None` only for the root.
    fn visit(&mut self, node: &TreeNode, parent: Option<i32>);
}

/// Collects visited values.
#[derive(Debug, Default)]
pub struct CollectingVisitor {
    collected: Vec<i32>,
}

impl CollectingVisitor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn into_values(self) -> Vec<i32> {
        self.collected
    }
}

impl TreeVisitor for CollectingVisitor {
    fn visit(&mut self, node: &TreeNode, _parent: Option<i32>) {
        self.collected.push(node.value());
    }
}

/// Collects a `(parent, child)` pair for every non-root node.
#[derive(Debug, Default)]
pub struct EdgeVisitor {
    edges: Vec<(i32, i32)>,
}

impl EdgeVisitor {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            edges: Vec::with_capacity(capacity),
        }
    }

    pub fn into_edges(self) -> Vec<(i32, i32)> {
        self.edges
    }
}

impl TreeVisitor for EdgeVisitor {
    fn visit(&mut self, node: &TreeNode, parent: Option<i32>) {
        if let Some(parent) = parent {
            self.edges.push((parent, node.value()));
        }
    }
}

/// Forwards each node and its parent value to a closure.
pub struct FnVisitor<F>
where
    F: FnMut(&TreeNode, Option<i32>),
{
    func: F,
}

impl<F> FnVisitor<F>
where
    F: FnMut(&TreeNode, Option<i32>),
{
    pub fn new(func: F) -> Self {
        Self { func }
    }
}

impl<F> TreeVisitor for FnVisitor<F>
where
    F: FnMut(&TreeNode, Option<i32>),
{
    fn visit(&mut self, node: &TreeNode, parent: Option<i32>) {
        (self.func)(node, parent);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collecting_visitor_ignores_parent() {
        let mut visitor = CollectingVisitor::new();
        visitor.visit(&TreeNode::new(3), None);
        visitor.visit(&TreeNode::new(1), Some(3));

        assert_eq!(visitor.into_values(), vec![3, 1]);
    }

    #[test]
    fn edge_visitor_skips_root() {
        let mut visitor = EdgeVisitor::default();
        visitor.visit(&TreeNode::new(50), None);
        visitor.visit(&TreeNode::new(30), Some(50));
        visitor.visit(&TreeNode::new(20), Some(30));

        assert_eq!(visitor.into_edges(), vec![(50, 30), (30, 20)]);
    }

    #[test]
    fn fn_visitor_receives_parent() {
        let mut seen = Vec::new();
        {
            let mut visitor = FnVisitor::new(|node: &TreeNode, parent| {
                seen.push((parent, node.value()));
            });
            visitor.visit(&TreeNode::new(4), None);
            visitor.visit(&TreeNode::new(5), Some(4));
        }
        assert_eq!(seen, vec![(None, 4), (Some(4), 5)]);
    }
}
