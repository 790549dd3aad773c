//! Traversal disciplines for locating a value in a tree.
//!
//! Two strategies exploit the BST ordering and descend by comparison;
//! the other two ignore it and explore exhaustively. They differ in what
//! they record as the path and in what they count as a step.

use std::collections::VecDeque;

use crate::tree::TreeNode;

use super::SearchResult;

/// Strategy for visiting nodes in pursuit of a target value.
///
/// Implementations are read-only over the tree and always terminate.
pub trait SearchStrategy {
    /// Runs the search from `root` and reports the visitation path.
    fn execute(&self, root: Option<&TreeNode>, target: i32) -> SearchResult;
}

/// Comparison-guided descent written as self-referential calls.
///
/// Counts one step per descent call, including the call that lands on an
/// empty slot, so a miss costs `path.len() + 1` steps.
#[derive(Debug, Clone, Copy, Default)]
pub struct Recursive;

impl SearchStrategy for Recursive {
    fn execute(&self, root: Option<&TreeNode>, target: i32) -> SearchResult {
        fn descend(
            node: Option<&TreeNode>,
            target: i32,
            path: &mut Vec<i32>,
            steps: &mut usize,
        ) -> bool {
            *steps += 1;
            let Some(node) = node else {
                return false;
            };
            path.push(node.value());
            if node.value() == target {
                return true;
            }
            descend(node.child_toward(target), target, path, steps)
        }

        let mut path = Vec::new();
        let mut steps = 0;
        let found = descend(root, target, &mut path, &mut steps);
        SearchResult::new(found, path, steps)
    }
}

/// Comparison-guided descent with an explicit cursor.
///
/// Counts one step per inspected node; empty slots are not counted.
#[derive(Debug, Clone, Copy, Default)]
pub struct Iterative;

impl SearchStrategy for Iterative {
    fn execute(&self, root: Option<&TreeNode>, target: i32) -> SearchResult {
        let mut path = Vec::new();
        let mut current = root;

        while let Some(node) = current {
            path.push(node.value());
            if node.value() == target {
                let steps = path.len();
                return SearchResult::new(true, path, steps);
            }
            current = node.child_toward(target);
        }

        let steps = path.len();
        SearchResult::new(false, path, steps)
    }
}

/// Level-order traversal with a FIFO queue, left child enqueued first.
///
/// Counts one step per dequeue.
#[derive(Debug, Clone, Copy, Default)]
pub struct BreadthFirst;

impl SearchStrategy for BreadthFirst {
    fn execute(&self, root: Option<&TreeNode>, target: i32) -> SearchResult {
        let mut queue: VecDeque<&TreeNode> = root.into_iter().collect();
        let mut path = Vec::new();

        while let Some(node) = queue.pop_front() {
            path.push(node.value());
            if node.value() == target {
                let steps = path.len();
                return SearchResult::new(true, path, steps);
            }
            queue.extend(node.left());
            queue.extend(node.right());
        }

        let steps = path.len();
        SearchResult::new(false, path, steps)
    }
}

/// Pre-order traversal (node, left, right) stopping at the first match.
///
/// Uses an explicit stack so arbitrarily deep trees cannot overflow the
/// call stack; the visiting order is identical to the recursive form.
#[derive(Debug, Clone, Copy, Default)]
pub struct DepthFirst;

impl SearchStrategy for DepthFirst {
    fn execute(&self, root: Option<&TreeNode>, target: i32) -> SearchResult {
        let mut stack: Vec<&TreeNode> = root.into_iter().collect();
        let mut path = Vec::new();

        while let Some(node) = stack.pop() {
            path.push(node.value());
            if node.value() == target {
                let steps = path.len();
                return SearchResult::new(true, path, steps);
            }
            // Right first so the left subtree is popped (visited) first
            stack.extend(node.right());
            stack.extend(node.left());
        }

        let steps = path.len();
        SearchResult::new(false, path, steps)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::BinarySearchTree;

    fn sample() -> BinarySearchTree {
        BinarySearchTree::from_values([50, 30, 70, 20, 40])
    }

    #[test]
    fn recursive_hit_counts_path_length() {
        let tree = sample();
        let result = Recursive.execute(tree.root(), 40);
        assert!(result.found);
        assert_eq!(result.path, vec![50, 30, 40]);
        assert_eq!(result.steps, 3);
    }

    #[test]
    fn recursive_miss_counts_empty_slot() {
        let tree = sample();
        let result = Recursive.execute(tree.root(), 45);
        assert!(!result.found);
        assert_eq!(result.path, vec![50, 30, 40]);
        assert_eq!(result.steps, 4);
    }

    #[test]
    fn iterative_matches_recursive_path() {
        let tree = sample();
        for target in [20, 40, 45, 70, 99, 1] {
            let rec = Recursive.execute(tree.root(), target);
            let it = Iterative.execute(tree.root(), target);
            assert_eq!(rec.path, it.path);
            assert_eq!(rec.found, it.found);
            assert_eq!(it.steps, it.path.len());
        }
    }

    #[test]
    fn breadth_first_visits_level_by_level() {
        let tree = sample();
        let result = BreadthFirst.execute(tree.root(), 40);
        assert!(result.found);
        assert_eq!(result.path, vec![50, 30, 70, 20, 40]);
        assert_eq!(result.steps, 5);
    }

    #[test]
    fn depth_first_visits_pre_order() {
        let tree = sample();
        let result = DepthFirst.execute(tree.root(), 70);
        assert!(result.found);
        assert_eq!(result.path, vec![50, 30, 20, 40, 70]);
        assert_eq!(result.steps, 5);
    }

    #[test]
    fn exhaustive_strategies_visit_everything_on_miss() {
        let tree = sample();
        for result in [
            BreadthFirst.execute(tree.root(), 99),
            DepthFirst.execute(tree.root(), 99),
        ] {
            assert!(!result.found);
            assert_eq!(result.path.len(), 5);
            assert_eq!(result.steps, 5);
        }
    }

    #[test]
    fn empty_tree() {
        assert_eq!(Recursive.execute(None, 1), SearchResult::new(false, vec![], 1));
        assert_eq!(Iterative.execute(None, 1), SearchResult::new(false, vec![], 0));
        assert_eq!(BreadthFirst.execute(None, 1), SearchResult::new(false, vec![], 0));
        assert_eq!(DepthFirst.execute(None, 1), SearchResult::new(false, vec![], 0));
    }
}
