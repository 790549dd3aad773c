//! Search strategies over a tree snapshot.
//!
//! Each discipline produces a [`SearchResult`]: whether the target was
//! found, the ordered values visited, and a step count whose meaning
//! depends on the discipline (see the individual strategy types).
//!
//! # Architecture
//!
//! - [`SearchStrategy`]: Trait implemented by each traversal discipline
//! - [`SearchAlgorithm`]: Identifier enum that parses from and dispatches to a strategy
//! - [`execute`]: String-keyed dispatch point used by outer surfaces

mod strategy;

use std::fmt;
use std::str::FromStr;

use crate::error::{BstError, Result};
use crate::tree::BinarySearchTree;

pub use strategy::{BreadthFirst, DepthFirst, Iterative, Recursive, SearchStrategy};

/// Outcome of one search. Immutable once produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    /// `true` iff a node holding the target was visited.
    pub found: bool,
    /// Visited values, in visitation order. No value appears twice.
    pub path: Vec<i32>,
    /// Visitation attempts; may exceed `path.len()` for [`Recursive`].
    pub steps: usize,
}

impl SearchResult {
    /// Creates a result from its parts.
    pub fn new(found: bool, path: Vec<i32>, steps: usize) -> Self {
        Self { found, path, steps }
    }
}

/// The four supported traversal disciplines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SearchAlgorithm {
    /// BST-guided descent by self-referential calls.
    #[default]
    Recursive,
    /// BST-guided descent with an explicit cursor.
    Iterative,
    /// Level-order exhaustive traversal.
    BreadthFirst,
    /// Pre-order exhaustive traversal.
    DepthFirst,
}

impl SearchAlgorithm {
    /// Every algorithm, in menu order.
    pub const ALL: [SearchAlgorithm; 4] = [
        SearchAlgorithm::Recursive,
        SearchAlgorithm::Iterative,
        SearchAlgorithm::BreadthFirst,
        SearchAlgorithm::DepthFirst,
    ];

    /// Wire identifier, as accepted by [`FromStr`].
    pub fn id(self) -> &'static str {
        match self {
            SearchAlgorithm::Recursive => "recursive",
            SearchAlgorithm::Iterative => "iterative",
            SearchAlgorithm::BreadthFirst => "breadthFirst",
            SearchAlgorithm::DepthFirst => "depthFirst",
        }
    }

    /// Human-readable name for status displays.
    pub fn label(self) -> &'static str {
        match self {
            SearchAlgorithm::Recursive => "Recursive Search",
            SearchAlgorithm::Iterative => "Iterative Search",
            SearchAlgorithm::BreadthFirst => "Breadth-First Search",
            SearchAlgorithm::DepthFirst => "Depth-First Search",
        }
    }

    /// The following algorithm in [`ALL`](Self::ALL), wrapping around.
    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|&a| a == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    /// Runs this algorithm against `tree`.
    pub fn run(self, tree: &BinarySearchTree, target: i32) -> SearchResult {
        let root = tree.root();
        match self {
            SearchAlgorithm::Recursive => Recursive.execute(root, target),
            SearchAlgorithm::Iterative => Iterative.execute(root, target),
            SearchAlgorithm::BreadthFirst => BreadthFirst.execute(root, target),
            SearchAlgorithm::DepthFirst => DepthFirst.execute(root, target),
        }
    }
}

impl fmt::Display for SearchAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for SearchAlgorithm {
    type Err = BstError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|a| a.id() == s)
            .ok_or_else(|| BstError::UnknownAlgorithm(s.to_string()))
    }
}

/// Dispatches a search by algorithm identifier.
///
/// Unknown identifiers fail with [`BstError::UnknownAlgorithm`]; there is
/// no fallback discipline.
pub fn execute(algorithm: &str, tree: &BinarySearchTree, target: i32) -> Result<SearchResult> {
    let algorithm: SearchAlgorithm = algorithm.parse()?;
    Ok(algorithm.run(tree, target))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_round_trips_ids() {
        for algorithm in SearchAlgorithm::ALL {
            assert_eq!(algorithm.id().parse::<SearchAlgorithm>(), Ok(algorithm));
            assert_eq!(algorithm.to_string(), algorithm.id());
        }
    }

    #[test]
    fn parse_rejects_unknown_ids() {
        assert_eq!(
            "binary".parse::<SearchAlgorithm>(),
            Err(BstError::UnknownAlgorithm("binary".to_string()))
        );
        // Identifiers are case sensitive
        assert!("BreadthFirst".parse::<SearchAlgorithm>().is_err());
    }

    #[test]
    fn next_cycles_through_all() {
        let mut algorithm = SearchAlgorithm::Recursive;
        for expected in [
            SearchAlgorithm::Iterative,
            SearchAlgorithm::BreadthFirst,
            SearchAlgorithm::DepthFirst,
            SearchAlgorithm::Recursive,
        ] {
            algorithm = algorithm.next();
            assert_eq!(algorithm, expected);
        }
    }

    #[test]
    fn execute_dispatches_by_id() {
        let tree = BinarySearchTree::from_values([50, 30, 70, 20, 40]);
        let result = execute("recursive", &tree, 40).unwrap();
        assert_eq!(result, SearchResult::new(true, vec![50, 30, 40], 3));

        let chain = BinarySearchTree::from_values([10, 20, 30]);
        let result = execute("breadthFirst", &chain, 30).unwrap();
        assert_eq!(result.path, vec![10, 20, 30]);
        assert!(result.found);
    }

    #[test]
    fn execute_unknown_id_fails() {
        let tree = BinarySearchTree::from_values([1]);
        assert!(matches!(
            execute("quantum", &tree, 1),
            Err(BstError::UnknownAlgorithm(id)) if id == "quantum"
        ));
    }
}
