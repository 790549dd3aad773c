//! Binary search tree engine for interactive visualization.
//!
//! - [`tree`]: BST insertion, membership search, traversals and random generation
//! - [`search`]: Four search disciplines producing visitation paths
//! - [`layout`]: Collision-free 3D coordinates for a tree snapshot
//! - [`session`]: Owner of the current tree and the timed search-path reveal

mod error;
pub mod input;
pub mod layout;
pub mod search;
pub mod session;
pub mod tree;

pub use error::{BstError, Result};
pub use input::{parse_search_value, parse_values};
pub use layout::{Interval, Layout, LayoutConfig};
pub use search::{SearchAlgorithm, SearchResult, SearchStrategy};
pub use session::{SearchStatus, Session, SessionConfig};
pub use tree::{BinarySearchTree, TreeNode, TreeVisitor};
