//! Session controller: the single owner of the current tree and of the
//! timed reveal of a search path.
//!
//! The session is a state machine over *idle* and *searching*. A search
//! computes its full [`SearchResult`] up front, then discloses `path` one
//! value per `step_delay`. Once everything is revealed the session goes
//! idle, records the result, and clears the revealed path after
//! `clear_delay`.
//!
//! Time only moves through [`Session::tick`]. At most one delayed event is
//! outstanding at any moment, and every new search and every tree mutation
//! cancels it before doing anything else, so a stale reveal or trailing
//! clear can never touch a newer search.
//!
//! ```
//! use std::time::Duration;
//! use bst_core::{SearchAlgorithm, Session};
//!
//! let mut session = Session::default();
//! session.build_tree_from_values([50, 30, 70, 20, 40]);
//! assert!(session.search(40, SearchAlgorithm::Recursive));
//!
//! session.tick(Duration::from_millis(800));
//! assert_eq!(session.search_path(), &[50]);
//! ```

mod scheduler;

use std::time::Duration;

use rand::Rng;
use tracing::{debug, trace, warn};

use crate::error::Result;
use crate::search::{SearchAlgorithm, SearchResult};
use crate::tree::BinarySearchTree;

pub use scheduler::{Scheduler, TaskHandle};

/// Timing and generation constants for a [`Session`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    /// Delay before each additional path value is revealed.
    pub step_delay: Duration,
    /// Delay between the end of a reveal and clearing the path.
    pub clear_delay: Duration,
    /// Number of values drawn for a random tree.
    pub random_count: usize,
    /// Smallest value a random tree may hold.
    pub value_min: i32,
    /// Largest value a random tree may hold.
    pub value_max: i32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            step_delay: Duration::from_millis(800),
            clear_delay: Duration::from_millis(3000),
            random_count: 22,
            value_min: 1,
            value_max: 99,
        }
    }
}

/// Delayed continuations driven by the session clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SessionEvent {
    /// Reveal the next value of the active path.
    Reveal,
    /// Drop the revealed path after a finished search.
    ClearPath,
}

/// Coarse state for status displays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchStatus {
    /// No search has run since the last reset.
    Idle,
    /// A path is being revealed.
    Searching {
        /// Values revealed so far
        revealed: usize,
        /// Length of the full path
        total: usize,
    },
    /// The last search completed.
    Finished {
        /// Whether the target was found
        found: bool,
        /// Step count reported by the algorithm
        steps: usize,
    },
}

/// Owns all observable state; every mutation goes through its methods.
#[derive(Debug)]
pub struct Session {
    config: SessionConfig,
    tree: BinarySearchTree,
    search_path: Vec<i32>,
    is_searching: bool,
    last_result: Option<SearchResult>,
    /// Result whose path is currently being revealed.
    active: Option<SearchResult>,
    scheduler: Scheduler<SessionEvent>,
    pending: Option<TaskHandle>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}

impl Session {
    /// Creates an idle session with an empty tree.
    pub fn new(config: SessionConfig) -> Self {
        Self {
            config,
            tree: BinarySearchTree::new(),
            search_path: Vec::new(),
            is_searching: false,
            last_result: None,
            active: None,
            scheduler: Scheduler::new(),
            pending: None,
        }
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// The current tree snapshot.
    pub fn tree(&self) -> &BinarySearchTree {
        &self.tree
    }

    /// The revealed prefix of the active or most recent search path.
    pub fn search_path(&self) -> &[i32] {
        &self.search_path
    }

    pub fn is_searching(&self) -> bool {
        self.is_searching
    }

    /// Result of the most recently completed search.
    pub fn last_result(&self) -> Option<&SearchResult> {
        self.last_result.as_ref()
    }

    /// Returns `true` if `value` is part of the revealed path.
    pub fn is_active(&self, value: i32) -> bool {
        self.search_path.contains(&value)
    }

    /// Returns `true` if `a` and `b` are adjacent in the revealed path.
    pub fn is_edge_on_path(&self, a: i32, b: i32) -> bool {
        let index = |v| self.search_path.iter().position(|&p| p == v);
        match (index(a), index(b)) {
            (Some(i), Some(j)) => i.abs_diff(j) == 1,
            _ => false,
        }
    }

    pub fn status(&self) -> SearchStatus {
        if self.is_searching {
            let total = self.active.as_ref().map_or(0, |r| r.path.len());
            return SearchStatus::Searching {
                revealed: self.search_path.len(),
                total,
            };
        }
        match &self.last_result {
            Some(result) => SearchStatus::Finished {
                found: result.found,
                steps: result.steps,
            },
            None => SearchStatus::Idle,
        }
    }

    /// Replaces the tree with one built from `values` in order.
    pub fn build_tree_from_values<I>(&mut self, values: I)
    where
        I: IntoIterator<Item = i32>,
    {
        let tree = BinarySearchTree::from_values(values);
        self.replace_tree(tree);
    }

    /// Replaces the tree with a random one per the session config.
    pub fn generate_random_tree(&mut self) -> Result<()> {
        self.generate_random_tree_with(&mut rand::thread_rng())
    }

    /// Replaces the tree with a random one drawn from `rng`.
    ///
    /// On error the current tree and search state are left untouched.
    pub fn generate_random_tree_with<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<()> {
        let tree = BinarySearchTree::generate_random_with(
            rng,
            self.config.random_count,
            self.config.value_min,
            self.config.value_max,
        )?;
        self.replace_tree(tree);
        Ok(())
    }

    /// Empties the tree and resets all search state.
    pub fn clear(&mut self) {
        self.replace_tree(BinarySearchTree::new());
    }

    /// Resets the search state without touching the tree.
    pub fn reset_search(&mut self) {
        self.cancel_pending();
        self.search_path.clear();
        self.is_searching = false;
        self.last_result = None;
        self.active = None;
        debug!("search state reset");
    }

    /// Starts a search for `value`.
    ///
    /// Ignored (returning `false`) when the tree is empty or a reveal is
    /// already running. Otherwise the full result is computed immediately
    /// and its path is revealed by subsequent [`tick`](Self::tick)s.
    pub fn search(&mut self, value: i32, algorithm: SearchAlgorithm) -> bool {
        if self.tree.is_empty() {
            warn!(value, %algorithm, "search ignored: no tree");
            return false;
        }
        if self.is_searching {
            warn!(value, %algorithm, "search ignored: search in progress");
            return false;
        }

        // A trailing clear from the previous search may still be queued
        self.cancel_pending();

        let result = algorithm.run(&self.tree, value);
        debug!(
            value,
            %algorithm,
            found = result.found,
            steps = result.steps,
            path_len = result.path.len(),
            "search started"
        );

        self.search_path.clear();
        self.is_searching = true;
        self.active = Some(result);
        self.schedule_next();
        true
    }

    /// Starts a search using a textual algorithm identifier.
    ///
    /// Unknown identifiers are an error; all other rejections behave like
    /// [`search`](Self::search).
    pub fn search_by_id(&mut self, value: i32, algorithm: &str) -> Result<bool> {
        let algorithm: SearchAlgorithm = algorithm.parse()?;
        Ok(self.search(value, algorithm))
    }

    /// Advances the session clock by `elapsed`, firing every delayed event
    /// that falls due in order.
    pub fn tick(&mut self, elapsed: Duration) {
        let deadline = self.scheduler.now() + elapsed;
        while let Some(event) = self.scheduler.pop_due(deadline) {
            self.pending = None;
            self.handle(event);
        }
        self.scheduler.advance_to(deadline);
    }

    fn handle(&mut self, event: SessionEvent) {
        match event {
            SessionEvent::Reveal => self.reveal_next(),
            SessionEvent::ClearPath => {
                trace!("revealed path cleared");
                self.search_path.clear();
            }
        }
    }

    fn reveal_next(&mut self) {
        let Some(result) = self.active.as_ref() else {
            return;
        };
        if let Some(&value) = result.path.get(self.search_path.len()) {
            self.search_path.push(value);
            trace!(value, revealed = self.search_path.len(), "revealed step");
        }
        self.schedule_next();
    }

    /// Queues the next reveal, or finishes the search once the whole path
    /// is visible.
    fn schedule_next(&mut self) {
        let remaining = self
            .active
            .as_ref()
            .map_or(0, |r| r.path.len() - self.search_path.len());

        if remaining > 0 {
            let handle = self
                .scheduler
                .schedule(self.config.step_delay, SessionEvent::Reveal);
            self.pending = Some(handle);
            return;
        }

        self.is_searching = false;
        self.last_result = self.active.take();
        if let Some(result) = &self.last_result {
            debug!(found = result.found, steps = result.steps, "search finished");
        }
        let handle = self
            .scheduler
            .schedule(self.config.clear_delay, SessionEvent::ClearPath);
        self.pending = Some(handle);
    }

    fn replace_tree(&mut self, tree: BinarySearchTree) {
        self.cancel_pending();
        debug!(nodes = tree.len(), depth = tree.depth(), "tree replaced");
        self.tree = tree;
        self.search_path.clear();
        self.is_searching = false;
        self.last_result = None;
        self.active = None;
    }

    fn cancel_pending(&mut self) {
        if let Some(handle) = self.pending.take() {
            if self.scheduler.cancel(handle) {
                trace!(?handle, "cancelled pending session event");
            }
        }
    }
}
