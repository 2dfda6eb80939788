//! Controller for an interactive front-end
//!
//! A [`Session`] holds the tree version that's currently on display, along with the log of how
//! it got there. Each command replaces the current version and appends to the log. Front-ends
//! that want to animate between versions can clone [`Session::tree`] before issuing a command;
//! the clone is unaffected by it.

use crate::history::{History, OperationKind};
use crate::param::{self, RebalanceConfig};
use crate::{AvlTree, NodeInfo, Rotation, StepError};

/// Current tree plus operation log
///
/// By default, sessions use the [`Manual`](param::Manual) configuration, so that rotations are
/// only made through [`rotate`](Self::rotate) and each one shows up in the log.
#[derive(Debug)]
pub struct Session<T, P = param::Manual> {
    tree: AvlTree<T, P>,
    history: History<T>,
}

impl<T: Clone, P> Clone for Session<T, P> {
    fn clone(&self) -> Self {
        Session {
            tree: self.tree.clone(),
            history: self.history.clone(),
        }
    }
}

impl<T, P> Default for Session<T, P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, P> Session<T, P> {
    /// Creates a session with an empty tree and an empty log
    pub fn new() -> Self {
        Session {
            tree: AvlTree::new(),
            history: History::new(),
        }
    }

    /// Returns the current version of the tree
    pub fn tree(&self) -> &AvlTree<T, P> {
        &self.tree
    }

    pub fn history(&self) -> &History<T> {
        &self.history
    }

    /// Empties both the tree and the log
    pub fn clear(&mut self) {
        self.tree = AvlTree::new();
        self.history.clear();
    }
}

impl<T, P> Session<T, P>
where
    T: Ord + Copy,
    P: RebalanceConfig,
{
    /// Inserts `value` into the current tree and logs it
    ///
    /// The insertion is logged even if `value` was already present.
    pub fn insert(&mut self, value: T) {
        self.tree = std::mem::take(&mut self.tree).insert(value);
        self.history.record(OperationKind::Insertion(value));
    }

    /// Removes `value` from the current tree and logs it
    ///
    /// The deletion is logged even if `value` wasn't present.
    pub fn remove(&mut self, value: T) {
        self.tree = std::mem::take(&mut self.tree).remove(&value);
        self.history.record(OperationKind::Deletion(value));
    }

    /// Returns whether [`rotate`](Self::rotate) currently has anything to do
    pub fn can_rotate(&self) -> bool {
        self.tree.needs_rotation()
    }

    /// Applies one rotation at the root and logs it, returning which rotation it was
    ///
    /// If the root doesn't need a rotation, nothing changes and nothing is logged.
    pub fn rotate(&mut self) -> Result<Rotation, StepError> {
        match std::mem::take(&mut self.tree).rotate_root() {
            Ok((tree, rotation)) => {
                self.tree = tree;
                self.history.record(OperationKind::Rotation(rotation));
                Ok(rotation)
            }
            Err((tree, e)) => {
                self.tree = tree;
                Err(e)
            }
        }
    }

    /// Returns the summary of the node holding `value`, as shown when hovering over it
    pub fn node_info(&self, value: &T) -> Option<NodeInfo<T>> {
        self.tree.node_info(value)
    }
}
