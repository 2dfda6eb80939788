//! Operation log for front-ends built on [`AvlTree`](crate::AvlTree)
//!
//! The tree itself doesn't record anything. Callers that want to show what happened -- "Inserted
//! 5", "Performed leftRight rotation" -- push an [`Operation`] for each call they make, which is
//! what [`Session`](crate::Session) does.

use chrono::{DateTime, Utc};
use std::fmt::{self, Display, Formatter};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::Rotation;

/// What a single logged operation did
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum OperationKind<T> {
    Insertion(T),
    Deletion(T),
    Rotation(Rotation),
}

/// A logged operation, with the time it was recorded
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Operation<T> {
    pub kind: OperationKind<T>,
    pub timestamp: DateTime<Utc>,
}

impl<T> Operation<T> {
    /// Creates an operation timestamped with the current time
    pub fn now(kind: OperationKind<T>) -> Self {
        Operation {
            kind,
            timestamp: Utc::now(),
        }
    }

    /// Returns the value inserted or deleted, if this wasn't a rotation
    pub fn value(&self) -> Option<&T> {
        match &self.kind {
            OperationKind::Insertion(v) | OperationKind::Deletion(v) => Some(v),
            OperationKind::Rotation(_) => None,
        }
    }

    /// Returns the rotation performed, if this was one
    pub fn rotation(&self) -> Option<Rotation> {
        match self.kind {
            OperationKind::Rotation(r) => Some(r),
            _ => None,
        }
    }
}

impl<T: Display> Display for OperationKind<T> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            OperationKind::Insertion(v) => write!(f, "Inserted {v}"),
            OperationKind::Deletion(v) => write!(f, "Deleted {v}"),
            OperationKind::Rotation(r) => write!(f, "Performed {r} rotation"),
        }
    }
}

impl<T: Display> Display for Operation<T> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{} at {}", self.kind, self.timestamp.format("%H:%M:%S"))
    }
}

/// Ordered log of [`Operation`]s, oldest first
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct History<T> {
    ops: Vec<Operation<T>>,
}

impl<T> Default for History<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> History<T> {
    pub fn new() -> Self {
        History { ops: Vec::new() }
    }

    /// Appends an operation of the given kind, timestamped now
    pub fn record(&mut self, kind: OperationKind<T>) {
        self.push(Operation::now(kind));
    }

    pub fn push(&mut self, op: Operation<T>) {
        self.ops.push(op);
    }

    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Returns the most recent operation
    pub fn last(&self) -> Option<&Operation<T>> {
        self.ops.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Operation<T>> {
        self.ops.iter()
    }

    pub fn clear(&mut self) {
        self.ops.clear();
    }
}

impl<'a, T> IntoIterator for &'a History<T> {
    type Item = &'a Operation<T>;
    type IntoIter = std::slice::Iter<'a, Operation<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
