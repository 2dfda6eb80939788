//! Mock implementation with the value-level behavior of [`AvlTree`], but backed by a sorted vector
//!
//! The mock knows nothing about shape, so it can only check *which* values a tree holds. Shape
//! invariants are checked by [`AvlTree::validate`] instead.
//!
//! [`AvlTree`]: crate::AvlTree
//! [`AvlTree::validate`]: crate::AvlTree::validate

/// A mock, inefficient implementation of the [`AvlTree`](crate::AvlTree) interface
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Mock<T> {
    values: Vec<T>,
}

impl<T: Ord + Copy> Mock<T> {
    pub fn new() -> Self {
        Mock { values: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn contains(&self, value: &T) -> bool {
        self.values.binary_search(value).is_ok()
    }

    /// Inserts the value, returning `false` if it was already present
    pub fn insert(&mut self, value: T) -> bool {
        match self.values.binary_search(&value) {
            Ok(_) => false,
            Err(i) => {
                self.values.insert(i, value);
                true
            }
        }
    }

    /// Removes the value, returning `false` if it wasn't present
    pub fn remove(&mut self, value: &T) -> bool {
        match self.values.binary_search(value) {
            Ok(i) => {
                self.values.remove(i);
                true
            }
            Err(_) => false,
        }
    }

    /// Returns the values in order
    pub fn values(&self) -> &[T] {
        &self.values
    }
}
