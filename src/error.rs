//! Error types for the fallible parts of the API
//!
//! Most misuse of an [`AvlTree`](crate::AvlTree) panics. Stepping a tree that has nothing to
//! correct is the one case that can also be reported as a value, through
//! [`AvlTree::try_apply_one_rotation`](crate::AvlTree::try_apply_one_rotation) and
//! [`Session::rotate`](crate::Session::rotate).

use thiserror::Error;

/// Returned when a manual rotation step has nothing to correct
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum StepError {
    #[error("tree is empty")]
    Empty,

    #[error("root is balanced (balance factor {balance})")]
    Balanced { balance: isize },
}
