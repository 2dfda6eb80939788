//! Shared helpers for the integration tests
//!
//! # Usage
//!
//! ```rust,ignore
//! mod common;
//!
//! #[test]
//! fn my_test() {
//!     common::init_tracing();
//!     // ...
//! }
//! ```
//!
//! Library events are only emitted with the `tracing` feature enabled. Filter them with
//! `RUST_LOG`, e.g. `RUST_LOG=landis=trace`.

#![allow(dead_code)]

use std::sync::Once;

use landis::{AvlTree, Node};
use tracing::Level;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

static INIT: Once = Once::new();

/// Initialize the tracing subscriber. Safe to call more than once.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(format!("{}", Level::WARN)));

        // `try_init` so that a subscriber set up elsewhere doesn't make us panic
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .with_span_events(FmtSpan::CLOSE)
            .with_test_writer()
            .compact()
            .finish()
            .try_init();
    });
}

/// Returns the values of the tree, in order
pub fn in_order<T: Copy, P>(tree: &AvlTree<T, P>) -> Vec<T> {
    fn walk<T: Copy>(node: Option<&Node<T>>, out: &mut Vec<T>) {
        if let Some(n) = node {
            walk(n.left(), out);
            out.push(*n.value());
            walk(n.right(), out);
        }
    }

    let mut out = Vec::with_capacity(tree.len());
    walk(tree.root(), &mut out);
    out
}

/// Returns the values of the tree, parents before children
pub fn pre_order<T: Copy, P>(tree: &AvlTree<T, P>) -> Vec<T> {
    fn walk<T: Copy>(node: Option<&Node<T>>, out: &mut Vec<T>) {
        if let Some(n) = node {
            out.push(*n.value());
            walk(n.left(), out);
            walk(n.right(), out);
        }
    }

    let mut out = Vec::with_capacity(tree.len());
    walk(tree.root(), &mut out);
    out
}

/// Checks that every cached height is correct, returning the actual height of the tree
pub fn check_heights<T, P>(tree: &AvlTree<T, P>) -> Result<usize, String> {
    fn walk<T>(node: Option<&Node<T>>) -> Result<usize, String> {
        let Some(n) = node else { return Ok(0) };
        let expected = 1 + walk(n.left())?.max(walk(n.right())?);
        if n.height() != expected {
            return Err(format!("cached height {} != actual {expected}", n.height()));
        }
        Ok(expected)
    }

    walk(tree.root())
}

/// Returns whether every node has a balance factor in `-1..=1`
pub fn is_avl<T, P>(tree: &AvlTree<T, P>) -> bool {
    fn walk<T>(node: Option<&Node<T>>) -> bool {
        match node {
            None => true,
            Some(n) => n.balance_factor().abs() <= 1 && walk(n.left()) && walk(n.right()),
        }
    }

    walk(tree.root())
}

/// Returns whether the in-order values are strictly increasing
pub fn is_search_tree<T: Copy + Ord, P>(tree: &AvlTree<T, P>) -> bool {
    in_order(tree).windows(2).all(|w| w[0] < w[1])
}
