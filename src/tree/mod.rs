//! Wrapper module containing the tree itself

use crate::param::{self, RebalanceConfig};
use std::fmt::{self, Debug, Formatter};
use std::marker::PhantomData;

mod insert;
pub(crate) mod node;
mod remove;
pub(crate) mod rotate;
mod stepper;
#[cfg(test)]
mod tests;

pub use node::{Node, NodeInfo};
pub use rotate::Rotation;

use node::Link;

/// *Raison d'être of the crate*: a persistent AVL tree that can rebalance itself, or be
/// rebalanced one rotation at a time
///
/// Every mutation consumes the tree and returns the next version. Cloning an `AvlTree` is O(1)
/// (it's one reference count increment), and a clone is never changed by mutations of the
/// original or vice versa -- so keeping old versions around, e.g. to animate between them, is
/// just a matter of cloning before mutating:
///
/// ```
/// use landis::AvlTree;
///
/// let before: AvlTree<i64> = AvlTree::new().insert(10).insert(20);
/// let after = before.clone().insert(30);
///
/// // `after` rebalanced around 20; `before` still has 10 at the root
/// assert_eq!(after.root().map(|n| *n.value()), Some(20));
/// assert_eq!(before.root().map(|n| *n.value()), Some(10));
/// ```
///
/// Under the hood, nodes are shared between versions, and a mutation only copies the nodes on
/// the path it touches that some other version still refers to.
///
/// ## Parameterization
///
/// The type `P` picks whether mutations keep the tree balanced ([`Auto`], the default) or leave
/// that to the caller ([`Manual`]). Refer to the [`param`] module for more.
///
/// Values are meant to be small ordered scalars (integers, mostly), hence the `T: Copy` bound on
/// the mutating methods. There are no duplicate values: inserting a value that's already present
/// does nothing.
///
/// [`Auto`]: param::Auto
/// [`Manual`]: param::Manual
pub struct AvlTree<T, P = param::Auto> {
    root: Link<T>,
    len: usize,
    marker: PhantomData<P>,
}

impl<T, P> Clone for AvlTree<T, P> {
    fn clone(&self) -> Self {
        AvlTree {
            root: self.root.clone(),
            len: self.len,
            marker: PhantomData,
        }
    }
}

impl<T, P> Default for AvlTree<T, P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Debug, P> Debug for AvlTree<T, P> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.debug_struct("AvlTree")
            .field("len", &self.len)
            .field("root", &self.root.as_deref())
            .finish()
    }
}

impl<T, P> AvlTree<T, P> {
    /// Creates a new, empty `AvlTree`
    pub fn new() -> Self {
        AvlTree {
            root: None,
            len: 0,
            marker: PhantomData,
        }
    }

    /// Returns the number of values in the tree
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the tree contains no values
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Returns the height of the tree: zero when empty, one for a single value
    pub fn height(&self) -> usize {
        node::height(&self.root)
    }

    /// Returns the root node, for read-only traversal
    pub fn root(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }

    /// Returns the same tree, but with a different rebalancing configuration
    ///
    /// No nodes are copied; any current imbalance is kept as-is.
    pub fn into_config<Q: RebalanceConfig>(self) -> AvlTree<T, Q> {
        AvlTree {
            root: self.root,
            len: self.len,
            marker: PhantomData,
        }
    }

    /// Calls `f` on each node, parents before children and left subtrees before right ones
    #[cfg(feature = "serde")]
    pub(crate) fn walk_preorder<'a>(&'a self, mut f: impl FnMut(&'a Node<T>)) {
        let mut stack: Vec<&'a Node<T>> = self.root.as_deref().into_iter().collect();
        while let Some(node) = stack.pop() {
            f(node);
            stack.extend(node.right());
            stack.extend(node.left());
        }
    }
}

impl<T: Ord, P> AvlTree<T, P> {
    /// Returns `true` if `value` is in the tree
    pub fn contains(&self, value: &T) -> bool {
        self.get(value).is_some()
    }

    /// Returns the node holding `value`, if it's in the tree
    pub fn get(&self, value: &T) -> Option<&Node<T>> {
        self.root.as_deref().and_then(|root| root.find(value))
    }

    /// Returns the [`NodeInfo`] for the node holding `value`, if it's in the tree
    pub fn node_info(&self, value: &T) -> Option<NodeInfo<T>>
    where
        T: Copy,
    {
        self.get(value).map(Node::info)
    }
}

#[cfg(any(test, feature = "fuzz"))]
impl<T, P> AvlTree<T, P>
where
    T: Ord + Copy + Debug,
    P: RebalanceConfig,
{
    /// (*Test-only*) Returns all values in the tree, in order
    pub fn values(&self) -> Vec<T> {
        fn collect<T: Copy>(node: Option<&Node<T>>, out: &mut Vec<T>) {
            if let Some(n) = node {
                collect(n.left(), out);
                out.push(n.value);
                collect(n.right(), out);
            }
        }

        let mut out = Vec::with_capacity(self.len);
        collect(self.root(), &mut out);
        out
    }

    /// (*Test-only*) Validates the tree, panicking if any of its invariants don't hold
    ///
    /// The cached heights must be correct everywhere, the values must be in order, and the
    /// length must match. If the tree is configured to rebalance automatically, every node must
    /// also satisfy the AVL invariant.
    ///
    /// This method basically exists for tests so that we can quickly narrow down exactly when a
    /// failure is introduced in a particular test case.
    pub fn validate(&self) {
        let mut path = Vec::new();
        let count = Self::validate_node(self.root(), &mut path, None, None);
        valid_assert_eq!(path: count, self.len);
        valid_assert_eq!(path: self.root.is_none(), self.len == 0);
    }

    /// Called by `validate` to check a subtree, returning the number of nodes in it
    fn validate_node(
        node: Option<&Node<T>>,
        path: &mut Vec<node::Side>,
        lower: Option<T>,
        upper: Option<T>,
    ) -> usize {
        let node = match node {
            Some(n) => n,
            None => return 0,
        };

        if let Some(lo) = lower {
            valid_assert!(path: node.value > lo);
        }
        if let Some(hi) = upper {
            valid_assert!(path: node.value < hi);
        }

        path.push(node::Side::Left);
        let left_count = Self::validate_node(node.left(), path, lower, Some(node.value));
        path.pop();

        path.push(node::Side::Right);
        let right_count = Self::validate_node(node.right(), path, Some(node.value), upper);
        path.pop();

        let expected_height = 1 + node::height(&node.left).max(node::height(&node.right));
        valid_assert_eq!(path: node.height, expected_height);

        if P::MODE.is_auto() {
            valid_assert!(path: node.balance_factor().abs() <= 1);
        }

        left_count + 1 + right_count
    }
}
