//! Parameterization for [`AvlTree`]
//!
//! There are only two parameterization options for an [`AvlTree`]: automatic rebalancing, or
//! manual rotation stepping. With [`Auto`], every insertion and removal restores the AVL
//! invariant before returning. With [`Manual`], mutations leave any imbalance in place, so that
//! the caller can inspect it with [`detect_imbalance`] and correct it one rotation at a time with
//! [`apply_one_rotation`] -- typically to show each rotation to a human.
//!
//! ```
//! use landis::param::Manual;
//! use landis::AvlTree;
//!
//! type StepTree = AvlTree<i64, Manual>;
//! ```
//!
//! The default configuration is [`Auto`]. Both configuration types implement
//! [`RebalanceConfig`] -- the trait can't be implemented outside of this crate, but it's there to
//! help with errors and documentation.
//!
//! The pipelines themselves take the runtime equivalent, [`Rebalance`], which is what
//! [`RebalanceConfig::MODE`] provides.
//!
//! [`AvlTree`]: crate::AvlTree
//! [`detect_imbalance`]: crate::AvlTree::detect_imbalance
//! [`apply_one_rotation`]: crate::AvlTree::apply_one_rotation

use std::marker::PhantomData;

/// Marker type to rebalance after every mutation of the [`AvlTree`](crate::AvlTree) (*default*)
#[derive(Debug)]
pub struct Auto(PhantomData<()>);

/// Marker type to leave imbalances for the caller to correct with the manual stepper
#[derive(Debug)]
pub struct Manual(PhantomData<()>);

/// Trait that [`AvlTree`] parameterizations are required to implement
///
/// This trait is made public to help with error messages and for your curiosity. It cannot be
/// implemented outside of this crate.
///
/// [`AvlTree`]: crate::AvlTree
pub trait RebalanceConfig: sealed::YouCantImplementThis {
    /// Whether mutations rebalance on their way back up to the root
    const MODE: Rebalance;
}

/// Runtime form of the rebalancing configuration, as accepted by the mutation pipelines
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Rebalance {
    /// Correct every imbalance on the path from the mutated node to the root
    Auto,
    /// Leave imbalances in place
    Manual,
}

impl Rebalance {
    /// Returns `true` for [`Rebalance::Auto`]
    pub fn is_auto(self) -> bool {
        matches!(self, Rebalance::Auto)
    }
}

pub(crate) mod sealed {
    /// It's a supertrait you (the user of this crate) can't implement
    pub trait YouCantImplementThis {}

    impl YouCantImplementThis for super::Auto {}
    impl YouCantImplementThis for super::Manual {}
}

impl RebalanceConfig for Auto {
    const MODE: Rebalance = Rebalance::Auto;
}

impl RebalanceConfig for Manual {
    const MODE: Rebalance = Rebalance::Manual;
}
