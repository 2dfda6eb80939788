//! Manual imbalance stepper
//!
//! The stepper only ever looks at the root. After each step the caller is expected to look at
//! the new tree (usually: redraw it) and step again if there's still something to correct.

use crate::error::StepError;
use crate::param::RebalanceConfig;
use crate::AvlTree;

use super::node::Node;
use super::rotate::Rotation;

impl<T> Node<T> {
    /// Returns the correction this node needs, judged only from its own balance factor and its
    /// heavy child's
    pub(crate) fn imbalance(&self) -> Option<Rotation> {
        Rotation::classify(self.balance_factor(), |heavy| self.child_leans_inward(heavy))
    }
}

impl<T, P> AvlTree<T, P>
where
    T: Ord + Copy,
    P: RebalanceConfig,
{
    /// Returns the rotation that the root currently needs, or `None` if the root is balanced
    /// (or the tree is empty)
    ///
    /// Only the root is considered. Nodes further down may still be out of balance when this
    /// returns `None`.
    ///
    /// ```
    /// use landis::{param::Manual, AvlTree, Rotation};
    ///
    /// let tree: AvlTree<i64, Manual> = AvlTree::new().insert(30).insert(20).insert(10);
    /// assert_eq!(tree.detect_imbalance(), Some(Rotation::Right));
    /// ```
    pub fn detect_imbalance(&self) -> Option<Rotation> {
        self.root.as_ref().and_then(|root| root.imbalance())
    }

    /// Shorthand for `self.detect_imbalance().is_some()`
    pub fn needs_rotation(&self) -> bool {
        self.detect_imbalance().is_some()
    }

    /// Applies the one correction that [`detect_imbalance`] reports for the root, returning the
    /// corrected tree
    ///
    /// Double rotations are performed in full by a single call.
    ///
    /// ## Panics
    ///
    /// This method panics if the root doesn't need a rotation. Use [`try_apply_one_rotation`] to
    /// get an error instead.
    ///
    /// [`detect_imbalance`]: Self::detect_imbalance
    /// [`try_apply_one_rotation`]: Self::try_apply_one_rotation
    #[must_use = "`apply_one_rotation` returns the new version of the tree"]
    pub fn apply_one_rotation(self) -> Self {
        match self.rotate_root() {
            Ok((tree, _)) => tree,
            Err((_, e)) => panic!("cannot apply rotation: {e}"),
        }
    }

    /// Fallible version of [`apply_one_rotation`], also returning the rotation that was performed
    ///
    /// The original tree is left unchanged, so the nodes the rotation moves are always copied.
    ///
    /// [`apply_one_rotation`]: Self::apply_one_rotation
    pub fn try_apply_one_rotation(&self) -> Result<(Self, Rotation), StepError> {
        self.clone().rotate_root().map_err(|(_, e)| e)
    }

    /// Consuming body of the stepper. On failure, the tree is handed back untouched.
    pub(crate) fn rotate_root(mut self) -> Result<(Self, Rotation), (Self, StepError)> {
        let found = self.root.as_ref().map(|r| (r.imbalance(), r.balance_factor()));
        let rotation = match found {
            None => return Err((self, StepError::Empty)),
            Some((None, balance)) => return Err((self, StepError::Balanced { balance })),
            Some((Some(r), _)) => r,
        };

        debug_log!(rotation = rotation.name(), "applying one rotation at the root");

        self.root = self.root.take().map(|root| rotation.apply(root));
        Ok((self, rotation))
    }
}
