use crate::param::{Auto, Manual};
use crate::{AvlTree, Rotation};

type FuzzTree = AvlTree<i8, Auto>;
type ManualFuzzTree = AvlTree<u8, Manual>;

#[test]
fn auto_fuzz_1_remove_root_repeatedly() {
    let mut tree_0: FuzzTree = AvlTree::new();
    tree_0 = tree_0.insert(50);
    tree_0 = tree_0.insert(25);
    tree_0 = tree_0.insert(75);
    tree_0 = tree_0.insert(10);
    tree_0 = tree_0.insert(30);
    tree_0 = tree_0.insert(60);
    tree_0 = tree_0.insert(80);
    tree_0 = tree_0.insert(5);
    tree_0 = tree_0.insert(27);
    tree_0.validate();
    tree_0 = tree_0.remove(&50);
    tree_0.validate();
    tree_0 = tree_0.remove(&60);
    tree_0.validate();
    tree_0 = tree_0.remove(&75);
    tree_0.validate();
    tree_0 = tree_0.remove(&80);
    tree_0.validate();
    assert_eq!(tree_0.values(), [5, 10, 25, 27, 30]);
}

#[test]
fn auto_fuzz_2_duplicate_then_double_remove() {
    let mut tree_0: FuzzTree = AvlTree::new();
    tree_0 = tree_0.insert(-3);
    tree_0 = tree_0.insert(-3);
    tree_0 = tree_0.insert(7);
    tree_0 = tree_0.remove(&7);
    tree_0 = tree_0.remove(&7);
    tree_0 = tree_0.insert(0);
    tree_0.validate();
    assert_eq!(tree_0.len(), 2);
    assert_eq!(tree_0.values(), [-3, 0]);
}

#[test]
fn auto_fuzz_3_extreme_values() {
    let mut tree_0: FuzzTree = AvlTree::new();
    tree_0 = tree_0.insert(i8::MAX);
    tree_0 = tree_0.insert(i8::MIN);
    tree_0 = tree_0.insert(0);
    tree_0 = tree_0.insert(-1);
    tree_0 = tree_0.insert(-2);
    tree_0.validate();
    tree_0 = tree_0.remove(&i8::MAX);
    tree_0.validate();
    tree_0 = tree_0.remove(&i8::MIN);
    tree_0.validate();
    assert_eq!(tree_0.values(), [-2, -1, 0]);
    assert_eq!(tree_0.height(), 2);
}

#[test]
fn auto_fuzz_4_drain_everything() {
    let mut tree_0: FuzzTree = AvlTree::new();
    for v in (-40..40).step_by(3) {
        tree_0 = tree_0.insert(v);
    }
    tree_0.validate();
    for v in (-40..40).step_by(3).rev() {
        tree_0 = tree_0.remove(&v);
        tree_0.validate();
    }
    assert!(tree_0.is_empty());
    assert_eq!(tree_0.len(), 0);
}

#[test]
fn manual_fuzz_5_step_then_remove() {
    let mut tree_0: ManualFuzzTree = AvlTree::new();
    tree_0 = tree_0.insert(1);
    tree_0 = tree_0.insert(2);
    tree_0 = tree_0.insert(3);
    assert_eq!(tree_0.detect_imbalance(), Some(Rotation::Left));
    tree_0 = tree_0.apply_one_rotation();
    tree_0.validate();
    tree_0 = tree_0.remove(&2);
    tree_0.validate();
    assert_eq!(tree_0.root().map(|n| *n.value()), Some(3));
    assert_eq!(tree_0.values(), [1, 3]);
    assert_eq!(tree_0.detect_imbalance(), None);
}

#[test]
fn manual_fuzz_6_remove_leaves_imbalance() {
    let mut tree_0: ManualFuzzTree = AvlTree::new();
    tree_0 = tree_0.insert(20);
    tree_0 = tree_0.insert(10);
    tree_0 = tree_0.insert(30);
    tree_0 = tree_0.insert(25);
    tree_0 = tree_0.remove(&10);
    tree_0.validate();
    assert_eq!(tree_0.detect_imbalance(), Some(Rotation::RightLeft));
    tree_0 = tree_0.apply_one_rotation();
    tree_0.validate();
    assert_eq!(tree_0.root().map(|n| *n.value()), Some(25));
}
