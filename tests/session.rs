//! Tests for `Session` and its operation log

mod common;

use common::{in_order, init_tracing};
use landis::param::Auto;
use landis::{NodeInfo, OperationKind, Rotation, Session, StepError};

#[test]
fn every_insert_and_remove_is_logged() {
    init_tracing();

    let mut session: Session<i32> = Session::new();
    session.insert(5);
    session.insert(3);
    session.insert(5);
    session.remove(3);
    session.remove(42);

    let kinds: Vec<_> = session.history().iter().map(|op| op.kind).collect();
    assert_eq!(
        kinds,
        [
            OperationKind::Insertion(5),
            OperationKind::Insertion(3),
            OperationKind::Insertion(5),
            OperationKind::Deletion(3),
            OperationKind::Deletion(42),
        ]
    );
    assert_eq!(in_order(session.tree()), [5]);
}

#[test]
fn rotations_are_logged_only_when_performed() {
    init_tracing();

    let mut session: Session<i32> = Session::new();
    for v in [30, 20, 10] {
        session.insert(v);
    }
    assert!(session.can_rotate());

    assert_eq!(session.rotate(), Ok(Rotation::Right));
    assert_eq!(session.history().len(), 4);
    assert_eq!(session.history().last().and_then(|op| op.rotation()), Some(Rotation::Right));

    assert!(!session.can_rotate());
    assert_eq!(session.rotate(), Err(StepError::Balanced { balance: 0 }));
    assert_eq!(session.history().len(), 4);
}

#[test]
fn rotating_an_empty_session() {
    let mut session: Session<i32> = Session::new();
    assert_eq!(session.rotate(), Err(StepError::Empty));
    assert!(session.history().is_empty());
}

#[test]
fn auto_sessions_never_need_rotation() {
    let mut session: Session<i32, Auto> = Session::new();
    for v in 1..=10 {
        session.insert(v);
        assert!(!session.can_rotate());
    }
    assert_eq!(session.tree().height(), 4);
    assert_eq!(session.history().len(), 10);
}

#[test]
fn clear_resets_tree_and_log() {
    let mut session: Session<i32> = Session::new();
    session.insert(1);
    session.insert(2);
    session.clear();

    assert!(session.tree().is_empty());
    assert!(session.history().is_empty());
}

#[test]
fn earlier_trees_survive_later_commands() {
    let mut session: Session<i32> = Session::new();
    for v in [1, 2, 3] {
        session.insert(v);
    }
    let before = session.tree().clone();

    session.rotate().unwrap();
    session.remove(1);

    assert_eq!(before.root().map(|n| *n.value()), Some(1));
    assert_eq!(in_order(&before), [1, 2, 3]);
    assert_eq!(session.tree().root().map(|n| *n.value()), Some(2));
    assert_eq!(in_order(session.tree()), [2, 3]);
}

#[test]
fn node_info_on_hover() {
    let mut session: Session<i32> = Session::new();
    for v in [10, 20, 30] {
        session.insert(v);
    }

    assert_eq!(
        session.node_info(&10),
        Some(NodeInfo {
            value: 10,
            height: 3,
            balance: -2,
        })
    );
    assert_eq!(
        session.node_info(&30),
        Some(NodeInfo {
            value: 30,
            height: 1,
            balance: 0,
        })
    );
    assert_eq!(session.node_info(&15), None);
}

#[test]
fn operation_messages() {
    let mut session: Session<i32> = Session::new();
    session.insert(7);
    session.insert(8);
    session.insert(9);
    session.rotate().unwrap();
    session.remove(7);

    let messages: Vec<String> = session.history().iter().map(|op| op.kind.to_string()).collect();
    assert_eq!(
        messages,
        [
            "Inserted 7",
            "Inserted 8",
            "Inserted 9",
            "Performed left rotation",
            "Deleted 7",
        ]
    );

    // full form carries a wall-clock time
    let full = session.history().last().unwrap().to_string();
    assert!(full.starts_with("Deleted 7 at "), "{full}");
    assert_eq!(full.len(), "Deleted 7 at 00:00:00".len());
}

#[test]
fn timestamps_are_in_order() {
    let mut session: Session<i32> = Session::new();
    for v in 0..20 {
        session.insert(v);
    }

    let stamps: Vec<_> = session.history().iter().map(|op| op.timestamp).collect();
    assert!(stamps.windows(2).all(|w| w[0] <= w[1]));
}
