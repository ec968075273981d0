use skirmish_behaviors::surgery::{
    detach_at, insert_at, move_node, node_at, remove_at, SurgeryError,
};
use skirmish_behaviors::{ActionRef, ConditionRef, NodeDef};

fn leaf(ref_: ActionRef) -> NodeDef {
    NodeDef::Action { ref_, label: None }
}

fn sample_root() -> NodeDef {
    NodeDef::Selector {
        name: "Root".to_string(),
        children: vec![
            NodeDef::Sequence {
                name: "Guarded".to_string(),
                children: vec![
                    NodeDef::Condition {
                        ref_: ConditionRef::Danger,
                        label: None,
                    },
                    leaf(ActionRef::Evade),
                ],
            },
            leaf(ActionRef::Patrol),
        ],
    }
}

#[test]
fn paths_address_nodes_from_the_root() {
    let root = sample_root();
    assert_eq!(node_at(&root, &[]).unwrap(), &root);
    assert!(matches!(
        node_at(&root, &[0, 1]).unwrap(),
        NodeDef::Action {
            ref_: ActionRef::Evade,
            ..
        }
    ));
    assert_eq!(
        node_at(&root, &[1, 0]),
        Err(SurgeryError::NotComposite)
    );
    assert_eq!(
        node_at(&root, &[5]),
        Err(SurgeryError::OutOfBounds { index: 5, len: 2 })
    );
}

#[test]
fn insert_appends_and_rejects_leaf_parents() {
    let mut root = sample_root();
    insert_at(&mut root, &[], 2, leaf(ActionRef::Strafe)).unwrap();
    assert_eq!(root.children().len(), 3);
    assert_eq!(
        insert_at(&mut root, &[2], 0, leaf(ActionRef::Charge)),
        Err(SurgeryError::NotComposite)
    );
    assert_eq!(
        insert_at(&mut root, &[], 9, leaf(ActionRef::Charge)),
        Err(SurgeryError::OutOfBounds { index: 9, len: 3 })
    );
}

#[test]
fn the_root_cannot_be_detached() {
    let mut root = sample_root();
    assert_eq!(detach_at(&mut root, &[]), Err(SurgeryError::DetachRoot));
}

#[test]
fn remove_drops_a_subtree() {
    let mut root = sample_root();
    remove_at(&mut root, &[0]).unwrap();
    assert_eq!(root.children().len(), 1);
    assert!(matches!(
        root.children()[0],
        NodeDef::Action {
            ref_: ActionRef::Patrol,
            ..
        }
    ));
}

#[test]
fn a_node_cannot_be_moved_into_its_own_subtree() {
    let mut root = sample_root();
    assert_eq!(
        move_node(&mut root, &[0], &[0], 0),
        Err(SurgeryError::MoveIntoSelf)
    );
}

#[test]
fn moving_left_within_one_parent_lands_where_aimed() {
    let mut root = NodeDef::Selector {
        name: "Root".to_string(),
        children: vec![
            leaf(ActionRef::Patrol),
            leaf(ActionRef::Strafe),
            leaf(ActionRef::Charge),
        ],
    };
    // Move Patrol to sit after Charge (as addressed before the detach).
    move_node(&mut root, &[0], &[], 3).unwrap();
    let kinds: Vec<&NodeDef> = root.children().iter().collect();
    assert!(matches!(kinds[0], NodeDef::Action { ref_: ActionRef::Strafe, .. }));
    assert!(matches!(kinds[1], NodeDef::Action { ref_: ActionRef::Charge, .. }));
    assert!(matches!(kinds[2], NodeDef::Action { ref_: ActionRef::Patrol, .. }));
}

#[test]
fn moving_across_parents_reaims_shifted_paths() {
    // Root: [A(Patrol), Seq "Box" [Evade], C(Charge)]
    let mut root = NodeDef::Selector {
        name: "Root".to_string(),
        children: vec![
            leaf(ActionRef::Patrol),
            NodeDef::Sequence {
                name: "Box".to_string(),
                children: vec![leaf(ActionRef::Evade)],
            },
            leaf(ActionRef::Charge),
        ],
    };
    // Move Patrol into the sequence, addressed pre-detach as path [1].
    move_node(&mut root, &[0], &[1], 1).unwrap();
    let NodeDef::Sequence { children, .. } = &root.children()[0] else {
        panic!("sequence should now lead");
    };
    assert_eq!(children.len(), 2);
    assert!(matches!(children[1], NodeDef::Action { ref_: ActionRef::Patrol, .. }));
    assert!(matches!(root.children()[1], NodeDef::Action { ref_: ActionRef::Charge, .. }));
}
