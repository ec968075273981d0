use serde_json::{json, Value};
use skirmish_behaviors::{
    parse_descriptor, parse_descriptor_array, validate, BehaviorDescriptor, NodeDef, ValidateError,
};

fn classic_value() -> Value {
    json!({
        "id": "classic",
        "label": "Classic",
        "root": {
            "type": "Selector",
            "name": "Root",
            "children": [
                {
                    "type": "Sequence",
                    "name": "Threat response",
                    "children": [
                        { "type": "Condition", "ref": "danger" },
                        { "type": "Action", "ref": "evade", "label": "Dash!" }
                    ]
                },
                { "type": "Action", "ref": "patrol" }
            ]
        }
    })
}

#[test]
fn validation_is_idempotent() {
    let first = parse_descriptor(&classic_value()).expect("valid descriptor");
    let reserialized = serde_json::to_value(&first).expect("serializable");
    let second = parse_descriptor(&reserialized).expect("still valid");
    assert_eq!(first, second);
}

#[test]
fn labels_pass_through_unchanged() {
    let descriptor = parse_descriptor(&classic_value()).expect("valid descriptor");
    let NodeDef::Selector { children, .. } = &descriptor.root else {
        panic!("root should be a selector");
    };
    let NodeDef::Sequence { children: seq, .. } = &children[0] else {
        panic!("first child should be a sequence");
    };
    assert_eq!(
        seq[1],
        NodeDef::Action {
            ref_: skirmish_behaviors::ActionRef::Evade,
            label: Some("Dash!".to_string()),
        }
    );
    // Unlabeled leaves serialize without a "label" key at all.
    let out = serde_json::to_value(&seq[0]).expect("serializable");
    assert!(out.get("label").is_none());
}

#[test]
fn unknown_condition_ref_is_rejected_by_name() {
    let bad = json!({
        "id": "x",
        "label": "X",
        "root": { "type": "Condition", "ref": "bogus" }
    });
    match parse_descriptor(&bad) {
        Err(ValidateError::UnknownCondition(r)) => assert_eq!(r, "bogus"),
        other => panic!("expected UnknownCondition, got {other:?}"),
    }
}

#[test]
fn unknown_action_ref_is_rejected_by_name() {
    let bad = json!({
        "id": "x",
        "label": "X",
        "root": { "type": "Action", "ref": "doesNotExist" }
    });
    match parse_descriptor(&bad) {
        Err(ValidateError::UnknownAction(r)) => assert_eq!(r, "doesNotExist"),
        other => panic!("expected UnknownAction, got {other:?}"),
    }
}

#[test]
fn composite_without_a_name_is_rejected() {
    let bad = json!({
        "id": "x",
        "label": "X",
        "root": { "type": "Selector", "children": [] }
    });
    assert!(matches!(
        parse_descriptor(&bad),
        Err(ValidateError::UnnamedComposite)
    ));
}

#[test]
fn children_must_be_an_array() {
    let bad = json!({
        "id": "x",
        "label": "X",
        "root": { "type": "Sequence", "name": "S", "children": 4 }
    });
    match parse_descriptor(&bad) {
        Err(ValidateError::ChildrenNotAnArray { name }) => assert_eq!(name, "S"),
        other => panic!("expected ChildrenNotAnArray, got {other:?}"),
    }
}

#[test]
fn unsupported_type_and_missing_ids_are_rejected() {
    let weird = json!({
        "id": "x",
        "label": "X",
        "root": { "type": "Parallel", "name": "P", "children": [] }
    });
    match parse_descriptor(&weird) {
        Err(ValidateError::UnsupportedType(t)) => assert_eq!(t, "Parallel"),
        other => panic!("expected UnsupportedType, got {other:?}"),
    }

    let no_id = json!({ "id": "", "label": "X", "root": { "type": "Action", "ref": "patrol" } });
    assert!(matches!(parse_descriptor(&no_id), Err(ValidateError::MissingId)));

    let no_label = json!({ "id": "x", "root": { "type": "Action", "ref": "patrol" } });
    assert!(matches!(
        parse_descriptor(&no_label),
        Err(ValidateError::MissingLabel)
    ));
}

#[test]
fn payload_must_be_an_array() {
    assert!(matches!(
        parse_descriptor_array(&classic_value()),
        Err(ValidateError::NotAnArray)
    ));
    let ok = parse_descriptor_array(&json!([classic_value()])).expect("array of one");
    assert_eq!(ok.len(), 1);
}

#[test]
fn typed_validation_catches_hand_built_empty_strings() {
    let descriptor = BehaviorDescriptor {
        id: "ok".to_string(),
        label: "Ok".to_string(),
        root: NodeDef::Selector {
            name: String::new(),
            children: vec![],
        },
    };
    assert!(matches!(
        validate(&descriptor),
        Err(ValidateError::UnnamedComposite)
    ));
}
