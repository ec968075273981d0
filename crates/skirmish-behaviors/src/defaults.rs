//! Bundled default behavior variants.
//!
//! Built in code rather than parsed from an asset so the seed set can never
//! fail to load. These are also the fallback when every store source is
//! unreadable.

use crate::descriptor::{ActionRef, BehaviorDescriptor, ConditionRef, NodeDef};

fn condition(ref_: ConditionRef) -> NodeDef {
    NodeDef::Condition { ref_, label: None }
}

fn action(ref_: ActionRef) -> NodeDef {
    NodeDef::Action { ref_, label: None }
}

fn sequence(name: &str, children: Vec<NodeDef>) -> NodeDef {
    NodeDef::Sequence {
        name: name.to_string(),
        children,
    }
}

fn selector(name: &str, children: Vec<NodeDef>) -> NodeDef {
    NodeDef::Selector {
        name: name.to_string(),
        children,
    }
}

pub fn default_descriptors() -> Vec<BehaviorDescriptor> {
    vec![
        BehaviorDescriptor {
            id: "classic".to_string(),
            label: "Classic".to_string(),
            root: selector(
                "Root",
                vec![
                    sequence(
                        "Threat response",
                        vec![condition(ConditionRef::Danger), action(ActionRef::Evade)],
                    ),
                    sequence(
                        "Engage",
                        vec![
                            condition(ConditionRef::InRange),
                            action(ActionRef::RangedAttack),
                        ],
                    ),
                    sequence(
                        "Find an angle",
                        vec![
                            condition(ConditionRef::NeedReposition),
                            action(ActionRef::Reposition),
                        ],
                    ),
                    action(ActionRef::Patrol),
                ],
            ),
        },
        BehaviorDescriptor {
            id: "aggressive".to_string(),
            label: "Aggressive".to_string(),
            root: selector(
                "Root",
                vec![
                    sequence(
                        "Dodge",
                        vec![condition(ConditionRef::Danger), action(ActionRef::Evade)],
                    ),
                    sequence(
                        "Shoot on sight",
                        vec![
                            condition(ConditionRef::InRange),
                            action(ActionRef::RangedAttack),
                        ],
                    ),
                    action(ActionRef::Charge),
                ],
            ),
        },
        BehaviorDescriptor {
            id: "skirmisher".to_string(),
            label: "Skirmisher".to_string(),
            root: selector(
                "Root",
                vec![
                    sequence(
                        "Dodge",
                        vec![condition(ConditionRef::Danger), action(ActionRef::Evade)],
                    ),
                    sequence(
                        "Kite",
                        vec![
                            condition(ConditionRef::TooClose),
                            action(ActionRef::Reposition),
                        ],
                    ),
                    sequence(
                        "Harass",
                        vec![
                            condition(ConditionRef::HasLos),
                            action(ActionRef::RangedAttack),
                        ],
                    ),
                    action(ActionRef::Strafe),
                ],
            ),
        },
    ]
}
