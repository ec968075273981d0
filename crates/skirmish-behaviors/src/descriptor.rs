//! The serializable, data-only definition of a behavior tree.
//!
//! Refs form closed catalogs: adding a condition or action is a source change
//! that the factory's exhaustive matches check at compile time, never a
//! silent runtime gap.

use serde::{Deserialize, Serialize};

/// Symbolic name of a concrete condition implementation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConditionRef {
    #[serde(rename = "danger")]
    Danger,
    #[serde(rename = "inRange")]
    InRange,
    #[serde(rename = "needReposition")]
    NeedReposition,
    #[serde(rename = "hasLOS")]
    HasLos,
    #[serde(rename = "tooClose")]
    TooClose,
}

/// Symbolic name of a concrete action implementation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActionRef {
    #[serde(rename = "evade")]
    Evade,
    #[serde(rename = "rangedAttack")]
    RangedAttack,
    #[serde(rename = "reposition")]
    Reposition,
    #[serde(rename = "patrol")]
    Patrol,
    #[serde(rename = "strafe")]
    Strafe,
    #[serde(rename = "charge")]
    Charge,
}

/// Palette row for editors: wire name, canonical label, one-line description.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogEntry {
    pub wire: &'static str,
    pub label: &'static str,
    pub description: &'static str,
}

impl ConditionRef {
    pub const ALL: [ConditionRef; 5] = [
        ConditionRef::Danger,
        ConditionRef::InRange,
        ConditionRef::NeedReposition,
        ConditionRef::HasLos,
        ConditionRef::TooClose,
    ];

    pub fn as_str(self) -> &'static str {
        self.catalog_entry().wire
    }

    pub fn parse(wire: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|r| r.as_str() == wire)
    }

    /// Display name used when a descriptor leaf carries no label.
    pub fn default_label(self) -> &'static str {
        self.catalog_entry().label
    }

    pub fn catalog_entry(self) -> CatalogEntry {
        match self {
            ConditionRef::Danger => CatalogEntry {
                wire: "danger",
                label: "Danger?",
                description: "Succeeds when an incoming projectile is on a collision course.",
            },
            ConditionRef::InRange => CatalogEntry {
                wire: "inRange",
                label: "InRanged?",
                description: "True when the target sits inside the shooting band.",
            },
            ConditionRef::NeedReposition => CatalogEntry {
                wire: "needReposition",
                label: "NeedReposition?",
                description: "Range or line of sight is off; the agent should move for a better angle.",
            },
            ConditionRef::HasLos => CatalogEntry {
                wire: "hasLOS",
                label: "HasLOS?",
                description: "Succeeds when the host reports a clear line of sight.",
            },
            ConditionRef::TooClose => CatalogEntry {
                wire: "tooClose",
                label: "TooClose?",
                description: "Succeeds when the target is nearer than the shooting band allows.",
            },
        }
    }
}

impl ActionRef {
    pub const ALL: [ActionRef; 6] = [
        ActionRef::Evade,
        ActionRef::RangedAttack,
        ActionRef::Reposition,
        ActionRef::Patrol,
        ActionRef::Strafe,
        ActionRef::Charge,
    ];

    pub fn as_str(self) -> &'static str {
        self.catalog_entry().wire
    }

    pub fn parse(wire: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|r| r.as_str() == wire)
    }

    pub fn default_label(self) -> &'static str {
        self.catalog_entry().label
    }

    pub fn catalog_entry(self) -> CatalogEntry {
        match self {
            ActionRef::Evade => CatalogEntry {
                wire: "evade",
                label: "Evade",
                description: "Lateral dash away from a detected threat.",
            },
            ActionRef::RangedAttack => CatalogEntry {
                wire: "rangedAttack",
                label: "RangedAttack",
                description: "Holds the band, leads the target, jitters the aim and requests a shot.",
            },
            ActionRef::Reposition => CatalogEntry {
                wire: "reposition",
                label: "Reposition",
                description: "Seeks the ideal distance with a light strafe blended in.",
            },
            ActionRef::Patrol => CatalogEntry {
                wire: "patrol",
                label: "Patrol",
                description: "Slow random wandering, used as a fallback.",
            },
            ActionRef::Strafe => CatalogEntry {
                wire: "strafe",
                label: "Strafe",
                description: "Orbits the target, correcting toward the shooting band.",
            },
            ActionRef::Charge => CatalogEntry {
                wire: "charge",
                label: "Charge",
                description: "Runs straight at the target with a small boost.",
            },
        }
    }
}

/// One node of a descriptor tree. Matches the wire format:
/// `{"type": "Selector", "name": ..., "children": [...]}` for composites,
/// `{"type": "Condition", "ref": ..., "label"?: ...}` for leaves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum NodeDef {
    Selector {
        name: String,
        children: Vec<NodeDef>,
    },
    Sequence {
        name: String,
        children: Vec<NodeDef>,
    },
    Condition {
        #[serde(rename = "ref")]
        ref_: ConditionRef,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        label: Option<String>,
    },
    Action {
        #[serde(rename = "ref")]
        ref_: ActionRef,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        label: Option<String>,
    },
}

impl NodeDef {
    pub fn is_composite(&self) -> bool {
        matches!(self, NodeDef::Selector { .. } | NodeDef::Sequence { .. })
    }

    pub fn children(&self) -> &[NodeDef] {
        match self {
            NodeDef::Selector { children, .. } | NodeDef::Sequence { children, .. } => children,
            _ => &[],
        }
    }
}

/// A named, editable behavior variant. The unit of registry storage and of
/// the persistence wire format (a payload is a JSON array of these).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BehaviorDescriptor {
    pub id: String,
    pub label: String,
    pub root: NodeDef,
}

/// `{id, label}` summary row for selection UIs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BehaviorOption {
    pub id: String,
    pub label: String,
}

/// Fresh descriptor the editor starts from: an empty root selector.
pub fn empty_descriptor() -> BehaviorDescriptor {
    BehaviorDescriptor {
        id: crate::registry::generate_id("custom"),
        label: "New behavior".to_string(),
        root: NodeDef::Selector {
            name: "Root".to_string(),
            children: Vec::new(),
        },
    }
}
