//! Behavior tree runtime built on `skirmish-core`.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod bt;
pub mod debug;
pub mod nodes;

pub use bt::{BtNode, BtStatus, NodeKind, NodeMeta, NodeState};
pub use debug::{debug_tree, BtProbe, DebugTreeNode, FrameSnapshot, NodeSnapshot, SnapshotListener};
pub use nodes::{Action, Condition, Selector, Sequence};
