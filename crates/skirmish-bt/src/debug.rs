//! Observation-only introspection over a live tree.
//!
//! Nothing here touches tick semantics: nodes already record their last
//! status as they tick, and the probe reads it back through the `BtNode`
//! walk after the tick pass. A core embedding can skip this module entirely.

use crate::bt::{BtNode, NodeKind, NodeState};

/// Flat per-node status entry inside one frame snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeSnapshot {
    pub id: u32,
    pub name: String,
    pub kind: NodeKind,
    pub status: NodeState,
}

/// Statuses of every node as of one tick, tagged with the frame counter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameSnapshot {
    pub frame: u64,
    pub nodes: Vec<NodeSnapshot>,
}

/// Push-style consumer of frame snapshots. At most one is subscribed.
pub trait SnapshotListener {
    fn on_frame(&mut self, snapshot: &FrameSnapshot);
}

impl<F: FnMut(&FrameSnapshot)> SnapshotListener for F {
    fn on_frame(&mut self, snapshot: &FrameSnapshot) {
        self(snapshot);
    }
}

/// Hierarchical mirror of a tree's shape, for one-time rendering by an
/// external visualizer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DebugTreeNode {
    pub id: u32,
    pub name: String,
    pub kind: NodeKind,
    pub children: Vec<DebugTreeNode>,
}

pub fn debug_tree<C: 'static>(root: &dyn BtNode<C>) -> DebugTreeNode {
    let meta = root.meta();
    DebugTreeNode {
        id: meta.id,
        name: meta.name.to_string(),
        kind: meta.kind,
        children: root.children().iter().map(|c| debug_tree(c.as_ref())).collect(),
    }
}

/// Frame bookkeeping plus snapshot broadcast.
///
/// Usage per simulation frame: `begin_frame()` yields the frame counter the
/// host puts into its `TickContext`; after `tree.tick(..)`, `end_frame(&tree)`
/// collects statuses and pushes them to the listener. Nodes not ticked on the
/// frame read as `Idle`; the frame tag is the per-frame clear.
#[derive(Default)]
pub struct BtProbe {
    frame: u64,
    listener: Option<Box<dyn SnapshotListener>>,
}

impl BtProbe {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_listener(&mut self, listener: impl SnapshotListener + 'static) {
        self.listener = Some(Box::new(listener));
    }

    pub fn clear_listener(&mut self) {
        self.listener = None;
    }

    /// Advance to the next frame and return its counter.
    pub fn begin_frame(&mut self) -> u64 {
        self.frame += 1;
        self.frame
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Snapshot the tree as of the current frame and broadcast it.
    pub fn end_frame<C: 'static>(&mut self, root: &dyn BtNode<C>) -> FrameSnapshot {
        let mut nodes = Vec::new();
        collect(root, self.frame, &mut nodes);
        let snapshot = FrameSnapshot {
            frame: self.frame,
            nodes,
        };
        if let Some(listener) = self.listener.as_mut() {
            listener.on_frame(&snapshot);
        }
        snapshot
    }
}

fn collect<C: 'static>(node: &dyn BtNode<C>, frame: u64, out: &mut Vec<NodeSnapshot>) {
    let meta = node.meta();
    out.push(NodeSnapshot {
        id: meta.id,
        name: meta.name.to_string(),
        kind: meta.kind,
        status: node.state_at(frame),
    });
    for child in node.children() {
        collect(child.as_ref(), frame, out);
    }
}
