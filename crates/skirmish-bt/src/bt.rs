use std::borrow::Cow;

use skirmish_core::TickContext;

/// Tri-state result of one tick. No other values exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BtStatus {
    Running,
    Success,
    Failure,
}

/// Node kind tag, used by the observation layer and editors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Selector,
    Sequence,
    Condition,
    Action,
}

/// Display status of a node on a given frame. `Idle` means the node was not
/// ticked on that frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeState {
    Idle,
    Running,
    Success,
    Failure,
}

impl From<BtStatus> for NodeState {
    fn from(value: BtStatus) -> Self {
        match value {
            BtStatus::Running => NodeState::Running,
            BtStatus::Success => NodeState::Success,
            BtStatus::Failure => NodeState::Failure,
        }
    }
}

/// Identity and display data attached to every node.
///
/// `id` is stable for the lifetime of one instantiated tree; the factory
/// assigns ids densely in construction order so observers can index flat
/// arenas by them. Rebuilding a tree discards all node state and identities.
#[derive(Debug, Clone)]
pub struct NodeMeta {
    pub id: u32,
    pub name: Cow<'static, str>,
    pub kind: NodeKind,
}

impl NodeMeta {
    pub fn new(kind: NodeKind, name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            id: 0,
            name: name.into(),
            kind,
        }
    }
}

/// One node of an executable tree, generic over the context type threaded
/// through every tick.
///
/// `state_at` and `children` exist solely for the read-only observation walk;
/// implementations must not let them affect tick semantics.
pub trait BtNode<C: 'static> {
    fn tick(&mut self, ctx: &TickContext, data: &mut C) -> BtStatus;

    /// Force the node (and any children) back to its initial state without
    /// reconstruction.
    fn reset(&mut self) {}

    fn meta(&self) -> &NodeMeta;

    /// Status this node last reported, or `Idle` if it was not ticked on
    /// `frame`.
    fn state_at(&self, frame: u64) -> NodeState;

    fn children(&self) -> &[Box<dyn BtNode<C>>] {
        &[]
    }
}

/// Last-reported status plus the frame it was reported on. The frame tag is
/// what makes "not ticked this frame" readable without a clearing pass.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct LastStatus {
    status: Option<BtStatus>,
    frame: u64,
}

impl LastStatus {
    pub(crate) fn record(&mut self, ctx: &TickContext, status: BtStatus) -> BtStatus {
        self.status = Some(status);
        self.frame = ctx.frame;
        status
    }

    pub(crate) fn state_at(&self, frame: u64) -> NodeState {
        match self.status {
            Some(status) if self.frame == frame => status.into(),
            _ => NodeState::Idle,
        }
    }
}
