use std::borrow::Cow;

use skirmish_core::TickContext;

use crate::bt::{BtNode, BtStatus, LastStatus, NodeKind, NodeMeta, NodeState};

/// OR composite. No persistent cursor: every tick restarts from the first
/// child, so a higher-priority branch can interrupt a lower-priority
/// `Running` branch on the very next frame.
pub struct Selector<C: 'static> {
    meta: NodeMeta,
    children: Vec<Box<dyn BtNode<C>>>,
    last: LastStatus,
}

impl<C: 'static> Selector<C> {
    pub fn new(children: Vec<Box<dyn BtNode<C>>>) -> Self {
        Self {
            meta: NodeMeta::new(NodeKind::Selector, "Selector"),
            children,
            last: LastStatus::default(),
        }
    }

    pub fn named(mut self, name: impl Into<Cow<'static, str>>) -> Self {
        self.meta.name = name.into();
        self
    }

    pub fn with_id(mut self, id: u32) -> Self {
        self.meta.id = id;
        self
    }
}

impl<C: 'static> BtNode<C> for Selector<C> {
    fn tick(&mut self, ctx: &TickContext, data: &mut C) -> BtStatus {
        for child in self.children.iter_mut() {
            let status = child.tick(ctx, data);
            if status != BtStatus::Failure {
                return self.last.record(ctx, status);
            }
        }
        self.last.record(ctx, BtStatus::Failure)
    }

    fn reset(&mut self) {
        for child in self.children.iter_mut() {
            child.reset();
        }
    }

    fn meta(&self) -> &NodeMeta {
        &self.meta
    }

    fn state_at(&self, frame: u64) -> NodeState {
        self.last.state_at(frame)
    }

    fn children(&self) -> &[Box<dyn BtNode<C>>] {
        &self.children
    }
}

/// AND composite with a resumable cursor.
///
/// A `Running` child keeps the cursor in place, so a multi-frame action
/// embedded mid-sequence resumes there on the next tick instead of
/// re-evaluating the guards before it. Terminal results rewind the cursor.
pub struct Sequence<C: 'static> {
    meta: NodeMeta,
    children: Vec<Box<dyn BtNode<C>>>,
    cursor: usize,
    last: LastStatus,
}

impl<C: 'static> Sequence<C> {
    pub fn new(children: Vec<Box<dyn BtNode<C>>>) -> Self {
        Self {
            meta: NodeMeta::new(NodeKind::Sequence, "Sequence"),
            children,
            cursor: 0,
            last: LastStatus::default(),
        }
    }

    pub fn named(mut self, name: impl Into<Cow<'static, str>>) -> Self {
        self.meta.name = name.into();
        self
    }

    pub fn with_id(mut self, id: u32) -> Self {
        self.meta.id = id;
        self
    }
}

impl<C: 'static> BtNode<C> for Sequence<C> {
    fn tick(&mut self, ctx: &TickContext, data: &mut C) -> BtStatus {
        while self.cursor < self.children.len() {
            match self.children[self.cursor].tick(ctx, data) {
                BtStatus::Running => return self.last.record(ctx, BtStatus::Running),
                BtStatus::Failure => {
                    self.cursor = 0;
                    return self.last.record(ctx, BtStatus::Failure);
                }
                BtStatus::Success => self.cursor += 1,
            }
        }
        self.cursor = 0;
        self.last.record(ctx, BtStatus::Success)
    }

    fn reset(&mut self) {
        self.cursor = 0;
        for child in self.children.iter_mut() {
            child.reset();
        }
    }

    fn meta(&self) -> &NodeMeta {
        &self.meta
    }

    fn state_at(&self, frame: u64) -> NodeState {
        self.last.state_at(frame)
    }

    fn children(&self) -> &[Box<dyn BtNode<C>>] {
        &self.children
    }
}

/// Stateless boolean leaf. Never returns `Running`.
pub struct Condition<F> {
    meta: NodeMeta,
    predicate: F,
    last: LastStatus,
}

impl<F> Condition<F> {
    pub fn new(name: impl Into<Cow<'static, str>>, predicate: F) -> Self {
        Self {
            meta: NodeMeta::new(NodeKind::Condition, name),
            predicate,
            last: LastStatus::default(),
        }
    }

    pub fn with_id(mut self, id: u32) -> Self {
        self.meta.id = id;
        self
    }
}

impl<C, F> BtNode<C> for Condition<F>
where
    C: 'static,
    F: FnMut(&TickContext, &mut C) -> bool + 'static,
{
    fn tick(&mut self, ctx: &TickContext, data: &mut C) -> BtStatus {
        let status = if (self.predicate)(ctx, data) {
            BtStatus::Success
        } else {
            BtStatus::Failure
        };
        self.last.record(ctx, status)
    }

    fn meta(&self) -> &NodeMeta {
        &self.meta
    }

    fn state_at(&self, frame: u64) -> NodeState {
        self.last.state_at(frame)
    }
}

/// Effectful leaf. The body reports `Running` to span multiple frames;
/// any cross-tick memory it needs lives in the context, not the node.
pub struct Action<F> {
    meta: NodeMeta,
    body: F,
    last: LastStatus,
}

impl<F> Action<F> {
    pub fn new(name: impl Into<Cow<'static, str>>, body: F) -> Self {
        Self {
            meta: NodeMeta::new(NodeKind::Action, name),
            body,
            last: LastStatus::default(),
        }
    }

    pub fn with_id(mut self, id: u32) -> Self {
        self.meta.id = id;
        self
    }
}

impl<C, F> BtNode<C> for Action<F>
where
    C: 'static,
    F: FnMut(&TickContext, &mut C) -> BtStatus + 'static,
{
    fn tick(&mut self, ctx: &TickContext, data: &mut C) -> BtStatus {
        let status = (self.body)(ctx, data);
        self.last.record(ctx, status)
    }

    fn meta(&self) -> &NodeMeta {
        &self.meta
    }

    fn state_at(&self, frame: u64) -> NodeState {
        self.last.state_at(frame)
    }
}
