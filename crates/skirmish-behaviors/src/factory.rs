//! Descriptor → executable tree translation.
//!
//! Pure and recursive: composites map 1:1 onto `Selector`/`Sequence`, leaves
//! dispatch through exhaustive matches on the closed ref catalogs. A ref the
//! library does not implement cannot be spelled once validation has run, so
//! construction cannot fail. Node ids are assigned densely in construction
//! order and stay stable for the tree's lifetime.

use skirmish_bt::{BtNode, Selector, Sequence};
use skirmish_core::{BehaviorContext, BehaviorHost};

use crate::actions::action_node;
use crate::conditions::condition_node;
use crate::descriptor::{BehaviorDescriptor, NodeDef};

#[derive(Default)]
struct IdGen {
    next: u32,
}

impl IdGen {
    fn next(&mut self) -> u32 {
        let id = self.next;
        self.next += 1;
        id
    }
}

/// Instantiate one executable tree for an agent. All leaves read and write
/// through the `BehaviorContext` passed to every tick; nothing is captured.
pub fn build_behavior_tree<H>(
    descriptor: &BehaviorDescriptor,
) -> Box<dyn BtNode<BehaviorContext<H>>>
where
    H: BehaviorHost + 'static,
{
    let mut ids = IdGen::default();
    instantiate(&descriptor.root, &mut ids)
}

fn instantiate<H>(def: &NodeDef, ids: &mut IdGen) -> Box<dyn BtNode<BehaviorContext<H>>>
where
    H: BehaviorHost + 'static,
{
    let id = ids.next();
    match def {
        NodeDef::Selector { name, children } => {
            let children = children.iter().map(|c| instantiate(c, ids)).collect();
            Box::new(Selector::new(children).named(name.clone()).with_id(id))
        }
        NodeDef::Sequence { name, children } => {
            let children = children.iter().map(|c| instantiate(c, ids)).collect();
            Box::new(Sequence::new(children).named(name.clone()).with_id(id))
        }
        NodeDef::Condition { ref_, label } => condition_node(*ref_, label.as_deref(), id),
        NodeDef::Action { ref_, label } => action_node(*ref_, label.as_deref(), id),
    }
}
