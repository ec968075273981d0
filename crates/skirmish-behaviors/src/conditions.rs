//! The condition leaf library.
//!
//! Each condition is a total predicate over the context; where the catalog
//! says so it records its finding on the blackboard for later leaves in the
//! same tick (and, for danger, for a resumed evade on a later tick).

use std::borrow::Cow;

use skirmish_bt::{BtNode, Condition};
use skirmish_core::{detect_incoming_danger, BehaviorContext, BehaviorHost, TickContext};

use crate::descriptor::ConditionRef;

fn display_name(ref_: ConditionRef, label: Option<&str>) -> Cow<'static, str> {
    match label {
        Some(label) => Cow::Owned(label.to_string()),
        None => Cow::Borrowed(ref_.default_label()),
    }
}

/// Build the executable node for one condition ref.
pub fn condition_node<H>(
    ref_: ConditionRef,
    label: Option<&str>,
    id: u32,
) -> Box<dyn BtNode<BehaviorContext<H>>>
where
    H: BehaviorHost + 'static,
{
    let name = display_name(ref_, label);
    match ref_ {
        ConditionRef::Danger => Box::new(Condition::new(name, cond_danger::<H>).with_id(id)),
        ConditionRef::InRange => Box::new(Condition::new(name, cond_in_range::<H>).with_id(id)),
        ConditionRef::NeedReposition => {
            Box::new(Condition::new(name, cond_need_reposition::<H>).with_id(id))
        }
        ConditionRef::HasLos => Box::new(Condition::new(name, cond_has_los::<H>).with_id(id)),
        ConditionRef::TooClose => Box::new(Condition::new(name, cond_too_close::<H>).with_id(id)),
    }
}

fn target_distance<H: BehaviorHost>(ctx: &BehaviorContext<H>) -> f32 {
    (ctx.bb.target_pos - ctx.bb.self_pos).length()
}

fn in_band<H: BehaviorHost>(ctx: &BehaviorContext<H>) -> bool {
    let d = target_distance(ctx);
    d >= ctx.bb.tuning.shoot_range_min && d <= ctx.bb.tuning.shoot_range_max
}

fn cond_danger<H: BehaviorHost>(_t: &TickContext, ctx: &mut BehaviorContext<H>) -> bool {
    let danger = detect_incoming_danger(&ctx.bb);
    ctx.bb.danger = danger;
    danger.is_some()
}

fn cond_in_range<H: BehaviorHost>(_t: &TickContext, ctx: &mut BehaviorContext<H>) -> bool {
    let ok = in_band(ctx);
    ctx.bb.in_range = Some(ok);
    ok
}

fn cond_need_reposition<H: BehaviorHost>(_t: &TickContext, ctx: &mut BehaviorContext<H>) -> bool {
    let range_ok = in_band(ctx);
    let los_ok = ctx.host.estimate_los(&ctx.bb);
    ctx.bb.has_los = Some(los_ok);
    !range_ok || !los_ok
}

fn cond_has_los<H: BehaviorHost>(_t: &TickContext, ctx: &mut BehaviorContext<H>) -> bool {
    let los_ok = ctx.host.estimate_los(&ctx.bb);
    ctx.bb.has_los = Some(los_ok);
    los_ok
}

fn cond_too_close<H: BehaviorHost>(_t: &TickContext, ctx: &mut BehaviorContext<H>) -> bool {
    target_distance(ctx) < ctx.bb.tuning.shoot_range_min
}
