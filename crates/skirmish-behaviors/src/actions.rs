//! The action leaf library.
//!
//! Actions write intents the host applies after the tick and report status.
//! Cross-tick memory (the evade timer, the RNG stream) lives in the agent's
//! `BrainState`, never in the nodes, so a tree rebuild cannot strand it.

use std::borrow::Cow;

use skirmish_bt::{Action, BtNode, BtStatus};
use skirmish_core::{
    crown_score, lead_aim, BehaviorContext, BehaviorHost, DeterministicRng, TickContext, Vec2,
};

use crate::descriptor::ActionRef;

/// Buffer around the shooting band edges before rangedAttack walks.
const BAND_SLACK: f32 = 20.0;
/// Lateral blend weight while attacking.
const ATTACK_STRAFE_WEIGHT: f32 = 0.8;
/// Lateral blend weight while repositioning.
const REPOSITION_STRAFE_WEIGHT: f32 = 0.7;
/// Radial correction weight while strafing off the band midpoint.
const STRAFE_RADIAL_WEIGHT: f32 = 0.6;
/// Minimum dash multiplier while charging.
const CHARGE_BOOST: f32 = 1.15;
/// How far past the agent the jittered aim ray is projected.
const AIM_PROJECT_DIST: f32 = 1000.0;

fn display_name(ref_: ActionRef, label: Option<&str>) -> Cow<'static, str> {
    match label {
        Some(label) => Cow::Owned(label.to_string()),
        None => Cow::Borrowed(ref_.default_label()),
    }
}

/// Build the executable node for one action ref.
pub fn action_node<H>(
    ref_: ActionRef,
    label: Option<&str>,
    id: u32,
) -> Box<dyn BtNode<BehaviorContext<H>>>
where
    H: BehaviorHost + 'static,
{
    let name = display_name(ref_, label);
    match ref_ {
        ActionRef::Evade => Box::new(Action::new(name, act_evade::<H>).with_id(id)),
        ActionRef::RangedAttack => Box::new(Action::new(name, act_ranged::<H>).with_id(id)),
        ActionRef::Reposition => Box::new(Action::new(name, act_reposition::<H>).with_id(id)),
        ActionRef::Patrol => Box::new(Action::new(name, act_patrol::<H>).with_id(id)),
        ActionRef::Strafe => Box::new(Action::new(name, act_strafe::<H>).with_id(id)),
        ActionRef::Charge => Box::new(Action::new(name, act_charge::<H>).with_id(id)),
    }
}

/// Perpendicular dash away from the recorded threat. `Failure` when no danger
/// fact is present: the leaf is total, it never assumes its guard ran.
fn act_evade<H: BehaviorHost>(t: &TickContext, ctx: &mut BehaviorContext<H>) -> BtStatus {
    let BehaviorContext { bb, host, state } = ctx;
    bb.active_leaf = Cow::Borrowed("Evade");

    let Some(danger) = bb.danger else {
        return BtStatus::Failure;
    };

    if state.evade_time_left <= 0.0 {
        state.evade_time_left = bb.tuning.evade_duration;
    }

    bb.intents.move_dir = Some(danger.dir.normalized_or_zero().perp());
    bb.intents.dash_boost = Some(host.dash_boost());
    state.evade_time_left -= t.dt_seconds;

    if state.evade_time_left > 0.0 {
        return BtStatus::Running;
    }

    state.evade_time_left = 0.0;
    bb.danger = None;
    BtStatus::Success
}

fn act_ranged<H: BehaviorHost>(_t: &TickContext, ctx: &mut BehaviorContext<H>) -> BtStatus {
    let BehaviorContext { bb, state, .. } = ctx;
    bb.active_leaf = Cow::Borrowed("Attack");

    let to = bb.target_pos - bb.self_pos;
    let dist = to.length();
    let dir_to = to.normalized_or_zero();

    let mut mv = Vec2::ZERO;
    if dist < bb.tuning.shoot_range_min + BAND_SLACK {
        mv = -dir_to;
    } else if dist > bb.tuning.shoot_range_max - BAND_SLACK {
        mv = dir_to;
    }
    let strafe = dir_to.perp() * (ATTACK_STRAFE_WEIGHT * state.rng.next_sign());
    bb.intents.move_dir = Some((mv + strafe).normalized_or_zero());

    let aim = lead_aim(bb.self_pos, bb.target_pos, bb.target_vel, bb.projectile_speed)
        .unwrap_or(bb.target_pos);

    let jitter = state.rng.next_f32_signed() * bb.tuning.aim_jitter;
    let aim_dir = (aim - bb.self_pos).normalized_or_zero().rotated(jitter);

    bb.intents.shoot = true;
    bb.intents.aim_at = Some(bb.self_pos + aim_dir * AIM_PROJECT_DIST);
    BtStatus::Running
}

fn act_reposition<H: BehaviorHost>(_t: &TickContext, ctx: &mut BehaviorContext<H>) -> BtStatus {
    let BehaviorContext { bb, state, .. } = ctx;
    bb.active_leaf = Cow::Borrowed("Reposition");

    let to = bb.target_pos - bb.self_pos;
    let dist = to.length();
    let dir_to = to.normalized_or_zero();

    let mut mv = dir_to;
    if dist < bb.tuning.shoot_range_min {
        mv = -dir_to;
    }
    if dist > bb.tuning.shoot_range_max {
        mv = dir_to;
    }

    let strafe = dir_to.perp() * (REPOSITION_STRAFE_WEIGHT * state.rng.next_sign());
    bb.intents.move_dir = Some((mv + strafe).normalized_or_zero());
    BtStatus::Running
}

fn act_patrol<H: BehaviorHost>(_t: &TickContext, ctx: &mut BehaviorContext<H>) -> BtStatus {
    let BehaviorContext { bb, state, .. } = ctx;
    bb.active_leaf = Cow::Borrowed("Patrol");

    let dir = Vec2::new(state.rng.next_f32_signed(), state.rng.next_f32_signed());
    bb.intents.move_dir = Some(dir.normalized_or_zero());
    BtStatus::Running
}

/// Orbit the target. At the band midpoint the motion is pure lateral; toward
/// and beyond the edges an increasing radial component pulls back in (or out,
/// when too close).
fn act_strafe<H: BehaviorHost>(_t: &TickContext, ctx: &mut BehaviorContext<H>) -> BtStatus {
    let BehaviorContext { bb, state, .. } = ctx;
    bb.active_leaf = Cow::Borrowed("Strafe");

    let to = bb.target_pos - bb.self_pos;
    let dist = to.length();
    let dir_to = to.normalized_or_zero();
    let min = bb.tuning.shoot_range_min;
    let max = bb.tuning.shoot_range_max;

    let lateral = dir_to.perp() * state.rng.next_sign();
    let hold = crown_score(dist, min, max);
    let mid = (min + max) / 2.0;
    let radial_dir = if dist >= mid { dir_to } else { -dir_to };
    let radial = radial_dir * ((1.0 - hold) * STRAFE_RADIAL_WEIGHT);

    bb.intents.move_dir = Some((lateral + radial).normalized_or_zero());
    BtStatus::Running
}

fn act_charge<H: BehaviorHost>(_t: &TickContext, ctx: &mut BehaviorContext<H>) -> BtStatus {
    let BehaviorContext { bb, host, .. } = ctx;
    bb.active_leaf = Cow::Borrowed("Charge");

    let dir_to = (bb.target_pos - bb.self_pos).normalized_or_zero();
    bb.intents.move_dir = Some(dir_to);
    bb.intents.dash_boost = Some(host.dash_boost().max(CHARGE_BOOST));
    BtStatus::Running
}
