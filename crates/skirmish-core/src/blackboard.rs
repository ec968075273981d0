use std::borrow::Cow;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::math::Vec2;

/// Playfield extents. Positions are in `[0, w] x [0, h]`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WorldBounds {
    pub w: f32,
    pub h: f32,
}

/// Which camp a projectile belongs to, from the owning agent's perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Side {
    Friendly,
    Hostile,
}

/// One live projectile as perceived this tick.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Projectile {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub side: Side,
}

/// Gameplay tunables, refreshed by the host alongside the other inputs.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Tuning {
    /// Closest distance from which shooting is still acceptable.
    pub shoot_range_min: f32,
    /// Farthest distance from which shooting is still acceptable.
    pub shoot_range_max: f32,
    /// How far ahead (seconds) closest-approach threats are considered.
    pub evade_horizon: f32,
    /// Extra separation added on top of the combined collision radii.
    pub evade_margin: f32,
    /// Length of one evade dash, seconds.
    pub evade_duration: f32,
    /// Half-width of the aim perturbation, radians.
    pub aim_jitter: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            shoot_range_min: 200.0,
            shoot_range_max: 280.0,
            evade_horizon: 0.6,
            evade_margin: 4.0,
            evade_duration: 0.35,
            aim_jitter: 5.0_f32.to_radians(),
        }
    }
}

/// Escape reference recorded by the danger condition: the normalized relative
/// velocity of the soonest-arriving threat.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Danger {
    pub dir: Vec2,
}

/// What the tree asked for this tick. Write-only for actions, read-only for
/// the host, cleared at the start of every tick.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Intents {
    /// Desired movement direction (normalized).
    pub move_dir: Option<Vec2>,
    /// Temporary speed multiplier.
    pub dash_boost: Option<f32>,
    pub shoot: bool,
    pub aim_at: Option<Vec2>,
}

impl Intents {
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Per-tick fact store for one agent. Single owner, never shared across
/// agents, not persisted.
///
/// Fields partition three ways: inputs the host overwrites every tick,
/// intents the tree writes and the host consumes, and runtime scratch the
/// nodes share. `begin_tick` clears intents only; the scratch facts must
/// survive it, because a `Running` leaf resumed mid-sequence reads facts its
/// guarding condition recorded on an earlier frame.
#[derive(Debug, Clone)]
pub struct Blackboard {
    // inputs
    pub self_pos: Vec2,
    pub self_vel: Vec2,
    pub self_radius: f32,
    pub target_pos: Vec2,
    pub target_vel: Vec2,
    pub bounds: WorldBounds,
    pub projectiles: Vec<Projectile>,
    pub projectile_speed: f32,
    pub tuning: Tuning,

    // intents
    pub intents: Intents,

    // runtime scratch
    pub danger: Option<Danger>,
    pub has_los: Option<bool>,
    pub in_range: Option<bool>,
    /// Display name of the leaf that ran last, for diagnostics overlays.
    pub active_leaf: Cow<'static, str>,
}

impl Blackboard {
    pub fn new(bounds: WorldBounds, tuning: Tuning) -> Self {
        Self {
            self_pos: Vec2::ZERO,
            self_vel: Vec2::ZERO,
            self_radius: 0.0,
            target_pos: Vec2::ZERO,
            target_vel: Vec2::ZERO,
            bounds,
            projectiles: Vec::new(),
            projectile_speed: 0.0,
            tuning,
            intents: Intents::default(),
            danger: None,
            has_los: None,
            in_range: None,
            active_leaf: Cow::Borrowed("Idle"),
        }
    }

    /// Host calls this immediately before `tick` so no stale intent leaks
    /// into a frame where no action runs.
    pub fn begin_tick(&mut self) {
        self.intents.clear();
    }
}
