//! Deterministic, engine-agnostic duel AI kernel primitives.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod blackboard;
pub mod context;
pub mod math;
pub mod perception;
pub mod rng;
pub mod tick;

pub use blackboard::{Blackboard, Danger, Intents, Projectile, Side, Tuning, WorldBounds};
pub use context::{BehaviorContext, BehaviorHost, BrainState};
pub use math::{circles_overlap, clamp01, Vec2};
pub use perception::{crown_score, detect_incoming_danger, lead_aim};
pub use rng::{DeterministicRng, SplitMix64};
pub use tick::TickContext;
