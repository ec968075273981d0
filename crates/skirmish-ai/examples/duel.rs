//! Minimal host loop: one brain-driven duelist against a scripted target.
//!
//! Demonstrates the per-tick contract end to end: refresh blackboard inputs,
//! clear intents, tick the tree, apply the intents to toy physics, and watch
//! the active branch through a probe.

use anyhow::Result;
use tracing::info;

use skirmish_ai::behaviors::{build_behavior_tree, BehaviorRegistry};
use skirmish_ai::bt::{BtNode, BtProbe};
use skirmish_ai::core::rng::derive_seed;
use skirmish_ai::core::{
    Blackboard, BehaviorContext, BehaviorHost, BrainState, Projectile, Side, TickContext, Tuning,
    Vec2, WorldBounds,
};

const WORLD: WorldBounds = WorldBounds { w: 1280.0, h: 720.0 };
const PROJECTILE_SPEED: f32 = 520.0;
const MAX_SPEED: f32 = 180.0;
const ACCEL: f32 = 900.0;
const FRICTION: f32 = 0.9;

struct DuelHost;

impl BehaviorHost for DuelHost {
    fn dash_boost(&self) -> f32 {
        1.25
    }

    fn estimate_los(&self, _bb: &Blackboard) -> bool {
        // The toy arena has no obstacles.
        true
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let mut registry = BehaviorRegistry::new();
    registry.ensure().await;
    let descriptor = registry
        .get("classic")
        .ok_or_else(|| anyhow::anyhow!("bundled variant missing"))?;

    let mut tree = build_behavior_tree::<DuelHost>(&descriptor);
    let mut probe = BtProbe::new();

    let bb = Blackboard::new(WORLD, Tuning::default());
    let state = BrainState::new(derive_seed(0xD0E1, 1, 0));
    let mut ctx = BehaviorContext::new(bb, DuelHost, state);

    // Agent state owned by the host.
    let mut pos = Vec2::new(WORLD.w * 0.75, WORLD.h * 0.5);
    let mut vel = Vec2::ZERO;
    let mut projectiles: Vec<Projectile> = Vec::new();
    let dt = 1.0 / 60.0;

    for step in 0u64..600 {
        // Scripted target: slow circle around the arena center.
        let phase = step as f32 * 0.01;
        let target_pos = Vec2::new(
            WORLD.w * 0.5 + 200.0 * phase.cos(),
            WORLD.h * 0.5 + 150.0 * phase.sin(),
        );
        let target_vel = Vec2::new(-200.0 * 0.01 * phase.sin(), 150.0 * 0.01 * phase.cos()) * 60.0;

        // The target opens fire every two seconds.
        if step % 120 == 60 {
            let dir = (pos - target_pos).normalized_or_zero();
            projectiles.push(Projectile {
                pos: target_pos,
                vel: dir * PROJECTILE_SPEED,
                radius: 7.0,
                side: Side::Hostile,
            });
        }
        for p in projectiles.iter_mut() {
            p.pos += p.vel * dt;
        }
        projectiles.retain(|p| {
            p.pos.x > -p.radius
                && p.pos.x < WORLD.w + p.radius
                && p.pos.y > -p.radius
                && p.pos.y < WORLD.h + p.radius
        });

        // Host -> core: fresh inputs, cleared intents.
        ctx.bb.self_pos = pos;
        ctx.bb.self_vel = vel;
        ctx.bb.self_radius = 26.0;
        ctx.bb.target_pos = target_pos;
        ctx.bb.target_vel = target_vel;
        ctx.bb.projectiles = projectiles.clone();
        ctx.bb.projectile_speed = PROJECTILE_SPEED;
        ctx.bb.begin_tick();

        let frame = probe.begin_frame();
        let status = tree.tick(&TickContext::new(frame, dt), &mut ctx);
        let _ = probe.end_frame(tree.as_ref());

        // Core -> host: apply intents to toy physics.
        if let Some(dir) = ctx.bb.intents.move_dir {
            let boost = ctx.bb.intents.dash_boost.unwrap_or(1.0);
            vel += dir * (ACCEL * boost * dt);
        }
        vel = vel * FRICTION;
        let speed = vel.length();
        if speed > MAX_SPEED {
            vel = vel * (MAX_SPEED / speed);
        }
        pos += vel * dt;
        pos.x = pos.x.clamp(26.0, WORLD.w - 26.0);
        pos.y = pos.y.clamp(26.0, WORLD.h - 26.0);

        if step % 60 == 0 {
            info!(
                step,
                status = ?status,
                leaf = %ctx.bb.active_leaf,
                x = pos.x as i32,
                y = pos.y as i32,
                shooting = ctx.bb.intents.shoot,
                "tick"
            );
        }
    }

    Ok(())
}
