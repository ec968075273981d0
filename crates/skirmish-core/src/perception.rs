//! Pure perception queries over the blackboard.
//!
//! These never write facts; the condition leaves that call them decide what
//! gets recorded.

use crate::blackboard::{Blackboard, Danger, Side};
use crate::math::{clamp01, Vec2};

const EPS: f32 = 1e-6;

/// Scan hostile projectiles for the soonest closest-approach threat.
///
/// For each hostile projectile: relative position and velocity against self,
/// skip when there is no convergence (relative speed ~ zero), solve
/// `t* = -dot(rel_pos, rel_vel) / |rel_vel|^2`, discard `t*` outside
/// `[0, evade_horizon]`, and flag a threat when the separation at `t*` is
/// within `self_radius + projectile radius + evade_margin`. Among threats the
/// smallest `t*` wins; its normalized relative velocity is the escape
/// reference.
pub fn detect_incoming_danger(bb: &Blackboard) -> Option<Danger> {
    let mut worst: Option<(f32, Vec2)> = None;

    for p in &bb.projectiles {
        if p.side != Side::Hostile {
            continue;
        }
        let rel_pos = p.pos - bb.self_pos;
        let rel_vel = p.vel - bb.self_vel;
        let rel_speed2 = rel_vel.dot(rel_vel);
        if rel_speed2 <= EPS {
            continue;
        }

        let t_star = -rel_pos.dot(rel_vel) / rel_speed2;
        if t_star < 0.0 || t_star > bb.tuning.evade_horizon {
            continue;
        }

        let closest = rel_pos + rel_vel * t_star;
        let safe_dist = bb.self_radius + p.radius + bb.tuning.evade_margin;
        if closest.length() <= safe_dist {
            let sooner = worst.map(|(t, _)| t_star < t).unwrap_or(true);
            if sooner {
                worst = Some((t_star, rel_vel.normalized_or_zero()));
            }
        }
    }

    worst.map(|(_, dir)| Danger { dir })
}

/// Intercept solve: where to shoot so an inertial projectile of speed
/// `projectile_speed` meets a linearly-moving target.
///
/// Returns `None` when no valid non-negative solution exists; callers fall
/// back to aiming at the target's current position. When two positive roots
/// exist the smaller (soonest interceptable point) is preferred.
pub fn lead_aim(
    self_pos: Vec2,
    target_pos: Vec2,
    target_vel: Vec2,
    projectile_speed: f32,
) -> Option<Vec2> {
    let r = target_pos - self_pos;
    let a = target_vel.dot(target_vel) - projectile_speed * projectile_speed;
    let b = 2.0 * r.dot(target_vel);
    let c = r.dot(r);

    let t = if a.abs() < EPS {
        // Degenerate linear case.
        if b.abs() < EPS {
            return None;
        }
        -c / b
    } else {
        let disc = b * b - 4.0 * a * c;
        if disc < 0.0 {
            return None;
        }
        let sdisc = disc.sqrt();
        let t1 = (-b - sdisc) / (2.0 * a);
        let t2 = (-b + sdisc) / (2.0 * a);
        let smaller = t1.min(t2);
        if smaller >= EPS {
            smaller
        } else {
            t1.max(t2)
        }
    };

    if t < EPS {
        return None;
    }
    Some(target_pos + target_vel * t)
}

/// Closeness-to-ideal-distance score: 1 at the midpoint of `[min, max]`,
/// falling to 0 at (and beyond) the band edges.
pub fn crown_score(dist: f32, min: f32, max: f32) -> f32 {
    if dist <= min || dist >= max {
        return 0.0;
    }
    let mid = (min + max) / 2.0;
    clamp01(1.0 - (dist - mid).abs() / (max - mid))
}
