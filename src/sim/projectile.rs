//! Bullets: spawning, movement and arena culling

use glam::Vec2;

use super::kinematics::{Kinematic, impl_kinematic};
use crate::heading_vector;
use crate::tuning::Tuning;

/// A bullet entity
#[derive(Debug, Clone)]
pub struct Bullet {
    pub id: u32,
    pub pos: Vec2,
    pub vel: Vec2,
    /// Visual radius; collisions use the point position
    pub radius: f32,
}

impl_kinematic!(Bullet);

impl Bullet {
    /// Fire from `origin` along `angle` (same heading convention as the ship)
    pub fn spawn(id: u32, origin: Vec2, angle: f32, tuning: &Tuning) -> Self {
        Self {
            id,
            pos: origin,
            vel: heading_vector(angle) * tuning.bullet_speed,
            radius: tuning.bullet_radius,
        }
    }

    /// Strictly inside the open arena rectangle
    pub fn in_arena(&self, arena: Vec2) -> bool {
        self.pos.x > 0.0 && self.pos.x < arena.x && self.pos.y > 0.0 && self.pos.y < arena.y
    }
}

/// Move every bullet one tick and drop the ones on or past the arena edge
pub fn advance_bullets(bullets: &mut Vec<Bullet>, arena: Vec2) {
    for bullet in bullets.iter_mut() {
        bullet.integrate();
    }
    bullets.retain(|b| b.in_arena(arena));
}
