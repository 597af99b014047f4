//! The player's ship: steering, thrust, friction and screen wrap

use glam::Vec2;

use super::kinematics::{Kinematic, impl_kinematic};
use crate::tuning::Tuning;
use crate::{heading_vector, normalize_degrees};

/// Steering direction for a single tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Steer {
    /// Counter-clockwise (angle increases)
    Left,
    /// Clockwise (angle decreases)
    Right,
}

/// The player's ship
#[derive(Debug, Clone)]
pub struct Player {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Facing angle in degrees, [0, 360). 0 points up.
    pub angle: f32,
    rotation_speed: f32,
    acceleration: f32,
    friction: f32,
    max_speed: f32,
    arena: Vec2,
}

impl_kinematic!(Player);

impl Player {
    /// Spawn at the arena centre, facing up, at rest
    pub fn new(tuning: &Tuning) -> Self {
        let arena = Vec2::new(tuning.arena_width, tuning.arena_height);
        Self {
            pos: (arena / 2.0).floor(),
            vel: Vec2::ZERO,
            angle: 0.0,
            rotation_speed: tuning.player_rotation_speed,
            acceleration: tuning.player_acceleration,
            friction: tuning.player_friction,
            max_speed: tuning.player_max_speed,
            arena,
        }
    }

    pub fn max_speed(&self) -> f32 {
        self.max_speed
    }

    pub fn speed(&self) -> f32 {
        self.vel.length()
    }

    /// Turn by one tick's worth of rotation
    pub fn rotate(&mut self, direction: Steer) {
        let delta = match direction {
            Steer::Left => self.rotation_speed,
            Steer::Right => -self.rotation_speed,
        };
        self.angle = normalize_degrees(self.angle + delta);
    }

    /// Accelerate along the facing direction, capping speed at `max_speed`.
    ///
    /// The cap rescales the whole vector so direction is preserved.
    pub fn thrust(&mut self) {
        self.vel += heading_vector(self.angle) * self.acceleration;

        let speed = self.vel.length();
        if speed > self.max_speed {
            self.vel *= self.max_speed / speed;
        }
    }

    /// Move, damp, then wrap around the arena edges
    pub fn update(&mut self) {
        self.integrate();
        self.vel *= self.friction;
        self.wrap();
    }

    /// Teleport to the opposite edge once a coordinate leaves the arena.
    /// A coordinate sitting exactly on 0 or on the edge is left alone.
    fn wrap(&mut self) {
        if self.pos.x < 0.0 {
            self.pos.x = self.arena.x;
        }
        if self.pos.x > self.arena.x {
            self.pos.x = 0.0;
        }
        if self.pos.y < 0.0 {
            self.pos.y = self.arena.y;
        }
        if self.pos.y > self.arena.y {
            self.pos.y = 0.0;
        }
    }
}
