//! Asteroid spawning and movement

use glam::Vec2;
use rand::Rng;

use super::kinematics::{Kinematic, impl_kinematic};
use crate::planar_vector;
use crate::tuning::Tuning;

/// An asteroid entity. `pos` is the top-left corner of its footprint.
#[derive(Debug, Clone)]
pub struct Asteroid {
    pub id: u32,
    pub pos: Vec2,
    pub vel: Vec2,
    /// Heading in degrees (planar convention: 0 along +x)
    pub heading: f32,
    pub speed: f32,
}

impl_kinematic!(Asteroid);

impl Asteroid {
    /// Roll a fresh asteroid just above the arena
    pub fn random<R: Rng>(id: u32, tuning: &Tuning, rng: &mut R) -> Self {
        let max_x = tuning.arena_width.floor() as i32;
        let x = rng.random_range(0..=max_x) as f32;
        let speed = if tuning.asteroid_min_speed < tuning.asteroid_max_speed {
            rng.random_range(tuning.asteroid_min_speed..=tuning.asteroid_max_speed)
        } else {
            tuning.asteroid_min_speed
        };
        let heading = rng.random_range(0.0..360.0);

        Self {
            id,
            pos: Vec2::new(x, tuning.asteroid_spawn_y),
            vel: planar_vector(heading) * speed,
            heading,
            speed,
        }
    }
}

/// Fixed-cadence asteroid emitter
#[derive(Debug, Clone, Default)]
pub struct Spawner {
    /// Ticks since the last spawn
    pub timer: u32,
}

impl Spawner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one tick. Returns true when an asteroid is due, which happens
    /// once the counter exceeds `interval` and resets it.
    pub fn tick(&mut self, interval: u32) -> bool {
        self.timer = self.timer.saturating_add(1);
        if self.timer > interval {
            self.timer = 0;
            true
        } else {
            false
        }
    }
}

/// Move every asteroid one tick and drop the ones that fell past the bottom margin
pub fn advance_asteroids(asteroids: &mut Vec<Asteroid>, arena_height: f32, margin: f32) {
    for asteroid in asteroids.iter_mut() {
        asteroid.integrate();
    }
    asteroids.retain(|a| a.pos.y <= arena_height + margin);
}
