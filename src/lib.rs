//! Space Rocks - A wraparound arena arcade shooter
//!
//! Core modules:
//! - `sim`: Fixed-tick simulation (player physics, bullets, asteroids, collisions)
//! - `game`: Round driver wiring the simulation to its injected capabilities
//! - `platform`: Input and frame-pacing capabilities
//! - `renderer`: Render set handed to the external renderer
//! - `tuning`: Data-driven game balance
//! - `ui`: Menu page-state shell

pub mod game;
pub mod platform;
pub mod renderer;
pub mod sim;
pub mod starfield;
pub mod tuning;
pub mod ui;

pub use game::{Game, RoundEnd};
pub use tuning::{Tuning, TuningError};

use glam::Vec2;

/// Game configuration constants (reference tuning)
pub mod consts {
    /// Simulation rate (ticks per second)
    pub const TICK_RATE_HZ: u32 = 60;

    /// Arena dimensions
    pub const ARENA_WIDTH: f32 = 800.0;
    pub const ARENA_HEIGHT: f32 = 600.0;

    /// Player defaults
    pub const PLAYER_ROTATION_SPEED: f32 = 4.0; // degrees per tick
    pub const PLAYER_ACCELERATION: f32 = 0.25;
    pub const PLAYER_FRICTION: f32 = 0.99;
    pub const PLAYER_MAX_SPEED: f32 = 8.0;

    /// Bullet defaults
    pub const BULLET_SPEED: f32 = 12.0;
    pub const BULLET_RADIUS: f32 = 4.0;

    /// Asteroid defaults
    pub const SPAWN_INTERVAL_TICKS: u32 = 60;
    pub const ASTEROID_SPAWN_Y: f32 = -80.0;
    pub const ASTEROID_MIN_SPEED: f32 = 1.0;
    pub const ASTEROID_MAX_SPEED: f32 = 3.0;
    /// Edge length of the square collision footprint
    pub const ASTEROID_SIZE: f32 = 80.0;
    /// How far below the arena an asteroid may drift before it is culled
    pub const ASTEROID_DESPAWN_MARGIN: f32 = 100.0;

    /// Round-over display (2 seconds at 60 Hz)
    pub const ROUND_OVER_TICKS: u32 = 2 * TICK_RATE_HZ;
}

/// Normalize an angle in degrees to [0, 360)
#[inline]
pub fn normalize_degrees(angle: f32) -> f32 {
    let wrapped = angle.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

/// Unit vector for a ship-style heading in screen space (y grows downward).
///
/// 0° points up (negative y) and angles increase counter-clockwise, so 90°
/// points left.
#[inline]
pub fn heading_vector(degrees: f32) -> Vec2 {
    let rad = degrees.to_radians();
    Vec2::new(-rad.sin(), -rad.cos())
}

/// Unit vector for a plain planar angle: 0° along +x, 90° along +y.
#[inline]
pub fn planar_vector(degrees: f32) -> Vec2 {
    let rad = degrees.to_radians();
    Vec2::new(rad.cos(), rad.sin())
}
