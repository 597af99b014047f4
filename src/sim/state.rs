//! Round state and core simulation types
//!
//! Everything that lives for exactly one round lives here.

use glam::Vec2;

use super::player::Player;
use super::projectile::Bullet;
use super::spawner::{Asteroid, Spawner};
use crate::tuning::Tuning;

/// Current phase of a round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundPhase {
    /// Active gameplay
    Running,
    /// Player was hit; terminal for this round
    RoundOver,
}

/// Complete state of one round
#[derive(Debug, Clone)]
pub struct RoundState {
    /// Tuning the round was started with
    pub tuning: Tuning,
    /// Current phase
    pub phase: RoundPhase,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Player ship
    pub player: Player,
    /// Live bullets, oldest first
    pub bullets: Vec<Bullet>,
    /// Live asteroids, oldest first
    pub asteroids: Vec<Asteroid>,
    /// Asteroid cadence timer
    pub spawner: Spawner,
    /// Next entity ID
    next_id: u32,
}

impl RoundState {
    /// Fresh round: centred player, no bullets or asteroids, timer at zero
    pub fn new(tuning: Tuning) -> Self {
        Self {
            player: Player::new(&tuning),
            tuning,
            phase: RoundPhase::Running,
            time_ticks: 0,
            bullets: Vec::new(),
            asteroids: Vec::new(),
            spawner: Spawner::new(),
            next_id: 1,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);
        id
    }

    pub fn arena(&self) -> Vec2 {
        Vec2::new(self.tuning.arena_width, self.tuning.arena_height)
    }

    pub fn is_running(&self) -> bool {
        self.phase == RoundPhase::Running
    }

    /// Fire a bullet from the ship's current position and heading
    pub fn fire(&mut self) {
        let id = self.next_entity_id();
        let bullet = Bullet::spawn(id, self.player.pos, self.player.angle, &self.tuning);
        self.bullets.push(bullet);
    }

    /// Add an asteroid (used by the spawner and by tests placing obstacles)
    pub fn push_asteroid(&mut self, mut asteroid: Asteroid) -> u32 {
        let id = self.next_entity_id();
        asteroid.id = id;
        self.asteroids.push(asteroid);
        id
    }
}
