//! Fixed timestep simulation tick
//!
//! Advances one round by exactly one tick.

use rand::Rng;

use super::collision::{player_hit, resolve_bullet_hits};
use super::player::Steer;
use super::projectile::advance_bullets;
use super::spawner::{Asteroid, advance_asteroids};
use super::state::{RoundPhase, RoundState};

/// Input snapshot for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Window closed / process should exit
    pub quit: bool,
    /// Leave the round and return to the menu
    pub escape: bool,
    /// Fire pressed this tick (edge, not level)
    pub fire: bool,
    /// Steer-left held
    pub steer_left: bool,
    /// Steer-right held
    pub steer_right: bool,
    /// Thrust held
    pub thrust: bool,
}

/// What the caller should do after a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Round continues; render the new state
    Continue,
    /// Player was hit this tick (or earlier)
    RoundOver,
    /// Escape pressed; discard the round
    Escaped,
    /// Quit requested
    Quit,
}

/// Advance the round by one fixed tick
pub fn tick<R: Rng>(state: &mut RoundState, input: &TickInput, rng: &mut R) -> TickOutcome {
    if state.phase == RoundPhase::RoundOver {
        return TickOutcome::RoundOver;
    }

    // Discrete events
    if input.quit {
        return TickOutcome::Quit;
    }
    if input.escape {
        return TickOutcome::Escaped;
    }
    if input.fire {
        state.fire();
    }

    state.time_ticks += 1;

    // Steering and thrust
    if input.steer_left {
        state.player.rotate(Steer::Left);
    }
    if input.steer_right {
        state.player.rotate(Steer::Right);
    }
    if input.thrust {
        state.player.thrust();
    }

    // Spawn
    if state.spawner.tick(state.tuning.spawn_interval_ticks) {
        let asteroid = Asteroid::random(0, &state.tuning, rng);
        let id = state.push_asteroid(asteroid);
        log::debug!("tick {}: spawned asteroid {}", state.time_ticks, id);
    }

    // Move transient entities, culling what left the arena
    let arena = state.arena();
    advance_asteroids(
        &mut state.asteroids,
        state.tuning.arena_height,
        state.tuning.asteroid_despawn_margin,
    );
    advance_bullets(&mut state.bullets, arena);

    // Player vs asteroids ends the round immediately
    let size = state.tuning.asteroid_size;
    if let Some(index) = player_hit(&state.player, &state.asteroids, size) {
        log::debug!(
            "tick {}: player hit by asteroid {}",
            state.time_ticks,
            state.asteroids[index].id
        );
        state.phase = RoundPhase::RoundOver;
        return TickOutcome::RoundOver;
    }

    // Bullets vs asteroids
    let removals = resolve_bullet_hits(&mut state.bullets, &mut state.asteroids, size);
    for kill in &removals.kills {
        log::debug!(
            "tick {}: bullet {} destroyed asteroid {}",
            state.time_ticks,
            kill.bullet_id,
            kill.asteroid_id
        );
    }

    state.player.update();

    TickOutcome::Continue
}
