//! Fixed-tick simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - Fixed timestep only (one call to `tick` = one frame)
//! - Randomness only through the injected `Rng`
//! - Stable iteration order (insertion order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod kinematics;
pub mod player;
pub mod projectile;
pub mod spawner;
pub mod state;
pub mod tick;

pub use collision::{Footprint, Kill, Removals, find_bullet_hits, player_hit, resolve_bullet_hits};
pub use kinematics::Kinematic;
pub use player::{Player, Steer};
pub use projectile::{Bullet, advance_bullets};
pub use spawner::{Asteroid, Spawner, advance_asteroids};
pub use state::{RoundPhase, RoundState};
pub use tick::{TickInput, TickOutcome, tick};
