//! Rendering boundary
//!
//! The simulation never draws. Each tick it hands a [`Frame`] to whatever
//! [`Renderer`] the host injected; sprites, fonts and pixel formats stay on
//! the other side of this trait.

use glam::Vec2;

use crate::sim::{Asteroid, Bullet, RoundState};
use crate::ui::MenuView;

/// Everything needed to draw one gameplay frame
#[derive(Debug, Clone, Copy)]
pub struct Frame<'a> {
    pub tick: u64,
    pub player_pos: Vec2,
    /// Degrees, 0 = up, counter-clockwise
    pub player_angle: f32,
    pub bullets: &'a [Bullet],
    pub asteroids: &'a [Asteroid],
    /// Asteroid footprint edge length, for sprite scaling
    pub asteroid_size: f32,
}

impl<'a> Frame<'a> {
    pub fn of(state: &'a RoundState) -> Self {
        Self {
            tick: state.time_ticks,
            player_pos: state.player.pos,
            player_angle: state.player.angle,
            bullets: &state.bullets,
            asteroids: &state.asteroids,
            asteroid_size: state.tuning.asteroid_size,
        }
    }
}

/// Drawing capability supplied by the host
pub trait Renderer {
    /// Draw one gameplay frame
    fn draw_frame(&mut self, frame: &Frame<'_>);

    /// Draw the round-over screen; called once per tick of the pause
    fn draw_round_over(&mut self, _ticks_remaining: u32) {}

    /// Draw a menu page
    fn draw_menu(&mut self, _view: &MenuView<'_>) {}
}

/// Headless renderer that reports frames through `log`
#[derive(Debug, Default)]
pub struct LogRenderer {
    frames: u64,
}

impl LogRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of gameplay frames drawn so far
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl Renderer for LogRenderer {
    fn draw_frame(&mut self, frame: &Frame<'_>) {
        self.frames += 1;
        log::trace!(
            "frame {}: ship ({:.1}, {:.1}) @ {:.0}deg, {} bullets, {} asteroids",
            frame.tick,
            frame.player_pos.x,
            frame.player_pos.y,
            frame.player_angle,
            frame.bullets.len(),
            frame.asteroids.len()
        );
    }

    fn draw_round_over(&mut self, ticks_remaining: u32) {
        if ticks_remaining == 0 {
            log::info!("GAME OVER");
        }
    }

    fn draw_menu(&mut self, view: &MenuView<'_>) {
        log::debug!("menu: {:?} ({} lines)", view.screen, view.lines.len());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tuning::Tuning;

    #[test]
    fn test_frame_mirrors_state() {
        let mut state = RoundState::new(Tuning::default());
        state.fire();
        let frame = Frame::of(&state);
        assert_eq!(frame.player_pos, state.player.pos);
        assert_eq!(frame.bullets.len(), 1);
        assert!(frame.asteroids.is_empty());
        assert_eq!(frame.asteroid_size, 80.0);
    }

    #[test]
    fn test_log_renderer_counts_frames() {
        let state = RoundState::new(Tuning::default());
        let mut renderer = LogRenderer::new();
        renderer.draw_frame(&Frame::of(&state));
        renderer.draw_frame(&Frame::of(&state));
        assert_eq!(renderer.frames(), 2);
    }
}
