//! Round driver
//!
//! `Game` is the explicit context the simulation runs in: it owns the injected
//! input, renderer, pacer and RNG, plus the tuning. Rounds are created fresh
//! inside `play_round` and dropped when it returns; only the tuning and the
//! RNG stream carry over between rounds.

use rand::Rng;

use crate::platform::{InputSource, Pacer};
use crate::renderer::{Frame, Renderer};
use crate::sim::{RoundState, TickOutcome, tick};
use crate::tuning::Tuning;
use crate::ui::{MenuCommand, MenuShell};

/// How a round ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundEnd {
    /// Player hit an asteroid after `ticks` ticks
    Destroyed { ticks: u64 },
    /// Player escaped to the menu after `ticks` ticks
    Escaped { ticks: u64 },
    /// Quit requested; the host should exit
    Quit,
}

/// Simulation context with injected capabilities
pub struct Game<I, R, P, G> {
    tuning: Tuning,
    input: I,
    renderer: R,
    pacer: P,
    rng: G,
}

impl<I, R, P, G> Game<I, R, P, G>
where
    I: InputSource,
    R: Renderer,
    P: Pacer,
    G: Rng,
{
    pub fn new(tuning: Tuning, input: I, renderer: R, pacer: P, rng: G) -> Self {
        Self {
            tuning,
            input,
            renderer,
            pacer,
            rng,
        }
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Run one round to completion
    pub fn play_round(&mut self) -> RoundEnd {
        let mut state = RoundState::new(self.tuning.clone());
        self.input.begin_round();
        log::info!("Round started");

        loop {
            self.pacer.wait_for_next_tick();
            let input = self.input.poll();

            match tick(&mut state, &input, &mut self.rng) {
                TickOutcome::Continue => {
                    self.renderer.draw_frame(&Frame::of(&state));
                }
                TickOutcome::RoundOver => {
                    self.renderer.draw_frame(&Frame::of(&state));
                    log::info!("Round over after {} ticks", state.time_ticks);
                    self.round_over_pause();
                    return RoundEnd::Destroyed {
                        ticks: state.time_ticks,
                    };
                }
                TickOutcome::Escaped => {
                    log::info!("Round abandoned after {} ticks", state.time_ticks);
                    return RoundEnd::Escaped {
                        ticks: state.time_ticks,
                    };
                }
                TickOutcome::Quit => {
                    log::info!("Quit requested");
                    return RoundEnd::Quit;
                }
            }
        }
    }

    /// Fixed-length, non-interactive round-over display
    fn round_over_pause(&mut self) {
        for remaining in (0..self.tuning.round_over_ticks).rev() {
            self.renderer.draw_round_over(remaining);
            self.pacer.wait_for_next_tick();
        }
    }

    /// Drive the menu shell until the player quits. Returns every round's end.
    pub fn run(&mut self) -> Vec<RoundEnd> {
        let mut menu = MenuShell::new(
            self.tuning.arena_width,
            self.tuning.arena_height,
            &mut self.rng,
        );
        let mut rounds = Vec::new();

        loop {
            self.pacer.wait_for_next_tick();
            let view = menu.frame();
            self.renderer.draw_menu(&view);

            let Some(action) = self.input.poll_menu() else {
                continue;
            };
            match menu.handle(action) {
                Some(MenuCommand::StartRound) => {
                    let end = self.play_round();
                    rounds.push(end);
                    if end == RoundEnd::Quit {
                        return rounds;
                    }
                }
                Some(MenuCommand::Quit) => return rounds,
                None => {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::{ScriptedInput, Unpaced};
    use crate::renderer::LogRenderer;
    use crate::sim::TickInput;
    use crate::ui::MenuAction;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn game(input: ScriptedInput) -> Game<ScriptedInput, LogRenderer, Unpaced, Pcg32> {
        Game::new(
            Tuning::default(),
            input,
            LogRenderer::new(),
            Unpaced,
            Pcg32::seed_from_u64(2024),
        )
    }

    #[test]
    fn test_escape_ends_round() {
        let escape = TickInput {
            escape: true,
            ..Default::default()
        };
        let input = ScriptedInput::default().hold(TickInput::default(), 5).then(escape);
        let mut game = game(input);
        assert_eq!(game.play_round(), RoundEnd::Escaped { ticks: 5 });
        assert_eq!(game.renderer().frames(), 5);
    }

    /// Counts round starts and escapes on the first tick of each round
    #[derive(Default)]
    struct RoundCounter {
        rounds: u32,
        menu: Vec<MenuAction>,
    }

    impl InputSource for RoundCounter {
        fn begin_round(&mut self) {
            self.rounds += 1;
        }

        fn poll(&mut self) -> TickInput {
            TickInput {
                escape: true,
                ..Default::default()
            }
        }

        fn poll_menu(&mut self) -> Option<MenuAction> {
            if self.menu.is_empty() {
                None
            } else {
                Some(self.menu.remove(0))
            }
        }
    }

    #[test]
    fn test_input_told_about_each_round() {
        let input = RoundCounter {
            menu: vec![MenuAction::Start, MenuAction::Start, MenuAction::Quit],
            ..Default::default()
        };
        let mut game = Game::new(
            Tuning::default(),
            input,
            LogRenderer::new(),
            Unpaced,
            Pcg32::seed_from_u64(1),
        );
        assert_eq!(game.run().len(), 2);
        assert_eq!(game.input.rounds, 2);
    }

    #[test]
    fn test_quit_ends_run() {
        let quit = TickInput {
            quit: true,
            ..Default::default()
        };
        let input = ScriptedInput::new([quit]).with_menu([MenuAction::Start, MenuAction::Credits]);
        let mut game = game(input);
        assert_eq!(game.run(), vec![RoundEnd::Quit]);
    }

    #[test]
    fn test_menu_quit_without_playing() {
        let input = ScriptedInput::default().with_menu([MenuAction::Options, MenuAction::Back, MenuAction::Quit]);
        let mut game = game(input);
        assert!(game.run().is_empty());
    }
}
