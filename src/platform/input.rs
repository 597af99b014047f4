//! Input sources

use std::collections::VecDeque;

use crate::sim::TickInput;
use crate::ui::MenuAction;

/// Supplies one input snapshot per tick
pub trait InputSource {
    /// Snapshot for the coming gameplay tick
    fn poll(&mut self) -> TickInput;

    /// Called once before the first tick of every round
    fn begin_round(&mut self) {}

    /// Next menu action, if any, for the coming menu frame
    fn poll_menu(&mut self) -> Option<MenuAction> {
        None
    }
}

/// Replays a recorded sequence, then repeats a fallback snapshot
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    ticks: VecDeque<TickInput>,
    fallback: TickInput,
    menu: VecDeque<MenuAction>,
}

impl ScriptedInput {
    pub fn new(ticks: impl IntoIterator<Item = TickInput>) -> Self {
        Self {
            ticks: ticks.into_iter().collect(),
            ..Default::default()
        }
    }

    /// Snapshot returned once the script runs out
    pub fn then(mut self, fallback: TickInput) -> Self {
        self.fallback = fallback;
        self
    }

    /// Menu actions to replay, one per menu frame
    pub fn with_menu(mut self, actions: impl IntoIterator<Item = MenuAction>) -> Self {
        self.menu = actions.into_iter().collect();
        self
    }

    /// Append `count` copies of `input`
    pub fn hold(mut self, input: TickInput, count: usize) -> Self {
        self.ticks.extend(std::iter::repeat_n(input, count));
        self
    }

    pub fn remaining(&self) -> usize {
        self.ticks.len()
    }
}

impl InputSource for ScriptedInput {
    fn poll(&mut self) -> TickInput {
        self.ticks.pop_front().unwrap_or(self.fallback)
    }

    fn poll_menu(&mut self) -> Option<MenuAction> {
        self.menu.pop_front()
    }
}

/// Autopilot for the headless binary: weaves, thrusts in bursts and fires
/// steadily, then escapes to the menu after `max_ticks`.
#[derive(Debug, Clone)]
pub struct DemoPilot {
    tick: u64,
    max_ticks: u64,
    menu: VecDeque<MenuAction>,
}

impl DemoPilot {
    pub fn new(max_ticks: u64, menu: impl IntoIterator<Item = MenuAction>) -> Self {
        Self {
            tick: 0,
            max_ticks,
            menu: menu.into_iter().collect(),
        }
    }
}

impl InputSource for DemoPilot {
    fn begin_round(&mut self) {
        self.tick = 0;
    }

    fn poll(&mut self) -> TickInput {
        let t = self.tick;
        self.tick += 1;
        if t >= self.max_ticks {
            return TickInput {
                escape: true,
                ..Default::default()
            };
        }

        let weave_left = (t / 90) % 2 == 0;
        TickInput {
            fire: t % 8 == 0,
            steer_left: weave_left,
            steer_right: !weave_left,
            thrust: t % 120 < 20,
            ..Default::default()
        }
    }

    fn poll_menu(&mut self) -> Option<MenuAction> {
        self.menu.pop_front()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripted_replays_then_falls_back() {
        let fire = TickInput {
            fire: true,
            ..Default::default()
        };
        let escape = TickInput {
            escape: true,
            ..Default::default()
        };
        let mut input = ScriptedInput::new([fire]).hold(TickInput::default(), 2).then(escape);
        assert_eq!(input.remaining(), 3);
        assert!(input.poll().fire);
        assert_eq!(input.poll(), TickInput::default());
        assert_eq!(input.poll(), TickInput::default());
        assert!(input.poll().escape);
        assert!(input.poll().escape);
    }

    #[test]
    fn test_scripted_menu() {
        let mut input = ScriptedInput::default().with_menu([MenuAction::Start, MenuAction::Quit]);
        assert_eq!(input.poll_menu(), Some(MenuAction::Start));
        assert_eq!(input.poll_menu(), Some(MenuAction::Quit));
        assert_eq!(input.poll_menu(), None);
    }

    #[test]
    fn test_demo_pilot_escapes_after_budget() {
        let mut pilot = DemoPilot::new(10, []);
        for _ in 0..10 {
            assert!(!pilot.poll().escape);
        }
        assert!(pilot.poll().escape);
    }

    #[test]
    fn test_demo_pilot_budget_resets_each_round() {
        let mut pilot = DemoPilot::new(10, []);
        pilot.begin_round();
        // Round cut short (ship destroyed) partway through the budget
        for _ in 0..7 {
            pilot.poll();
        }

        pilot.begin_round();
        for _ in 0..10 {
            assert!(!pilot.poll().escape);
        }
        assert!(pilot.poll().escape);
    }
}
