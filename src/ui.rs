//! Menu shell
//!
//! Page-state machine around the game: main menu, an options placeholder and
//! credits. The only state is which page is showing.

use rand::Rng;

use crate::starfield::{Star, Starfield};

/// Which page is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    MainMenu,
    Options,
    Credits,
}

impl Screen {
    pub fn title(&self) -> &'static str {
        match self {
            Screen::MainMenu => "SPACE",
            Screen::Options => "OPTIONS",
            Screen::Credits => "CREDITS",
        }
    }

    pub fn lines(&self) -> &'static [&'static str] {
        match self {
            Screen::MainMenu => &[],
            Screen::Options => &["OPTIONS COMING SOON!"],
            Screen::Credits => &["Made by Alec", "Thanks for playing!"],
        }
    }
}

/// A button press or key on a menu page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Start,
    Options,
    Credits,
    Back,
    Quit,
}

/// Something the host must act on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuCommand {
    StartRound,
    Quit,
}

/// What the renderer needs to draw a menu page
#[derive(Debug, Clone, Copy)]
pub struct MenuView<'a> {
    pub screen: Screen,
    pub title: &'static str,
    pub lines: &'static [&'static str],
    /// Backdrop stars (main menu only)
    pub stars: &'a [Star],
}

/// The menu page-state machine
#[derive(Debug, Clone)]
pub struct MenuShell {
    screen: Screen,
    starfield: Starfield,
}

impl MenuShell {
    pub fn new<R: Rng>(arena_width: f32, arena_height: f32, rng: &mut R) -> Self {
        Self {
            screen: Screen::MainMenu,
            starfield: Starfield::new(arena_width, arena_height, rng),
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// Apply one action; returns a command when the host has to leave the menu
    pub fn handle(&mut self, action: MenuAction) -> Option<MenuCommand> {
        match (self.screen, action) {
            (_, MenuAction::Quit) => return Some(MenuCommand::Quit),
            (Screen::MainMenu, MenuAction::Start) => return Some(MenuCommand::StartRound),
            (Screen::MainMenu, MenuAction::Options) => self.screen = Screen::Options,
            (Screen::MainMenu, MenuAction::Credits) => self.screen = Screen::Credits,
            (Screen::Options | Screen::Credits, MenuAction::Back) => self.screen = Screen::MainMenu,
            _ => {}
        }
        None
    }

    /// Advance the backdrop one frame and describe the page to draw
    pub fn frame(&mut self) -> MenuView<'_> {
        let stars: &[Star] = if self.screen == Screen::MainMenu {
            self.starfield.twinkle();
            self.starfield.stars()
        } else {
            &[]
        };
        MenuView {
            screen: self.screen,
            title: self.screen.title(),
            lines: self.screen.lines(),
            stars,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn shell() -> MenuShell {
        MenuShell::new(800.0, 600.0, &mut Pcg32::seed_from_u64(3))
    }

    #[test]
    fn test_page_transitions() {
        let mut menu = shell();
        assert_eq!(menu.handle(MenuAction::Credits), None);
        assert_eq!(menu.screen(), Screen::Credits);
        // Start does nothing off the main menu
        assert_eq!(menu.handle(MenuAction::Start), None);
        assert_eq!(menu.handle(MenuAction::Back), None);
        assert_eq!(menu.screen(), Screen::MainMenu);

        menu.handle(MenuAction::Options);
        assert_eq!(menu.screen(), Screen::Options);
        menu.handle(MenuAction::Back);

        assert_eq!(menu.handle(MenuAction::Start), Some(MenuCommand::StartRound));
    }

    #[test]
    fn test_quit_from_any_page() {
        let mut menu = shell();
        menu.handle(MenuAction::Options);
        assert_eq!(menu.handle(MenuAction::Quit), Some(MenuCommand::Quit));
    }

    #[test]
    fn test_stars_only_on_main_menu() {
        let mut menu = shell();
        assert_eq!(menu.frame().stars.len(), 150);
        menu.handle(MenuAction::Credits);
        let view = menu.frame();
        assert!(view.stars.is_empty());
        assert_eq!(view.lines, &["Made by Alec", "Thanks for playing!"]);
    }
}
