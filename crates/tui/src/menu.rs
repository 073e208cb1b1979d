use std::io::{self, Write};

use anyhow::Result;
use crossterm::cursor::{Hide, MoveToColumn, MoveUp, Show};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::style::{Color, Stylize};
use crossterm::terminal::{self, Clear, ClearType};
use crossterm::QueueableCommand;

use vegur_core::Rgb;

#[derive(Debug, Clone)]
pub struct MenuItem {
    pub label: String,
    pub color: Rgb,
    pub action: MenuAction,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuAction {
    Open(String),
    Quit,
}

impl MenuItem {
    pub fn new(label: impl Into<String>, color: Rgb, action: MenuAction) -> Self {
        Self {
            label: label.into(),
            color,
            action,
        }
    }
}

pub enum MenuOutcome {
    None,
    Select(MenuAction),
    Cancel,
}

/// Cursor state for the single-choice prompt. Key handling is separate
/// from drawing so it can be tested without a terminal.
#[derive(Debug, Clone)]
pub struct MenuState {
    pub prompt: String,
    pub items: Vec<MenuItem>,
    pub cursor: usize,
}

impl MenuState {
    pub fn new(prompt: &str, items: Vec<MenuItem>) -> Self {
        Self {
            prompt: prompt.to_string(),
            items,
            cursor: 0,
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> MenuOutcome {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return MenuOutcome::Cancel;
        }
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.cursor = self.cursor.saturating_sub(1);
                MenuOutcome::None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.cursor + 1 < self.items.len() {
                    self.cursor += 1;
                }
                MenuOutcome::None
            }
            KeyCode::Enter => match self.items.get(self.cursor) {
                Some(item) => MenuOutcome::Select(item.action.clone()),
                None => MenuOutcome::Cancel,
            },
            KeyCode::Esc | KeyCode::Char('q') => MenuOutcome::Cancel,
            _ => MenuOutcome::None,
        }
    }
}

/// Runs the prompt inline below whatever is already on screen. Returns
/// the selected action, or `None` when the prompt was cancelled --
/// cancellation is a normal outcome here, not an error.
pub fn run(mut state: MenuState) -> Result<Option<MenuAction>> {
    let mut out = io::stdout();
    terminal::enable_raw_mode()?;
    out.queue(Hide)?;
    let result = run_loop(&mut state, &mut out);
    // Restore the terminal on every exit path before surfacing errors.
    out.queue(Show)?;
    out.flush()?;
    terminal::disable_raw_mode()?;
    result
}

fn run_loop(state: &mut MenuState, out: &mut impl Write) -> Result<Option<MenuAction>> {
    draw(state, out, false)?;
    loop {
        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            match state.handle_key(key) {
                MenuOutcome::None => draw(state, out, true)?,
                MenuOutcome::Select(action) => return Ok(Some(action)),
                MenuOutcome::Cancel => return Ok(None),
            }
        }
    }
}

fn draw(state: &MenuState, out: &mut impl Write, repaint: bool) -> Result<()> {
    if repaint {
        out.queue(MoveUp(state.items.len() as u16 + 1))?;
    }
    out.queue(MoveToColumn(0))?;
    out.queue(Clear(ClearType::FromCursorDown))?;

    write!(out, "{} {}\r\n", "?".green().bold(), state.prompt.as_str().bold())?;
    for (i, item) in state.items.iter().enumerate() {
        let cursor = if i == state.cursor { "▸ " } else { "  " };
        let label = item.label.as_str().with(Color::from(item.color));
        if i == state.cursor {
            write!(out, "{}{}\r\n", cursor.green(), label.bold())?;
        } else {
            write!(out, "{cursor}{label}\r\n")?;
        }
    }
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn items() -> Vec<MenuItem> {
        vec![
            MenuItem::new(
                "GitHub",
                Rgb::new(0x58, 0xD7, 0x7E),
                MenuAction::Open("https://github.com/NSVEGUR".to_string()),
            ),
            MenuItem::new(
                "Portfolio",
                Rgb::new(0xCC, 0x94, 0x94),
                MenuAction::Open("https://nsvegur.me/".to_string()),
            ),
            MenuItem::new("Bye", Rgb::new(0xEF, 0x44, 0x44), MenuAction::Quit),
        ]
    }

    #[test]
    fn cursor_clamps_at_both_ends() {
        let mut state = MenuState::new("Navigate me?", items());
        assert!(matches!(state.handle_key(press(KeyCode::Up)), MenuOutcome::None));
        assert_eq!(state.cursor, 0);

        for _ in 0..10 {
            state.handle_key(press(KeyCode::Down));
        }
        assert_eq!(state.cursor, 2);
    }

    #[test]
    fn vim_keys_move_the_cursor() {
        let mut state = MenuState::new("Navigate me?", items());
        state.handle_key(press(KeyCode::Char('j')));
        assert_eq!(state.cursor, 1);
        state.handle_key(press(KeyCode::Char('k')));
        assert_eq!(state.cursor, 0);
    }

    #[test]
    fn enter_selects_the_cursor_item() {
        let mut state = MenuState::new("Navigate me?", items());
        state.handle_key(press(KeyCode::Down));
        match state.handle_key(press(KeyCode::Enter)) {
            MenuOutcome::Select(MenuAction::Open(url)) => {
                assert_eq!(url, "https://nsvegur.me/");
            }
            _ => panic!("expected a selection"),
        }
    }

    #[test]
    fn escape_and_ctrl_c_cancel() {
        let mut state = MenuState::new("Navigate me?", items());
        assert!(matches!(
            state.handle_key(press(KeyCode::Esc)),
            MenuOutcome::Cancel
        ));
        assert!(matches!(
            state.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            MenuOutcome::Cancel
        ));
    }

    #[test]
    fn quit_item_resolves_to_quit() {
        let mut state = MenuState::new("Navigate me?", items());
        state.handle_key(press(KeyCode::Down));
        state.handle_key(press(KeyCode::Down));
        assert!(matches!(
            state.handle_key(press(KeyCode::Enter)),
            MenuOutcome::Select(MenuAction::Quit)
        ));
    }
}
