use crate::tui::{inputs::{map_event, Action}, views};
use crossterm::{
    event::{self},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use quickcards_core::{Mode, SessionController};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{stdout, Stdout};
use tracing::{debug, warn};

type Tty = Terminal<CrosstermBackend<Stdout>>;

/// Raw mode + alternate screen for as long as it lives; restored on drop,
/// including when the main loop bails with an error.
struct Screen {
    terminal: Tty,
}

impl Screen {
    fn enter() -> anyhow::Result<Self> {
        enable_raw_mode()?;
        let mut out = stdout();
        if let Err(e) = execute!(out, EnterAlternateScreen) {
            disable_raw_mode().ok();
            return Err(e.into());
        }
        Ok(Self { terminal: Terminal::new(CrosstermBackend::new(out))? })
    }
}

impl Drop for Screen {
    fn drop(&mut self) {
        let restored = disable_raw_mode()
            .and_then(|_| execute!(self.terminal.backend_mut(), LeaveAlternateScreen))
            .and_then(|_| self.terminal.show_cursor());
        if let Err(e) = restored {
            warn!(error = %e, "terminal restore failed");
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Term,
    Definition,
}

pub struct TuiApp {
    pub session: SessionController,
    focus: Field,
}

impl TuiApp {
    pub fn new(session: SessionController) -> Self {
        Self { session, focus: Field::Term }
    }

    pub fn focus(&self) -> Field {
        self.focus
    }

    pub fn run(&mut self) -> anyhow::Result<()> {
        let mut screen = Screen::enter()?;
        self.mainloop(&mut screen.terminal)
    }

    fn mainloop(&mut self, terminal: &mut Tty) -> anyhow::Result<()> {
        loop {
            terminal.draw(|f| {
                let area = f.size();
                views::draw_ui(f, area, &self.session, self.focus);
            })?;

            if event::poll(std::time::Duration::from_millis(100))? {
                let action = map_event(event::read()?, self.session.mode());
                if !self.handle(action) {
                    break;
                }
            }
        }
        Ok(())
    }

    /// Applies one action; returns `false` when the app should exit.
    pub fn handle(&mut self, action: Action) -> bool {
        if action != Action::None {
            debug!(?action, "tui action");
        }
        match action {
            Action::Quit => return false,
            Action::ToggleAdd => { self.session.toggle_add(); self.focus = Field::Term; }
            Action::ToggleRemove => { self.session.toggle_remove(); self.focus = Field::Term; }
            Action::StartTest => { self.session.start_test(); }
            Action::ShowAnswer => { self.session.show_answer(); }
            Action::NextCard => { self.session.next_card(); }
            Action::Submit => { self.session.submit_pending(); self.focus = Field::Term; }
            Action::NextField => {
                self.focus = match self.focus { Field::Term => Field::Definition, Field::Definition => Field::Term };
            }
            Action::Type(c) => self.edit_focused(|s| s.push(c)),
            Action::Backspace => self.edit_focused(|s| { s.pop(); }),
            Action::None => {}
        }
        true
    }

    fn edit_focused(&mut self, f: impl FnOnce(&mut String)) {
        let (mut text, field) = match (self.session.mode(), self.focus) {
            (Mode::Adding { definition, .. }, Field::Definition) => (definition.clone(), Field::Definition),
            (Mode::Adding { term, .. }, _) | (Mode::Removing { term }, _) => (term.clone(), Field::Term),
            _ => return,
        };
        f(&mut text);
        match field {
            Field::Term => self.session.edit_term(text),
            Field::Definition => self.session.edit_definition(text),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_str(app: &mut TuiApp, s: &str) {
        for c in s.chars() {
            app.handle(Action::Type(c));
        }
    }

    #[test]
    fn add_form_typing_and_submit() {
        let mut app = TuiApp::new(SessionController::with_seed(1));
        app.handle(Action::ToggleAdd);
        type_str(&mut app, "holx");
        app.handle(Action::Backspace);
        type_str(&mut app, "a");
        app.handle(Action::NextField);
        assert_eq!(app.focus(), Field::Definition);
        type_str(&mut app, "hello");
        assert_eq!(
            app.session.mode(),
            &Mode::Adding { term: "hola".into(), definition: "hello".into() }
        );

        assert!(app.handle(Action::Submit));
        assert_eq!(app.session.status(), "Card Added. Total Cards: 1");
        assert_eq!(app.focus(), Field::Term);
    }

    #[test]
    fn remove_form_then_test_run() {
        let mut app = TuiApp::new(SessionController::with_seed(1));
        app.session.submit_add("a", "1");
        app.handle(Action::ToggleRemove);
        type_str(&mut app, "zz");
        app.handle(Action::Submit);
        assert_eq!(app.session.status(), "No card found with term 'zz'.");

        app.handle(Action::StartTest);
        assert!(app.session.is_testing());
        app.handle(Action::ShowAnswer);
        app.handle(Action::NextCard);
        assert_eq!(app.session.status(), "Test completed.");
        assert!(!app.handle(Action::Quit));
    }
}
