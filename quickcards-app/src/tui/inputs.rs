use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use quickcards_core::Mode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    ToggleAdd,
    ToggleRemove,
    StartTest,
    ShowAnswer,
    NextCard,
    Submit,
    NextField,
    Type(char),
    Backspace,
    None,
}

/// Keys mean different things per mode: forms swallow printable chars.
pub fn map_event(ev: Event, mode: &Mode) -> Action {
    let Event::Key(KeyEvent { code, modifiers, kind, .. }) = ev else {
        return Action::None;
    };
    if kind != KeyEventKind::Press {
        return Action::None;
    }
    let ctrl = modifiers.contains(KeyModifiers::CONTROL);
    if ctrl && code == KeyCode::Char('c') {
        return Action::Quit;
    }

    match mode {
        Mode::Idle => match code {
            KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
            KeyCode::Char('a') => Action::ToggleAdd,
            KeyCode::Char('r') => Action::ToggleRemove,
            KeyCode::Char('t') => Action::StartTest,
            _ => Action::None,
        },
        Mode::Adding { .. } | Mode::Removing { .. } => {
            let adding = matches!(mode, Mode::Adding { .. });
            match code {
                KeyCode::Esc if adding => Action::ToggleAdd,
                KeyCode::Esc => Action::ToggleRemove,
                KeyCode::Char('r') if ctrl && adding => Action::ToggleRemove,
                KeyCode::Char('a') if ctrl && !adding => Action::ToggleAdd,
                KeyCode::Tab | KeyCode::BackTab if adding => Action::NextField,
                KeyCode::Enter => Action::Submit,
                KeyCode::Backspace => Action::Backspace,
                KeyCode::Char(c) if !ctrl => Action::Type(c),
                _ => Action::None,
            }
        }
        Mode::Testing(run) => match code {
            KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
            KeyCode::Char(' ') | KeyCode::Enter if !run.answer_shown => Action::ShowAnswer,
            KeyCode::Char('n') | KeyCode::Char(' ') | KeyCode::Enter if run.answer_shown => {
                Action::NextCard
            }
            _ => Action::None,
        },
    }
}
