use crate::app::actions::Action;
use crate::app::events::{Event, InputEvent};
use crate::app::state::{AppState, Screen};
use crossterm::event::{
    self, Event as CtEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEventKind,
};
use tokio::sync::mpsc;

pub fn spawn_input_task(tx: mpsc::Sender<Event>, mouse_enabled: bool) {
    tokio::task::spawn_blocking(move || {
        loop {
            if event::poll(std::time::Duration::from_millis(250)).unwrap_or(false) {
                let ev = match event::read() {
                    Ok(CtEvent::Key(k)) if k.kind == KeyEventKind::Press => InputEvent::Key(k),
                    Ok(CtEvent::Mouse(m)) if mouse_enabled => InputEvent::Mouse(m),
                    Ok(CtEvent::Resize(_, _)) => InputEvent::Resize,
                    Ok(_) | Err(_) => continue,
                };
                if tx.blocking_send(Event::Input(ev)).is_err() {
                    break;
                }
            } else if tx.is_closed() {
                break;
            }
        }
    });
}

pub fn map_input_to_action(state: &AppState, ev: InputEvent) -> Option<Action> {
    match ev {
        InputEvent::Resize => Some(Action::Resize),
        InputEvent::Mouse(m) => match m.kind {
            MouseEventKind::ScrollUp => Some(Action::ListUp),
            MouseEventKind::ScrollDown => Some(Action::ListDown),
            _ => None,
        },
        InputEvent::Key(k) => match state.screen {
            Screen::Picker if state.picker.is_typing() => handle_hex_input(k),
            Screen::Picker => handle_picker_screen(k),
            Screen::Favorites => handle_favorites_screen(k),
            Screen::Themes => handle_themes_screen(k),
            Screen::Help => handle_common(k),
        },
    }
}

/// Keys shared by every screen outside text entry.
fn handle_common(k: KeyEvent) -> Option<Action> {
    match k.code {
        // Quit
        KeyCode::Char('q') => Some(Action::Quit),
        KeyCode::Esc => Some(Action::Quit),

        // Screen switching - Tab cycles through screens
        KeyCode::Tab => Some(Action::NextScreen),
        KeyCode::BackTab => Some(Action::PrevScreen),
        KeyCode::Char('1') => Some(Action::SetScreen(Screen::Picker)),
        KeyCode::Char('2') => Some(Action::SetScreen(Screen::Favorites)),
        KeyCode::Char('3') => Some(Action::SetScreen(Screen::Themes)),
        KeyCode::Char('?') | KeyCode::F(1) => Some(Action::SetScreen(Screen::Help)),

        // Header toggles
        KeyCode::Char('L') => Some(Action::ToggleLanguage),
        KeyCode::Char('T') => Some(Action::ToggleTheme),

        KeyCode::Char('/') | KeyCode::Char('i') => Some(Action::FocusInput),
        KeyCode::Char('s') => Some(Action::SaveFavorite),
        KeyCode::Char('S') => Some(Action::Share),
        KeyCode::Char('r') => Some(Action::RandomColor),

        KeyCode::Up | KeyCode::Char('k') => Some(Action::ListUp),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::ListDown),
        _ => None,
    }
}

fn handle_hex_input(k: KeyEvent) -> Option<Action> {
    match k.code {
        KeyCode::Esc | KeyCode::Enter | KeyCode::Down => Some(Action::Activate),
        KeyCode::Tab => Some(Action::NextScreen),
        KeyCode::BackTab => Some(Action::PrevScreen),
        KeyCode::Backspace => Some(Action::Backspace),
        KeyCode::Char('u') if k.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(Action::ClearInput)
        }
        KeyCode::Char('c') if k.modifiers.contains(KeyModifiers::CONTROL) => Some(Action::Quit),
        KeyCode::Char(c) if !k.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(Action::InputChar(c))
        }
        _ => None,
    }
}

fn handle_picker_screen(k: KeyEvent) -> Option<Action> {
    match k.code {
        KeyCode::Left | KeyCode::Char('h') => Some(Action::Nudge(-1)),
        KeyCode::Right | KeyCode::Char('l') => Some(Action::Nudge(1)),
        KeyCode::Char('[') => Some(Action::Nudge(-10)),
        KeyCode::Char(']') => Some(Action::Nudge(10)),
        KeyCode::Char('p') => Some(Action::TogglePanel),
        KeyCode::Char('c') => Some(Action::Copy),
        KeyCode::Enter => Some(Action::Activate),
        _ => handle_common(k),
    }
}

fn handle_favorites_screen(k: KeyEvent) -> Option<Action> {
    match k.code {
        KeyCode::Enter => Some(Action::Activate),
        KeyCode::Char('c') => Some(Action::Copy),
        KeyCode::Char('d') | KeyCode::Delete => Some(Action::RemoveFavorite),
        _ => handle_common(k),
    }
}

fn handle_themes_screen(k: KeyEvent) -> Option<Action> {
    match k.code {
        KeyCode::Left | KeyCode::Char('h') => Some(Action::Nudge(-1)),
        KeyCode::Right | KeyCode::Char('l') => Some(Action::Nudge(1)),
        KeyCode::Enter => Some(Action::Activate),
        KeyCode::Char('c') => Some(Action::Copy),
        _ => handle_common(k),
    }
}
