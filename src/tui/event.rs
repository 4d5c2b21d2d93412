use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use std::time::Duration;

use crate::app::Result;
use crate::tui::app::ActivePane;

pub enum AppEvent {
    Key(KeyEvent),
    Tick,
}

pub struct EventHandler {
    tick_rate: Duration,
}

impl EventHandler {
    pub fn new(tick_rate: Duration) -> Self {
        Self { tick_rate }
    }

    pub fn next(&self) -> Result<AppEvent> {
        if event::poll(self.tick_rate)? {
            if let Event::Key(key) = event::read()? {
                return Ok(AppEvent::Key(key));
            }
        }
        Ok(AppEvent::Tick)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    FocusNext,
    FocusForm,
    FocusResult,
    InsertChar(char),
    Backspace,
    ClearInput,
    ToggleFormat,
    Submit,
    ScrollUp,
    ScrollDown,
    Copy,
    Download,
    OpenVideo,
    ToggleTheme,
    None,
}

/// Map a key to an action for the focused pane.
///
/// With the form focused, printable keys edit the URL buffer, so all
/// single-letter shortcuts live on the result pane; only Ctrl-chords are
/// global.
pub fn map_key(key: KeyEvent, pane: ActivePane) -> Action {
    // Global chords first
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Action::Quit,
            KeyCode::Char('t') => Action::ToggleTheme,
            KeyCode::Char('u') => Action::ClearInput,
            _ => Action::None,
        };
    }

    match key.code {
        KeyCode::Tab => Action::FocusNext,
        KeyCode::BackTab => Action::FocusNext,
        _ => match pane {
            ActivePane::Form => match key.code {
                KeyCode::Enter => Action::Submit,
                KeyCode::Backspace => Action::Backspace,
                KeyCode::Left | KeyCode::Right => Action::ToggleFormat,
                KeyCode::Esc => Action::FocusResult,
                KeyCode::Char(c) => Action::InsertChar(c),
                _ => Action::None,
            },
            ActivePane::Result => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
                KeyCode::Char('j') | KeyCode::Down => Action::ScrollDown,
                KeyCode::Char('k') | KeyCode::Up => Action::ScrollUp,
                KeyCode::Char('c') => Action::Copy,
                KeyCode::Char('d') => Action::Download,
                KeyCode::Char('o') => Action::OpenVideo,
                KeyCode::Char('t') => Action::ToggleTheme,
                KeyCode::Char('i') | KeyCode::Enter => Action::FocusForm,
                _ => Action::None,
            },
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    #[test]
    fn test_form_pane_types_text() {
        assert_eq!(
            map_key(key(KeyCode::Char('q')), ActivePane::Form),
            Action::InsertChar('q')
        );
        assert_eq!(
            map_key(key(KeyCode::Char('c')), ActivePane::Form),
            Action::InsertChar('c')
        );
        assert_eq!(
            map_key(key(KeyCode::Backspace), ActivePane::Form),
            Action::Backspace
        );
    }

    #[test]
    fn test_form_pane_submits_on_enter() {
        assert_eq!(map_key(key(KeyCode::Enter), ActivePane::Form), Action::Submit);
    }

    #[test]
    fn test_result_pane_shortcuts() {
        assert_eq!(map_key(key(KeyCode::Char('q')), ActivePane::Result), Action::Quit);
        assert_eq!(map_key(key(KeyCode::Char('c')), ActivePane::Result), Action::Copy);
        assert_eq!(
            map_key(key(KeyCode::Char('d')), ActivePane::Result),
            Action::Download
        );
        assert_eq!(
            map_key(key(KeyCode::Char('o')), ActivePane::Result),
            Action::OpenVideo
        );
    }

    #[test]
    fn test_global_chords_work_in_both_panes() {
        for pane in [ActivePane::Form, ActivePane::Result] {
            assert_eq!(map_key(ctrl('c'), pane), Action::Quit);
            assert_eq!(map_key(ctrl('t'), pane), Action::ToggleTheme);
            assert_eq!(map_key(key(KeyCode::Tab), pane), Action::FocusNext);
        }
    }
}
