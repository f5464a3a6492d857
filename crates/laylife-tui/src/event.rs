//! Semantic application events: crossterm key events mapped to a
//! widget-agnostic vocabulary so widgets never touch crossterm directly.
//!
//! # Usage
//!
//! In the main event loop, call [`to_app_event`] on every [`crossterm::event::Event`]
//! and match on the returned [`AppEvent`] instead of crossterm types.
//!
//! # Keybindings
//!
//! The query input always has focus, so every printable character types
//! into it. Navigation lives on keys that cannot be typed.
//!
//! | Key(s)                  | Event                      |
//! |-------------------------|----------------------------|
//! | `Ctrl+c`                | `Quit`                     |
//! | `Esc`                   | `Escape`                   |
//! | `F1`                    | `Help`                     |
//! | `↑`, `Ctrl+p`           | `Nav(Up)`                  |
//! | `↓`, `Ctrl+n`           | `Nav(Down)`                |
//! | `←` / `→`               | `Nav(Left)` / `Nav(Right)` |
//! | `Home` / `End`          | `Home` / `End`             |
//! | `Ctrl+u`                | `ClearQuery`               |
//! | printable char          | `Char(c)`                  |
//! | `Backspace`             | `Backspace`                |
//! | `Enter`                 | `Enter`                    |
//! | terminal resize         | `Resize(w, h)`             |

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};

/// Direction for result selection (up/down) and text cursor (left/right).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// A semantic application event derived from a raw crossterm [`Event`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// Leave the palette without picking a result.
    Quit,
    /// Clear the query, or close the palette when it is already empty.
    Escape,
    /// Toggle the help popup.
    Help,
    /// Move the selection (up/down) or the text cursor (left/right).
    Nav(Direction),
    /// Move the text cursor to the start of the input.
    Home,
    /// Move the text cursor to the end of the input.
    End,
    /// Erase the whole query.
    ClearQuery,
    /// A printable character forwarded to the active text input.
    Char(char),
    /// Delete the character before the cursor in the active text input.
    Backspace,
    /// Pick the selected result, or run the typed command.
    Enter,
    /// The terminal was resized to the given (width, height).
    Resize(u16, u16),
}

/// Map a raw crossterm [`Event`] to an [`AppEvent`].
///
/// Returns `None` for events that carry no semantic meaning for the
/// palette (mouse events, focus changes, unbound keys).
pub fn to_app_event(event: Event) -> Option<AppEvent> {
    match event {
        Event::Resize(w, h) => Some(AppEvent::Resize(w, h)),
        Event::Key(key) => map_key(key),
        _ => None,
    }
}

fn map_key(key: KeyEvent) -> Option<AppEvent> {
    use KeyCode::*;
    use KeyModifiers as Mod;

    match key.code {
        Char('c') if key.modifiers == Mod::CONTROL => Some(AppEvent::Quit),
        Char('p') if key.modifiers == Mod::CONTROL => Some(AppEvent::Nav(Direction::Up)),
        Char('n') if key.modifiers == Mod::CONTROL => Some(AppEvent::Nav(Direction::Down)),
        Char('u') if key.modifiers == Mod::CONTROL => Some(AppEvent::ClearQuery),

        Up => Some(AppEvent::Nav(Direction::Up)),
        Down => Some(AppEvent::Nav(Direction::Down)),
        Left => Some(AppEvent::Nav(Direction::Left)),
        Right => Some(AppEvent::Nav(Direction::Right)),
        Home => Some(AppEvent::Home),
        End => Some(AppEvent::End),

        F(1) => Some(AppEvent::Help),

        // Printable characters, including shifted ones
        Char(c) if key.modifiers == Mod::NONE || key.modifiers == Mod::SHIFT => {
            Some(AppEvent::Char(c))
        }

        Backspace if key.modifiers == Mod::NONE => Some(AppEvent::Backspace),
        Enter if key.modifiers == Mod::NONE => Some(AppEvent::Enter),
        Esc => Some(AppEvent::Escape),

        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
