//! Input Module - Event conversion and routing
//!
//! Bridges crossterm's event system with the keyboard, mouse and roving
//! modules. The host owns the event loop and hit testing; this module
//! converts raw events and routes them through the priority chain.
//!
//! # API
//!
//! - `convert_key_event` - Convert crossterm KeyEvent to our KeyboardEvent
//! - `convert_mouse_event` - Convert crossterm MouseEvent to our MouseEvent
//! - `poll_event` - Non-blocking event check with timeout
//! - `read_event` - Blocking event read
//! - `route_event` - Dispatch event through the priority chain
//! - `enable_mouse` / `disable_mouse` - Control mouse capture
//!
//! # Example
//!
//! ```ignore
//! use tabstrip::state::input::{poll_event, route_event};
//! use std::time::Duration;
//!
//! loop {
//!     if let Ok(Some(event)) = poll_event(Duration::from_millis(16)) {
//!         route_event(event);
//!     }
//! }
//! ```

use std::io::stdout;
use std::time::Duration;

use crossterm::event::{
    poll, read, DisableMouseCapture, EnableMouseCapture, Event as CrosstermEvent, KeyCode,
    KeyEvent as CrosstermKeyEvent, KeyModifiers, MouseButton as CrosstermMouseButton,
    MouseEvent as CrosstermMouseEvent, MouseEventKind,
};
use crossterm::execute;

use super::keyboard::{KeyState, KeyboardEvent};
use super::mouse::{MouseAction, MouseButton, MouseEvent};
use crate::types::Modifiers;

// =============================================================================
// INPUT EVENT ENUM
// =============================================================================

/// Unified event type routed by this module.
#[derive(Debug, Clone)]
pub enum InputEvent {
    /// Mouse event (press, release, move)
    Mouse(MouseEvent),
    /// Keyboard event
    Key(KeyboardEvent),
    /// No event or unhandled event type
    None,
}

// =============================================================================
// KEY EVENT CONVERSION
// =============================================================================

/// Convert crossterm KeyEvent to our KeyboardEvent
pub fn convert_key_event(event: CrosstermKeyEvent) -> KeyboardEvent {
    let key = match event.code {
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Tab => "Tab".to_string(),
        KeyCode::Backspace => "Backspace".to_string(),
        KeyCode::Delete => "Delete".to_string(),
        KeyCode::Esc => "Escape".to_string(),
        KeyCode::Up => "ArrowUp".to_string(),
        KeyCode::Down => "ArrowDown".to_string(),
        KeyCode::Left => "ArrowLeft".to_string(),
        KeyCode::Right => "ArrowRight".to_string(),
        KeyCode::Home => "Home".to_string(),
        KeyCode::End => "End".to_string(),
        KeyCode::PageUp => "PageUp".to_string(),
        KeyCode::PageDown => "PageDown".to_string(),
        KeyCode::F(n) => format!("F{}", n),
        KeyCode::Insert => "Insert".to_string(),
        _ => String::new(),
    };

    let state = match event.kind {
        crossterm::event::KeyEventKind::Press => KeyState::Press,
        crossterm::event::KeyEventKind::Repeat => KeyState::Repeat,
        crossterm::event::KeyEventKind::Release => KeyState::Release,
    };

    KeyboardEvent {
        key,
        modifiers: convert_modifiers(event.modifiers),
        state,
    }
}

// =============================================================================
// MOUSE EVENT CONVERSION
// =============================================================================

/// Convert crossterm MouseEvent to our MouseEvent.
/// Returns None for event kinds we do not model (scroll, drag).
pub fn convert_mouse_event(event: CrosstermMouseEvent) -> Option<MouseEvent> {
    let (action, button) = match event.kind {
        MouseEventKind::Down(btn) => (MouseAction::Down, convert_mouse_button(btn)),
        MouseEventKind::Up(btn) => (MouseAction::Up, convert_mouse_button(btn)),
        MouseEventKind::Moved => (MouseAction::Move, MouseButton::None),
        _ => return None,
    };

    Some(MouseEvent {
        action,
        button,
        x: event.column,
        y: event.row,
        modifiers: convert_modifiers(event.modifiers),
        component_index: None, // Filled by the host after hit testing
    })
}

/// Convert crossterm MouseButton to our MouseButton
fn convert_mouse_button(btn: CrosstermMouseButton) -> MouseButton {
    match btn {
        CrosstermMouseButton::Left => MouseButton::Left,
        CrosstermMouseButton::Right => MouseButton::Right,
        CrosstermMouseButton::Middle => MouseButton::Middle,
    }
}

// =============================================================================
// MODIFIER CONVERSION
// =============================================================================

/// Convert crossterm KeyModifiers to our Modifiers
fn convert_modifiers(mods: KeyModifiers) -> Modifiers {
    let mut result = Modifiers::empty();
    if mods.contains(KeyModifiers::CONTROL) {
        result |= Modifiers::CTRL;
    }
    if mods.contains(KeyModifiers::ALT) {
        result |= Modifiers::ALT;
    }
    if mods.contains(KeyModifiers::SHIFT) {
        result |= Modifiers::SHIFT;
    }
    if mods.contains(KeyModifiers::SUPER) {
        result |= Modifiers::META;
    }
    result
}

// =============================================================================
// EVENT POLLING
// =============================================================================

/// Poll for an event with timeout.
/// Returns None if no event within timeout.
pub fn poll_event(timeout: Duration) -> std::io::Result<Option<InputEvent>> {
    if poll(timeout)? {
        Ok(Some(read_event()?))
    } else {
        Ok(None)
    }
}

/// Read the next event (blocking).
pub fn read_event() -> std::io::Result<InputEvent> {
    match read()? {
        CrosstermEvent::Key(key) => Ok(InputEvent::Key(convert_key_event(key))),
        CrosstermEvent::Mouse(mouse) => Ok(convert_mouse_event(mouse)
            .map(InputEvent::Mouse)
            .unwrap_or(InputEvent::None)),
        _ => Ok(InputEvent::None),
    }
}

// =============================================================================
// EVENT ROUTING
// =============================================================================

/// Route an event through the priority chain.
/// Returns true if any handler consumed the event.
///
/// Keys go to the focused component's handlers first, then the roving
/// groups, then global handlers. The first consumer stops the chain.
pub fn route_event(event: InputEvent) -> bool {
    match event {
        InputEvent::Key(key) => route_key_event(key),
        InputEvent::Mouse(mouse) => super::mouse::dispatch(mouse),
        InputEvent::None => false,
    }
}

/// Key priority chain: focused handlers, roving groups, global handlers.
pub fn route_key_event(event: KeyboardEvent) -> bool {
    super::keyboard::update_last_event(event.clone());

    if !event.is_press() {
        return false;
    }

    if super::keyboard::dispatch_focused(super::focus::get_focused_index(), &event) {
        return true;
    }
    if super::roving::handle_key(&event) {
        return true;
    }
    super::keyboard::dispatch_to_handlers(&event)
}

// =============================================================================
// MOUSE CAPTURE
// =============================================================================

/// Enable mouse capture.
pub fn enable_mouse() -> std::io::Result<()> {
    execute!(stdout(), EnableMouseCapture)
}

/// Disable mouse capture.
pub fn disable_mouse() -> std::io::Result<()> {
    execute!(stdout(), DisableMouseCapture)
}

// =============================================================================
// TESTS
// =============================================================================
