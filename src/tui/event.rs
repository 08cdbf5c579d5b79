use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};

/// TUI-specific input events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TuiEvent {
    /// Ctrl+C, quits from anywhere
    ForceQuit,
    Escape,
    Submit,
    Backspace,
    CursorUp,
    CursorDown,
    PageUp,
    PageDown,
    NextTab,
    InputChar(char),
    Resize,
}

/// Poll for an event without blocking (returns immediately)
pub fn poll_event_immediate() -> Option<TuiEvent> {
    poll_event_timeout(std::time::Duration::ZERO)
}

/// Poll for an event, blocking up to `timeout`.
/// Terminal read errors are logged and treated as "no event".
pub fn poll_event_timeout(timeout: std::time::Duration) -> Option<TuiEvent> {
    match event::poll(timeout) {
        Ok(true) => {}
        Ok(false) => return None,
        Err(e) => {
            log::warn!("Event poll failed: {}", e);
            return None;
        }
    }
    let event = match event::read() {
        Ok(event) => event,
        Err(e) => {
            log::warn!("Event read failed: {}", e);
            return None;
        }
    };
    match event {
        Event::Key(key_event) if key_event.kind != KeyEventKind::Release => {
            log::debug!("Key event: {:?} with modifiers {:?}", key_event.code, key_event.modifiers);
            match (key_event.modifiers, key_event.code) {
                (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(TuiEvent::ForceQuit),
                (_, KeyCode::Char(c)) => Some(TuiEvent::InputChar(c)),
                (_, KeyCode::Backspace) => Some(TuiEvent::Backspace),
                (_, KeyCode::Enter) => Some(TuiEvent::Submit),
                (_, KeyCode::Esc) => Some(TuiEvent::Escape),
                (_, KeyCode::Tab | KeyCode::BackTab) => Some(TuiEvent::NextTab),
                (_, KeyCode::Up) => Some(TuiEvent::CursorUp),
                (_, KeyCode::Down) => Some(TuiEvent::CursorDown),
                (_, KeyCode::PageUp) => Some(TuiEvent::PageUp),
                (_, KeyCode::PageDown) => Some(TuiEvent::PageDown),
                _ => None,
            }
        }
        Event::Resize(_, _) => Some(TuiEvent::Resize),
        _ => None,
    }
}
