use crossterm::event::Event as CrossTermEvent;
use crossterm::event::KeyCode;
use crossterm::event::KeyEvent;
use crossterm::event::KeyModifiers;
use crossterm::event::MouseButton;
use crossterm::event::MouseEvent;
use crossterm::event::MouseEventKind;

use crate::events::Event;

/// Converts a crossterm event into a quadbrush event
pub fn convert_event(event: CrossTermEvent) -> Option<Event> {
    match event {
        CrossTermEvent::Key(key_event) => convert_key(key_event),
        CrossTermEvent::Mouse(mouse_event) => convert_mouse(mouse_event),
        CrossTermEvent::Resize(cols, rows) => Some(Event::CamResize { cols, rows }),
        _ => None,
    }
}

fn convert_key(event: KeyEvent) -> Option<Event> {
    match event {
        KeyEvent {
            code: KeyCode::Char('q'),
            ..
        }
        | KeyEvent {
            code: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL,
            ..
        } => Some(Event::Exit),
        KeyEvent {
            code: KeyCode::Char('J'),
            modifiers: KeyModifiers::SHIFT,
            ..
        } => Some(Event::ZoomOut),
        KeyEvent {
            code: KeyCode::Char('K'),
            modifiers: KeyModifiers::SHIFT,
            ..
        } => Some(Event::ZoomIn),
        KeyEvent {
            code: KeyCode::Char('h'),
            ..
        } => Some(Event::MoveLeft),
        KeyEvent {
            code: KeyCode::Char('j'),
            ..
        } => Some(Event::MoveDown),
        KeyEvent {
            code: KeyCode::Char('k'),
            ..
        } => Some(Event::MoveUp),
        KeyEvent {
            code: KeyCode::Char('l'),
            ..
        } => Some(Event::MoveRight),
        KeyEvent {
            code: KeyCode::Char('0'),
            ..
        } => Some(Event::ResetView),
        KeyEvent {
            code: KeyCode::Char(' '),
            ..
        } => Some(Event::Regenerate),
        _ => None,
    }
}

fn convert_mouse(event: MouseEvent) -> Option<Event> {
    match event.kind {
        MouseEventKind::Down(MouseButton::Left) | MouseEventKind::Drag(MouseButton::Left) => {
            Some(Event::Brush {
                col: event.column,
                row: event.row,
            })
        }
        _ => None,
    }
}

#[cfg(test)]
mod test {
    use crossterm::event::Event as CrossTermEvent;
    use crossterm::event::KeyCode;
    use crossterm::event::KeyEvent;
    use crossterm::event::KeyEventKind;
    use crossterm::event::KeyEventState;
    use crossterm::event::KeyModifiers;
    use crossterm::event::MouseButton;
    use crossterm::event::MouseEvent;
    use crossterm::event::MouseEventKind;

    use crate::events::Event;
    use crate::io::convert_event;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> CrossTermEvent {
        CrossTermEvent::Key(KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        })
    }

    #[test]
    fn letter_keys_pan_and_zoom() {
        let event = convert_event(key(KeyCode::Char('h'), KeyModifiers::NONE));
        assert!(matches!(event, Some(Event::MoveLeft)));

        let event = convert_event(key(KeyCode::Char('K'), KeyModifiers::SHIFT));
        assert!(matches!(event, Some(Event::ZoomIn)));

        let event = convert_event(key(KeyCode::Char('q'), KeyModifiers::NONE));
        assert!(matches!(event, Some(Event::Exit)));

        let event = convert_event(key(KeyCode::Char('z'), KeyModifiers::NONE));
        assert!(event.is_none());
    }

    #[test]
    fn left_clicks_and_drags_brush() {
        let event = convert_event(CrossTermEvent::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 3,
            row: 7,
            modifiers: KeyModifiers::NONE,
        }));

        assert!(matches!(event, Some(Event::Brush { col: 3, row: 7 })));

        let event = convert_event(CrossTermEvent::Mouse(MouseEvent {
            kind: MouseEventKind::Moved,
            column: 3,
            row: 7,
            modifiers: KeyModifiers::NONE,
        }));

        assert!(event.is_none());
    }
}
