//! Pointer events - convert crossterm mouse events to pointer events.

use crossterm::event::{Event as CrosstermEvent, MouseEventKind};

/// Mouse button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

impl From<crossterm::event::MouseButton> for MouseButton {
    fn from(btn: crossterm::event::MouseButton) -> Self {
        use crossterm::event::MouseButton as CtBtn;
        match btn {
            CtBtn::Left => MouseButton::Left,
            CtBtn::Right => MouseButton::Right,
            CtBtn::Middle => MouseButton::Middle,
        }
    }
}

/// The press/move/release signals the gesture controller consumes.
///
/// Coordinates are terminal cells (column, row). Crossterm reports pointer
/// motion with a button held as `Drag`; both `Moved` and `Drag` translate
/// to [`PointerEvent::Move`] since the controller tracks the held button
/// itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEvent {
    /// Pointer button pressed
    Press { x: u16, y: u16, button: MouseButton },
    /// Pointer moved (with or without a button held)
    Move { x: u16, y: u16 },
    /// Pointer button released
    Release { x: u16, y: u16, button: MouseButton },
}

impl PointerEvent {
    /// Cell position of the event.
    pub const fn position(&self) -> (u16, u16) {
        match *self {
            PointerEvent::Press { x, y, .. }
            | PointerEvent::Move { x, y }
            | PointerEvent::Release { x, y, .. } => (x, y),
        }
    }

    /// Translate a raw crossterm event into a pointer event.
    /// Scroll-wheel kinds and non-mouse events have no pointer equivalent.
    pub fn from_crossterm(event: &CrosstermEvent) -> Option<Self> {
        let CrosstermEvent::Mouse(mouse) = event else {
            return None;
        };

        let x = mouse.column;
        let y = mouse.row;

        match mouse.kind {
            MouseEventKind::Down(button) => Some(PointerEvent::Press {
                x,
                y,
                button: button.into(),
            }),
            MouseEventKind::Moved | MouseEventKind::Drag(_) => Some(PointerEvent::Move { x, y }),
            MouseEventKind::Up(button) => Some(PointerEvent::Release {
                x,
                y,
                button: button.into(),
            }),
            _ => None,
        }
    }
}
