use crate::surface::ScrollOffset;

/// Where a session is in the press-to-release lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragPhase {
    /// No press is being tracked.
    #[default]
    Idle,
    /// Pointer is down but movement has not exceeded the dead-zone yet.
    Pressed,
    /// Movement exceeded the dead-zone; deltas are applied to the surface.
    Dragging,
}

/// State for one press-to-release interaction.
///
/// Holds the pointer position and scroll offset captured at press time so
/// every later move can be expressed as an absolute delta from the origin.
/// Transitions are pure; the controller decides when to promote and fires
/// the lifecycle callbacks around them.
#[derive(Debug, Clone, Copy, Default)]
pub struct DragSession {
    phase: DragPhase,
    start_x: u16,
    start_y: u16,
    start_scroll: ScrollOffset,
}

impl DragSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> DragPhase {
        self.phase
    }

    /// Whether the session has been promoted to an actual drag.
    pub fn is_active(&self) -> bool {
        self.phase == DragPhase::Dragging
    }

    /// Scroll offset of the surface captured at press time.
    pub fn start_scroll(&self) -> ScrollOffset {
        self.start_scroll
    }

    /// Begin tracking a press at the given position.
    pub fn press(&mut self, x: u16, y: u16, scroll: ScrollOffset) {
        self.phase = DragPhase::Pressed;
        self.start_x = x;
        self.start_y = y;
        self.start_scroll = scroll;
    }

    /// Pointer delta of the given position from the press origin.
    pub fn delta(&self, x: u16, y: u16) -> (i32, i32) {
        (
            x as i32 - self.start_x as i32,
            y as i32 - self.start_y as i32,
        )
    }

    /// Promote `Pressed` to `Dragging`.
    /// Returns true only on the transition that crossed the dead-zone, so
    /// the caller can fire its start notification exactly once.
    pub fn promote(&mut self) -> bool {
        if self.phase == DragPhase::Pressed {
            self.phase = DragPhase::Dragging;
            true
        } else {
            false
        }
    }

    /// Reset to `Idle`. Returns true if the session had been promoted.
    pub fn reset(&mut self) -> bool {
        let was_active = self.is_active();
        self.phase = DragPhase::Idle;
        was_active
    }
}
