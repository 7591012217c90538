//! Drag-to-scroll gesture controller.

use log::{debug, trace};

use crate::event::{MouseButton, PointerEvent};
use crate::session::{DragPhase, DragSession};
use crate::surface::ScrollSurface;

/// Default dead-zone threshold in cells. Movement must exceed this before a
/// press is reclassified as a drag, so clicks inside the surface don't
/// register as zero-length drags.
pub const DEFAULT_THRESHOLD: u16 = 3;

/// Which scroll axis pointer movement drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Axis {
    #[default]
    Horizontal,
    Vertical,
    Both,
}

impl Axis {
    const fn horizontal(self) -> bool {
        matches!(self, Axis::Horizontal | Axis::Both)
    }

    const fn vertical(self) -> bool {
        matches!(self, Axis::Vertical | Axis::Both)
    }
}

type DragCallback = Box<dyn FnMut(&PointerEvent)>;

/// Configuration for a [`DragScrollController`].
pub struct DragScrollOptions {
    axis: Axis,
    threshold: u16,
    on_drag_start: Option<DragCallback>,
    on_drag_end: Option<DragCallback>,
}

impl DragScrollOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict scrolling to one axis, or allow both.
    pub fn axis(mut self, axis: Axis) -> Self {
        self.axis = axis;
        self
    }

    /// Dead-zone threshold in cells.
    pub fn threshold(mut self, threshold: u16) -> Self {
        self.threshold = threshold;
        self
    }

    /// Called exactly once per session, when the dead-zone is first exceeded.
    pub fn on_drag_start(mut self, callback: impl FnMut(&PointerEvent) + 'static) -> Self {
        self.on_drag_start = Some(Box::new(callback));
        self
    }

    /// Called exactly once per session that reached dragging, at release.
    pub fn on_drag_end(mut self, callback: impl FnMut(&PointerEvent) + 'static) -> Self {
        self.on_drag_end = Some(Box::new(callback));
        self
    }
}

impl Default for DragScrollOptions {
    fn default() -> Self {
        Self {
            axis: Axis::default(),
            threshold: DEFAULT_THRESHOLD,
            on_drag_start: None,
            on_drag_end: None,
        }
    }
}

impl std::fmt::Debug for DragScrollOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DragScrollOptions")
            .field("axis", &self.axis)
            .field("threshold", &self.threshold)
            .field("on_drag_start", &self.on_drag_start.is_some())
            .field("on_drag_end", &self.on_drag_end.is_some())
            .finish()
    }
}

/// Converts pointer movement over a bound [`ScrollSurface`] into scroll
/// offset changes, gated by a dead-zone threshold.
///
/// The host's event loop feeds pointer events through
/// [`process_event`](Self::process_event). A press inside the surface bounds
/// arms the global move/release listeners (mirroring window-scoped listener
/// attachment: the pointer may leave the surface mid-drag yet the session
/// keeps tracking until release). The listeners are dropped on every exit
/// path: release, unbind, rebind, or surface detachment.
pub struct DragScrollController {
    options: DragScrollOptions,
    session: DragSession,
    /// Press listener, armed by `bind`.
    press_listener: bool,
    /// Global move/release listeners, held for the lifetime of a session.
    global_listeners: bool,
}

impl DragScrollController {
    pub fn new(options: DragScrollOptions) -> Self {
        Self {
            options,
            session: DragSession::new(),
            press_listener: false,
            global_listeners: false,
        }
    }

    /// Arm the press listener for the given surface.
    ///
    /// Re-binding replaces prior listeners: any in-flight session is
    /// discarded first. Binding to a detached surface is a silent no-op
    /// (expected during teardown races), leaving the controller unbound.
    pub fn bind(&mut self, surface: &dyn ScrollSurface) {
        self.release_global_listeners();

        if !surface.is_attached() {
            debug!("[drag] bind skipped, surface detached");
            self.press_listener = false;
            return;
        }

        self.press_listener = true;
    }

    /// Drop the press listener and any global listeners.
    /// A no-op when nothing is bound or no session is active.
    pub fn unbind(&mut self) {
        self.press_listener = false;
        self.release_global_listeners();
    }

    /// Whether the press listener is currently armed.
    pub fn is_bound(&self) -> bool {
        self.press_listener
    }

    /// Current session phase.
    pub fn phase(&self) -> DragPhase {
        self.session.phase()
    }

    /// Feed one pointer event. Returns true if the event was consumed by an
    /// active drag, so hosts can suppress click handling on a drag release.
    pub fn process_event(&mut self, event: &PointerEvent, surface: &mut dyn ScrollSurface) -> bool {
        match *event {
            PointerEvent::Press { x, y, button } => self.on_press(x, y, button, surface),
            PointerEvent::Move { x, y } => self.on_move(x, y, event, surface),
            PointerEvent::Release { button, .. } => self.on_release(button, event, surface),
        }
    }

    fn on_press(&mut self, x: u16, y: u16, button: MouseButton, surface: &dyn ScrollSurface) -> bool {
        if !self.press_listener || button != MouseButton::Left {
            return false;
        }

        if !surface.is_attached() {
            self.release_global_listeners();
            return false;
        }

        // A press outside the surface never leaves Idle.
        if !surface.bounds().contains(x, y) {
            return false;
        }

        self.session.press(x, y, surface.scroll_offset());
        self.global_listeners = true;
        trace!("[drag] press at ({x}, {y}), scroll {:?}", self.session.start_scroll());

        // Never consume a press: it may still turn out to be a click.
        false
    }

    fn on_move(
        &mut self,
        x: u16,
        y: u16,
        event: &PointerEvent,
        surface: &mut dyn ScrollSurface,
    ) -> bool {
        if !self.global_listeners {
            return false;
        }

        if !surface.is_attached() {
            debug!("[drag] surface detached mid-session, discarding");
            self.release_global_listeners();
            return false;
        }

        let (dx, dy) = self.session.delta(x, y);

        match self.session.phase() {
            DragPhase::Pressed => {
                if self.axis_magnitude(dx, dy) <= self.options.threshold as u32 {
                    return false;
                }

                self.session.promote();
                debug!("[drag] dead-zone exceeded at ({x}, {y}), delta ({dx}, {dy})");
                if let Some(callback) = self.options.on_drag_start.as_mut() {
                    callback(event);
                }

                // The promoting move applies its full delta.
                self.apply_scroll(dx, dy, surface);
                true
            }
            DragPhase::Dragging => {
                self.apply_scroll(dx, dy, surface);
                true
            }
            DragPhase::Idle => false,
        }
    }

    fn on_release(
        &mut self,
        button: MouseButton,
        event: &PointerEvent,
        surface: &dyn ScrollSurface,
    ) -> bool {
        if !self.global_listeners || button != MouseButton::Left {
            return false;
        }

        if !surface.is_attached() {
            debug!("[drag] surface detached mid-session, discarding");
            self.release_global_listeners();
            return false;
        }

        self.global_listeners = false;
        let was_dragging = self.session.reset();
        trace!("[drag] release, was_dragging={was_dragging}");

        if was_dragging {
            if let Some(callback) = self.options.on_drag_end.as_mut() {
                callback(event);
            }
        }

        was_dragging
    }

    /// Delta magnitude along the configured axis, used for the dead-zone
    /// check. Orthogonal movement alone never promotes a session.
    fn axis_magnitude(&self, dx: i32, dy: i32) -> u32 {
        match self.options.axis {
            Axis::Horizontal => dx.unsigned_abs(),
            Axis::Vertical => dy.unsigned_abs(),
            Axis::Both => dx.unsigned_abs().max(dy.unsigned_abs()),
        }
    }

    /// Write `start_scroll - delta` to each enabled axis. The relationship
    /// is inverse: dragging the pointer left pans content left by increasing
    /// the offset. Disabled axes keep the surface's current offset.
    fn apply_scroll(&self, dx: i32, dy: i32, surface: &mut dyn ScrollSurface) {
        let start = self.session.start_scroll();
        let current = surface.scroll_offset();

        let x = if self.options.axis.horizontal() {
            start.x as i32 - dx
        } else {
            current.x as i32
        };
        let y = if self.options.axis.vertical() {
            start.y as i32 - dy
        } else {
            current.y as i32
        };

        surface.set_scroll_offset(x, y);
    }

    fn release_global_listeners(&mut self) {
        self.global_listeners = false;
        self.session.reset();
    }
}
