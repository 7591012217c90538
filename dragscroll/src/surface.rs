use crate::rect::Rect;

/// Scroll offset for a scrollable surface, in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScrollOffset {
    pub x: u16,
    pub y: u16,
}

impl ScrollOffset {
    pub const fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }
}

/// The minimal capability set the gesture controller needs from a
/// scrollable: readable bounds for press hit testing, and a readable,
/// writable, self-clamping scroll offset. The controller never assumes a
/// particular widget tree or rendering backend behind it.
pub trait ScrollSurface {
    /// Screen-space rect used to hit test presses.
    fn bounds(&self) -> Rect;

    /// Current scroll offset.
    fn scroll_offset(&self) -> ScrollOffset;

    /// Set the scroll offset. Implementations clamp into their valid range;
    /// negative values clamp to zero.
    fn set_scroll_offset(&mut self, x: i32, y: i32);

    /// Whether the surface is still part of the host layout. Gesture
    /// tracking against a detached surface is silently discarded.
    fn is_attached(&self) -> bool {
        true
    }
}

/// A scrollable region of the terminal grid: a viewport rect over content
/// that may be larger than it. Offsets are clamped to
/// `content - viewport` per axis, so content that fits its viewport pins
/// the offset at zero.
#[derive(Debug, Clone)]
pub struct ScrollRegion {
    viewport: Rect,
    content_width: u16,
    content_height: u16,
    offset: ScrollOffset,
    attached: bool,
}

impl ScrollRegion {
    pub fn new(viewport: Rect, content_width: u16, content_height: u16) -> Self {
        Self {
            viewport,
            content_width,
            content_height,
            offset: ScrollOffset::default(),
            attached: true,
        }
    }

    /// Maximum valid offset per axis.
    pub fn max_scroll(&self) -> (u16, u16) {
        (
            self.content_width.saturating_sub(self.viewport.width),
            self.content_height.saturating_sub(self.viewport.height),
        )
    }

    /// Update the content size and re-clamp the current offset.
    pub fn set_content_size(&mut self, width: u16, height: u16) {
        self.content_width = width;
        self.content_height = height;
        let (max_x, max_y) = self.max_scroll();
        self.offset.x = self.offset.x.min(max_x);
        self.offset.y = self.offset.y.min(max_y);
    }

    /// Move the viewport rect (e.g. after a terminal resize) and re-clamp.
    pub fn set_viewport(&mut self, viewport: Rect) {
        self.viewport = viewport;
        let (max_x, max_y) = self.max_scroll();
        self.offset.x = self.offset.x.min(max_x);
        self.offset.y = self.offset.y.min(max_y);
    }

    /// Mark the region as removed from the host layout.
    pub fn detach(&mut self) {
        self.attached = false;
    }
}

impl ScrollSurface for ScrollRegion {
    fn bounds(&self) -> Rect {
        self.viewport
    }

    fn scroll_offset(&self) -> ScrollOffset {
        self.offset
    }

    fn set_scroll_offset(&mut self, x: i32, y: i32) {
        let (max_x, max_y) = self.max_scroll();
        self.offset.x = x.clamp(0, max_x as i32) as u16;
        self.offset.y = y.clamp(0, max_y as i32) as u16;
    }

    fn is_attached(&self) -> bool {
        self.attached
    }
}
