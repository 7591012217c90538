pub mod controller;
pub mod event;
pub mod rect;
pub mod session;
pub mod surface;
pub mod terminal;

pub use controller::{Axis, DragScrollController, DragScrollOptions, DEFAULT_THRESHOLD};
pub use event::{MouseButton, PointerEvent};
pub use rect::Rect;
pub use session::{DragPhase, DragSession};
pub use surface::{ScrollOffset, ScrollRegion, ScrollSurface};
pub use terminal::Terminal;
