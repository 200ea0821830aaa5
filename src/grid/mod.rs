//! Layout, scroll and focus engine for a flow grid of variable-width items.

pub mod animation;
pub mod geometry;
pub mod item;
pub mod layout;
pub mod navigation;
pub mod paint;
pub mod scroll;
pub mod session;

pub use animation::{Clock, FrameScheduler, FrameSlot, ManualClock, MonotonicClock};
pub use geometry::{ItemRect, Offset, Point, Rect2, Size};
pub use item::{ItemColor, ItemIndex, ItemStore, WidthRange};
pub use layout::{LayoutParams, RowIndex};
pub use navigation::Direction;
pub use paint::{StrokeStyle, Surface};
pub use scroll::{ScrollPolicy, ViewportState};
pub use session::{GridSession, Repaint, SessionConfig};
