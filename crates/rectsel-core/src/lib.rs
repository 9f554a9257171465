//! RectSel Core Library
//!
//! Interactive rectangle selection over a displayed image: pixel geometry,
//! handle hit testing, drag transforms clamped to bounds, and the pointer
//! state machine driving them. Rendering is left to the host, which
//! receives redraw and selection-changed notifications.

pub mod config;
pub mod element;
pub mod error;
pub mod geometry;
pub mod input;
pub mod overlay;
pub mod roi;
pub mod selection;
pub mod transform;

pub use config::SelectionConfig;
pub use element::{classify, Corner, Edge, RectElement, CURSOR_TOLERANCE};
pub use error::{SelectionError, SelectionResult};
pub use geometry::{Point, Rect, Vector};
pub use input::{Buttons, HostEvent, Key, MouseButton, PointerEvent};
pub use overlay::{Highlight, Overlay};
pub use roi::{select_roi, RoiHost, RoiOptions};
pub use selection::{DragState, RectSelection, SelectionEvent, SelectionListener};
pub use transform::transformed_rect;
