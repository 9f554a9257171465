//! Widgets built on the rectangle selection.
//!
//! - **HSV range picker**: hue slider plus a saturation/brightness range,
//!   producing `(lower, upper)` bounds for color thresholding

pub mod hsv;

pub use hsv::{Hsv, HsvRangePicker, RangeEvent, RangeListener, RangePickerConfig, HUE_MAX};
