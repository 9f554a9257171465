//! HSV color range picker.
//!
//! The widget is a square of saturation (rows) by brightness (columns) for
//! the current hue, with a hue slider beneath it:
//!
//! ```text
//! (0,0) +-----------------+  x -> brightness
//!       |                 |  y -> saturation
//!       |   [selection]   |
//!       |                 |
//! (0,size) +--------------+
//!       |   hue slider    |  slider_height rows
//!       +-----------------+
//! ```
//!
//! A rectangle selection on the square picks the saturation and brightness
//! range, the slider picks the hue. Hue uses the 8-bit `0..=179` range,
//! saturation and brightness `0..=255`.

use rectsel_core::{
    MouseButton, Point, PointerEvent, Rect, RectSelection, SelectionConfig, SelectionError,
    SelectionEvent, SelectionListener, SelectionResult,
};
use serde::{Deserialize, Serialize};

/// Largest hue value.
pub const HUE_MAX: u8 = 179;
/// Number of distinct hue values.
const HUE_RANGE: i32 = HUE_MAX as i32 + 1;
/// Largest saturation or brightness value.
const VAL_MAX: i32 = 255;

/// Widget parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RangePickerConfig {
    /// Width of the widget and side of the saturation/brightness square.
    pub size: i32,
    /// Height of the hue slider.
    pub slider_height: i32,
    /// Label hue on the 0-360 scale instead of 0-179.
    pub normalized_display: bool,
}

impl Default for RangePickerConfig {
    fn default() -> Self {
        Self {
            size: 256,
            slider_height: 16,
            normalized_display: false,
        }
    }
}

impl RangePickerConfig {
    pub fn validate(&self) -> SelectionResult<()> {
        if self.size < 2 {
            return Err(invalid(format!("widget size must be at least 2, got {}", self.size)));
        }
        if self.slider_height < 1 {
            return Err(invalid(format!(
                "slider height must be positive, got {}",
                self.slider_height
            )));
        }
        Ok(())
    }
}

fn invalid(msg: String) -> SelectionError {
    log::warn!("Rejected range picker configuration: {msg}");
    SelectionError::InvalidConfiguration(msg)
}

/// An 8-bit HSV color.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Hsv {
    pub h: u8,
    pub s: u8,
    pub v: u8,
}

impl Hsv {
    pub const fn new(h: u8, s: u8, v: u8) -> Self {
        Self { h, s, v }
    }

    /// Same saturation and brightness with another hue.
    pub const fn with_hue(self, h: u8) -> Self {
        Self { h, ..self }
    }
}

/// Receives the range picker notifications.
pub trait RangeListener: SelectionListener {
    /// The picked hue changed (the square must be repainted for it).
    fn on_hue_changed(&mut self, hue: u8) {
        let _ = hue;
    }
}

impl RangeListener for () {}

/// A recorded range picker notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeEvent {
    Selection(SelectionEvent),
    HueChanged(u8),
}

impl From<SelectionEvent> for RangeEvent {
    fn from(event: SelectionEvent) -> Self {
        Self::Selection(event)
    }
}

impl RangeListener for Vec<RangeEvent> {
    fn on_hue_changed(&mut self, hue: u8) {
        self.push(RangeEvent::HueChanged(hue));
    }
}

/// Hue slider plus saturation/brightness range selection.
#[derive(Debug, Clone)]
pub struct HsvRangePicker {
    config: RangePickerConfig,
    selection: RectSelection,
    hue: u8,
    sliding: bool,
}

impl HsvRangePicker {
    pub fn new(config: RangePickerConfig) -> SelectionResult<Self> {
        config.validate()?;
        let selection = RectSelection::new(
            config.size,
            config.size + config.slider_height,
            SelectionConfig {
                bounds: Some(Rect::from_size(config.size, config.size)),
                click_clears: true,
                ..Default::default()
            },
        )?;
        Ok(Self {
            config,
            selection,
            hue: 0,
            sliding: false,
        })
    }

    pub fn config(&self) -> &RangePickerConfig {
        &self.config
    }

    /// The saturation/brightness selection.
    pub fn selection(&self) -> &RectSelection {
        &self.selection
    }

    pub fn hue(&self) -> u8 {
        self.hue
    }

    /// Whether the hue slider is being dragged.
    pub fn is_sliding(&self) -> bool {
        self.sliding
    }

    /// Width and height of the whole widget.
    pub fn display_size(&self) -> (i32, i32) {
        (self.config.size, self.config.size + self.config.slider_height)
    }

    /// The saturation/brightness square.
    pub fn sat_val_area(&self) -> Rect {
        Rect::from_size(self.config.size, self.config.size)
    }

    /// The hue slider below the square.
    pub fn slider_area(&self) -> Rect {
        Rect::new(0, self.config.size, self.config.size, self.config.slider_height)
    }

    /// Vertical marker across the slider at the current hue.
    pub fn hue_marker(&self) -> (Point, Point) {
        let x = self.hue_to_pos(self.hue);
        let area = self.slider_area();
        (Point::new(x, area.y), Point::new(x, area.y + area.h))
    }

    pub fn pos_to_hue(&self, x: i32) -> i32 {
        x * i32::from(HUE_MAX) / (self.config.size - 1)
    }

    pub fn hue_to_pos(&self, hue: u8) -> i32 {
        i32::from(hue) * (self.config.size - 1) / i32::from(HUE_MAX)
    }

    pub fn pos_to_val(&self, x: i32) -> i32 {
        x * VAL_MAX / (self.config.size - 1)
    }

    pub fn val_to_pos(&self, val: u8) -> i32 {
        i32::from(val) * (self.config.size - 1) / VAL_MAX
    }

    /// Set the hue, clamped into `0..=179`, and repaint.
    pub fn set_hue(&mut self, hue: i32, listener: &mut impl RangeListener) {
        let hue = clamp_u8(hue, HUE_MAX);
        log::debug!("Hue set to {hue}");
        self.hue = hue;
        listener.on_hue_changed(hue);
        self.selection.refresh(listener);
    }

    /// Lowest saturation and brightness of the selected range.
    ///
    /// Without a selection the whole range is picked.
    pub fn lower_color(&self) -> Hsv {
        let rect = self.selection.selection();
        if rect.is_empty() {
            return Hsv::new(self.hue, 0, 0);
        }
        self.color_at(rect.top_left())
    }

    /// Highest saturation and brightness of the selected range.
    pub fn upper_color(&self) -> Hsv {
        let rect = self.selection.selection();
        if rect.is_empty() {
            return Hsv::new(self.hue, u8::MAX, u8::MAX);
        }
        self.color_at(rect.bottom_right())
    }

    fn color_at(&self, p: Point) -> Hsv {
        let s = clamp_u8(self.pos_to_val(p.y), u8::MAX);
        let v = clamp_u8(self.pos_to_val(p.x), u8::MAX);
        Hsv::new(self.hue, s, v)
    }

    /// The current hue shifted by `amount`, wrapping around `0..=179`.
    pub fn shift_hue(&self, amount: i32) -> u8 {
        clamp_u8((i32::from(self.hue) + amount).rem_euclid(HUE_RANGE), HUE_MAX)
    }

    /// Inclusive `(lower, upper)` HSV bounds for thresholding an image around
    /// the picked hue, `hue_width` on each side.
    ///
    /// When the band wraps across 0/179 it is split into two ranges. A band
    /// of 180 hues or more covers every hue. The sign of `hue_width` is ignored.
    pub fn threshold_ranges(&self, hue_width: i32) -> Vec<(Hsv, Hsv)> {
        let hue_width = hue_width.saturating_abs();
        let (lower, upper) = (self.lower_color(), self.upper_color());
        if hue_width.saturating_mul(2) >= HUE_RANGE - 1 {
            return vec![(lower.with_hue(0), upper.with_hue(HUE_MAX))];
        }
        let lower = lower.with_hue(self.shift_hue(-hue_width));
        let upper = upper.with_hue(self.shift_hue(hue_width));
        if lower.h > upper.h {
            vec![(lower, upper.with_hue(HUE_MAX)), (lower.with_hue(0), upper)]
        } else {
            vec![(lower, upper)]
        }
    }

    /// Slider caption, e.g. `Hue 90`, or `Hue 181.0` with normalized display.
    pub fn hue_label(&self) -> String {
        if self.config.normalized_display {
            format!("Hue {:.1}", f64::from(self.hue) / f64::from(HUE_MAX) * 360.0)
        } else {
            format!("Hue {}", self.hue)
        }
    }

    /// Saturation and brightness caption for a selection corner.
    pub fn corner_label(&self, corner: Point) -> String {
        format!("Sg.{}\nBg.{}", self.pos_to_val(corner.y), self.pos_to_val(corner.x))
    }

    /// Feed a pointer event. Returns `true` if the event was used.
    ///
    /// The range selection sees every event first. A press it doesn't take
    /// inside the slider starts sliding the hue.
    pub fn handle_pointer_event(
        &mut self,
        event: PointerEvent,
        listener: &mut impl RangeListener,
    ) -> bool {
        let used = self.selection.handle_pointer_event(event, listener);
        match event {
            PointerEvent::Down {
                position,
                button: MouseButton::Primary,
            } => {
                if used {
                    return true;
                }
                if !self.slider_area().contains(position, 0) {
                    return false;
                }
                self.sliding = true;
                self.set_hue(self.pos_to_hue(position.x), listener);
                true
            }
            PointerEvent::Move { position, .. } if self.sliding => {
                self.set_hue(self.pos_to_hue(position.x), listener);
                true
            }
            PointerEvent::Up {
                button: MouseButton::Primary,
                ..
            } => used || std::mem::take(&mut self.sliding),
            _ => used,
        }
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn clamp_u8(value: i32, max: u8) -> u8 {
    value.clamp(0, i32::from(max)) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    fn picker() -> HsvRangePicker {
        HsvRangePicker::new(RangePickerConfig::default()).unwrap()
    }

    fn gesture(picker: &mut HsvRangePicker, from: (i32, i32), to: (i32, i32)) {
        let mut events: Vec<RangeEvent> = Vec::new();
        picker.handle_pointer_event(PointerEvent::down(from.0, from.1), &mut events);
        picker.handle_pointer_event(PointerEvent::drag(to.0, to.1), &mut events);
        picker.handle_pointer_event(PointerEvent::up(to.0, to.1), &mut events);
    }

    #[test]
    fn test_invalid_config() {
        let config = RangePickerConfig {
            size: 1,
            ..Default::default()
        };
        assert!(matches!(
            HsvRangePicker::new(config),
            Err(SelectionError::InvalidConfiguration(_))
        ));
        let config = RangePickerConfig {
            slider_height: 0,
            ..Default::default()
        };
        assert!(HsvRangePicker::new(config).is_err());
    }

    #[test]
    fn test_layout() {
        let picker = picker();
        assert_eq!(picker.display_size(), (256, 272));
        assert_eq!(picker.sat_val_area(), Rect::new(0, 0, 256, 256));
        assert_eq!(picker.slider_area(), Rect::new(0, 256, 256, 16));
        assert_eq!(picker.selection().bounds(), picker.sat_val_area());
        assert_eq!(picker.hue_marker(), (Point::new(0, 256), Point::new(0, 272)));
    }

    #[test]
    fn test_conversions() {
        let picker = HsvRangePicker::new(RangePickerConfig {
            size: 320,
            ..Default::default()
        })
        .unwrap();
        assert_eq!(picker.hue_to_pos(179), 319);
        assert_eq!(picker.pos_to_val(319), 255);
        assert_eq!(picker.pos_to_hue(319), 179);
        assert_eq!(picker.pos_to_hue(160), 89);
        assert_eq!(picker.val_to_pos(255), 319);
        assert_eq!(picker.val_to_pos(0), 0);
    }

    #[test]
    fn test_set_hue_clamps_and_notifies() {
        let mut picker = picker();
        let mut events: Vec<RangeEvent> = Vec::new();
        picker.set_hue(200, &mut events);
        assert_eq!(picker.hue(), HUE_MAX);
        assert_eq!(
            events,
            vec![
                RangeEvent::HueChanged(179),
                RangeEvent::Selection(SelectionEvent::Redraw {
                    rect: Rect::default(),
                    highlight: None,
                }),
            ]
        );
        picker.set_hue(-5, &mut ());
        assert_eq!(picker.hue(), 0);
    }

    #[test]
    fn test_shift_hue_wraps() {
        let mut picker = picker();
        picker.set_hue(171, &mut ());
        assert_eq!(picker.shift_hue(10), 1);
        assert_eq!(picker.shift_hue(-10), 161);
        picker.set_hue(0, &mut ());
        assert_eq!(picker.shift_hue(-10), 170);
        picker.set_hue(179, &mut ());
        assert_eq!(picker.shift_hue(3), 2);
        assert_eq!(picker.shift_hue(360), 179);
    }

    #[test]
    fn test_colors_from_selection() {
        let mut picker = picker();
        picker.set_hue(42, &mut ());
        assert_eq!(picker.lower_color(), Hsv::new(42, 0, 0));
        assert_eq!(picker.upper_color(), Hsv::new(42, 255, 255));

        gesture(&mut picker, (10, 20), (200, 100));
        assert_eq!(picker.selection().selection(), Rect::new(10, 20, 191, 81));
        assert_eq!(picker.lower_color(), Hsv::new(42, 20, 10));
        assert_eq!(picker.upper_color(), Hsv::new(42, 100, 200));
        assert_eq!(picker.corner_label(Point::new(10, 20)), "Sg.20\nBg.10");
    }

    #[test]
    fn test_single_click_clears_selection() {
        let mut picker = picker();
        gesture(&mut picker, (10, 20), (200, 100));
        let mut events: Vec<RangeEvent> = Vec::new();
        assert!(picker.handle_pointer_event(PointerEvent::down(100, 60), &mut events));
        assert!(picker.handle_pointer_event(PointerEvent::up(100, 60), &mut events));
        assert!(picker.selection().selection().is_empty());
        assert_eq!(
            events.last(),
            Some(&RangeEvent::Selection(SelectionEvent::SelectionChanged(Rect::default())))
        );
        assert_eq!(picker.upper_color(), Hsv::new(0, 255, 255));
    }

    #[test]
    fn test_hue_slider() {
        let mut picker = picker();
        let mut events: Vec<RangeEvent> = Vec::new();

        assert!(picker.handle_pointer_event(PointerEvent::down(128, 260), &mut events));
        assert!(picker.is_sliding());
        assert_eq!(picker.hue(), 89);
        assert!(events.contains(&RangeEvent::HueChanged(89)));

        assert!(picker.handle_pointer_event(PointerEvent::drag(300, 262), &mut events));
        assert_eq!(picker.hue(), HUE_MAX);

        assert!(picker.handle_pointer_event(PointerEvent::up(300, 262), &mut events));
        assert!(!picker.is_sliding());
        assert!(picker.selection().selection().is_empty());

        // Moving after release leaves the hue alone
        picker.handle_pointer_event(PointerEvent::hover(10, 260), &mut events);
        assert_eq!(picker.hue(), HUE_MAX);
    }

    #[test]
    fn test_press_above_slider_outside_square() {
        let mut picker = HsvRangePicker::new(RangePickerConfig::default()).unwrap();
        let mut events: Vec<RangeEvent> = Vec::new();
        assert!(!picker.handle_pointer_event(PointerEvent::down(300, 100), &mut events));
        assert!(!picker.is_sliding());
        assert!(!picker.handle_pointer_event(PointerEvent::up(300, 100), &mut events));
    }

    #[test]
    fn test_threshold_ranges() {
        let mut picker = picker();
        picker.set_hue(90, &mut ());
        assert_eq!(
            picker.threshold_ranges(10),
            vec![(Hsv::new(80, 0, 0), Hsv::new(100, 255, 255))]
        );

        picker.set_hue(175, &mut ());
        assert_eq!(
            picker.threshold_ranges(10),
            vec![
                (Hsv::new(165, 0, 0), Hsv::new(179, 255, 255)),
                (Hsv::new(0, 0, 0), Hsv::new(5, 255, 255)),
            ]
        );
    }

    #[test]
    fn test_threshold_ranges_wide_and_negative() {
        let mut picker = picker();
        picker.set_hue(90, &mut ());
        let full = vec![(Hsv::new(0, 0, 0), Hsv::new(179, 255, 255))];
        assert_eq!(picker.threshold_ranges(90), full);
        assert_eq!(picker.threshold_ranges(100), full);
        assert_eq!(picker.threshold_ranges(i32::MIN), full);
        // 179 hues, one short of the whole circle
        assert_eq!(
            picker.threshold_ranges(89),
            vec![(Hsv::new(1, 0, 0), Hsv::new(179, 255, 255))]
        );

        picker.set_hue(175, &mut ());
        assert_eq!(picker.threshold_ranges(-10), picker.threshold_ranges(10));
        assert_eq!(
            picker.threshold_ranges(0),
            vec![(Hsv::new(175, 0, 0), Hsv::new(175, 255, 255))]
        );
    }

    #[test]
    fn test_slider_press_must_hit_slider() {
        let mut picker = picker();
        let mut events: Vec<RangeEvent> = Vec::new();
        // Right of the slider, and below it
        assert!(!picker.handle_pointer_event(PointerEvent::down(300, 260), &mut events));
        assert!(!picker.handle_pointer_event(PointerEvent::down(100, 272), &mut events));
        assert!(!picker.is_sliding());
        assert_eq!(picker.hue(), 0);

        assert!(picker.handle_pointer_event(PointerEvent::down(255, 271), &mut events));
        assert!(picker.is_sliding());
        assert_eq!(picker.hue(), HUE_MAX);
    }

    #[test]
    fn test_hue_label() {
        let mut picker = picker();
        picker.set_hue(90, &mut ());
        assert_eq!(picker.hue_label(), "Hue 90");

        let mut picker = HsvRangePicker::new(RangePickerConfig {
            normalized_display: true,
            ..Default::default()
        })
        .unwrap();
        picker.set_hue(90, &mut ());
        assert_eq!(picker.hue_label(), "Hue 181.0");
    }
}
