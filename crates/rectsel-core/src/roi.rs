//! Blocking region-of-interest selection.

use crate::config::SelectionConfig;
use crate::error::SelectionResult;
use crate::geometry::Rect;
use crate::input::HostEvent;
use crate::selection::{RectSelection, SelectionListener};

/// A window showing an image and delivering its input events.
///
/// The host paints the overlay in the [`SelectionListener`] callbacks.
pub trait RoiHost: SelectionListener {
    /// Size of the displayed image in pixels.
    fn display_size(&self) -> (i32, i32);

    /// Block until the next event. `None` once the window is closed.
    fn next_event(&mut self) -> Option<HostEvent>;
}

/// Options of [`select_roi`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RoiOptions {
    pub show_crosshair: bool,
    pub from_center: bool,
}

impl From<RoiOptions> for SelectionConfig {
    fn from(options: RoiOptions) -> Self {
        Self {
            show_crosshair: options.show_crosshair,
            from_center: options.from_center,
            ..Default::default()
        }
    }
}

/// Let the user select a rectangle on the host display.
///
/// Runs until the selection is confirmed with Enter or Space and returns
/// it. Cancelling with `c` or Escape, or closing the window, returns an
/// empty rect.
pub fn select_roi(host: &mut impl RoiHost, options: RoiOptions) -> SelectionResult<Rect> {
    let (width, height) = host.display_size();
    let mut selection = RectSelection::new(width, height, options.into())?;

    log::info!("Select a ROI and then press SPACE or ENTER button!");
    log::info!("Cancel the selection process by pressing c button!");

    while let Some(event) = host.next_event() {
        match event {
            HostEvent::Pointer(pointer) => {
                selection.handle_pointer_event(pointer, host);
            }
            HostEvent::KeyPressed(key) if key.is_confirm() => {
                let rect = selection.selection();
                log::info!("ROI selected: {rect:?}");
                return Ok(rect);
            }
            HostEvent::KeyPressed(key) if key.is_cancel() => break,
            HostEvent::KeyPressed(_) => {}
        }
    }

    log::info!("ROI selection cancelled");
    Ok(Rect::default())
}
