//! Selection configuration.

use crate::element::CURSOR_TOLERANCE;
use crate::error::{SelectionError, SelectionResult};
use crate::geometry::Rect;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Construction parameters for a [`RectSelection`](crate::RectSelection).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectionConfig {
    /// Rectangle the selection must stay inside. `None` uses the whole display.
    pub bounds: Option<Rect>,
    /// Draw a crosshair through the middle of the selection.
    pub show_crosshair: bool,
    /// New selections grow symmetrically around the press position.
    pub from_center: bool,
    /// Hit tolerance around sides and corners in pixels.
    pub cursor_tolerance: i32,
    /// A click without movement inside the selection clears it.
    pub click_clears: bool,
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            bounds: None,
            show_crosshair: false,
            from_center: false,
            cursor_tolerance: CURSOR_TOLERANCE,
            click_clears: false,
        }
    }
}

impl SelectionConfig {
    /// Parse a configuration from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> SelectionResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a JSON configuration file.
    pub fn load(path: impl AsRef<Path>) -> SelectionResult<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Check the parameters that don't depend on the display.
    pub fn validate(&self) -> SelectionResult<()> {
        if self.cursor_tolerance < 0 {
            return Err(invalid(format!(
                "cursor tolerance must not be negative, got {}",
                self.cursor_tolerance
            )));
        }
        if let Some(bounds) = self.bounds {
            validate_bounds(bounds)?;
        }
        Ok(())
    }

    /// The containing rectangle for a display of the given size.
    pub fn resolve_bounds(&self, width: i32, height: i32) -> SelectionResult<Rect> {
        let bounds = self.bounds.unwrap_or(Rect::from_size(width, height));
        validate_bounds(bounds)?;
        Ok(bounds)
    }
}

/// Bounds must have a positive size on both axes.
pub fn validate_bounds(bounds: Rect) -> SelectionResult<()> {
    if bounds.w < 1 || bounds.h < 1 {
        return Err(invalid(format!("bounds must not be empty, got {bounds:?}")));
    }
    Ok(())
}

fn invalid(msg: String) -> SelectionError {
    log::warn!("Rejected selection configuration: {msg}");
    SelectionError::InvalidConfiguration(msg)
}
