//! Pointer and keyboard events delivered by the host window.

use crate::geometry::Point;
use serde::{Deserialize, Serialize};

/// Mouse button identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MouseButton {
    /// Starts, resizes and moves selections.
    Primary,
    /// Cancels the gesture in progress.
    Secondary,
    Middle,
}

/// Buttons held while the pointer moves.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Buttons {
    pub primary: bool,
    pub secondary: bool,
    pub middle: bool,
}

impl Buttons {
    /// No button held.
    pub const NONE: Self = Self {
        primary: false,
        secondary: false,
        middle: false,
    };

    /// Only the primary button held.
    pub const PRIMARY: Self = Self {
        primary: true,
        secondary: false,
        middle: false,
    };
}

/// Pointer event in display (image pixel) coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PointerEvent {
    Down {
        position: Point,
        button: MouseButton,
    },
    Up {
        position: Point,
        button: MouseButton,
    },
    Move {
        position: Point,
        buttons: Buttons,
    },
}

impl PointerEvent {
    /// Primary button press.
    pub const fn down(x: i32, y: i32) -> Self {
        Self::Down {
            position: Point::new(x, y),
            button: MouseButton::Primary,
        }
    }

    /// Primary button release.
    pub const fn up(x: i32, y: i32) -> Self {
        Self::Up {
            position: Point::new(x, y),
            button: MouseButton::Primary,
        }
    }

    /// Move while the primary button is held.
    pub const fn drag(x: i32, y: i32) -> Self {
        Self::Move {
            position: Point::new(x, y),
            buttons: Buttons::PRIMARY,
        }
    }

    /// Move with no button held.
    pub const fn hover(x: i32, y: i32) -> Self {
        Self::Move {
            position: Point::new(x, y),
            buttons: Buttons::NONE,
        }
    }

    /// Secondary button press (cancel).
    pub const fn cancel(x: i32, y: i32) -> Self {
        Self::Down {
            position: Point::new(x, y),
            button: MouseButton::Secondary,
        }
    }

    /// Where the event happened.
    pub const fn position(&self) -> Point {
        match *self {
            Self::Down { position, .. } | Self::Up { position, .. } | Self::Move { position, .. } => {
                position
            }
        }
    }
}

/// Keys the blocking selector reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    Enter,
    Space,
    Escape,
    Character(char),
}

impl Key {
    /// Enter or Space confirm the selection.
    pub const fn is_confirm(self) -> bool {
        matches!(self, Self::Enter | Self::Space)
    }

    /// `c` or Escape abandon the selection.
    pub const fn is_cancel(self) -> bool {
        matches!(self, Self::Escape | Self::Character('c' | 'C'))
    }
}

/// Anything the host window can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HostEvent {
    Pointer(PointerEvent),
    KeyPressed(Key),
}

impl From<PointerEvent> for HostEvent {
    fn from(event: PointerEvent) -> Self {
        Self::Pointer(event)
    }
}
