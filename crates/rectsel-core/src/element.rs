//! Rectangle elements (handles) and cursor hit testing.

use crate::geometry::{Point, Rect};
use serde::{Deserialize, Serialize};

/// Hit tolerance around sides and corners in pixels.
pub const CURSOR_TOLERANCE: i32 = 3;

/// Side of a rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Edge {
    Left,
    Top,
    Right,
    Bottom,
}

/// Corner of a rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomRight,
    BottomLeft,
}

impl Corner {
    /// The horizontal (top/bottom) and vertical (left/right) sides meeting here.
    pub const fn edges(self) -> (Edge, Edge) {
        match self {
            Self::TopLeft => (Edge::Top, Edge::Left),
            Self::TopRight => (Edge::Top, Edge::Right),
            Self::BottomRight => (Edge::Bottom, Edge::Right),
            Self::BottomLeft => (Edge::Bottom, Edge::Left),
        }
    }
}

/// The part of a selection rectangle grabbed by the pointer.
///
/// Corners are the combination of one top/bottom side with one left/right
/// side, see [`RectElement::from_edges`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RectElement {
    /// A side, resizing one axis.
    Edge(Edge),
    /// A corner, resizing both axes.
    Corner(Corner),
    /// The inner area, moving the whole rect.
    Area,
    /// Symmetric resize around the center (used for new selections only).
    FromCenter,
}

impl RectElement {
    pub const LEFT: Self = Self::Edge(Edge::Left);
    pub const TOP: Self = Self::Edge(Edge::Top);
    pub const RIGHT: Self = Self::Edge(Edge::Right);
    pub const BOTTOM: Self = Self::Edge(Edge::Bottom);
    pub const TOP_LEFT: Self = Self::Corner(Corner::TopLeft);
    pub const TOP_RIGHT: Self = Self::Corner(Corner::TopRight);
    pub const BOTTOM_RIGHT: Self = Self::Corner(Corner::BottomRight);
    pub const BOTTOM_LEFT: Self = Self::Corner(Corner::BottomLeft);

    /// Every element, in a fixed order.
    pub const ALL: [Self; 10] = [
        Self::LEFT,
        Self::TOP,
        Self::RIGHT,
        Self::BOTTOM,
        Self::TOP_LEFT,
        Self::TOP_RIGHT,
        Self::BOTTOM_RIGHT,
        Self::BOTTOM_LEFT,
        Self::Area,
        Self::FromCenter,
    ];

    /// Combine an optional top/bottom side with an optional left/right side.
    ///
    /// `horizontal` must be `Top` or `Bottom` and `vertical` must be `Left`
    /// or `Right`; any other pairing yields `None`.
    pub const fn from_edges(horizontal: Option<Edge>, vertical: Option<Edge>) -> Option<Self> {
        match (horizontal, vertical) {
            (None, None) => None,
            (Some(Edge::Top), None) => Some(Self::TOP),
            (Some(Edge::Bottom), None) => Some(Self::BOTTOM),
            (None, Some(Edge::Left)) => Some(Self::LEFT),
            (None, Some(Edge::Right)) => Some(Self::RIGHT),
            (Some(Edge::Top), Some(Edge::Left)) => Some(Self::TOP_LEFT),
            (Some(Edge::Top), Some(Edge::Right)) => Some(Self::TOP_RIGHT),
            (Some(Edge::Bottom), Some(Edge::Right)) => Some(Self::BOTTOM_RIGHT),
            (Some(Edge::Bottom), Some(Edge::Left)) => Some(Self::BOTTOM_LEFT),
            _ => None,
        }
    }

    /// Whether this element includes the given side.
    pub fn has_edge(self, edge: Edge) -> bool {
        match self {
            Self::Edge(e) => e == edge,
            Self::Corner(c) => {
                let (h, v) = c.edges();
                h == edge || v == edge
            }
            Self::Area | Self::FromCenter => false,
        }
    }
}

/// Find the element of `rect` under `point`.
///
/// Sides and corners are matched within `tolerance` pixels, the inner area
/// exactly. The top/bottom and left/right checks are independent, so a
/// point near two sides yields their corner. An empty rect has no elements.
pub fn classify(point: Point, rect: Rect, tolerance: i32) -> Option<RectElement> {
    if rect.is_empty() || !rect.contains(point, tolerance) {
        return None;
    }
    let tl = rect.top_left();
    let br = rect.bottom_right();

    let horizontal = if (tl.y - point.y).abs() <= tolerance {
        Some(Edge::Top)
    } else if (br.y - point.y).abs() <= tolerance {
        Some(Edge::Bottom)
    } else {
        None
    };
    let vertical = if (tl.x - point.x).abs() <= tolerance {
        Some(Edge::Left)
    } else if (br.x - point.x).abs() <= tolerance {
        Some(Edge::Right)
    } else {
        None
    };

    match RectElement::from_edges(horizontal, vertical) {
        None if rect.contains(point, 0) => Some(RectElement::Area),
        element => element,
    }
}
