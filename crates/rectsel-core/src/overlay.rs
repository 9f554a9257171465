//! Overlay geometry for renderers.
//!
//! The selection only reports a rect and an optional highlighted element.
//! [`Overlay`] turns that into kurbo shapes a renderer can stroke and fill
//! directly. Shapes sit on pixel coordinates: the outline runs through the
//! corner pixels of the selection.

use crate::element::{Corner, Edge, RectElement};
use crate::geometry::{Point, Rect};
use kurbo::{Circle, Line};

/// Radius of the markers drawn on every corner.
pub const MARKER_RADIUS: f64 = 2.0;
/// Radius of a highlighted corner marker.
pub const HIGHLIGHT_MARKER_RADIUS: f64 = 4.0;
/// Stroke width of a highlighted side.
pub const HIGHLIGHT_THICKNESS: f64 = 2.0;
/// Opacity of the fill over a highlighted area.
pub const AREA_HIGHLIGHT_ALPHA: f64 = 0.1;

/// Emphasis for the element under the cursor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Highlight {
    /// Translucent fill over the inner area.
    Fill { rect: kurbo::Rect, alpha: f64 },
    /// Thick stroke along a side.
    Segment { line: Line, thickness: f64 },
    /// Enlarged corner marker.
    Marker(Circle),
}

/// Everything a renderer needs to paint a selection.
#[derive(Debug, Clone, PartialEq)]
pub struct Overlay {
    pub outline: kurbo::Rect,
    pub markers: [Circle; 4],
    /// Vertical then horizontal segment through the middle.
    pub crosshair: Option<[Line; 2]>,
    pub highlight: Option<Highlight>,
}

impl Overlay {
    /// Build the overlay for `rect`. `None` for an empty rect: the renderer
    /// shows the base image only.
    pub fn new(rect: Rect, highlight: Option<RectElement>, show_crosshair: bool) -> Option<Self> {
        if rect.is_empty() {
            return None;
        }
        let rect = rect.normalized();
        let outline = kurbo::Rect::from_points(pt(rect.top_left()), pt(rect.bottom_right()));
        let markers = rect.corners().map(|c| Circle::new(pt(c), MARKER_RADIUS));
        let crosshair = show_crosshair.then(|| {
            rect.crosshair()
                .map(|(from, to)| Line::new(pt(from), pt(to)))
        });

        Some(Self {
            outline,
            markers,
            crosshair,
            highlight: highlight.and_then(|element| highlight_shape(rect, outline, element)),
        })
    }
}

fn highlight_shape(rect: Rect, outline: kurbo::Rect, element: RectElement) -> Option<Highlight> {
    match element {
        RectElement::Area => Some(Highlight::Fill {
            rect: outline,
            alpha: AREA_HIGHLIGHT_ALPHA,
        }),
        RectElement::Edge(edge) => {
            let (from, to) = match edge {
                Edge::Left => (rect.top_left(), rect.bottom_left()),
                Edge::Top => (rect.top_left(), rect.top_right()),
                Edge::Right => (rect.top_right(), rect.bottom_right()),
                Edge::Bottom => (rect.bottom_left(), rect.bottom_right()),
            };
            Some(Highlight::Segment {
                line: Line::new(pt(from), pt(to)),
                thickness: HIGHLIGHT_THICKNESS,
            })
        }
        RectElement::Corner(corner) => {
            let at = match corner {
                Corner::TopLeft => rect.top_left(),
                Corner::TopRight => rect.top_right(),
                Corner::BottomRight => rect.bottom_right(),
                Corner::BottomLeft => rect.bottom_left(),
            };
            Some(Highlight::Marker(Circle::new(pt(at), HIGHLIGHT_MARKER_RADIUS)))
        }
        // Only used while creating, never under the cursor
        RectElement::FromCenter => None,
    }
}

fn pt(p: Point) -> kurbo::Point {
    p.into()
}
