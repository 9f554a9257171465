//! Drag transforms: turn a grabbed element and a drag vector into a new rect.

use crate::element::{Corner, Edge, RectElement};
use crate::geometry::{Rect, Vector};

/// Apply a drag of `vec` on `element` to `rect`, then keep the result inside `bounds`.
///
/// `rect` is the rectangle as it was when the drag started. The result is
/// normalized, so dragging a side across its opposite side flips the rect
/// instead of producing a negative size.
pub fn transformed_rect(rect: Rect, element: RectElement, vec: Vector, bounds: Rect) -> Rect {
    let rc = base_transform(rect, element, vec).normalized();
    clamp_to_bounds(rc, element, bounds)
}

/// The raw transform for a handle, before normalization and clamping.
pub fn base_transform(rect: Rect, element: RectElement, vec: Vector) -> Rect {
    match element {
        RectElement::Area => rect.translated(vec),
        RectElement::Corner(Corner::TopLeft) => rect.translated(vec).shrunk(vec),
        RectElement::Corner(Corner::TopRight) => rect.translated(vec.proj_y()).grown(vec.neg_y()),
        RectElement::Corner(Corner::BottomRight) => rect.grown(vec),
        RectElement::Corner(Corner::BottomLeft) => rect.translated(vec.proj_x()).grown(vec.neg_x()),
        RectElement::Edge(Edge::Top) => rect.translated(vec.proj_y()).shrunk(vec.proj_y()),
        RectElement::Edge(Edge::Right) => rect.grown(vec.proj_x()),
        RectElement::Edge(Edge::Bottom) => rect.grown(vec.proj_y()),
        RectElement::Edge(Edge::Left) => rect.translated(vec.proj_x()).shrunk(vec.proj_x()),
        // Both sides move: shift the origin back and grow twice as much
        RectElement::FromCenter => rect.translated_back(vec).grown(vec * 2.0),
    }
}

/// How much the size changes per pixel of overflow when an edge is clipped.
///
/// Moving the whole area slides the rect without resizing it; a
/// center-anchored resize mirrors the clip on the opposite side.
const fn clip_factor(element: RectElement) -> i32 {
    match element {
        RectElement::Area => 0,
        RectElement::FromCenter => 2,
        RectElement::Edge(_) | RectElement::Corner(_) => 1,
    }
}

/// Pull a normalized rect back inside `bounds`, one axis at a time.
///
/// On each axis the near (left/top) edge is clipped only when it overflows
/// strictly more than the far edge does; otherwise the far edge is checked.
/// With equal overflows on both sides the far edge is clipped. A rect
/// larger than `bounds` is cut to the bounds' size.
pub fn clamp_to_bounds(rect: Rect, element: RectElement, bounds: Rect) -> Rect {
    let k = clip_factor(element);
    let mut rc = rect;

    // Inside bounds both components are >= 0 for `lt` and <= 0 for `br`
    let lt = rc.top_left() - bounds.top_left();
    let br = rc.bottom_right() - bounds.bottom_right();

    if lt.x < 0 && -lt.x > br.x {
        rc.x = bounds.x;
        rc.w += lt.x * k;
    } else if br.x > 0 {
        rc.w -= br.x * k;
        rc.x = bounds.bottom_right().x - rc.w + 1;
    }

    if lt.y < 0 && -lt.y > br.y {
        rc.y = bounds.y;
        rc.h += lt.y * k;
    } else if br.y > 0 {
        rc.h -= br.y * k;
        rc.y = bounds.bottom_right().y - rc.h + 1;
    }

    // Only a rect larger than the bounds gets here still overflowing
    if rc.w > bounds.w {
        rc.x = bounds.x;
        rc.w = bounds.w;
    }
    if rc.h > bounds.h {
        rc.y = bounds.y;
        rc.h = bounds.h;
    }

    if rc != rect {
        log::trace!("clamped {rect:?} to {rc:?} within {bounds:?}");
    }
    rc
}
