//! Interactive rectangle selection.
//!
//! [`RectSelection`] turns pointer events into selection updates:
//! - press on a side, corner or the inner area grabs that element
//! - press anywhere else inside the bounds starts a new selection
//! - moving with the primary button held previews the transformed rect
//! - release commits it, the secondary button cancels
//!
//! The state machine never paints. It reports what to show through a
//! [`SelectionListener`].

use crate::config::{SelectionConfig, validate_bounds};
use crate::element::{RectElement, classify};
use crate::error::SelectionResult;
use crate::geometry::{Point, Rect, Vector};
use crate::input::{MouseButton, PointerEvent};
use crate::transform::transformed_rect;

/// Receives the visual and semantic updates of a selection.
///
/// Both methods default to doing nothing.
pub trait SelectionListener {
    /// The overlay must be repainted with `rect`, optionally highlighting
    /// `highlight`. An empty rect means "show the image without overlay".
    fn on_redraw(&mut self, rect: Rect, highlight: Option<RectElement>) {
        let _ = (rect, highlight);
    }

    /// A gesture finished (released or cancelled) with `rect` selected.
    fn on_selection_changed(&mut self, rect: Rect) {
        let _ = rect;
    }
}

impl SelectionListener for () {}

/// A recorded listener notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionEvent {
    Redraw {
        rect: Rect,
        highlight: Option<RectElement>,
    },
    SelectionChanged(Rect),
}

/// Records notifications, e.g. `Vec<SelectionEvent>` or a widget's own
/// event type wrapping [`SelectionEvent`].
impl<T: From<SelectionEvent>> SelectionListener for Vec<T> {
    fn on_redraw(&mut self, rect: Rect, highlight: Option<RectElement>) {
        self.push(SelectionEvent::Redraw { rect, highlight }.into());
    }

    fn on_selection_changed(&mut self, rect: Rect) {
        self.push(SelectionEvent::SelectionChanged(rect).into());
    }
}

/// Gesture state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    /// No button pressed.
    #[default]
    Idle,
    /// Primary button held on `element`.
    Dragging {
        /// The grabbed element.
        element: RectElement,
        /// The rect when the button went down; every frame starts from it.
        origin: Rect,
        /// Pointer position when the button went down.
        press: Point,
    },
}

/// Rectangle selection state machine.
#[derive(Debug, Clone)]
pub struct RectSelection {
    config: SelectionConfig,
    bounds: Rect,
    /// Last committed rect: empty, or normalized and inside `bounds`.
    selection: Rect,
    state: DragState,
    /// Element under the cursor at the last idle move. `None` until the
    /// first move and after each commit, so the next move always repaints.
    hover: Option<Option<RectElement>>,
}

impl RectSelection {
    /// Create a selection over a display of `width` x `height` pixels.
    pub fn new(width: i32, height: i32, config: SelectionConfig) -> SelectionResult<Self> {
        config.validate()?;
        let bounds = config.resolve_bounds(width, height)?;
        Ok(Self {
            config,
            bounds,
            selection: Rect::default(),
            state: DragState::Idle,
            hover: None,
        })
    }

    /// The committed selection.
    pub fn selection(&self) -> Rect {
        self.selection
    }

    /// The rectangle every selection is kept inside.
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Construction parameters.
    pub fn config(&self) -> &SelectionConfig {
        &self.config
    }

    /// Current gesture state.
    pub fn state(&self) -> DragState {
        self.state
    }

    /// Whether a primary-button drag is in progress.
    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }

    /// The element grabbed by the drag in progress.
    pub fn grabbed(&self) -> Option<RectElement> {
        match self.state {
            DragState::Dragging { element, .. } => Some(element),
            DragState::Idle => None,
        }
    }

    /// The element of the committed selection under `point`.
    pub fn element_at(&self, point: Point) -> Option<RectElement> {
        classify(point, self.selection, self.config.cursor_tolerance)
    }

    /// Replace the bounds, shrinking the current selection to fit.
    ///
    /// A drag in progress continues from its starting rect cut to the new
    /// bounds, or is dropped if nothing of it is left.
    pub fn set_bounds(&mut self, bounds: Rect) -> SelectionResult<()> {
        validate_bounds(bounds)?;
        log::debug!("Selection bounds set to {bounds:?}");
        self.bounds = bounds;
        self.selection = self.selection.intersect(&bounds);
        if let DragState::Dragging { origin, .. } = &mut self.state {
            *origin = origin.intersect(&bounds);
            if origin.is_empty() {
                log::debug!("Drag origin left the bounds, gesture dropped");
                self.state = DragState::Idle;
            }
        }
        Ok(())
    }

    /// Replace the selection programmatically.
    ///
    /// The rect is normalized and cut to the bounds, then repainted and
    /// reported like a finished gesture.
    pub fn set_selection(&mut self, rect: Rect, listener: &mut impl SelectionListener) {
        let rect = if rect.is_empty() {
            Rect::default()
        } else {
            rect.normalized().intersect(&self.bounds)
        };
        self.selection = rect;
        listener.on_redraw(rect, None);
        listener.on_selection_changed(rect);
    }

    /// Repaint the committed selection, e.g. after the underlying image changed.
    pub fn refresh(&self, listener: &mut impl SelectionListener) {
        listener.on_redraw(self.selection, None);
    }

    /// Feed a pointer event. Returns `true` if the event was used.
    pub fn handle_pointer_event(
        &mut self,
        event: PointerEvent,
        listener: &mut impl SelectionListener,
    ) -> bool {
        match event {
            PointerEvent::Down {
                position,
                button: MouseButton::Primary,
            } => self.press(position, listener),
            PointerEvent::Down {
                position,
                button: MouseButton::Secondary,
            } => self.cancel(position, listener),
            PointerEvent::Move { position, buttons } if buttons.primary && self.is_dragging() => {
                self.drag(position, listener)
            }
            PointerEvent::Move { position, .. } => self.hover(position, listener),
            PointerEvent::Up {
                position,
                button: MouseButton::Primary,
            } => self.release(position, listener),
            PointerEvent::Down { .. } | PointerEvent::Up { .. } => false,
        }
    }

    fn press(&mut self, position: Point, listener: &mut impl SelectionListener) -> bool {
        // A handle may be grabbed slightly outside the bounds, see `cursor_tolerance`
        let (element, origin) = match self.element_at(position) {
            Some(element) => (element, self.selection),
            None if self.bounds.contains(position, 0) => {
                let element = if self.config.from_center {
                    RectElement::FromCenter
                } else {
                    RectElement::BOTTOM_RIGHT
                };
                (element, Rect::from_point(position))
            }
            None => return false,
        };
        log::debug!("Grabbed {element:?} of {origin:?} at {position:?}");
        self.state = DragState::Dragging {
            element,
            origin,
            press: position,
        };
        listener.on_redraw(transformed_rect(origin, element, Vector::ZERO, self.bounds), None);
        true
    }

    fn drag(&mut self, position: Point, listener: &mut impl SelectionListener) -> bool {
        let Some(rect) = self.dragged_rect(position) else {
            return false;
        };
        log::trace!("Dragged to {position:?}: {rect:?}");
        listener.on_redraw(rect, None);
        true
    }

    fn hover(&mut self, position: Point, listener: &mut impl SelectionListener) -> bool {
        let element = self.element_at(position);
        if self.hover == Some(element) {
            return false;
        }
        self.hover = Some(element);
        listener.on_redraw(self.selection, element);
        true
    }

    fn release(&mut self, position: Point, listener: &mut impl SelectionListener) -> bool {
        let DragState::Dragging { element, press, .. } = self.state else {
            return false;
        };
        let Some(mut rect) = self.dragged_rect(position) else {
            return false;
        };
        if self.config.click_clears && element == RectElement::Area && position == press {
            log::debug!("Click inside selection, clearing it");
            rect = Rect::default();
            listener.on_redraw(rect, None);
        }
        log::debug!("Selection committed: {rect:?}");
        self.state = DragState::Idle;
        self.hover = None;
        self.selection = rect;
        listener.on_selection_changed(rect);
        true
    }

    fn cancel(&mut self, position: Point, listener: &mut impl SelectionListener) -> bool {
        if self.is_dragging() {
            log::debug!("Gesture cancelled, keeping {:?}", self.selection);
        }
        self.state = DragState::Idle;
        let element = self.element_at(position);
        self.hover = Some(element);
        listener.on_redraw(self.selection, element);
        listener.on_selection_changed(self.selection);
        true
    }

    /// The rect the drag in progress would produce with the pointer at `position`.
    fn dragged_rect(&self, position: Point) -> Option<Rect> {
        match self.state {
            DragState::Dragging {
                element,
                origin,
                press,
            } => Some(transformed_rect(origin, element, position - press, self.bounds)),
            DragState::Idle => None,
        }
    }
}
