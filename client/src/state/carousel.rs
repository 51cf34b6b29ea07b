//! Horizontal carousel scroll math and drag-to-scroll tracking.
//!
//! DESIGN
//! ======
//! The DOM owns the live scroll offset; this module only decides what the
//! offset should become. `DragState` lives for one press-to-release gesture
//! and is reset on release or pointer leave.

#[cfg(test)]
#[path = "carousel_test.rs"]
mod carousel_test;

/// Drag moves the row faster than the pointer by this factor.
pub const DRAG_AMPLIFICATION: f64 = 1.5;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollDirection {
    Left,
    Right,
}

/// Signed offset change for one button press: one full viewport width.
#[must_use]
pub fn scroll_delta(direction: ScrollDirection, client_width: f64) -> f64 {
    match direction {
        ScrollDirection::Left => -client_width,
        ScrollDirection::Right => client_width,
    }
}

/// Largest valid scroll offset for a container.
#[must_use]
pub fn max_scroll(scroll_width: f64, client_width: f64) -> f64 {
    (scroll_width - client_width).max(0.0)
}

#[must_use]
pub fn clamp_scroll(offset: f64, max: f64) -> f64 {
    offset.clamp(0.0, max.max(0.0))
}

/// Pointer-tracking record for one drag gesture.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DragState {
    pub dragging: bool,
    pub start_x: f64,
    pub scroll_at_start: f64,
}

impl DragState {
    /// Pointer pressed at `x` while the container sits at `scroll_offset`.
    pub fn press(&mut self, x: f64, scroll_offset: f64) {
        *self = Self { dragging: true, start_x: x, scroll_at_start: scroll_offset };
    }

    /// New scroll offset for pointer position `x`, or `None` when not dragging.
    #[must_use]
    pub fn drag_to(&self, x: f64, max: f64) -> Option<f64> {
        if !self.dragging {
            return None;
        }
        let walk = (x - self.start_x) * DRAG_AMPLIFICATION;
        Some(clamp_scroll(self.scroll_at_start - walk, max))
    }

    /// End the gesture (pointer up or pointer left the container).
    pub fn release(&mut self) {
        *self = Self::default();
    }

    /// Cursor affordance for the container.
    #[must_use]
    pub fn cursor(&self) -> &'static str {
        if self.dragging { "grabbing" } else { "grab" }
    }
}

/// Pure model of a scroll container, used to clamp button scrolling.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CarouselModel {
    pub offset: f64,
    pub client_width: f64,
    pub scroll_width: f64,
}

impl CarouselModel {
    #[must_use]
    pub fn new(client_width: f64, scroll_width: f64) -> Self {
        Self { offset: 0.0, client_width, scroll_width }
    }

    #[must_use]
    pub fn max_scroll(&self) -> f64 {
        max_scroll(self.scroll_width, self.client_width)
    }

    /// Scroll one viewport width in `direction`, clamped to the valid range.
    pub fn scroll(&mut self, direction: ScrollDirection) -> f64 {
        self.offset = clamp_scroll(self.offset + scroll_delta(direction, self.client_width), self.max_scroll());
        self.offset
    }

    /// Apply a drag update from `drag` at pointer position `x`.
    pub fn drag(&mut self, drag: &DragState, x: f64) {
        if let Some(next) = drag.drag_to(x, self.max_scroll()) {
            self.offset = next;
        }
    }
}
