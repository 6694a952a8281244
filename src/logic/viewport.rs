//! Canvas view state: pan/zoom, selection and drag tracking.
//!
//! Each operation takes the current state by value and returns the next one.

use crate::logic::geometry::Point;

pub const MIN_ZOOM: f64 = 0.1;
pub const MAX_ZOOM: f64 = 5.0;
/// Multiplier applied per zoom step.
pub const ZOOM_FACTOR: f64 = 1.1;

pub const SELECTION_COLOR: &str = "#FF9800";
pub const STROKE_COLOR: &str = "#757575";

/// Pan offset (screen pixels) and zoom scale of the canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub scale: f64,
    pub offset: Point,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            scale: 1.0,
            offset: Point::default(),
        }
    }
}

fn clamp_zoom(scale: f64) -> f64 {
    scale.clamp(MIN_ZOOM, MAX_ZOOM)
}

impl Viewport {
    pub fn zoom_in(self) -> Self {
        Self {
            scale: clamp_zoom(self.scale * ZOOM_FACTOR),
            ..self
        }
    }

    pub fn zoom_out(self) -> Self {
        Self {
            scale: clamp_zoom(self.scale / ZOOM_FACTOR),
            ..self
        }
    }

    /// Wheel zoom centred on `pointer`: the world point under the pointer stays put.
    /// Negative `delta_y` (wheel up) zooms in.
    pub fn wheel_zoom(self, pointer: Point, delta_y: f64) -> Self {
        let anchor = self.screen_to_world(pointer);
        let scale = if delta_y < 0.0 {
            self.scale * ZOOM_FACTOR
        } else {
            self.scale / ZOOM_FACTOR
        };
        let scale = clamp_zoom(scale);
        Self {
            scale,
            offset: Point::new(pointer.x - anchor.x * scale, pointer.y - anchor.y * scale),
        }
    }

    pub fn pan_to(self, offset: Point) -> Self {
        Self { offset, ..self }
    }

    pub fn reset(self) -> Self {
        Self::default()
    }

    pub fn screen_to_world(&self, screen: Point) -> Point {
        Point::new(
            (screen.x - self.offset.x) / self.scale,
            (screen.y - self.offset.y) / self.scale,
        )
    }

    pub fn world_to_screen(&self, world: Point) -> Point {
        Point::new(
            world.x * self.scale + self.offset.x,
            world.y * self.scale + self.offset.y,
        )
    }

    /// Outline width that stays constant on screen regardless of zoom.
    pub fn stroke_width(&self, selected: bool) -> f64 {
        let base = if selected { 2.0 } else { 1.0 };
        base / self.scale
    }
}

pub fn stroke_color(selected: bool) -> &'static str {
    if selected {
        SELECTION_COLOR
    } else {
        STROKE_COLOR
    }
}

/// The element currently selected on the canvas, if any.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection(Option<String>);

impl Selection {
    pub fn select(self, element_id: impl Into<String>) -> Self {
        Self(Some(element_id.into()))
    }

    pub fn clear(self) -> Self {
        Self(None)
    }

    pub fn is_selected(&self, element_id: &str) -> bool {
        self.0.as_deref() == Some(element_id)
    }

    pub fn selected(&self) -> Option<&str> {
        self.0.as_deref()
    }
}

/// Drag lifecycle for a single element.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum DragState {
    #[default]
    Idle,
    Dragging {
        element_id: String,
        /// Latest pointer position, in canvas pixels.
        current: Point,
    },
}

impl DragState {
    pub fn start(element_id: impl Into<String>, at: Point) -> Self {
        Self::Dragging {
            element_id: element_id.into(),
            current: at,
        }
    }

    /// Follows the pointer; ignored when nothing is being dragged.
    pub fn move_to(self, at: Point) -> Self {
        match self {
            Self::Dragging { element_id, .. } => Self::Dragging {
                element_id,
                current: at,
            },
            Self::Idle => Self::Idle,
        }
    }

    /// Ends the drag, yielding the dragged element and its drop point.
    pub fn finish(self) -> (Self, Option<(String, Point)>) {
        match self {
            Self::Dragging {
                element_id,
                current,
            } => (Self::Idle, Some((element_id, current))),
            Self::Idle => (Self::Idle, None),
        }
    }
}
