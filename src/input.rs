//! Input model: tools and the pointer gesture state machine.
//!
//! `Tool` and `UiState` are the persistent choices visible to the renderer.
//! `InputState` is the gesture being tracked between pointer-down and
//! pointer-up, carrying everything needed to turn the next pointer position
//! into a mutation. `Mode` is its payload-free projection for cursor feedback.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::geom::Point;
use crate::hit::ControlPoint;
use crate::shape::{Polyline, ShapeId};

/// What a pointer-down on empty space creates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tool {
    /// Freehand polyline (default).
    #[default]
    Pen,
    /// Text label at the pointer, opened for editing.
    Text,
}

/// Persistent UI state visible to the renderer.
#[derive(Debug, Clone, Default)]
pub struct UiState {
    /// Currently active creation tool.
    pub tool: Tool,
    /// The id of the currently selected shape, if any.
    pub selected_id: Option<ShapeId>,
}

/// Internal state for the input state machine.
#[derive(Debug, Clone)]
pub enum InputState {
    /// No gesture in progress; waiting for the next pointer-down.
    Idle,
    /// A new polyline is accumulating points. It joins the store on pointer-up.
    Drawing {
        line: Polyline,
    },
    /// The selected shape follows the pointer.
    Dragging {
        id: ShapeId,
        /// Pointer position at the previous event.
        last: Point,
    },
    /// The selected shape scales uniformly about the corner opposite `control`.
    Scaling {
        id: ShapeId,
        /// Handle grabbed at pointer-down.
        control: ControlPoint,
        /// Fixed anchor of the scale.
        center: Point,
        /// Pointer position at the previous event.
        last: Point,
    },
}

impl Default for InputState {
    fn default() -> Self {
        Self::Idle
    }
}

impl InputState {
    #[must_use]
    pub fn mode(&self) -> Mode {
        match self {
            Self::Idle => Mode::Idle,
            Self::Drawing { .. } => Mode::Drawing,
            Self::Dragging { .. } => Mode::Dragging,
            Self::Scaling { control, .. } => Mode::Scaling(*control),
        }
    }
}

/// Current interaction mode, without gesture payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Idle,
    Drawing,
    Dragging,
    Scaling(ControlPoint),
}

impl Mode {
    /// CSS cursor name for this mode.
    #[must_use]
    pub fn cursor(self) -> &'static str {
        match self {
            Self::Idle => "default",
            Self::Drawing => "crosshair",
            Self::Dragging => "move",
            Self::Scaling(control) => control.cursor(),
        }
    }
}
