//! Interaction engine: pointer gestures in, shape mutations and host actions out.
//!
//! `Engine` owns the shape store, the selection, and the gesture in
//! progress. The host feeds it normalized pointer positions and processes
//! the returned [`Action`]s. All handlers are synchronous and run to
//! completion.
//!
//! Pointer-down resolves in priority order:
//!
//! 1. a handle of the selected shape starts scaling
//! 2. a body hit (topmost first) selects and starts dragging
//! 3. empty space deselects and starts a new shape with the active tool

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

use tracing::{debug, trace, warn};

use crate::config::{ConfigError, EngineConfig, is_positive_finite};
use crate::geom::Point;
use crate::hit;
use crate::input::{InputState, Mode, Tool, UiState};
use crate::render::{self, RenderSink};
use crate::shape::{Polyline, Shape, ShapeId, ShapeOps, StrokeStyle, Text, TextStyle};
use crate::store::ShapeStore;

/// Actions returned from input handlers for the host to process.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Shapes or selection UI changed; redraw the scene.
    RenderNeeded,
    /// Switch the pointer cursor to the named CSS cursor.
    SetCursor(&'static str),
    /// A new shape joined the store.
    ShapeCommitted(ShapeId),
    /// An existing shape's geometry or content changed.
    ShapeUpdated(ShapeId),
    /// A shape left the store.
    ShapeDeleted(ShapeId),
    /// The selection changed to the given shape, or to nothing.
    SelectionChanged(Option<ShapeId>),
    /// Show the editing overlay for a text label.
    StartTextEditing { id: ShapeId, anchor: Point, font: String, fill: String, content: String },
    /// Hide the editing overlay for a text label.
    StopTextEditing { id: ShapeId },
    /// Destroy the editing overlay owned for a deleted text label.
    DisposeTextOverlay { id: ShapeId },
}

/// Shape store plus selection and gesture state.
#[derive(Debug, Clone, Default)]
pub struct Engine {
    store: ShapeStore,
    ui: UiState,
    input: InputState,
    stroke: StrokeStyle,
    config: EngineConfig,
}

impl Engine {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Engine whose new shapes start from `config`'s styles.
    ///
    /// # Errors
    ///
    /// Returns the first field [`EngineConfig::validate`] rejects.
    pub fn with_config(config: EngineConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { stroke: config.stroke.clone(), config, ..Self::default() })
    }

    // --- Pointer events ---

    /// Pointer pressed at `pos`.
    pub fn start_interaction(&mut self, pos: Point) -> Vec<Action> {
        let mut actions = Vec::new();

        if let InputState::Drawing { line } = &self.input {
            debug!(points = line.len(), "discarding unfinished polyline");
        }
        self.input = InputState::Idle;

        if let Some(id) = self.ui.selected_id {
            debug_assert!(self.store.contains(&id), "selected shape {id} missing from the store");
            if let Some(shape) = self.store.get(&id) {
                if let Some(control) = shape.hit_control(pos) {
                    let center = hit::scale_center(control, &shape.bounds());
                    debug!(%id, ?control, ?center, "scaling started");
                    self.input = InputState::Scaling { id, control, center, last: pos };
                    actions.push(Action::SetCursor(control.cursor()));
                    return actions;
                }
            }
        }

        if let Some(id) = self.store.find_topmost_at(pos).map(Shape::id) {
            self.select(Some(id), &mut actions);
            debug!(%id, "dragging started");
            self.input = InputState::Dragging { id, last: pos };
            actions.push(Action::SetCursor(Mode::Dragging.cursor()));
            actions.push(Action::RenderNeeded);
            return actions;
        }

        self.select(None, &mut actions);
        match self.ui.tool {
            Tool::Pen => {
                let mut line = Polyline::new(self.stroke.clone());
                line.add_point(pos);
                debug!(id = %line.id(), "drawing started");
                self.input = InputState::Drawing { line };
                actions.push(Action::SetCursor(Mode::Drawing.cursor()));
            }
            Tool::Text => {
                let id = self.place_text(pos, self.config.text.style());
                actions.push(Action::ShapeCommitted(id));
                self.select(Some(id), &mut actions);
                actions.extend(self.begin_text_edit(id));
            }
        }
        actions.push(Action::RenderNeeded);
        actions
    }

    /// Pointer moved to `pos`, with or without a button held.
    pub fn continue_interaction(&mut self, pos: Point) -> Vec<Action> {
        match &mut self.input {
            InputState::Idle => Vec::new(),
            InputState::Drawing { line } => {
                line.add_point(pos);
                trace!(points = line.len(), "point added");
                vec![Action::RenderNeeded]
            }
            InputState::Dragging { id, last } => {
                let (dx, dy) = (pos.x - last.x, pos.y - last.y);
                *last = pos;
                let id = *id;
                debug_assert!(self.store.contains(&id), "dragged shape {id} missing from the store");
                let Some(shape) = self.store.get_mut(&id) else {
                    return Vec::new();
                };
                shape.translate(dx, dy);
                trace!(%id, dx, dy, "shape moved");
                vec![Action::ShapeUpdated(id), Action::RenderNeeded]
            }
            InputState::Scaling { id, control, center, last } => {
                let factor = hit::scale_factor(*control, *center, *last, pos);
                *last = pos;
                let (id, center) = (*id, *center);
                debug_assert!(self.store.contains(&id), "scaled shape {id} missing from the store");
                let Some(shape) = self.store.get_mut(&id) else {
                    return Vec::new();
                };
                shape.scale(factor, factor, center);
                trace!(%id, factor, "shape scaled");
                vec![Action::ShapeUpdated(id), Action::RenderNeeded]
            }
        }
    }

    /// Pointer released. Commits a drawn polyline or ends a drag or scale.
    ///
    /// A polyline with fewer than two points (a click without movement) is
    /// discarded rather than committed.
    pub fn end_interaction(&mut self) -> Vec<Action> {
        let cursor = Action::SetCursor(Mode::Idle.cursor());
        match std::mem::take(&mut self.input) {
            InputState::Idle => Vec::new(),
            InputState::Drawing { line } => {
                if line.len() < 2 {
                    debug!(id = %line.id(), points = line.len(), "discarding polyline without movement");
                    return vec![cursor, Action::RenderNeeded];
                }
                let id = line.id();
                debug!(%id, points = line.len(), "polyline committed");
                self.store.append(line.into());
                vec![Action::ShapeCommitted(id), cursor, Action::RenderNeeded]
            }
            InputState::Dragging { id, .. } => {
                debug!(%id, "dragging ended");
                vec![cursor]
            }
            InputState::Scaling { id, control, .. } => {
                debug!(%id, ?control, "scaling ended");
                vec![cursor]
            }
        }
    }

    // --- Deletion ---

    /// Remove and dispose the selected shape.
    pub fn delete_selection(&mut self) -> Vec<Action> {
        let Some(id) = self.ui.selected_id else {
            return Vec::new();
        };
        debug_assert!(self.store.contains(&id), "selected shape {id} missing from the store");
        self.remove_shape(&id)
    }

    /// Remove and dispose any shape by id. Absent ids are a no-op.
    pub fn remove_shape(&mut self, id: &ShapeId) -> Vec<Action> {
        let Some(mut shape) = self.store.remove(id) else {
            return Vec::new();
        };
        debug!(%id, "shape deleted");

        let mut actions = Vec::new();
        actions.extend(shape.delete());
        actions.push(Action::ShapeDeleted(*id));

        if self.ui.selected_id == Some(*id) {
            self.ui.selected_id = None;
            actions.push(Action::SelectionChanged(None));
        }
        if matches!(self.input, InputState::Dragging { id: gesture, .. } | InputState::Scaling { id: gesture, .. } if gesture == *id)
        {
            self.input = InputState::Idle;
            actions.push(Action::SetCursor(Mode::Idle.cursor()));
        }
        actions.push(Action::RenderNeeded);
        actions
    }

    // --- Styles and tools ---

    /// Stroke color for polylines started from now on.
    pub fn set_stroke_style(&mut self, color: impl Into<String>) {
        self.stroke.color = color.into();
    }

    /// Stroke width for polylines started from now on. Non-positive or
    /// non-finite widths are ignored.
    pub fn set_stroke_width(&mut self, width: f64) {
        if !is_positive_finite(width) {
            warn!(width, "ignoring invalid stroke width");
            return;
        }
        self.stroke.width = width;
    }

    pub fn set_tool(&mut self, tool: Tool) {
        self.ui.tool = tool;
    }

    // --- Text ---

    /// Insert a text label with the configured placeholder content on top of
    /// the scene and return its handle.
    ///
    /// A non-positive or non-finite font size is replaced by the configured
    /// default size.
    pub fn place_text(&mut self, position: Point, mut style: TextStyle) -> ShapeId {
        if !is_positive_finite(style.size) {
            warn!(size = style.size, fallback = self.config.text.size, "invalid font size for placed text");
            style.size = self.config.text.size;
        }
        let text = Text::new(position, style, self.config.text.content.clone());
        let id = text.id();
        debug!(%id, ?position, "text placed");
        self.store.append(text.into());
        id
    }

    /// Open the host's editing overlay on a text label.
    pub fn begin_text_edit(&mut self, id: ShapeId) -> Vec<Action> {
        let Some(text) = self.store.get_mut(&id).and_then(Shape::as_text_mut) else {
            warn!(%id, "edit requested for a shape that is not text");
            return Vec::new();
        };
        if !text.start_editing() {
            return Vec::new();
        }
        vec![
            Action::StartTextEditing {
                id,
                anchor: text.position(),
                font: text.style().font(),
                fill: text.style().fill.clone(),
                content: text.content().to_string(),
            },
            Action::RenderNeeded,
        ]
    }

    /// Close the editing overlay on a text label.
    pub fn end_text_edit(&mut self, id: ShapeId) -> Vec<Action> {
        if self.store.get_mut(&id).and_then(Shape::as_text_mut).is_some_and(Text::stop_editing) {
            return vec![Action::StopTextEditing { id }, Action::RenderNeeded];
        }
        Vec::new()
    }

    /// Content change notification from the editing overlay.
    pub fn set_text_content(&mut self, id: ShapeId, content: impl Into<String>) -> Vec<Action> {
        let Some(text) = self.store.get_mut(&id).and_then(Shape::as_text_mut) else {
            warn!(%id, "content update for a shape that is not text");
            return Vec::new();
        };
        text.set_content(content);
        vec![Action::ShapeUpdated(id), Action::RenderNeeded]
    }

    // --- Render ---

    /// Issue draw commands for the current scene.
    pub fn render(&self, sink: &mut dyn RenderSink) {
        render::draw_scene(sink, &self.store, self.current_shape());
    }

    // --- Queries ---

    /// Committed shapes bottom to top.
    pub fn shapes(&self) -> impl DoubleEndedIterator<Item = &Shape> {
        self.store.iter()
    }

    #[must_use]
    pub fn store(&self) -> &ShapeStore {
        &self.store
    }

    #[must_use]
    pub fn shape(&self, id: &ShapeId) -> Option<&Shape> {
        self.store.get(id)
    }

    /// The currently selected shape's id, if any.
    #[must_use]
    pub fn selection(&self) -> Option<ShapeId> {
        self.ui.selected_id
    }

    #[must_use]
    pub fn selected_shape(&self) -> Option<&Shape> {
        self.ui.selected_id.and_then(|id| self.store.get(&id))
    }

    /// The polyline being drawn, not yet in the store.
    #[must_use]
    pub fn current_shape(&self) -> Option<&Polyline> {
        match &self.input {
            InputState::Drawing { line } => Some(line),
            _ => None,
        }
    }

    #[must_use]
    pub fn mode(&self) -> Mode {
        self.input.mode()
    }

    #[must_use]
    pub fn tool(&self) -> Tool {
        self.ui.tool
    }

    #[must_use]
    pub fn stroke_style(&self) -> &StrokeStyle {
        &self.stroke
    }

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Cursor to show while hovering `pos` with no button held.
    #[must_use]
    pub fn hover_cursor(&self, pos: Point) -> &'static str {
        if self.mode() != Mode::Idle {
            return self.mode().cursor();
        }
        if let Some(control) = self.selected_shape().and_then(|s| s.hit_control(pos)) {
            return control.cursor();
        }
        if self.store.find_topmost_at(pos).is_some() {
            return Mode::Dragging.cursor();
        }
        match self.ui.tool {
            Tool::Pen => Mode::Drawing.cursor(),
            Tool::Text => "text",
        }
    }

    // --- Internal ---

    /// Move the selection flag from the current selection to `id`.
    ///
    /// A text label losing selection also leaves edit mode.
    fn select(&mut self, id: Option<ShapeId>, actions: &mut Vec<Action>) {
        if self.ui.selected_id == id {
            return;
        }
        if let Some(prev) = self.ui.selected_id.take() {
            if let Some(shape) = self.store.get_mut(&prev) {
                shape.set_selected(false);
                if shape.as_text_mut().is_some_and(Text::stop_editing) {
                    actions.push(Action::StopTextEditing { id: prev });
                }
            }
        }
        if let Some(id) = id {
            if let Some(shape) = self.store.get_mut(&id) {
                shape.set_selected(true);
                self.ui.selected_id = Some(id);
            }
        }
        debug!(selected = ?self.ui.selected_id, "selection changed");
        actions.push(Action::SelectionChanged(self.ui.selected_id));
    }
}
