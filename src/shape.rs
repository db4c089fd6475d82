//! Shape model: freehand polylines and text labels.
//!
//! Both variants implement [`ShapeOps`], the capability set the engine and
//! the renderer rely on. [`Shape`] is the closed sum over the variants and
//! forwards every capability to the variant it holds, so callers never need
//! to inspect which kind of shape they have.
//!
//! Geometry is always derived: bounds are recomputed from the current points
//! or text anchor on every call and never cached.

#[cfg(test)]
#[path = "shape_test.rs"]
mod shape_test;

use serde::Deserialize;
use uuid::Uuid;

use crate::consts::{BODY_HIT_TOLERANCE, HANDLE_RADIUS, TEXT_BASELINE_OFFSET, TEXT_HEIGHT_FACTOR, TEXT_WIDTH_FACTOR};
use crate::engine::Action;
use crate::geom::{Bounds, Point, compute_bounds, point_to_segment_distance};
use crate::hit::{self, ControlPoint};
use crate::render::RenderSink;

/// Unique identity of a shape. Collection membership and selection are keyed by it.
pub type ShapeId = Uuid;

// =============================================================================
// STYLES
// =============================================================================

/// Stroke attributes for a polyline.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct StrokeStyle {
    /// CSS color string.
    pub color: String,
    /// Line width in canvas units.
    pub width: f64,
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self { color: "#000000".into(), width: 2.0 }
    }
}

/// Font and fill attributes for a text label.
#[derive(Debug, Clone, PartialEq)]
pub struct TextStyle {
    /// Font family name, e.g. `"Arial"`.
    pub family: String,
    /// CSS fill color.
    pub fill: String,
    /// Font size in canvas units. Drives the estimated bounds and scales with the shape.
    pub size: f64,
}

impl TextStyle {
    #[must_use]
    pub fn new(family: impl Into<String>, fill: impl Into<String>, size: f64) -> Self {
        Self { family: family.into(), fill: fill.into(), size }
    }

    /// CSS font shorthand derived from the current size, e.g. `"20px Arial"`.
    #[must_use]
    pub fn font(&self) -> String {
        format!("{:.0}px {}", self.size, self.family)
    }
}

// =============================================================================
// CAPABILITIES
// =============================================================================

/// Bounding frame and handle centres the renderer needs to draw selection UI.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Controls {
    pub frame: Bounds,
    pub handles: [(ControlPoint, Point); 4],
    /// Visual radius of each handle.
    pub radius: f64,
}

impl Controls {
    #[must_use]
    pub fn for_bounds(frame: Bounds) -> Self {
        Self { frame, handles: hit::handle_positions(&frame), radius: HANDLE_RADIUS }
    }
}

/// Capability set shared by every drawable shape.
pub trait ShapeOps {
    /// Issue draw commands for this shape, plus its controls when selected.
    fn draw(&self, sink: &mut dyn RenderSink);

    /// Body hit-test used for click selection.
    fn contains(&self, p: Point) -> bool;

    /// Pure translation by `(dx, dy)`.
    fn translate(&mut self, dx: f64, dy: f64);

    /// Axis-aligned bounds of the current geometry.
    fn bounds(&self) -> Bounds;

    /// Scale every coordinate by `(sx, sy)` about `center`.
    fn scale(&mut self, sx: f64, sy: f64, center: Point);

    /// Release anything the host holds on this shape's behalf.
    ///
    /// Returns the action the host must run to do so, if any.
    fn delete(&mut self) -> Option<Action>;

    fn set_selected(&mut self, selected: bool);

    fn is_selected(&self) -> bool;

    /// Selection frame and handles derived from [`ShapeOps::bounds`].
    fn controls(&self) -> Controls {
        Controls::for_bounds(self.bounds())
    }

    fn draw_controls(&self, sink: &mut dyn RenderSink) {
        let controls = self.controls();
        sink.stroke_rect(controls.frame);
        for (_, center) in controls.handles {
            sink.fill_handle(center, controls.radius);
        }
    }

    /// Which corner handle, if any, lies under `p`.
    fn hit_control(&self, p: Point) -> Option<ControlPoint> {
        hit::hit_control(&self.bounds(), p)
    }
}

// =============================================================================
// POLYLINE
// =============================================================================

/// A freehand stroke: points in drawing order.
#[derive(Debug, Clone, PartialEq)]
pub struct Polyline {
    id: ShapeId,
    points: Vec<Point>,
    style: StrokeStyle,
    selected: bool,
}

impl Polyline {
    /// An empty polyline with a fresh id.
    #[must_use]
    pub fn new(style: StrokeStyle) -> Self {
        Self { id: Uuid::new_v4(), points: Vec::new(), style, selected: false }
    }

    /// Build a polyline from existing points.
    #[must_use]
    pub fn from_points(style: StrokeStyle, points: Vec<Point>) -> Self {
        Self { points, ..Self::new(style) }
    }

    #[must_use]
    pub fn id(&self) -> ShapeId {
        self.id
    }

    pub fn add_point(&mut self, p: Point) {
        self.points.push(p);
    }

    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[must_use]
    pub fn style(&self) -> &StrokeStyle {
        &self.style
    }
}

impl ShapeOps for Polyline {
    fn draw(&self, sink: &mut dyn RenderSink) {
        if self.points.len() < 2 {
            return;
        }
        sink.stroke_polyline(&self.points, &self.style);
        if self.selected {
            self.draw_controls(sink);
        }
    }

    fn contains(&self, p: Point) -> bool {
        self.points
            .windows(2)
            .any(|seg| point_to_segment_distance(p, seg[0], seg[1]) <= BODY_HIT_TOLERANCE)
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        for p in &mut self.points {
            *p = p.translated(dx, dy);
        }
    }

    fn bounds(&self) -> Bounds {
        compute_bounds(&self.points)
    }

    fn scale(&mut self, sx: f64, sy: f64, center: Point) {
        for p in &mut self.points {
            *p = p.scaled_about(sx, sy, center);
        }
    }

    fn delete(&mut self) -> Option<Action> {
        None
    }

    fn set_selected(&mut self, selected: bool) {
        self.selected = selected;
    }

    fn is_selected(&self) -> bool {
        self.selected
    }
}

// =============================================================================
// TEXT
// =============================================================================

/// A single-line text label anchored at its baseline.
///
/// While the host's editing overlay is open the label neither draws its
/// glyphs nor answers body hit-tests; the overlay owns that screen area.
#[derive(Debug, Clone, PartialEq)]
pub struct Text {
    id: ShapeId,
    content: String,
    /// Left end of the baseline.
    position: Point,
    style: TextStyle,
    selected: bool,
    editing: bool,
}

impl Text {
    #[must_use]
    pub fn new(position: Point, style: TextStyle, content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            content: content.into(),
            position,
            style,
            selected: false,
            editing: false,
        }
    }

    #[must_use]
    pub fn id(&self) -> ShapeId {
        self.id
    }

    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
    }

    #[must_use]
    pub fn position(&self) -> Point {
        self.position
    }

    #[must_use]
    pub fn style(&self) -> &TextStyle {
        &self.style
    }

    #[must_use]
    pub fn is_editing(&self) -> bool {
        self.editing
    }

    /// Enter edit mode. Returns `false` if already editing.
    pub fn start_editing(&mut self) -> bool {
        !std::mem::replace(&mut self.editing, true)
    }

    /// Leave edit mode. Returns `false` if not editing.
    pub fn stop_editing(&mut self) -> bool {
        std::mem::replace(&mut self.editing, false)
    }
}

impl ShapeOps for Text {
    fn draw(&self, sink: &mut dyn RenderSink) {
        if !self.editing {
            sink.fill_text(&self.content, self.position, &self.style.font(), &self.style.fill);
        }
        if self.selected {
            self.draw_controls(sink);
        }
    }

    fn contains(&self, p: Point) -> bool {
        if self.editing {
            return false;
        }
        self.bounds().contains(p)
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        self.position = self.position.translated(dx, dy);
    }

    /// Estimated from the font size; no glyph metrics are available here.
    #[allow(clippy::cast_precision_loss)]
    fn bounds(&self) -> Bounds {
        let width = self.content.len() as f64 * self.style.size * TEXT_WIDTH_FACTOR;
        let height = self.style.size * TEXT_HEIGHT_FACTOR;
        Bounds {
            x: self.position.x,
            y: self.position.y - height + TEXT_BASELINE_OFFSET,
            width,
            height,
        }
    }

    fn scale(&mut self, sx: f64, sy: f64, center: Point) {
        self.position = self.position.scaled_about(sx, sy, center);
        self.style.size *= sx;
    }

    fn delete(&mut self) -> Option<Action> {
        self.editing = false;
        Some(Action::DisposeTextOverlay { id: self.id })
    }

    fn set_selected(&mut self, selected: bool) {
        self.selected = selected;
    }

    fn is_selected(&self) -> bool {
        self.selected
    }
}

// =============================================================================
// SHAPE
// =============================================================================

/// Any shape that can live in a [`crate::store::ShapeStore`].
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Polyline(Polyline),
    Text(Text),
}

impl Shape {
    #[must_use]
    pub fn id(&self) -> ShapeId {
        match self {
            Self::Polyline(line) => line.id(),
            Self::Text(text) => text.id(),
        }
    }

    #[must_use]
    pub fn as_polyline(&self) -> Option<&Polyline> {
        match self {
            Self::Polyline(line) => Some(line),
            Self::Text(_) => None,
        }
    }

    #[must_use]
    pub fn as_text(&self) -> Option<&Text> {
        match self {
            Self::Text(text) => Some(text),
            Self::Polyline(_) => None,
        }
    }

    pub fn as_text_mut(&mut self) -> Option<&mut Text> {
        match self {
            Self::Text(text) => Some(text),
            Self::Polyline(_) => None,
        }
    }

    fn ops(&self) -> &dyn ShapeOps {
        match self {
            Self::Polyline(line) => line,
            Self::Text(text) => text,
        }
    }

    fn ops_mut(&mut self) -> &mut dyn ShapeOps {
        match self {
            Self::Polyline(line) => line,
            Self::Text(text) => text,
        }
    }
}

impl From<Polyline> for Shape {
    fn from(line: Polyline) -> Self {
        Self::Polyline(line)
    }
}

impl From<Text> for Shape {
    fn from(text: Text) -> Self {
        Self::Text(text)
    }
}

impl ShapeOps for Shape {
    fn draw(&self, sink: &mut dyn RenderSink) {
        self.ops().draw(sink);
    }

    fn contains(&self, p: Point) -> bool {
        self.ops().contains(p)
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        self.ops_mut().translate(dx, dy);
    }

    fn bounds(&self) -> Bounds {
        self.ops().bounds()
    }

    fn scale(&mut self, sx: f64, sy: f64, center: Point) {
        self.ops_mut().scale(sx, sy, center);
    }

    fn delete(&mut self) -> Option<Action> {
        self.ops_mut().delete()
    }

    fn set_selected(&mut self, selected: bool) {
        self.ops_mut().set_selected(selected);
    }

    fn is_selected(&self) -> bool {
        self.ops().is_selected()
    }

    fn controls(&self) -> Controls {
        self.ops().controls()
    }

    fn hit_control(&self, p: Point) -> Option<ControlPoint> {
        self.ops().hit_control(p)
    }
}
