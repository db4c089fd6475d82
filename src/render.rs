//! Rendering seam: the primitive command set shapes draw through.
//!
//! Nothing in this crate touches a real drawing surface. The host implements
//! [`RenderSink`] on top of its 2D context (canvas, GPU, SVG writer, ...) and
//! calls [`draw_scene`] after every action that asks for a redraw. Commands
//! arrive in painter's order: committed shapes bottom to top, then the stroke
//! still being drawn.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use crate::geom::{Bounds, Point};
use crate::shape::{Polyline, ShapeOps, StrokeStyle};
use crate::store::ShapeStore;

/// Primitive 2D drawing commands.
pub trait RenderSink {
    /// Clear the whole surface.
    fn clear(&mut self);

    /// Stroke an open path through `points`.
    fn stroke_polyline(&mut self, points: &[Point], style: &StrokeStyle);

    /// Fill `content` with its baseline starting at `baseline`.
    fn fill_text(&mut self, content: &str, baseline: Point, font: &str, fill: &str);

    /// Outline a selection frame.
    fn stroke_rect(&mut self, rect: Bounds);

    /// Draw one filled, outlined circular resize handle.
    fn fill_handle(&mut self, center: Point, radius: f64);
}

/// Draw the full scene: committed shapes in z-order, then the in-progress stroke.
pub fn draw_scene(sink: &mut dyn RenderSink, store: &ShapeStore, in_progress: Option<&Polyline>) {
    sink.clear();
    for shape in store.iter() {
        shape.draw(sink);
    }
    if let Some(line) = in_progress {
        line.draw(sink);
    }
}
