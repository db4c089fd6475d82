//! Shape collection: the ordered set of committed shapes.
//!
//! Order is z-order. The last shape is topmost: it is drawn last and wins
//! hit-tests. Membership is by [`ShapeId`] and an id appears at most once.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use crate::geom::Point;
use crate::shape::{Shape, ShapeId, ShapeOps};

/// Ordered, identity-keyed store of shapes.
#[derive(Debug, Clone, Default)]
pub struct ShapeStore {
    shapes: Vec<Shape>,
}

impl ShapeStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self { shapes: Vec::new() }
    }

    /// Add a shape on top of everything else.
    pub fn append(&mut self, shape: Shape) {
        debug_assert!(!self.contains(&shape.id()), "shape {} appended twice", shape.id());
        self.shapes.push(shape);
    }

    /// Remove the shape with `id`, returning it if it was present.
    ///
    /// The relative order of the remaining shapes is preserved.
    pub fn remove(&mut self, id: &ShapeId) -> Option<Shape> {
        let index = self.shapes.iter().position(|s| s.id() == *id)?;
        Some(self.shapes.remove(index))
    }

    #[must_use]
    pub fn get(&self, id: &ShapeId) -> Option<&Shape> {
        self.shapes.iter().find(|s| s.id() == *id)
    }

    pub fn get_mut(&mut self, id: &ShapeId) -> Option<&mut Shape> {
        self.shapes.iter_mut().find(|s| s.id() == *id)
    }

    #[must_use]
    pub fn contains(&self, id: &ShapeId) -> bool {
        self.get(id).is_some()
    }

    /// Topmost shape whose body contains `p`.
    #[must_use]
    pub fn find_topmost_at(&self, p: Point) -> Option<&Shape> {
        self.shapes.iter().rev().find(|s| s.contains(p))
    }

    /// Shapes bottom to top.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Shape> {
        self.shapes.iter()
    }

    /// Ids bottom to top.
    #[must_use]
    pub fn ids(&self) -> Vec<ShapeId> {
        self.shapes.iter().map(Shape::id).collect()
    }

    /// Number of shapes currently in the store.
    #[must_use]
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    /// Returns `true` if the store contains no shapes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }
}
