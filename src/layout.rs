use indexmap::IndexMap;

use crate::{
    annotation::Annotation,
    shape::{Shape, ShapeId},
};

/// The chart decorations handed to the rendering surface, distinct from the
/// underlying data series.
///
/// Collections are created lazily on the first append and removed entirely by
/// [`Layout::clear`], so a surface can distinguish "no collection" from
/// "empty collection". Entries keep insertion order, which is their render
/// order.
#[derive(Debug, Clone, Default)]
pub struct Layout {
    annotations: Option<IndexMap<ShapeId, Annotation>>,
    shapes: Option<IndexMap<ShapeId, Shape>>,
    data_version: u64,
}

impl Layout {
    /// Create an empty layout with neither collection present.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an annotation, creating the collection if absent.
    pub fn push_annotation(&mut self, annotation: Annotation) -> ShapeId {
        let id = annotation.id;
        self.annotations
            .get_or_insert_with(IndexMap::new)
            .insert(id, annotation);
        self.data_version = self.data_version.wrapping_add(1);
        id
    }

    /// Append a shape, creating the collection if absent.
    pub fn push_shape(&mut self, shape: Shape) -> ShapeId {
        let id = shape.id;
        self.shapes
            .get_or_insert_with(IndexMap::new)
            .insert(id, shape);
        self.data_version = self.data_version.wrapping_add(1);
        id
    }

    /// Remove both collections entirely.
    pub fn clear(&mut self) {
        self.annotations = None;
        self.shapes = None;
        self.data_version = self.data_version.wrapping_add(1);
    }

    /// Reset the annotation collection to present-but-empty, leaving shapes
    /// untouched. Useful when re-plotting a figure whose imported layout
    /// carries notes that should not survive.
    pub fn strip_annotations(&mut self) {
        self.annotations = Some(IndexMap::new());
        self.data_version = self.data_version.wrapping_add(1);
    }

    /// Whether the annotation collection exists (it may still be empty).
    pub fn has_annotations(&self) -> bool {
        self.annotations.is_some()
    }

    /// Whether the shape collection exists (it may still be empty).
    pub fn has_shapes(&self) -> bool {
        self.shapes.is_some()
    }

    /// Iterate the annotations in insertion order.
    pub fn annotations(&self) -> impl Iterator<Item = &Annotation> {
        self.annotations
            .as_ref()
            .map(IndexMap::values)
            .into_iter()
            .flatten()
    }

    /// Iterate the shapes in insertion order.
    pub fn shapes(&self) -> impl Iterator<Item = &Shape> {
        self.shapes
            .as_ref()
            .map(IndexMap::values)
            .into_iter()
            .flatten()
    }

    /// Number of annotations (0 when the collection is absent).
    pub fn annotation_count(&self) -> usize {
        self.annotations.as_ref().map_or(0, IndexMap::len)
    }

    /// Number of shapes (0 when the collection is absent).
    pub fn shape_count(&self) -> usize {
        self.shapes.as_ref().map_or(0, IndexMap::len)
    }

    /// Counter bumped on every mutation; lets a surface skip redundant syncs.
    pub fn data_version(&self) -> u64 {
        self.data_version
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::point::AxisPair;

    fn axes() -> AxisPair {
        AxisPair::new("x", "y")
    }

    #[test]
    fn test_collections_start_absent() {
        let layout = Layout::new();
        assert!(!layout.has_annotations());
        assert!(!layout.has_shapes());
        assert_eq!(layout.annotation_count(), 0);
        assert_eq!(layout.shape_count(), 0);
    }

    #[test]
    fn test_push_creates_collection_lazily() {
        let mut layout = Layout::new();
        layout.push_annotation(Annotation::new(1.0, 2.0, axes()));
        assert!(layout.has_annotations());
        assert!(!layout.has_shapes());
        assert_eq!(layout.annotation_count(), 1);

        layout.push_shape(Shape::new([0.0, 0.0], [1.0, 1.0], axes()));
        assert!(layout.has_shapes());
        assert_eq!(layout.shape_count(), 1);
    }

    #[test]
    fn test_clear_removes_collections_not_just_entries() {
        let mut layout = Layout::new();
        layout.push_annotation(Annotation::new(1.0, 2.0, axes()));
        layout.push_shape(Shape::new([0.0, 0.0], [1.0, 1.0], axes()));
        layout.clear();
        assert!(!layout.has_annotations());
        assert!(!layout.has_shapes());
    }

    #[test]
    fn test_strip_annotations_leaves_empty_collection() {
        let mut layout = Layout::new();
        layout.push_annotation(Annotation::new(1.0, 2.0, axes()));
        layout.push_shape(Shape::new([0.0, 0.0], [1.0, 1.0], axes()));
        layout.strip_annotations();
        assert!(layout.has_annotations());
        assert_eq!(layout.annotation_count(), 0);
        assert_eq!(layout.shape_count(), 1);
    }

    #[test]
    fn test_data_version_bumps_on_every_mutation() {
        let mut layout = Layout::new();
        let v0 = layout.data_version();
        layout.push_annotation(Annotation::new(1.0, 2.0, axes()));
        let v1 = layout.data_version();
        assert_ne!(v0, v1);
        layout.clear();
        assert_ne!(v1, layout.data_version());
    }
}
