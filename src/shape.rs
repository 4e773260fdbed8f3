use core::fmt;

use crate::{Color, point::AxisPair};

/// Line styling options for drawn segments.
///
/// Determines how a segment's stroke is rendered.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LineStyle {
    /// Solid continuous line.
    Solid,
    /// Dotted line with configurable spacing.
    Dotted { spacing: f32 },
    /// Dashed line with configurable dash length.
    Dashed { length: f32 },
}

/// Unique identifier for a layout entry.
///
/// Every [Annotation](crate::Annotation) and [Shape] carries one, so a hosting
/// application that enables drag-editing on the surface can address
/// individual entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShapeId(pub(crate) u64);
impl ShapeId {
    /// Create a new unique shape ID (0, 1, 2, ...).
    pub(crate) fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static NEXT_ID: AtomicU64 = AtomicU64::new(0);
        Self(NEXT_ID.fetch_add(1, Ordering::Relaxed))
    }
}
impl fmt::Display for ShapeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Shape({})", self.0)
    }
}

/// A straight line segment between two data points.
///
/// Produced by a completed two-click gesture in
/// [`Mode::DrawLine`](crate::Mode::DrawLine); both endpoints live on the same
/// axis pair. Handed to the rendering surface via the [Layout](crate::Layout)
/// and not retained by the controller.
#[derive(Debug, Clone)]
pub struct Shape {
    /// Unique identifier for the segment.
    pub id: ShapeId,
    /// First endpoint in data coordinates [x, y].
    pub start: [f64; 2],
    /// Second endpoint in data coordinates [x, y].
    pub end: [f64; 2],
    /// Axis pair both endpoints belong to.
    pub axes: AxisPair,
    /// Stroke color.
    pub color: Color,
    /// Stroke width in pixels.
    pub width: f32,
    /// Stroke opacity in [0, 1].
    pub opacity: f32,
    /// Stroke style (solid, dashed, dotted).
    pub line_style: LineStyle,
}

impl Shape {
    /// Create a new segment between the given endpoints.
    pub fn new(start: [f64; 2], end: [f64; 2], axes: AxisPair) -> Self {
        Self {
            id: ShapeId::new(),
            start,
            end,
            axes,
            color: Color::from_rgb(0.5, 0.5, 0.5),
            width: 2.0,
            opacity: 0.75,
            line_style: LineStyle::Dotted { spacing: 4.0 },
        }
    }

    /// Set the stroke color.
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Set the stroke width in pixels.
    pub fn with_width(mut self, width: f32) -> Self {
        self.width = width.max(0.5);
        self
    }

    /// Set the stroke opacity, clamped to [0, 1].
    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity.clamp(0.0, 1.0);
        self
    }

    /// Set the stroke style.
    pub fn with_style(mut self, style: LineStyle) -> Self {
        self.line_style = style;
        self
    }
}
