use crate::{Color, point::AxisPair, shape::ShapeId};

/// Default note text. The surface renders it drag-editable, so the template
/// tells the user what to do with it.
pub const DEFAULT_NOTE_TEXT: &str =
    "Click to edit. Drag the text\nor the arrow to move around.";

/// A text marker anchored to a data point.
///
/// Produced per click in [`Mode::Annotate`](crate::Mode::Annotate). Handed to
/// the rendering surface via the [Layout](crate::Layout) and not retained by
/// the controller.
#[derive(Debug, Clone)]
pub struct Annotation {
    /// Unique identifier for the annotation.
    pub id: ShapeId,
    /// Display text.
    pub text: String,
    /// Anchor position in data coordinates [x, y].
    pub position: [f64; 2],
    /// Axis pair the anchor belongs to.
    pub axes: AxisPair,
    /// Draw an arrow from the text to the anchor point.
    pub show_arrow: bool,
    /// Text color.
    pub color: Color,
}

impl Annotation {
    /// Create a new annotation at the given anchor with the default template
    /// text, arrow enabled, and red text.
    pub fn new(x: f64, y: f64, axes: AxisPair) -> Self {
        Self {
            id: ShapeId::new(),
            text: DEFAULT_NOTE_TEXT.to_owned(),
            position: [x, y],
            axes,
            show_arrow: true,
            color: Color::from_rgb(1.0, 0.0, 0.0),
        }
    }

    /// Set the display text.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        let t = text.into();
        if !t.is_empty() {
            self.text = t;
        }
        self
    }

    /// Set the text color.
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Enable or disable the anchor arrow.
    pub fn with_arrow(mut self, show_arrow: bool) -> Self {
        self.show_arrow = show_arrow;
        self
    }
}
