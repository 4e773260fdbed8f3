use crate::{
    Color,
    controller::AnnotationController,
    shape::LineStyle,
    surface::RenderSurface,
};

/// Builder for configuring and constructing an [AnnotationController].
///
/// Provides a fluent API for overriding the note and line styling before the
/// controller is bound to its surface. All settings have sensible defaults.
///
/// # Example
///
/// ```ignore
/// let controller = AnnotationControllerBuilder::new()
///     .with_note_text("reviewed")
///     .with_note_color(Color::from_rgb(0.1, 0.1, 0.8))
///     .with_line_width(1.0)
///     .with_line_style(LineStyle::Solid)
///     .build(surface);
/// ```
#[derive(Default)]
pub struct AnnotationControllerBuilder {
    note_text: Option<String>,
    note_color: Option<Color>,
    line_color: Option<Color>,
    line_width: Option<f32>,
    line_opacity: Option<f32>,
    line_style: Option<LineStyle>,
}

impl AnnotationControllerBuilder {
    /// Create a new AnnotationControllerBuilder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the text applied to new annotations.
    pub fn with_note_text(mut self, text: impl Into<String>) -> Self {
        let t = text.into();
        if !t.is_empty() {
            self.note_text = Some(t);
        }
        self
    }

    /// Set the color applied to new annotations.
    pub fn with_note_color(mut self, color: Color) -> Self {
        self.note_color = Some(color);
        self
    }

    /// Set the stroke color applied to new line segments.
    pub fn with_line_color(mut self, color: Color) -> Self {
        self.line_color = Some(color);
        self
    }

    /// Set the stroke width applied to new line segments.
    pub fn with_line_width(mut self, width: f32) -> Self {
        self.line_width = Some(width.max(0.5));
        self
    }

    /// Set the stroke opacity applied to new line segments.
    pub fn with_line_opacity(mut self, opacity: f32) -> Self {
        self.line_opacity = Some(opacity.clamp(0.0, 1.0));
        self
    }

    /// Set the stroke style applied to new line segments.
    pub fn with_line_style(mut self, style: LineStyle) -> Self {
        self.line_style = Some(style);
        self
    }

    /// Build the controller, binding it to the given rendering surface.
    pub fn build<S: RenderSurface>(self, surface: S) -> AnnotationController<S> {
        let mut c = AnnotationController::new(surface);

        if let Some(text) = self.note_text {
            c.set_note_text(text);
        }
        if let Some(color) = self.note_color {
            c.set_note_color(color);
        }
        if let Some(color) = self.line_color {
            c.set_line_color(color);
        }
        if let Some(width) = self.line_width {
            c.set_line_width(width);
        }
        if let Some(opacity) = self.line_opacity {
            c.set_line_opacity(opacity);
        }
        if let Some(style) = self.line_style {
            c.set_line_style(style);
        }

        c
    }
}
