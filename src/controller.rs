use log::{debug, trace};

use crate::{
    Color,
    annotation::Annotation,
    layout::Layout,
    message::ToolbarMessage,
    mode::Mode,
    point::{ClickError, ClickPoint},
    shape::{LineStyle, Shape},
    surface::{RenderSurface, ToolButton},
};

/// Interaction state machine for chart annotations.
///
/// Owns the decoration [Layout] for one chart instance and interprets toolbar
/// commands and click events under the current [Mode], pushing every layout
/// change to the rendering surface as it happens. All operations run to
/// completion synchronously; `&mut self` gives the serialized access the
/// event loop already guarantees.
pub struct AnnotationController<S: RenderSurface> {
    surface: S,
    layout: Layout,
    mode: Mode,
    /// First click of an in-progress line gesture, if any.
    pending: Option<ClickPoint>,
    // Styling applied to emitted annotations and shapes.
    note_text: String,
    note_color: Color,
    line_color: Color,
    line_width: f32,
    line_opacity: f32,
    line_style: LineStyle,
}

impl<S: RenderSurface> AnnotationController<S> {
    /// Create a controller with default styling, bound to the given surface.
    pub fn new(surface: S) -> Self {
        Self {
            surface,
            layout: Layout::new(),
            mode: Mode::None,
            pending: None,
            note_text: crate::DEFAULT_NOTE_TEXT.to_owned(),
            note_color: Color::from_rgb(1.0, 0.0, 0.0),
            line_color: Color::from_rgb(0.5, 0.5, 0.5),
            line_width: 2.0,
            line_opacity: 0.75,
            line_style: LineStyle::Dotted { spacing: 4.0 },
        }
    }

    /// The currently active mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// The decoration layout owned by this controller.
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Whether a line gesture is waiting for its second click.
    pub fn has_pending_point(&self) -> bool {
        self.pending.is_some()
    }

    /// The rendering surface this controller drives.
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Mutable access to the rendering surface.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Dispatch a toolbar command.
    pub fn apply(&mut self, message: ToolbarMessage) {
        match message {
            ToolbarMessage::ToggleAnnotate => self.enable_annotate(),
            ToolbarMessage::ToggleDrawLine => self.enable_draw_line(),
            ToolbarMessage::Erase => self.erase(),
        }
    }

    /// Toggle annotate mode. Entering it forces line-draw mode off; invoking
    /// it while already active returns to [`Mode::None`].
    pub fn enable_annotate(&mut self) {
        let next = match self.mode {
            Mode::Annotate => Mode::None,
            _ => Mode::Annotate,
        };
        self.set_mode(next);
    }

    /// Toggle line-draw mode. Entering it forces annotate mode off; invoking
    /// it while already active returns to [`Mode::None`].
    pub fn enable_draw_line(&mut self) {
        let next = match self.mode {
            Mode::DrawLine => Mode::None,
            _ => Mode::DrawLine,
        };
        self.set_mode(next);
    }

    /// Leave both modes off and drop any buffered click.
    pub fn disable_all(&mut self) {
        self.set_mode(Mode::None);
    }

    /// Interpret a click reported by the rendering surface under the current
    /// mode.
    ///
    /// In [`Mode::Annotate`] every click appends one annotation. In
    /// [`Mode::DrawLine`] the first click is buffered and the second
    /// completes the segment, provided both clicks landed on the same axis
    /// pair; a cross-axis pair is dropped without emitting anything. Clicks
    /// in [`Mode::None`] are ignored. A malformed descriptor fails before any
    /// state changes.
    pub fn handle_click(&mut self, click: ClickPoint) -> Result<(), ClickError> {
        click.validate()?;
        match self.mode {
            Mode::None => {}
            Mode::Annotate => {
                trace!(
                    "annotate click at ({}, {}) on ({}, {})",
                    click.position[0], click.position[1], click.axes.x_axis, click.axes.y_axis
                );
                let annotation = Annotation::new(click.position[0], click.position[1], click.axes)
                    .with_text(self.note_text.clone())
                    .with_color(self.note_color);
                self.layout.push_annotation(annotation);
                self.surface.redraw(&self.layout);
            }
            Mode::DrawLine => {
                let Some(first) = self.pending.take() else {
                    trace!(
                        "line gesture started at ({}, {})",
                        click.position[0], click.position[1]
                    );
                    self.pending = Some(click);
                    return Ok(());
                };
                // Segments spanning two subplots are invalid; the completed
                // gesture is dropped either way.
                if first.axes != click.axes {
                    debug!(
                        "dropping line between axis pairs ({}, {}) and ({}, {})",
                        first.axes.x_axis, first.axes.y_axis, click.axes.x_axis, click.axes.y_axis
                    );
                    return Ok(());
                }
                let shape = Shape::new(first.position, click.position, click.axes)
                    .with_color(self.line_color)
                    .with_width(self.line_width)
                    .with_opacity(self.line_opacity)
                    .with_style(self.line_style);
                self.layout.push_shape(shape);
                self.surface.redraw(&self.layout);
            }
        }
        Ok(())
    }

    /// Remove every annotation and shape, reset the interaction state, and
    /// redraw. Calling it with nothing to erase is a no-op redraw.
    pub fn erase(&mut self) {
        self.disable_all();
        self.layout.clear();
        debug!("cleared annotation layout");
        self.surface.redraw(&self.layout);
    }

    /// Set the text applied to new annotations.
    pub fn set_note_text(&mut self, text: impl Into<String>) {
        let t = text.into();
        if !t.is_empty() {
            self.note_text = t;
        }
    }

    /// Set the color applied to new annotations.
    pub fn set_note_color(&mut self, color: Color) {
        self.note_color = color;
    }

    /// Set the stroke color applied to new line segments.
    pub fn set_line_color(&mut self, color: Color) {
        self.line_color = color;
    }

    /// Set the stroke width applied to new line segments.
    pub fn set_line_width(&mut self, width: f32) {
        self.line_width = width.max(0.5);
    }

    /// Set the stroke opacity applied to new line segments, clamped to [0, 1].
    pub fn set_line_opacity(&mut self, opacity: f32) {
        self.line_opacity = opacity.clamp(0.0, 1.0);
    }

    /// Set the stroke style applied to new line segments.
    pub fn set_line_style(&mut self, style: LineStyle) {
        self.line_style = style;
    }

    fn set_mode(&mut self, mode: Mode) {
        // Any transition abandons an in-progress line gesture.
        self.pending = None;
        if self.mode != mode {
            debug!("annotation mode {:?} -> {:?}", self.mode, mode);
        }
        self.mode = mode;
        self.surface
            .set_button_pressed(ToolButton::Annotate, mode == Mode::Annotate);
        self.surface
            .set_button_pressed(ToolButton::DrawLine, mode == Mode::DrawLine);
    }
}
