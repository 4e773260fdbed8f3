//! Typed configuration for the rendering surface's initial draw.

use crate::message::ToolbarMessage;

/// Configures the rendering surface when the chart is first drawn.
///
/// Mirrors the option set the surface understands; the controller itself only
/// needs [`PlotConfig::with_annotation_toolbar`] to register its buttons, the
/// rest is passed through to the surface by the hosting application.
#[derive(Debug, Clone)]
pub struct PlotConfig {
    /// Show the hosted share link.
    pub show_link: bool,

    /// Show the vendor logo in the toolbar.
    pub display_logo: bool,

    /// Allow drag-editing of added annotations and shapes.
    pub editable: bool,

    /// Built-in toolbar buttons to hide, by name.
    pub modebar_buttons_to_remove: Vec<String>,

    /// Custom toolbar buttons to append.
    pub modebar_buttons_to_add: Vec<ModeBarButton>,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            show_link: false,
            display_logo: false,
            editable: true,
            modebar_buttons_to_remove: vec!["toggleSpikelines".to_owned()],
            modebar_buttons_to_add: Vec::new(),
        }
    }
}

impl PlotConfig {
    /// Append the three standard annotation buttons (note, line, erase).
    pub fn with_annotation_toolbar(mut self) -> Self {
        self.modebar_buttons_to_add.extend([
            ModeBarButton::note(),
            ModeBarButton::line(),
            ModeBarButton::erase(),
        ]);
        self
    }
}

/// A custom toolbar button registered with the rendering surface.
///
/// Instead of a click callback, each button carries a [ToolbarMessage]: the
/// hosting application forwards it to
/// [`AnnotationController::apply`](crate::AnnotationController::apply) when
/// the surface reports the button press.
#[derive(Debug, Clone)]
pub struct ModeBarButton {
    /// Label shown in the button's tooltip.
    pub name: String,
    /// Icon drawn on the button.
    pub icon: ButtonIcon,
    /// Attribute name the surface stores the toggle indicator under.
    pub attr: String,
    /// Attribute value identifying the button's tool.
    pub val: String,
    /// Command routed to the controller on click.
    pub message: ToolbarMessage,
}

impl ModeBarButton {
    /// The "Add Annotations" toggle button.
    pub fn note() -> Self {
        Self {
            name: "Add Annotations".to_owned(),
            icon: ButtonIcon::note(),
            attr: "notemode".to_owned(),
            val: "note".to_owned(),
            message: ToolbarMessage::ToggleAnnotate,
        }
    }

    /// The "Add Lines" toggle button.
    pub fn line() -> Self {
        Self {
            name: "Add Lines".to_owned(),
            icon: ButtonIcon::line(),
            attr: "linemode".to_owned(),
            val: "line".to_owned(),
            message: ToolbarMessage::ToggleDrawLine,
        }
    }

    /// The "Erase Additions" button.
    pub fn erase() -> Self {
        Self {
            name: "Erase Additions".to_owned(),
            icon: ButtonIcon::erase(),
            attr: "erasemode".to_owned(),
            val: "erase".to_owned(),
            message: ToolbarMessage::Erase,
        }
    }
}

/// An SVG path icon for a toolbar button, in the surface's icon font metrics.
#[derive(Debug, Clone)]
pub struct ButtonIcon {
    /// Glyph width.
    pub width: u32,
    /// SVG path data.
    pub path: String,
    /// Font ascent the path is drawn against.
    pub ascent: i32,
    /// Font descent the path is drawn against.
    pub descent: i32,
}

impl ButtonIcon {
    fn new(width: u32, path: &str) -> Self {
        Self {
            width,
            path: path.to_owned(),
            ascent: 1900,
            descent: 250,
        }
    }

    /// Note glyph (page with a folded corner).
    pub fn note() -> Self {
        Self::new(
            1600,
            "M1152 1248v416h-928q-40 0-68-28t-28-68v-1344q0-40 28-68t68-28h1344q40 \
             0 68 28t28 68v928h-416q-40 0-68 28t-28 68zm128 32h381q-15 82-65 \
             132l-184 184q-50 50-132 65v-381z",
        )
    }

    /// Pencil glyph.
    pub fn line() -> Self {
        Self::new(
            1600,
            "M491 1536l91-91-235-235-91 91v107h128v128h107zm523-928q0-22-22-22-10 \
             0-17 7l-542 542q-7 7-7 17 0 22 22 22 10 0 17-7l542-542q7-7 \
             7-17zm-54-192l416 416-832 832h-416v-416zm683 96q0 53-37 90l-166 \
             166-416-416 166-165q36-38 90-38 53 0 91 38l235 234q37 39 37 91z",
        )
    }

    /// Eraser glyph.
    pub fn erase() -> Self {
        Self::new(
            2000,
            "M960 1408l336-384h-768l-336 384h768zm1013-1077q15 34 9.5 71.5t-30.5 \
             65.5l-896 1024q-38 44-96 44h-768q-38 0-69.5-20.5t-47.5-54.5q-15-34-9.5-71.5t30.5-65.5l896-1024q38-44 \
             96-44h768q38 0 69.5 20.5t47.5 54.5z",
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_matches_surface_expectations() {
        let config = PlotConfig::default();
        assert!(!config.show_link);
        assert!(!config.display_logo);
        assert!(config.editable);
        assert_eq!(config.modebar_buttons_to_remove, vec!["toggleSpikelines"]);
        assert!(config.modebar_buttons_to_add.is_empty());
    }

    #[test]
    fn test_annotation_toolbar_registers_three_buttons() {
        let config = PlotConfig::default().with_annotation_toolbar();
        let messages: Vec<_> = config
            .modebar_buttons_to_add
            .iter()
            .map(|b| b.message)
            .collect();
        assert_eq!(
            messages,
            vec![
                ToolbarMessage::ToggleAnnotate,
                ToolbarMessage::ToggleDrawLine,
                ToolbarMessage::Erase,
            ]
        );
    }
}
