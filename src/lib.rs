//! An annotation mode controller for interactive plotting surfaces.
//!
//! - Mutually exclusive annotate / line-draw modes with toggle semantics
//! - Two-click line gesture, buffered between events, per-subplot axis matching
//! - Append-only decoration layout pushed to an opaque rendering surface
//!
//! Quick start:
//!
//! ```ignore
//! let mut controller = AnnotationControllerBuilder::new()
//!     .with_note_text("flagged")
//!     .build(surface);
//!
//! controller.apply(ToolbarMessage::ToggleDrawLine);
//! controller.handle_click(ClickPoint::new(1.0, 1.0, AxisPair::new("x", "y")))?;
//! controller.handle_click(ClickPoint::new(4.0, 2.0, AxisPair::new("x", "y")))?;
//! assert_eq!(controller.layout().shape_count(), 1);
//! ```
//!
//! See `tests/` for more.
pub mod annotation;
pub mod config;
pub mod controller;
pub mod controller_builder;
pub mod layout;
pub mod message;
pub mod mode;
pub mod point;
pub mod shape;
pub mod surface;

// Iced re-exports.
pub use iced::Color;

// Re-exports of public types.
pub use annotation::{Annotation, DEFAULT_NOTE_TEXT};
pub use config::{ButtonIcon, ModeBarButton, PlotConfig};
pub use controller::AnnotationController;
pub use controller_builder::AnnotationControllerBuilder;
pub use layout::Layout;
pub use message::ToolbarMessage;
pub use mode::Mode;
pub use point::{AxisPair, ClickError, ClickPoint};
pub use shape::{LineStyle, Shape, ShapeId};
pub use surface::{RenderSurface, ToolButton};
