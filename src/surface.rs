use crate::layout::Layout;

/// Toolbar buttons whose pressed indicator the controller maintains.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolButton {
    /// The "add annotations" toggle.
    Annotate,
    /// The "add lines" toggle.
    DrawLine,
}

/// The opaque rendering collaborator the controller drives.
///
/// The controller never reads anything back: both calls are fire-and-forget,
/// and layout mutations are applied before [`RenderSurface::redraw`] is
/// issued, so a surface that batches or drops a redraw cannot corrupt
/// controller state. Implementations must not call back into the controller.
pub trait RenderSurface {
    /// Redraw the chart with the given decoration layout.
    fn redraw(&mut self, layout: &Layout);

    /// Write a toolbar button's pressed indicator.
    fn set_button_pressed(&mut self, button: ToolButton, pressed: bool);
}
