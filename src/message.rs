#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Commands sent by the toolbar buttons to the annotation controller.
///
/// The hosting application routes each button's click to
/// [`AnnotationController::apply`](crate::AnnotationController::apply) with
/// the matching variant.
pub enum ToolbarMessage {
    /// Toggle annotate mode on or off.
    ToggleAnnotate,
    /// Toggle line-draw mode on or off.
    ToggleDrawLine,
    /// Remove every annotation and shape and leave both modes off.
    Erase,
}
