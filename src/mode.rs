/// The currently active annotation-interaction behavior.
///
/// At most one of [`Mode::Annotate`] and [`Mode::DrawLine`] is active at any
/// time; re-selecting the active mode toggles back to [`Mode::None`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Mode {
    /// Clicks on the plot are ignored.
    #[default]
    None,
    /// Every click adds a text annotation at the clicked point.
    Annotate,
    /// Two consecutive clicks on the same axis pair add a line segment.
    DrawLine,
}
