/// Identifies the subplot a data-space coordinate belongs to.
///
/// A chart may carry several axis pairs (one per subplot); every annotation
/// and shape is anchored to exactly one of them. Identifiers follow the
/// rendering surface's naming, e.g. `"x"`/`"y"` or `"x2"`/`"y2"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AxisPair {
    /// X-axis identifier.
    pub x_axis: String,
    /// Y-axis identifier.
    pub y_axis: String,
}

impl AxisPair {
    /// Create an axis pair from the two axis identifiers.
    pub fn new(x_axis: impl Into<String>, y_axis: impl Into<String>) -> Self {
        Self {
            x_axis: x_axis.into(),
            y_axis: y_axis.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
/// A click on the rendering surface, in data-space coordinates.
///
/// Fixed-shape descriptor for the payload delivered by the surface's click
/// callback. The hosting application builds one of these per click and feeds
/// it to [`AnnotationController::handle_click`](crate::AnnotationController::handle_click).
pub struct ClickPoint {
    /// Clicked position in data coordinates [x, y].
    pub position: [f64; 2],
    /// Axis pair the click occurred on.
    pub axes: AxisPair,
}

impl ClickPoint {
    /// Create a click descriptor at the given data-space position.
    pub fn new(x: f64, y: f64, axes: AxisPair) -> Self {
        Self {
            position: [x, y],
            axes,
        }
    }

    pub(crate) fn validate(&self) -> Result<(), ClickError> {
        if self.axes.x_axis.is_empty() || self.axes.y_axis.is_empty() {
            return Err(ClickError::MissingAxis);
        }
        if !self.position[0].is_finite() || !self.position[1].is_finite() {
            return Err(ClickError::NonFinitePosition);
        }
        Ok(())
    }
}

/// Errors raised for malformed click descriptors.
///
/// A well-behaved rendering surface never produces these; they indicate a
/// wiring bug in the hosting application and are reported before any layout
/// mutation happens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickError {
    /// The descriptor did not carry both axis identifiers.
    MissingAxis,
    /// A coordinate was NaN or infinite.
    NonFinitePosition,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_click_passes() {
        let click = ClickPoint::new(1.0, -2.5, AxisPair::new("x", "y"));
        assert_eq!(click.validate(), Ok(()));
    }

    #[test]
    fn test_empty_axis_id_is_rejected() {
        let click = ClickPoint::new(1.0, 2.0, AxisPair::new("", "y"));
        assert_eq!(click.validate(), Err(ClickError::MissingAxis));

        let click = ClickPoint::new(1.0, 2.0, AxisPair::new("x", ""));
        assert_eq!(click.validate(), Err(ClickError::MissingAxis));
    }

    #[test]
    fn test_non_finite_position_is_rejected() {
        let click = ClickPoint::new(f64::NAN, 2.0, AxisPair::new("x", "y"));
        assert_eq!(click.validate(), Err(ClickError::NonFinitePosition));

        let click = ClickPoint::new(1.0, f64::INFINITY, AxisPair::new("x", "y"));
        assert_eq!(click.validate(), Err(ClickError::NonFinitePosition));
    }
}
