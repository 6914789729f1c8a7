use crate::scene::ShapeKind;

/// Active interaction mode.
///
/// The drawing tools map 1:1 onto shape kinds; `Resize` is a distinct mode
/// that drags vertices of committed objects instead of building a new one.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum Tool {
    #[default]
    Line,
    Square,
    Rectangle,
    Polygon,
    Resize,
}

impl Tool {
    /// Shape kind drawn by this tool, given the configured polygon side
    /// count. `None` for `Resize`.
    pub fn shape_kind(self, polygon_sides: u32) -> Option<ShapeKind> {
        match self {
            Tool::Line => Some(ShapeKind::Line),
            Tool::Square => Some(ShapeKind::Square),
            Tool::Rectangle => Some(ShapeKind::Rectangle),
            Tool::Polygon => Some(ShapeKind::Polygon { sides: polygon_sides }),
            Tool::Resize => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn polygon_tool_carries_the_configured_side_count() {
        assert_eq!(Tool::Polygon.shape_kind(6), Some(ShapeKind::Polygon { sides: 6 }));
        assert_eq!(Tool::Resize.shape_kind(6), None);
    }

    #[test]
    fn default_tool_is_line() {
        assert_eq!(Tool::default(), Tool::Line);
        assert_eq!(Tool::default().shape_kind(3), Some(ShapeKind::Line));
    }
}
