use crate::renderer::Segment;
use crate::widgets::{Color, Point, Rect};

/// Stroke width of the plus icon
pub const PLUS_LINE_WIDTH: f32 = 2.0;
/// Momentary highlight drawn over the main circle while a finger is down
pub const TINT_COLOR: Color = Color::rgba(1.0, 1.0, 1.0, 0.2);

/// Geometry of the main button, rebuilt whenever its bounds change.
///
/// The circle, the plus icon and the tint all share one square frame
/// anchored at the origin, sized to the shorter side of the bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ButtonGeometry {
    pub frame: Rect,
    pub corner_radius: f32,
    pub plus: [Segment; 2],
}

impl ButtonGeometry {
    pub fn for_bounds(bounds: Rect) -> Self {
        let side = bounds.size().min_side().max(0.0);
        Self {
            frame: Rect::new(0.0, 0.0, side, side),
            corner_radius: side / 2.0,
            plus: plus_path(side),
        }
    }
}

/// Plus icon strokes for a square of the given side: one vertical and one
/// horizontal bar, each spanning the middle third.
pub fn plus_path(side: f32) -> [Segment; 2] {
    let third = side / 3.0;
    let half = side / 2.0;
    [
        Segment::new(Point::new(half, third), Point::new(half, side - third)),
        Segment::new(Point::new(third, half), Point::new(side - third, half)),
    ]
}

/// Pressed-state highlight on the main button
#[derive(Debug, Clone, Default)]
pub struct TintState {
    visible: bool,
}

impl TintState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show the tint; returns true if it was not already shown
    pub fn show(&mut self) -> bool {
        !std::mem::replace(&mut self.visible, true)
    }

    /// Remove the tint; returns true if it was shown
    pub fn hide(&mut self) -> bool {
        std::mem::replace(&mut self.visible, false)
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_geometry_uses_shorter_side() {
        let geometry = ButtonGeometry::for_bounds(Rect::new(0.0, 0.0, 56.0, 70.0));
        assert_eq!(geometry.frame, Rect::new(0.0, 0.0, 56.0, 56.0));
        assert_eq!(geometry.corner_radius, 28.0);
    }

    #[test]
    fn test_plus_path_thirds() {
        let [vertical, horizontal] = plus_path(60.0);
        assert_eq!(vertical.from, Point::new(30.0, 20.0));
        assert_eq!(vertical.to, Point::new(30.0, 40.0));
        assert_eq!(horizontal.from, Point::new(20.0, 30.0));
        assert_eq!(horizontal.to, Point::new(40.0, 30.0));
    }

    #[test]
    fn test_tint_show_hide() {
        let mut tint = TintState::new();
        assert!(tint.show());
        assert!(!tint.show());
        assert!(tint.is_visible());
        assert!(tint.hide());
        assert!(!tint.hide());
    }
}
