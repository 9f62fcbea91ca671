//! Draw command definitions for the display list.

use crate::widgets::image::ImageSource;
use crate::widgets::{Color, Point, Rect};

/// Drop shadow for a shape or text.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Shadow {
    /// Shadow offset in logical pixels (x, y)
    pub offset: (f32, f32),
    /// Blur radius in logical pixels
    pub blur: f32,
    /// Shadow color, opacity included
    pub color: Color,
}

impl Shadow {
    /// Create a shadow with the given parameters
    pub fn new(offset: (f32, f32), blur: f32, color: Color) -> Self {
        Self {
            offset,
            blur,
            color,
        }
    }

    /// The small drop shadow used by the main button and its items
    pub fn button(color: Color) -> Self {
        Self::new((1.0, 1.0), 2.0, color.with_alpha(color.a * 0.4))
    }
}

/// A straight line segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub from: Point,
    pub to: Point,
}

impl Segment {
    pub fn new(from: Point, to: Point) -> Self {
        Self { from, to }
    }
}

/// A single draw operation in layer-local coordinates.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Fill a rounded rectangle, optionally with a drop shadow.
    RoundedRect {
        /// Rectangle bounds in local coordinates
        rect: Rect,
        /// Fill color
        color: Color,
        /// Corner radius in logical pixels
        radius: f32,
        /// Optional shadow
        shadow: Option<Shadow>,
    },

    /// Stroke a set of line segments with round caps.
    Stroke {
        segments: Vec<Segment>,
        color: Color,
        width: f32,
    },

    /// Draw a single line of text.
    Text {
        text: String,
        /// Point the label's right edge is vertically centred on
        anchor: Point,
        color: Color,
        shadow: Option<Shadow>,
    },

    /// Draw an image.
    Image {
        /// Image source (path or bytes)
        source: ImageSource,
        /// Bounding rectangle in local coordinates
        rect: Rect,
    },
}

impl DrawCommand {
    /// Create a simple rounded rectangle.
    pub fn rounded_rect(rect: Rect, color: Color, radius: f32) -> Self {
        Self::RoundedRect {
            rect,
            color,
            radius,
            shadow: None,
        }
    }

    /// Create a rounded rectangle with a shadow.
    pub fn rounded_rect_with_shadow(rect: Rect, color: Color, radius: f32, shadow: Shadow) -> Self {
        Self::RoundedRect {
            rect,
            color,
            radius,
            shadow: Some(shadow),
        }
    }
}
