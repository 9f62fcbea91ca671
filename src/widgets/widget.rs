use crate::layout::Size;

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn white(white: f32, a: f32) -> Self {
        Self {
            r: white,
            g: white,
            b: white,
            a,
        }
    }

    pub const fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xFF) as f32 / 255.0,
            g: ((hex >> 8) & 0xFF) as f32 / 255.0,
            b: (hex & 0xFF) as f32 / 255.0,
            a: 1.0,
        }
    }

    /// Same color with the alpha channel replaced
    pub const fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const TRANSPARENT: Color = Color::rgba(0.0, 0.0, 0.0, 0.0);
}

impl Default for Color {
    fn default() -> Self {
        Self::TRANSPARENT
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Express this point relative to `origin`
    pub fn relative_to(&self, origin: Point) -> Self {
        Self {
            x: self.x - origin.x,
            y: self.y - origin.y,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn from_size(size: Size) -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            width: size.width,
            height: size.height,
        }
    }

    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && x < self.x + self.width && y >= self.y && y < self.y + self.height
    }

    pub fn contains_point(&self, point: Point) -> bool {
        self.contains(point.x, point.y)
    }
}

/// A single finger on the screen
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Touch {
    /// Location in the receiver's coordinates, if the host could resolve one
    pub location: Option<Point>,
    /// Number of consecutive taps at this location (1 for a plain tap)
    pub tap_count: u32,
}

impl Touch {
    pub fn at(x: f32, y: f32) -> Self {
        Self {
            location: Some(Point::new(x, y)),
            tap_count: 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// A finger touched down
    TouchDown { touches: usize, touch: Touch },
    /// A finger moved while down
    TouchMove { touches: usize, touch: Touch },
    /// A finger lifted
    TouchUp { touches: usize, touch: Touch },
    /// The host cancelled the touch sequence
    TouchCancel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResponse {
    Ignored,
    Handled,
}

impl Event {
    /// Single-finger tap down at the given location
    pub fn tap_down(x: f32, y: f32) -> Self {
        Event::TouchDown {
            touches: 1,
            touch: Touch::at(x, y),
        }
    }

    /// Single-finger tap up at the given location
    pub fn tap_up(x: f32, y: f32) -> Self {
        Event::TouchUp {
            touches: 1,
            touch: Touch::at(x, y),
        }
    }

    fn touch(&self) -> Option<(usize, &Touch)> {
        match self {
            Event::TouchDown { touches, touch }
            | Event::TouchMove { touches, touch }
            | Event::TouchUp { touches, touch } => Some((*touches, touch)),
            Event::TouchCancel => None,
        }
    }

    /// Get the location from this event, if any
    pub fn location(&self) -> Option<Point> {
        self.touch().and_then(|(_, touch)| touch.location)
    }

    /// One finger, first tap, with a known location
    pub fn is_single_tap(&self) -> bool {
        self.touch().is_some_and(|(touches, touch)| {
            touches == 1 && touch.tap_count == 1 && touch.location.is_some()
        })
    }

    /// Create a new event with the location shifted into a child's coordinates
    pub fn relative_to(&self, origin: Point) -> Self {
        let shift = |touch: &Touch| Touch {
            location: touch.location.map(|p| p.relative_to(origin)),
            tap_count: touch.tap_count,
        };
        match self {
            Event::TouchDown { touches, touch } => Event::TouchDown {
                touches: *touches,
                touch: shift(touch),
            },
            Event::TouchMove { touches, touch } => Event::TouchMove {
                touches: *touches,
                touch: shift(touch),
            },
            Event::TouchUp { touches, touch } => Event::TouchUp {
                touches: *touches,
                touch: shift(touch),
            },
            Event::TouchCancel => Event::TouchCancel,
        }
    }
}
