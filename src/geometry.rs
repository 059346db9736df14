// ================================================================================
// Utility Types
// ================================================================================

/// A point in conceptual, normalized device, or pixel space.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Component-wise linear interpolation.
    pub fn lerp(self, other: Point, t: f32) -> Point {
        Point {
            x: lerp(self.x, other.x, t),
            y: lerp(self.y, other.y, t),
        }
    }
}

impl From<Point> for iced::Point {
    fn from(p: Point) -> Self {
        iced::Point::new(p.x, p.y)
    }
}

/// An ordered pair of points. Direction only matters for draw order.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Segment {
    pub v0: Point,
    pub v1: Point,
}

impl Segment {
    pub const fn new(v0: Point, v1: Point) -> Self {
        Self { v0, v1 }
    }

    /// Applies `f` to both endpoints independently.
    pub fn map(self, mut f: impl FnMut(Point) -> Point) -> Segment {
        Segment {
            v0: f(self.v0),
            v1: f(self.v1),
        }
    }
}

/// Window dimensions in pixels, as last reported by the windowing layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WindowSize {
    pub width: u32,
    pub height: u32,
}

impl WindowSize {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// A minimised window can report a zero dimension; the transforms divide
    /// by both, so such frames are not drawn.
    pub fn is_drawable(&self) -> bool {
        self.width > 0 && self.height > 0
    }

    pub fn as_f32(&self) -> (f32, f32) {
        (self.width as f32, self.height as f32)
    }

    /// Converts a logical size reported by iced, rounding to whole pixels.
    pub fn from_logical(size: iced::Size) -> Self {
        Self {
            width: to_pixels(size.width),
            height: to_pixels(size.height),
        }
    }
}

impl Default for WindowSize {
    fn default() -> Self {
        Self::new(1200, 800)
    }
}

impl From<WindowSize> for iced::Size {
    fn from(size: WindowSize) -> Self {
        let (width, height) = size.as_f32();
        iced::Size::new(width, height)
    }
}

fn to_pixels(v: f32) -> u32 {
    if v.is_finite() && v > 0.0 {
        v.round() as u32
    } else {
        0
    }
}

// ================================================================================
// Free Functions
// ================================================================================

/// `a + (b - a) * t`. Returns `a` exactly at `t == 0`.
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}
