use crate::geometry::{Point, Segment};
use crate::viewport::Viewport;

// ================================================================================
// Window transform
// ================================================================================

/// Normalized device space to pixel space. Flips y: normalized +y is up,
/// pixel +y is down.
pub fn to_pixel(p: Point, width: f32, height: f32) -> Point {
    Point {
        x: (p.x + 1.0) * width / 2.0,
        y: (-p.y + 1.0) * height / 2.0,
    }
}

/// Inverse of [`to_pixel`]. `width` and `height` must be nonzero.
pub fn from_pixel(p: Point, width: f32, height: f32) -> Point {
    Point {
        x: p.x / width * 2.0 - 1.0,
        y: -(p.y / height * 2.0 - 1.0),
    }
}

pub fn segment_to_pixel(s: Segment, width: f32, height: f32) -> Segment {
    s.map(|p| to_pixel(p, width, height))
}

pub fn segment_from_pixel(s: Segment, width: f32, height: f32) -> Segment {
    s.map(|p| from_pixel(p, width, height))
}

// ================================================================================
// Plane transform
// ================================================================================

/// Conceptual space to normalized device space.
pub fn to_normalized(viewport: &Viewport, p: Point) -> Point {
    Point {
        x: p.x * viewport.scale.x - viewport.offset.x,
        y: p.y * viewport.scale.y - viewport.offset.y,
    }
}

/// Inverse of [`to_normalized`].
///
/// A zero scale component is a programming error: the input layer clamps
/// scale to a positive floor before it ever reaches here.
pub fn from_normalized(viewport: &Viewport, p: Point) -> Point {
    debug_assert!(viewport.has_positive_scale(), "viewport scale must be positive");
    Point {
        x: (p.x + viewport.offset.x) / viewport.scale.x,
        y: (p.y + viewport.offset.y) / viewport.scale.y,
    }
}

pub fn segment_to_normalized(viewport: &Viewport, s: Segment) -> Segment {
    s.map(|p| to_normalized(viewport, p))
}

pub fn segment_from_normalized(viewport: &Viewport, s: Segment) -> Segment {
    s.map(|p| from_normalized(viewport, p))
}

// ================================================================================
// Composed pipeline
// ================================================================================

/// Conceptual space straight to pixel space.
pub fn conceptual_to_pixel(viewport: &Viewport, p: Point, width: f32, height: f32) -> Point {
    to_pixel(to_normalized(viewport, p), width, height)
}

/// Pixel space straight back to conceptual space.
pub fn pixel_to_conceptual(viewport: &Viewport, p: Point, width: f32, height: f32) -> Point {
    from_normalized(viewport, from_pixel(p, width, height))
}
