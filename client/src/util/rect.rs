//! Pixel/normalized rectangle math for the detection-zone editor.
//!
//! SYSTEM CONTEXT
//! ==============
//! The editor draws in CSS pixels relative to the rendered video element,
//! while the monitoring API stores the zone as fractions of the frame. Every
//! conversion between the two goes through this module so the round-trip law
//! (`denormalize(normalize(r, b), b) == r`) holds in one place.
//!
//! `SurfaceBounds` can only be built from finite, positive sizes, which keeps
//! division by a zero-sized surface out of the type system's reach.

#[cfg(test)]
#[path = "rect_test.rs"]
mod rect_test;

use serde::{Deserialize, Serialize};

/// Smallest width/height, in pixels, a resize gesture may produce.
pub const MIN_SIZE: f64 = 20.0;

/// Tolerance used when comparing rectangles after float arithmetic.
pub const RECT_EPSILON: f64 = 1e-6;

/// A point in surface-relative pixel space.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Rectangle in CSS pixels, origin at the surface's top-left corner.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Rectangle expressed as fractions of the surface size.
///
/// This is the wire shape of `GET/PUT /coordinates`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct NormalizedRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Rendered pixel size of the video surface. Always finite and positive.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfaceBounds {
    width: f64,
    height: f64,
}

impl SurfaceBounds {
    /// Returns `None` for zero, negative, or non-finite sizes.
    pub fn new(width: f64, height: f64) -> Option<Self> {
        let usable = |v: f64| v.is_finite() && v > 0.0;
        (usable(width) && usable(height)).then_some(Self { width, height })
    }

    pub fn width(self) -> f64 {
        self.width
    }

    pub fn height(self) -> f64 {
        self.height
    }

    /// True when a [`MIN_SIZE`] square fits on the surface.
    pub fn holds_min_size(self) -> bool {
        self.width >= MIN_SIZE && self.height >= MIN_SIZE
    }
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    /// Component-wise comparison within [`RECT_EPSILON`].
    #[cfg(test)]
    pub fn approx_eq(&self, other: &Rect) -> bool {
        near(self.x, other.x)
            && near(self.y, other.y)
            && near(self.width, other.width)
            && near(self.height, other.height)
    }

    /// Shrink and shift the rectangle until it fits inside `bounds`.
    ///
    /// Size is clamped first (never below [`MIN_SIZE`]), then the origin is
    /// clamped against the space that size leaves. On a surface narrower or
    /// shorter than [`MIN_SIZE`] the minimum wins: the rect is pinned to the
    /// origin and overhangs the far edge.
    pub fn fit_within(self, bounds: SurfaceBounds) -> Rect {
        let width = clamp(self.width, MIN_SIZE, bounds.width);
        let height = clamp(self.height, MIN_SIZE, bounds.height);
        Rect {
            x: clamp(self.x, 0.0, bounds.width - width),
            y: clamp(self.y, 0.0, bounds.height - height),
            width,
            height,
        }
    }

    /// Re-express a rectangle measured against `from` in the `to` surface.
    pub fn rescale(self, from: SurfaceBounds, to: SurfaceBounds) -> Rect {
        denormalize(normalize(self, from), to)
    }
}

impl NormalizedRect {
    /// True when every field is finite, inside [0, 1], and the far edges do
    /// not pass the surface edge.
    pub fn is_within_unit(&self) -> bool {
        let unit = |v: f64| v.is_finite() && (-RECT_EPSILON..=1.0 + RECT_EPSILON).contains(&v);
        unit(self.x)
            && unit(self.y)
            && unit(self.width)
            && unit(self.height)
            && self.x + self.width <= 1.0 + RECT_EPSILON
            && self.y + self.height <= 1.0 + RECT_EPSILON
    }
}

/// Divide each dimension by the matching surface dimension.
pub fn normalize(rect: Rect, bounds: SurfaceBounds) -> NormalizedRect {
    NormalizedRect {
        x: rect.x / bounds.width,
        y: rect.y / bounds.height,
        width: rect.width / bounds.width,
        height: rect.height / bounds.height,
    }
}

/// Inverse of [`normalize`].
pub fn denormalize(unit: NormalizedRect, bounds: SurfaceBounds) -> Rect {
    Rect {
        x: unit.x * bounds.width,
        y: unit.y * bounds.height,
        width: unit.width * bounds.width,
        height: unit.height * bounds.height,
    }
}

/// Clamp `value` into `[min, max]`. When the range is empty the lower bound wins.
pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    if max < min {
        return min;
    }
    value.max(min).min(max)
}

#[cfg(test)]
fn near(a: f64, b: f64) -> bool {
    (a - b).abs() <= RECT_EPSILON * a.abs().max(b.abs()).max(1.0)
}
