//! Strongly-typed numeric primitives for dimlabel (zero-cost newtypes).
//!
//! All geometry is in document points (1/72 inch). The document y axis grows
//! upward, so a bounding box's top edge has the larger y.

use std::fmt;
use std::ops::{Add, Div, Mul, Sub};

/// Why a number was refused as a length.
///
/// Settings reject font sizes and offsets with it, and measured text
/// extents that come back NaN or infinite from the host are reported with it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumericError {
    /// NaN, e.g. a measurement the host could not compute
    NaN,
    /// Infinite, e.g. overflowing dialog input like `1e999`
    Infinite,
    /// Zero where a font size is required
    Zero,
    /// Below zero where a font size is required
    Negative,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            NumericError::NaN => "not a number",
            NumericError::Infinite => "out of range",
            NumericError::Zero => "must be greater than zero",
            NumericError::Negative => "must not be below zero",
        };
        f.write_str(reason)
    }
}

impl std::error::Error for NumericError {}

/// Length in document points (1/72 inch)
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Default)]
#[repr(transparent)]
pub struct Points(pub f64);

impl Points {
    pub const ZERO: Points = Points(0.0);

    /// Points per inch.
    pub const PER_INCH: f64 = 72.0;

    /// Millimeters per inch.
    pub const MM_PER_INCH: f64 = 25.4;

    /// Create a length with validation (rejects NaN/infinite)
    #[inline]
    pub fn try_new(val: f64) -> Result<Points, NumericError> {
        if val.is_nan() {
            Err(NumericError::NaN)
        } else if val.is_infinite() {
            Err(NumericError::Infinite)
        } else {
            Ok(Points(val))
        }
    }

    /// Create a strictly positive length with validation
    #[inline]
    pub fn try_positive(val: f64) -> Result<Points, NumericError> {
        let p = Self::try_new(val)?;
        if val == 0.0 {
            Err(NumericError::Zero)
        } else if val < 0.0 {
            Err(NumericError::Negative)
        } else {
            Ok(p)
        }
    }

    /// Length in inches
    #[inline]
    pub fn to_inches(self) -> f64 {
        self.0 / Self::PER_INCH
    }

    /// Length in millimeters
    #[inline]
    pub fn to_mm(self) -> f64 {
        self.0 * Self::MM_PER_INCH / Self::PER_INCH
    }

    /// Get the raw value (use sparingly, prefer typed operations)
    #[inline]
    pub fn raw(self) -> f64 {
        self.0
    }

}

impl Add for Points {
    type Output = Points;
    fn add(self, rhs: Points) -> Points { Points(self.0 + rhs.0) }
}
impl Sub for Points {
    type Output = Points;
    fn sub(self, rhs: Points) -> Points { Points(self.0 - rhs.0) }
}
impl Mul<f64> for Points {
    type Output = Points;
    fn mul(self, rhs: f64) -> Points { Points(self.0 * rhs) }
}
impl Div<f64> for Points {
    type Output = Points;
    fn div(self, rhs: f64) -> Points { Points(self.0 / rhs) }
}

/// Generic 2D point
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Point<T> {
    pub x: T,
    pub y: T,
}

impl<T> Point<T> {
    pub fn new(x: T, y: T) -> Self { Point { x, y } }
}

/// 2D size
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Size<T> {
    pub w: T,
    pub h: T,
}

impl<T> Size<T> {
    pub fn new(w: T, h: T) -> Self { Size { w, h } }
}

/// Axis-aligned bounds in the host's `[x1, y1, x2, y2]` order:
/// `(x1, y1)` is the top-left corner, `(x2, y2)` the bottom-right.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Bounds {
    pub x1: Points,
    pub y1: Points,
    pub x2: Points,
    pub y2: Points,
}

impl Bounds {
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Bounds {
            x1: Points(x1),
            y1: Points(y1),
            x2: Points(x2),
            y2: Points(y2),
        }
    }

    /// Build bounds from a top-left corner and a size
    pub fn from_top_left(left: Points, top: Points, size: Size<Points>) -> Self {
        Bounds {
            x1: left,
            y1: top,
            x2: left + size.w,
            y2: top - size.h,
        }
    }

    pub fn left(&self) -> Points { self.x1 }

    pub fn top(&self) -> Points { self.y1 }

    pub fn right(&self) -> Points { self.x2 }

    pub fn bottom(&self) -> Points { self.y2 }

    /// `x2 - x1`
    pub fn width(&self) -> Points { self.x2 - self.x1 }

    /// `y1 - y2`
    pub fn height(&self) -> Points { self.y1 - self.y2 }

    pub fn size(&self) -> Size<Points> {
        Size { w: self.width(), h: self.height() }
    }

    /// Horizontal center, `x1 + width / 2`
    pub fn center_x(&self) -> Points { self.x1 + self.width() / 2.0 }

    /// Vertical center, `y1 - height / 2`
    pub fn center_y(&self) -> Points { self.y1 - self.height() / 2.0 }
}

/// Reading direction of a label.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Orientation {
    /// Unrotated text, reads left to right
    #[default]
    Horizontal,
    /// Text rotated 90° counter-clockwise, reads bottom to top
    Vertical,
}

impl Orientation {
    pub fn is_rotated(self) -> bool {
        self == Orientation::Vertical
    }
}

/// 8-bit RGB fill color
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const RED: Rgb = Rgb(255, 0, 0);
    pub const BLACK: Rgb = Rgb(0, 0, 0);
}
