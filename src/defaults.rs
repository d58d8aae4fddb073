//! Default label parameters (all lengths in points)

use crate::types::{Points, Rgb};
use crate::units::{MillimeterScale, Unit};

pub const FONT_SIZE: Points = Points(32.0);
pub const OFFSET: Points = Points(40.0);
pub const UNIT: Unit = Unit::Millimeters(MillimeterScale);
pub const LAYER: &str = "Layer 1";
pub const FILL: Rgb = Rgb::RED;

/// Average glyph advance of the in-memory host, in em
pub const CHAR_ADVANCE_EM: f64 = 0.6;
/// Line height of the in-memory host, in em
pub const LINE_HEIGHT_EM: f64 = 1.0;
