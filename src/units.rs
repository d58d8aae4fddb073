//! Unit systems for dimension labels.
//!
//! A raw extent in points is turned into a display value (already rounded and
//! formatted) plus the suffix appended after it.

use std::fmt;
use std::str::FromStr;

use enum_dispatch::enum_dispatch;

use crate::errors::SettingsError;
use crate::types::Points;

/// A unit a dimension can be displayed in
#[enum_dispatch]
pub trait UnitSystem {
    /// Format a raw extent as a display value (no suffix)
    fn scale(&self, raw: Points) -> String;

    /// Suffix appended to the display value, including its leading space
    fn suffix(&self) -> &'static str;

    /// Short name as shown in the parameter dialog
    fn name(&self) -> &'static str;
}

/// Whole points
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct PointScale;

impl UnitSystem for PointScale {
    fn scale(&self, raw: Points) -> String {
        whole(raw.raw())
    }

    fn suffix(&self) -> &'static str {
        " pt"
    }

    fn name(&self) -> &'static str {
        "pt"
    }
}

/// Inches with two fractional digits
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct InchScale;

impl UnitSystem for InchScale {
    fn scale(&self, raw: Points) -> String {
        hundredths(raw.to_inches())
    }

    fn suffix(&self) -> &'static str {
        " in"
    }

    fn name(&self) -> &'static str {
        "inches"
    }
}

/// Whole millimeters
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct MillimeterScale;

impl UnitSystem for MillimeterScale {
    fn scale(&self, raw: Points) -> String {
        whole(raw.to_mm())
    }

    fn suffix(&self) -> &'static str {
        " mm"
    }

    fn name(&self) -> &'static str {
        "mm"
    }
}

/// Round to the nearest integer, halves going up, and print without a
/// fractional part. Large magnitudes print in full and `-0` prints as `0`.
fn whole(val: f64) -> String {
    let floor = val.floor();
    // `val - floor` is exact, so only true halves round up
    let rounded = if val - floor >= 0.5 { floor + 1.0 } else { floor };
    let rounded = if rounded == 0.0 { 0.0 } else { rounded };
    format!("{rounded:.0}")
}

/// Print with two fractional digits, breaking exact ties away from zero.
///
/// `{:.2}` rounds the exact binary value, which already matches for every
/// value that is not a tie. A value lands exactly halfway between two
/// hundredths only when it is an odd number of eighths (`0.125`, `0.375`,
/// ...), and those `{:.2}` would send to the even neighbour.
fn hundredths(val: f64) -> String {
    let eighths = val * 8.0;
    if eighths.fract() != 0.0 || eighths % 2.0 == 0.0 {
        return format!("{val:.2}");
    }
    // j/8 * 100 = j * 12.5 is exact here, so the bump lands on a whole number
    let bumped = (val.abs() * 100.0 + 0.5) / 100.0;
    format!("{:.2}", bumped.copysign(val))
}

/// The unit systems a label can use
#[enum_dispatch(UnitSystem)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Unit {
    Points(PointScale),
    Inches(InchScale),
    Millimeters(MillimeterScale),
}

impl Unit {
    pub const POINTS: Unit = Unit::Points(PointScale);
    pub const INCHES: Unit = Unit::Inches(InchScale);
    pub const MILLIMETERS: Unit = Unit::Millimeters(MillimeterScale);

    /// All supported units, in dialog order
    pub const ALL: [Unit; 3] = [Unit::POINTS, Unit::INCHES, Unit::MILLIMETERS];
}

impl Default for Unit {
    fn default() -> Self {
        crate::defaults::UNIT
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Unit {
    type Err = SettingsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pt" | "pts" | "point" | "points" => Ok(Unit::POINTS),
            "in" | "inch" | "inches" => Ok(Unit::INCHES),
            "mm" | "millimeter" | "millimeters" => Ok(Unit::MILLIMETERS),
            _ => Err(SettingsError::UnknownUnit { name: s.to_string() }),
        }
    }
}

/// A converted dimension: display value plus unit suffix
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Dimension {
    pub value: String,
    pub suffix: &'static str,
}

impl Dimension {
    /// `"<value><suffix>"`
    pub fn with_suffix(&self) -> String {
        format!("{}{}", self.value, self.suffix)
    }
}

/// Convert a raw extent into `unit`. Any finite input converts deterministically.
pub fn convert(raw: Points, unit: Unit) -> Dimension {
    Dimension {
        value: unit.scale(raw),
        suffix: unit.suffix(),
    }
}
