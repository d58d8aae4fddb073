//! Label parameters.

use crate::defaults;
use crate::errors::SettingsError;
use crate::types::{Points, Rgb};
use crate::units::Unit;

/// Parameters shared by every label in a run
#[derive(Clone, Debug, PartialEq)]
pub struct LabelSettings {
    /// Font size of both labels
    pub font_size: Points,
    /// Clearance between a label and the object edge it faces
    pub offset: Points,
    pub unit: Unit,
    /// Only objects on this layer are labelled
    pub layer: String,
    pub fill: Rgb,
}

impl Default for LabelSettings {
    fn default() -> Self {
        Self {
            font_size: defaults::FONT_SIZE,
            offset: defaults::OFFSET,
            unit: defaults::UNIT,
            layer: defaults::LAYER.to_string(),
            fill: defaults::FILL,
        }
    }
}

impl LabelSettings {
    /// Create settings with validation: the font size must be positive and
    /// the offset finite.
    pub fn try_new(font_size: f64, offset: f64, unit: Unit) -> Result<Self, SettingsError> {
        let font_size = Points::try_positive(font_size)
            .map_err(|source| SettingsError::InvalidFontSize { value: font_size, source })?;
        let offset = Points::try_new(offset)
            .map_err(|source| SettingsError::InvalidOffset { value: offset, source })?;
        Ok(Self {
            font_size,
            offset,
            unit,
            ..Self::default()
        })
    }

    /// Build settings from the raw text of the parameter dialog.
    ///
    /// A font size that does not start with a number, or is zero, falls back
    /// to the default. An offset that does not start with a number, or is
    /// zero, falls back to `0`.
    pub fn from_inputs(font_size: &str, offset: &str, unit: &str) -> Result<Self, SettingsError> {
        let font_size = leading_number(font_size)
            .filter(|v| *v != 0.0)
            .unwrap_or(defaults::FONT_SIZE.raw());
        let offset = leading_number(offset).unwrap_or(0.0);
        Self::try_new(font_size, offset, unit.parse()?)
    }

    pub fn with_font_size(mut self, font_size: Points) -> Self {
        self.font_size = font_size;
        self
    }

    pub fn with_offset(mut self, offset: Points) -> Self {
        self.offset = offset;
        self
    }

    pub fn with_unit(mut self, unit: Unit) -> Self {
        self.unit = unit;
        self
    }

    /// Sets the layer whose objects get labelled.
    pub fn with_layer(mut self, layer: impl Into<String>) -> Self {
        self.layer = layer.into();
        self
    }

    pub fn with_fill(mut self, fill: Rgb) -> Self {
        self.fill = fill;
        self
    }
}

/// Parse the longest numeric prefix of `s`, ignoring leading whitespace,
/// with `parseFloat` prefix semantics.
/// `"12pt"` gives `12`; `"pt"` gives `None`.
// Quadratic in the prefix length; dialog input is a few characters.
fn leading_number(s: &str) -> Option<f64> {
    let s = s.trim_start();
    let numeric_len = s
        .find(|c: char| !(c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E')))
        .unwrap_or(s.len());
    let prefix = &s[..numeric_len];
    (1..=prefix.len())
        .rev()
        .find_map(|end| prefix[..end].parse::<f64>().ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::NumericError;

    #[test]
    fn defaults_match_dialog() {
        let s = LabelSettings::default();
        assert_eq!(s.font_size, Points(32.0));
        assert_eq!(s.offset, Points(40.0));
        assert_eq!(s.unit, Unit::MILLIMETERS);
        assert_eq!(s.layer, "Layer 1");
        assert_eq!(s.fill, Rgb(255, 0, 0));
    }

    #[test]
    fn try_new_validates() {
        assert!(LabelSettings::try_new(12.0, -5.0, Unit::POINTS).is_ok());
        assert_eq!(
            LabelSettings::try_new(0.0, 40.0, Unit::POINTS),
            Err(SettingsError::InvalidFontSize { value: 0.0, source: NumericError::Zero })
        );
        assert!(matches!(
            LabelSettings::try_new(12.0, f64::INFINITY, Unit::POINTS),
            Err(SettingsError::InvalidOffset { source: NumericError::Infinite, .. })
        ));
    }

    #[test]
    fn from_inputs_parses_numbers() {
        let s = LabelSettings::from_inputs("18", "12.5", "inches").unwrap();
        assert_eq!(s.font_size, Points(18.0));
        assert_eq!(s.offset, Points(12.5));
        assert_eq!(s.unit, Unit::INCHES);
    }

    #[test]
    fn from_inputs_applies_fallbacks() {
        let s = LabelSettings::from_inputs("big", "", "mm").unwrap();
        assert_eq!(s.font_size, Points(32.0));
        assert_eq!(s.offset, Points(0.0));

        let s = LabelSettings::from_inputs("0", "abc", "pt").unwrap();
        assert_eq!(s.font_size, Points(32.0));
        assert_eq!(s.offset, Points(0.0));
    }

    #[test]
    fn from_inputs_reads_numeric_prefix() {
        let s = LabelSettings::from_inputs(" 24pt", "10 points", "mm").unwrap();
        assert_eq!(s.font_size, Points(24.0));
        assert_eq!(s.offset, Points(10.0));
    }

    #[test]
    fn from_inputs_rejects_negative_font_and_unknown_unit() {
        assert!(matches!(
            LabelSettings::from_inputs("-4", "40", "mm"),
            Err(SettingsError::InvalidFontSize { .. })
        ));
        assert!(matches!(
            LabelSettings::from_inputs("32", "40", "furlongs"),
            Err(SettingsError::UnknownUnit { .. })
        ));
    }

    #[test]
    fn leading_number_handles_partial_exponents() {
        assert_eq!(leading_number("1e"), Some(1.0));
        assert_eq!(leading_number("2.5e1mm"), Some(25.0));
        assert_eq!(leading_number("-"), None);
        assert_eq!(leading_number(""), None);
    }
}
