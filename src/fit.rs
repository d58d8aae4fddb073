//! Suffix dropping for labels that would outgrow their object.

use crate::errors::AnnotateError;
use crate::host::Document;
use crate::probe;
use crate::types::{Orientation, Points};
use crate::units::Dimension;

/// Pick the label text: `"<value><suffix>"`, or `value` alone when the
/// suffixed text measured wider than the object. Equal extents keep the suffix.
pub fn decide_content(value: &str, suffix: &str, measured: Points, object_extent: Points) -> String {
    if measured > object_extent {
        value.to_string()
    } else {
        format!("{value}{suffix}")
    }
}

/// Measure the suffixed label once and decide its content.
///
/// The measured extent is the probe's horizontal extent (`right - left`),
/// taken after the probe is rotated into `orientation`. The final label is
/// not re-checked after creation.
pub fn fit_label<D: Document>(
    doc: &mut D,
    dimension: &Dimension,
    object_extent: Points,
    font_size: Points,
    orientation: Orientation,
) -> Result<String, AnnotateError> {
    let candidate = dimension.with_suffix();
    let extent = probe::measure(doc, &candidate, font_size, orientation)?;
    Ok(decide_content(&dimension.value, dimension.suffix, extent.w, object_extent))
}
