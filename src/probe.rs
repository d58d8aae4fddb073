//! Text extent measurement through throwaway text elements.
//!
//! The host only reports rendered bounds for text that exists in the
//! document, so measuring a string means creating it, reading it back and
//! deleting it again. [`ProbeGuard`] owns the temporary element and removes
//! it on every exit path, including unwinding.

use crate::errors::{AnnotateError, HostError};
use crate::host::{Document, TextFrame};
use crate::log::{debug, warn};
use crate::types::{Orientation, Points, Size};

/// Owns a temporary text element and removes it when released or dropped.
pub struct ProbeGuard<T: TextFrame> {
    frame: Option<T>,
}

impl<T: TextFrame> ProbeGuard<T> {
    pub fn new(frame: T) -> Self {
        Self { frame: Some(frame) }
    }

    /// Run `op` against the guarded element.
    pub fn inspect<R>(
        &mut self,
        op: impl FnOnce(&mut T) -> Result<R, AnnotateError>,
    ) -> Result<R, AnnotateError> {
        match self.frame.as_mut() {
            Some(frame) => op(frame),
            None => Err(HostError::RemoveText {
                message: "probe element was already removed".to_string(),
            }
            .into()),
        }
    }

    /// Remove the element now, reporting a removal failure to the caller.
    pub fn release(mut self) -> Result<(), HostError> {
        match self.frame.take() {
            Some(frame) => frame.remove(),
            None => Ok(()),
        }
    }
}

impl<T: TextFrame> Drop for ProbeGuard<T> {
    fn drop(&mut self) {
        if let Some(frame) = self.frame.take() {
            if let Err(err) = frame.remove() {
                warn!(%err, "probe element could not be removed");
            }
        }
    }
}

/// Width and height of a text element's visible bounds.
///
/// Width is `right - left` and height is `top - bottom` of the bounds as
/// rendered, so for a rotated element they describe the rotated box.
pub fn visible_extent<T: TextFrame>(frame: &T, content: &str) -> Result<Size<Points>, AnnotateError> {
    let bounds = frame.visible_bounds()?;
    let extent = bounds.size();
    for side in [extent.w, extent.h] {
        Points::try_new(side.raw()).map_err(|source| AnnotateError::InvalidExtent {
            content: content.to_string(),
            source,
        })?;
    }
    Ok(extent)
}

/// Measure `content` as it would render at `font_size` in `orientation`.
///
/// The probe element is removed before this returns, whether or not the
/// measurement succeeded. A measurement failure takes precedence over a
/// removal failure.
pub fn measure<D: Document>(
    doc: &mut D,
    content: &str,
    font_size: Points,
    orientation: Orientation,
) -> Result<Size<Points>, AnnotateError> {
    let frame = doc.create_text(content, font_size)?;
    let mut guard = ProbeGuard::new(frame);

    let measured = guard.inspect(|frame| {
        if orientation.is_rotated() {
            frame.set_rotation(orientation)?;
        }
        visible_extent(frame, content)
    });
    let removed = guard.release();

    let extent = measured?;
    removed?;

    debug!(content, ?orientation, w = extent.w.raw(), h = extent.h.raw(), "measured probe");
    Ok(extent)
}
