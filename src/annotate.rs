//! Annotation of a selection with dimension labels.
//!
//! Each eligible object gets a width label above it and a rotated height
//! label to its left. Objects are processed strictly in selection order, and
//! the first host failure aborts the rest of the batch. Labels already placed
//! for earlier objects stay in the document.

use std::fmt;

use crate::errors::AnnotateError;
use crate::fit;
use crate::host::{DesignObject, Document, TextFrame};
use crate::log::{debug, info, warn};
use crate::place::{Anchor, LabelKind};
use crate::probe;
use crate::settings::LabelSettings;
use crate::types::{Bounds, Points, Size};
use crate::units;

/// A label created in the document
#[derive(Clone, Debug, PartialEq)]
pub struct PlacedLabel {
    pub kind: LabelKind,
    pub content: String,
    /// Final visible top-left corner
    pub anchor: Anchor,
    /// Visible size of the created label
    pub size: Size<Points>,
}

/// Outcome of an annotation run
#[derive(Clone, Debug, PartialEq)]
pub struct AnnotationReport {
    /// Layer objects had to be on to be labelled
    pub layer: String,
    /// Objects that received labels
    pub processed: usize,
    /// Objects skipped because of their layer
    pub skipped: usize,
    /// Labels in creation order, two per processed object
    pub labels: Vec<PlacedLabel>,
}

impl fmt::Display for AnnotationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.processed == 0 {
            write!(f, "No objects on '{}' were processed.", self.layer)
        } else {
            write!(f, "Labels added for {} object(s).", self.processed)
        }
    }
}

/// Places dimension labels according to a fixed set of [`LabelSettings`]
#[derive(Clone, Debug, Default)]
pub struct Annotator {
    settings: LabelSettings,
}

impl Annotator {
    pub fn new(settings: LabelSettings) -> Self {
        Self { settings }
    }

    /// Label every selected object on the configured layer.
    pub fn run<D: Document>(&self, doc: &mut D) -> Result<AnnotationReport, AnnotateError> {
        let selection = doc.selection()?;
        if selection.is_empty() {
            return Err(AnnotateError::EmptySelection);
        }

        let mut report = AnnotationReport {
            layer: self.settings.layer.clone(),
            processed: 0,
            skipped: 0,
            labels: Vec::with_capacity(selection.len() * LabelKind::ALL.len()),
        };

        for (index, object) in selection.iter().enumerate() {
            let layer = object.layer_name()?;
            if layer != self.settings.layer {
                warn!(index, %layer, "skipping object outside the label layer");
                report.skipped += 1;
                continue;
            }

            let bounds = object.bounds()?;
            debug!(index, ?bounds, "labelling object");
            for kind in LabelKind::ALL {
                report.labels.push(self.label(doc, kind, &bounds)?);
            }
            report.processed += 1;
        }

        info!(processed = report.processed, skipped = report.skipped, "annotation finished");
        Ok(report)
    }

    /// Create, style and position one label for `bounds`.
    fn label<D: Document>(
        &self,
        doc: &mut D,
        kind: LabelKind,
        bounds: &Bounds,
    ) -> Result<PlacedLabel, AnnotateError> {
        let settings = &self.settings;
        let orientation = kind.orientation();
        let extent = kind.object_extent(bounds);

        let dimension = units::convert(extent, settings.unit);
        let content = fit::fit_label(doc, &dimension, extent, settings.font_size, orientation)?;

        let mut frame = doc.create_text(&content, settings.font_size)?;
        frame.set_fill_color(settings.fill)?;
        if orientation.is_rotated() {
            frame.set_rotation(orientation)?;
        }

        let reference = kind.reference(bounds);
        frame.set_position(reference.x, reference.y)?;
        let size = probe::visible_extent(&frame, &content)?;

        let anchor = kind.place(bounds, settings.offset, size);
        frame.set_position(anchor.left, anchor.top)?;
        debug!(?kind, %content, left = anchor.left.raw(), top = anchor.top.raw(), "placed label");

        Ok(PlacedLabel { kind, content, anchor, size })
    }
}

/// Label the selection of the active document.
///
/// `active` is `None` when no document is open.
pub fn annotate<D: Document>(
    active: Option<&mut D>,
    settings: &LabelSettings,
) -> Result<AnnotationReport, AnnotateError> {
    let doc = active.ok_or(AnnotateError::NoDocument)?;
    Annotator::new(settings.clone()).run(doc)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryDocument;
    use crate::types::Rgb;

    fn small_font() -> LabelSettings {
        LabelSettings::default().with_font_size(Points(12.0))
    }

    #[test]
    fn labels_one_object() {
        let mut doc = MemoryDocument::new();
        doc.select(Bounds::new(0.0, 100.0, 72.0, 0.0), "Layer 1");

        let report = Annotator::new(small_font()).run(&mut doc).unwrap();
        assert_eq!(report.processed, 1);
        assert_eq!(report.labels.len(), 2);
        assert_eq!(report.labels[0].content, "25 mm");
        assert_eq!(report.labels[1].content, "35 mm");

        // two probes removed, two labels kept
        assert_eq!(doc.created_count(), 4);
        let live = doc.live_frames();
        assert_eq!(live.len(), 2);
        assert!(live.iter().all(|f| f.fill == Rgb::RED && f.font_size == Points(12.0)));
    }

    #[test]
    fn label_geometry_matches_anchor() {
        let mut doc = MemoryDocument::new();
        doc.select(Bounds::new(10.0, 50.0, 110.0, 20.0), "Layer 1");

        let report = Annotator::new(small_font()).run(&mut doc).unwrap();
        let live = doc.live_frames();
        for (label, frame) in report.labels.iter().zip(&live) {
            assert_eq!(frame.position.x, label.anchor.left);
            assert_eq!(frame.position.y, label.anchor.top);
            assert_eq!(frame.content, label.content);
        }
    }

    #[test]
    fn other_layers_are_skipped() {
        let mut doc = MemoryDocument::new();
        doc.select(Bounds::new(0.0, 10.0, 10.0, 0.0), "Background");

        let report = Annotator::default().run(&mut doc).unwrap();
        assert_eq!(report.processed, 0);
        assert_eq!(report.skipped, 1);
        assert!(report.labels.is_empty());
        assert_eq!(doc.created_count(), 0);
    }

    #[test]
    fn empty_selection_is_an_error() {
        let mut doc = MemoryDocument::new();
        assert!(matches!(
            Annotator::default().run(&mut doc),
            Err(AnnotateError::EmptySelection)
        ));
    }

    #[test]
    fn missing_document_is_an_error() {
        let result = annotate::<MemoryDocument>(None, &LabelSettings::default());
        assert!(matches!(result, Err(AnnotateError::NoDocument)));
    }

    #[test]
    fn summary_messages() {
        let mut report = AnnotationReport {
            layer: "Layer 1".to_string(),
            processed: 0,
            skipped: 3,
            labels: Vec::new(),
        };
        assert_eq!(report.to_string(), "No objects on 'Layer 1' were processed.");
        report.processed = 2;
        assert_eq!(report.to_string(), "Labels added for 2 object(s).");
    }
}
