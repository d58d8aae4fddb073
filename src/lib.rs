//! Dimension labels for vector objects.
//!
//! For every selected object on the label layer, two labels are added: its
//! width, centered above it, and its height, rotated 90° and centered to its
//! left. Values are shown in points, inches or millimeters. When the
//! suffixed text would be wider than the object, the unit suffix is dropped.
//!
//! The document itself is a host service reached through the traits in
//! [`host`]; [`memory::MemoryDocument`] is a self-contained implementation.
//!
//! ```
//! use dimlabel::memory::MemoryDocument;
//! use dimlabel::{Bounds, LabelSettings, Points, annotate};
//!
//! let mut doc = MemoryDocument::new();
//! doc.select(Bounds::new(0.0, 100.0, 72.0, 0.0), "Layer 1");
//!
//! let settings = LabelSettings::default().with_font_size(Points(12.0));
//! let report = annotate(Some(&mut doc), &settings).unwrap();
//! assert_eq!(report.labels[0].content, "25 mm");
//! assert_eq!(report.labels[1].content, "35 mm");
//! ```

pub mod annotate;
pub mod defaults;
pub mod errors;
pub mod fit;
pub mod host;
pub mod log;
pub mod memory;
pub mod place;
pub mod probe;
pub mod settings;
pub mod types;
pub mod units;

pub use annotate::{AnnotationReport, Annotator, PlacedLabel, annotate};
pub use errors::{AnnotateError, HostError, SettingsError};
pub use host::{DesignObject, Document, TextFrame};
pub use place::{Anchor, LabelKind, place_above, place_left};
pub use settings::LabelSettings;
pub use types::{Bounds, NumericError, Orientation, Point, Points, Rgb, Size};
pub use units::{Dimension, Unit, UnitSystem, convert};
