//! Error types with diagnostics using miette
//!
//! Host failures are never recovered locally: they abort the remaining batch.

use miette::Diagnostic;
use thiserror::Error;

use crate::types::NumericError;

// ============================================================================
// Host Errors
// ============================================================================

/// Failures reported by the host document services
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum HostError {
    #[error("failed to read the selection: {message}")]
    #[diagnostic(code(dimlabel::host::selection))]
    Selection { message: String },

    #[error("failed to read object geometry: {message}")]
    #[diagnostic(code(dimlabel::host::object))]
    Object { message: String },

    #[error("failed to create text element {content:?}: {message}")]
    #[diagnostic(code(dimlabel::host::create_text))]
    CreateText { content: String, message: String },

    #[error("failed to update text element: {message}")]
    #[diagnostic(code(dimlabel::host::update_text))]
    UpdateText { message: String },

    #[error("failed to read visible bounds: {message}")]
    #[diagnostic(code(dimlabel::host::visible_bounds))]
    VisibleBounds { message: String },

    #[error("failed to remove text element: {message}")]
    #[diagnostic(code(dimlabel::host::remove_text))]
    RemoveText { message: String },
}

// ============================================================================
// Annotation Errors
// ============================================================================

/// Errors that stop an annotation run
#[derive(Error, Diagnostic, Debug)]
pub enum AnnotateError {
    #[error("no open documents")]
    #[diagnostic(
        code(dimlabel::annotate::no_document),
        help("open a document before running the annotation")
    )]
    NoDocument,

    #[error("nothing is selected")]
    #[diagnostic(
        code(dimlabel::annotate::empty_selection),
        help("select one or more objects to label")
    )]
    EmptySelection,

    #[error("text {content:?} measured to a non-finite extent")]
    #[diagnostic(code(dimlabel::annotate::invalid_extent))]
    InvalidExtent {
        content: String,
        #[source]
        source: NumericError,
    },

    #[error(transparent)]
    #[diagnostic(transparent)]
    Host(#[from] HostError),
}

// ============================================================================
// Settings Errors
// ============================================================================

/// Invalid label parameters
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum SettingsError {
    #[error("invalid font size {value}: {source}")]
    #[diagnostic(
        code(dimlabel::settings::font_size),
        help("font size must be a positive number of points")
    )]
    InvalidFontSize {
        value: f64,
        #[source]
        source: NumericError,
    },

    #[error("invalid offset {value}: {source}")]
    #[diagnostic(code(dimlabel::settings::offset))]
    InvalidOffset {
        value: f64,
        #[source]
        source: NumericError,
    },

    #[error("unknown unit: {name}")]
    #[diagnostic(
        code(dimlabel::settings::unknown_unit),
        help("use one of: pt, inches, mm")
    )]
    UnknownUnit { name: String },
}
