//! Host document services.
//!
//! The host owns the document: it enumerates the selection, reports object
//! geometry, and creates the text elements that become labels. Every call is
//! synchronous and may fail with a [`HostError`].

use crate::errors::HostError;
use crate::types::{Bounds, Orientation, Points, Rgb};

/// An open document with a selection
pub trait Document {
    /// A selected object
    type Object: DesignObject;
    /// A text element living in the document
    type Text: TextFrame;

    /// The current selection, in selection order
    fn selection(&self) -> Result<Vec<Self::Object>, HostError>;

    /// Create an unrotated text element with the given content and font size
    fn create_text(&mut self, content: &str, font_size: Points) -> Result<Self::Text, HostError>;
}

/// A selected object
pub trait DesignObject {
    /// Geometric bounds, excluding stroke width
    fn bounds(&self) -> Result<Bounds, HostError>;

    /// Name of the layer the object sits on
    fn layer_name(&self) -> Result<String, HostError>;
}

/// A text element created through [`Document::create_text`]
pub trait TextFrame {
    fn set_rotation(&mut self, orientation: Orientation) -> Result<(), HostError>;

    /// Rendered bounds, including glyph extents
    fn visible_bounds(&self) -> Result<Bounds, HostError>;

    /// Move the element so its visible top-left corner lands on `(left, top)`
    fn set_position(&mut self, left: Points, top: Points) -> Result<(), HostError>;

    fn set_fill_color(&mut self, color: Rgb) -> Result<(), HostError>;

    /// Delete the element from the document
    fn remove(self) -> Result<(), HostError>;
}
