//! In-memory document host.
//!
//! Text metrics are heuristic: every glyph advances 0.6em and a line is 1em
//! tall. A 90° rotation swaps the two. Positions address the visible top-left
//! corner. Faults can be switched on to exercise error paths.

use std::cell::RefCell;
use std::rc::Rc;

use crate::defaults;
use crate::errors::HostError;
use crate::host::{DesignObject, Document, TextFrame};
use crate::types::{Bounds, Orientation, Point, Points, Rgb, Size};

/// Snapshot of a text element created in a [`MemoryDocument`]
#[derive(Debug, Clone, PartialEq)]
pub struct TextRecord {
    /// Creation order, starting at 0
    pub id: usize,
    pub content: String,
    pub font_size: Points,
    pub orientation: Orientation,
    /// Visible top-left corner
    pub position: Point<Points>,
    pub fill: Rgb,
    pub removed: bool,
}

impl TextRecord {
    /// Size of the rendered text before rotation
    fn unrotated_size(&self) -> Size<Points> {
        let glyphs = self.content.chars().count() as f64;
        Size::new(
            self.font_size * (defaults::CHAR_ADVANCE_EM * glyphs),
            self.font_size * defaults::LINE_HEIGHT_EM,
        )
    }

    /// Rendered bounds, accounting for rotation
    pub fn visible_bounds(&self) -> Bounds {
        let size = self.unrotated_size();
        let size = match self.orientation {
            Orientation::Horizontal => size,
            Orientation::Vertical => Size::new(size.h, size.w),
        };
        Bounds::from_top_left(self.position.x, self.position.y, size)
    }
}

#[derive(Debug, Default, Clone)]
struct Faults {
    /// 1-based index of the text creation that fails
    create_at: Option<usize>,
    visible_bounds: bool,
    non_finite_bounds: bool,
    remove: bool,
}

#[derive(Debug, Default)]
struct Store {
    frames: Vec<TextRecord>,
    faults: Faults,
}

impl Store {
    fn frame_mut(&mut self, id: usize) -> Result<&mut TextRecord, HostError> {
        match self.frames.get_mut(id) {
            Some(frame) if !frame.removed => Ok(frame),
            _ => Err(HostError::UpdateText {
                message: format!("text element {id} no longer exists"),
            }),
        }
    }
}

/// A selected object in a [`MemoryDocument`]
#[derive(Debug, Clone, PartialEq)]
pub struct MemoryObject {
    pub bounds: Bounds,
    pub layer: String,
}

impl DesignObject for MemoryObject {
    fn bounds(&self) -> Result<Bounds, HostError> {
        Ok(self.bounds)
    }

    fn layer_name(&self) -> Result<String, HostError> {
        Ok(self.layer.clone())
    }
}

/// A text element handle into a [`MemoryDocument`]
#[derive(Debug)]
pub struct MemoryFrame {
    id: usize,
    store: Rc<RefCell<Store>>,
}

impl MemoryFrame {
    pub fn id(&self) -> usize {
        self.id
    }
}

impl TextFrame for MemoryFrame {
    fn set_rotation(&mut self, orientation: Orientation) -> Result<(), HostError> {
        self.store.borrow_mut().frame_mut(self.id)?.orientation = orientation;
        Ok(())
    }

    fn visible_bounds(&self) -> Result<Bounds, HostError> {
        let mut store = self.store.borrow_mut();
        let faults = store.faults.clone();
        let frame = store.frame_mut(self.id)?;
        if faults.visible_bounds {
            return Err(HostError::VisibleBounds {
                message: "text is not rendered".to_string(),
            });
        }
        if faults.non_finite_bounds {
            return Ok(Bounds::new(0.0, f64::NAN, f64::INFINITY, 0.0));
        }
        Ok(frame.visible_bounds())
    }

    fn set_position(&mut self, left: Points, top: Points) -> Result<(), HostError> {
        self.store.borrow_mut().frame_mut(self.id)?.position = Point::new(left, top);
        Ok(())
    }

    fn set_fill_color(&mut self, color: Rgb) -> Result<(), HostError> {
        self.store.borrow_mut().frame_mut(self.id)?.fill = color;
        Ok(())
    }

    fn remove(self) -> Result<(), HostError> {
        let mut store = self.store.borrow_mut();
        if store.faults.remove {
            return Err(HostError::RemoveText {
                message: format!("text element {} is locked", self.id),
            });
        }
        store.frame_mut(self.id)?.removed = true;
        Ok(())
    }
}

/// A document kept entirely in memory
#[derive(Debug, Default)]
pub struct MemoryDocument {
    selection: Vec<MemoryObject>,
    store: Rc<RefCell<Store>>,
}

impl MemoryDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an object to the selection
    pub fn select(&mut self, bounds: Bounds, layer: impl Into<String>) -> &mut Self {
        self.selection.push(MemoryObject {
            bounds,
            layer: layer.into(),
        });
        self
    }

    /// Fail the `n`-th text creation (1-based)
    pub fn with_failing_create_at(self, n: usize) -> Self {
        self.store.borrow_mut().faults.create_at = Some(n);
        self
    }

    /// Fail every visible-bounds read
    pub fn with_failing_visible_bounds(self) -> Self {
        self.store.borrow_mut().faults.visible_bounds = true;
        self
    }

    /// Report NaN/infinite visible bounds
    pub fn with_non_finite_bounds(self) -> Self {
        self.store.borrow_mut().faults.non_finite_bounds = true;
        self
    }

    /// Refuse to remove text elements
    pub fn with_failing_remove(self) -> Self {
        self.store.borrow_mut().faults.remove = true;
        self
    }

    /// Every text element ever created, including removed ones
    pub fn all_frames(&self) -> Vec<TextRecord> {
        self.store.borrow().frames.clone()
    }

    /// Text elements still present in the document
    pub fn live_frames(&self) -> Vec<TextRecord> {
        self.store
            .borrow()
            .frames
            .iter()
            .filter(|frame| !frame.removed)
            .cloned()
            .collect()
    }

    pub fn created_count(&self) -> usize {
        self.store.borrow().frames.len()
    }
}

impl Document for MemoryDocument {
    type Object = MemoryObject;
    type Text = MemoryFrame;

    fn selection(&self) -> Result<Vec<MemoryObject>, HostError> {
        Ok(self.selection.clone())
    }

    fn create_text(&mut self, content: &str, font_size: Points) -> Result<MemoryFrame, HostError> {
        let mut store = self.store.borrow_mut();
        let id = store.frames.len();
        if store.faults.create_at == Some(id + 1) {
            return Err(HostError::CreateText {
                content: content.to_string(),
                message: "document is read-only".to_string(),
            });
        }
        store.frames.push(TextRecord {
            id,
            content: content.to_string(),
            font_size,
            orientation: Orientation::Horizontal,
            position: Point::default(),
            fill: Rgb::BLACK,
            removed: false,
        });
        Ok(MemoryFrame {
            id,
            store: Rc::clone(&self.store),
        })
    }
}
