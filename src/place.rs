//! Label anchor placement.
//!
//! A label is positioned by its visible top-left corner. Placement picks a
//! reference point outside the object, `offset` away from the labelled edge,
//! and a handle on the label box that must land on it. The handle is given as
//! a fraction of the label size measured from the top-left corner, x to the
//! right and y downward.
//!
//! Document y grows upward, so moving a label down by its height means adding
//! the height to the top coordinate.

use glam::{DVec2, dvec2};

use crate::types::{Bounds, Orientation, Point, Points, Size};

/// Middle of the label's bottom edge
const BOTTOM_CENTER: DVec2 = DVec2::new(0.5, 1.0);
/// Middle of the label's right edge
const RIGHT_MIDDLE: DVec2 = DVec2::new(1.0, 0.5);

/// Target top-left corner of a label
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Anchor {
    pub left: Points,
    pub top: Points,
}

impl Anchor {
    fn from_dvec(v: DVec2) -> Self {
        Anchor {
            left: Points(v.x),
            top: Points(v.y),
        }
    }
}

fn anchor_for(reference: DVec2, handle: DVec2, size: Size<Points>) -> Anchor {
    let size = dvec2(size.w.raw(), size.h.raw());
    Anchor::from_dvec(reference + dvec2(-handle.x, handle.y) * size)
}

/// Center a label horizontally over the object, its bottom edge `offset`
/// above the object's top edge.
pub fn place_above(center_x: Points, y_top: Points, offset: Points, size: Size<Points>) -> Anchor {
    let desired_bottom = y_top + offset;
    anchor_for(dvec2(center_x.raw(), desired_bottom.raw()), BOTTOM_CENTER, size)
}

/// Center a label vertically beside the object, its right edge `offset` left
/// of the object's left edge.
pub fn place_left(center_y: Points, x_left: Points, offset: Points, size: Size<Points>) -> Anchor {
    let desired_right = x_left - offset;
    anchor_for(dvec2(desired_right.raw(), center_y.raw()), RIGHT_MIDDLE, size)
}

/// Which dimension a label shows
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LabelKind {
    /// Horizontal label above the object
    Width,
    /// Rotated label left of the object
    Height,
}

impl LabelKind {
    /// Labels in the order they are created for each object
    pub const ALL: [LabelKind; 2] = [LabelKind::Width, LabelKind::Height];

    pub fn orientation(self) -> Orientation {
        match self {
            LabelKind::Width => Orientation::Horizontal,
            LabelKind::Height => Orientation::Vertical,
        }
    }

    /// The object extent this label reports
    pub fn object_extent(self, bounds: &Bounds) -> Points {
        match self {
            LabelKind::Width => bounds.width(),
            LabelKind::Height => bounds.height(),
        }
    }

    /// Where a freshly created label is parked before it is measured
    pub fn reference(self, bounds: &Bounds) -> Point<Points> {
        match self {
            LabelKind::Width => Point::new(bounds.center_x(), bounds.top()),
            LabelKind::Height => Point::new(bounds.left(), bounds.center_y()),
        }
    }

    /// Final anchor for a label of `size`
    pub fn place(self, bounds: &Bounds, offset: Points, size: Size<Points>) -> Anchor {
        match self {
            LabelKind::Width => place_above(bounds.center_x(), bounds.top(), offset, size),
            LabelKind::Height => place_left(bounds.center_y(), bounds.left(), offset, size),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn size(w: f64, h: f64) -> Size<Points> {
        Size::new(Points(w), Points(h))
    }

    #[test]
    fn above_centers_and_clears_top_edge() {
        let a = place_above(Points(100.0), Points(50.0), Points(40.0), size(30.0, 10.0));
        assert_eq!(a, Anchor { left: Points(85.0), top: Points(100.0) });
    }

    #[test]
    fn left_centers_and_clears_left_edge() {
        let a = place_left(Points(60.0), Points(20.0), Points(40.0), size(30.0, 10.0));
        assert_eq!(a, Anchor { left: Points(-50.0), top: Points(65.0) });
    }

    #[test]
    fn empty_label_sits_on_reference_point() {
        let a = place_above(Points(10.0), Points(5.0), Points(2.0), size(0.0, 0.0));
        assert_eq!(a, Anchor { left: Points(10.0), top: Points(7.0) });
        let a = place_left(Points(10.0), Points(5.0), Points(2.0), size(0.0, 0.0));
        assert_eq!(a, Anchor { left: Points(3.0), top: Points(10.0) });
    }

    #[test]
    fn zero_offset_touches_object() {
        let a = place_above(Points(0.0), Points(20.0), Points::ZERO, size(8.0, 4.0));
        // bottom edge = top - h = 20
        assert_eq!(a.top - Points(4.0), Points(20.0));
    }

    #[test]
    fn kind_places_relative_to_bounds() {
        let bounds = Bounds::new(0.0, 100.0, 72.0, 0.0);
        let a = LabelKind::Width.place(&bounds, Points(40.0), size(36.0, 12.0));
        assert_eq!(a, Anchor { left: Points(18.0), top: Points(152.0) });
        let a = LabelKind::Height.place(&bounds, Points(40.0), size(12.0, 36.0));
        assert_eq!(a, Anchor { left: Points(-52.0), top: Points(68.0) });
    }

    #[test]
    fn kind_reports_matching_extent_and_reference() {
        let bounds = Bounds::new(10.0, 90.0, 50.0, 30.0);
        assert_eq!(LabelKind::Width.object_extent(&bounds), Points(40.0));
        assert_eq!(LabelKind::Height.object_extent(&bounds), Points(60.0));
        assert_eq!(LabelKind::Width.reference(&bounds), Point::new(Points(30.0), Points(90.0)));
        assert_eq!(LabelKind::Height.reference(&bounds), Point::new(Points(10.0), Points(60.0)));
        assert_eq!(LabelKind::Height.orientation(), Orientation::Vertical);
    }
}
