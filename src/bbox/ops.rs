//! Pairwise geometry and point queries.

use super::Bbox;

impl Bbox {
    /// Returns true if `(x, y)` lies inside the box or on its boundary.
    pub fn contains_point(&self, x: f64, y: f64) -> bool {
        self.left <= x && x <= self.right && self.top <= y && y <= self.bottom
    }

    /// Returns the smallest box enclosing both `self` and `other`.
    pub fn union(&self, other: &Bbox) -> Bbox {
        // The component-wise min/max of two ordered boxes is ordered too.
        Bbox {
            left: self.left.min(other.left),
            top: self.top.min(other.top),
            right: self.right.max(other.right),
            bottom: self.bottom.max(other.bottom),
        }
    }

    /// Returns the region shared by both boxes, or `None` if they are disjoint.
    ///
    /// Boxes sharing only an edge or a corner intersect in a zero-area box.
    pub fn intersection(&self, other: &Bbox) -> Option<Bbox> {
        let left = self.left.max(other.left);
        let top = self.top.max(other.top);
        let right = self.right.min(other.right);
        let bottom = self.bottom.min(other.bottom);

        Bbox::new(left, top, right, bottom).ok()
    }

    /// Returns true if the boxes share a region of strictly positive area.
    ///
    /// Touching along an edge or at a corner is not an overlap.
    pub fn overlaps(&self, other: &Bbox) -> bool {
        self.intersection(other).is_some_and(|inter| inter.area() > 0.0)
    }

    /// Intersection over union with `other`, in `[0, 1]`.
    ///
    /// Returns `0.0` when the union area is zero (both boxes degenerate).
    pub fn iou(&self, other: &Bbox) -> f64 {
        let intersection_area = self.intersection(other).map_or(0.0, |inter| inter.area());
        let union_area = self.area() + other.area() - intersection_area;

        if union_area == 0.0 {
            return 0.0;
        }

        intersection_area / union_area
    }

    /// Euclidean distance from `(x, y)` to the nearest point of the box.
    ///
    /// Points inside the box or on its boundary are at distance `0.0`.
    pub fn distance_to_point(&self, x: f64, y: f64) -> f64 {
        let dx = (self.left - x).max(0.0).max(x - self.right);
        let dy = (self.top - y).max(0.0).max(y - self.bottom);
        (dx * dx + dy * dy).sqrt()
    }
}
