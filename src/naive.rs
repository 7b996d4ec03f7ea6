//! Brute-force scans over a plain point slice.
//!
//! These are the linear-time baselines the tree is measured and checked against.

use crate::bounds::Rectangle;
use crate::kdtree::Nearest;
use crate::point::Point;

/// Every point contained in `rectangle`, in input order.
pub fn range_scan<'a>(points: &'a [Point], rectangle: &Rectangle) -> Vec<&'a Point> {
    points.iter().filter(|p| rectangle.contains(p)).collect()
}

/// The point closest to `query`; the first one in input order wins ties.
pub fn nearest_scan<'a>(points: &'a [Point], query: &Point) -> Option<Nearest<'a>> {
    let mut best: Option<Nearest<'a>> = None;
    for p in points {
        let d2 = p.squared_distance(query);
        if best.is_none_or(|b| d2 < b.distance_squared) {
            best = Some(Nearest { distance_squared: d2, point: p });
        }
    }
    best
}
