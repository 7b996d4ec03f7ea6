use std::cmp::Ordering;

use tracing::{debug, trace, warn};

use crate::bounds::Rectangle;
use crate::error::{KdTreeError, Result};
use crate::point::Point;

/// A tree node holding one point and exclusively owning its two subtrees.
#[derive(Clone, Debug)]
pub struct KdNode {
    location: Point,
    left: Option<Box<KdNode>>,
    right: Option<Box<KdNode>>,
}

impl KdNode {
    pub fn location(&self) -> &Point {
        &self.location
    }

    pub fn left(&self) -> Option<&KdNode> {
        self.left.as_deref()
    }

    pub fn right(&self) -> Option<&KdNode> {
        self.right.as_deref()
    }

    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}

/// Result of a nearest-neighbor search, borrowing the matched point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Nearest<'a> {
    pub distance_squared: f64,
    pub point: &'a Point,
}

impl Nearest<'_> {
    pub fn distance(&self) -> f64 {
        self.distance_squared.sqrt()
    }
}

/// A static k-d tree.
///
/// The tree is built once by recursive median partitioning, cycling the splitting
/// axis with depth, and is read-only afterwards. Queries take `&self` and keep all
/// traversal state on the call stack, so a single tree can serve many threads.
#[derive(Clone, Debug, Default)]
pub struct KdTree {
    root: Option<Box<KdNode>>,
    dimensions: usize,
    len: usize,
}

impl KdTree {
    /// Builds a balanced tree from `points`.
    ///
    /// An empty input yields an empty tree. The first point fixes the dimensionality;
    /// every other point must match it, and no coordinate may be NaN.
    pub fn build(points: Vec<Point>) -> Result<Self> {
        let Some(first) = points.first() else {
            debug!("Built empty k-d tree");
            return Ok(Self::default());
        };

        let dimensions = first.dimensions();
        if let Err(err) = validate(&points, dimensions) {
            warn!(%err, count = points.len(), "Rejected k-d tree input");
            return Err(err);
        }

        let len = points.len();
        let root = build_recursive(points, 0, dimensions);
        let tree = Self { root, dimensions, len };
        debug!(count = len, dimensions, height = tree.height(), "Built k-d tree");
        Ok(tree)
    }

    pub fn root(&self) -> Option<&KdNode> {
        self.root.as_deref()
    }

    /// Number of indexed points.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Coordinate count of the indexed points; 0 for an empty tree.
    pub fn dimensions(&self) -> usize {
        self.dimensions
    }

    /// Number of nodes on the longest root-to-leaf path.
    pub fn height(&self) -> usize {
        fn height_recursive(node: Option<&KdNode>) -> usize {
            match node {
                Some(n) => 1 + height_recursive(n.left()).max(height_recursive(n.right())),
                None => 0,
            }
        }
        height_recursive(self.root())
    }

    /// Pre-order iterator over the indexed points.
    pub fn iter(&self) -> Iter<'_> {
        Iter { stack: self.root().into_iter().collect() }
    }

    /// Collects every indexed point contained in `rectangle`.
    ///
    /// The order of the result is unspecified; duplicate input points yield duplicate
    /// matches. An empty tree returns no matches for any rectangle.
    pub fn range_query(&self, rectangle: &Rectangle) -> Result<Vec<&Point>> {
        let Some(root) = self.root() else {
            return Ok(Vec::new());
        };
        rectangle.lower().check_dimensions(self.dimensions)?;

        let mut results = Vec::new();
        self.range_recursive(root, 0, rectangle, &mut results);
        trace!(matches = results.len(), "Range query");
        Ok(results)
    }

    fn range_recursive<'a>(&'a self, node: &'a KdNode, depth: usize, rectangle: &Rectangle, results: &mut Vec<&'a Point>) {
        let axis = depth % self.dimensions;
        let (lo, hi) = rectangle.interval(axis);
        let v = node.location.coord(axis);

        if v > hi {
            // Everything at or right of this node lies above the interval on `axis`.
            if let Some(left) = node.left() {
                self.range_recursive(left, depth + 1, rectangle, results);
            }
        } else if v < lo {
            if let Some(right) = node.right() {
                self.range_recursive(right, depth + 1, rectangle, results);
            }
        } else {
            if let Some(left) = node.left() {
                self.range_recursive(left, depth + 1, rectangle, results);
            }
            if let Some(right) = node.right() {
                self.range_recursive(right, depth + 1, rectangle, results);
            }
            // Passing the splitting axis says nothing about the other axes.
            if rectangle.contains(&node.location) {
                results.push(&node.location);
            }
        }
    }

    /// Finds the indexed point closest to `query` under Euclidean distance.
    ///
    /// Returns `None` for an empty tree. A query with a NaN coordinate is rejected.
    /// Among equidistant points the first one reached by the search wins.
    pub fn nearest_neighbor(&self, query: &Point) -> Result<Option<Nearest<'_>>> {
        let Some(root) = self.root() else {
            return Ok(None);
        };
        query.check_dimensions(self.dimensions)?;
        query.check_not_nan()?;

        let mut best = None;
        self.nearest_recursive(root, 0, query, &mut best);
        if let Some(found) = &best {
            trace!(distance_squared = found.distance_squared, "Nearest neighbor query");
        }
        Ok(best)
    }

    fn nearest_recursive<'a>(&'a self, node: &'a KdNode, depth: usize, query: &Point, best: &mut Option<Nearest<'a>>) {
        let axis = depth % self.dimensions;
        let diff = query.coord(axis) - node.location.coord(axis);

        // Descend toward the query's side first.
        let (near, far) = if diff < 0.0 && node.left.is_some() {
            (node.left(), node.right())
        } else {
            (node.right(), node.left())
        };

        if let Some(child) = near {
            self.nearest_recursive(child, depth + 1, query, best);
        }

        let d2 = node.location.squared_distance(query);
        if best.is_none_or(|b| d2 < b.distance_squared) {
            *best = Some(Nearest { distance_squared: d2, point: &node.location });
        }

        // The far side can only help if the best sphere crosses the splitting plane.
        if let Some(child) = far {
            if best.is_some_and(|b| diff * diff < b.distance_squared) {
                self.nearest_recursive(child, depth + 1, query, best);
            }
        }
    }
}

impl TryFrom<Vec<Point>> for KdTree {
    type Error = KdTreeError;

    fn try_from(points: Vec<Point>) -> Result<Self> {
        Self::build(points)
    }
}

impl<'a> IntoIterator for &'a KdTree {
    type Item = &'a Point;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}

/// Pre-order iterator over the points of a [`KdTree`].
pub struct Iter<'a> {
    stack: Vec<&'a KdNode>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Point;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        if let Some(right) = node.right() {
            self.stack.push(right);
        }
        if let Some(left) = node.left() {
            self.stack.push(left);
        }
        Some(&node.location)
    }
}

fn validate(points: &[Point], dimensions: usize) -> Result<()> {
    if dimensions == 0 {
        return Err(KdTreeError::ZeroDimensional);
    }
    for p in points {
        p.check_dimensions(dimensions)?;
        p.check_not_nan()?;
    }
    Ok(())
}

fn build_recursive(mut points: Vec<Point>, depth: usize, dimensions: usize) -> Option<Box<KdNode>> {
    if points.is_empty() {
        return None;
    }

    let axis = depth % dimensions;
    let mid = points.len() / 2;

    // Median split: everything before `mid` is <= the median on `axis`, everything after is >=.
    points.select_nth_unstable_by(mid, |a, b| compare_axis(a, b, axis));

    let right = points.split_off(mid + 1);
    let location = points.pop()?;

    Some(Box::new(KdNode {
        location,
        left: build_recursive(points, depth + 1, dimensions),
        right: build_recursive(right, depth + 1, dimensions),
    }))
}

fn compare_axis(a: &Point, b: &Point, axis: usize) -> Ordering {
    a.coord(axis).total_cmp(&b.coord(axis))
}
