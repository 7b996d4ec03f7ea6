use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::error::{KdTreeError, Result};
use crate::point::Point;

/// Axis-aligned box spanned by a `lower` and an `upper` corner.
///
/// Construction guarantees both corners share a dimensionality, contain no NaN
/// and satisfy `lower[i] <= upper[i]` on every axis.
#[derive(Clone, Debug, PartialEq)]
pub struct Rectangle {
    lower: Point,
    upper: Point,
}

impl Rectangle {
    pub fn new(lower: Point, upper: Point) -> Result<Self> {
        upper.check_dimensions(lower.dimensions())?;
        lower.check_not_nan()?;
        upper.check_not_nan()?;

        for axis in 0..lower.dimensions() {
            let (lo, hi) = (lower.coord(axis), upper.coord(axis));
            if lo > hi {
                return Err(KdTreeError::MalformedRectangle { axis, lower: lo, upper: hi });
            }
        }

        Ok(Self { lower, upper })
    }

    pub fn lower(&self) -> &Point {
        &self.lower
    }

    pub fn upper(&self) -> &Point {
        &self.upper
    }

    pub fn dimensions(&self) -> usize {
        self.lower.dimensions()
    }

    /// Inclusive bounds on a single axis.
    pub fn interval(&self, axis: usize) -> (f64, f64) {
        (self.lower.coord(axis), self.upper.coord(axis))
    }

    /// True if `p` lies inside the box on every axis, boundaries included.
    /// Points of another dimensionality are never contained.
    pub fn contains(&self, p: &Point) -> bool {
        p.dimensions() == self.dimensions()
            && (0..self.dimensions()).all(|axis| {
                let (lo, hi) = self.interval(axis);
                lo <= p.coord(axis) && p.coord(axis) <= hi
            })
    }

    /// Uniformly samples a point inside the box.
    pub fn random_point<R: Rng + ?Sized>(&self, rng: &mut R) -> Point {
        let coords: Vec<f64> = (0..self.dimensions())
            .map(|axis| {
                let (lo, hi) = self.interval(axis);
                lo + rng.r#gen::<f64>() * (hi - lo)
            })
            .collect();
        Point::new(coords)
    }

    /// Samples `count` points inside the box.
    pub fn random_points(&self, count: usize) -> Vec<Point> {
        let mut rng = StdRng::seed_from_u64(get_seed());
        (0..count).map(|_| self.random_point(&mut rng)).collect()
    }
}

fn get_seed() -> u64 {
    #[cfg(target_arch = "wasm32")]
    {
        (js_sys::Math::random() * 4294967296.0) as u64
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        123456789 // Fixed seed for tests
    }
}
