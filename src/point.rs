use std::fmt;

use crate::error::{KdTreeError, Result};

/// An immutable point with `k` coordinates.
///
/// Equality and ordering are component-wise, comparing coordinates in axis order.
#[derive(Clone, Debug, PartialEq, PartialOrd)]
pub struct Point {
    coords: Vec<f64>,
}

impl Point {
    pub fn new(coords: impl Into<Vec<f64>>) -> Self {
        Self { coords: coords.into() }
    }

    /// Shorthand for a two-dimensional point.
    pub fn xy(x: f64, y: f64) -> Self {
        Self { coords: vec![x, y] }
    }

    /// Number of coordinates.
    pub fn dimensions(&self) -> usize {
        self.coords.len()
    }

    /// Coordinate along `axis`. Panics if `axis >= self.dimensions()`.
    pub fn coord(&self, axis: usize) -> f64 {
        self.coords[axis]
    }

    pub fn coords(&self) -> &[f64] {
        &self.coords
    }

    pub fn x(&self) -> f64 {
        self.coords[0]
    }

    pub fn y(&self) -> f64 {
        self.coords[1]
    }

    /// Squared Euclidean distance, summed over the shared axes.
    pub fn squared_distance(&self, other: &Point) -> f64 {
        self.coords
            .iter()
            .zip(&other.coords)
            .map(|(a, b)| (a - b) * (a - b))
            .sum()
    }

    /// Fails with `DimensionalityMismatch` unless the point has exactly `expected` coordinates.
    pub(crate) fn check_dimensions(&self, expected: usize) -> Result<()> {
        if self.coords.len() != expected {
            return Err(KdTreeError::DimensionalityMismatch {
                expected,
                found: self.coords.len(),
            });
        }
        Ok(())
    }

    /// Fails with `NanCoordinate` on the first NaN axis.
    pub(crate) fn check_not_nan(&self) -> Result<()> {
        match self.coords.iter().position(|c| c.is_nan()) {
            Some(axis) => Err(KdTreeError::NanCoordinate { axis }),
            None => Ok(()),
        }
    }
}

impl<const N: usize> From<[f64; N]> for Point {
    fn from(coords: [f64; N]) -> Self {
        Self::new(coords.to_vec())
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::xy(x, y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Point(")?;
        for (i, c) in self.coords.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{:?}", c)?;
        }
        write!(f, ")")
    }
}
