use rayon::prelude::*;
use tracing::debug;

use crate::bounds::Rectangle;
use crate::error::Result;
use crate::kdtree::{KdTree, Nearest};
use crate::point::Point;

impl KdTree {
    /// Runs one range query per rectangle on the rayon pool.
    ///
    /// Results are returned in input order. Any invalid query fails the batch.
    pub fn par_range_queries(&self, rectangles: &[Rectangle]) -> Result<Vec<Vec<&Point>>> {
        debug!(queries = rectangles.len(), "Parallel range queries");
        rectangles
            .par_iter()
            .map(|rectangle| self.range_query(rectangle))
            .collect()
    }

    /// Runs one nearest-neighbor search per query point on the rayon pool.
    pub fn par_nearest_neighbors(&self, queries: &[Point]) -> Result<Vec<Option<Nearest<'_>>>> {
        debug!(queries = queries.len(), "Parallel nearest-neighbor queries");
        queries
            .par_iter()
            .map(|query| self.nearest_neighbor(query))
            .collect()
    }
}
