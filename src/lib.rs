//! # kdsplit
//!
//! `kdsplit` is a Rust library for static k-d trees, designed to be used in Rust
//! as well as compiled to WebAssembly (WASM). A tree is built once from a fixed point
//! set and then answers rectangle range queries and nearest-neighbor lookups faster
//! than a linear scan.
//!
//! ## Features
//!
//! - **Median construction**: Recursive median partitioning, cycling the splitting axis with depth, gives a balanced tree.
//! - **Range queries**: Subtrees are pruned as soon as the splitting axis proves they miss the query rectangle.
//! - **Nearest neighbor**: Branch-and-bound search that only crosses a splitting plane when a closer point may lie beyond it.
//! - **Parallel batches**: The tree is immutable, so batches of queries run on the rayon pool without locking.
//! - **WASM-first**: Built with `wasm-bindgen` for use from JavaScript and TypeScript.
//!
//! ## Example
//!
//! ```
//! use kdsplit::{KdTree, Point, Rectangle};
//!
//! let points = vec![
//!     Point::xy(7.0, 2.0), Point::xy(5.0, 4.0), Point::xy(9.0, 6.0),
//!     Point::xy(4.0, 7.0), Point::xy(8.0, 1.0), Point::xy(2.0, 3.0),
//! ];
//! let tree = KdTree::build(points).unwrap();
//!
//! let rect = Rectangle::new(Point::xy(0.0, 0.0), Point::xy(6.0, 6.0)).unwrap();
//! assert_eq!(tree.range_query(&rect).unwrap().len(), 2);
//!
//! let nearest = tree.nearest_neighbor(&Point::xy(44.5, 68.7)).unwrap().unwrap();
//! assert_eq!(nearest.point, &Point::xy(9.0, 6.0));
//! ```
//!
//! ## Main Interface
//!
//! The primary entry point is the [`KdTree`] struct. The [`naive`] module holds the
//! brute-force scans used as a baseline.

mod bounds;
mod error;
mod kdtree;
pub mod naive;
mod parallel;
mod point;
mod wasm;

pub use bounds::Rectangle;
pub use error::KdTreeError;
pub use error::Result;
pub use kdtree::Iter;
pub use kdtree::KdNode;
pub use kdtree::KdTree;
pub use kdtree::Nearest;
pub use point::Point;
pub use wasm::KdTree2D;
pub use wasm::Rectangle2D;
