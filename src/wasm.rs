mod utils;

use crate::bounds::Rectangle;
use crate::kdtree::KdTree;
use crate::point::Point;
use js_sys::Array;
use utils::{parse_js_point, to_js_error};
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen_rayon::init_thread_pool;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn init_threads(n: usize) -> js_sys::Promise {
    init_thread_pool(n)
}

// --- Rectangle ---

/// An axis-aligned query rectangle in 2D space.
#[wasm_bindgen]
#[derive(Clone, Copy, Debug)]
pub struct Rectangle2D {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

#[wasm_bindgen]
impl Rectangle2D {
    #[wasm_bindgen(constructor)]
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Rectangle2D {
        Rectangle2D { min_x, min_y, max_x, max_y }
    }
}

impl TryFrom<Rectangle2D> for Rectangle {
    type Error = JsValue;

    fn try_from(r: Rectangle2D) -> Result<Self, JsValue> {
        Rectangle::new(Point::xy(r.min_x, r.min_y), Point::xy(r.max_x, r.max_y)).map_err(to_js_error)
    }
}

// --- Tree ---

/// A 2D k-d tree exposed to JavaScript.
#[wasm_bindgen(js_name = KdTree2D)]
pub struct KdTree2D {
    inner: KdTree,
}

#[wasm_bindgen(js_class = KdTree2D)]
impl KdTree2D {
    /// Builds the tree from a flat `[x0, y0, x1, y1, ...]` buffer.
    #[wasm_bindgen(constructor)]
    pub fn new(points: &[f64]) -> Result<KdTree2D, JsValue> {
        if points.len() % 2 != 0 {
            return Err(JsValue::from_str("Point buffer must hold an even number of coordinates"));
        }
        let points = points.chunks_exact(2).map(|c| Point::xy(c[0], c[1])).collect();
        let inner = KdTree::build(points).map_err(to_js_error)?;
        Ok(KdTree2D { inner })
    }

    /// Builds the tree from an array of `[x, y]` arrays.
    #[wasm_bindgen(js_name = fromPoints)]
    pub fn from_points(val: JsValue) -> Result<KdTree2D, JsValue> {
        let arr = val
            .dyn_ref::<Array>()
            .ok_or_else(|| JsValue::from_str("Expected an array of points"))?;
        let mut points = Vec::with_capacity(arr.length() as usize);
        for i in 0..arr.length() {
            let p = parse_js_point(&arr.get(i))
                .ok_or_else(|| JsValue::from_str(&format!("Point {} is not an array of numbers", i)))?;
            p.check_dimensions(2).map_err(to_js_error)?;
            points.push(p);
        }
        let inner = KdTree::build(points).map_err(to_js_error)?;
        Ok(KdTree2D { inner })
    }

    #[wasm_bindgen(getter)]
    pub fn len(&self) -> usize { self.inner.len() }
    #[wasm_bindgen(getter)]
    pub fn height(&self) -> usize { self.inner.height() }
    #[wasm_bindgen(getter)]
    pub fn points(&self) -> Vec<f64> { flatten(self.inner.iter()) }

    /// Coordinates of all points inside `rect`, flattened to `[x0, y0, x1, y1, ...]`.
    pub fn range(&self, rect: Rectangle2D) -> Result<Vec<f64>, JsValue> {
        let rect = Rectangle::try_from(rect)?;
        let hits = self.inner.range_query(&rect).map_err(to_js_error)?;
        Ok(flatten(hits))
    }

    /// `[distance_squared, x, y]` of the closest point, or `undefined` for an empty tree.
    pub fn nearest(&self, x: f64, y: f64) -> Result<Option<Vec<f64>>, JsValue> {
        let found = self.inner.nearest_neighbor(&Point::xy(x, y)).map_err(to_js_error)?;
        Ok(found.map(|n| vec![n.distance_squared, n.point.x(), n.point.y()]))
    }
}

fn flatten<'a>(points: impl IntoIterator<Item = &'a Point>) -> Vec<f64> {
    points.into_iter().flat_map(|p| p.coords().iter().copied()).collect()
}
