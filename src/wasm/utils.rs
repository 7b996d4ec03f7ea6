use js_sys::Array;
use wasm_bindgen::prelude::*;

use crate::error::KdTreeError;
use crate::point::Point;

pub fn parse_js_point(val: &JsValue) -> Option<Point> {
    let arr = val.dyn_ref::<Array>()?;
    let mut coords = Vec::with_capacity(arr.length() as usize);
    for i in 0..arr.length() {
        coords.push(arr.get(i).as_f64()?);
    }
    Some(Point::new(coords))
}

pub fn to_js_error(err: KdTreeError) -> JsValue {
    JsValue::from_str(&err.to_string())
}
