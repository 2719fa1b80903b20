//! JavaScript access to the segmenter.
//!
//! Highlights go in as `{startIndex, numChars}` objects and segments come out
//! as `{start, end, highlights}` objects, matching the JSON field names. Both
//! count UTF-16 code units, like JavaScript string indices.

use js_sys::{Array, Object, Reflect};
use wasm_bindgen::prelude::*;

use highlighter_core::{segment, Highlight, Segment, Utf16Map};

fn number_field(obj: &JsValue, name: &str) -> Result<i64, JsValue> {
    Reflect::get(obj, &JsValue::from_str(name))?
        .as_f64()
        .map(|n| n as i64)
        .ok_or_else(|| JsValue::from_str(&format!("highlight.{} must be a number", name)))
}

fn highlight_from_js(value: &JsValue) -> Result<Highlight, JsValue> {
    Ok(Highlight::new(
        number_field(value, "startIndex")?,
        number_field(value, "numChars")?,
    ))
}

fn segment_to_js(segment: &Segment) -> Result<JsValue, JsValue> {
    let obj = Object::new();
    Reflect::set(&obj, &"start".into(), &JsValue::from(segment.start as f64))?;
    Reflect::set(&obj, &"end".into(), &JsValue::from(segment.end as f64))?;
    let highlights: Array = segment
        .highlights
        .iter()
        .map(|&i| JsValue::from(i as f64))
        .collect();
    Reflect::set(&obj, &"highlights".into(), &highlights)?;
    Ok(obj.into())
}

/// Segment `text` with highlights and results in UTF-16 units.
fn segment_utf16(text: &str, highlights: &[Highlight]) -> Vec<Segment> {
    let map = Utf16Map::new(text);
    let highlights: Vec<Highlight> = highlights
        .iter()
        .map(|&h| map.highlight_from_utf16(h))
        .collect();
    segment(text, &highlights)
        .iter()
        .map(|s| map.segment_to_utf16(s))
        .collect()
}

/// Split `text` into segments of uniform highlight membership.
#[wasm_bindgen(js_name = segmentText)]
pub fn segment_text(text: &str, highlights: &Array) -> Result<Array, JsValue> {
    let highlights = highlights
        .iter()
        .map(|h| highlight_from_js(&h))
        .collect::<Result<Vec<_>, _>>()?;

    segment_utf16(text, &highlights)
        .iter()
        .map(segment_to_js)
        .collect::<Result<Array, _>>()
}
