use std::fmt::Display;

use bitfield_array::{Assign, ByteOrder};
use wasm_bindgen::JsValue;

pub fn error_to_js<E: Display>(err: E) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Accepts a non-negative integer or an array of them.
pub fn assign_from_js(value: JsValue) -> Result<Assign, JsValue> {
    if value.is_object() {
        let values: Vec<u64> = serde_wasm_bindgen::from_value(value).map_err(error_to_js)?;
        return Ok(Assign::Many(values));
    }

    match value.as_f64() {
        Some(n) if n >= 0.0 && n.fract() == 0.0 && n <= MAX_SAFE_INTEGER => {
            Ok(Assign::One(n as u64))
        }
        _ => Err(JsValue::from_str(
            "expected a non-negative integer or an array of them",
        )),
    }
}

/// Parses an optional byte order name, falling back to `default`.
pub fn byte_order_from_js(order: Option<String>, default: ByteOrder) -> Result<ByteOrder, JsValue> {
    match order {
        Some(name) => name.parse::<ByteOrder>().map_err(error_to_js),
        None => Ok(default),
    }
}

/// Field values as a JS array; empty fields become `null`.
pub fn list_to_js(list: Vec<Option<u64>>) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(&list).map_err(error_to_js)
}

const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;
