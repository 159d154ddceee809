//! WASM bindings for the `bitfield-array` packer.
//!
//! JavaScript peers build the same layout as the Rust side from a JSON
//! [`LayoutDef`], fill in field values, and exchange the packed bytes.
//!
//! ```text
//! // const array = new WasmBitFieldArray(JSON.stringify({ fields: [3, 7, 8, 9] }));
//! // array.assign([5, 6, 7, 8]);
//! // const bytes = array.exportBytes("little");   // Uint8Array
//! //
//! // const received = new WasmBitFieldArray(JSON.stringify({ fields: [3, 7, 8, 9] }));
//! // received.fromBytes(bytes, "little");
//! // received.toList();                            // [5, 6, 7, 8]
//! ```
//!
//! Errors are returned to JavaScript as strings built from the Rust `Display` output.

mod convert;

use bitfield_array::{BitFieldArray, ByteOrder, serde::LayoutDef};
use wasm_bindgen::prelude::*;

/// Bit field array usable from JavaScript.
#[wasm_bindgen]
pub struct WasmBitFieldArray {
    array: BitFieldArray,
    /// Order used when a method is called without one.
    byte_order: ByteOrder,
}

#[wasm_bindgen]
impl WasmBitFieldArray {
    /// Creates an array from a JSON layout (`fields`, optional `values` and `byte_order`).
    #[wasm_bindgen(constructor)]
    pub fn new(layout_json: &str) -> Result<WasmBitFieldArray, JsValue> {
        let def: LayoutDef = serde_json::from_str(layout_json).map_err(convert::error_to_js)?;
        let byte_order = ByteOrder::from(def.byte_order);
        let array = BitFieldArray::try_from(def).map_err(convert::error_to_js)?;

        Ok(WasmBitFieldArray { array, byte_order })
    }

    /// Assigns a number to the first empty field, or an array of numbers to successive empty fields.
    pub fn assign(&mut self, value: JsValue) -> Result<(), JsValue> {
        let input = convert::assign_from_js(value)?;
        self.array.assign(input);
        Ok(())
    }

    pub fn delete(&mut self, index: usize) -> Result<(), JsValue> {
        self.array.delete(index).map_err(convert::error_to_js)?;
        Ok(())
    }

    #[wasm_bindgen(js_name = exportBytes)]
    pub fn export_bytes(&self, order: Option<String>) -> Result<Vec<u8>, JsValue> {
        let order = convert::byte_order_from_js(order, self.byte_order)?;
        Ok(self.array.export_as_bytes(order))
    }

    /// Packed value as a `0x`-prefixed hex string, for values too wide for a JS number.
    #[wasm_bindgen(js_name = exportHex)]
    pub fn export_hex(&self) -> String {
        format!("{:#x}", self.array.export())
    }

    #[wasm_bindgen(js_name = toList)]
    pub fn to_list(&self) -> Result<JsValue, JsValue> {
        convert::list_to_js(self.array.to_list())
    }

    #[wasm_bindgen(js_name = fromBytes)]
    pub fn from_bytes(&mut self, data: &[u8], order: Option<String>) -> Result<(), JsValue> {
        let order = convert::byte_order_from_js(order, self.byte_order)?;
        self.array.from_bytes(data, order);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.array.len()
    }

    #[wasm_bindgen(js_name = isEmpty)]
    pub fn is_empty(&self) -> bool {
        self.array.is_empty()
    }

    #[wasm_bindgen(js_name = toString)]
    pub fn to_string_js(&self) -> String {
        self.array.to_string()
    }
}
