//! JS delegate implementation of the engine seam
//!
//! Wraps the engine object the host passes at construction and calls
//! its camelCase methods reflectively. A missing method degrades to a
//! no-op with a logged warning so a partial delegate stays usable.

use js_sys::{Array, Function, Object, Reflect};
use wasm_bindgen::prelude::*;

use super::{EditSource, EngineRange, TextEngine};
use crate::{wasm_log, wasm_warn};

/// Text engine backed by a JS delegate object
pub struct JsTextEngine {
    delegate: Object,
}

impl JsTextEngine {
    pub fn new(delegate: JsValue) -> Self {
        let delegate: Object = delegate.unchecked_into();
        Self { delegate }
    }

    fn method(&self, name: &str) -> Option<Function> {
        let value = Reflect::get(&self.delegate, &JsValue::from_str(name)).ok()?;
        value.dyn_into::<Function>().ok()
    }

    fn call(&self, name: &str, args: &Array) -> Option<JsValue> {
        match self.method(name) {
            Some(function) => match function.apply(&self.delegate, args) {
                Ok(result) => Some(result),
                Err(e) => {
                    wasm_warn!("engine delegate '{}' threw: {:?}", name, e);
                    None
                }
            },
            None => {
                wasm_warn!("engine delegate has no '{}' method, skipping", name);
                None
            }
        }
    }
}

impl TextEngine for JsTextEngine {
    fn selection(&self) -> Option<EngineRange> {
        let result = self.call("getSelection", &Array::new())?;
        if result.is_null() || result.is_undefined() {
            return None;
        }
        match serde_wasm_bindgen::from_value(result) {
            Ok(range) => Some(range),
            Err(e) => {
                wasm_warn!("engine getSelection returned an unreadable range: {}", e);
                None
            }
        }
    }

    fn insert_embed(&mut self, index: usize, embed_type: &str, value: serde_json::Value, source: EditSource) {
        let js_value = match serde_wasm_bindgen::to_value(&value) {
            Ok(v) => v,
            Err(e) => {
                wasm_warn!("embed value serialization failed: {}", e);
                return;
            }
        };
        let args = Array::new();
        args.push(&JsValue::from_f64(index as f64));
        args.push(&JsValue::from_str(embed_type));
        args.push(&js_value);
        args.push(&JsValue::from_str(source.as_str()));
        wasm_log!("insertEmbed '{}' at index {}", embed_type, index);
        self.call("insertEmbed", &args);
    }

    fn insert_text(&mut self, index: usize, text: &str, source: EditSource) {
        let args = Array::new();
        args.push(&JsValue::from_f64(index as f64));
        args.push(&JsValue::from_str(text));
        args.push(&JsValue::from_str(source.as_str()));
        self.call("insertText", &args);
    }

    fn delete_text(&mut self, index: usize, length: usize, source: EditSource) {
        let args = Array::new();
        args.push(&JsValue::from_f64(index as f64));
        args.push(&JsValue::from_f64(length as f64));
        args.push(&JsValue::from_str(source.as_str()));
        self.call("deleteText", &args);
    }

    fn format_text(
        &mut self,
        index: usize,
        length: usize,
        format: &str,
        value: serde_json::Value,
        source: EditSource,
    ) {
        let js_value = match serde_wasm_bindgen::to_value(&value) {
            Ok(v) => v,
            Err(e) => {
                wasm_warn!("format value serialization failed: {}", e);
                return;
            }
        };
        let args = Array::new();
        args.push(&JsValue::from_f64(index as f64));
        args.push(&JsValue::from_f64(length as f64));
        args.push(&JsValue::from_str(format));
        args.push(&js_value);
        args.push(&JsValue::from_str(source.as_str()));
        self.call("formatText", &args);
    }

    fn set_selection(&mut self, index: usize, length: usize) {
        let args = Array::new();
        args.push(&JsValue::from_f64(index as f64));
        args.push(&JsValue::from_f64(length as f64));
        self.call("setSelection", &args);
    }

    fn embed_index(&self, embed_type: &str, embed_id: u32) -> Option<usize> {
        let args = Array::new();
        args.push(&JsValue::from_str(embed_type));
        args.push(&JsValue::from_f64(embed_id as f64));
        let result = self.call("embedIndex", &args)?;
        // Delegates signal a missing embed with null or a negative index
        result.as_f64().filter(|v| *v >= 0.0).map(|v| v as usize)
    }
}
