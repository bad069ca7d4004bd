// Copyright 2026 the Scroll Fancy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Decoding the options object passed from script.

use js_sys::Reflect;
use scroll_fancy_core::config::OPTION_KEYS;
use scroll_fancy_core::{Config, OptionValue};
use wasm_bindgen::JsValue;

/// Classifies a JS value by its `typeof`.
fn option_value(value: &JsValue) -> OptionValue {
    if let Some(b) = value.as_bool() {
        OptionValue::Bool(b)
    } else if let Some(n) = value.as_f64() {
        OptionValue::Number(n)
    } else {
        OptionValue::Other
    }
}

/// Builds a [`Config`] from a script options object.
///
/// Keys are looked up with `in` semantics, so inherited properties count.
/// Anything that is not an object (including `undefined`) yields the
/// defaults.
#[must_use]
pub fn config_from_js(options: &JsValue) -> Config {
    if !options.is_object() {
        return Config::DEFAULT;
    }
    let mut config = Config::DEFAULT;
    for key in OPTION_KEYS {
        let key_value = JsValue::from_str(key);
        if !Reflect::has(options, &key_value).unwrap_or(false) {
            continue;
        }
        if let Ok(value) = Reflect::get(options, &key_value) {
            config.apply(key, option_value(&value));
        }
    }
    config
}
