// Copyright 2026 the Scroll Fancy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host-environment failures.
//!
//! The effects themselves never fail; malformed markup degrades silently.
//! What can fail is wiring them into the browser: a missing global `window`,
//! a document without a body, or a DOM call that throws.

use wasm_bindgen::JsValue;

/// Result alias for fallible browser wiring.
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Failure to attach to the browser environment.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// No global `window` (not running in a browser main thread).
    #[error("no global window")]
    NoWindow,

    /// The window has no document.
    #[error("window has no document")]
    NoDocument,

    /// The document has no `<body>` yet.
    #[error("document has no body")]
    NoBody,

    /// The document has no root element.
    #[error("document has no root element")]
    NoRootElement,

    /// A DOM call threw.
    #[error("DOM call `{call}` failed: {message}")]
    Js {
        /// Name of the failing call.
        call: &'static str,
        /// Stringified exception.
        message: String,
    },
}

impl Error {
    /// Wraps a thrown JS value.
    pub fn js(call: &'static str, value: &JsValue) -> Self {
        let message = value
            .as_string()
            .unwrap_or_else(|| format!("{value:?}"));
        Self::Js { call, message }
    }
}

impl From<Error> for JsValue {
    fn from(err: Error) -> Self {
        js_sys::Error::new(&err.to_string()).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_missing_piece() {
        assert_eq!(Error::NoWindow.to_string(), "no global window", "window");
        assert_eq!(Error::NoBody.to_string(), "document has no body", "body");
        let err = Error::Js {
            call: "setInterval",
            message: String::from("boom"),
        };
        assert_eq!(
            err.to_string(),
            "DOM call `setInterval` failed: boom",
            "js failure names the call"
        );
    }
}
