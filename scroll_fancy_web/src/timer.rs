// Copyright 2026 the Scroll Fancy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Repeating `setInterval` timer owned by a handle.

use wasm_bindgen::JsCast as _;
use wasm_bindgen::closure::Closure;
use web_sys::Window;

use crate::error::{Error, Result};

/// A running `setInterval` timer, cleared on drop.
pub struct Interval {
    window: Window,
    handle: i32,
    timeout_ms: i32,
    _closure: Closure<dyn FnMut()>,
}

impl Interval {
    /// Starts calling `callback` every `timeout_ms` milliseconds.
    pub fn new(window: &Window, timeout_ms: i32, callback: impl FnMut() + 'static) -> Result<Self> {
        let closure = Closure::wrap(Box::new(callback) as Box<dyn FnMut()>);
        let handle = window
            .set_interval_with_callback_and_timeout_and_arguments_0(
                closure.as_ref().unchecked_ref(),
                timeout_ms,
            )
            .map_err(|e| Error::js("setInterval", &e))?;
        Ok(Self {
            window: window.clone(),
            handle,
            timeout_ms,
            _closure: closure,
        })
    }

    /// The period the timer was started with.
    #[must_use]
    pub fn timeout_ms(&self) -> i32 {
        self.timeout_ms
    }
}

impl Drop for Interval {
    fn drop(&mut self) {
        self.window.clear_interval_with_handle(self.handle);
    }
}

impl core::fmt::Debug for Interval {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Interval")
            .field("handle", &self.handle)
            .field("timeout_ms", &self.timeout_ms)
            .finish_non_exhaustive()
    }
}
