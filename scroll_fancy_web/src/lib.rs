// Copyright 2026 the Scroll Fancy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Browser binding for `scroll_fancy_core`.
//!
//! This crate connects the reveal and parallax engines to a live page:
//!
//! - [`DomPage`]: the [`Page`](scroll_fancy_core::Page) gateway over `web-sys`
//! - [`FrameScheduler`]: coalescing `requestAnimationFrame` callbacks
//! - [`Interval`] and [`EventListener`]: timer and listener handles that
//!   detach on drop
//! - [`ScrollToFancy`]: the class exported to script, with explicit
//!   `start`/`stop`
//!
//! From script:
//!
//! ```js
//! import init, { ScrollToFancy } from "./scroll_fancy_web.js";
//! await init();
//! const fancy = new ScrollToFancy({ parallaxMinWidth: 1024, scrollToRevealOffset: 200 });
//! fancy.start();
//! // later, e.g. when the hosting component unmounts
//! fancy.stop();
//! ```
//!
//! # Crate features
//!
//! - `console` (enabled by default): [`init_logging`] routes `log` output to
//!   the browser console and installs a panic hook.

// This crate only does real work in the browser; suppress dead-code warnings
// when cargo-checking on a native host target.
#![cfg_attr(
    not(target_arch = "wasm32"),
    allow(dead_code, reason = "this crate only runs in the browser")
)]

mod dom;
mod error;
mod listener;
mod options;
mod raf;
mod runtime;
mod timer;

pub use dom::DomPage;
pub use error::{Error, Result};
pub use listener::EventListener;
pub use options::config_from_js;
pub use raf::FrameScheduler;
pub use timer::Interval;

use log::debug;
use scroll_fancy_core::Config;
use wasm_bindgen::prelude::*;

use crate::runtime::Runtime;

/// Scroll-to-reveal and parallax for the current page.
///
/// Construction only reads options. [`start`](Self::start) attaches to the
/// page; [`stop`](Self::stop) (or dropping the handle) detaches again.
#[wasm_bindgen]
#[derive(Debug)]
pub struct ScrollToFancy {
    config: Config,
    runtime: Option<Runtime>,
}

#[wasm_bindgen]
impl ScrollToFancy {
    /// Creates a stopped instance from a script options object.
    ///
    /// Unknown keys and values of the wrong type are ignored.
    #[wasm_bindgen(constructor)]
    #[must_use]
    pub fn new(options: JsValue) -> Self {
        Self::with_config(config_from_js(&options))
    }

    /// Starts the tracker and the enabled engines. No-op while running.
    pub fn start(&mut self) -> core::result::Result<(), JsValue> {
        if self.runtime.is_some() {
            return Ok(());
        }
        self.runtime = Some(Runtime::start(&self.config)?);
        debug!("scroll_fancy: started with {:?}", self.config);
        Ok(())
    }

    /// Detaches every listener, clears every timer and cancels pending
    /// frames. Revealed elements and parallax shifts stay as they are;
    /// elements still waiting to reveal lose their hide class so a later
    /// [`start`](Self::start) selects them again.
    pub fn stop(&mut self) {
        if self.runtime.take().is_some() {
            debug!("scroll_fancy: stopped");
        }
    }

    /// Re-runs element discovery and width gating, e.g. after the layout
    /// crossed a minimum width. Elements are not re-selected.
    pub fn rediscover(&self) {
        if let Some(runtime) = &self.runtime {
            runtime.rediscover();
        }
    }

    /// Whether [`start`](Self::start) has run without a matching `stop`.
    #[wasm_bindgen(getter, js_name = isRunning)]
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.runtime.is_some()
    }

    /// The scroll distance the engines currently see, or 0 when stopped.
    #[wasm_bindgen(getter, js_name = scrollDistance)]
    #[must_use]
    pub fn scroll_distance(&self) -> f64 {
        self.runtime.as_ref().map_or(0.0, Runtime::scroll_distance)
    }
}

impl ScrollToFancy {
    /// Creates a stopped instance from a ready-made configuration.
    #[must_use]
    pub fn with_config(config: Config) -> Self {
        Self {
            config,
            runtime: None,
        }
    }

    /// The configuration this instance runs with.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }
}

/// Creates and starts an instance in one call.
#[wasm_bindgen(js_name = scrollToFancy)]
pub fn scroll_to_fancy(options: JsValue) -> core::result::Result<ScrollToFancy, JsValue> {
    let mut fancy = ScrollToFancy::new(options);
    fancy.start()?;
    Ok(fancy)
}

/// Routes `log` records to the browser console and installs a panic hook.
///
/// Safe to call more than once.
#[cfg(feature = "console")]
#[wasm_bindgen(js_name = initLogging)]
pub fn init_logging() {
    console_error_panic_hook::set_once();
    if log::max_level() == log::LevelFilter::Off {
        wasm_logger::init(wasm_logger::Config::new(log::Level::Debug));
    }
}
