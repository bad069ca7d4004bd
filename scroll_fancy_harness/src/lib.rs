// Copyright 2026 the Scroll Fancy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! In-memory page and stepped event loop for `scroll_fancy_core`.
//!
//! [`FakePage`] implements [`Page`](scroll_fancy_core::Page) over plain data,
//! and [`Stage`] drives the tracker and both engines through scroll, resize,
//! frame and timer steps without a browser.
//!
//! ```
//! use scroll_fancy_core::Config;
//! use scroll_fancy_harness::{FakePage, Stage};
//!
//! let page = FakePage::new(1280.0, 800.0);
//! let card = page.add_element(1400.0, 300.0, &[("data-reveal", "fade-in")]);
//! let mut stage = Stage::start(page, &Config::DEFAULT);
//!
//! assert!(!stage.page().element_has_class(card, "fade-in"));
//! stage.scroll_and_render(900.0);
//! assert!(stage.page().element_has_class(card, "fade-in"));
//! ```

mod page;
mod stage;

pub use page::{ElementId, FakePage};
pub use stage::{FrameReport, Stage};
