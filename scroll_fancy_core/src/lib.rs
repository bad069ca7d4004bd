// Copyright 2026 the Scroll Fancy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scroll-driven reveal and parallax engines.
//!
//! `scroll_fancy_core` holds everything about the two page effects that does
//! not need a browser: configuration, the shared scroll/document tracker,
//! per-element trigger bookkeeping and the per-frame decisions. It is
//! `no_std` compatible (with `alloc`). All reads and writes of the live page
//! go through the [`Page`](page::Page) trait, so the engines can be driven by
//! the web backend or by an in-memory fake.
//!
//! # Architecture
//!
//! ```text
//!   scroll event ──► FrameRequest ──► Tracker::refresh_scroll()
//!   300 ms poll  ─────────────────► Tracker::refresh_document_height()
//!                                          │ (shared, read-only to engines)
//!                 ┌────────────────────────┴──────────────┐
//!                 ▼                                       ▼
//!   RevealEngine                                 ParallaxEngine
//!     discover()     once at start                 discover()
//!     render_frame() per coalesced frame           render_frame()
//!     recalculate()  per recalculation tick        recalculate()
//!                 │                                       │
//!                 └──────────────► Page ◄─────────────────┘
//! ```
//!
//! **[`config`]** — The six recognized options and their lenient merge.
//!
//! **[`tracker`]** — Shared scroll distance and document height.
//!
//! **[`page`]** — The host gateway trait plus offset measurement.
//!
//! **[`markup`]** — Attribute and class names, CSS value formatting.
//!
//! **[`parse`]** — Lenient numeric parsing for attribute values.
//!
//! **[`reveal`]** — One-shot reveal triggers.
//!
//! **[`parallax`]** — Continuous parallax triggers.
//!
//! **[`effect`]** — The [`ScrollEffect`](effect::ScrollEffect) trait both
//! engines implement, and the document-height watch behind recalculation.
//!
//! **[`frame`]** — Coalescing of bursts of events into one pass per frame.
//!
//! # Crate features
//!
//! - `std` (disabled by default): Builds against `std` and enables `std`
//!   support in dependencies.

#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

extern crate alloc;

pub mod config;
pub mod effect;
pub mod frame;
pub mod markup;
pub mod page;
pub mod parallax;
pub mod parse;
pub mod reveal;
pub mod tracker;

pub use config::{Config, OptionValue};
pub use effect::ScrollEffect;
pub use page::Page;
pub use parallax::ParallaxEngine;
pub use reveal::RevealEngine;
pub use tracker::Tracker;
