// Copyright 2026 the Scroll Fancy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Deterministic event loop around a [`FakePage`].
//!
//! [`Stage`] wires a tracker and the enabled engines the same way the web
//! runtime does, but events, frames and timers are stepped explicitly:
//!
//! - [`scroll_to`](Stage::scroll_to) and [`resize`](Stage::resize) fire the
//!   event and request frames, nothing more;
//! - [`run_frame`](Stage::run_frame) runs whatever frames are pending;
//! - [`advance`](Stage::advance) moves a virtual clock and fires the
//!   document-height poll and the recalculation timer as they come due;
//! - [`stop`](Stage::stop) and [`restart`](Stage::restart) tear down and
//!   rebuild the tracker and engines like the web `stop`/`start`.

use std::rc::Rc;

use log::debug;
use scroll_fancy_core::config::{DOCUMENT_POLL_INTERVAL_MS, timer_timeout_ms};
use scroll_fancy_core::frame::FrameRequest;
use scroll_fancy_core::{Config, ParallaxEngine, RevealEngine, ScrollEffect, Tracker};

use crate::page::{ElementId, FakePage};

/// Counts from one stepped frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameReport {
    /// Elements revealed this frame.
    pub revealed: usize,
    /// Parallax elements written this frame.
    pub shifted: usize,
}

/// A page, its tracker and the enabled engines under a virtual clock.
#[derive(Debug)]
pub struct Stage {
    page: FakePage,
    config: Config,
    running: bool,
    tracker: Rc<Tracker>,
    parallax: Option<ParallaxEngine<ElementId>>,
    reveal: Option<RevealEngine<ElementId>>,
    scroll_frame: FrameRequest,
    effect_frame: FrameRequest,
    now_ms: u64,
    poll_period_ms: u64,
    recalc_period_ms: u64,
    next_poll_ms: u64,
    next_recalc_ms: u64,
}

/// A zero-period timer still waits one step, as browser timers do.
fn period(timeout_ms: i32) -> u64 {
    u64::try_from(timeout_ms).unwrap_or(0).max(1)
}

type Engines = (
    Rc<Tracker>,
    Option<ParallaxEngine<ElementId>>,
    Option<RevealEngine<ElementId>>,
);

/// Builds the tracker and the enabled engines in web start-up order.
fn launch(page: &FakePage, config: &Config) -> Engines {
    let tracker = Rc::new(Tracker::measure(page));

    let parallax = config.parallax.then(|| {
        let mut engine = ParallaxEngine::new(page, Rc::clone(&tracker), config);
        engine.discover(page);
        engine.render_frame(page);
        engine
    });
    let reveal = config.reveal.then(|| {
        let mut engine = RevealEngine::new(page, Rc::clone(&tracker), config);
        engine.discover(page);
        engine.render_frame(page);
        engine
    });
    (tracker, parallax, reveal)
}

impl Stage {
    /// Starts the tracker, then parallax and reveal as enabled; each engine
    /// discovers and renders one frame immediately.
    #[must_use]
    pub fn start(page: FakePage, config: &Config) -> Self {
        let (tracker, parallax, reveal) = launch(&page, config);
        let poll_period_ms = period(DOCUMENT_POLL_INTERVAL_MS);
        let recalc_period_ms = period(timer_timeout_ms(config.recalc_interval_ms));
        Self {
            page,
            config: *config,
            running: true,
            tracker,
            parallax,
            reveal,
            scroll_frame: FrameRequest::new(),
            effect_frame: FrameRequest::new(),
            now_ms: 0,
            poll_period_ms,
            recalc_period_ms,
            next_poll_ms: poll_period_ms,
            next_recalc_ms: recalc_period_ms,
        }
    }

    /// Tears every engine down and detaches from events and timers, as the
    /// web `stop` does. No-op while stopped.
    pub fn stop(&mut self) {
        if !self.running {
            return;
        }
        self.running = false;
        self.scroll_frame.cancel();
        self.effect_frame.cancel();
        if let Some(mut engine) = self.parallax.take() {
            engine.teardown(&self.page);
        }
        if let Some(mut engine) = self.reveal.take() {
            engine.teardown(&self.page);
        }
        debug!("stage: stopped at {}ms", self.now_ms);
    }

    /// Starts a fresh tracker and fresh engines over the same page, as the
    /// web `start` does after `stop`. No-op while running.
    pub fn restart(&mut self) {
        if self.running {
            return;
        }
        let (tracker, parallax, reveal) = launch(&self.page, &self.config);
        self.tracker = tracker;
        self.parallax = parallax;
        self.reveal = reveal;
        self.running = true;
        self.next_poll_ms = self.now_ms + self.poll_period_ms;
        self.next_recalc_ms = self.now_ms + self.recalc_period_ms;
        debug!("stage: restarted at {}ms", self.now_ms);
    }

    /// Whether the stage is attached to events and timers.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// The page under test.
    #[must_use]
    pub fn page(&self) -> &FakePage {
        &self.page
    }

    /// The shared tracker.
    #[must_use]
    pub fn tracker(&self) -> &Tracker {
        &self.tracker
    }

    /// The reveal engine, if enabled.
    #[must_use]
    pub fn reveal(&self) -> Option<&RevealEngine<ElementId>> {
        self.reveal.as_ref()
    }

    /// The parallax engine, if enabled.
    #[must_use]
    pub fn parallax(&self) -> Option<&ParallaxEngine<ElementId>> {
        self.parallax.as_ref()
    }

    /// Virtual time since start, in milliseconds.
    #[must_use]
    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    /// Scrolls the page and fires `scroll`. Frames stay pending.
    pub fn scroll_to(&mut self, y: f64) {
        self.page.set_scroll(y);
        if !self.running {
            return;
        }
        let _ = self.scroll_frame.request();
        if self.has_effects() {
            let _ = self.effect_frame.request();
        }
    }

    /// Resizes the viewport and fires `resize`. Frames stay pending.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.page.set_viewport(width, height);
        if self.has_effects() {
            let _ = self.effect_frame.request();
        }
    }

    /// Runs the pending frame callbacks: the tracker's first, then each
    /// engine's, in the order they were registered.
    pub fn run_frame(&mut self) -> FrameReport {
        let mut report = FrameReport::default();
        if self.scroll_frame.is_pending() {
            self.scroll_frame.begin_frame();
            self.tracker.refresh_scroll(&self.page);
        }
        if self.effect_frame.is_pending() {
            self.effect_frame.begin_frame();
            if let Some(engine) = &mut self.parallax {
                report.shifted = engine.render_frame(&self.page);
            }
            if let Some(engine) = &mut self.reveal {
                report.revealed = engine.render_frame(&self.page);
            }
        }
        report
    }

    /// Scrolls and runs the resulting frame.
    pub fn scroll_and_render(&mut self, y: f64) -> FrameReport {
        self.scroll_to(y);
        self.run_frame()
    }

    /// Advances the virtual clock, firing due timers in time order. The
    /// document-height poll fires before recalculation when both are due.
    ///
    /// Returns the number of triggers re-measured.
    pub fn advance(&mut self, ms: u64) -> usize {
        let target = self.now_ms + ms;
        if !self.running {
            self.now_ms = target;
            return 0;
        }
        let mut updated = 0;
        loop {
            let next = self.next_poll_ms.min(self.next_recalc_ms);
            if next > target {
                break;
            }
            self.now_ms = next;
            if self.next_poll_ms == next {
                self.tracker.refresh_document_height(&self.page);
                self.next_poll_ms += self.poll_period_ms;
            }
            if self.next_recalc_ms == next {
                updated += self.recalculate();
                self.next_recalc_ms += self.recalc_period_ms;
            }
        }
        self.now_ms = target;
        updated
    }

    /// Re-runs discovery and a frame for every engine, as the web
    /// `rediscover` does.
    pub fn rediscover(&mut self) -> FrameReport {
        let mut report = FrameReport::default();
        if let Some(engine) = &mut self.parallax {
            engine.discover(&self.page);
            report.shifted = engine.render_frame(&self.page);
        }
        if let Some(engine) = &mut self.reveal {
            engine.discover(&self.page);
            report.revealed = engine.render_frame(&self.page);
        }
        debug!("stage: rediscovered at {}ms", self.now_ms);
        report
    }

    fn recalculate(&mut self) -> usize {
        let mut updated = 0;
        if let Some(engine) = &mut self.parallax {
            updated += engine.recalculate(&self.page);
        }
        if let Some(engine) = &mut self.reveal {
            updated += engine.recalculate(&self.page);
        }
        updated
    }

    fn has_effects(&self) -> bool {
        self.parallax.is_some() || self.reveal.is_some()
    }
}
