// Copyright 2026 the Scroll Fancy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Wiring of tracker and engines to browser events and timers.
//!
//! A [`Runtime`] owns every listener, timer and frame request it creates, so
//! dropping it detaches all of them and tears each engine down. Styles and
//! classes that show the effect stay on the page; the reveal hide class is
//! taken off elements that were never revealed.

use std::cell::RefCell;
use std::rc::Rc;

use log::debug;
use scroll_fancy_core::config::DOCUMENT_POLL_INTERVAL_MS;
use scroll_fancy_core::{Config, ParallaxEngine, RevealEngine, ScrollEffect, Tracker};
use web_sys::EventTarget;

use crate::dom::DomPage;
use crate::error::Result;
use crate::listener::EventListener;
use crate::raf::FrameScheduler;
use crate::timer::Interval;

type SharedEffect = Rc<RefCell<dyn ScrollEffect<DomPage>>>;

/// One engine bound to `scroll`/`resize` and its recalculation timer.
struct EffectDriver {
    name: &'static str,
    effect: SharedEffect,
    page: Rc<DomPage>,
    // Listeners go first so no event can schedule a frame mid-teardown.
    _listeners: [EventListener; 2],
    _frames: Rc<FrameScheduler>,
    _recalc: Interval,
}

impl EffectDriver {
    fn start(page: &Rc<DomPage>, effect: SharedEffect, recalc_timeout_ms: i32) -> Result<Self> {
        let name = effect.borrow().name();
        effect.borrow_mut().discover(page);

        let recalc = Interval::new(page.window(), recalc_timeout_ms, {
            let effect = Rc::clone(&effect);
            let page = Rc::clone(page);
            move || {
                effect.borrow_mut().recalculate(&page);
            }
        })?;

        effect.borrow_mut().render_frame(page);

        let frames = Rc::new(FrameScheduler::new({
            let effect = Rc::clone(&effect);
            let page = Rc::clone(page);
            move || {
                effect.borrow_mut().render_frame(&page);
            }
        }));

        let target: &EventTarget = page.window().as_ref();
        let schedule = |frames: &Rc<FrameScheduler>| {
            let frames = Rc::clone(frames);
            move || frames.schedule()
        };
        let listeners = [
            EventListener::new(target, "resize", schedule(&frames))?,
            EventListener::new(target, "scroll", schedule(&frames))?,
        ];

        debug!("{name}: started, recalculating every {recalc_timeout_ms}ms");
        Ok(Self {
            name,
            effect,
            page: Rc::clone(page),
            _listeners: listeners,
            _frames: frames,
            _recalc: recalc,
        })
    }

    fn rediscover(&self) {
        let mut effect = self.effect.borrow_mut();
        effect.discover(&self.page);
        effect.render_frame(&self.page);
    }
}

impl Drop for EffectDriver {
    fn drop(&mut self) {
        // A stop issued from inside one of this engine's callbacks finds the
        // effect borrowed; skipping teardown then only leaves classes behind.
        if let Ok(mut effect) = self.effect.try_borrow_mut() {
            effect.teardown(&self.page);
        }
    }
}

/// Tracker inputs plus the enabled engines.
pub(crate) struct Runtime {
    // Engines are torn down before the tracker inputs they read from.
    effects: Vec<EffectDriver>,
    _scroll: EventListener,
    _scroll_frames: Rc<FrameScheduler>,
    _height_poll: Interval,
    tracker: Rc<Tracker>,
}

impl Runtime {
    /// Starts the tracker, then parallax and reveal as enabled.
    pub(crate) fn start(config: &Config) -> Result<Self> {
        let page = Rc::new(DomPage::from_global()?);
        let tracker = Rc::new(Tracker::measure(&*page));
        let target: &EventTarget = page.window().as_ref();

        let scroll_frames = Rc::new(FrameScheduler::new({
            let tracker = Rc::clone(&tracker);
            let page = Rc::clone(&page);
            move || tracker.refresh_scroll(&*page)
        }));
        let scroll = EventListener::new(target, "scroll", {
            let frames = Rc::clone(&scroll_frames);
            move || frames.schedule()
        })?;
        let height_poll = Interval::new(page.window(), DOCUMENT_POLL_INTERVAL_MS, {
            let tracker = Rc::clone(&tracker);
            let page = Rc::clone(&page);
            move || tracker.refresh_document_height(&*page)
        })?;

        let recalc_timeout_ms = config.recalc_timeout_ms();
        let mut effects = Vec::with_capacity(2);
        if config.parallax {
            let engine = ParallaxEngine::new(&*page, Rc::clone(&tracker), config);
            effects.push(EffectDriver::start(
                &page,
                Rc::new(RefCell::new(engine)),
                recalc_timeout_ms,
            )?);
        }
        if config.reveal {
            let engine = RevealEngine::new(&*page, Rc::clone(&tracker), config);
            effects.push(EffectDriver::start(
                &page,
                Rc::new(RefCell::new(engine)),
                recalc_timeout_ms,
            )?);
        }

        Ok(Self {
            effects,
            _scroll: scroll,
            _scroll_frames: scroll_frames,
            _height_poll: height_poll,
            tracker,
        })
    }

    /// Re-runs discovery and width gating for every running engine.
    pub(crate) fn rediscover(&self) {
        for driver in &self.effects {
            debug!("{}: rediscovering", driver.name);
            driver.rediscover();
        }
    }

    /// Last tracked scroll distance.
    pub(crate) fn scroll_distance(&self) -> f64 {
        self.tracker.scroll_distance()
    }
}

impl core::fmt::Debug for Runtime {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let names: Vec<_> = self.effects.iter().map(|d| d.name).collect();
        f.debug_struct("Runtime")
            .field("effects", &names)
            .field("tracker", &self.tracker)
            .finish_non_exhaustive()
    }
}
