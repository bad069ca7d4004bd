// Copyright 2026 the Scroll Fancy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scroll-to-reveal.
//!
//! Elements tagged with `data-reveal` are hidden at discovery and receive
//! their animation class the first time their document offset falls inside
//! the reveal window: the band one viewport tall that ends `reveal_offset`
//! pixels above the bottom of the viewport.
//!
//! ```text
//!   document y
//!      │   ┌───────────── viewport ─────────────┐  ◄ scroll_distance
//!      │   │                                    │  ◄ line − viewport_height
//!      │   │          reveal window             │
//!      │   │                                    │
//!      │   ├────────────────────────────────────┤  ◄ line
//!      │   │  reveal_offset                     │
//!      ▼   └────────────────────────────────────┘
//! ```
//!
//! Revealing is one-way. A revealed trigger is never hidden again, and its
//! offset is frozen: recalculation and rediscovery leave it alone.
//!
//! The hide class doubles as an ownership mark: selection skips elements that
//! already carry it. Stopping an engine therefore takes the mark off every
//! element it has not revealed, so a restarted engine picks them up again.

use alloc::rc::Rc;
use alloc::string::String;
use alloc::vec::Vec;
use core::mem;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use log::{debug, trace};

use crate::config::Config;
use crate::effect::{HeightWatch, ScrollEffect};
use crate::markup::{
    ATTR_REVEAL, ATTR_REVEAL_DELAY, CLASS_REVEAL_ENABLED, CLASS_REVEAL_HIDE,
    STYLE_ANIMATION_DELAY, delay_ms,
};
use crate::page::{Page, document_offset};
use crate::parse::parse_int;
use crate::tracker::Tracker;

/// Where one element reveals.
#[derive(Clone, Debug, PartialEq)]
pub struct RevealTrigger<E> {
    /// The tagged element.
    pub element: E,
    /// Set on the first frame the element is inside the reveal window.
    pub revealed: bool,
    /// Rounded document offset of the element's top edge.
    pub offset: f64,
    /// Class added on reveal, from `data-reveal`.
    pub animation: String,
    /// Parsed `data-reveal-delay`; `None` when absent or not a number.
    pub delay_ms: Option<i64>,
    /// Index of the element in discovery order.
    slot: usize,
}

impl<E> RevealTrigger<E> {
    /// Delay to apply on reveal. Zero counts as no delay.
    #[must_use]
    pub fn effective_delay_ms(&self) -> Option<i64> {
        self.delay_ms.filter(|&ms| ms != 0)
    }
}

/// The scroll position line elements must rise above to reveal.
#[must_use]
pub fn reveal_line(scroll_distance: f64, viewport_height: f64, reveal_offset: f64) -> f64 {
    (scroll_distance + (viewport_height - reveal_offset)).round()
}

/// Whether `offset` lies strictly inside the window ending at `line`.
#[must_use]
pub fn in_reveal_window(offset: f64, line: f64, viewport_height: f64) -> bool {
    offset < line && offset > line - viewport_height
}

/// Reveals tagged elements once each as they scroll into view.
#[derive(Debug)]
pub struct RevealEngine<E> {
    tracker: Rc<Tracker>,
    reveal_offset: f64,
    min_width: f64,
    /// Selected once at construction; later DOM additions are not picked up.
    elements: Vec<E>,
    triggers: Vec<RevealTrigger<E>>,
    /// Revealed triggers held while the engine is width-gated.
    parked: Vec<RevealTrigger<E>>,
    height: HeightWatch,
}

impl<E: Clone> RevealEngine<E> {
    /// Selects the page's reveal elements.
    ///
    /// Elements already carrying the hide class belong to another instance
    /// and are skipped. No classes are written until [`discover`].
    ///
    /// [`discover`]: ScrollEffect::discover
    pub fn new<P>(page: &P, tracker: Rc<Tracker>, config: &Config) -> Self
    where
        P: Page<Element = E>,
    {
        let elements: Vec<E> = page
            .elements_with_attributes(&[ATTR_REVEAL])
            .into_iter()
            .filter(|element| !page.has_class(element, CLASS_REVEAL_HIDE))
            .collect();
        debug!("reveal: selected {} elements", elements.len());
        let height = HeightWatch::new(tracker.document_height());
        Self {
            tracker,
            reveal_offset: config.reveal_offset,
            min_width: config.reveal_min_width,
            elements,
            triggers: Vec::new(),
            parked: Vec::new(),
            height,
        }
    }

    /// The elements selected at construction.
    #[must_use]
    pub fn elements(&self) -> &[E] {
        &self.elements
    }

    /// The live trigger set; empty while width-gated.
    #[must_use]
    pub fn triggers(&self) -> &[RevealTrigger<E>] {
        &self.triggers
    }

    /// Number of live triggers that have revealed.
    #[must_use]
    pub fn revealed_count(&self) -> usize {
        self.triggers.iter().filter(|t| t.revealed).count()
    }
}

impl<P: Page> ScrollEffect<P> for RevealEngine<P::Element> {
    fn name(&self) -> &'static str {
        "reveal"
    }

    fn discover(&mut self, page: &P) -> bool {
        let mut carried: Vec<_> = mem::take(&mut self.triggers)
            .into_iter()
            .chain(mem::take(&mut self.parked))
            .filter(|t| t.revealed)
            .collect();

        let wide_enough = page.viewport_width() >= self.min_width;
        if !wide_enough {
            page.remove_root_class(CLASS_REVEAL_ENABLED);
            debug!(
                "reveal: disabled below {}px ({} revealed parked)",
                self.min_width,
                carried.len()
            );
            self.parked = carried;
            return false;
        }
        page.add_root_class(CLASS_REVEAL_ENABLED);

        for (slot, element) in self.elements.iter().enumerate() {
            if let Some(pos) = carried.iter().position(|t| t.slot == slot) {
                self.triggers.push(carried.swap_remove(pos));
                continue;
            }
            page.add_class(element, CLASS_REVEAL_HIDE);
            self.triggers.push(RevealTrigger {
                element: element.clone(),
                revealed: false,
                offset: document_offset(page, element),
                animation: page.attribute(element, ATTR_REVEAL).unwrap_or_default(),
                delay_ms: page
                    .attribute(element, ATTR_REVEAL_DELAY)
                    .as_deref()
                    .and_then(parse_int),
                slot,
            });
        }
        debug!("reveal: {} triggers armed", self.triggers.len());
        true
    }

    fn render_frame(&mut self, page: &P) -> usize {
        if !page.has_root_class(CLASS_REVEAL_ENABLED) || self.triggers.is_empty() {
            return 0;
        }

        let viewport_height = page.viewport_height();
        let line = reveal_line(
            self.tracker.scroll_distance(),
            viewport_height,
            self.reveal_offset,
        );

        let mut revealed = 0;
        for trigger in &mut self.triggers {
            if trigger.revealed || !in_reveal_window(trigger.offset, line, viewport_height) {
                continue;
            }
            if let Some(ms) = trigger.effective_delay_ms() {
                page.set_style(&trigger.element, STYLE_ANIMATION_DELAY, &delay_ms(ms));
            }
            if !trigger.animation.is_empty() {
                page.add_class(&trigger.element, &trigger.animation);
            }
            trigger.revealed = true;
            revealed += 1;
            trace!("reveal: slot {} at offset {}", trigger.slot, trigger.offset);
        }
        revealed
    }

    fn recalculate(&mut self, page: &P) -> usize {
        if !self.height.observe(self.tracker.document_height()) {
            return 0;
        }

        let mut updated = 0;
        for trigger in self.triggers.iter_mut().filter(|t| !t.revealed) {
            let current = document_offset(page, &trigger.element);
            if current != trigger.offset {
                trigger.offset = current;
                updated += 1;
            }
        }
        debug!(
            "reveal: document height now {}, {updated} offsets moved",
            self.height.last_seen()
        );
        updated
    }

    fn teardown(&mut self, page: &P) {
        // Unrevealed elements must not look claimed to the next instance.
        let mut released = 0;
        for trigger in self.triggers.drain(..).filter(|t| !t.revealed) {
            page.remove_class(&trigger.element, CLASS_REVEAL_HIDE);
            released += 1;
        }
        self.parked.clear();
        debug!("reveal: stopped, {released} pending elements released");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_from_the_reference_numbers() {
        let line = reveal_line(0.0, 800.0, 140.0);
        assert_eq!(line, 660.0, "0 + (800 - 140)");
        assert!(in_reveal_window(500.0, line, 800.0), "500 lies in (-140, 660)");
        assert!(!in_reveal_window(900.0, line, 800.0), "900 is below the line");
    }

    #[test]
    fn window_bounds_are_exclusive() {
        let line = reveal_line(1000.0, 800.0, 140.0);
        assert!(!in_reveal_window(line, line, 800.0), "on the line");
        assert!(!in_reveal_window(line - 800.0, line, 800.0), "on the top edge");
        assert!(in_reveal_window(line - 1.0, line, 800.0), "just above the line");
    }

    #[test]
    fn line_rounds_fractional_scroll() {
        assert_eq!(reveal_line(10.4, 800.0, 140.0), 670.0, "rounded down");
        assert_eq!(reveal_line(10.6, 800.0, 140.0), 671.0, "rounded up");
    }

    #[test]
    fn zero_delay_is_no_delay() {
        let mut trigger = RevealTrigger {
            element: (),
            revealed: false,
            offset: 0.0,
            animation: String::from("fade-in"),
            delay_ms: Some(0),
            slot: 0,
        };
        assert_eq!(trigger.effective_delay_ms(), None, "zero is falsy");
        trigger.delay_ms = Some(300);
        assert_eq!(trigger.effective_delay_ms(), Some(300), "non-zero applies");
        trigger.delay_ms = None;
        assert_eq!(trigger.effective_delay_ms(), None, "absent");
    }
}
