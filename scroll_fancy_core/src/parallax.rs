// Copyright 2026 the Scroll Fancy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Parallax.
//!
//! Elements tagged with `data-parallax` (foreground) or `data-parallax-bg`
//! (background image) are shifted by `(scroll_distance - offset) * speed`
//! on every frame in which they intersect the viewport. Foreground elements
//! get a `translate(0, y)` transform; background elements get a vertical
//! background position.
//!
//! Unlike reveal, parallax triggers never settle. Every trigger is
//! re-measured when the document height changes, and an element that leaves
//! the viewport simply keeps the last shift written to it.

use alloc::rc::Rc;
use alloc::string::String;
use alloc::vec::Vec;

use log::{debug, trace};

use crate::config::Config;
use crate::effect::{HeightWatch, ScrollEffect};
use crate::markup::{
    ATTR_PARALLAX, ATTR_PARALLAX_BG, ATTR_PARALLAX_POSITION, BACKGROUND_ANCHOR,
    CLASS_HAS_PARALLAX, CLASS_PARALLAX_ENABLED, STYLE_BACKGROUND_POSITION, STYLE_TRANSFORM,
    background_y, translate_y,
};
use crate::page::{Page, document_offset};
use crate::parse::parse_float;
use crate::tracker::Tracker;

/// Speed used when an element's speed attribute is not a number.
pub const DEFAULT_SPEED: f64 = 0.5;

/// One parallax element's geometry and speed.
#[derive(Clone, Debug, PartialEq)]
pub struct ParallaxTrigger<E> {
    /// The tagged element.
    pub element: E,
    /// Shift the background image rather than the element itself.
    pub is_background: bool,
    /// Rounded document offset of the element's top edge.
    pub offset: f64,
    /// Rendered height of the element.
    pub height: f64,
    /// Position hint from markup. Kept for callers; never applied.
    pub position: String,
    /// Multiplier applied to the scroll delta.
    pub speed: f64,
}

impl<E> ParallaxTrigger<E> {
    /// Whether the element intersects the viewport.
    #[must_use]
    pub fn in_view(&self, scroll_distance: f64, viewport_height: f64) -> bool {
        viewport_height + scroll_distance > self.offset
            && scroll_distance < self.offset + self.height
    }

    /// Vertical shift for the given scroll distance.
    #[must_use]
    pub fn shift(&self, scroll_distance: f64) -> f64 {
        (scroll_distance - self.offset) * self.speed
    }
}

/// Resolves an element's speed from its attributes.
///
/// `data-parallax` wins over `data-parallax-bg`. A value that does not parse
/// as a number falls back to [`DEFAULT_SPEED`].
pub fn resolve_speed<P: Page>(page: &P, element: &P::Element) -> f64 {
    let raw = page
        .attribute(element, ATTR_PARALLAX)
        .or_else(|| page.attribute(element, ATTR_PARALLAX_BG));
    match raw.as_deref().and_then(parse_float) {
        Some(speed) if !speed.is_nan() => speed,
        _ => {
            trace!("parallax: speed {raw:?} is not a number, using {DEFAULT_SPEED}");
            DEFAULT_SPEED
        }
    }
}

/// Shifts tagged elements proportionally to scroll while they are in view.
#[derive(Debug)]
pub struct ParallaxEngine<E> {
    tracker: Rc<Tracker>,
    min_width: f64,
    /// Selected once at construction; later DOM additions are not picked up.
    elements: Vec<E>,
    triggers: Vec<ParallaxTrigger<E>>,
    height: HeightWatch,
}

impl<E: Clone> ParallaxEngine<E> {
    /// Selects the page's parallax elements. Nothing is written until
    /// [`discover`](ScrollEffect::discover).
    pub fn new<P>(page: &P, tracker: Rc<Tracker>, config: &Config) -> Self
    where
        P: Page<Element = E>,
    {
        let elements = page.elements_with_attributes(&[ATTR_PARALLAX, ATTR_PARALLAX_BG]);
        debug!("parallax: selected {} elements", elements.len());
        let height = HeightWatch::new(tracker.document_height());
        Self {
            tracker,
            min_width: config.parallax_min_width,
            elements,
            triggers: Vec::new(),
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
    pub fn triggers(&self) -> &[ParallaxTrigger<E>] {
        &self.triggers
    }
}

impl<P: Page> ScrollEffect<P> for ParallaxEngine<P::Element> {
    fn name(&self) -> &'static str {
        "parallax"
    }

    fn discover(&mut self, page: &P) -> bool {
        self.triggers.clear();

        let wide_enough = page.viewport_width() >= self.min_width;
        if !wide_enough {
            page.remove_root_class(CLASS_PARALLAX_ENABLED);
            for element in &self.elements {
                page.remove_class(element, CLASS_HAS_PARALLAX);
                if page.has_attribute(element, ATTR_PARALLAX) {
                    page.remove_style(element, STYLE_TRANSFORM);
                }
                if page.has_attribute(element, ATTR_PARALLAX_BG) {
                    page.remove_style(element, STYLE_BACKGROUND_POSITION);
                }
            }
            debug!("parallax: disabled below {}px", self.min_width);
            return false;
        }
        page.add_root_class(CLASS_PARALLAX_ENABLED);

        for element in &self.elements {
            page.add_class(element, CLASS_HAS_PARALLAX);
            self.triggers.push(ParallaxTrigger {
                element: element.clone(),
                is_background: page.has_attribute(element, ATTR_PARALLAX_BG),
                offset: document_offset(page, element),
                height: page.offset_height(element),
                position: page
                    .attribute(element, ATTR_PARALLAX_POSITION)
                    .unwrap_or_else(|| String::from(BACKGROUND_ANCHOR)),
                speed: resolve_speed(page, element),
            });
        }
        debug!("parallax: {} triggers armed", self.triggers.len());
        true
    }

    fn render_frame(&mut self, page: &P) -> usize {
        if self.triggers.is_empty() {
            return 0;
        }

        let scroll_distance = self.tracker.scroll_distance();
        let viewport_height = page.viewport_height();

        let mut written = 0;
        for trigger in &self.triggers {
            if !trigger.in_view(scroll_distance, viewport_height) {
                continue;
            }
            let y = trigger.shift(scroll_distance);
            if trigger.is_background {
                page.set_style(&trigger.element, STYLE_BACKGROUND_POSITION, &background_y(y));
            } else {
                page.set_style(&trigger.element, STYLE_TRANSFORM, &translate_y(y));
            }
            written += 1;
        }
        written
    }

    fn recalculate(&mut self, page: &P) -> usize {
        if !self.height.observe(self.tracker.document_height()) {
            return 0;
        }

        let mut updated = 0;
        for trigger in &mut self.triggers {
            let current = document_offset(page, &trigger.element);
            if current != trigger.offset {
                trigger.offset = current;
                trigger.height = page.offset_height(&trigger.element);
                updated += 1;
            }
        }
        debug!(
            "parallax: document height now {}, {updated} triggers moved",
            self.height.last_seen()
        );
        updated
    }
}
