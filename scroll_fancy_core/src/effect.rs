// Copyright 2026 the Scroll Fancy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The lifecycle both engines share.
//!
//! Hosts drive every effect the same way:
//!
//! ```rust,ignore
//! // once, at start
//! effect.discover(&page);
//! effect.render_frame(&page);
//!
//! // on each coalesced frame after `scroll` or `resize`
//! effect.render_frame(&page);
//!
//! // on each recalculation tick
//! effect.recalculate(&page);
//!
//! // once, when the host stops
//! effect.teardown(&page);
//! ```

use crate::page::Page;

/// A scroll-driven effect over a fixed set of elements.
pub trait ScrollEffect<P: Page> {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Applies width gating and (re)builds the trigger set.
    ///
    /// Returns `false` when the viewport is too narrow and the effect is
    /// disabled until the next discovery.
    fn discover(&mut self, page: &P) -> bool;

    /// Runs one frame pass against the current scroll state.
    ///
    /// Returns the number of elements written this frame.
    fn render_frame(&mut self, page: &P) -> usize;

    /// Re-measures triggers if the document height changed since the last
    /// call. Returns the number of triggers updated.
    fn recalculate(&mut self, page: &P) -> usize;

    /// Releases per-element state that would stop a later instance from
    /// selecting the same elements. Called once when the host stops.
    ///
    /// Classes and styles that are the visible result of the effect stay.
    fn teardown(&mut self, page: &P) {
        let _ = page;
    }
}

/// Detects document height changes between recalculation ticks.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeightWatch {
    last_seen: f64,
}

impl HeightWatch {
    /// Starts watching from a known height.
    #[must_use]
    pub const fn new(height: f64) -> Self {
        Self { last_seen: height }
    }

    /// Height recorded at the last change.
    #[must_use]
    pub const fn last_seen(&self) -> f64 {
        self.last_seen
    }

    /// Records `current` and reports whether it differs from the last height.
    pub fn observe(&mut self, current: f64) -> bool {
        if current == self.last_seen {
            return false;
        }
        self.last_seen = current;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_each_change_once() {
        let mut watch = HeightWatch::new(1000.0);
        assert!(!watch.observe(1000.0), "unchanged");
        assert!(watch.observe(1200.0), "grew");
        assert!(!watch.observe(1200.0), "already recorded");
        assert!(watch.observe(900.0), "shrank");
        assert_eq!(watch.last_seen(), 900.0, "latest height kept");
    }
}
