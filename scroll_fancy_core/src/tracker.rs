// Copyright 2026 the Scroll Fancy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared scroll and document state.
//!
//! One [`Tracker`] exists per running instance. The host refreshes the scroll
//! distance once per coalesced frame after a `scroll` event and the document
//! height on a fixed poll; both engines hold an `Rc<Tracker>` and only read
//! from it. Everything runs on the host's event loop, so plain [`Cell`]s are
//! enough.

use core::cell::Cell;

use log::trace;

use crate::page::Page;

/// Last observed scroll distance and document height.
#[derive(Debug, Default)]
pub struct Tracker {
    scroll_distance: Cell<f64>,
    document_height: Cell<f64>,
}

impl Tracker {
    /// Creates a tracker with a known document height and no scroll.
    #[must_use]
    pub fn new(document_height: f64) -> Self {
        Self {
            scroll_distance: Cell::new(0.0),
            document_height: Cell::new(document_height),
        }
    }

    /// Creates a tracker seeded with the page's current document height.
    ///
    /// The scroll distance starts at 0 until the first scroll refresh.
    #[must_use]
    pub fn measure<P: Page>(page: &P) -> Self {
        Self::new(page.document_height())
    }

    /// Current vertical scroll distance, never negative.
    #[must_use]
    pub fn scroll_distance(&self) -> f64 {
        self.scroll_distance.get()
    }

    /// Document height as of the last poll.
    #[must_use]
    pub fn document_height(&self) -> f64 {
        self.document_height.get()
    }

    /// Records a scroll distance. Overscroll above the top clamps to 0.
    pub fn set_scroll_distance(&self, distance: f64) {
        self.scroll_distance.set(distance.max(0.0));
    }

    /// Records a document height.
    pub fn set_document_height(&self, height: f64) {
        self.document_height.set(height);
    }

    /// Re-reads the scroll distance from the page.
    pub fn refresh_scroll<P: Page>(&self, page: &P) {
        self.set_scroll_distance(page.scroll_distance());
    }

    /// Re-reads the document height from the page.
    pub fn refresh_document_height<P: Page>(&self, page: &P) {
        let height = page.document_height();
        if height != self.document_height.get() {
            trace!("document height {} -> {height}", self.document_height.get());
        }
        self.document_height.set(height);
    }
}
