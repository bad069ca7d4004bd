// Copyright 2026 the Scroll Fancy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Frame coalescing.
//!
//! Scroll and resize events can fire many times between two paints. Work
//! triggered by them is deferred to the next animation frame, and any further
//! events arriving before that frame runs join the pending one instead of
//! scheduling another. This is coalescing, not a timed debounce: the work
//! still runs on the very next frame.

use core::cell::Cell;

/// Tracks whether a frame callback is already pending.
#[derive(Debug, Default)]
pub struct FrameRequest {
    pending: Cell<bool>,
}

impl FrameRequest {
    /// Creates a request with nothing pending.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            pending: Cell::new(false),
        }
    }

    /// Marks a frame as wanted.
    ///
    /// Returns `true` if the caller must schedule a frame callback, `false`
    /// if one is already pending.
    #[must_use]
    pub fn request(&self) -> bool {
        !self.pending.replace(true)
    }

    /// Called at the start of the frame callback; later events request anew.
    pub fn begin_frame(&self) {
        self.pending.set(false);
    }

    /// Drops a pending request without running it.
    pub fn cancel(&self) {
        self.pending.set(false);
    }

    /// Whether a frame callback is pending.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.get()
    }
}
