// Copyright 2026 the Scroll Fancy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Coalescing `requestAnimationFrame` scheduler.
//!
//! [`FrameScheduler`] runs its callback on the next animation frame after
//! [`schedule`](FrameScheduler::schedule) is called. Further calls before
//! that frame join the pending one, so a burst of `scroll` events costs one
//! pass per paint. Unlike a render loop it does not re-register itself: with
//! no events there is no work.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use scroll_fancy_core::frame::FrameRequest;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;

// Direct global bindings instead of `web_sys::Window` methods, so scheduling
// from an event handler needs no window lookup.
#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_name = "requestAnimationFrame")]
    fn request_animation_frame(callback: &JsValue) -> i32;

    #[wasm_bindgen(js_name = "cancelAnimationFrame")]
    fn cancel_animation_frame(id: i32);
}

type RafClosure = Closure<dyn FnMut(f64)>;

/// Runs a callback at most once per animation frame, on demand.
///
/// Dropping the scheduler cancels any pending frame.
pub struct FrameScheduler {
    inner: Rc<RafInner>,
}

struct RafInner {
    /// The JS closure handed to `requestAnimationFrame`, created once.
    closure: RefCell<Option<RafClosure>>,

    /// The work to run on the frame.
    callback: RefCell<Box<dyn FnMut()>>,

    /// Pending-frame state shared by every `schedule` call.
    request: FrameRequest,

    /// ID of the pending frame, for cancellation.
    raf_id: Cell<i32>,

    /// Cleared by `cancel`; a late frame then does nothing.
    active: Cell<bool>,
}

impl FrameScheduler {
    /// Creates a scheduler with nothing pending.
    pub fn new(callback: impl FnMut() + 'static) -> Self {
        let inner = Rc::new(RafInner {
            closure: RefCell::new(None),
            callback: RefCell::new(Box::new(callback)),
            request: FrameRequest::new(),
            raf_id: Cell::new(0),
            active: Cell::new(true),
        });

        let frame_inner = Rc::clone(&inner);
        let closure = Closure::wrap(Box::new(move |_timestamp_ms: f64| {
            frame_inner.request.begin_frame();
            if frame_inner.active.get() {
                frame_inner.callback.borrow_mut()();
            }
        }) as Box<dyn FnMut(f64)>);
        *inner.closure.borrow_mut() = Some(closure);

        Self { inner }
    }

    /// Requests a run on the next animation frame.
    ///
    /// No-op if a frame is already pending or the scheduler was cancelled.
    pub fn schedule(&self) {
        if !self.inner.active.get() || !self.inner.request.request() {
            return;
        }
        if let Some(ref closure) = *self.inner.closure.borrow() {
            let id = request_animation_frame(closure.as_ref().unchecked_ref());
            self.inner.raf_id.set(id);
        }
    }

    /// Cancels the pending frame, if any, and stops accepting new ones.
    pub fn cancel(&self) {
        if !self.inner.active.replace(false) {
            return;
        }
        if self.inner.request.is_pending() {
            cancel_animation_frame(self.inner.raf_id.get());
            self.inner.request.cancel();
        }
    }

    /// Returns `true` if a frame is pending.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.inner.request.is_pending()
    }
}

impl Drop for FrameScheduler {
    fn drop(&mut self) {
        self.cancel();
        // The closure holds an `Rc` to `inner`; dropping it breaks the cycle.
        self.inner.closure.borrow_mut().take();
    }
}

impl core::fmt::Debug for FrameScheduler {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("FrameScheduler")
            .field("pending", &self.inner.request.is_pending())
            .field("active", &self.inner.active.get())
            .finish_non_exhaustive()
    }
}
