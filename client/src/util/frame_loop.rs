//! `requestAnimationFrame` loop driving spring-smoothed motion.
//!
//! ARCHITECTURE
//! ============
//! The loop re-arms itself from inside its own callback and stops once the
//! owning component drops its handle flag, releasing the closure. Natively
//! no frames are produced.

#[cfg(test)]
#[path = "frame_loop_test.rs"]
mod frame_loop_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Longest step handed to callers, so a backgrounded tab does not jump.
pub const MAX_FRAME_STEP_SECS: f64 = 0.05;

/// Seconds between two frame timestamps (milliseconds), clamped.
#[must_use]
pub fn frame_dt(prev_ms: Option<f64>, now_ms: f64) -> f64 {
    prev_ms.map_or(0.0, |prev| ((now_ms - prev) / 1000.0).clamp(0.0, MAX_FRAME_STEP_SECS))
}

/// Stop switch for a running loop.
#[derive(Clone, Debug)]
pub struct FrameLoopHandle {
    alive: Arc<AtomicBool>,
}

impl FrameLoopHandle {
    fn new() -> Self {
        Self { alive: Arc::new(AtomicBool::new(true)) }
    }

    pub fn stop(&self) {
        self.alive.store(false, Ordering::Relaxed);
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.alive.load(Ordering::Relaxed)
    }
}

/// Call `on_frame(dt_secs, elapsed_secs)` once per animation frame until stopped.
pub fn start_frame_loop<F>(on_frame: F) -> FrameLoopHandle
where
    F: FnMut(f64, f64) + 'static,
{
    let handle = FrameLoopHandle::new();
    #[cfg(feature = "csr")]
    run_frames(handle.clone(), on_frame);
    #[cfg(not(feature = "csr"))]
    {
        let _ = on_frame;
    }
    handle
}

#[cfg(feature = "csr")]
fn run_frames<F>(handle: FrameLoopHandle, mut on_frame: F)
where
    F: FnMut(f64, f64) + 'static,
{
    use std::cell::RefCell;
    use std::rc::Rc;

    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;

    let Some(window) = web_sys::window() else {
        return;
    };

    let holder: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let holder_for_cb = Rc::clone(&holder);
    let window_for_cb = window.clone();
    let mut last_ms = None;
    let cb = Closure::wrap(Box::new(move |now_ms: f64| {
        if !handle.is_running() {
            holder_for_cb.borrow_mut().take();
            return;
        }
        let dt = frame_dt(last_ms, now_ms);
        last_ms = Some(now_ms);
        on_frame(dt, now_ms / 1000.0);
        if let Some(next) = holder_for_cb.borrow().as_ref() {
            let _ = window_for_cb.request_animation_frame(next.as_ref().unchecked_ref());
        }
    }) as Box<dyn FnMut(f64)>);

    if window.request_animation_frame(cb.as_ref().unchecked_ref()).is_ok() {
        *holder.borrow_mut() = Some(cb);
    } else {
        log::warn!("requestAnimationFrame unavailable; motion disabled");
    }
}
