//! `requestAnimationFrame` coalescing for scroll handlers.
//!
//! Callers hold an `assistant::scroll::FrameGate`; only when
//! `try_schedule` succeeds do they call [`request_frame`], and the callback
//! completes the gate before reading layout.

/// Run `run` on the next animation frame. Without a window (or when the
/// request fails) it runs immediately.
#[cfg(feature = "hydrate")]
pub fn request_frame(run: impl FnOnce() + 'static) {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;

    let Some(window) = web_sys::window() else {
        run();
        return;
    };

    let pending = Rc::new(RefCell::new(Some(run)));
    let pending_for_cb = Rc::clone(&pending);
    let holder: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let holder_for_cb = Rc::clone(&holder);
    let cb = Closure::wrap(Box::new(move |_ts: f64| {
        if let Some(run) = pending_for_cb.borrow_mut().take() {
            run();
        }
        holder_for_cb.borrow_mut().take();
    }) as Box<dyn FnMut(f64)>);

    if window.request_animation_frame(cb.as_ref().unchecked_ref()).is_ok() {
        *holder.borrow_mut() = Some(cb);
    } else if let Some(run) = pending.borrow_mut().take() {
        run();
    }
}

#[cfg(not(feature = "hydrate"))]
pub fn request_frame(run: impl FnOnce() + 'static) {
    run();
}
