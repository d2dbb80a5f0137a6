use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type Tick = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// A restartable requestAnimationFrame loop.
///
/// The frame callback keeps rescheduling itself while the running flag is
/// set; `stop` clears the flag and cancels the pending frame, so no callback
/// fires after teardown.
pub struct FrameLoop {
    running: Rc<Cell<bool>>,
    raf_id: Rc<Cell<i32>>,
    tick: Tick,
}

impl FrameLoop {
    pub fn new(mut frame: impl FnMut() + 'static) -> Self {
        let running = Rc::new(Cell::new(false));
        let raf_id = Rc::new(Cell::new(0));
        let tick: Tick = Rc::new(RefCell::new(None));

        let running_tick = running.clone();
        let raf_tick = raf_id.clone();
        let tick_clone = tick.clone();
        *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            if !running_tick.get() {
                return;
            }
            frame();
            schedule(&tick_clone, &raf_tick);
        }) as Box<dyn FnMut()>));

        Self {
            running,
            raf_id,
            tick,
        }
    }

    /// Begin (or resume) scheduling frames. Idempotent while running.
    pub fn start(&self) {
        if !self.running.replace(true) {
            schedule(&self.tick, &self.raf_id);
        }
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.running.get()
    }

    /// Set the running flag without scheduling. Used by the blur handler,
    /// which intentionally leaves the loop marked live so refocus never shows
    /// a restart hitch.
    pub fn set_running(&self, on: bool) {
        self.running.set(on);
    }

    pub fn stop(&self) {
        self.running.set(false);
        if let Some(w) = web::window() {
            let _ = w.cancel_animation_frame(self.raf_id.get());
        }
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.stop();
        // The tick closure holds an Rc to its own cell for rescheduling;
        // take it out so the cycle (and the captured context) is freed.
        self.tick.borrow_mut().take();
    }
}

fn schedule(tick: &Tick, raf_id: &Rc<Cell<i32>>) {
    if let Some(w) = web::window() {
        if let Some(t) = tick.borrow().as_ref() {
            if let Ok(id) = w.request_animation_frame(t.as_ref().unchecked_ref()) {
                raf_id.set(id);
            }
        }
    }
}
