//! Mounting, arming and event wiring for the cursor trail.

use std::cell::RefCell;
use std::rc::Rc;

use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys as web;

use fx_core::{CursorTrails, Oscillator, TrailConfig};

use crate::dom;
use crate::draw;
use crate::listeners::EventBinding;
use crate::raf::FrameLoop;

/// A mounted cursor trail. The effect idles until the first mouse or touch
/// event arms the trails at that point; later events only retarget them.
/// Dropping (or `destroy`ing) the handle removes every listener and cancels
/// the pending frame.
pub struct CursorTrailEffect {
    trails: Rc<RefCell<CursorTrails>>,
    frames: Rc<FrameLoop>,
    bindings: Vec<EventBinding>,
}

impl CursorTrailEffect {
    pub fn mount(
        canvas: web::HtmlCanvasElement,
        config: TrailConfig,
        seed: u64,
    ) -> anyhow::Result<Self> {
        let trails = Rc::new(RefCell::new(CursorTrails::new(config, seed)?));
        let ctx = dom::context_2d(&canvas);
        dom::sync_canvas_to_window(&canvas);

        let window_obj = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
        let document: web::EventTarget = window_obj
            .document()
            .ok_or_else(|| anyhow::anyhow!("no document"))?
            .into();
        let window: web::EventTarget = window_obj.into();

        let frames = {
            let trails_frame = trails.clone();
            let mut hue = Oscillator::hue(seed);
            Rc::new(FrameLoop::new(move || {
                let mut trails = trails_frame.borrow_mut();
                if !trails.is_armed() {
                    return;
                }
                trails.update();
                if let Some(ctx) = &ctx {
                    draw::draw_trails(ctx, &trails, hue.update());
                }
            }))
        };

        let mut bindings = Vec::new();

        // First mouse/touch event arms the trails and starts the loop; the
        // same listeners retarget afterwards.
        for event in ["mousemove", "touchstart", "touchmove"] {
            let trails_ev = trails.clone();
            let frames_ev = frames.clone();
            bindings.push(EventBinding::listen(&document, event, move |ev| {
                let Some(at) = pointer_position(&ev) else {
                    return;
                };
                let mut trails = trails_ev.borrow_mut();
                if trails.is_armed() {
                    trails.set_target(at);
                } else {
                    trails.arm(at);
                    frames_ev.start();
                }
            }));
        }

        for event in ["resize", "orientationchange"] {
            let canvas_resize = canvas.clone();
            bindings.push(EventBinding::listen(&window, event, move |_| {
                dom::sync_canvas_to_window(&canvas_resize);
            }));
        }

        {
            let frames_focus = frames.clone();
            bindings.push(EventBinding::listen(&window, "focus", move |_| {
                frames_focus.start();
            }));
        }
        {
            let frames_blur = frames.clone();
            bindings.push(EventBinding::listen(&window, "blur", move |_| {
                // left live on purpose; pausing here causes a restart hitch
                frames_blur.set_running(true);
            }));
        }

        log::info!(
            "[trail] mounted: {} trails of {} nodes",
            trails.borrow().config.trails,
            trails.borrow().config.size
        );

        Ok(Self {
            trails,
            frames,
            bindings,
        })
    }

    /// Explicit teardown: stop the loop and remove every listener. The trails
    /// themselves are discarded with the handle.
    pub fn destroy(mut self) {
        self.frames.stop();
        for binding in &mut self.bindings {
            binding.unlisten();
        }
        log::info!(
            "[trail] destroyed ({} trails released)",
            self.trails.borrow().lines().len()
        );
    }

    /// Leak the effect so it runs for the page lifetime.
    pub fn forget(self) {
        std::mem::forget(self);
    }
}

/// Pointer position from either a touch or a mouse event; None when a touch
/// event carries no touches (so the trail simply does not move).
fn pointer_position(ev: &web::Event) -> Option<Vec2> {
    if let Some(touch_ev) = ev.dyn_ref::<web::TouchEvent>() {
        let touch = touch_ev.touches().get(0)?;
        return Some(Vec2::new(touch.page_x() as f32, touch.page_y() as f32));
    }
    ev.dyn_ref::<web::MouseEvent>()
        .map(|ev| Vec2::new(ev.client_x() as f32, ev.client_y() as f32))
}
