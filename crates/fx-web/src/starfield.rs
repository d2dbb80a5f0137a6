//! Mounting and event wiring for the particle field.

use std::cell::RefCell;
use std::rc::Rc;

use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys as web;

use fx_core::{Starfield, StarfieldConfig};

use crate::dom::{self, ResizeObserverHandle};
use crate::draw;
use crate::listeners::EventBinding;
use crate::raf::FrameLoop;

/// A mounted particle field. Dropping (or `destroy`ing) the handle stops the
/// frame loop, removes every listener and disconnects the resize observer.
pub struct StarfieldEffect {
    field: Rc<RefCell<Starfield>>,
    frames: Rc<FrameLoop>,
    bindings: Vec<EventBinding>,
    _observer: Option<ResizeObserverHandle>,
}

impl StarfieldEffect {
    pub fn mount(
        canvas: web::HtmlCanvasElement,
        config: StarfieldConfig,
        seed: u64,
    ) -> anyhow::Result<Self> {
        let mouse_adjust = config.mouse_adjust;
        let tilt_adjust = config.tilt_adjust;
        let click_to_warp = config.click_to_warp;

        let field = Rc::new(RefCell::new(Starfield::new(config, seed)?));
        // No 2D context means no drawing; the simulation still steps.
        let ctx = dom::context_2d(&canvas);

        let rect = canvas.get_bounding_client_rect();
        let (w, h) = (rect.width() as f32, rect.height() as f32);
        canvas.set_width(w.max(1.0) as u32);
        canvas.set_height(h.max(1.0) as u32);
        field.borrow_mut().resize(w, h);

        // Virtual cursor starts at center: zero steering until input arrives.
        let cursor = Rc::new(RefCell::new(field.borrow().surface().center()));

        let window: web::EventTarget = web::window()
            .ok_or_else(|| anyhow::anyhow!("no window"))?
            .into();
        let mut bindings = Vec::new();

        if mouse_adjust {
            let cursor_move = cursor.clone();
            bindings.push(EventBinding::listen(&window, "pointermove", move |ev| {
                if let Some(ev) = ev.dyn_ref::<web::PointerEvent>() {
                    *cursor_move.borrow_mut() =
                        Vec2::new(ev.client_x() as f32, ev.client_y() as f32);
                }
            }));
        }

        if tilt_adjust {
            let field_tilt = field.clone();
            let cursor_tilt = cursor.clone();
            bindings.push(EventBinding::listen(
                &window,
                "deviceorientation",
                move |ev| {
                    if let Some(ev) = ev.dyn_ref::<web::DeviceOrientationEvent>() {
                        // readings are absent on devices without sensors
                        if let (Some(beta), Some(gamma)) = (ev.beta(), ev.gamma()) {
                            *cursor_tilt.borrow_mut() =
                                field_tilt.borrow().tilt_cursor(beta as f32, gamma as f32);
                        }
                    }
                },
            ));
        }

        if click_to_warp {
            let field_down = field.clone();
            bindings.push(EventBinding::listen(&window, "pointerdown", move |_| {
                field_down.borrow_mut().set_hyperspace(true);
            }));
            let field_up = field.clone();
            bindings.push(EventBinding::listen(&window, "pointerup", move |_| {
                field_up.borrow_mut().set_hyperspace(false);
            }));
        }

        // Track the parent's content box; resizing resyncs the backing store
        // and surface state without repopulating the pool.
        let observer = canvas.parent_element().and_then(|parent| {
            let field_resize = field.clone();
            let canvas_resize = canvas.clone();
            ResizeObserverHandle::observe(&parent, move |w, h| {
                canvas_resize.set_width(w.max(1.0) as u32);
                canvas_resize.set_height(h.max(1.0) as u32);
                field_resize.borrow_mut().resize(w, h);
            })
        });

        let frames = {
            let field_frame = field.clone();
            let cursor_frame = cursor.clone();
            Rc::new(FrameLoop::new(move || {
                let mut field = field_frame.borrow_mut();
                field.update(*cursor_frame.borrow());
                if let Some(ctx) = &ctx {
                    draw::draw_starfield(ctx, &field);
                }
            }))
        };
        frames.start();
        log::info!(
            "[starfield] mounted: {} stars on {}x{}",
            field.borrow().config.quantity,
            canvas.width(),
            canvas.height()
        );

        Ok(Self {
            field,
            frames,
            bindings,
            _observer: observer,
        })
    }

    /// Explicit teardown: stop the loop, remove listeners, release the canvas.
    pub fn destroy(mut self) {
        self.frames.stop();
        for binding in &mut self.bindings {
            binding.unlisten();
        }
        log::info!(
            "[starfield] destroyed ({} stars released)",
            self.field.borrow().stars.len()
        );
    }

    /// Leak the effect so it runs for the page lifetime.
    pub fn forget(self) {
        std::mem::forget(self);
    }
}
