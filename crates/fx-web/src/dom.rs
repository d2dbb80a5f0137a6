use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn canvas_by_id(document: &web::Document, id: &str) -> Option<web::HtmlCanvasElement> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<web::HtmlCanvasElement>().ok())
}

/// 2D context, or None when the canvas cannot provide one. Callers treat the
/// absence as "draw nothing" rather than an error.
pub fn context_2d(canvas: &web::HtmlCanvasElement) -> Option<web::CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|obj| obj.dyn_into::<web::CanvasRenderingContext2d>().ok())
}

/// Resync the canvas backing store to the window's inner size.
/// Returns the applied size.
pub fn sync_canvas_to_window(canvas: &web::HtmlCanvasElement) -> (f32, f32) {
    let Some(w) = web::window() else {
        return (canvas.width() as f32, canvas.height() as f32);
    };
    let width = w
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0) as u32;
    let height = w
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0) as u32;
    canvas.set_width(width.max(1));
    canvas.set_height(height.max(1));
    (canvas.width() as f32, canvas.height() as f32)
}

/// A ResizeObserver kept alive (and disconnected) with this handle.
pub struct ResizeObserverHandle {
    observer: web::ResizeObserver,
    _closure: Closure<dyn FnMut(js_sys::Array)>,
}

impl ResizeObserverHandle {
    /// Observe `target`, reporting each content-box size change. Returns None
    /// when the host has no ResizeObserver support.
    pub fn observe(
        target: &web::Element,
        mut on_resize: impl FnMut(f32, f32) + 'static,
    ) -> Option<Self> {
        let closure = Closure::wrap(Box::new(move |entries: js_sys::Array| {
            if let Ok(entry) = entries.get(0).dyn_into::<web::ResizeObserverEntry>() {
                let rect = entry.content_rect();
                on_resize(rect.width() as f32, rect.height() as f32);
            }
        }) as Box<dyn FnMut(js_sys::Array)>);
        let observer = web::ResizeObserver::new(closure.as_ref().unchecked_ref()).ok()?;
        observer.observe(target);
        Some(Self {
            observer,
            _closure: closure,
        })
    }
}

impl Drop for ResizeObserverHandle {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
