use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// A DOM event listener tied to the lifetime of this value.
///
/// Registration and removal are symmetric: dropping the binding removes the
/// listener, and removing twice is a no-op. Effects collect their bindings so
/// unmounting cannot leak handlers across repeated mounts.
pub struct EventBinding {
    target: web::EventTarget,
    event: &'static str,
    closure: Option<Closure<dyn FnMut(web::Event)>>,
}

impl EventBinding {
    pub fn listen(
        target: &web::EventTarget,
        event: &'static str,
        handler: impl FnMut(web::Event) + 'static,
    ) -> Self {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        let _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
        Self {
            target: target.clone(),
            event,
            closure: Some(closure),
        }
    }

    pub fn unlisten(&mut self) {
        if let Some(closure) = self.closure.take() {
            let _ = self
                .target
                .remove_event_listener_with_callback(self.event, closure.as_ref().unchecked_ref());
        }
    }
}

impl Drop for EventBinding {
    fn drop(&mut self) {
        self.unlisten();
    }
}
