use crate::core::Sketch;
use crate::input;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Feed window-level pointer moves into the sketch.
///
/// Only the latest position is stored; activation happens once per frame in
/// the frame driver, so event rate does not affect ripple density.
pub fn wire_pointermove(container: &web::Element, sketch: Rc<RefCell<Sketch>>) {
    let container = container.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let pos = input::pointer_element_px(&ev, &container);
        if !pos.is_finite() {
            return;
        }
        sketch.borrow_mut().pointer_moved(pos.x, pos.y);
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    }

    closure.forget();
}
