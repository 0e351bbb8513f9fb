//! Window event wiring. Handlers only write raw input into the shared
//! [`SceneState`]; all derivation happens in the frame loop. Everything runs
//! on the single browser thread, so plain `Rc<RefCell<_>>` sharing is enough.

use std::cell::RefCell;
use std::rc::Rc;

use viz_core::SceneState;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::dom;

#[derive(Clone)]
pub struct InputWiring {
    pub canvas: web::HtmlCanvasElement,
    pub scene: Rc<RefCell<SceneState>>,
}

pub fn wire_input_handlers(w: InputWiring) {
    wire_scroll(&w);
    wire_pointermove(&w);
    wire_resize(&w);
}

fn wire_scroll(w: &InputWiring) {
    let w = w.clone();
    let closure = Closure::wrap(Box::new(move || {
        w.scene.borrow_mut().set_scroll(dom::scroll_offset());
    }) as Box<dyn FnMut()>);
    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

fn wire_pointermove(w: &InputWiring) {
    let w = w.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        w.scene
            .borrow_mut()
            .set_pointer_pixels(ev.client_x() as f32, ev.client_y() as f32);
    }) as Box<dyn FnMut(_)>);
    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

fn wire_resize(w: &InputWiring) {
    let w = w.clone();
    let closure = Closure::wrap(Box::new(move || {
        let (vw, vh) = dom::viewport_size();
        w.scene.borrow_mut().set_viewport(vw, vh);
        // The surface reconfigures from the backing size on the next frame.
        dom::sync_canvas_backing_size(&w.canvas);
    }) as Box<dyn FnMut()>);
    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
