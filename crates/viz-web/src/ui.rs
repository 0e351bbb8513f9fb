//! Debug panel: one `<input type="color">` bound to the shared material
//! color, driving both the mesh material and the point-cloud tint.

use std::cell::RefCell;
use std::rc::Rc;

use viz_core::{parse_hex_color, SceneState};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Bind `#material-color` to the scene's material color. A page without the
/// panel element is a silent no-op.
pub fn wire_color_panel(document: &web::Document, scene: Rc<RefCell<SceneState>>) {
    let Some(el) = document.get_element_by_id("material-color") else {
        return;
    };
    let Ok(input) = el.dyn_into::<web::HtmlInputElement>() else {
        log::warn!("#material-color is not an <input>");
        return;
    };
    let input_for_handler = input.clone();
    let closure = Closure::wrap(Box::new(move || {
        if let Some(rgb) = parse_hex_color(&input_for_handler.value()) {
            scene.borrow_mut().material_color = rgb;
        }
    }) as Box<dyn FnMut()>);
    let _ = input.add_event_listener_with_callback("input", closure.as_ref().unchecked_ref());
    closure.forget();
}
