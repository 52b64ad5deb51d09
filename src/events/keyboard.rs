use crate::location::WebLocation;
use fractal_core::{action_for_key, Explorer, Modifiers};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn modifiers_of(ev: &web::KeyboardEvent) -> Modifiers {
    Modifiers {
        shift: ev.shift_key(),
        ctrl: ev.ctrl_key(),
        alt: ev.alt_key(),
        meta: ev.meta_key(),
    }
}

pub fn handle_global_keydown(ev: &web::KeyboardEvent, explorer: &Rc<RefCell<Explorer<WebLocation>>>) {
    let code = ev.code();
    let Some(action) = action_for_key(&code, modifiers_of(ev)) else {
        return;
    };
    log::debug!("[keys] {} -> {:?}", code, action);
    explorer.borrow_mut().apply(action);
    // Space scrolls, Backspace navigates back in some browsers
    ev.prevent_default();
}

pub fn wire_global_keydown(explorer: Rc<RefCell<Explorer<WebLocation>>>) {
    if let Some(window) = web::window() {
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
                handle_global_keydown(&ev, &explorer);
            }) as Box<dyn FnMut(_)>);
        _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
