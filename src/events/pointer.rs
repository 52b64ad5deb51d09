use crate::constants::CLICK_SLOP_PX;
use crate::dom;
use crate::location::WebLocation;
use fractal_core::{wheel_action, Action, Explorer};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Press/drag tracking for one mouse or pen pointer.
#[derive(Default, Clone, Copy)]
pub struct DragState {
    pub active: bool,
    pub moved: bool,
    pub pointer_id: i32,
    pub start: (f64, f64),
    pub last: (f64, f64),
}

#[derive(Clone)]
pub struct InputWiring {
    pub canvas: web::HtmlCanvasElement,
    pub explorer: Rc<RefCell<Explorer<WebLocation>>>,
    pub drag_state: Rc<RefCell<DragState>>,
}

pub fn wire_input_handlers(w: InputWiring) {
    wire_pointerdown(&w);
    wire_pointermove(&w);
    wire_pointerup(&w);
    wire_wheel(&w);
}

// Touch input goes through the gesture recognizer instead
#[inline]
fn is_touch(ev: &web::PointerEvent) -> bool {
    ev.pointer_type() == "touch"
}

fn wire_pointerdown(w: &InputWiring) {
    let w = w.clone();
    let canvas_for_listener = w.canvas.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        if is_touch(&ev) || ev.button() != 0 {
            return;
        }
        let pos = dom::client_to_canvas(&w.canvas, ev.client_x() as f64, ev.client_y() as f64);
        *w.drag_state.borrow_mut() = DragState {
            active: true,
            moved: false,
            pointer_id: ev.pointer_id(),
            start: pos,
            last: pos,
        };
        _ = w.canvas.set_pointer_capture(ev.pointer_id());
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);
    _ = canvas_for_listener
        .add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointermove(w: &InputWiring) {
    let w = w.clone();
    let canvas_for_listener = w.canvas.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let mut ds = w.drag_state.borrow_mut();
        if !ds.active || ds.pointer_id != ev.pointer_id() {
            return;
        }
        let pos = dom::client_to_canvas(&w.canvas, ev.client_x() as f64, ev.client_y() as f64);
        if !ds.moved {
            let (sx, sy) = ds.start;
            if (pos.0 - sx).hypot(pos.1 - sy) < CLICK_SLOP_PX {
                return;
            }
            ds.moved = true;
            log::debug!("[mouse] begin drag");
        }
        let (dx, dy) = (pos.0 - ds.last.0, pos.1 - ds.last.1);
        ds.last = pos;
        drop(ds);
        let surface = dom::css_viewport(&w.canvas);
        w.explorer
            .borrow_mut()
            .apply(Action::Drag { dx, dy, surface });
    }) as Box<dyn FnMut(_)>);
    _ = canvas_for_listener
        .add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointerup(w: &InputWiring) {
    let w = w.clone();
    let canvas_for_listener = w.canvas.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let ds = *w.drag_state.borrow();
        if !ds.active || ds.pointer_id != ev.pointer_id() {
            return;
        }
        w.drag_state.borrow_mut().active = false;
        _ = w.canvas.release_pointer_capture(ev.pointer_id());
        if ds.moved {
            return;
        }
        let (x, y) = dom::client_to_canvas(&w.canvas, ev.client_x() as f64, ev.client_y() as f64);
        let surface = dom::css_viewport(&w.canvas);
        log::debug!("[mouse] recentre at ({:.0}, {:.0})", x, y);
        w.explorer
            .borrow_mut()
            .apply(Action::CenterOn { x, y, surface });
    }) as Box<dyn FnMut(_)>);
    _ = canvas_for_listener
        .add_event_listener_with_callback("pointerup", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_wheel(w: &InputWiring) {
    let w = w.clone();
    let canvas_for_listener = w.canvas.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::WheelEvent| {
        // Trackpad pinch arrives as ctrl+wheel; keep the page from zooming
        ev.prevent_default();
        if let Some(action) = wheel_action(ev.delta_y()) {
            w.explorer.borrow_mut().apply(action);
        }
    }) as Box<dyn FnMut(_)>);
    let opts = web::AddEventListenerOptions::new();
    opts.set_passive(false);
    _ = canvas_for_listener.add_event_listener_with_callback_and_add_event_listener_options(
        "wheel",
        closure.as_ref().unchecked_ref(),
        &opts,
    );
    closure.forget();
}
