use crate::dom;
use crate::location::WebLocation;
use fractal_core::{Explorer, TouchPoint};
use smallvec::SmallVec;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

type Points = SmallVec<[TouchPoint; 4]>;

/// Changed touches in canvas-relative CSS px.
fn changed_points(ev: &web::TouchEvent, canvas: &web::HtmlCanvasElement) -> Points {
    let list = ev.changed_touches();
    (0..list.length())
        .filter_map(|i| list.get(i))
        .map(|t| {
            let (x, y) = dom::client_to_canvas(canvas, t.client_x() as f64, t.client_y() as f64);
            TouchPoint::new(t.identifier(), x, y)
        })
        .collect()
}

fn listen(
    canvas: &web::HtmlCanvasElement,
    kind: &str,
    mut handler: impl FnMut(&web::TouchEvent) + 'static,
) {
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::TouchEvent| {
        // Keep the browser from scrolling, zooming or synthesizing clicks
        ev.prevent_default();
        handler(&ev);
    }) as Box<dyn FnMut(_)>);
    let opts = web::AddEventListenerOptions::new();
    opts.set_passive(false);
    _ = canvas.add_event_listener_with_callback_and_add_event_listener_options(
        kind,
        closure.as_ref().unchecked_ref(),
        &opts,
    );
    closure.forget();
}

pub fn wire_touch_handlers(
    canvas: &web::HtmlCanvasElement,
    explorer: Rc<RefCell<Explorer<WebLocation>>>,
) {
    {
        let explorer = explorer.clone();
        let c = canvas.clone();
        listen(canvas, "touchstart", move |ev| {
            explorer.borrow_mut().touch_start(&changed_points(ev, &c));
        });
    }
    {
        let explorer = explorer.clone();
        let c = canvas.clone();
        listen(canvas, "touchmove", move |ev| {
            if let Some(g) = explorer.borrow_mut().touch_move(&changed_points(ev, &c)) {
                log::debug!(
                    "[touch] {:?} {:+.1} (+{} fingers)",
                    g.axis,
                    g.delta,
                    g.additional_fingers
                );
            }
        });
    }
    {
        let explorer = explorer.clone();
        let c = canvas.clone();
        listen(canvas, "touchend", move |ev| {
            let surface = dom::css_viewport(&c);
            explorer
                .borrow_mut()
                .touch_end(&changed_points(ev, &c), surface);
        });
    }
    {
        let c = canvas.clone();
        listen(canvas, "touchcancel", move |ev| {
            let ids: SmallVec<[i32; 4]> = changed_points(ev, &c).iter().map(|p| p.id).collect();
            explorer.borrow_mut().touch_cancel(&ids);
        });
    }
}
