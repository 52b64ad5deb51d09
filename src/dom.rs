use fractal_core::Viewport;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) {
    if let Some(el) = document.get_element_by_id(element_id) {
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
        _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    } else {
        log::warn!("[dom] no #{} element; click handler not wired", element_id);
    }
}

/// Size the canvas backing store to its CSS box times `density`.
///
/// `density` replaces the device pixel ratio so it can be traded for speed.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement, density: f64) {
    let rect = canvas.get_bounding_client_rect();
    let w_px = ((rect.width() * density) as u32).max(1);
    let h_px = ((rect.height() * density) as u32).max(1);
    if canvas.width() != w_px {
        canvas.set_width(w_px);
    }
    if canvas.height() != h_px {
        canvas.set_height(h_px);
    }
}

/// Backing-store size, used for the `resolution` uniform.
#[inline]
pub fn backing_viewport(canvas: &web::HtmlCanvasElement) -> Viewport {
    Viewport::new(canvas.width() as f64, canvas.height() as f64)
}

/// CSS box size, used for pointer and touch math.
#[inline]
pub fn css_viewport(canvas: &web::HtmlCanvasElement) -> Viewport {
    let rect = canvas.get_bounding_client_rect();
    Viewport::new(rect.width(), rect.height())
}

/// Client coordinates relative to the canvas' top-left corner, CSS px.
#[inline]
pub fn client_to_canvas(canvas: &web::HtmlCanvasElement, client_x: f64, client_y: f64) -> (f64, f64) {
    let rect = canvas.get_bounding_client_rect();
    (client_x - rect.left(), client_y - rect.top())
}
