use crate::constants::{EXPORT_FILE_NAME, RENDERER_GLOBAL};
use fractal_core::{Frame, Renderer};
use js_sys::{Float32Array, Function, Object, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// Hands uniforms to the page's JS renderer (`window.fractalRenderer.draw`).
///
/// The renderer may register itself after start-up, so it is looked up on
/// every frame until found.
pub struct JsRenderer {
    canvas: web::HtmlCanvasElement,
    target: Option<(JsValue, Function)>,
    warned: bool,
}

impl JsRenderer {
    pub fn new(canvas: web::HtmlCanvasElement) -> Self {
        Self {
            canvas,
            target: None,
            warned: false,
        }
    }

    fn resolve(&mut self) -> Option<&(JsValue, Function)> {
        if self.target.is_none() {
            let found = web::window()
                .and_then(|w| Reflect::get(&w, &JsValue::from_str(RENDERER_GLOBAL)).ok())
                .filter(|r| r.is_object())
                .and_then(|r| {
                    let draw = Reflect::get(&r, &JsValue::from_str("draw")).ok()?;
                    let draw = draw.dyn_into::<Function>().ok()?;
                    Some((r, draw))
                });
            match found {
                Some(t) => {
                    log::info!("[render] renderer attached");
                    self.target = Some(t);
                }
                None if !self.warned => {
                    log::warn!("[render] window.{} missing; skipping frames", RENDERER_GLOBAL);
                    self.warned = true;
                }
                None => {}
            }
        }
        self.target.as_ref()
    }

    fn export_png(&self) {
        let url = match self.canvas.to_data_url_with_type("image/png") {
            Ok(u) => u,
            Err(e) => {
                log::error!("[render] export failed: {:?}", e);
                return;
            }
        };
        let Some(doc) = crate::dom::window_document() else {
            return;
        };
        let anchor = doc
            .create_element("a")
            .ok()
            .and_then(|el| el.dyn_into::<web::HtmlAnchorElement>().ok());
        if let Some(a) = anchor {
            a.set_href(&url);
            a.set_download(EXPORT_FILE_NAME);
            a.click();
            log::info!("[render] exported {}", EXPORT_FILE_NAME);
        }
    }
}

fn set(obj: &Object, key: &str, value: &JsValue) {
    _ = Reflect::set(obj, &JsValue::from_str(key), value);
}

fn vec2(v: [f32; 2]) -> JsValue {
    Float32Array::from(&v[..]).into()
}

/// `u_*` uniform object in the shape the JS renderer reads.
pub fn uniforms_object(frame: &Frame<'_>) -> Object {
    let u = &frame.uniforms;
    let obj = Object::new();
    set(&obj, "u_resolution", &vec2(u.resolution));
    set(&obj, "u_center", &vec2(u.center));
    set(&obj, "u_c", &vec2(u.c));
    set(&obj, "u_zoom", &JsValue::from_f64(u.zoom as f64));
    set(&obj, "u_fractal", &JsValue::from_f64(u.fractal as f64));
    set(&obj, "u_exponent", &JsValue::from_f64(u.exponent as f64));
    set(&obj, "u_frame", &JsValue::from_f64(u.frame as f64));
    set(&obj, "u_escape_radius", &JsValue::from_f64(u.escape_radius as f64));
    set(
        &obj,
        "u_log_escape_radius",
        &JsValue::from_f64(u.log_escape_radius as f64),
    );
    set(&obj, "u_spacing", &JsValue::from_f64(u.spacing as f64));
    set(&obj, "u_smoothing", &JsValue::from_f64(u.smoothing as f64));
    set(&obj, "u_colors", &Float32Array::from(frame.colors).into());
    obj
}

impl Renderer for JsRenderer {
    fn draw(&mut self, frame: &Frame<'_>) {
        let Some((this, draw)) = self.resolve() else {
            return;
        };
        let uniforms = uniforms_object(frame);
        if let Err(e) = draw.call1(this, &uniforms) {
            log::error!("[render] draw threw: {:?}", e);
            return;
        }
        if frame.export {
            self.export_png();
        }
    }
}
