use crate::dom;
use crate::location::WebLocation;
use crate::overlay;
use crate::render::JsRenderer;
use fractal_core::Explorer;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub explorer: Rc<RefCell<Explorer<WebLocation>>>,
    pub canvas: web::HtmlCanvasElement,
    pub document: web::Document,
    pub renderer: JsRenderer,
    // Last values mirrored into the DOM
    pub message_revision: u64,
    pub help_visible: Option<bool>,
    pub density: f64,
}

impl FrameContext {
    pub fn frame(&mut self, now_ms: f64) {
        let mut explorer = self.explorer.borrow_mut();

        if explorer.density() != self.density {
            self.density = explorer.density();
            dom::sync_canvas_backing_size(&self.canvas, self.density);
            log::info!("[frame] density={}", self.density);
        }

        let viewport = dom::backing_viewport(&self.canvas);
        explorer.render(now_ms, viewport, &mut self.renderer);

        let revision = explorer.messages().revision();
        if revision != self.message_revision {
            self.message_revision = revision;
            overlay::render_messages(&self.document, explorer.messages());
        }
        let help = explorer.help_visible();
        if self.help_visible != Some(help) {
            self.help_visible = Some(help);
            overlay::set_help(&self.document, help);
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move |now_ms: f64| {
        frame_ctx_tick.borrow_mut().frame(now_ms);
        request_frame(&tick_clone);
    }) as Box<dyn FnMut(f64)>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
