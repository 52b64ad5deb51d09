#![cfg(target_arch = "wasm32")]
use fractal_core::palette::PaletteOrder;
use fractal_core::{Action, Explorer};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod frame;
mod location;
mod overlay;
mod render;

use constants::{CANVAS_ID, HELP_CLOSE_ID, HELP_OPEN_ID};
use location::WebLocation;

type SharedExplorer = Rc<RefCell<Explorer<WebLocation>>>;

fn wire_canvas_resize(canvas: &web::HtmlCanvasElement, explorer: &SharedExplorer) {
    let canvas_resize = canvas.clone();
    let explorer = explorer.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        let density = explorer.borrow().density();
        dom::sync_canvas_backing_size(&canvas_resize, density);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

fn wire_hashchange(window: &web::Window, explorer: &SharedExplorer) {
    let explorer = explorer.clone();
    let closure = Closure::wrap(Box::new(move || {
        if let Some(report) = explorer.borrow_mut().hash_changed() {
            log::info!("[url] hashchange restored {} field(s)", report.applied);
        }
    }) as Box<dyn FnMut()>);
    _ = window.add_event_listener_with_callback("hashchange", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_help_buttons(document: &web::Document, explorer: &SharedExplorer) {
    let explorer_close = explorer.clone();
    dom::add_click_listener(document, HELP_CLOSE_ID, move || {
        explorer_close.borrow_mut().apply(Action::HideHelp);
    });
    let explorer_open = explorer.clone();
    dom::add_click_listener(document, HELP_OPEN_ID, move || {
        explorer_open.borrow_mut().apply(Action::ToggleHelp);
    });
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("fractal-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas_el = document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", CANVAS_ID))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    let order = PaletteOrder::shuffled(&mut rand::thread_rng());
    let mut explorer = Explorer::new(WebLocation::new(window.clone())).with_palette_order(order);
    explorer.start();
    let density = explorer.density();
    let explorer: SharedExplorer = Rc::new(RefCell::new(explorer));

    dom::sync_canvas_backing_size(&canvas, density);
    wire_canvas_resize(&canvas, &explorer);
    wire_hashchange(&window, &explorer);
    wire_help_buttons(&document, &explorer);

    events::wire_global_keydown(explorer.clone());
    events::wire_input_handlers(events::InputWiring {
        canvas: canvas.clone(),
        explorer: explorer.clone(),
        drag_state: Rc::new(RefCell::new(events::DragState::default())),
    });
    events::wire_touch_handlers(&canvas, explorer.clone());

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        explorer,
        canvas: canvas.clone(),
        document,
        renderer: render::JsRenderer::new(canvas),
        message_revision: 0,
        help_visible: None,
        density,
    }));
    frame::start_loop(frame_ctx);

    Ok(())
}
