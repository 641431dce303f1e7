#![cfg(target_arch = "wasm32")]
use crate::constants::{
    CONTAINER_ID, FALLBACK_BRUSH_SIZE, FALLBACK_IMAGE_HEIGHT, FALLBACK_IMAGE_WIDTH,
};
use crate::core::{soft_brush, water_gradient, Sketch};
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod assets;
mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod input;
mod overlay;
mod render;

fn wire_resize(container: &web::Element, canvas: &web::HtmlCanvasElement, sketch: &Rc<RefCell<Sketch>>) {
    let container = container.clone();
    let canvas = canvas.clone();
    let sketch = sketch.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        let viewport = dom::measure_viewport(&container);
        dom::sync_canvas_backing_size(&canvas, &viewport);
        if sketch.borrow_mut().resize(viewport) {
            log::info!(
                "[resize] {}x{} css @{}x",
                viewport.width,
                viewport.height,
                viewport.pixel_ratio
            );
        }
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("ink-ripple starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    // One sketch per page
    static STARTED: AtomicBool = AtomicBool::new(false);
    if STARTED.swap(true, Ordering::SeqCst) {
        return Ok(());
    }

    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    let container = document
        .get_element_by_id(CONTAINER_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", CONTAINER_ID))?;

    let options = dom::read_options(&container);
    log::info!(
        "[init] image={} brush={} color_space={:?} play_toggle={}",
        options.image_url,
        options.brush_url,
        options.color_space,
        options.play_toggle
    );

    let canvas = dom::create_canvas(&document, &container)?;
    let viewport = dom::measure_viewport(&container);
    dom::sync_canvas_backing_size(&canvas, &viewport);

    let sketch = Rc::new(RefCell::new(Sketch::new(viewport, rand::random::<u64>())));
    wire_resize(&container, &canvas, &sketch);

    // Same limits the device is requested with in `Compositor::new`
    let max_dim = wgpu::Limits::default().max_texture_dimension_2d;
    let brush = assets::load_or(&options.brush_url, max_dim, || {
        soft_brush(FALLBACK_BRUSH_SIZE)
    })
    .await;
    let base = assets::load_or(&options.image_url, max_dim, || {
        water_gradient(FALLBACK_IMAGE_WIDTH, FALLBACK_IMAGE_HEIGHT)
    })
    .await;
    sketch.borrow_mut().set_image_aspect(base.aspect());

    let gpu = render::Compositor::new(&canvas, options.color_space, &base, &brush).await?;

    events::wire_pointermove(&container, sketch.clone());

    let frame_loop = frame::FrameLoop::new(frame::FrameContext::new(sketch.clone(), gpu));
    if options.play_toggle {
        events::wire_play_toggle_button(&document, frame_loop.clone());
        events::wire_global_keydown(frame_loop.clone());
    }

    frame_loop.resume();
    Ok(())
}
