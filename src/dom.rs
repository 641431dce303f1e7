use crate::constants::{
    ATTR_BRUSH, ATTR_COLOR_SPACE, ATTR_IMAGE, ATTR_PLAY_TOGGLE, DEFAULT_BRUSH_URL,
    DEFAULT_IMAGE_URL, MAX_PIXEL_RATIO,
};
use crate::core::{SketchOptions, Viewport};
use crate::input;
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
    }
}

pub fn read_options(container: &web::Element) -> SketchOptions {
    let image = container.get_attribute(ATTR_IMAGE);
    let brush = container.get_attribute(ATTR_BRUSH);
    let color_space = container.get_attribute(ATTR_COLOR_SPACE);
    let play_toggle = container.get_attribute(ATTR_PLAY_TOGGLE);
    SketchOptions::from_attrs(
        image.as_deref(),
        brush.as_deref(),
        color_space.as_deref(),
        play_toggle.as_deref(),
        DEFAULT_IMAGE_URL,
        DEFAULT_BRUSH_URL,
    )
}

/// Append a canvas that fills `container`.
pub fn create_canvas(
    document: &web::Document,
    container: &web::Element,
) -> anyhow::Result<web::HtmlCanvasElement> {
    let canvas: web::HtmlCanvasElement = document
        .create_element("canvas")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    let style = canvas.style();
    _ = style.set_property("display", "block");
    _ = style.set_property("width", "100%");
    _ = style.set_property("height", "100%");
    container
        .append_child(&canvas)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    Ok(canvas)
}

/// CSS size of the container plus the capped device pixel ratio.
pub fn measure_viewport(container: &web::Element) -> Viewport {
    let rect = container.get_bounding_client_rect();
    let dpr = web::window()
        .map(|w| w.device_pixel_ratio())
        .unwrap_or(1.0);
    Viewport::new(
        rect.width() as f32,
        rect.height() as f32,
        input::capped_pixel_ratio(dpr, MAX_PIXEL_RATIO),
    )
}

pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement, viewport: &Viewport) {
    let (w_px, h_px) = viewport.backing_size();
    canvas.set_width(w_px);
    canvas.set_height(h_px);
}
