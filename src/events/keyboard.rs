use crate::constants::PLAY_TOGGLE_ID;
use crate::frame::FrameLoop;
use crate::input::{key_action, KeyAction};
use crate::overlay;
use wasm_bindgen::JsCast;
use web_sys as web;

fn toggle_play(frame_loop: &FrameLoop) {
    let playing = frame_loop.toggle();
    log::info!("[keys] playing={}", playing);
    if let Some(document) = crate::dom::window_document() {
        overlay::set_play_label(&document, playing);
    }
}

/// Space flips play state; every other key keeps its default behaviour.
pub fn handle_global_keydown(ev: &web::KeyboardEvent, frame_loop: &FrameLoop) {
    if key_action(&ev.key()) == Some(KeyAction::TogglePlay) {
        toggle_play(frame_loop);
        ev.prevent_default();
    }
}

pub fn wire_global_keydown(frame_loop: FrameLoop) {
    if let Some(window) = web::window() {
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
                handle_global_keydown(&ev, &frame_loop);
            }) as Box<dyn FnMut(_)>);
        _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

pub fn wire_play_toggle_button(document: &web::Document, frame_loop: FrameLoop) {
    overlay::show_play_toggle(document);
    overlay::set_play_label(document, frame_loop.is_playing());
    crate::dom::add_click_listener(document, PLAY_TOGGLE_ID, move || toggle_play(&frame_loop));
}
