use crate::constants::PLAY_TOGGLE_ID;
use web_sys as web;

#[inline]
pub fn show_play_toggle(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(PLAY_TOGGLE_ID) {
        _ = el.class_list().remove_1("hidden");
        // fallback for environments without CSS class
        _ = el.set_attribute("style", "");
    }
}

/// Reflect the play state on the toggle button: label is the action a click takes.
pub fn set_play_label(document: &web::Document, playing: bool) {
    if let Some(el) = document.get_element_by_id(PLAY_TOGGLE_ID) {
        el.set_text_content(Some(if playing { "Stop" } else { "Play" }));
        let cl = el.class_list();
        if playing {
            _ = cl.remove_1("paused");
        } else {
            _ = cl.add_1("paused");
        }
    }
}
