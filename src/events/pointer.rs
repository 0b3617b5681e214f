use super::PageWiring;
use crate::constants::GLOW_ID;
use crate::core::glow::glow_offsets_px;
use crate::dom::{self, EventListener};
use wasm_bindgen::JsCast;
use web_sys as web;

/// Trail the pointer with the background glow.
pub fn wire_pointermove(w: &PageWiring) -> anyhow::Result<EventListener> {
    let state = w.state.clone();
    let glow = dom::html_element_by_id(&w.document, GLOW_ID);
    if glow.is_none() {
        log::warn!("[glow] #{} missing; pointer tracking only", GLOW_ID);
    }

    EventListener::new(&w.window, "mousemove", move |ev: web::Event| {
        let Some(ev) = ev.dyn_ref::<web::MouseEvent>() else {
            return;
        };
        let origin = state
            .borrow_mut()
            .cursor
            .update(ev.client_x() as f32, ev.client_y() as f32);

        if let Some(glow) = &glow {
            let (left, top) = glow_offsets_px(origin);
            let style = glow.style();
            _ = style.set_property("left", &left);
            _ = style.set_property("top", &top);
        }
    })
}
