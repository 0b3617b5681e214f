use super::PageWiring;
use crate::audio;
use crate::constants::PLAYBACK_ID;
use crate::core::navigate;
use crate::dom::EventListener;
use crate::layout::DomLayout;
use crate::view::playback_button_content;
use wasm_bindgen::JsCast;
use web_sys as web;

/// One delegated click listener on the mount root covers every `data-nav`
/// control and the playback toggle.
pub fn wire_clicks(w: &PageWiring) -> anyhow::Result<EventListener> {
    let w2 = w.clone();
    EventListener::new(&w.root, "click", move |ev: web::Event| {
        let Some(target) = ev.target().and_then(|t| t.dyn_into::<web::Element>().ok()) else {
            return;
        };

        if let Ok(Some(control)) = target.closest("[data-nav]") {
            if let Some(id) = control.get_attribute("data-nav") {
                let layout = DomLayout::new(&w2.document);
                match navigate(&layout, &id) {
                    Some(section) => log::debug!("[nav] scroll to {}", section),
                    None => log::debug!("[nav] ignored navigation to {:?}", id),
                }
            }
            return;
        }

        if let Ok(Some(_)) = target.closest(&format!("#{}", PLAYBACK_ID)) {
            toggle_playback(&w2);
        }
    })
}

fn toggle_playback(w: &PageWiring) {
    let (playing, label) = {
        let mut state = w.state.borrow_mut();
        let playing = state.playback.toggle();
        (playing, state.playback.action_label())
    };
    log::info!("[audio] playing={}", playing);

    if let Some(button) = w.document.get_element_by_id(PLAYBACK_ID) {
        button.set_inner_html(&playback_button_content(playing));
        _ = button.set_attribute("aria-label", label);
        _ = button.set_attribute("aria-pressed", if playing { "true" } else { "false" });
    }
    audio::set_playing(&w.ambient, playing);
}
