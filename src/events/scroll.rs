use super::PageWiring;
use crate::dom::EventListener;
use crate::layout::{self, DomLayout};

/// Recompute the active section from the current scroll offset and restyle
/// the navigation bar if it changed.
pub fn evaluate(w: &PageWiring) {
    let scroll_y = w.window.scroll_y().unwrap_or(0.0);
    let page = DomLayout::new(&w.document);
    let changed = w.state.borrow_mut().tracker.on_scroll(scroll_y, &page);
    if changed {
        let active = w.state.borrow().tracker.active();
        layout::highlight_nav(&w.document, active);
        log::debug!("[nav] active={} scroll_y={:.0}", active, scroll_y);
    }
}

/// Runs on every native scroll event; no throttling.
pub fn wire_scroll(w: &PageWiring) -> anyhow::Result<EventListener> {
    let w2 = w.clone();
    EventListener::new(&w.window, "scroll", move |_| evaluate(&w2))
}
