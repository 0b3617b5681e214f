use crate::core::{PageLayout, Section, SectionBounds};
use crate::dom;
use crate::view::nav_button_class;
use web_sys as web;

/// [`PageLayout`] over the live document.
pub struct DomLayout<'a> {
    document: &'a web::Document,
}

impl<'a> DomLayout<'a> {
    pub fn new(document: &'a web::Document) -> Self {
        Self { document }
    }
}

impl PageLayout for DomLayout<'_> {
    fn bounds(&self, section: Section) -> Option<SectionBounds> {
        let el = dom::html_element_by_id(self.document, section.id())?;
        Some(SectionBounds::new(
            el.offset_top() as f64,
            el.offset_height() as f64,
        ))
    }

    fn scroll_into_view(&self, section: Section) -> bool {
        match self.document.get_element_by_id(section.id()) {
            Some(el) => {
                let opts = web::ScrollIntoViewOptions::new();
                opts.set_behavior(web::ScrollBehavior::Smooth);
                el.scroll_into_view_with_scroll_into_view_options(&opts);
                true
            }
            None => false,
        }
    }
}

/// Restyle the navigation buttons for the given active section.
pub fn highlight_nav(document: &web::Document, active: Section) {
    for section in Section::ALL {
        let selector = format!(r#"[data-nav-item="{}"]"#, section.id());
        if let Ok(Some(el)) = document.query_selector(&selector) {
            el.set_class_name(&nav_button_class(section, active));
            if section == active {
                _ = el.set_attribute("aria-current", "true");
            } else {
                _ = el.remove_attribute("aria-current");
            }
        }
    }
}
