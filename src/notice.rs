use crate::constants::CONTACT_STATUS_ID;
use web_sys as web;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Info,
    Error,
}

impl Tone {
    fn class(self) -> &'static str {
        match self {
            Tone::Info => "text-sm text-cyan-300",
            Tone::Error => "text-sm text-pink-400",
        }
    }
}

/// Show a message in the contact form's status line.
#[inline]
pub fn show(document: &web::Document, text: &str, tone: Tone) {
    if let Some(el) = document.get_element_by_id(CONTACT_STATUS_ID) {
        el.set_text_content(Some(text));
        el.set_class_name(tone.class());
        _ = el.set_attribute("style", "");
    }
}

#[inline]
pub fn hide(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(CONTACT_STATUS_ID) {
        el.set_text_content(None);
        _ = el.set_attribute("style", "display:none");
    }
}
