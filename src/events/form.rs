use super::PageWiring;
use crate::constants::CONTACT_FORM_ID;
use crate::core::ContactForm;
use crate::dom::EventListener;
use crate::notice::{self, Tone};
use wasm_bindgen::JsCast;
use web_sys as web;

fn field_value(form: &web::Element, name: &str) -> String {
    let selector = format!(r#"[name="{}"]"#, name);
    let Ok(Some(el)) = form.query_selector(&selector) else {
        return String::new();
    };
    if let Some(input) = el.dyn_ref::<web::HtmlInputElement>() {
        return input.value();
    }
    if let Some(area) = el.dyn_ref::<web::HtmlTextAreaElement>() {
        return area.value();
    }
    String::new()
}

pub fn read_contact_form(form: &web::Element) -> ContactForm {
    ContactForm {
        name: field_value(form, "name"),
        email: field_value(form, "email"),
        message: field_value(form, "message"),
    }
}

/// Intercept the contact form: validate, then hand the message to the
/// visitor's mail client. Nothing is sent from the page itself.
pub fn wire_contact_form(w: &PageWiring) -> anyhow::Result<Option<EventListener>> {
    let Some(form) = w.document.get_element_by_id(CONTACT_FORM_ID) else {
        log::warn!("[contact] #{} missing; form left unwired", CONTACT_FORM_ID);
        return Ok(None);
    };
    let w2 = w.clone();
    let form_el = form.clone();

    let listener = EventListener::new(&form, "submit", move |ev: web::Event| {
        ev.prevent_default();
        notice::hide(&w2.document);

        match read_contact_form(&form_el).validate() {
            Ok(draft) => {
                let url = draft.mailto_url(|s| String::from(js_sys::encode_uri_component(s)));
                match w2.window.location().set_href(&url) {
                    Ok(()) => {
                        log::info!("[contact] handed message to mail client");
                        notice::show(&w2.document, "Opening your mail client...", Tone::Info);
                        if let Some(form) = form_el.dyn_ref::<web::HtmlFormElement>() {
                            form.reset();
                        }
                    }
                    Err(e) => {
                        log::warn!("[contact] mailto navigation failed: {:?}", e);
                        notice::show(
                            &w2.document,
                            &format!(
                                "Couldn't open your mail client. Write to {} directly.",
                                draft.to
                            ),
                            Tone::Error,
                        );
                    }
                }
            }
            Err(e) => {
                log::debug!("[contact] rejected submission: {}", e);
                notice::show(&w2.document, &e.to_string(), Tone::Error);
            }
        }
    })?;
    Ok(Some(listener))
}
