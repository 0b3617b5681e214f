//! Root shell: document language, head metadata and typography.

use crate::constants::{FONT_FAMILY, FONT_STYLESHEET_URL};
use crate::core::SITE;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// `(attribute, key, content)` triples for the `<meta>` tags in the head.
fn meta_tags() -> [(&'static str, &'static str, &'static str); 11] {
    [
        ("name", "description", SITE.description),
        ("name", "keywords", SITE.keywords),
        ("name", "author", SITE.author),
        ("name", "generator", SITE.generator),
        ("property", "og:title", SITE.share_title),
        ("property", "og:description", SITE.tagline),
        ("property", "og:type", "website"),
        ("property", "og:locale", SITE.locale),
        ("name", "twitter:card", "summary_large_image"),
        ("name", "twitter:title", SITE.share_title),
        ("name", "twitter:description", SITE.tagline),
    ]
}

pub fn apply_shell(document: &web::Document) -> anyhow::Result<()> {
    if let Some(root) = document.document_element() {
        _ = root.set_attribute("lang", "en");
    }
    document.set_title(SITE.title);

    let head = document
        .head()
        .ok_or_else(|| anyhow::anyhow!("document has no <head>"))?;
    for (attr, key, content) in meta_tags() {
        upsert_meta(document, &head, attr, key, content)?;
    }
    ensure_font_stylesheet(document, &head)?;

    if let Some(body) = document.body() {
        _ = body.style().set_property("font-family", FONT_FAMILY);
        _ = body.class_list().add_1("font-inter");
    }
    log::info!("[shell] head metadata applied");
    Ok(())
}

fn upsert_meta(
    document: &web::Document,
    head: &web::HtmlHeadElement,
    attr: &str,
    key: &str,
    content: &str,
) -> anyhow::Result<()> {
    let selector = format!(r#"meta[{}="{}"]"#, attr, key);
    let existing = document.query_selector(&selector).ok().flatten();
    let el = match existing {
        Some(el) => el,
        None => {
            let el = document
                .create_element("meta")
                .map_err(|e| anyhow::anyhow!("{:?}", e))?;
            _ = el.set_attribute(attr, key);
            head.append_child(&el)
                .map_err(|e| anyhow::anyhow!("{:?}", e))?;
            el
        }
    };
    _ = el.set_attribute("content", content);
    Ok(())
}

fn ensure_font_stylesheet(
    document: &web::Document,
    head: &web::HtmlHeadElement,
) -> anyhow::Result<()> {
    let selector = format!(r#"link[href="{}"]"#, FONT_STYLESHEET_URL);
    if let Ok(Some(_)) = document.query_selector(&selector) {
        return Ok(());
    }
    let link = document
        .create_element("link")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    _ = link.set_attribute("rel", "stylesheet");
    _ = link.set_attribute("href", FONT_STYLESHEET_URL);
    head.append_child(&link)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    Ok(())
}

/// Wait for `document.fonts.ready`. Browsers without the Font Loading API
/// resolve immediately.
pub async fn fonts_ready(document: &web::Document) -> Result<(), JsValue> {
    let fonts = js_sys::Reflect::get(document, &JsValue::from_str("fonts"))?;
    if fonts.is_undefined() {
        return Ok(());
    }
    let ready = js_sys::Reflect::get(&fonts, &JsValue::from_str("ready"))?;
    let promise = ready.dyn_into::<js_sys::Promise>()?;
    wasm_bindgen_futures::JsFuture::from(promise).await?;
    Ok(())
}
