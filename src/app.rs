use crate::audio::AmbientPad;
use crate::constants::MOUNT_ID;
use crate::core::PageState;
use crate::dom::EventListener;
use crate::events::{self, PageWiring};
use crate::shell;
use crate::view::{self, PageProps};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

/// Everything the page holds on to while mounted. Dropping it unregisters
/// the listeners and shuts the ambient audio down.
struct MountedPage {
    root: web::Element,
    listeners: Vec<EventListener>,
    ambient: Rc<RefCell<Option<AmbientPad>>>,
}

impl Drop for MountedPage {
    fn drop(&mut self) {
        let count = self.listeners.len();
        self.listeners.clear();
        self.ambient.borrow_mut().take();
        self.root.set_inner_html("");
        log::info!("[app] unmounted, {} listeners released", count);
    }
}

thread_local! {
    static MOUNTED: RefCell<Option<MountedPage>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("alexdev-site starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    if let Err(e) = shell::apply_shell(&document) {
        log::warn!("[shell] {:?}", e);
    }
    mount_into(&window, &document)?;

    match shell::fonts_ready(&document).await {
        Ok(()) => log::info!("[shell] fonts ready"),
        Err(e) => log::debug!("[shell] font loading not observable: {:?}", e),
    }
    Ok(())
}

/// Render the page into `#app` and register its listeners. No-op while
/// already mounted.
#[wasm_bindgen]
pub fn mount() -> Result<(), JsValue> {
    let window = web::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;
    mount_into(&window, &document).map_err(|e| JsValue::from_str(&format!("{:?}", e)))
}

/// Tear the page down, releasing every listener it registered.
#[wasm_bindgen]
pub fn unmount() {
    let page = MOUNTED.with(|m| m.borrow_mut().take());
    if page.is_none() {
        log::debug!("[app] unmount requested while not mounted");
    }
}

fn mount_into(window: &web::Window, document: &web::Document) -> anyhow::Result<()> {
    if MOUNTED.with(|m| m.borrow().is_some()) {
        log::debug!("[app] already mounted");
        return Ok(());
    }
    let started = Instant::now();

    let root = document
        .get_element_by_id(MOUNT_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", MOUNT_ID))?;
    let props = PageProps {
        year: js_sys::Date::new_0().get_full_year() as i32,
        ..PageProps::default()
    };
    root.set_inner_html(&view::render_page(&props));

    let wiring = PageWiring {
        window: window.clone(),
        document: document.clone(),
        root: root.clone(),
        state: Rc::new(RefCell::new(PageState::default())),
        ambient: Rc::new(RefCell::new(None)),
    };

    let mut listeners = vec![
        events::pointer::wire_pointermove(&wiring)?,
        events::scroll::wire_scroll(&wiring)?,
        events::click::wire_clicks(&wiring)?,
    ];
    listeners.extend(events::form::wire_contact_form(&wiring)?);

    // A reload can restore a scrolled position before any scroll event fires.
    events::scroll::evaluate(&wiring);

    log::info!(
        "[app] mounted with {} listeners in {:.1} ms",
        listeners.len(),
        started.elapsed().as_secs_f64() * 1000.0
    );
    MOUNTED.with(|m| {
        *m.borrow_mut() = Some(MountedPage {
            root,
            listeners,
            ambient: wiring.ambient.clone(),
        })
    });
    Ok(())
}
