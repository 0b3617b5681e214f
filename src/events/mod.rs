pub mod click;
pub mod form;
pub mod pointer;
pub mod scroll;

use crate::audio::AmbientPad;
use crate::core::PageState;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Handles shared by every page event handler.
#[derive(Clone)]
pub struct PageWiring {
    pub window: web::Window,
    pub document: web::Document,
    pub root: web::Element,
    pub state: Rc<RefCell<PageState>>,
    pub ambient: Rc<RefCell<Option<AmbientPad>>>,
}
