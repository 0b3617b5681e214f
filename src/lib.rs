//! Single-page creative portfolio rendered client-side from WASM.
//!
//! The pure modules (`core`, `view`, `ui`, `icons`, `constants`) build on any
//! target; the browser glue is only compiled for `wasm32`.

pub mod constants;
pub mod core;
pub mod icons;
pub mod ui;
pub mod view;

#[cfg(target_arch = "wasm32")]
mod app;
#[cfg(target_arch = "wasm32")]
mod audio;
#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod events;
#[cfg(target_arch = "wasm32")]
mod layout;
#[cfg(target_arch = "wasm32")]
mod notice;
#[cfg(target_arch = "wasm32")]
mod shell;

#[cfg(target_arch = "wasm32")]
pub use app::{mount, start, unmount};
