//! Platform-independent page logic.
//!
//! Nothing in here touches the DOM, so the whole module builds and tests on
//! the host. The browser modules feed it pointer, scroll and form input and
//! apply whatever it decides back to the document.

pub mod catalog;
pub mod contact;
pub mod glow;
pub mod navigation;
pub mod playback;
pub mod sections;
pub mod state;

pub use catalog::*;
pub use contact::{ContactForm, MailDraft};
pub use glow::{glow_origin, CursorState};
pub use navigation::{navigate, PageLayout};
pub use playback::PlaybackState;
pub use sections::{Section, SectionBounds, SectionTracker};
pub use state::PageState;

use thiserror::Error;

/// Recoverable errors raised by the page logic.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SiteError {
    #[error("unknown section identifier {0:?}")]
    UnknownSection(String),
    #[error("Please fill in your {field}.")]
    MissingField { field: &'static str },
    #[error("{0:?} doesn't look like an email address.")]
    InvalidEmail(String),
}
