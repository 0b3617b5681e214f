//! UI state owned by the mounted page.
//!
//! The browser handlers share one `PageState` behind `Rc<RefCell<_>>`; each
//! handler borrows it just long enough to apply its event.

use super::glow::CursorState;
use super::playback::PlaybackState;
use super::sections::SectionTracker;

#[derive(Debug, Default, Clone)]
pub struct PageState {
    pub cursor: CursorState,
    pub playback: PlaybackState,
    pub tracker: SectionTracker,
}
