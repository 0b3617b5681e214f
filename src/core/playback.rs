/// Play/pause flag behind the navigation bar's ambient-audio toggle.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PlaybackState {
    playing: bool,
}

impl PlaybackState {
    #[inline]
    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Flip the flag and return the new value.
    pub fn toggle(&mut self) -> bool {
        self.playing = !self.playing;
        self.playing
    }

    pub fn action_label(&self) -> &'static str {
        action_label(self.playing)
    }
}

/// Accessible label describing what activating the control will do.
pub fn action_label(playing: bool) -> &'static str {
    if playing {
        "Pause ambient sound"
    } else {
        "Play ambient sound"
    }
}
