/// Page layout and interaction tuning constants.
///
/// Magic numbers shared by the renderer and the browser event handlers live
/// here so the markup and the handlers cannot drift apart.
// Element ids
pub const MOUNT_ID: &str = "app";
pub const GLOW_ID: &str = "cursor-glow";
pub const PLAYBACK_ID: &str = "playback-toggle";
pub const CONTACT_FORM_ID: &str = "contact-form";
pub const CONTACT_STATUS_ID: &str = "contact-status";

// Scroll tracking: the probe sits this far below the top of the viewport
pub const SCROLL_PROBE_OFFSET: f64 = 100.0;

// Cursor glow: the element is 24rem square, so half of it keeps it centered
pub const GLOW_RADIUS: f32 = 192.0;
pub const GLOW_TRANSITION: &str = "all 0.3s ease-out";

// Navigation button classes
pub const NAV_BASE_CLASS: &str = "capitalize transition-all duration-300";
pub const NAV_ACTIVE_CLASS: &str = "text-cyan-400 font-semibold";
pub const NAV_INACTIVE_CLASS: &str = "text-white/70 hover:text-white";

// Typography
pub const FONT_STYLESHEET_URL: &str =
    "https://fonts.googleapis.com/css2?family=Inter:wght@300;400;600;700&display=swap";
pub const FONT_FAMILY: &str = "'Inter', system-ui, -apple-system, sans-serif";

// Ambient pad behind the playback toggle
pub const AMBIENT_MASTER_LEVEL: f32 = 0.08;
pub const AMBIENT_FADE_TAU_SEC: f64 = 0.6; // exponential approach time constant
pub const AMBIENT_ROOT_HZ: f32 = 110.0; // A2
pub const AMBIENT_PARTIALS: [f32; 3] = [1.0, 1.5, 2.0]; // root, fifth, octave
pub const AMBIENT_DETUNE_CENTS: [f32; 3] = [-6.0, 4.0, 7.0];
pub const AMBIENT_LOWPASS_HZ: f32 = 900.0;
