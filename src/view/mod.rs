//! Page markup.
//!
//! The page is rendered once into the mount point; afterwards the browser
//! handlers only patch the pieces that change (nav classes, glow offsets,
//! playback button).

mod contact;
mod hero;
mod nav;
mod showcase;

pub use contact::{contact_section, footer};
pub use hero::{about_section, hero_section};
pub use nav::{nav_bar, nav_button_class, playback_button_content};
pub use showcase::{projects_section, skill_bar_width, skills_section};

use crate::constants::{GLOW_ID, GLOW_TRANSITION};
use crate::core::{glow_origin, Section};
use glam::Vec2;

/// Inputs that vary between renders.
#[derive(Debug, Clone, Copy)]
pub struct PageProps {
    pub active: Section,
    pub playing: bool,
    pub year: i32,
}

impl Default for PageProps {
    fn default() -> Self {
        Self {
            active: Section::Home,
            playing: false,
            year: 2025,
        }
    }
}

pub fn render_page(props: &PageProps) -> String {
    let mut html = String::with_capacity(32 * 1024);
    html.push_str(
        r#"<div class="min-h-screen bg-black text-white overflow-x-hidden relative">"#,
    );
    html.push_str(&background());
    html.push_str(&nav_bar(props.active, props.playing));
    html.push_str(&hero_section());
    html.push_str(&about_section());
    html.push_str(&skills_section());
    html.push_str(&projects_section());
    html.push_str(&contact_section());
    html.push_str(&footer(props.year));
    html.push_str("</div>");
    html
}

/// Fixed decorative layer: gradient wash, pointer glow, two pulsing blobs.
pub fn background() -> String {
    let origin = glow_origin(Vec2::ZERO);
    format!(
        r#"<div class="fixed inset-0 z-0">
<div class="absolute inset-0 bg-gradient-to-br from-purple-900/20 via-blue-900/20 to-teal-900/20"></div>
<div id="{GLOW_ID}" class="absolute w-96 h-96 bg-gradient-to-r from-cyan-500/30 to-blue-500/30 rounded-full blur-3xl pointer-events-none" style="left: {}px; top: {}px; transition: {GLOW_TRANSITION};"></div>
<div class="absolute top-1/4 left-1/4 w-64 h-64 bg-gradient-to-r from-purple-500/20 to-pink-500/20 rounded-full blur-2xl animate-pulse"></div>
<div class="absolute bottom-1/4 right-1/4 w-80 h-80 bg-gradient-to-r from-green-500/20 to-teal-500/20 rounded-full blur-2xl animate-pulse delay-1000"></div>
</div>"#,
        origin.x, origin.y
    )
}

/// Shared heading style for section titles.
pub(crate) const GRADIENT_TEXT: &str =
    "bg-gradient-to-r from-cyan-400 to-purple-400 bg-clip-text text-transparent";

/// Shared frosted-glass panel style.
pub(crate) const GLASS: &str = "backdrop-blur-md bg-white/10 border border-white/20";
