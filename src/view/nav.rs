use super::GRADIENT_TEXT;
use crate::constants::{NAV_ACTIVE_CLASS, NAV_BASE_CLASS, NAV_INACTIVE_CLASS, PLAYBACK_ID};
use crate::core::{playback, Section};
use crate::icons::Icon;
use crate::ui::{button, ButtonSize, ButtonVariant};

/// Class list for a navigation button.
pub fn nav_button_class(section: Section, active: Section) -> String {
    let state = if section == active {
        NAV_ACTIVE_CLASS
    } else {
        NAV_INACTIVE_CLASS
    };
    format!("{NAV_BASE_CLASS} {state}")
}

pub fn playback_button_content(playing: bool) -> String {
    let icon = if playing { Icon::Pause } else { Icon::Play };
    icon.svg("h-4 w-4")
}

pub fn nav_bar(active: Section, playing: bool) -> String {
    let links: String = Section::ALL
        .iter()
        .map(|&section| {
            format!(
                r#"<button type="button" data-nav="{id}" data-nav-item="{id}" class="{class}"{current}>{label}</button>"#,
                id = section.id(),
                class = nav_button_class(section, active),
                current = if section == active { r#" aria-current="true""# } else { "" },
                label = section.label(),
            )
        })
        .collect();

    let label = playback::action_label(playing);
    let pressed = if playing { "true" } else { "false" };
    let toggle = button(
        ButtonVariant::Ghost,
        ButtonSize::Icon,
        "backdrop-blur-md bg-white/10 border border-white/20 text-white hover:bg-white/20",
        &[("id", PLAYBACK_ID), ("aria-label", label), ("aria-pressed", pressed)],
        &playback_button_content(playing),
    );

    format!(
        r#"<nav class="fixed top-0 left-0 right-0 z-50 p-6">
<div class="flex justify-between items-center">
<div class="text-2xl font-bold {GRADIENT_TEXT}">{brand}</div>
<div class="hidden md:flex space-x-8 backdrop-blur-md bg-white/10 rounded-full px-6 py-3 border border-white/20">{links}</div>
{toggle}
</div>
</nav>"#,
        brand = crate::core::SITE.brand,
    )
}
