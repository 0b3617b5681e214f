use super::hero::social_button;
use super::{GLASS, GRADIENT_TEXT};
use crate::constants::{CONTACT_FORM_ID, CONTACT_STATUS_ID};
use crate::core::{Section, CONTACT_DETAILS, FOOTER_SOCIALS, SITE};
use crate::ui::{button, escape, input, textarea, ButtonSize, ButtonVariant};

const FIELD_CLASS: &str =
    "bg-white/10 border-white/30 text-white placeholder:text-white/50 backdrop-blur-md focus:border-cyan-400";

fn contact_form() -> String {
    let send = button(
        ButtonVariant::Default,
        ButtonSize::Default,
        "w-full bg-gradient-to-r from-cyan-500 to-purple-500 hover:from-cyan-400 hover:to-purple-400 text-white font-semibold py-3 rounded-full transition-all duration-300 transform hover:scale-105",
        &[("type", "submit")],
        "Send Message",
    );
    format!(
        r#"<form id="{CONTACT_FORM_ID}" class="space-y-6" novalidate>
<div>{name}</div>
<div>{email}</div>
<div>{message}</div>
<p id="{CONTACT_STATUS_ID}" class="text-sm" role="status" aria-live="polite" style="display:none"></p>
{send}
</form>"#,
        name = input("text", "name", "Your Name", FIELD_CLASS),
        email = input("email", "email", "your@email.com", FIELD_CLASS),
        message = textarea(
            "message",
            "Tell me about your project...",
            5,
            &format!("{FIELD_CLASS} resize-none"),
        ),
    )
}

pub fn contact_section() -> String {
    let details: String = CONTACT_DETAILS
        .iter()
        .map(|d| {
            format!(
                r#"<div class="flex items-center space-x-4">
<div class="w-12 h-12 bg-gradient-to-r {gradient} rounded-full flex items-center justify-center">{icon}</div>
<div><p class="text-white/70">{label}</p><p class="text-white">{value}</p></div>
</div>"#,
                gradient = d.gradient,
                icon = d.icon.svg("h-6 w-6 text-white"),
                label = escape(d.label),
                value = escape(d.value),
            )
        })
        .collect();
    let start = button(
        ButtonVariant::Default,
        ButtonSize::Default,
        "bg-white/20 backdrop-blur-md border border-white/30 text-white hover:bg-white/30 transition-all duration-300",
        &[("data-nav", Section::Contact.id())],
        "Start Your Project",
    );

    format!(
        r#"<section id="{id}" class="py-20 relative z-10 px-6">
<div class="max-w-4xl mx-auto">
<h2 class="text-4xl font-bold text-center mb-16 {GRADIENT_TEXT}">Let&#39;s Create Something Amazing</h2>
<div class="grid grid-cols-1 lg:grid-cols-2 gap-12">
<div class="{GLASS} rounded-3xl p-8">{form}</div>
<div class="space-y-8">
<div class="{GLASS} rounded-3xl p-8">
<h3 class="text-2xl font-bold text-white mb-6">Get In Touch</h3>
<div class="space-y-4">{details}</div>
</div>
<div class="backdrop-blur-md bg-gradient-to-r from-cyan-500/20 to-purple-500/20 rounded-3xl p-8 border border-white/20">
<h3 class="text-xl font-bold text-white mb-4">Ready to Start?</h3>
<p class="text-white/80 mb-6">Let&#39;s discuss your vision and bring it to life with cutting-edge technology.</p>
{start}
</div>
</div>
</div>
</div>
</section>"#,
        id = Section::Contact.id(),
        form = contact_form(),
    )
}

pub fn footer(year: i32) -> String {
    let socials: String = FOOTER_SOCIALS.iter().map(|&icon| social_button(icon)).collect();
    format!(
        r#"<footer class="py-12 relative z-10 px-6 border-t border-white/20">
<div class="max-w-6xl mx-auto text-center">
<div class="text-3xl font-bold mb-4 {GRADIENT_TEXT}">{brand}</div>
<p class="text-white/70 mb-8">{tagline}.</p>
<div class="flex justify-center space-x-6">{socials}</div>
<p class="text-white/50 text-sm mt-8">&copy; {year} {author}. All rights reserved.</p>
</div>
</footer>"#,
        brand = SITE.brand,
        tagline = escape(SITE.tagline),
        author = escape(SITE.author),
    )
}
