use super::{GLASS, GRADIENT_TEXT};
use crate::core::{Section, ABOUT_SOCIALS};
use crate::icons::Icon;
use crate::ui::{button, ButtonSize, ButtonVariant};

pub fn hero_section() -> String {
    let view_work = button(
        ButtonVariant::Default,
        ButtonSize::Default,
        "group relative overflow-hidden bg-gradient-to-r from-cyan-500 to-purple-500 hover:from-cyan-400 hover:to-purple-400 text-white px-8 py-4 rounded-full text-lg font-semibold transition-all duration-300 transform hover:scale-105",
        &[("data-nav", Section::Projects.id())],
        &format!(
            r#"<span class="relative z-10 flex items-center">View My Work{}</span><div class="absolute inset-0 bg-gradient-to-r from-purple-500 to-cyan-500 opacity-0 group-hover:opacity-100 transition-opacity duration-300"></div>"#,
            Icon::ArrowRight.svg("ml-2 h-5 w-5 group-hover:translate-x-1 transition-transform")
        ),
    );
    let connect = button(
        ButtonVariant::Outline,
        ButtonSize::Default,
        "border-2 border-white/30 text-white hover:bg-white/10 px-8 py-4 rounded-full text-lg backdrop-blur-md",
        &[("data-nav", Section::Contact.id())],
        "Let&#39;s Connect",
    );

    format!(
        r#"<section id="{id}" class="min-h-screen flex items-center justify-center relative z-10 px-6">
<div class="text-center max-w-4xl">
<div class="mb-8">
<h1 class="text-6xl md:text-8xl font-bold mb-4 bg-gradient-to-r from-cyan-400 via-purple-400 to-pink-400 bg-clip-text text-transparent animate-pulse">CREATIVE</h1>
<h2 class="text-4xl md:text-6xl font-light text-white/90">Web Developer</h2>
</div>
<p class="text-xl md:text-2xl text-white/70 mb-12 max-w-2xl mx-auto leading-relaxed">Crafting digital experiences that push the boundaries of what&#39;s possible on the web</p>
<div class="flex flex-col sm:flex-row gap-6 justify-center items-center">{view_work}{connect}</div>
</div>
<div class="absolute top-1/4 left-10 animate-bounce delay-1000"><div class="w-4 h-4 bg-cyan-400 rounded-full blur-sm"></div></div>
<div class="absolute top-1/3 right-20 animate-bounce delay-2000"><div class="w-6 h-6 bg-purple-400 rounded-full blur-sm"></div></div>
<div class="absolute bottom-1/4 left-1/4 animate-bounce"><div class="w-3 h-3 bg-pink-400 rounded-full blur-sm"></div></div>
</section>"#,
        id = Section::Home.id(),
    )
}

/// Ghost icon button used for the (unlinked) social placeholders.
pub(crate) fn social_button(icon: Icon) -> String {
    button(
        ButtonVariant::Ghost,
        ButtonSize::Icon,
        "backdrop-blur-md bg-white/10 border border-white/20 text-white hover:bg-white/20 hover:scale-110 transition-all duration-300",
        &[("aria-label", icon.name())],
        &icon.svg("h-5 w-5"),
    )
}

pub fn about_section() -> String {
    let socials: String = ABOUT_SOCIALS.iter().map(|&icon| social_button(icon)).collect();

    format!(
        r#"<section id="{id}" class="py-20 relative z-10 px-6">
<div class="max-w-6xl mx-auto">
<div class="grid grid-cols-1 lg:grid-cols-2 gap-12 items-center">
<div class="relative">
<div class="{GLASS} rounded-3xl p-8">
<h2 class="text-4xl font-bold mb-6 {GRADIENT_TEXT}">About Me</h2>
<p class="text-white/80 text-lg leading-relaxed mb-6">I&#39;m a passionate full-stack developer who believes in creating digital experiences that are not just functional, but truly memorable. With 6+ years of experience, I specialize in building cutting-edge web applications that combine beautiful design with powerful functionality.</p>
<p class="text-white/80 text-lg leading-relaxed mb-8">My approach blends technical expertise with creative vision, resulting in projects that stand out in today&#39;s digital landscape.</p>
<div class="flex space-x-4">{socials}</div>
</div>
</div>
<div class="relative">
<div class="relative w-80 h-80 mx-auto">
<div class="absolute inset-0 bg-gradient-to-r from-cyan-500 to-purple-500 rounded-full blur-2xl opacity-50 animate-pulse"></div>
<img src="/placeholder.svg?height=320&amp;width=320" alt="Alex - Creative Developer" width="320" height="320" class="relative z-10 rounded-full border-4 border-white/20 backdrop-blur-md"/>
<div class="absolute -top-4 -right-4 w-8 h-8 bg-gradient-to-r from-cyan-400 to-blue-400 rounded-full animate-bounce"></div>
<div class="absolute -bottom-4 -left-4 w-6 h-6 bg-gradient-to-r from-purple-400 to-pink-400 rounded-full animate-bounce delay-1000"></div>
</div>
</div>
</div>
</div>
</section>"#,
        id = Section::About.id(),
    )
}
