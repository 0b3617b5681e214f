use super::{GLASS, GRADIENT_TEXT};
use crate::core::{Project, Section, Skill, PROJECTS, SKILLS, STATS};
use crate::ui::{button, card, escape, ButtonSize, ButtonVariant};

/// Inline width of a skill's bar; the proficiency is the percentage.
#[inline]
pub fn skill_bar_width(skill: &Skill) -> String {
    format!("width: {}%", skill.level)
}

fn skill_card(skill: &Skill) -> String {
    format!(
        r#"<div class="{GLASS} rounded-2xl p-6 hover:bg-white/20 transition-all duration-300 group" data-skill="{name}">
<div class="flex justify-between items-center mb-4">
<h3 class="text-xl font-semibold text-white">{name}</h3>
<span class="text-white/70">{level}%</span>
</div>
<div class="w-full bg-white/20 rounded-full h-3 overflow-hidden">
<div class="h-full bg-gradient-to-r {gradient} rounded-full transition-all duration-1000 ease-out group-hover:animate-pulse" style="{width}"></div>
</div>
</div>"#,
        name = escape(skill.name),
        level = skill.level,
        gradient = skill.gradient,
        width = skill_bar_width(skill),
    )
}

pub fn skills_section() -> String {
    let bars: String = SKILLS.iter().map(skill_card).collect();
    let stats: String = STATS
        .iter()
        .map(|stat| {
            format!(
                r#"<div class="{GLASS} rounded-2xl p-6">{icon}<h3 class="text-2xl font-bold text-white">{value}</h3><p class="text-white/70">{label}</p></div>"#,
                icon = stat.icon.svg(&format!("h-12 w-12 mx-auto mb-4 {}", stat.accent)),
                value = escape(stat.value),
                label = escape(stat.label),
            )
        })
        .collect();

    format!(
        r#"<section id="{id}" class="py-20 relative z-10 px-6">
<div class="max-w-6xl mx-auto">
<h2 class="text-4xl font-bold text-center mb-16 {GRADIENT_TEXT}">Technical Arsenal</h2>
<div class="grid grid-cols-1 md:grid-cols-2 gap-8">{bars}</div>
<div class="mt-16 grid grid-cols-2 md:grid-cols-4 gap-8 text-center">{stats}</div>
</div>
</section>"#,
        id = Section::Skills.id(),
    )
}

fn project_card(project: &Project) -> String {
    let tags: String = project
        .tech
        .iter()
        .map(|tech| {
            format!(
                r#"<span class="px-3 py-1 bg-white/20 backdrop-blur-md rounded-full text-sm text-white border border-white/30" data-tech>{}</span>"#,
                escape(tech)
            )
        })
        .collect();
    let view = button(
        ButtonVariant::Default,
        ButtonSize::Default,
        "bg-white/20 backdrop-blur-md border border-white/30 text-white hover:bg-white/30",
        &[],
        "View Project",
    );
    let image = if project.image.is_empty() {
        "/placeholder.svg"
    } else {
        project.image
    };

    card(
        "group relative overflow-hidden backdrop-blur-md bg-white/10 border border-white/20 hover:bg-white/20 transition-all duration-500 transform hover:scale-105 hover:rotate-1",
        &format!(
            r#"<div class="relative overflow-hidden" data-project="{title}">
<img src="{image}" alt="{title}" width="400" height="300" class="w-full h-64 object-cover group-hover:scale-110 transition-transform duration-500"/>
<div class="absolute inset-0 bg-gradient-to-t {gradient} opacity-0 group-hover:opacity-80 transition-opacity duration-300"></div>
<div class="absolute inset-0 flex items-center justify-center opacity-0 group-hover:opacity-100 transition-opacity duration-300">{view}</div>
</div>
<div class="p-6">
<h3 class="text-2xl font-bold text-white mb-3">{title}</h3>
<p class="text-white/70 mb-4">{description}</p>
<div class="flex flex-wrap gap-2">{tags}</div>
</div>"#,
            title = escape(project.title),
            image = escape(image),
            gradient = project.gradient,
            description = escape(project.description),
        ),
    )
}

pub fn projects_section() -> String {
    let cards: String = PROJECTS.iter().map(project_card).collect();
    format!(
        r#"<section id="{id}" class="py-20 relative z-10 px-6">
<div class="max-w-7xl mx-auto">
<h2 class="text-4xl font-bold text-center mb-16 {GRADIENT_TEXT}">Featured Projects</h2>
<div class="grid grid-cols-1 md:grid-cols-2 gap-8">{cards}</div>
</div>
</section>"#,
        id = Section::Projects.id(),
    )
}
