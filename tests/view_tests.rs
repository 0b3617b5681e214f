// Host-side tests for the rendered page markup.

use alexdev_site::constants::{NAV_ACTIVE_CLASS, NAV_INACTIVE_CLASS};
use alexdev_site::core::{Section, PROJECTS, SKILLS};
use alexdev_site::view::{
    nav_bar, nav_button_class, projects_section, render_page, skill_bar_width, skills_section,
    PageProps,
};

/// Values of every `attr="..."` occurrence, in document order.
fn attr_values<'a>(html: &'a str, attr: &str) -> Vec<&'a str> {
    let needle = format!(r#"{attr}=""#);
    html.match_indices(&needle)
        .map(|(i, _)| {
            let start = i + needle.len();
            let end = start + html[start..].find('"').expect("closing quote");
            &html[start..end]
        })
        .collect()
}

#[test]
fn skills_render_six_bars_with_literal_widths() {
    let html = skills_section();
    assert_eq!(attr_values(&html, "data-skill").len(), 6);

    let widths: Vec<&str> = attr_values(&html, "style")
        .into_iter()
        .filter(|s| s.starts_with("width: "))
        .collect();
    assert_eq!(
        widths,
        [
            "width: 95%",
            "width: 90%",
            "width: 85%",
            "width: 88%",
            "width: 82%",
            "width: 75%"
        ]
    );
}

#[test]
fn skill_catalog_is_in_display_order_and_within_percent_range() {
    let names: Vec<&str> = SKILLS.iter().map(|s| s.name).collect();
    assert_eq!(
        names,
        [
            "React & Next.js",
            "TypeScript",
            "UI/UX Design",
            "Node.js",
            "Python",
            "3D Graphics"
        ]
    );
    for skill in &SKILLS {
        assert!(skill.level <= 100, "{}", skill.name);
        assert_eq!(skill_bar_width(skill), format!("width: {}%", skill.level));
    }
}

#[test]
fn skill_names_are_escaped_in_markup() {
    let html = skills_section();
    assert!(html.contains("React &amp; Next.js"));
    assert!(!html.contains("React & Next.js"));
}

#[test]
fn projects_render_four_cards_in_fixed_order() {
    let html = projects_section();
    assert_eq!(
        attr_values(&html, "data-project"),
        ["NeuroAI Dashboard", "CryptoVerse", "MetaSpace", "QuantumUI"]
    );
}

#[test]
fn project_tech_tags_are_rendered_unmodified() {
    let expected: [&[&str]; 4] = [
        &["React", "D3.js", "Python", "TensorFlow"],
        &["Next.js", "WebSocket", "Chart.js", "Node.js"],
        &["Three.js", "WebRTC", "React", "Express"],
        &["React", "Framer Motion", "Storybook", "TypeScript"],
    ];
    for (project, tags) in PROJECTS.iter().zip(expected) {
        assert_eq!(project.tech, tags, "{}", project.title);
    }

    let html = projects_section();
    let starts: Vec<usize> = html.match_indices("data-project=").map(|(i, _)| i).collect();
    for (n, project) in PROJECTS.iter().enumerate() {
        let end = starts.get(n + 1).copied().unwrap_or(html.len());
        let card = &html[starts[n]..end];
        let rendered: Vec<&str> = card
            .match_indices("data-tech>")
            .map(|(i, m)| {
                let start = i + m.len();
                let stop = start + card[start..].find("</span>").expect("closing span");
                &card[start..stop]
            })
            .collect();
        assert_eq!(rendered, project.tech, "{}", project.title);
    }
}

#[test]
fn page_renders_sections_in_display_order() {
    let html = render_page(&PageProps::default());
    let mut last = 0;
    for section in Section::ALL {
        let needle = format!(r#"<section id="{}""#, section.id());
        let at = html.find(&needle).unwrap_or_else(|| panic!("missing {needle}"));
        assert!(at >= last, "{} out of order", section.id());
        last = at;
    }
    assert!(html.contains(r#"id="cursor-glow""#));
    assert!(html.contains("transition: all 0.3s ease-out"));
    assert!(html.contains(r#"id="contact-form""#));
}

#[test]
fn glow_starts_at_origin_offset() {
    let html = render_page(&PageProps::default());
    assert!(html.contains("left: -192px; top: -192px;"));
}

#[test]
fn footer_shows_given_year() {
    let html = render_page(&PageProps {
        year: 2031,
        ..PageProps::default()
    });
    assert!(html.contains("&copy; 2031 Alex.Dev. All rights reserved."));
}

#[test]
fn nav_button_class_reflects_active_section() {
    assert!(nav_button_class(Section::About, Section::About).ends_with(NAV_ACTIVE_CLASS));
    assert!(nav_button_class(Section::Home, Section::About).ends_with(NAV_INACTIVE_CLASS));
}

#[test]
fn nav_bar_highlights_exactly_one_section() {
    let html = nav_bar(Section::Projects, false);
    assert_eq!(
        attr_values(&html, "data-nav-item"),
        ["home", "about", "skills", "projects", "contact"]
    );
    assert_eq!(html.matches(NAV_ACTIVE_CLASS).count(), 1);
    assert_eq!(html.matches(r#"aria-current="true""#).count(), 1);
    let projects = html
        .find(r#"data-nav-item="projects""#)
        .expect("projects button");
    let active = html.find(NAV_ACTIVE_CLASS).expect("active class");
    assert!(active > projects);
}

#[test]
fn nav_buttons_show_section_labels() {
    let html = nav_bar(Section::Home, false);
    for section in Section::ALL {
        let label = format!(">{}</button>", section.label());
        assert!(html.contains(&label), "{label}");
    }
    assert!(!html.contains(">home</button>"));
}

#[test]
fn nav_bar_playback_button_matches_state() {
    let paused = nav_bar(Section::Home, false);
    assert!(paused.contains("lucide-play"));
    assert!(paused.contains(r#"aria-pressed="false""#));

    let playing = nav_bar(Section::Home, true);
    assert!(playing.contains("lucide-pause"));
    assert!(playing.contains(r#"aria-label="Pause ambient sound""#));
}

#[test]
fn call_to_action_buttons_target_sections() {
    let html = render_page(&PageProps::default());
    let targets = attr_values(&html, "data-nav");
    // five nav buttons, then View My Work, Let's Connect, Start Your Project
    assert_eq!(
        targets,
        [
            "home", "about", "skills", "projects", "contact", "projects", "contact", "contact"
        ]
    );
}
