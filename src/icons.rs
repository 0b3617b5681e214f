//! Inline SVG icon set (24x24 stroke icons).

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Code2,
    Palette,
    Rocket,
    Zap,
    ArrowRight,
    Github,
    Linkedin,
    Mail,
    Phone,
    MapPin,
    Play,
    Pause,
}

impl Icon {
    pub fn name(self) -> &'static str {
        match self {
            Icon::Code2 => "code-2",
            Icon::Palette => "palette",
            Icon::Rocket => "rocket",
            Icon::Zap => "zap",
            Icon::ArrowRight => "arrow-right",
            Icon::Github => "github",
            Icon::Linkedin => "linkedin",
            Icon::Mail => "mail",
            Icon::Phone => "phone",
            Icon::MapPin => "map-pin",
            Icon::Play => "play",
            Icon::Pause => "pause",
        }
    }

    fn body(self) -> &'static str {
        match self {
            Icon::Code2 => r#"<path d="m18 16 4-4-4-4"/><path d="m6 8-4 4 4 4"/><path d="m14.5 4-5 16"/>"#,
            Icon::Palette => concat!(
                r#"<circle cx="13.5" cy="6.5" r=".5" fill="currentColor"/>"#,
                r#"<circle cx="17.5" cy="10.5" r=".5" fill="currentColor"/>"#,
                r#"<circle cx="8.5" cy="7.5" r=".5" fill="currentColor"/>"#,
                r#"<circle cx="6.5" cy="12.5" r=".5" fill="currentColor"/>"#,
                r#"<path d="M12 2C6.5 2 2 6.5 2 12s4.5 10 10 10c.926 0 1.648-.746 1.648-1.688 0-.437-.18-.835-.437-1.125-.29-.289-.438-.652-.438-1.125a1.64 1.64 0 0 1 1.668-1.668h1.996c3.051 0 5.555-2.503 5.555-5.554C21.965 6.012 17.461 2 12 2z"/>"#,
            ),
            Icon::Rocket => concat!(
                r#"<path d="M4.5 16.5c-1.5 1.26-2 5-2 5s3.74-.5 5-2c.71-.84.7-2.13-.09-2.91a2.18 2.18 0 0 0-2.91-.09z"/>"#,
                r#"<path d="m12 15-3-3a22 22 0 0 1 2-3.95A12.88 12.88 0 0 1 22 2c0 2.72-.78 7.5-6 11a22.35 22.35 0 0 1-4 2z"/>"#,
                r#"<path d="M9 12H4s.55-3.03 2-4c1.62-1.08 5 0 5 0"/>"#,
                r#"<path d="M12 15v5s3.03-.55 4-2c1.08-1.62 0-5 0-5"/>"#,
            ),
            Icon::Zap => r#"<polygon points="13 2 3 14 12 14 11 22 21 10 12 10 13 2"/>"#,
            Icon::ArrowRight => r#"<path d="M5 12h14"/><path d="m12 5 7 7-7 7"/>"#,
            Icon::Github => concat!(
                r#"<path d="M15 22v-4a4.8 4.8 0 0 0-1-3.5c3 0 6-2 6-5.5.08-1.25-.27-2.48-1-3.5.28-1.15.28-2.35 0-3.5 0 0-1 0-3 1.5-2.64-.5-5.36-.5-8 0C6 2 5 2 5 2c-.3 1.15-.3 2.35 0 3.5A5.403 5.403 0 0 0 4 9c0 3.5 3 5.5 6 5.5-.39.49-.68 1.05-.85 1.65-.17.6-.22 1.23-.15 1.85v4"/>"#,
                r#"<path d="M9 18c-4.51 2-5-2-7-2"/>"#,
            ),
            Icon::Linkedin => concat!(
                r#"<path d="M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-2-2 2 2 0 0 0-2 2v7h-4v-7a6 6 0 0 1 6-6z"/>"#,
                r#"<rect width="4" height="12" x="2" y="9"/><circle cx="4" cy="4" r="2"/>"#,
            ),
            Icon::Mail => concat!(
                r#"<rect width="20" height="16" x="2" y="4" rx="2"/>"#,
                r#"<path d="m22 7-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7"/>"#,
            ),
            Icon::Phone => r#"<path d="M22 16.92v3a2 2 0 0 1-2.18 2 19.79 19.79 0 0 1-8.63-3.07 19.5 19.5 0 0 1-6-6 19.79 19.79 0 0 1-3.07-8.67A2 2 0 0 1 4.11 2h3a2 2 0 0 1 2 1.72 12.84 12.84 0 0 0 .7 2.81 2 2 0 0 1-.45 2.11L8.09 9.91a16 16 0 0 0 6 6l1.27-1.27a2 2 0 0 1 2.11-.45 12.84 12.84 0 0 0 2.81.7A2 2 0 0 1 22 16.92z"/>"#,
            Icon::MapPin => concat!(
                r#"<path d="M20 10c0 6-8 12-8 12s-8-6-8-12a8 8 0 0 1 16 0Z"/>"#,
                r#"<circle cx="12" cy="10" r="3"/>"#,
            ),
            Icon::Play => r#"<polygon points="6 3 20 12 6 21 6 3"/>"#,
            Icon::Pause => concat!(
                r#"<rect x="14" y="4" width="4" height="16" rx="1"/>"#,
                r#"<rect x="6" y="4" width="4" height="16" rx="1"/>"#,
            ),
        }
    }

    /// Full `<svg>` element; `class` sizes and colors it.
    pub fn svg(self, class: &str) -> String {
        format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" class="lucide lucide-{} {}" aria-hidden="true">{}</svg>"#,
            self.name(),
            class,
            self.body()
        )
    }
}
