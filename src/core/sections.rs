use super::navigation::PageLayout;
use super::SiteError;
use crate::constants::SCROLL_PROBE_OFFSET;
use std::fmt;
use std::str::FromStr;

/// One of the five stacked page regions, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Section {
    #[default]
    Home,
    About,
    Skills,
    Projects,
    Contact,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Home,
        Section::About,
        Section::Skills,
        Section::Projects,
        Section::Contact,
    ];

    /// Element id of the `<section>` in the rendered page.
    pub fn id(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::About => "about",
            Section::Skills => "skills",
            Section::Projects => "projects",
            Section::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::About => "About",
            Section::Skills => "Skills",
            Section::Projects => "Projects",
            Section::Contact => "Contact",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Section {
    type Err = SiteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Section::ALL
            .into_iter()
            .find(|section| section.id() == s)
            .ok_or_else(|| SiteError::UnknownSection(s.to_string()))
    }
}

/// Vertical extent of a section in document coordinates (CSS px).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionBounds {
    pub top: f64,
    pub height: f64,
}

impl SectionBounds {
    pub fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }

    /// Half-open: the bottom edge belongs to the next section.
    #[inline]
    pub fn contains(&self, y: f64) -> bool {
        y >= self.top && y < self.top + self.height
    }
}

/// First section, in display order, whose bounds contain `probe`.
/// Sections missing from the layout are skipped.
pub fn section_at<L: PageLayout + ?Sized>(probe: f64, layout: &L) -> Option<Section> {
    Section::ALL
        .into_iter()
        .find(|&section| layout.bounds(section).is_some_and(|b| b.contains(probe)))
}

/// Tracks which section the navigation bar highlights.
#[derive(Debug, Clone, Copy, Default)]
pub struct SectionTracker {
    active: Section,
}

impl SectionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn active(&self) -> Section {
        self.active
    }

    /// Re-evaluate after a scroll to `scroll_y`. Keeps the previous section
    /// when the probe falls outside every section. Returns `true` when the
    /// highlighted section changed.
    pub fn on_scroll<L: PageLayout + ?Sized>(&mut self, scroll_y: f64, layout: &L) -> bool {
        let probe = scroll_y + SCROLL_PROBE_OFFSET;
        match section_at(probe, layout) {
            Some(section) if section != self.active => {
                self.active = section;
                true
            }
            _ => false,
        }
    }
}
