// Host-side tests for scroll tracking and section navigation.

use alexdev_site::core::sections::section_at;
use alexdev_site::core::{navigate, PageLayout, Section, SectionBounds, SectionTracker, SiteError};
use std::cell::RefCell;

/// Fixed layout that records scroll requests instead of scrolling.
struct FixedLayout {
    sections: Vec<(Section, SectionBounds)>,
    scrolled: RefCell<Vec<Section>>,
}

impl FixedLayout {
    fn new(sections: Vec<(Section, SectionBounds)>) -> Self {
        Self {
            sections,
            scrolled: RefCell::new(Vec::new()),
        }
    }

    /// home 0..900, about 900..1600, skills 1600..2600,
    /// projects 2600..3800, contact 3800..4600
    fn standard() -> Self {
        Self::new(vec![
            (Section::Home, SectionBounds::new(0.0, 900.0)),
            (Section::About, SectionBounds::new(900.0, 700.0)),
            (Section::Skills, SectionBounds::new(1600.0, 1000.0)),
            (Section::Projects, SectionBounds::new(2600.0, 1200.0)),
            (Section::Contact, SectionBounds::new(3800.0, 800.0)),
        ])
    }

    fn without(mut self, section: Section) -> Self {
        self.sections.retain(|(s, _)| *s != section);
        self
    }
}

impl PageLayout for FixedLayout {
    fn bounds(&self, section: Section) -> Option<SectionBounds> {
        self.sections
            .iter()
            .find(|(s, _)| *s == section)
            .map(|(_, b)| *b)
    }

    fn scroll_into_view(&self, section: Section) -> bool {
        if self.bounds(section).is_some() {
            self.scrolled.borrow_mut().push(section);
            true
        } else {
            false
        }
    }
}

#[test]
fn section_ids_round_trip_in_display_order() {
    let ids: Vec<&str> = Section::ALL.iter().map(|s| s.id()).collect();
    assert_eq!(ids, ["home", "about", "skills", "projects", "contact"]);
    for section in Section::ALL {
        assert_eq!(section.id().parse::<Section>(), Ok(section));
        assert_eq!(section.to_string(), section.id());
    }
}

#[test]
fn unknown_section_ids_are_rejected() {
    assert_eq!(
        "blog".parse::<Section>(),
        Err(SiteError::UnknownSection("blog".to_string()))
    );
    assert!("Home".parse::<Section>().is_err());
    assert!("".parse::<Section>().is_err());
}

#[test]
fn tracker_starts_on_home() {
    assert_eq!(SectionTracker::new().active(), Section::Home);
}

#[test]
fn scroll_inside_each_section_activates_it() {
    let layout = FixedLayout::standard();
    let mut tracker = SectionTracker::new();
    // scroll offsets whose probe (offset + 100) lands mid-section
    let cases = [
        (300.0, Section::Home),
        (1100.0, Section::About),
        (2000.0, Section::Skills),
        (3000.0, Section::Projects),
        (4100.0, Section::Contact),
    ];
    for (scroll_y, expected) in cases {
        tracker.on_scroll(scroll_y, &layout);
        assert_eq!(tracker.active(), expected, "scroll_y={scroll_y}");
    }
}

#[test]
fn scroll_zero_is_home_when_home_starts_at_top() {
    let layout = FixedLayout::standard();
    let mut tracker = SectionTracker::new();
    tracker.on_scroll(2000.0, &layout);
    assert_eq!(tracker.active(), Section::Skills);

    assert!(tracker.on_scroll(0.0, &layout));
    assert_eq!(tracker.active(), Section::Home);
}

#[test]
fn probe_above_first_section_keeps_previous_section() {
    // home pushed down so that scroll 0 (probe 100) hits nothing
    let layout = FixedLayout::new(vec![
        (Section::Home, SectionBounds::new(200.0, 800.0)),
        (Section::About, SectionBounds::new(1000.0, 600.0)),
    ]);
    let mut tracker = SectionTracker::new();
    tracker.on_scroll(1000.0, &layout);
    assert_eq!(tracker.active(), Section::About);

    assert!(!tracker.on_scroll(0.0, &layout));
    assert_eq!(tracker.active(), Section::About);
}

#[test]
fn section_boundaries_are_half_open() {
    let layout = FixedLayout::standard();
    // probe exactly at about's top belongs to about
    assert_eq!(section_at(900.0, &layout), Some(Section::About));
    assert_eq!(section_at(899.9, &layout), Some(Section::Home));
    // past the last section
    assert_eq!(section_at(4600.0, &layout), None);
}

#[test]
fn probe_uses_fixed_offset_below_viewport_top() {
    let layout = FixedLayout::standard();
    let mut tracker = SectionTracker::new();
    // 800 + 100 = 900, the first pixel of about
    tracker.on_scroll(800.0, &layout);
    assert_eq!(tracker.active(), Section::About);
    // 799 + 100 = 899, still home
    tracker.on_scroll(799.0, &layout);
    assert_eq!(tracker.active(), Section::Home);
}

#[test]
fn on_scroll_reports_changes_only() {
    let layout = FixedLayout::standard();
    let mut tracker = SectionTracker::new();
    assert!(!tracker.on_scroll(0.0, &layout));
    assert!(tracker.on_scroll(1100.0, &layout));
    assert!(!tracker.on_scroll(1200.0, &layout));
}

#[test]
fn missing_sections_are_skipped() {
    let layout = FixedLayout::standard().without(Section::About);
    let mut tracker = SectionTracker::new();
    assert!(!tracker.on_scroll(1100.0, &layout));
    assert_eq!(tracker.active(), Section::Home);

    tracker.on_scroll(2000.0, &layout);
    assert_eq!(tracker.active(), Section::Skills);
}

#[test]
fn overlapping_sections_resolve_to_first_in_display_order() {
    let layout = FixedLayout::new(vec![
        (Section::Projects, SectionBounds::new(0.0, 1000.0)),
        (Section::Skills, SectionBounds::new(0.0, 1000.0)),
    ]);
    assert_eq!(section_at(500.0, &layout), Some(Section::Skills));
}

#[test]
fn navigate_issues_exactly_one_scroll_for_known_section() {
    let layout = FixedLayout::standard();
    assert_eq!(navigate(&layout, "projects"), Some(Section::Projects));
    assert_eq!(*layout.scrolled.borrow(), vec![Section::Projects]);
}

#[test]
fn navigate_ignores_unknown_identifiers() {
    let layout = FixedLayout::standard();
    assert_eq!(navigate(&layout, "pricing"), None);
    assert_eq!(navigate(&layout, "PROJECTS"), None);
    assert!(layout.scrolled.borrow().is_empty());
}

#[test]
fn navigate_to_absent_element_is_a_no_op() {
    let layout = FixedLayout::standard().without(Section::Contact);
    assert_eq!(navigate(&layout, "contact"), None);
    assert!(layout.scrolled.borrow().is_empty());
}
