use super::sections::{Section, SectionBounds};

/// Read/scroll access to the live page layout.
///
/// The browser implementation reads `offsetTop`/`offsetHeight` and issues
/// smooth `scrollIntoView` requests; tests substitute a fixed layout.
pub trait PageLayout {
    /// Bounds of the section's element, or `None` if it is not in the document.
    fn bounds(&self, section: Section) -> Option<SectionBounds>;

    /// Request a smooth scroll aligning the section's top with the viewport.
    /// Returns `false` if the element could not be found.
    fn scroll_into_view(&self, section: Section) -> bool;
}

/// Scroll to the section named by `id`.
///
/// Unknown identifiers and sections missing from the document are no-ops.
pub fn navigate<L: PageLayout + ?Sized>(layout: &L, id: &str) -> Option<Section> {
    let section = id.parse::<Section>().ok()?;
    layout.scroll_into_view(section).then_some(section)
}
