//! Scroll spy state
//!
//! The DOM layer feeds the window scroll offset and section tops in; this
//! module decides which section is current and which nav links light up.

/// A section counts as reached once the viewport is this close to its top
pub const SPY_THRESHOLD: f64 = 150.0;

/// Clearance left above a section when a nav link scrolls to it
pub const NAV_SCROLL_OFFSET: f64 = 100.0;

/// Vertical position of one rendered section
#[derive(Debug, Clone, PartialEq)]
pub struct SectionBounds {
    pub id: String,
    pub top: f64,
}

impl SectionBounds {
    pub fn new(id: impl Into<String>, top: f64) -> Self {
        Self { id: id.into(), top }
    }
}

/// Last section in document order whose top (minus the threshold) has been
/// scrolled past. Sections are not assumed to be sorted by `top`.
pub fn current_section(offset: f64, sections: &[SectionBounds]) -> Option<&str> {
    sections
        .iter()
        .rev()
        .find(|s| offset >= s.top - SPY_THRESHOLD)
        .map(|s| s.id.as_str())
}

/// Window scroll target for a nav click on a section at `section_top`
pub fn nav_scroll_target(section_top: f64) -> f64 {
    section_top - NAV_SCROLL_OFFSET
}

/// Current-section tracker owned by the scroll listener
#[derive(Debug, Default)]
pub struct ScrollSpy {
    current: Option<String>,
}

impl ScrollSpy {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }

    /// Recompute against fresh bounds; returns true when the current section changed
    pub fn update(&mut self, offset: f64, sections: &[SectionBounds]) -> bool {
        let next = current_section(offset, sections);
        if self.current.as_deref() == next {
            return false;
        }
        self.current = next.map(ToString::to_string);
        true
    }

    /// Whether a nav link with this `href` should carry the active marker.
    ///
    /// The fragment must equal the current id; with no current section
    /// nothing is active.
    pub fn is_active(&self, href: &str) -> bool {
        match (self.current.as_deref(), href.split_once('#')) {
            (Some(id), Some((_, fragment))) => fragment == id,
            _ => false,
        }
    }
}
