//! Scroll thresholds and section tracking.

pub const NAVBAR_SCROLLED_AFTER_PX: f64 = 50.0;
pub const BACK_TO_TOP_AFTER_PX: f64 = 500.0;
pub const REVEAL_OFFSET_PX: f64 = 150.0;
pub const ACTIVE_SECTION_OFFSET_PX: f64 = 100.0;

pub const REVEAL_SELECTOR: &str = ".reveal-up, .reveal-left, .reveal-right";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChromeState {
    pub navbar_scrolled: bool,
    pub back_to_top_visible: bool,
}

pub fn chrome_state(scroll_y: f64) -> ChromeState {
    ChromeState {
        navbar_scrolled: scroll_y > NAVBAR_SCROLLED_AFTER_PX,
        back_to_top_visible: scroll_y > BACK_TO_TOP_AFTER_PX,
    }
}

pub fn should_reveal(element_top: f64, viewport_height: f64) -> bool {
    element_top < viewport_height - REVEAL_OFFSET_PX
}

#[derive(Clone, Debug, PartialEq)]
pub struct SectionSpan {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

impl SectionSpan {
    fn contains(&self, y: f64) -> bool {
        y >= self.top && y < self.top + self.height
    }
}

/// Id of the section under `scroll_y + 100`. Later sections win on overlap.
pub fn active_section(sections: &[SectionSpan], scroll_y: f64) -> Option<&str> {
    let marker = scroll_y + ACTIVE_SECTION_OFFSET_PX;

    sections
        .iter()
        .rev()
        .find(|section| section.contains(marker))
        .map(|section| section.id.as_str())
}

/// `href` of the nav link pointing at `section_id`.
pub fn nav_href(section_id: &str) -> String {
    format!("#{section_id}")
}

/// In-page anchor target id; `None` for a bare `#` or external links.
pub fn anchor_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}
