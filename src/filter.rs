pub const FILTER_ALL: &str = "all";
pub const FILTER_ATTR: &str = "data-filter";
pub const CATEGORY_ATTR: &str = "data-category";
/// Delay between restoring `display` and starting the fade-in.
pub const SHOW_DELAY_MS: u32 = 10;
pub const HIDE_FADE_MS: u32 = 300;

pub fn card_visible(filter: &str, category: Option<&str>) -> bool {
    filter == FILTER_ALL || category == Some(filter)
}

/// Inline style change applied to a card during a fade.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardStyle {
    DisplayBlock,
    DisplayNone,
    Shown,
    Hidden,
}

impl CardStyle {
    pub fn declarations(self) -> &'static [(&'static str, &'static str)] {
        match self {
            Self::DisplayBlock => &[("display", "block")],
            Self::DisplayNone => &[("display", "none")],
            Self::Shown => &[("opacity", "1"), ("transform", "translateY(0)")],
            Self::Hidden => &[("opacity", "0"), ("transform", "translateY(20px)")],
        }
    }
}

/// Timed style steps for revealing or hiding one card, delays in ms.
pub fn fade_steps(visible: bool) -> [(u32, CardStyle); 2] {
    if visible {
        [(0, CardStyle::DisplayBlock), (SHOW_DELAY_MS, CardStyle::Shown)]
    } else {
        [(0, CardStyle::Hidden), (HIDE_FADE_MS, CardStyle::DisplayNone)]
    }
}

/// Active category plus a generation bumped on every selection.
///
/// Deferred fade steps carry the generation they were scheduled under and
/// are dropped once a newer selection exists.
#[derive(Clone, Debug)]
pub struct ProjectFilter {
    active: String,
    generation: u64,
}

impl Default for ProjectFilter {
    fn default() -> Self {
        Self {
            active: FILTER_ALL.to_string(),
            generation: 0,
        }
    }
}

impl ProjectFilter {
    pub fn active(&self) -> &str {
        &self.active
    }

    pub fn select(&mut self, filter: &str) -> u64 {
        self.active = filter.to_string();
        self.generation += 1;
        self.generation
    }

    pub fn is_current(&self, generation: u64) -> bool {
        self.generation == generation
    }

    /// Immediate steps always apply; deferred ones only under the latest selection.
    pub fn step_applies(&self, generation: u64, delay_ms: u32) -> bool {
        delay_ms == 0 || self.is_current(generation)
    }

    pub fn plan<'a>(&self, categories: impl IntoIterator<Item = Option<&'a str>>) -> Vec<bool> {
        categories
            .into_iter()
            .map(|category| card_visible(&self.active, category))
            .collect()
    }
}
