use url::Url;

use crate::telemetry::{LogLevel, DEFAULT_LOG_LEVEL};
use crate::typing::DEFAULT_PHRASES;

pub const DEFAULT_SCROLL_THROTTLE_MS: u32 = 100;
pub const DEFAULT_PARTICLE_COUNT: usize = 50;

const SCROLL_THROTTLE_MS_BOUNDS: (u32, u32) = (0, 1_000);
const PARTICLE_COUNT_BOUNDS: (usize, usize) = (0, 500);

pub const SCROLL_THROTTLE_ATTR: &str = "data-scroll-throttle-ms";
pub const PARTICLE_COUNT_ATTR: &str = "data-particle-count";
pub const FORM_ENDPOINT_ATTR: &str = "data-form-endpoint";
pub const TYPING_PHRASES_ATTR: &str = "data-typing-phrases";
pub const LOG_LEVEL_ATTR: &str = "data-log-level";

/// Page-level knobs read from `data-*` attributes on the document element.
#[derive(Clone, Debug, PartialEq)]
pub struct SiteConfig {
    /// Zero disables throttling of scroll handlers.
    pub scroll_throttle_ms: u32,
    pub particle_count: usize,
    /// `None` leaves the contact form unwired.
    pub form_endpoint: Option<Url>,
    pub typing_phrases: Vec<String>,
    pub log_level: LogLevel,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            scroll_throttle_ms: DEFAULT_SCROLL_THROTTLE_MS,
            particle_count: DEFAULT_PARTICLE_COUNT,
            form_endpoint: None,
            typing_phrases: default_phrases(),
            log_level: DEFAULT_LOG_LEVEL,
        }
    }
}

impl SiteConfig {
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let scroll_throttle_ms = parse_u32_with_bounds(
            lookup(SCROLL_THROTTLE_ATTR),
            DEFAULT_SCROLL_THROTTLE_MS,
            SCROLL_THROTTLE_MS_BOUNDS,
        );
        let particle_count = parse_usize_with_bounds(
            lookup(PARTICLE_COUNT_ATTR),
            DEFAULT_PARTICLE_COUNT,
            PARTICLE_COUNT_BOUNDS,
        );
        let form_endpoint = parse_http_url(lookup(FORM_ENDPOINT_ATTR));
        let typing_phrases = parse_phrases(lookup(TYPING_PHRASES_ATTR)).unwrap_or_else(default_phrases);
        let log_level = non_empty(lookup(LOG_LEVEL_ATTR))
            .and_then(|value| LogLevel::parse(&value))
            .unwrap_or(DEFAULT_LOG_LEVEL);

        Self {
            scroll_throttle_ms,
            particle_count,
            form_endpoint,
            typing_phrases,
            log_level,
        }
    }
}

fn default_phrases() -> Vec<String> {
    DEFAULT_PHRASES.iter().map(|phrase| phrase.to_string()).collect()
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn parse_u32_with_bounds(value: Option<String>, default: u32, bounds: (u32, u32)) -> u32 {
    non_empty(value)
        .and_then(|value| value.parse::<u32>().ok())
        .filter(|value| (bounds.0..=bounds.1).contains(value))
        .unwrap_or(default)
}

fn parse_usize_with_bounds(value: Option<String>, default: usize, bounds: (usize, usize)) -> usize {
    non_empty(value)
        .and_then(|value| value.parse::<usize>().ok())
        .filter(|value| (bounds.0..=bounds.1).contains(value))
        .unwrap_or(default)
}

fn parse_http_url(value: Option<String>) -> Option<Url> {
    let parsed = Url::parse(&non_empty(value)?).ok()?;

    if parsed.scheme() == "http" || parsed.scheme() == "https" {
        Some(parsed)
    } else {
        None
    }
}

fn parse_phrases(value: Option<String>) -> Option<Vec<String>> {
    let phrases: Vec<String> = non_empty(value)?
        .split('|')
        .map(str::trim)
        .filter(|phrase| !phrase.is_empty())
        .map(ToString::to_string)
        .collect();

    (!phrases.is_empty()).then_some(phrases)
}
