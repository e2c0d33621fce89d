pub const LAZY_IMAGE_SELECTOR: &str = "img[data-src]";
pub const LAZY_SOURCE_ATTR: &str = "data-src";

/// Source to swap in for a deferred image, if it still has one.
pub fn deferred_source(data_src: Option<String>) -> Option<String> {
    data_src
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}
