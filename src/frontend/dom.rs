use js_sys::Array;
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{
    window, Document, Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, NodeList,
};

use crate::telemetry::{LogLevel, Logger};

pub(crate) fn document() -> Option<Document> {
    window()?.document()
}

pub(crate) fn by_id(id: &str) -> Option<HtmlElement> {
    document()?.get_element_by_id(id)?.dyn_into::<HtmlElement>().ok()
}

pub(crate) fn elements(list: NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|index| list.get(index))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

pub(crate) fn query_all(selector: &str) -> Vec<Element> {
    document()
        .and_then(|document| document.query_selector_all(selector).ok())
        .map(elements)
        .unwrap_or_default()
}

pub(crate) fn html_elements(items: Vec<Element>) -> Vec<HtmlElement> {
    items
        .into_iter()
        .filter_map(|element| element.dyn_into::<HtmlElement>().ok())
        .collect()
}

pub(crate) fn root_attribute(name: &str) -> Option<String> {
    document()?.document_element()?.get_attribute(name)
}

pub(crate) fn set_class(element: &Element, class: &str, on: bool) {
    let _ = element.class_list().toggle_with_force(class, on);
}

pub(crate) fn set_style(element: &HtmlElement, property: &str, value: &str) {
    let _ = element.style().set_property(property, value);
}

pub(crate) fn scroll_y() -> f64 {
    window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
}

pub(crate) fn viewport_height() -> f64 {
    window()
        .and_then(|w| w.inner_height().ok())
        .and_then(|value| value.as_f64())
        .unwrap_or(720.0)
}

pub(crate) fn now_ms() -> f64 {
    js_sys::Date::now()
}

pub(crate) fn prefers(query: &str) -> bool {
    window()
        .and_then(|w| w.match_media(query).ok().flatten())
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

/// Passes `found` through, logging when a component's element is missing.
pub(crate) fn require<T>(logger: Logger, component: &str, selector: &str, found: Option<T>) -> Option<T> {
    if found.is_none() {
        logger.event(
            LogLevel::Warn,
            "component_unavailable",
            serde_json::json!({ "component": component, "selector": selector }),
        );
    }
    found
}

/// Intersection observer that disconnects when dropped.
pub(crate) struct Observer {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl Drop for Observer {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Calls `on_visible` once per element, the first time it intersects the
/// viewport by at least `threshold`, then stops watching that element.
pub(crate) fn observe_once(
    targets: &[Element],
    threshold: Option<f64>,
    mut on_visible: impl FnMut(Element) + 'static,
) -> Option<Observer> {
    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if entry.is_intersecting() {
                    let target = entry.target();
                    observer.unobserve(&target);
                    on_visible(target);
                }
            }
        },
    );

    let options = IntersectionObserverInit::new();
    if let Some(threshold) = threshold {
        options.set_threshold(&JsValue::from_f64(threshold));
    }

    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options).ok()?;
    for target in targets {
        observer.observe(target);
    }

    Some(Observer {
        observer,
        _callback: callback,
    })
}
