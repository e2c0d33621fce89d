use gloo_events::{EventListener, EventListenerOptions};
use wasm_bindgen::JsCast;
use web_sys::{window, HtmlElement, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition, ScrollToOptions};

use super::{dom, Page};
use crate::config::SiteConfig;
use crate::scroll::{
    active_section, anchor_target, chrome_state, nav_href, should_reveal, SectionSpan, REVEAL_SELECTOR,
};
use crate::telemetry::Logger;
use crate::throttle::throttle;

fn reveal_visible() {
    let viewport_height = dom::viewport_height();

    for element in dom::query_all(REVEAL_SELECTOR) {
        if should_reveal(element.get_bounding_client_rect().top(), viewport_height) {
            dom::set_class(&element, "revealed", true);
        }
    }
}

fn section_spans() -> Vec<SectionSpan> {
    dom::html_elements(dom::query_all("section[id]"))
        .into_iter()
        .map(|section| SectionSpan {
            id: section.id(),
            top: f64::from(section.offset_top()),
            height: f64::from(section.offset_height()),
        })
        .collect()
}

fn highlight_active_link(links: &[web_sys::Element]) {
    let sections = section_spans();
    let active_href = active_section(&sections, dom::scroll_y()).map(nav_href);

    for link in links {
        let is_active = active_href.is_some() && link.get_attribute("href") == active_href;
        dom::set_class(link, "active", is_active);
    }
}

fn scroll_to_top() {
    if let Some(window) = window() {
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

pub(super) fn install(page: &mut Page, config: &SiteConfig, logger: Logger) {
    let Some(window) = window() else {
        return;
    };
    let interval = config.scroll_throttle_ms;

    let navbar = dom::require(logger, "navbar", "#navbar", dom::by_id("navbar"));
    let back_to_top = dom::require(logger, "back_to_top", "#back-to-top", dom::by_id("back-to-top"));

    if navbar.is_some() || back_to_top.is_some() {
        let navbar = navbar.clone();
        let back_to_top = back_to_top.clone();
        let mut on_scroll = throttle(interval, dom::now_ms, move |()| {
            let state = chrome_state(dom::scroll_y());
            if let Some(navbar) = &navbar {
                dom::set_class(navbar, "scrolled", state.navbar_scrolled);
            }
            if let Some(back_to_top) = &back_to_top {
                dom::set_class(back_to_top, "visible", state.back_to_top_visible);
            }
        });
        page.listeners.push(EventListener::new(&window, "scroll", move |_event| on_scroll(())));
    }

    if let Some(back_to_top) = &back_to_top {
        page.listeners.push(EventListener::new(back_to_top, "click", move |_event| scroll_to_top()));
    }

    let links = dom::query_all(".nav-link");
    if !links.is_empty() {
        let mut on_scroll = throttle(interval, dom::now_ms, move |()| highlight_active_link(&links));
        page.listeners.push(EventListener::new(&window, "scroll", move |_event| on_scroll(())));
    }

    let mut on_scroll = throttle(interval, dom::now_ms, move |()| reveal_visible());
    page.listeners.push(EventListener::new(&window, "scroll", move |_event| on_scroll(())));

    page.listeners.push(EventListener::new(&window, "load", move |_event| {
        reveal_visible();
        if let Some(body) = dom::document().and_then(|document| document.body()) {
            dom::set_class(&body, "loaded", true);
        }
    }));

    for anchor in dom::query_all("a[href^=\"#\"]") {
        let Some(anchor) = anchor.dyn_into::<HtmlElement>().ok() else {
            continue;
        };
        let href = anchor.get_attribute("href").unwrap_or_default();
        let Some(target_id) = anchor_target(&href).map(ToString::to_string) else {
            continue;
        };

        page.listeners.push(EventListener::new_with_options(
            &anchor,
            "click",
            EventListenerOptions::enable_prevent_default(),
            move |event| {
                let Some(target) = dom::document().and_then(|document| document.get_element_by_id(&target_id))
                else {
                    return;
                };
                event.prevent_default();
                let options = ScrollIntoViewOptions::new();
                options.set_behavior(ScrollBehavior::Smooth);
                options.set_block(ScrollLogicalPosition::Start);
                target.scroll_into_view_with_scroll_into_view_options(&options);
            },
        ));
    }

    reveal_visible();
}
