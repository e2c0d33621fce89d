use gloo_events::EventListener;
use js_sys::{Function, Reflect};
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{window, Element, HtmlElement, Storage};

use super::{dom, Page};
use crate::telemetry::{LogLevel, Logger};
use crate::theme::{initial_theme, Theme, ThemeStore, THEME_ATTR, THEME_KEY};

struct LocalThemeStore;

fn local_storage() -> Option<Storage> {
    window()?.local_storage().ok().flatten()
}

impl ThemeStore for LocalThemeStore {
    fn load(&self) -> Option<String> {
        local_storage()?.get_item(THEME_KEY).ok().flatten()
    }

    fn save(&self, theme: Theme) {
        if let Some(storage) = local_storage() {
            let _ = storage.set_item(THEME_KEY, theme.as_str());
        }
    }
}

fn root() -> Option<Element> {
    dom::document()?.document_element()
}

fn apply_theme(theme: Theme, toggle: &HtmlElement) {
    if let Some(root) = root() {
        let _ = root.set_attribute(THEME_ATTR, theme.as_str());
    }

    if let Ok(Some(icon)) = toggle.query_selector("i") {
        let (add, remove) = theme.icon_swap();
        let _ = icon.class_list().remove_1(remove);
        let _ = icon.class_list().add_1(add);
    }

    let _ = toggle.set_attribute("aria-pressed", &theme.pressed().to_string());
    let _ = toggle.set_attribute("aria-label", &theme.toggle_label());
}

fn apply_theme_with_transition(theme: Theme, toggle: &HtmlElement) {
    if dom::prefers("(prefers-reduced-motion: reduce)") {
        apply_theme(theme, toggle);
        return;
    }

    let Some(document) = dom::document() else {
        apply_theme(theme, toggle);
        return;
    };

    let document_js: JsValue = document.into();
    let start_view_transition =
        Reflect::get(&document_js, &JsValue::from_str("startViewTransition")).ok();

    let Some(start_view_transition) = start_view_transition
        .as_ref()
        .and_then(|value| value.dyn_ref::<Function>())
    else {
        apply_theme(theme, toggle);
        return;
    };

    let deferred_toggle = toggle.clone();
    let callback = Closure::once_into_js(move || apply_theme(theme, &deferred_toggle));

    if start_view_transition.call1(&document_js, &callback).is_err() {
        apply_theme(theme, toggle);
    }
}

fn set_theme(theme: Theme, toggle: &HtmlElement) {
    LocalThemeStore.save(theme);
    apply_theme_with_transition(theme, toggle);
}

pub(super) fn install(page: &mut Page, logger: Logger) {
    let Some(toggle) = dom::require(logger, "theme", "#theme-toggle", dom::by_id("theme-toggle")) else {
        return;
    };

    let system_prefers_dark = dom::prefers("(prefers-color-scheme: dark)");
    if let Some(theme) = initial_theme(&LocalThemeStore, system_prefers_dark) {
        apply_theme(theme, &toggle);
        logger.event(
            LogLevel::Debug,
            "theme_initialized",
            serde_json::json!({ "theme": theme.as_str(), "system_prefers_dark": system_prefers_dark }),
        );
    }

    let target = toggle.clone();
    page.listeners.push(EventListener::new(&target, "click", move |_event| {
        let current = root().and_then(|root| root.get_attribute(THEME_ATTR));
        let next = Theme::next_from_attribute(current.as_deref());
        set_theme(next, &toggle);
        logger.event(
            LogLevel::Debug,
            "theme_toggled",
            serde_json::json!({ "theme": next.as_str() }),
        );
    }));
}
