use gloo_events::EventListener;
use gloo_timers::callback::Timeout;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys::{Element, HtmlElement};

use super::{dom, Page};
use crate::filter::{fade_steps, CardStyle, ProjectFilter, CATEGORY_ATTR, FILTER_ALL, FILTER_ATTR};
use crate::telemetry::{LogLevel, Logger};

type SharedFilter = Rc<RefCell<ProjectFilter>>;

fn apply(card: &HtmlElement, style: CardStyle) {
    for (property, value) in style.declarations() {
        dom::set_style(card, property, value);
    }
}

fn fade(card: &HtmlElement, visible: bool, state: &SharedFilter, generation: u64) {
    for (delay_ms, style) in fade_steps(visible) {
        if delay_ms == 0 {
            apply(card, style);
            continue;
        }

        let card = card.clone();
        let state = Rc::clone(state);
        Timeout::new(delay_ms, move || {
            if state.borrow().step_applies(generation, delay_ms) {
                apply(&card, style);
            }
        })
        .forget();
    }
}

pub(super) fn install(page: &mut Page, logger: Logger) {
    let buttons: Rc<[Element]> = dom::query_all(".filter-btn").into();
    let cards: Rc<[HtmlElement]> = dom::html_elements(dom::query_all(".project-card")).into();

    if buttons.is_empty() {
        return;
    }

    let state = SharedFilter::default();

    for button in buttons.iter() {
        let clicked = button.clone();
        let buttons = Rc::clone(&buttons);
        let cards = Rc::clone(&cards);
        let state = Rc::clone(&state);

        page.listeners.push(EventListener::new(button, "click", move |_event| {
            for other in buttons.iter() {
                dom::set_class(other, "active", other == &clicked);
            }

            let filter = clicked
                .get_attribute(FILTER_ATTR)
                .unwrap_or_else(|| FILTER_ALL.to_string());
            let generation = state.borrow_mut().select(&filter);
            let categories: Vec<Option<String>> =
                cards.iter().map(|card| card.get_attribute(CATEGORY_ATTR)).collect();
            let plan = state.borrow().plan(categories.iter().map(Option::as_deref));

            let mut shown = 0;
            for (card, visible) in cards.iter().zip(plan) {
                if visible {
                    shown += 1;
                }
                fade(card, visible, &state, generation);
            }

            logger.event(
                LogLevel::Debug,
                "project_filter_applied",
                serde_json::json!({ "filter": filter, "shown": shown, "total": cards.len() }),
            );
        }));
    }
}
