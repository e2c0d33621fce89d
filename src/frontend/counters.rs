use gloo_render::{request_animation_frame, AnimationFrame};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys::Element;

use super::{dom, Page};
use crate::counter::{
    CounterAnimation, CounterFrame, COUNTER_SELECTOR, COUNTER_TARGET_ATTR, COUNTER_VISIBILITY_THRESHOLD,
};
use crate::telemetry::{LogLevel, Logger};

type FrameSlot = Rc<RefCell<Option<AnimationFrame>>>;

fn step(element: Element, mut animation: CounterAnimation, slot: FrameSlot) {
    let frame = animation.tick();
    element.set_text_content(Some(&frame.value().to_string()));

    if let CounterFrame::Running(_) = frame {
        let next = Rc::clone(&slot);
        let handle = request_animation_frame(move |_timestamp| {
            next.borrow_mut().take();
            step(element, animation, next);
        });
        *slot.borrow_mut() = Some(handle);
    }
}

fn start(element: Element) {
    let Some(target) = element
        .get_attribute(COUNTER_TARGET_ATTR)
        .and_then(|raw| CounterAnimation::parse_target(&raw))
    else {
        return;
    };
    step(element, CounterAnimation::new(target), FrameSlot::default());
}

pub(super) fn install(page: &mut Page, logger: Logger) {
    let counters: Vec<Element> = dom::query_all(COUNTER_SELECTOR)
        .into_iter()
        .filter(|counter| {
            let raw = counter.get_attribute(COUNTER_TARGET_ATTR).unwrap_or_default();
            let valid = CounterAnimation::parse_target(&raw).is_some();
            if !valid {
                logger.event(
                    LogLevel::Warn,
                    "counter_target_invalid",
                    serde_json::json!({ "value": raw }),
                );
            }
            valid
        })
        .collect();

    if counters.is_empty() {
        return;
    }

    if let Some(observer) = dom::observe_once(&counters, Some(COUNTER_VISIBILITY_THRESHOLD), start) {
        page.observers.push(observer);
    }
}
