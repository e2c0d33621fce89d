use gloo_timers::callback::Timeout;
use std::rc::Rc;
use web_sys::HtmlElement;

use super::{dom, Page};
use crate::config::SiteConfig;
use crate::task::TaskHandle;
use crate::telemetry::Logger;
use crate::typing::{TypingCursor, START_DELAY_MS};

fn schedule(
    target: HtmlElement,
    phrases: Rc<[String]>,
    mut cursor: TypingCursor,
    handle: TaskHandle,
    delay_ms: u32,
) {
    Timeout::new(delay_ms, move || {
        if handle.is_cancelled() {
            return;
        }
        let Some(frame) = cursor.advance(&phrases) else {
            return;
        };
        target.set_text_content(Some(&frame.text));
        schedule(target, phrases, cursor, handle, frame.delay_ms);
    })
    .forget();
}

pub(super) fn install(page: &mut Page, config: &SiteConfig, logger: Logger) {
    let Some(target) = dom::require(logger, "typing", "#typing-text", dom::by_id("typing-text")) else {
        return;
    };

    let handle = TaskHandle::new();
    let phrases: Rc<[String]> = config.typing_phrases.clone().into();
    schedule(target, phrases, TypingCursor::default(), handle.clone(), START_DELAY_MS);
    page.tasks.push(handle);
}
