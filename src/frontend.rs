//! Binds the page behaviors to the host document.
//!
//! Each component looks up its own elements; a missing element disables that
//! component only. Every listener, observer and task lives in [`Page`], so
//! [`unmount`] tears the whole layer down.

mod contact;
mod counters;
mod decor;
mod dom;
mod filter;
mod nav;
mod scroll;
mod theme;
mod typing;

use gloo_events::EventListener;
use std::cell::RefCell;
use yew::AppHandle;

use crate::config::SiteConfig;
use crate::task::TaskHandle;
use crate::telemetry::{self, LogLevel, Logger};

thread_local! {
    static PAGE: RefCell<Option<Page>> = const { RefCell::new(None) };
}

#[derive(Default)]
struct Page {
    listeners: Vec<EventListener>,
    observers: Vec<dom::Observer>,
    tasks: Vec<TaskHandle>,
    particles: Option<AppHandle<decor::ParticleField>>,
    nav: Option<nav::MobileNav>,
}

impl Page {
    fn mount(config: &SiteConfig, logger: Logger) -> Self {
        let mut page = Self::default();

        theme::install(&mut page, logger);
        nav::install(&mut page, logger);
        scroll::install(&mut page, config, logger);
        typing::install(&mut page, config, logger);
        counters::install(&mut page, logger);
        filter::install(&mut page, logger);
        contact::install(&mut page, config, logger);
        decor::install(&mut page, config, logger);

        logger.event(
            LogLevel::Debug,
            "page_mounted",
            serde_json::json!({
                "listeners": page.listeners.len(),
                "observers": page.observers.len(),
                "tasks": page.tasks.len(),
                "mobile_nav": page.nav.is_some(),
            }),
        );
        page
    }
}

impl Drop for Page {
    fn drop(&mut self) {
        for task in &self.tasks {
            task.cancel();
        }
        if let Some(particles) = self.particles.take() {
            particles.destroy();
        }
    }
}

pub fn run() {
    let config = SiteConfig::from_lookup(dom::root_attribute);
    let logger = Logger::new(config.log_level);

    telemetry::print_banner();
    let page = Page::mount(&config, logger);
    let previous = PAGE.with(|slot| slot.borrow_mut().replace(page));
    drop(previous);
}

/// Removes every listener, observer and running task installed by [`run`].
pub fn unmount() {
    let page = PAGE.with(|slot| slot.borrow_mut().take());
    drop(page);
}
