use gloo_events::{EventListener, EventListenerOptions};
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, KeyboardEvent};

use super::{dom, Page};
use crate::menu::{MenuController, MenuView, FOCUSABLE_SELECTOR};
use crate::telemetry::{LogLevel, Logger};

const ACTIVE_CLASS: &str = "active";

pub(super) type MobileNav = Rc<RefCell<MenuController<DomMenu>>>;

pub(super) struct DomMenu {
    toggle: HtmlElement,
    menu: HtmlElement,
    trap: RefCell<Option<EventListener>>,
    controller: Weak<RefCell<MenuController<DomMenu>>>,
}

impl DomMenu {
    fn focusable(&self) -> Vec<Element> {
        self.menu
            .query_selector_all(FOCUSABLE_SELECTOR)
            .map(dom::elements)
            .unwrap_or_default()
    }
}

impl MenuView for DomMenu {
    fn show(&self, open: bool) {
        dom::set_class(&self.toggle, ACTIVE_CLASS, open);
        dom::set_class(&self.menu, ACTIVE_CLASS, open);
        let _ = self.toggle.set_attribute("aria-expanded", &open.to_string());

        if let Some(body) = dom::document().and_then(|document| document.body()) {
            if open {
                dom::set_style(&body, "overflow", "hidden");
            } else {
                let _ = body.style().remove_property("overflow");
            }
        }
    }

    fn install_trap(&self) {
        let Some(document) = dom::document() else {
            return;
        };

        let controller = self.controller.clone();
        let listener = EventListener::new_with_options(
            &document,
            "keydown",
            EventListenerOptions::enable_prevent_default(),
            move |event| {
                let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
                    return;
                };
                let Some(controller) = controller.upgrade() else {
                    return;
                };
                let consumed = match controller.try_borrow_mut() {
                    Ok(mut controller) => controller.handle_key(&event.key(), event.shift_key()),
                    Err(_) => false,
                };
                if consumed {
                    event.prevent_default();
                }
            },
        );
        *self.trap.borrow_mut() = Some(listener);
    }

    fn remove_trap(&self) {
        self.trap.borrow_mut().take();
    }

    fn focusable_count(&self) -> usize {
        self.focusable().len()
    }

    fn focused_index(&self) -> Option<usize> {
        let active = dom::document()?.active_element()?;
        self.focusable().iter().position(|item| item == &active)
    }

    fn focus_item(&self, index: usize) {
        if let Some(item) = self
            .focusable()
            .get(index)
            .and_then(|item| item.dyn_ref::<HtmlElement>())
        {
            let _ = item.focus();
        }
    }

    fn focus_toggle(&self) {
        let _ = self.toggle.focus();
    }
}

pub(super) fn install(page: &mut Page, logger: Logger) {
    let toggle = dom::require(logger, "mobile_nav", "#nav-toggle", dom::by_id("nav-toggle"));
    let menu = dom::require(logger, "mobile_nav", "#nav-menu", dom::by_id("nav-menu"));
    let (Some(toggle), Some(menu)) = (toggle, menu) else {
        return;
    };

    let nav: MobileNav = Rc::new_cyclic(|controller| {
        RefCell::new(MenuController::new(DomMenu {
            toggle: toggle.clone(),
            menu,
            trap: RefCell::new(None),
            controller: controller.clone(),
        }))
    });

    let on_toggle = Rc::downgrade(&nav);
    page.listeners.push(EventListener::new(&toggle, "click", move |_event| {
        let Some(nav) = on_toggle.upgrade() else {
            return;
        };
        let Ok(mut nav) = nav.try_borrow_mut() else {
            return;
        };
        nav.toggle();
        logger.event(
            LogLevel::Debug,
            "mobile_nav_toggled",
            serde_json::json!({ "open": nav.is_open() }),
        );
    }));

    for link in dom::query_all(".nav-link") {
        let on_link = Rc::downgrade(&nav);
        page.listeners.push(EventListener::new(&link, "click", move |_event| {
            if let Some(nav) = on_link.upgrade() {
                if let Ok(mut nav) = nav.try_borrow_mut() {
                    nav.close();
                }
            }
        }));
    }

    page.nav = Some(nav);
}
