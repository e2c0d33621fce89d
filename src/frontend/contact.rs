use gloo_events::{EventListener, EventListenerOptions};
use gloo_net::http::Request;
use std::cell::Cell;
use std::rc::Rc;
use url::Url;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{window, FormData, HtmlButtonElement, HtmlFormElement};

use super::{decor, dom, Page};
use crate::config::{SiteConfig, FORM_ENDPOINT_ATTR};
use crate::contact::{
    submit_contact, ContactFormView, FormTransport, Toast, TransportReply, SUBMIT_BUTTON_SELECTOR,
};
use crate::telemetry::Logger;

struct FetchTransport;

impl FormTransport for FetchTransport {
    async fn post_form(&self, endpoint: &Url, body: String) -> Result<TransportReply, String> {
        let response = Request::post(endpoint.as_str())
            .header("Accept", "application/json")
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(body)
            .map_err(|error| error.to_string())?
            .send()
            .await
            .map_err(|error| error.to_string())?;

        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        Ok(TransportReply { status, body })
    }
}

struct DomContactForm {
    form: HtmlFormElement,
    submit: Option<HtmlButtonElement>,
}

impl ContactFormView for DomContactForm {
    fn fields(&self) -> Vec<(String, String)> {
        let Ok(data) = FormData::new_with_form(&self.form) else {
            return Vec::new();
        };
        let Ok(Some(entries)) = js_sys::try_iter(&data) else {
            return Vec::new();
        };

        entries
            .filter_map(Result::ok)
            .filter_map(|entry| {
                let pair = js_sys::Array::from(&entry);
                Some((pair.get(0).as_string()?, pair.get(1).as_string()?))
            })
            .collect()
    }

    fn submit_label(&self) -> String {
        self.submit
            .as_ref()
            .map(|button| button.inner_html())
            .unwrap_or_default()
    }

    fn set_submit_state(&self, disabled: bool, label: &str) {
        if let Some(button) = &self.submit {
            button.set_disabled(disabled);
            button.set_inner_html(label);
        }
    }

    fn reset(&self) {
        self.form.reset();
    }

    fn show_toast(&self, toast: Toast) {
        decor::show_toast(toast);
    }

    fn alert(&self, message: &str) {
        if let Some(window) = window() {
            let _ = window.alert_with_message(message);
        }
    }
}

pub(super) fn install(page: &mut Page, config: &SiteConfig, logger: Logger) {
    let Some(form) = dom::require(logger, "contact_form", "#contact-form", dom::by_id("contact-form"))
        .and_then(|element| element.dyn_into::<HtmlFormElement>().ok())
    else {
        return;
    };
    let Some(endpoint) = dom::require(
        logger,
        "contact_form",
        FORM_ENDPOINT_ATTR,
        config.form_endpoint.clone(),
    ) else {
        return;
    };

    let submit = form
        .query_selector(SUBMIT_BUTTON_SELECTOR)
        .ok()
        .flatten()
        .and_then(|element| element.dyn_into::<HtmlButtonElement>().ok());

    let target = form.clone();
    let view = Rc::new(DomContactForm { form, submit });
    let in_flight = Rc::new(Cell::new(false));

    page.listeners.push(EventListener::new_with_options(
        &target,
        "submit",
        EventListenerOptions::enable_prevent_default(),
        move |event| {
            event.prevent_default();
            if in_flight.replace(true) {
                return;
            }

            let view = Rc::clone(&view);
            let endpoint = endpoint.clone();
            let in_flight = Rc::clone(&in_flight);
            spawn_local(async move {
                let _ = submit_contact(&FetchTransport, &*view, &endpoint, logger).await;
                in_flight.set(false);
            });
        },
    ));
}
