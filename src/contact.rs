//! Contact form submission to the hosted form endpoint.

use serde::Deserialize;
use url::{form_urlencoded, Url};

use crate::telemetry::{LogLevel, Logger};

pub const LOADING_LABEL: &str = "傳送中...";
pub const TOAST_TITLE: &str = "訊息已送出！";
pub const TOAST_MESSAGE: &str = "感謝您的來信，我會盡快回覆您。";
pub const FAILURE_ALERT: &str = "訊息傳送失敗，請稍後再試。";
pub const TOAST_VISIBLE_MS: u32 = 3_000;
pub const TOAST_FADE_MS: u32 = 300;
/// A `<button>` without `type` submits its form, so it counts too.
pub const SUBMIT_BUTTON_SELECTOR: &str = "button:not([type]), button[type=\"submit\"]";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastPhase {
    Visible,
    Fading,
    Removed,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub title: &'static str,
    pub message: &'static str,
    pub visible_ms: u32,
    pub fade_ms: u32,
}

impl Default for Toast {
    fn default() -> Self {
        Self {
            title: TOAST_TITLE,
            message: TOAST_MESSAGE,
            visible_ms: TOAST_VISIBLE_MS,
            fade_ms: TOAST_FADE_MS,
        }
    }
}

impl Toast {
    pub fn lifetime_ms(&self) -> u32 {
        self.visible_ms + self.fade_ms
    }

    /// Delays from mount at which the toast enters each later phase.
    pub fn schedule(&self) -> [(u32, ToastPhase); 2] {
        [
            (self.visible_ms, ToastPhase::Fading),
            (self.lifetime_ms(), ToastPhase::Removed),
        ]
    }

    pub fn delay_for(&self, phase: ToastPhase) -> Option<u32> {
        self.schedule()
            .into_iter()
            .find(|(_, scheduled)| *scheduled == phase)
            .map(|(delay_ms, _)| delay_ms)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransportReply {
    pub status: u16,
    pub body: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitError {
    Transport(String),
    Status { status: u16, detail: Option<String> },
}

impl SubmitError {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Transport(_) => "transport",
            Self::Status { .. } => "status",
        }
    }
}

/// Sends an encoded form body; `Err` means the request never produced a response.
#[allow(async_fn_in_trait)]
pub trait FormTransport {
    async fn post_form(&self, endpoint: &Url, body: String) -> Result<TransportReply, String>;
}

/// The form and its submit control, as seen by the submit flow.
pub trait ContactFormView {
    fn fields(&self) -> Vec<(String, String)>;
    fn submit_label(&self) -> String;
    fn set_submit_state(&self, disabled: bool, label: &str);
    fn reset(&self);
    fn show_toast(&self, toast: Toast);
    fn alert(&self, message: &str);
}

#[derive(Deserialize)]
struct EndpointReply {
    #[serde(default)]
    errors: Vec<EndpointError>,
}

#[derive(Deserialize)]
struct EndpointError {
    message: String,
}

pub fn encode_fields(fields: &[(String, String)]) -> String {
    form_urlencoded::Serializer::new(String::new())
        .extend_pairs(fields.iter().map(|(name, value)| (name.as_str(), value.as_str())))
        .finish()
}

fn error_detail(body: &str) -> Option<String> {
    let reply: EndpointReply = serde_json::from_str(body).ok()?;
    let messages: Vec<String> = reply.errors.into_iter().map(|error| error.message).collect();

    (!messages.is_empty()).then(|| messages.join("; "))
}

fn classify_reply(reply: TransportReply) -> Result<u16, SubmitError> {
    if (200..300).contains(&reply.status) {
        Ok(reply.status)
    } else {
        Err(SubmitError::Status {
            status: reply.status,
            detail: error_detail(&reply.body),
        })
    }
}

pub async fn post_contact(
    transport: &impl FormTransport,
    endpoint: &Url,
    fields: &[(String, String)],
) -> Result<u16, SubmitError> {
    let reply = transport
        .post_form(endpoint, encode_fields(fields))
        .await
        .map_err(SubmitError::Transport)?;

    classify_reply(reply)
}

/// Full submit flow: lock the button, post, report, always unlock.
pub async fn submit_contact(
    transport: &impl FormTransport,
    view: &impl ContactFormView,
    endpoint: &Url,
    logger: Logger,
) -> Result<(), SubmitError> {
    let original_label = view.submit_label();
    view.set_submit_state(true, LOADING_LABEL);

    let fields = view.fields();
    logger.event(
        LogLevel::Debug,
        "contact_submit_started",
        serde_json::json!({ "fields": fields.len() }),
    );

    let outcome = post_contact(transport, endpoint, &fields).await;

    match &outcome {
        Ok(status) => {
            logger.event(
                LogLevel::Info,
                "contact_submit_succeeded",
                serde_json::json!({ "status": status }),
            );
            view.show_toast(Toast::default());
            view.reset();
        }
        Err(error) => {
            let (status, detail) = match error {
                SubmitError::Transport(message) => (None, Some(message.clone())),
                SubmitError::Status { status, detail } => (Some(*status), detail.clone()),
            };
            logger.event(
                LogLevel::Warn,
                "contact_submit_failed",
                serde_json::json!({
                    "reason": error.as_str(),
                    "status": status,
                    "detail": detail,
                }),
            );
            view.alert(FAILURE_ALERT);
        }
    }

    view.set_submit_state(false, &original_label);
    outcome.map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    struct StubTransport {
        reply: Result<TransportReply, String>,
        sent: RefCell<Vec<String>>,
    }

    impl StubTransport {
        fn replying(status: u16, body: &str) -> Self {
            Self {
                reply: Ok(TransportReply {
                    status,
                    body: body.to_string(),
                }),
                sent: RefCell::new(Vec::new()),
            }
        }

        fn failing(message: &str) -> Self {
            Self {
                reply: Err(message.to_string()),
                sent: RefCell::new(Vec::new()),
            }
        }
    }

    impl FormTransport for StubTransport {
        async fn post_form(&self, _endpoint: &Url, body: String) -> Result<TransportReply, String> {
            self.sent.borrow_mut().push(body);
            self.reply.clone()
        }
    }

    struct FakeForm {
        fields: RefCell<Vec<(String, String)>>,
        label: RefCell<String>,
        disabled: RefCell<bool>,
        label_history: RefCell<Vec<(bool, String)>>,
        toasts: RefCell<Vec<Toast>>,
        alerts: RefCell<Vec<String>>,
    }

    impl FakeForm {
        fn filled() -> Self {
            Self {
                fields: RefCell::new(vec![
                    ("name".to_string(), "Ada".to_string()),
                    ("email".to_string(), "ada@example.com".to_string()),
                    ("message".to_string(), "Hello & welcome".to_string()),
                ]),
                label: RefCell::new("送出訊息".to_string()),
                disabled: RefCell::new(false),
                label_history: RefCell::new(Vec::new()),
                toasts: RefCell::new(Vec::new()),
                alerts: RefCell::new(Vec::new()),
            }
        }
    }

    impl ContactFormView for FakeForm {
        fn fields(&self) -> Vec<(String, String)> {
            self.fields.borrow().clone()
        }

        fn submit_label(&self) -> String {
            self.label.borrow().clone()
        }

        fn set_submit_state(&self, disabled: bool, label: &str) {
            *self.disabled.borrow_mut() = disabled;
            *self.label.borrow_mut() = label.to_string();
            self.label_history.borrow_mut().push((disabled, label.to_string()));
        }

        fn reset(&self) {
            for (_, value) in self.fields.borrow_mut().iter_mut() {
                value.clear();
            }
        }

        fn show_toast(&self, toast: Toast) {
            self.toasts.borrow_mut().push(toast);
        }

        fn alert(&self, message: &str) {
            self.alerts.borrow_mut().push(message.to_string());
        }
    }

    fn endpoint() -> Url {
        Url::parse("https://forms.example.com/f/abc").expect("valid URL")
    }

    #[tokio::test]
    async fn success_shows_toast_and_clears_fields() {
        let transport = StubTransport::replying(200, r#"{"ok":true}"#);
        let form = FakeForm::filled();

        let result = submit_contact(&transport, &form, &endpoint(), Logger::default()).await;

        assert_eq!(result, Ok(()));
        assert!(form.alerts.borrow().is_empty());
        assert!(form.fields.borrow().iter().all(|(_, value)| value.is_empty()));

        let toasts = form.toasts.borrow();
        assert_eq!(toasts.len(), 1);
        let toast = &toasts[0];
        assert_eq!(
            toast.schedule(),
            [
                (TOAST_VISIBLE_MS, ToastPhase::Fading),
                (TOAST_VISIBLE_MS + TOAST_FADE_MS, ToastPhase::Removed),
            ]
        );
    }

    #[tokio::test]
    async fn failure_status_alerts_and_restores_button() {
        let transport = StubTransport::replying(
            422,
            r#"{"errors":[{"field":"email","message":"should be an email"}]}"#,
        );
        let form = FakeForm::filled();

        let result = submit_contact(&transport, &form, &endpoint(), Logger::default()).await;

        assert_eq!(
            result,
            Err(SubmitError::Status {
                status: 422,
                detail: Some("should be an email".to_string()),
            })
        );
        assert_eq!(*form.alerts.borrow(), vec![FAILURE_ALERT.to_string()]);
        assert!(form.toasts.borrow().is_empty());
        assert!(!*form.disabled.borrow());
        assert_eq!(*form.label.borrow(), "送出訊息");
        assert_eq!(form.fields.borrow()[0].1, "Ada");
    }

    #[tokio::test]
    async fn transport_error_alerts_and_restores_button() {
        let transport = StubTransport::failing("network unreachable");
        let form = FakeForm::filled();

        let result = submit_contact(&transport, &form, &endpoint(), Logger::default()).await;

        assert_eq!(result.as_ref().map_err(SubmitError::as_str), Err("transport"));
        assert_eq!(form.alerts.borrow().len(), 1);
        assert_eq!(
            *form.label_history.borrow(),
            vec![
                (true, LOADING_LABEL.to_string()),
                (false, "送出訊息".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn body_is_form_encoded() {
        let transport = StubTransport::replying(200, "");
        let form = FakeForm::filled();

        submit_contact(&transport, &form, &endpoint(), Logger::default())
            .await
            .expect("stubbed success");

        assert_eq!(
            transport.sent.borrow()[0],
            "name=Ada&email=ada%40example.com&message=Hello+%26+welcome"
        );
    }

    #[test]
    fn toast_phase_delays_follow_the_schedule() {
        let toast = Toast {
            visible_ms: 1_000,
            fade_ms: 250,
            ..Toast::default()
        };

        assert_eq!(toast.delay_for(ToastPhase::Visible), None);
        assert_eq!(toast.delay_for(ToastPhase::Fading), Some(1_000));
        assert_eq!(toast.delay_for(ToastPhase::Removed), Some(1_250));
    }

    #[test]
    fn submit_selector_matches_untyped_buttons() {
        let alternatives: Vec<&str> = SUBMIT_BUTTON_SELECTOR.split(", ").collect();

        assert_eq!(alternatives, vec!["button:not([type])", "button[type=\"submit\"]"]);
    }

    #[test]
    fn non_json_error_body_has_no_detail() {
        let result = classify_reply(TransportReply {
            status: 500,
            body: "<html>oops</html>".to_string(),
        });

        assert_eq!(
            result,
            Err(SubmitError::Status {
                status: 500,
                detail: None,
            })
        );
    }
}
