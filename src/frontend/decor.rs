use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlImageElement};
use yew::prelude::*;

use super::{dom, Page};
use crate::config::SiteConfig;
use crate::contact::{Toast, ToastPhase};
use crate::lazy::{deferred_source, LAZY_IMAGE_SELECTOR, LAZY_SOURCE_ATTR};
use crate::particles::{generate, ParticleSpec, PARTICLE_CLASS, PARTICLE_KEYFRAMES};
use crate::telemetry::{LogLevel, Logger};

const TOAST_KEYFRAMES: &str = "@keyframes fadeInUp {
    from { opacity: 0; transform: translate(-50%, -40%); }
    to { opacity: 1; transform: translate(-50%, -50%); }
}
@keyframes fadeOutDown {
    from { opacity: 1; transform: translate(-50%, -50%); }
    to { opacity: 0; transform: translate(-50%, -40%); }
}";

const TOAST_STYLE: &str = "position: fixed; top: 50%; left: 50%; transform: translate(-50%, -50%); \
    background: var(--gradient-primary); color: white; padding: 2rem 3rem; border-radius: 1rem; \
    box-shadow: 0 20px 60px rgba(0,0,0,0.3); z-index: 1000; text-align: center;";

const OVERLAY_STYLE: &str =
    "position: fixed; inset: 0; background: rgba(0,0,0,0.5); z-index: 999; transition: opacity 0.3s ease;";

#[derive(Properties, PartialEq)]
pub(super) struct ParticleFieldProps {
    particles: Vec<ParticleSpec>,
}

#[function_component(ParticleField)]
pub(super) fn particle_field(props: &ParticleFieldProps) -> Html {
    html! {
        <>
            <style>{PARTICLE_KEYFRAMES}</style>
            { for props.particles.iter().map(|particle| html! {
                <div class={PARTICLE_CLASS} style={particle.style()} aria-hidden="true"></div>
            }) }
        </>
    }
}

#[derive(Properties, PartialEq)]
struct ToastViewProps {
    title: AttrValue,
    message: AttrValue,
    fading_at_ms: u32,
    fade_ms: u32,
}

#[function_component(ToastView)]
fn toast_view(props: &ToastViewProps) -> Html {
    let leaving = use_state(|| false);

    {
        let leaving = leaving.clone();
        use_effect_with(props.fading_at_ms, move |fading_at_ms| {
            let timeout = Timeout::new(*fading_at_ms, move || leaving.set(true));
            move || drop(timeout)
        });
    }

    let fade_s = f64::from(props.fade_ms) / 1_000.0;
    let animation = if *leaving {
        format!("animation: fadeOutDown {fade_s}s ease forwards;")
    } else {
        format!("animation: fadeInUp {fade_s}s ease;")
    };
    let overlay_opacity = if *leaving { "opacity: 0;" } else { "opacity: 1;" };

    html! {
        <>
            <style>{TOAST_KEYFRAMES}</style>
            <div class="toast-overlay" style={format!("{OVERLAY_STYLE} {overlay_opacity}")}></div>
            <div class="toast" role="status" aria-live="polite" style={format!("{TOAST_STYLE} {animation}")}>
                <i class="fas fa-check-circle" aria-hidden="true" style="font-size: 3rem; margin-bottom: 1rem; display: block;"></i>
                <h3 style="margin-bottom: 0.5rem;">{props.title.clone()}</h3>
                <p style="opacity: 0.9;">{props.message.clone()}</p>
            </div>
        </>
    }
}

/// Mounts a toast on `<body>` and removes it once its fade completes.
pub(super) fn show_toast(toast: Toast) {
    let (Some(fading_at_ms), Some(removed_at_ms)) = (
        toast.delay_for(ToastPhase::Fading),
        toast.delay_for(ToastPhase::Removed),
    ) else {
        return;
    };
    let Some(document) = dom::document() else {
        return;
    };
    let Some(body) = document.body() else {
        return;
    };
    let Ok(container) = document.create_element("div") else {
        return;
    };
    if body.append_child(&container).is_err() {
        return;
    }

    let props = ToastViewProps {
        title: AttrValue::from(toast.title),
        message: AttrValue::from(toast.message),
        fading_at_ms,
        fade_ms: toast.fade_ms,
    };
    let handle = yew::Renderer::<ToastView>::with_root_and_props(container.clone(), props).render();

    Timeout::new(removed_at_ms, move || {
        handle.destroy();
        container.remove();
    })
    .forget();
}

fn load_deferred(image: Element) {
    let Some(source) = deferred_source(image.get_attribute(LAZY_SOURCE_ATTR)) else {
        return;
    };

    match image.dyn_ref::<HtmlImageElement>() {
        Some(img) => img.set_src(&source),
        None => {
            let _ = image.set_attribute("src", &source);
        }
    }
    let _ = image.remove_attribute(LAZY_SOURCE_ATTR);
}

pub(super) fn install(page: &mut Page, config: &SiteConfig, logger: Logger) {
    if let Some(container) = dom::require(logger, "particles", "#particles-bg", dom::by_id("particles-bg")) {
        let particles = generate(config.particle_count, js_sys::Math::random);
        logger.event(
            LogLevel::Debug,
            "particles_generated",
            serde_json::json!({ "count": particles.len() }),
        );
        let handle = yew::Renderer::<ParticleField>::with_root_and_props(
            container.into(),
            ParticleFieldProps { particles },
        )
        .render();
        page.particles = Some(handle);
    }

    let images = dom::query_all(LAZY_IMAGE_SELECTOR);
    if !images.is_empty() {
        if let Some(observer) = dom::observe_once(&images, None, load_deferred) {
            page.observers.push(observer);
        }
    }
}
