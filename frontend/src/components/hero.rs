use yew::prelude::*;
use gloo_timers::callback::Timeout;
use log::warn;

use crate::components::notification::use_notifier;
use crate::config;
use crate::dom;

#[function_component(Hero)]
pub fn hero() -> Html {
    let pressed = use_state(|| false);
    let notifier = use_notifier();

    let onclick = {
        let pressed = pressed.clone();
        Callback::from(move |_: MouseEvent| {
            // Press pulse
            pressed.set(true);
            let release = pressed.clone();
            Timeout::new(config::CTA_PULSE_MS, move || release.set(false)).forget();

            notifier.success("Welcome! Let's get you started.");

            Timeout::new(config::CTA_SCROLL_DELAY_MS, || {
                if let Err(e) = dom::scroll_into_view(config::CONTACT_SECTION_ID) {
                    warn!("Could not scroll to contact section: {}", e);
                }
            })
            .forget();
        })
    };

    html! {
        <section id="home" class="hero">
            <div class="hero-content">
                <h1>{"Ship with confidence"}</h1>
                <p class="hero-subtitle">
                    {"A tiny, fast landing page to check that every deploy lands exactly where it should."}
                </p>
                <button
                    id="ctaBtn"
                    class="cta-button"
                    style={if *pressed { "transform: scale(0.95);" } else { "" }}
                    {onclick}
                >
                    {"Get Started"}
                </button>
            </div>
        </section>
    }
}
