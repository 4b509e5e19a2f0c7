use yew::prelude::*;
use yew_hooks::prelude::*;
use gloo_timers::callback::Timeout;
use log::{debug, warn};
use web_sys::KeyboardEvent;

use crate::behavior::konami::KeySequence;
use crate::components::notification::use_notifier;
use crate::config;
use crate::dom;

/// Listens for the Konami code and flips the page colours for a moment.
#[function_component(EasterEgg)]
pub fn easter_egg() -> Html {
    let sequence = use_mut_ref(KeySequence::konami);
    let restore = use_mut_ref(|| None::<Timeout>);
    let notifier = use_notifier();

    use_event_with_window("keydown", move |e: KeyboardEvent| {
        if !sequence.borrow_mut().push(e.code()) {
            return;
        }

        debug!("Konami code entered");
        notifier.success("🎉 Konami Code activated! You found the easter egg!");

        if let Err(err) = dom::set_page_filter(Some("hue-rotate(180deg)")) {
            warn!("Could not apply page filter: {}", err);
            return;
        }
        *restore.borrow_mut() = Some(Timeout::new(config::EASTER_EGG_FILTER_MS, || {
            if let Err(err) = dom::set_page_filter(None) {
                warn!("Could not clear page filter: {}", err);
            }
        }));
    });

    html! {}
}
