use gloo_timers::callback::Timeout;
use log::warn;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::js_sys::Array;
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::behavior::scroll;
use crate::config;
use crate::dom;
use crate::error::DomError;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct VisibilityOptions {
    /// Visible fraction needed to count as intersecting. Browser default when unset.
    pub threshold: Option<f64>,
    pub root_margin: Option<&'static str>,
    /// Stop watching after the first hit.
    pub once: bool,
}

impl VisibilityOptions {
    pub fn reveal() -> Self {
        Self {
            threshold: Some(config::REVEAL_THRESHOLD),
            root_margin: Some(config::REVEAL_ROOT_MARGIN),
            once: false,
        }
    }

    pub fn once() -> Self {
        Self { once: true, ..Self::default() }
    }
}

type ObserverCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

fn observe(
    node: &NodeRef,
    options: VisibilityOptions,
    on_visible: impl Fn() + 'static,
) -> Result<(IntersectionObserver, ObserverCallback), DomError> {
    let element = node
        .cast::<web_sys::Element>()
        .ok_or_else(|| DomError::MissingElement("observed node".to_string()))?;

    let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
        for entry in entries.iter() {
            let entry: IntersectionObserverEntry = entry.unchecked_into();
            if entry.is_intersecting() {
                if options.once {
                    observer.unobserve(&entry.target());
                }
                on_visible();
            }
        }
    }) as Box<dyn FnMut(Array, IntersectionObserver)>);

    let init = IntersectionObserverInit::new();
    if let Some(threshold) = options.threshold {
        init.set_threshold(&JsValue::from_f64(threshold));
    }
    if let Some(margin) = options.root_margin {
        init.set_root_margin(margin);
    }

    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
    observer.observe(&element);
    Ok((observer, callback))
}

/// Turns true the first time the referenced element scrolls into view and
/// stays true afterwards.
#[hook]
pub fn use_visibility(node: NodeRef, options: VisibilityOptions) -> bool {
    let visible = use_state_eq(|| false);

    {
        let visible = visible.clone();
        use_effect_with_deps(
            move |(node, options)| {
                let watch = match observe(node, *options, move || visible.set(true)) {
                    Ok(watch) => Some(watch),
                    Err(e) => {
                        warn!("Visibility tracking unavailable: {}", e);
                        None
                    }
                };
                move || {
                    if let Some((observer, _callback)) = watch {
                        observer.disconnect();
                    }
                }
            },
            (node, options),
        );
    }

    *visible
}

/// Whether the window is scrolled past the header threshold. Scroll bursts are
/// collapsed with a trailing debounce.
#[hook]
pub fn use_scrolled_past_header() -> bool {
    let scrolled = use_state_eq(|| dom::scroll_y().map(scroll::is_scrolled).unwrap_or(false));
    let pending = use_mut_ref(|| None::<Timeout>);

    {
        let scrolled = scrolled.clone();
        use_event_with_window("scroll", move |_: web_sys::Event| {
            let scrolled = scrolled.clone();
            // Replacing the handle cancels the previous timeout.
            *pending.borrow_mut() = Some(Timeout::new(config::SCROLL_DEBOUNCE_MS, move || {
                match dom::scroll_y() {
                    Ok(offset) => scrolled.set(scroll::is_scrolled(offset)),
                    Err(e) => warn!("Could not read scroll offset: {}", e),
                }
            }));
        });
    }

    *scrolled
}
