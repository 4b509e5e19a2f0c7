use yew::prelude::*;
use gloo_timers::callback::Timeout;
use log::{debug, info, warn};
use web_sys::{HtmlInputElement, HtmlTextAreaElement};

use crate::behavior::contact::{ContactAction, ContactError, ContactField, ContactForm as FormState, Submission, Submitter};
use crate::config;

#[derive(Properties, PartialEq)]
pub struct ContactFormProps {
    #[prop_or_default]
    pub submitter: Submitter,
}

#[function_component(ContactForm)]
pub fn contact_form(props: &ContactFormProps) -> Html {
    let form = use_reducer(FormState::default);

    // One hide timer per shown response. A newer response drops (and so
    // cancels) the older timer.
    {
        let pending_hide = form.response.pending_hide();
        let form = form.clone();
        use_effect_with_deps(
            move |pending_hide| {
                let timeout = pending_hide.map(|generation| {
                    Timeout::new(config::FORM_RESPONSE_VISIBLE_MS, move || {
                        form.dispatch(ContactAction::HideResponse(generation))
                    })
                });
                move || drop(timeout)
            },
            pending_hide,
        );
    }

    let on_input = |field: ContactField| {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let value = match field {
                ContactField::Message => e.target_unchecked_into::<HtmlTextAreaElement>().value(),
                _ => e.target_unchecked_into::<HtmlInputElement>().value(),
            };
            form.dispatch(ContactAction::Edit(field, value));
        })
    };

    let onsubmit = {
        let form = form.clone();
        let submitter = props.submitter.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let submission = match form.fields.validate() {
                Ok(submission) => submission,
                Err(error) => {
                    let ContactError::MissingFields { missing } = &error;
                    let missing: Vec<String> = missing.iter().map(ToString::to_string).collect();
                    debug!("Contact form rejected, missing: {}", missing.join(", "));
                    form.dispatch(ContactAction::Rejected(error));
                    return;
                }
            };

            form.dispatch(ContactAction::Sending);
            let form = form.clone();
            let on_done = Callback::from(move |submission: Submission| {
                match serde_json::to_string(&submission) {
                    Ok(json) => info!("Form submitted: {}", json),
                    Err(e) => warn!("Could not serialize submission: {}", e),
                }
                form.dispatch(ContactAction::Sent(submission));
            });
            submitter.0.submit(submission, on_done);
        })
    };

    let response = &form.response;

    html! {
        <section id="contact" class="contact">
            <h2>{"Get in Touch"}</h2>
            <form id="contactForm" class="contact-form" {onsubmit}>
                <div class="form-group">
                    <input type="text" name="name" placeholder="Your Name"
                        value={form.fields.name.clone()} oninput={on_input(ContactField::Name)} />
                </div>
                <div class="form-group">
                    <input type="email" name="email" placeholder="Your Email"
                        value={form.fields.email.clone()} oninput={on_input(ContactField::Email)} />
                </div>
                <div class="form-group">
                    <textarea name="message" rows="5" placeholder="Your Message"
                        value={form.fields.message.clone()} oninput={on_input(ContactField::Message)} />
                </div>
                <button type="submit" class="submit-btn" disabled={form.sending}>
                    if form.sending {
                        <><span class="loading"></span>{" Sending..."}</>
                    } else {
                        {"Send Message"}
                    }
                </button>
            </form>
            <div
                id="formResponse"
                class={classes!("form-response", response.kind.css_class(), response.visible.then(|| "show"))}
            >
                { response.text.clone() }
            </div>
        </section>
    }
}
