use std::fmt;
use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use serde::Serialize;
use thiserror::Error;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::config;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Message,
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ContactField::Name => "name",
            ContactField::Email => "email",
            ContactField::Message => "message",
        })
    }
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ContactError {
    #[error("Please fill in all fields.")]
    MissingFields { missing: Vec<ContactField> },
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactFields {
    pub fn set(&mut self, field: ContactField, value: String) {
        match field {
            ContactField::Name => self.name = value,
            ContactField::Email => self.email = value,
            ContactField::Message => self.message = value,
        }
    }

    pub fn validate(&self) -> Result<Submission, ContactError> {
        let missing: Vec<ContactField> = [
            (ContactField::Name, &self.name),
            (ContactField::Email, &self.email),
            (ContactField::Message, &self.message),
        ]
        .into_iter()
        .filter(|(_, value)| value.is_empty())
        .map(|(field, _)| field)
        .collect();

        if !missing.is_empty() {
            return Err(ContactError::MissingFields { missing });
        }

        Ok(Submission {
            name: self.name.clone(),
            email: self.email.clone(),
            message: self.message.clone(),
        })
    }
}

/// A validated message ready to be sent.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Submission {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl Submission {
    pub fn thank_you(&self) -> String {
        format!("Thank you, {}! Your message has been sent successfully.", self.name)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ResponseKind {
    #[default]
    Success,
    Error,
}

impl ResponseKind {
    pub fn css_class(self) -> &'static str {
        match self {
            ResponseKind::Success => "success",
            ResponseKind::Error => "error",
        }
    }
}

/// The message area under the form. Every `show` starts a new generation and
/// a hide only applies to the generation it was scheduled for.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ResponseSlot {
    pub text: String,
    pub kind: ResponseKind,
    pub visible: bool,
    generation: u64,
}

impl ResponseSlot {
    pub fn show(&mut self, text: impl Into<String>, kind: ResponseKind) -> u64 {
        self.text = text.into();
        self.kind = kind;
        self.visible = true;
        self.generation += 1;
        self.generation
    }

    /// Returns whether anything changed.
    pub fn hide(&mut self, generation: u64) -> bool {
        if generation != self.generation || !self.visible {
            return false;
        }
        self.visible = false;
        true
    }

    /// Generation still waiting to be hidden, if any.
    pub fn pending_hide(&self) -> Option<u64> {
        (self.visible && self.generation > 0).then_some(self.generation)
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactForm {
    pub fields: ContactFields,
    pub sending: bool,
    pub response: ResponseSlot,
}

pub enum ContactAction {
    Edit(ContactField, String),
    Rejected(ContactError),
    Sending,
    Sent(Submission),
    HideResponse(u64),
}

impl Reducible for ContactForm {
    type Action = ContactAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            ContactAction::Edit(field, value) => next.fields.set(field, value),
            ContactAction::Rejected(error) => {
                next.response.show(error.to_string(), ResponseKind::Error);
            }
            ContactAction::Sending => next.sending = true,
            ContactAction::Sent(submission) => {
                next.sending = false;
                next.response.show(submission.thank_you(), ResponseKind::Success);
                next.fields = ContactFields::default();
            }
            ContactAction::HideResponse(generation) => {
                if !next.response.hide(generation) {
                    return self;
                }
            }
        }
        next.into()
    }
}

/// Something that delivers a submission and reports back when done.
pub trait SubmitEffect {
    fn submit(&self, submission: Submission, on_done: Callback<Submission>);
}

/// Pretends to talk to a server: waits a fixed latency and always succeeds.
#[derive(Clone, Copy, Debug)]
pub struct SimulatedSubmit {
    pub latency_ms: u32,
}

impl Default for SimulatedSubmit {
    fn default() -> Self {
        Self { latency_ms: config::SIMULATED_SUBMIT_MS }
    }
}

impl SubmitEffect for SimulatedSubmit {
    fn submit(&self, submission: Submission, on_done: Callback<Submission>) {
        let latency_ms = self.latency_ms;
        spawn_local(async move {
            TimeoutFuture::new(latency_ms).await;
            on_done.emit(submission);
        });
    }
}

/// Shareable handle so the effect can travel through component props.
#[derive(Clone)]
pub struct Submitter(pub Rc<dyn SubmitEffect>);

impl Default for Submitter {
    fn default() -> Self {
        Submitter(Rc::new(SimulatedSubmit::default()))
    }
}

impl PartialEq for Submitter {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    struct ImmediateSubmit;

    impl SubmitEffect for ImmediateSubmit {
        fn submit(&self, submission: Submission, on_done: Callback<Submission>) {
            on_done.emit(submission);
        }
    }

    fn filled() -> ContactFields {
        ContactFields {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            message: "Hello there".to_string(),
        }
    }

    fn reduce_all(form: ContactForm, actions: Vec<ContactAction>) -> Rc<ContactForm> {
        actions
            .into_iter()
            .fold(Rc::new(form), |state, action| state.reduce(action))
    }

    #[test]
    fn each_missing_field_is_rejected() {
        for field in [ContactField::Name, ContactField::Email, ContactField::Message] {
            let mut fields = filled();
            fields.set(field, String::new());
            assert_eq!(
                fields.validate(),
                Err(ContactError::MissingFields { missing: vec![field] })
            );
        }
    }

    #[test]
    fn rejection_shows_error_and_does_not_start_sending() {
        let form = ContactForm::default();
        let error = form.fields.validate().unwrap_err();
        let form = reduce_all(form, vec![ContactAction::Rejected(error)]);

        assert!(!form.sending);
        assert!(form.response.visible);
        assert_eq!(form.response.kind, ResponseKind::Error);
        assert_eq!(form.response.text, "Please fill in all fields.");
    }

    #[test]
    fn valid_submission_sends_then_thanks_and_clears() {
        let form = ContactForm { fields: filled(), ..ContactForm::default() };
        let submission = form.fields.validate().unwrap();

        let form = reduce_all(form, vec![ContactAction::Sending]);
        assert!(form.sending);

        let delivered = Rc::new(RefCell::new(None));
        let sink = delivered.clone();
        ImmediateSubmit.submit(
            submission,
            Callback::from(move |s: Submission| *sink.borrow_mut() = Some(s)),
        );
        let submission = delivered.borrow_mut().take().expect("submit resolved");

        let form = form.reduce(ContactAction::Sent(submission));
        assert!(!form.sending);
        assert_eq!(form.response.kind, ResponseKind::Success);
        assert_eq!(
            form.response.text,
            "Thank you, Ada! Your message has been sent successfully."
        );
        assert_eq!(form.fields, ContactFields::default());
    }

    #[test]
    fn stale_hide_keeps_newer_response_visible() {
        let mut slot = ResponseSlot::default();
        let first = slot.show("Please fill in all fields.", ResponseKind::Error);
        let second = slot.show("Thank you, Ada! Your message has been sent successfully.", ResponseKind::Success);

        assert!(!slot.hide(first));
        assert!(slot.visible);
        assert!(slot.hide(second));
        assert!(!slot.visible);
        assert!(!slot.hide(second));
    }

    #[test]
    fn each_show_schedules_its_own_hide() {
        let form = Rc::new(ContactForm::default());
        assert_eq!(form.response.pending_hide(), None);

        let form = form.reduce(ContactAction::Rejected(ContactError::MissingFields {
            missing: vec![ContactField::Name],
        }));
        let first = form.response.pending_hide().expect("hide scheduled");

        let form = form.reduce(ContactAction::Rejected(ContactError::MissingFields {
            missing: vec![ContactField::Email],
        }));
        let second = form.response.pending_hide().expect("hide scheduled");
        assert_ne!(first, second);

        let form = form.reduce(ContactAction::HideResponse(second));
        assert_eq!(form.response.pending_hide(), None);
    }

    #[test]
    fn simulated_submit_takes_two_seconds() {
        assert_eq!(SimulatedSubmit::default().latency_ms, 2_000);
    }

    #[test]
    fn unchanged_hide_keeps_same_state() {
        let form = Rc::new(ContactForm::default());
        let next = form.clone().reduce(ContactAction::HideResponse(7));
        assert!(Rc::ptr_eq(&form, &next));
    }

    #[test]
    fn edits_update_the_named_field() {
        let form = reduce_all(
            ContactForm::default(),
            vec![
                ContactAction::Edit(ContactField::Email, "a@b.c".to_string()),
                ContactAction::Edit(ContactField::Message, "hi".to_string()),
            ],
        );
        assert_eq!(form.fields.email, "a@b.c");
        assert_eq!(form.fields.message, "hi");
        assert!(form.fields.name.is_empty());
    }
}
