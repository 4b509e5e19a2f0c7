use std::rc::Rc;

use yew::prelude::*;

use crate::config;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
    #[default]
    Info,
}

impl NotificationKind {
    pub fn css_class(self) -> &'static str {
        match self {
            NotificationKind::Success => "success",
            NotificationKind::Error => "error",
            NotificationKind::Info => "info",
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            NotificationKind::Success => config::SUCCESS_COLOR,
            NotificationKind::Error => config::ERROR_COLOR,
            NotificationKind::Info => config::INFO_COLOR,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationPhase {
    /// Mounted off-screen, waiting to slide in.
    Entering,
    Shown,
    Leaving,
}

impl NotificationPhase {
    pub fn transform(self) -> &'static str {
        match self {
            NotificationPhase::Shown => "translateX(0)",
            NotificationPhase::Entering | NotificationPhase::Leaving => "translateX(100%)",
        }
    }
}

/// Timer schedule for one toast, measured from creation.
pub fn lifecycle(id: u64) -> [(u32, NotificationAction); 3] {
    [
        (config::NOTIFICATION_ENTER_MS, NotificationAction::Enter(id)),
        (config::NOTIFICATION_LEAVE_MS, NotificationAction::Leave(id)),
        (
            config::NOTIFICATION_LEAVE_MS + config::NOTIFICATION_EXIT_TRANSITION_MS,
            NotificationAction::Remove(id),
        ),
    ]
}

#[derive(Clone, Debug, PartialEq)]
pub struct Notification {
    pub id: u64,
    pub message: String,
    pub kind: NotificationKind,
    pub phase: NotificationPhase,
}

impl Notification {
    pub fn new(id: u64, message: impl Into<String>, kind: NotificationKind) -> Self {
        Self {
            id,
            message: message.into(),
            kind,
            phase: NotificationPhase::Entering,
        }
    }

    pub fn style(&self) -> String {
        format!(
            "position: fixed; top: 100px; right: 20px; background: {}; color: white; \
             padding: 1rem 1.5rem; border-radius: 8px; box-shadow: 0 4px 12px rgba(0, 0, 0, 0.15); \
             z-index: 10000; transform: {}; transition: transform 0.3s ease; max-width: 300px; \
             font-weight: 500;",
            self.kind.color(),
            self.phase.transform(),
        )
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum NotificationAction {
    Push(Notification),
    Enter(u64),
    Leave(u64),
    Remove(u64),
}

/// All toasts currently on the page, oldest first.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NotificationStack {
    pub items: Vec<Notification>,
}

impl NotificationStack {
    fn with_phase(self: Rc<Self>, id: u64, phase: NotificationPhase) -> Rc<Self> {
        match self.items.iter().position(|n| n.id == id) {
            Some(index) if self.items[index].phase != phase => {
                let mut next = (*self).clone();
                next.items[index].phase = phase;
                next.into()
            }
            _ => self,
        }
    }
}

impl Reducible for NotificationStack {
    type Action = NotificationAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            NotificationAction::Push(notification) => {
                let mut next = (*self).clone();
                next.items.push(notification);
                next.into()
            }
            NotificationAction::Enter(id) => self.with_phase(id, NotificationPhase::Shown),
            NotificationAction::Leave(id) => self.with_phase(id, NotificationPhase::Leaving),
            NotificationAction::Remove(id) => {
                if !self.items.iter().any(|n| n.id == id) {
                    return self;
                }
                let mut next = (*self).clone();
                next.items.retain(|n| n.id != id);
                next.into()
            }
        }
    }
}
