use yew::prelude::*;
use gloo_timers::callback::Timeout;
use log::warn;

use crate::behavior::notification::{lifecycle, Notification, NotificationAction, NotificationKind, NotificationStack};

/// Handle for showing toasts, shared through context.
#[derive(Clone, PartialEq)]
pub struct Notifier {
    show: Callback<(String, NotificationKind)>,
}

impl Notifier {
    pub fn show(&self, message: impl Into<String>, kind: NotificationKind) {
        self.show.emit((message.into(), kind));
    }

    pub fn success(&self, message: impl Into<String>) {
        self.show(message, NotificationKind::Success);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.show(message, NotificationKind::Error);
    }
}

#[hook]
pub fn use_notifier() -> Notifier {
    use_context::<Notifier>().unwrap_or_else(|| {
        warn!("Notifier used outside NotificationCenter, toasts are dropped");
        Notifier { show: Callback::from(|_| ()) }
    })
}

#[derive(Properties, PartialEq)]
pub struct NotificationCenterProps {
    #[prop_or_default]
    pub children: Children,
}

/// Provides a `Notifier` to its children and renders the toasts they raise.
#[function_component(NotificationCenter)]
pub fn notification_center(props: &NotificationCenterProps) -> Html {
    let stack = use_reducer(NotificationStack::default);
    let next_id = use_mut_ref(|| 0u64);

    let notifier = {
        let stack = stack.clone();
        use_memo(
            move |_| Notifier {
                show: Callback::from(move |(message, kind): (String, NotificationKind)| {
                    let id = {
                        let mut next_id = next_id.borrow_mut();
                        *next_id += 1;
                        *next_id
                    };
                    stack.dispatch(NotificationAction::Push(Notification::new(id, message, kind)));

                    for (delay, action) in lifecycle(id) {
                        let stack = stack.clone();
                        let timeout = Timeout::new(delay, move || stack.dispatch(action));
                        timeout.forget();
                    }
                }),
            },
            (),
        )
    };

    html! {
        <ContextProvider<Notifier> context={(*notifier).clone()}>
            { for props.children.iter() }
            { for stack.items.iter().map(|n| html! {
                <div key={n.id} class={classes!("notification", n.kind.css_class())} style={n.style()}>
                    { n.message.clone() }
                </div>
            }) }
        </ContextProvider<Notifier>>
    }
}
