use std::cell::RefCell;
use std::rc::Rc;

use yew::prelude::*;
use gloo_timers::callback::Interval;

use crate::behavior::counter::{self, CounterAnimation};
use crate::config;
use crate::hooks::{use_visibility, VisibilityOptions};

#[derive(Properties, PartialEq)]
pub struct StatCounterProps {
    pub target: u64,
    #[prop_or_default]
    pub suffix: AttrValue,
}

/// Number that counts up from zero once it is first seen.
#[function_component(StatCounter)]
pub fn stat_counter(props: &StatCounterProps) -> Html {
    let node = use_node_ref();
    let visible = use_visibility(node.clone(), VisibilityOptions::once());
    let value = use_state_eq(|| 0u64);
    let finished = use_state_eq(|| false);

    {
        let running = counter::should_run(visible, *finished);
        let value = value.clone();
        let finished = finished.clone();
        let target = props.target;
        use_effect_with_deps(
            move |running| {
                // Dropping the interval, on completion or unmount, stops the ticks.
                let interval = running.then(|| {
                    let animation = Rc::new(RefCell::new(CounterAnimation::for_target(target)));
                    Interval::new(config::COUNTER_FRAME_MS, move || {
                        let frame = animation.borrow_mut().advance();
                        value.set(frame.value);
                        if frame.done {
                            finished.set(true);
                        }
                    })
                });
                move || drop(interval)
            },
            running,
        );
    }

    html! {
        <span ref={node} class="stat-number" data-target={props.target.to_string()}>
            { *value }{ props.suffix.clone() }
        </span>
    }
}

#[derive(Properties, PartialEq)]
pub struct StatItemProps {
    pub target: u64,
    pub label: AttrValue,
    #[prop_or_default]
    pub suffix: AttrValue,
}

#[function_component(StatItem)]
pub fn stat_item(props: &StatItemProps) -> Html {
    html! {
        <div class="stat-item-inner">
            <StatCounter target={props.target} suffix={props.suffix.clone()} />
            <span class="stat-label">{ props.label.clone() }</span>
        </div>
    }
}
