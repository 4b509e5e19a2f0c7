use yew::prelude::*;

use crate::hooks::{use_visibility, VisibilityOptions};

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Fades its content in the first time it scrolls into view.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let visible = use_visibility(node.clone(), VisibilityOptions::reveal());

    html! {
        <div ref={node} class={classes!(props.class.clone(), "fade-in", visible.then(|| "visible"))}>
            { for props.children.iter() }
        </div>
    }
}
