use yew::prelude::*;
use web_sys::MouseEvent;
use log::warn;

use crate::behavior::menu;
use crate::behavior::scroll;
use crate::behavior::theme::Theme;
use crate::dom;
use crate::hooks::use_scrolled_past_header;
use crate::state::{PageAction, PageHandle};

const SECTIONS: [(&str, &str); 4] = [
    ("#home", "Home"),
    ("#features", "Features"),
    ("#about", "About"),
    ("#contact", "Contact"),
];

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub page: PageHandle,
    pub on_toggle_theme: Callback<()>,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let NavProps { page, on_toggle_theme } = props;
    let scrolled = use_scrolled_past_header();

    let toggle_menu = {
        let page = page.clone();
        Callback::from(move |_: MouseEvent| page.dispatch(PageAction::ToggleMenu))
    };

    let follow_anchor = |href: &'static str| {
        let page = page.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            match dom::scroll_to_anchor(href) {
                Ok(()) => page.dispatch(PageAction::AnchorFollowed),
                Err(err) => warn!("Anchor {} not followed: {}", href, err),
            }
        })
    };

    let toggle_theme = {
        let on_toggle_theme = on_toggle_theme.clone();
        Callback::from(move |_: MouseEvent| on_toggle_theme.emit(()))
    };

    let header_style = scroll::header_backdrop(scrolled, page.theme)
        .map(|backdrop| backdrop.css())
        .unwrap_or_default();
    let bars = menu::icon_bars(page.menu_open);

    html! {
        <header style={header_style}>
            <nav class="navbar">
                <a href="#home" class="nav-logo" onclick={follow_anchor("#home")}>
                    {"Testing Deploy"}
                </a>
                <ul class={classes!("nav-links", page.menu_open.then(|| "active"))}>
                    { for SECTIONS.iter().map(|(href, label)| html! {
                        <li>
                            <a href={*href} class="nav-link" onclick={follow_anchor(*href)}>{*label}</a>
                        </li>
                    }) }
                </ul>
                <div class="nav-actions">
                    <button id="themeToggle" class="theme-toggle" onclick={toggle_theme}
                        aria-label={if page.theme == Theme::Dark { "Switch to light mode" } else { "Switch to dark mode" }}>
                        { page.theme.toggle_glyph() }
                    </button>
                    <button class="hamburger" onclick={toggle_menu} aria-label="Toggle navigation">
                        { for bars.iter().map(|bar| html! { <span style={bar.css()}></span> }) }
                    </button>
                </div>
            </nav>
        </header>
    }
}
