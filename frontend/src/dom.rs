use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, ScrollBehavior, ScrollIntoViewOptions, ScrollToOptions, Window};

use crate::behavior::menu;
use crate::behavior::theme::Theme;
use crate::config;
use crate::error::DomError;

fn window() -> Result<Window, DomError> {
    web_sys::window().ok_or(DomError::NoWindow)
}

fn document() -> Result<Document, DomError> {
    window()?.document().ok_or(DomError::NoDocument)
}

fn body() -> Result<HtmlElement, DomError> {
    document()?.body().ok_or_else(|| DomError::MissingElement("body".to_string()))
}

pub fn prefers_dark() -> bool {
    window()
        .ok()
        .and_then(|w| w.match_media(config::PREFERS_DARK_QUERY).ok().flatten())
        .map(|query| query.matches())
        .unwrap_or(false)
}

/// Sets `data-theme` on the root element so the stylesheet can follow.
pub fn apply_theme(theme: Theme) -> Result<(), DomError> {
    let root = document()?
        .document_element()
        .ok_or_else(|| DomError::MissingElement("html".to_string()))?;
    root.set_attribute("data-theme", theme.as_str())?;
    Ok(())
}

pub fn scroll_y() -> Result<f64, DomError> {
    Ok(window()?.scroll_y()?)
}

pub fn viewport_width() -> Result<f64, DomError> {
    window()?
        .inner_width()?
        .as_f64()
        .ok_or_else(|| DomError::Js("innerWidth is not a number".to_string()))
}

/// Smoothly brings the element with `id` into view.
pub fn scroll_into_view(id: &str) -> Result<(), DomError> {
    let element = document()?
        .get_element_by_id(id)
        .ok_or_else(|| DomError::MissingElement(format!("#{}", id)))?;
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
    Ok(())
}

/// Scrolls to an in-page anchor such as `#features`, leaving room for the
/// fixed header.
pub fn scroll_to_anchor(href: &str) -> Result<(), DomError> {
    let target = document()?
        .query_selector(href)?
        .ok_or_else(|| DomError::MissingElement(href.to_string()))?
        .dyn_into::<HtmlElement>()
        .map_err(|_| DomError::MissingElement(href.to_string()))?;

    let options = ScrollToOptions::new();
    options.set_top(menu::anchor_scroll_top(f64::from(target.offset_top())));
    options.set_behavior(ScrollBehavior::Smooth);
    window()?.scroll_to_with_scroll_to_options(&options);
    Ok(())
}

/// Sets or clears (`None`) a CSS filter on the whole page.
pub fn set_page_filter(filter: Option<&str>) -> Result<(), DomError> {
    body()?.style().set_property("filter", filter.unwrap_or(""))?;
    Ok(())
}
