use std::rc::Rc;

use log::debug;
use yew::prelude::*;

use crate::behavior::menu;
use crate::behavior::theme::Theme;

/// Page-wide state owned by the landing page.
#[derive(Clone, Debug, PartialEq)]
pub struct PageState {
    pub menu_open: bool,
    pub theme: Theme,
}

impl PageState {
    pub fn new(theme: Theme) -> Self {
        Self { menu_open: false, theme }
    }
}

pub enum PageAction {
    ToggleMenu,
    /// Viewport width after a window resize.
    Resized(f64),
    /// An in-page link scrolled to its section.
    AnchorFollowed,
    SetTheme(Theme),
}

impl Reducible for PageState {
    type Action = PageAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let menu_open = match action {
            PageAction::ToggleMenu => !self.menu_open,
            PageAction::Resized(width) if menu::should_close_on_resize(width, self.menu_open) => false,
            PageAction::AnchorFollowed if self.menu_open => false,
            PageAction::SetTheme(theme) if theme != self.theme => {
                debug!("Theme set to {}", theme);
                return Rc::new(Self { theme, ..(*self).clone() });
            }
            _ => return self,
        };

        debug!("Mobile menu {}", if menu_open { "opened" } else { "closed" });
        Rc::new(Self { menu_open, ..(*self).clone() })
    }
}

pub type PageHandle = UseReducerHandle<PageState>;

#[cfg(test)]
mod tests {
    use super::*;

    fn closed() -> Rc<PageState> {
        Rc::new(PageState::new(Theme::Light))
    }

    #[test]
    fn toggle_twice_restores_menu() {
        let start = closed();
        let opened = start.clone().reduce(PageAction::ToggleMenu);
        assert!(opened.menu_open);

        let closed_again = opened.reduce(PageAction::ToggleMenu);
        assert_eq!(*closed_again, *start);
    }

    #[test]
    fn wide_resize_closes_open_menu() {
        let opened = closed().reduce(PageAction::ToggleMenu);
        assert!(opened.clone().reduce(PageAction::Resized(500.0)).menu_open);
        assert!(!opened.reduce(PageAction::Resized(1200.0)).menu_open);
    }

    #[test]
    fn resize_leaves_closed_menu_untouched() {
        let start = closed();
        let next = start.clone().reduce(PageAction::Resized(1200.0));
        assert!(Rc::ptr_eq(&start, &next));
    }

    #[test]
    fn anchor_closes_menu_only_when_open() {
        let start = closed();
        assert!(Rc::ptr_eq(&start, &start.clone().reduce(PageAction::AnchorFollowed)));

        let opened = start.reduce(PageAction::ToggleMenu);
        assert!(!opened.reduce(PageAction::AnchorFollowed).menu_open);
    }

    #[test]
    fn set_theme_keeps_menu() {
        let opened = closed().reduce(PageAction::ToggleMenu);
        let dark = opened.reduce(PageAction::SetTheme(Theme::Dark));
        assert_eq!(dark.theme, Theme::Dark);
        assert!(dark.menu_open);
    }
}
