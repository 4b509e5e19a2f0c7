use crate::config;

/// Inline style for one bar of the hamburger icon.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BarStyle {
    pub transform: &'static str,
    pub opacity: &'static str,
}

impl BarStyle {
    const NEUTRAL: BarStyle = BarStyle { transform: "none", opacity: "1" };

    pub fn css(&self) -> String {
        format!("transform: {}; opacity: {};", self.transform, self.opacity)
    }
}

/// Open draws an X from the outer bars and hides the middle one.
pub fn icon_bars(open: bool) -> [BarStyle; 3] {
    if open {
        [
            BarStyle { transform: "rotate(45deg) translate(5px, 5px)", opacity: "1" },
            BarStyle { transform: "none", opacity: "0" },
            BarStyle { transform: "rotate(-45deg) translate(7px, -6px)", opacity: "1" },
        ]
    } else {
        [BarStyle::NEUTRAL; 3]
    }
}

/// The mobile menu makes no sense once the desktop layout kicks in.
pub fn should_close_on_resize(viewport_width: f64, menu_open: bool) -> bool {
    menu_open && viewport_width > config::MOBILE_BREAKPOINT
}

/// Scroll position that lands `section_top` right below the fixed header.
pub fn anchor_scroll_top(section_top: f64) -> f64 {
    section_top - config::HEADER_OFFSET
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_icon_forms_an_x() {
        let [top, middle, bottom] = icon_bars(true);
        assert!(top.transform.starts_with("rotate(45deg)"));
        assert_eq!(middle.opacity, "0");
        assert!(bottom.transform.starts_with("rotate(-45deg)"));
    }

    #[test]
    fn closed_icon_is_neutral() {
        for bar in icon_bars(false) {
            assert_eq!(bar.css(), "transform: none; opacity: 1;");
        }
    }

    #[test]
    fn resize_closes_only_open_menu_on_wide_viewport() {
        assert!(should_close_on_resize(1024.0, true));
        assert!(!should_close_on_resize(1024.0, false));
        assert!(!should_close_on_resize(768.0, true));
        assert!(!should_close_on_resize(400.0, true));
    }

    #[test]
    fn anchor_target_accounts_for_header() {
        assert_eq!(anchor_scroll_top(500.0), 420.0);
    }
}
