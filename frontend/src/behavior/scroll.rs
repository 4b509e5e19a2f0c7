use super::theme::Theme;
use crate::config;

/// Translucent header background applied once the page is scrolled.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HeaderBackdrop {
    pub background: &'static str,
    pub filter: &'static str,
}

impl HeaderBackdrop {
    pub fn css(&self) -> String {
        format!("background: {}; backdrop-filter: {};", self.background, self.filter)
    }
}

pub fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > config::HEADER_SCROLL_THRESHOLD
}

pub fn header_backdrop(scrolled: bool, theme: Theme) -> Option<HeaderBackdrop> {
    if !scrolled {
        return None;
    }
    let background = match theme {
        Theme::Dark => "rgba(17, 24, 39, 0.95)",
        Theme::Light => "rgba(255, 255, 255, 0.95)",
    };
    Some(HeaderBackdrop { background, filter: "blur(10px)" })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_is_exclusive() {
        assert!(!is_scrolled(0.0));
        assert!(!is_scrolled(100.0));
        assert!(is_scrolled(100.5));
    }

    #[test]
    fn backdrop_follows_theme() {
        assert_eq!(header_backdrop(false, Theme::Dark), None);

        let light = header_backdrop(true, Theme::Light).unwrap();
        assert_eq!(light.background, "rgba(255, 255, 255, 0.95)");

        let dark = header_backdrop(true, Theme::Dark).unwrap();
        assert_eq!(
            dark.css(),
            "background: rgba(17, 24, 39, 0.95); backdrop-filter: blur(10px);"
        );
    }
}
