use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose console output when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

// Persisted preference
pub const THEME_STORAGE_KEY: &str = "theme";
pub const PREFERS_DARK_QUERY: &str = "(prefers-color-scheme: dark)";

// Layout
pub const HEADER_SCROLL_THRESHOLD: f64 = 100.0;
pub const HEADER_OFFSET: f64 = 80.0; // fixed header height
pub const MOBILE_BREAKPOINT: f64 = 768.0;
pub const CONTACT_SECTION_ID: &str = "contact";

// Timings, all in milliseconds
pub const CTA_PULSE_MS: u32 = 150;
pub const CTA_SCROLL_DELAY_MS: u32 = 1_000;
pub const SIMULATED_SUBMIT_MS: u32 = 2_000;
pub const FORM_RESPONSE_VISIBLE_MS: u32 = 5_000;
pub const NOTIFICATION_ENTER_MS: u32 = 100;
pub const NOTIFICATION_LEAVE_MS: u32 = 3_000;
pub const NOTIFICATION_EXIT_TRANSITION_MS: u32 = 300;
pub const COUNTER_DURATION_MS: u32 = 2_000;
pub const COUNTER_FRAME_MS: u32 = 16;
pub const SCROLL_DEBOUNCE_MS: u32 = 10;
pub const EASTER_EGG_FILTER_MS: u32 = 3_000;

// Reveal observer
pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";

// Toast colours
pub const SUCCESS_COLOR: &str = "#10b981";
pub const ERROR_COLOR: &str = "#ef4444";
pub const INFO_COLOR: &str = "#6366f1";
