use log::Level;

pub const BRAND: &str = "Gardbase";
pub const TAGLINE: &str = "The GDPR-native database that protects by design.";
pub const COPYRIGHT: &str = "© 2025 QodeSrl - Gardbase. All rights reserved.";

pub const COMPANY_URL: &str = "https://qodesrl.com/";

// Copied next to the wasm bundle by trunk (see index.html)
pub const LOGO_PATH: &str = "/assets/logo.svg";
pub const LOGO_WHITE_PATH: &str = "/assets/logo-white.svg";

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose output while running `trunk serve`
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
