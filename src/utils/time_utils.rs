use std::time::Duration;

/// Monotonic instant that also works in the browser.
pub type AppInstant = web_time::Instant;

pub struct TimeUtils;

impl TimeUtils {
    pub const S_IN_MIN: u64 = 60;
    pub const S_IN_H: u64 = Self::S_IN_MIN * 60;
    pub const S_IN_D: u64 = Self::S_IN_H * 24;
}

/// Coarse age for status text, e.g. `45s`, `3m`, `2h`, `1d`.
pub fn format_age(age: Duration) -> String {
    let secs = age.as_secs();
    if secs < TimeUtils::S_IN_MIN {
        return format!("{}s", secs);
    }
    if secs < TimeUtils::S_IN_H {
        return format!("{}m", secs / TimeUtils::S_IN_MIN);
    }
    if secs < TimeUtils::S_IN_D {
        return format!("{}h", secs / TimeUtils::S_IN_H);
    }
    format!("{}d", secs / TimeUtils::S_IN_D)
}
