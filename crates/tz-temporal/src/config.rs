//! Process-level settings.

use chrono_tz::Tz;

use crate::timezone::resolve_timezone;

/// Environment variable holding the process default timezone.
pub const DEFAULT_TIMEZONE_ENV: &str = "TZ";

/// Settings shared by every value built from a [`TimeContext`](crate::TimeContext).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    /// Timezone attached to naive inputs and used for "now" and "today"
    /// when no timezone is given.
    pub default_timezone: Tz,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_timezone: Tz::UTC,
        }
    }
}

impl Settings {
    /// Read settings from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read settings through `lookup`, which maps a variable name to its value.
    ///
    /// `TZ` values may carry the leading `:` accepted by libc
    /// (`":Europe/Paris"`). A missing or unknown value falls back to UTC.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let Some(raw) = lookup(DEFAULT_TIMEZONE_ENV) else {
            return Self::default();
        };
        let name = raw.trim().trim_start_matches(':');
        if name.is_empty() {
            return Self::default();
        }

        match resolve_timezone(name) {
            Ok(default_timezone) => Self { default_timezone },
            Err(err) => {
                tracing::warn!(
                    value = %raw,
                    error = %err,
                    "ignoring {DEFAULT_TIMEZONE_ENV}, falling back to UTC"
                );
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup_tz(value: &'static str) -> impl Fn(&str) -> Option<String> {
        move |key: &str| (key == DEFAULT_TIMEZONE_ENV).then(|| value.to_string())
    }

    #[test]
    fn test_default_is_utc() {
        assert_eq!(Settings::default().default_timezone, Tz::UTC);
    }

    #[test]
    fn test_lookup_missing_variable() {
        let settings = Settings::from_lookup(|_| None);
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_lookup_identifier() {
        let settings = Settings::from_lookup(lookup_tz("America/New_York"));
        assert_eq!(settings.default_timezone, Tz::America__New_York);
    }

    #[test]
    fn test_lookup_strips_libc_colon() {
        let settings = Settings::from_lookup(lookup_tz(":Europe/Paris"));
        assert_eq!(settings.default_timezone, Tz::Europe__Paris);
    }

    #[test]
    fn test_lookup_unknown_falls_back() {
        let settings = Settings::from_lookup(lookup_tz("/etc/localtime"));
        assert_eq!(settings.default_timezone, Tz::UTC);
    }

    #[test]
    fn test_lookup_blank_falls_back() {
        let settings = Settings::from_lookup(lookup_tz("  "));
        assert_eq!(settings.default_timezone, Tz::UTC);
    }
}
