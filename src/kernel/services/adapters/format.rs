use chrono::{DateTime, Local, Locale, Utc};
use std::fmt::Write;

use crate::kernel::services::ports::{DateTimeFormatter, FormatSettings};

/// `DateTimeFormatter` backed by chrono `strftime` patterns.
///
/// With a locale set, names and `%x`/`%X`/`%c` follow that locale.
#[derive(Clone)]
pub struct ChronoFormatter {
    settings: FormatSettings,
    locale: Option<Locale>,
}

impl ChronoFormatter {
    pub fn new(settings: FormatSettings) -> Self {
        let locale = settings.locale.as_deref().and_then(|name| {
            match Locale::try_from(name) {
                Ok(locale) => Some(locale),
                Err(_) => {
                    tracing::warn!(locale = name, "unknown locale, dates are not localized");
                    None
                }
            }
        });
        Self { settings, locale }
    }

    pub fn utc() -> Self {
        Self::new(FormatSettings {
            utc: true,
            ..FormatSettings::default()
        })
    }

    fn format(&self, millis: i64, pattern: &str) -> Option<String> {
        let instant = DateTime::<Utc>::from_timestamp_millis(millis)?;
        let mut out = String::new();
        // A bad pattern surfaces as a fmt error here rather than a panic.
        let written = match (self.settings.utc, self.locale) {
            (true, None) => write!(out, "{}", instant.format(pattern)),
            (true, Some(locale)) => write!(out, "{}", instant.format_localized(pattern, locale)),
            (false, None) => write!(out, "{}", instant.with_timezone(&Local).format(pattern)),
            (false, Some(locale)) => write!(
                out,
                "{}",
                instant
                    .with_timezone(&Local)
                    .format_localized(pattern, locale)
            ),
        };
        written.ok().map(|_| out)
    }
}

impl Default for ChronoFormatter {
    fn default() -> Self {
        Self::new(FormatSettings::default())
    }
}

impl DateTimeFormatter for ChronoFormatter {
    fn format_date(&self, millis: i64) -> Option<String> {
        self.format(millis, &self.settings.date)
    }

    fn format_time(&self, millis: i64) -> Option<String> {
        self.format(millis, &self.settings.time)
    }

    fn format_date_time(&self, millis: i64) -> Option<String> {
        self.format(millis, &self.settings.date_time)
    }
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/adapters/format.rs"]
mod tests;
