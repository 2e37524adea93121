//! Reusable locale-aware date formatters.

use std::fmt;

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Locale, TimeZone};

use crate::error::{FormatError, Result};

/// A date formatter: a strftime pattern parsed once plus a resolved locale.
///
/// Construction does the expensive work; [`format`](Self::format) only
/// walks the pre-parsed items and is safe to call concurrently from any
/// number of threads.
#[derive(Debug, Clone)]
pub struct DateFormatter {
    pattern: String,
    locale: Locale,
    items: Vec<Item<'static>>,
}

impl DateFormatter {
    /// Parse `pattern` (strftime syntax, e.g. `"%d %b %Y"`) and resolve
    /// `locale` (e.g. `"en_US"`).
    pub fn new(pattern: &str, locale: &str) -> Result<Self> {
        let items = StrftimeItems::new(pattern)
            .parse_to_owned()
            .map_err(|_| FormatError::InvalidPattern {
                pattern: pattern.to_string(),
            })?;
        let locale = Locale::try_from(locale).map_err(|_| FormatError::UnknownLocale {
            locale: locale.to_string(),
        })?;
        Ok(Self {
            pattern: pattern.to_string(),
            locale,
            items,
        })
    }

    /// Total variant used by the cache: an unparsable pattern degrades to
    /// a literal formatter and an unknown locale identifier to POSIX.
    pub(crate) fn lenient(pattern: &str, locale: &str) -> Self {
        let items = StrftimeItems::new(pattern)
            .parse_to_owned()
            .unwrap_or_else(|_| vec![Item::OwnedLiteral(pattern.into())]);
        Self {
            pattern: pattern.to_string(),
            locale: Locale::try_from(locale).unwrap_or(Locale::POSIX),
            items,
        }
    }

    /// The pattern this formatter was built from.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// The resolved locale.
    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Render `datetime` with the parsed pattern, using the formatter's
    /// locale for month/weekday names and other localized fields.
    pub fn format<Tz: TimeZone>(&self, datetime: &DateTime<Tz>) -> String
    where
        Tz::Offset: fmt::Display,
    {
        datetime
            .format_localized_with_items(self.items.iter(), self.locale)
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;

    fn sample_datetime() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 15, 9, 30, 0).unwrap()
    }

    #[test]
    fn formats_numeric_pattern() {
        let formatter = DateFormatter::new("%d/%m/%Y", "en_US").unwrap();
        assert_eq!(formatter.format(&sample_datetime()), "15/01/2024");
    }

    #[test]
    fn formats_localized_month_name() {
        let formatter = DateFormatter::new("%B", "fr_FR").unwrap();
        assert_eq!(formatter.format(&sample_datetime()), "janvier");
    }

    #[test]
    fn literal_only_pattern_is_valid() {
        let formatter = DateFormatter::new("dd/MM/yyyy", "en_US").unwrap();
        assert_eq!(formatter.format(&sample_datetime()), "dd/MM/yyyy");
    }

    #[test]
    fn invalid_specifier_is_rejected() {
        let err = DateFormatter::new("%J", "en_US").unwrap_err();
        assert!(matches!(err, FormatError::InvalidPattern { .. }));
    }

    #[test]
    fn unknown_locale_is_rejected() {
        let err = DateFormatter::new("%Y", "xx_XX").unwrap_err();
        assert!(matches!(err, FormatError::UnknownLocale { .. }));
    }

    #[test]
    fn lenient_degrades_bad_pattern_to_literal() {
        let formatter = DateFormatter::lenient("%J", "en_US");
        assert_eq!(formatter.format(&sample_datetime()), "%J");
    }

    #[test]
    fn lenient_degrades_unknown_locale_to_posix() {
        let formatter = DateFormatter::lenient("%Y", "xx_XX");
        assert_eq!(formatter.locale(), Locale::POSIX);
        assert_eq!(formatter.format(&sample_datetime()), "2024");
    }

    #[test]
    fn formatter_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<DateFormatter>();
    }
}
