use chrono::NaiveDate;
use std::fmt;

pub const DATE_KEY_FMT: &str = "%Y-%m-%d";

/// Canonical `YYYY-MM-DD` identity of a calendar date. Memo lookup and
/// the on-disk file both key on this string, never on the date itself.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DateKey(String);

impl DateKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Parse a key back into its date. Only the zero-padded canonical
    /// form is accepted, so `2024-3-1` is rejected.
    pub fn parse_date(raw: &str) -> Option<NaiveDate> {
        let date = NaiveDate::parse_from_str(raw, DATE_KEY_FMT).ok()?;
        (DateKey::from(date).as_str() == raw).then_some(date)
    }
}

impl From<NaiveDate> for DateKey {
    fn from(date: NaiveDate) -> Self {
        Self(date.format(DATE_KEY_FMT).to_string())
    }
}

impl AsRef<str> for DateKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
