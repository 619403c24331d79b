//! Date bound parsing for `--after` and `--before`.

use chrono::{Duration, Local, NaiveDate};

/// A calendar day used as a lexicographic bound on `CreatedAt`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateBound {
    date: NaiveDate,
}

impl DateBound {
    /// Parses a date bound from a string.
    ///
    /// Accepts:
    /// - Relative: "7d", "30d" (days before today, local time)
    /// - Absolute: "2024-01-15" (YYYY-MM-DD format)
    pub fn parse(s: &str) -> Result<Self, String> {
        Self::parse_relative_to(s, Local::now().date_naive())
    }

    /// Parses a date bound, resolving relative forms against `today`.
    pub fn parse_relative_to(s: &str, today: NaiveDate) -> Result<Self, String> {
        let s = s.trim();

        if let Some(days_str) = s.strip_suffix('d') {
            let days: i64 = days_str
                .parse()
                .map_err(|_| format!("invalid relative date: {}", s))?;
            if days < 0 {
                return Err(format!("days must be non-negative: {}", s));
            }
            let date = Duration::try_days(days)
                .and_then(|delta| today.checked_sub_signed(delta))
                .ok_or_else(|| format!("relative date out of range: {}", s))?;
            return Ok(Self { date });
        }

        let date = NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map_err(|_| format!("invalid date format (expected YYYY-MM-DD or Nd): {}", s))?;

        Ok(Self { date })
    }

    /// Returns the bound as the `YYYY-MM-DD` key compared against `CreatedAt`.
    pub fn key(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }
}
