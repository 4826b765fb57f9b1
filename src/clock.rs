//! Source of the date printed on the card.

use serde::Deserialize;
use time::{Date, OffsetDateTime};

pub trait Clock {
    fn today(&self) -> Date;
}

/// Reads the local date, falling back to UTC when the offset is unknown.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> Date {
        OffsetDateTime::now_local()
            .unwrap_or_else(|_| OffsetDateTime::now_utc())
            .date()
    }
}

/// Always returns the same date.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub Date);

impl Clock for FixedClock {
    fn today(&self) -> Date {
        self.0
    }
}

/// How a date is written on the card.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DateStyle {
    /// `2026/10/9`
    #[default]
    Ja,
    /// `10/9/2026`
    En,
    /// `2026-10-09`
    Iso,
}

impl DateStyle {
    pub fn format(&self, date: Date) -> String {
        let (y, m, d) = (date.year(), u8::from(date.month()), date.day());
        match self {
            DateStyle::Ja => format!("{y}/{m}/{d}"),
            DateStyle::En => format!("{m}/{d}/{y}"),
            DateStyle::Iso => format!("{y:04}-{m:02}-{d:02}"),
        }
    }
}
