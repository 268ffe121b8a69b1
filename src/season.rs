//! NBA season identifiers in the provider's `YYYY-YY` form.

use crate::constants::season::START_MONTH;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A season such as `2022-23`, identified by the calendar year it starts in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Season {
    start_year: i32,
}

impl Season {
    pub fn new(start_year: i32) -> Self {
        Self { start_year }
    }

    pub fn start_year(&self) -> i32 {
        self.start_year
    }

    /// Season in progress on the given date. Seasons roll over in October.
    pub fn containing(date: NaiveDate) -> Self {
        if date.month() >= START_MONTH {
            Self::new(date.year())
        } else {
            Self::new(date.year() - 1)
        }
    }

    /// Season in progress today, local time.
    pub fn current() -> Self {
        Self::containing(chrono::Local::now().date_naive())
    }
}

impl FromStr for Season {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (start, end) = s
            .split_once('-')
            .ok_or_else(|| format!("Season '{s}' must be in YYYY-YY format"))?;

        if start.len() != 4 || end.len() != 2 {
            return Err(format!("Season '{s}' must be in YYYY-YY format"));
        }

        let start_year: i32 = start
            .parse()
            .map_err(|_| format!("Season '{s}' has a non-numeric start year"))?;
        let end_year: i32 = end
            .parse()
            .map_err(|_| format!("Season '{s}' has a non-numeric end year"))?;

        if (start_year + 1) % 100 != end_year {
            return Err(format!(
                "Season '{s}' must span consecutive years (expected {start_year}-{:02})",
                (start_year + 1) % 100
            ));
        }

        Ok(Self::new(start_year))
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{:02}", self.start_year, (self.start_year + 1) % 100)
    }
}

impl Serialize for Season {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Season {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
