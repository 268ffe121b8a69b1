//! Win-loss record strings
//!
//! The provider encodes split records as `"<wins>-<losses>"`, e.g. `"41-11"`.
//! Both parts must be non-negative integers; anything else is a fault.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordParseError {
    #[error("'{0}' has no '-' between wins and losses")]
    MissingSeparator(String),

    #[error("'{value}' has a non-numeric {part} count")]
    InvalidCount { value: String, part: &'static str },
}

/// A wins/losses pair parsed from a `"W-L"` string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WinLoss {
    pub wins: u32,
    pub losses: u32,
}

impl WinLoss {
    pub fn new(wins: u32, losses: u32) -> Self {
        Self { wins, losses }
    }

    /// Total games, widened so two maximal counts still add up exactly.
    pub fn games(&self) -> u64 {
        u64::from(self.wins) + u64::from(self.losses)
    }
}

impl FromStr for WinLoss {
    type Err = RecordParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let (wins, losses) = trimmed
            .split_once('-')
            .ok_or_else(|| RecordParseError::MissingSeparator(s.to_string()))?;

        let parse_count = |part: &str, name: &'static str| {
            // u32::from_str accepts a leading '+', which is not part of the format
            if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
                return Err(RecordParseError::InvalidCount {
                    value: s.to_string(),
                    part: name,
                });
            }
            part.parse::<u32>().map_err(|_| RecordParseError::InvalidCount {
                value: s.to_string(),
                part: name,
            })
        };

        Ok(WinLoss {
            wins: parse_count(wins, "win")?,
            losses: parse_count(losses, "loss")?,
        })
    }
}

impl fmt::Display for WinLoss {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.wins, self.losses)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_simple_record() {
        assert_eq!("3-2".parse::<WinLoss>(), Ok(WinLoss::new(3, 2)));
        assert_eq!("41-0".parse::<WinLoss>(), Ok(WinLoss::new(41, 0)));
    }

    #[test]
    fn test_display_matches_provider_format() {
        let record = WinLoss::new(34, 7);
        assert_eq!(record.to_string(), "34-7");
        assert_eq!(record.to_string().parse::<WinLoss>(), Ok(record));
    }

    #[test]
    fn test_surrounding_whitespace_is_ignored() {
        assert_eq!(" 12-29 ".parse::<WinLoss>(), Ok(WinLoss::new(12, 29)));
    }

    #[test]
    fn test_missing_dash_is_rejected() {
        assert_eq!(
            "32".parse::<WinLoss>(),
            Err(RecordParseError::MissingSeparator("32".to_string()))
        );
        assert!(matches!(
            "".parse::<WinLoss>(),
            Err(RecordParseError::MissingSeparator(_))
        ));
    }

    #[test]
    fn test_non_numeric_parts_are_rejected() {
        assert!(matches!(
            "x-2".parse::<WinLoss>(),
            Err(RecordParseError::InvalidCount { part: "win", .. })
        ));
        assert!(matches!(
            "3-".parse::<WinLoss>(),
            Err(RecordParseError::InvalidCount { part: "loss", .. })
        ));
        assert!(matches!(
            "3-2-1".parse::<WinLoss>(),
            Err(RecordParseError::InvalidCount { part: "loss", .. })
        ));
        assert!(matches!(
            "+3-2".parse::<WinLoss>(),
            Err(RecordParseError::InvalidCount { part: "win", .. })
        ));
    }

    #[test]
    fn test_negative_counts_are_rejected() {
        // "-3-2" splits on the first dash, leaving an empty win count
        assert!("-3-2".parse::<WinLoss>().is_err());
    }

    #[test]
    fn test_games_sums_both_sides() {
        assert_eq!(WinLoss::new(29, 12).games(), 41);
    }

    #[test]
    fn test_games_does_not_overflow_at_max_counts() {
        let record = "4294967295-1".parse::<WinLoss>().unwrap();
        assert_eq!(record.games(), 4_294_967_296);
        assert_eq!(WinLoss::new(u32::MAX, u32::MAX).games(), 2 * u64::from(u32::MAX));
    }
}
