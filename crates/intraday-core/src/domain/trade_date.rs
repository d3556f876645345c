use std::fmt::{Display, Formatter};

use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::{Date, Month};

use crate::ValidationError;

const DATE_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

/// Calendar date a price was traded on, written as `YYYY-MM-DD`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TradeDate(Date);

impl TradeDate {
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::MissingArgument {
                field: "trade date",
            });
        }

        Date::parse(trimmed, DATE_FORMAT)
            .map(Self)
            .map_err(|_| ValidationError::InvalidTradeDate {
                value: trimmed.to_owned(),
            })
    }

    pub fn from_calendar_date(year: i32, month: u8, day: u8) -> Result<Self, ValidationError> {
        let invalid = || ValidationError::InvalidTradeDate {
            value: format!("{year:04}-{month:02}-{day:02}"),
        };
        let month = Month::try_from(month).map_err(|_| invalid())?;
        Date::from_calendar_date(year, month, day)
            .map(Self)
            .map_err(|_| invalid())
    }

    pub fn previous_day(self) -> Option<Self> {
        self.0.previous_day().map(Self)
    }

    pub fn next_day(self) -> Option<Self> {
        self.0.next_day().map(Self)
    }

    pub fn into_inner(self) -> Date {
        self.0
    }

    pub fn format_iso(self) -> String {
        self.0
            .format(DATE_FORMAT)
            .expect("TradeDate must be YYYY-MM-DD formattable")
    }
}

impl From<Date> for TradeDate {
    fn from(value: Date) -> Self {
        Self(value)
    }
}

impl Display for TradeDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.format_iso())
    }
}

impl Serialize for TradeDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.format_iso())
    }
}

impl<'de> Deserialize<'de> for TradeDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Self::parse(&value).map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_iso_date() {
        let parsed = TradeDate::parse("2024-01-02").expect("must parse");
        assert_eq!(parsed.format_iso(), "2024-01-02");
        assert_eq!(
            parsed,
            TradeDate::from_calendar_date(2024, 1, 2).expect("valid date")
        );
    }

    #[test]
    fn rejects_malformed_date() {
        let err = TradeDate::parse("01/02/2024").expect_err("must fail");
        assert!(matches!(err, ValidationError::InvalidTradeDate { .. }));

        let err = TradeDate::parse("2024-02-30").expect_err("must fail");
        assert!(matches!(err, ValidationError::InvalidTradeDate { .. }));
    }

    #[test]
    fn blank_date_is_missing() {
        let err = TradeDate::parse("").expect_err("must fail");
        assert_eq!(
            err,
            ValidationError::MissingArgument {
                field: "trade date"
            }
        );
    }

    #[test]
    fn steps_across_month_boundary() {
        let date = TradeDate::parse("2024-03-01").expect("must parse");
        let previous = date.previous_day().expect("has previous day");
        assert_eq!(previous.to_string(), "2024-02-29");
        assert_eq!(previous.next_day(), Some(date));
    }

    #[test]
    fn serializes_as_string() {
        let date = TradeDate::parse("2024-01-02").expect("must parse");
        let json = serde_json::to_string(&date).expect("must serialize");
        assert_eq!(json, "\"2024-01-02\"");
    }
}
