use std::fmt::{Display, Formatter};
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::ValidationError;

/// A strictly positive traded price.
///
/// The decimal keeps the scale it was written with, so `196.50` stays two
/// fractional digits wide through sums and averages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Price(Decimal);

impl Price {
    pub fn new(value: Decimal) -> Result<Self, ValidationError> {
        if value <= Decimal::ZERO {
            return Err(ValidationError::NonPositivePrice { price: value });
        }

        Ok(Self(value))
    }

    /// Parse a decimal price such as `178.44`.
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::MissingArgument { field: "price" });
        }

        let value = Decimal::from_str(trimmed).map_err(|_| ValidationError::InvalidPrice {
            value: trimmed.to_owned(),
        })?;
        Self::new(value)
    }

    pub const fn value(self) -> Decimal {
        self.0
    }
}

impl Display for Price {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.0, f)
    }
}

impl TryFrom<Decimal> for Price {
    type Error = ValidationError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Price> for Decimal {
    fn from(value: Price) -> Self {
        value.0
    }
}
