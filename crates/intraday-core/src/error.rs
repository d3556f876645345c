use rust_decimal::Decimal;
use thiserror::Error;

/// Coarse classification shared by every error the core returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A required field (trade date, symbol or price) was not supplied.
    MissingArgument,
    /// A field was supplied but is malformed or out of range.
    InvalidArgument,
    /// A query named a symbol the registry does not track.
    NotFound,
}

/// Validation errors raised while building bookings and domain values.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{field} is required")]
    MissingArgument { field: &'static str },

    #[error("price must be greater than zero: {price}")]
    NonPositivePrice { price: Decimal },
    #[error("invalid price '{value}', expected a decimal number")]
    InvalidPrice { value: String },
    #[error("running price sum exceeds the supported decimal range")]
    PriceSumOverflow,
    #[error("adding {price} to running sum {sum} would exceed 28 significant digits")]
    InexactPriceSum { sum: Decimal, price: Decimal },

    #[error("invalid trade date '{value}', expected YYYY-MM-DD")]
    InvalidTradeDate { value: String },

    #[error("expected {expected} fields (trade date, symbol, price), found {found}")]
    UnexpectedFieldCount { expected: usize, found: usize },
}

impl ValidationError {
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::MissingArgument { .. } => ErrorKind::MissingArgument,
            _ => ErrorKind::InvalidArgument,
        }
    }
}

/// Errors returned by registry queries.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LookupError {
    #[error("symbol [{symbol}] not found")]
    NotFound { symbol: String },

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl LookupError {
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::NotFound { .. } => ErrorKind::NotFound,
            Self::Validation(error) => error.kind(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_validation_errors() {
        let missing = ValidationError::MissingArgument { field: "symbol" };
        assert_eq!(missing.kind(), ErrorKind::MissingArgument);

        let invalid = ValidationError::NonPositivePrice {
            price: Decimal::ZERO,
        };
        assert_eq!(invalid.kind(), ErrorKind::InvalidArgument);

        let inexact = ValidationError::InexactPriceSum {
            sum: Decimal::TEN,
            price: Decimal::new(1, 28),
        };
        assert_eq!(inexact.kind(), ErrorKind::InvalidArgument);
    }

    #[test]
    fn lookup_error_delegates_kind_to_validation() {
        let error = LookupError::from(ValidationError::MissingArgument { field: "symbol" });
        assert_eq!(error.kind(), ErrorKind::MissingArgument);

        let error = LookupError::NotFound {
            symbol: String::from("GOOG"),
        };
        assert_eq!(error.kind(), ErrorKind::NotFound);
        assert_eq!(error.to_string(), "symbol [GOOG] not found");
    }
}
