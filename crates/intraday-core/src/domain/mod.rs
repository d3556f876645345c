//! # Domain Types
//!
//! Validated value types shared by the accumulator and the registry.
//!
//! | Type | Description |
//! |------|-------------|
//! | [`Symbol`] | Canonical (upper-cased) security symbol |
//! | [`Price`] | Strictly positive decimal price |
//! | [`TradeDate`] | `YYYY-MM-DD` trading date |
//! | [`RoundingMode`] | Rounding applied to average prices |
//!
//! ## Validation
//!
//! Every type validates at construction, so an accumulator can only ever be
//! built from a present symbol and a positive price:
//!
//! ```rust
//! use intraday_core::{Price, Symbol, ValidationError};
//!
//! assert_eq!(Symbol::parse("aapl")?.as_str(), "AAPL");
//! assert!(matches!(
//!     Price::parse("0"),
//!     Err(ValidationError::NonPositivePrice { .. })
//! ));
//! # Ok::<(), ValidationError>(())
//! ```

mod price;
mod rounding;
mod symbol;
mod trade_date;

pub use price::Price;
pub use rounding::RoundingMode;
pub use symbol::Symbol;
pub use trade_date::TradeDate;
