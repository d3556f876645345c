//! # Intraday Core
//!
//! Thread-safe tracking of the running low, high and average price of each
//! security during a trading session.
//!
//! ## Overview
//!
//! - **Domain types** with validation at construction ([`Symbol`], [`Price`], [`TradeDate`])
//! - **[`PriceAccumulator`]**: low/high/sum/count for one symbol on one trade date,
//!   guarded by a single lock so readers always see a consistent snapshot
//! - **[`SecurityRegistry`]**: symbol → accumulator map whose create/update/replace
//!   decision is one atomic step per symbol
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`accumulator`] | Per-symbol price accumulator |
//! | [`config`] | Registry configuration |
//! | [`domain`] | Symbol, price, trade date, rounding mode |
//! | [`error`] | Validation and lookup errors |
//! | [`registry`] | Concurrent security registry |
//! | [`snapshot`] | Immutable snapshot returned to callers |
//!
//! ## Quick Start
//!
//! ```rust
//! use intraday_core::{SecurityRegistry, TradeDate};
//! use rust_decimal::Decimal;
//! use std::str::FromStr;
//!
//! let registry = SecurityRegistry::new();
//! let date = TradeDate::parse("2024-01-02")?;
//!
//! registry.book(date, "fb", Decimal::from_str("184.19").unwrap())?;
//! registry.book(date, "FB", Decimal::from_str("196.50").unwrap())?;
//!
//! let fb = registry.get("Fb")?;
//! assert_eq!(fb.average_price.to_string(), "190.35");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Error Handling
//!
//! Every error classifies into one of three kinds:
//!
//! ```rust
//! use intraday_core::{ErrorKind, LookupError};
//!
//! fn describe(error: &LookupError) -> &'static str {
//!     match error.kind() {
//!         ErrorKind::MissingArgument => "a required field was not supplied",
//!         ErrorKind::InvalidArgument => "a field was malformed",
//!         ErrorKind::NotFound => "symbol is not tracked",
//!     }
//! }
//! ```
//!
//! The library performs no logging and no console output; failures are
//! returned to the caller and never alter registry state.

pub mod accumulator;
pub mod config;
pub mod domain;
pub mod error;
pub mod registry;
pub mod snapshot;

pub use accumulator::{PriceAccumulator, PriceStats};
pub use config::RegistryConfig;
pub use domain::{Price, RoundingMode, Symbol, TradeDate};
pub use error::{ErrorKind, LookupError, ValidationError};
pub use registry::{BookOutcome, SecurityRegistry};
pub use snapshot::SecuritySnapshot;
