//! CLI argument definitions for the intraday tracker.
//!
//! The client reads bookings of the form `YYYY-MM-DD SYMBOL PRICE`, one per
//! line, and prints every tracked security after each accepted booking.
//!
//! # Options
//!
//! | Option | Default | Description |
//! |--------|---------|-------------|
//! | `--format` | `table` | Output format (table, json, ndjson) |
//! | `--pretty` | `false` | Pretty-print JSON output |
//! | `--rounding` | `half-up` | Rounding mode for average prices |
//! | `--input` | stdin | Read bookings from a file |
//! | `--strict` | `false` | Abort on the first rejected line |
//! | `--log-level` | `$RUST_LOG` | Tracing filter directive |
//!
//! # Examples
//!
//! ```bash
//! # Interactive session
//! intraday
//!
//! # Replay a day of ticks as JSON
//! intraday --input ticks.txt --format json --pretty
//! ```

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use intraday_core::RoundingMode;

/// Intraday tracker - running low, high and average price per security.
#[derive(Debug, Parser)]
#[command(
    name = "intraday",
    author,
    version,
    about = "Track intraday low, high and average prices per security",
    long_about = "Reads bookings as '{TRADE DATE (YYYY-MM-DD)} {SYMBOL} {PRICE}', one per line, \
and prints the low, high and average price of every tracked security after each booking.\n\
\n\
Enter 'quit' to terminate an interactive session."
)]
pub struct Cli {
    /// Output format for results.
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Pretty-print JSON output with indentation.
    #[arg(long, default_value_t = false)]
    pub pretty: bool,

    /// Rounding mode used for average prices.
    #[arg(long, value_enum, default_value_t = RoundingSelector::HalfUp)]
    pub rounding: RoundingSelector,

    /// Read bookings from this file instead of standard input.
    #[arg(long, value_name = "PATH")]
    pub input: Option<PathBuf>,

    /// Treat the first rejected line as fatal (exit code 2).
    #[arg(long, default_value_t = false)]
    pub strict: bool,

    /// Tracing filter directive, e.g. `debug` or `intraday_cli=trace`.
    ///
    /// Falls back to `RUST_LOG`, then to `intraday_cli=info`.
    #[arg(long, value_name = "FILTER")]
    pub log_level: Option<String>,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// `< DATE SYMBOL HIGH LOW AVERAGE` rows.
    Table,
    /// One JSON array per booking.
    Json,
    /// One JSON object per security per line.
    Ndjson,
}

/// Rounding mode selection for average prices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RoundingSelector {
    HalfUp,
    HalfDown,
    HalfEven,
    Up,
    Down,
    Ceiling,
    Floor,
}

impl From<RoundingSelector> for RoundingMode {
    fn from(value: RoundingSelector) -> Self {
        match value {
            RoundingSelector::HalfUp => Self::HalfUp,
            RoundingSelector::HalfDown => Self::HalfDown,
            RoundingSelector::HalfEven => Self::HalfEven,
            RoundingSelector::Up => Self::Up,
            RoundingSelector::Down => Self::Down,
            RoundingSelector::Ceiling => Self::Ceiling,
            RoundingSelector::Floor => Self::Floor,
        }
    }
}
