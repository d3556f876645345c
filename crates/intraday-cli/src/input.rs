//! Parsing of booking lines typed at the prompt or read from a file.

use intraday_core::{Price, TradeDate, ValidationError};

const FIELDS: [&str; 3] = ["trade date", "symbol", "price"];
const QUIT: &str = "quit";

/// One parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputLine {
    Blank,
    Quit,
    Book(Booking),
}

/// A booking request; the symbol is normalized by the registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Booking {
    pub trade_date: TradeDate,
    pub symbol: String,
    pub price: Price,
}

/// Split a line on whitespace into `YYYY-MM-DD SYMBOL PRICE`.
pub fn parse_line(line: &str) -> Result<InputLine, ValidationError> {
    let tokens = line.split_whitespace().collect::<Vec<_>>();
    match tokens.as_slice() {
        [] => Ok(InputLine::Blank),
        [single] if single.eq_ignore_ascii_case(QUIT) => Ok(InputLine::Quit),
        [trade_date, symbol, price] => Ok(InputLine::Book(Booking {
            trade_date: TradeDate::parse(trade_date)?,
            symbol: (*symbol).to_owned(),
            price: Price::parse(price)?,
        })),
        partial if partial.len() < FIELDS.len() => Err(ValidationError::MissingArgument {
            field: FIELDS[partial.len()],
        }),
        extra => Err(ValidationError::UnexpectedFieldCount {
            expected: FIELDS.len(),
            found: extra.len(),
        }),
    }
}
