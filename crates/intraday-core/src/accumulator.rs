//! Running low/high/average price state for one security on one trade date.

use parking_lot::Mutex;
use rust_decimal::Decimal;

use crate::domain::{Price, RoundingMode, Symbol, TradeDate};
use crate::snapshot::SecuritySnapshot;
use crate::ValidationError;

/// Consistent copy of an accumulator's numeric fields.
///
/// Always taken inside the accumulator's critical section, so `low_price`,
/// `high_price`, `price_sum` and `price_count` describe the same set of prices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceStats {
    pub low_price: Decimal,
    pub high_price: Decimal,
    pub price_sum: Decimal,
    pub price_count: u64,
}

impl PriceStats {
    fn new(price: Price) -> Self {
        let value = price.value();
        Self {
            low_price: value,
            high_price: value,
            price_sum: value,
            price_count: 1,
        }
    }

    fn record(&mut self, price: Price) -> Result<(), ValidationError> {
        let value = price.value();
        let price_sum = self
            .price_sum
            .checked_add(value)
            .ok_or(ValidationError::PriceSumOverflow)?;
        // Past 28 significant digits the add rounds and drops scale instead of failing.
        let exact = price_sum.scale() == self.price_sum.scale().max(value.scale())
            && price_sum - value == self.price_sum;
        if !exact {
            return Err(ValidationError::InexactPriceSum {
                sum: self.price_sum,
                price: value,
            });
        }

        self.low_price = self.low_price.min(value);
        self.high_price = self.high_price.max(value);
        self.price_sum = price_sum;
        self.price_count += 1;
        Ok(())
    }

    /// Average price at the scale of `price_sum`.
    ///
    /// `380.69` over two prices is `190.345`, which rounds to `190.35` under
    /// [`RoundingMode::HalfUp`].
    pub fn average_price(&self, rounding_mode: RoundingMode) -> Decimal {
        let scale = self.price_sum.scale();
        let quotient = self.price_sum / Decimal::from(self.price_count);
        let mut average = rounding_mode.round(quotient, scale);
        average.rescale(scale);
        average
    }
}

/// Thread-safe accumulator for a single symbol and trade date.
///
/// All four numeric fields sit behind one mutex; readers never observe a
/// partially applied update.
#[derive(Debug)]
pub struct PriceAccumulator {
    symbol: Symbol,
    trade_date: TradeDate,
    stats: Mutex<PriceStats>,
}

impl PriceAccumulator {
    /// Create an accumulator seeded with its first price.
    pub fn new(trade_date: TradeDate, symbol: Symbol, price: Price) -> Self {
        Self {
            symbol,
            trade_date,
            stats: Mutex::new(PriceStats::new(price)),
        }
    }

    /// Build an accumulator from raw, possibly absent inputs.
    pub fn try_new(
        trade_date: Option<TradeDate>,
        symbol: Option<&str>,
        price: Option<Decimal>,
    ) -> Result<Self, ValidationError> {
        let trade_date = trade_date.ok_or(ValidationError::MissingArgument {
            field: "trade date",
        })?;
        let symbol = symbol.ok_or(ValidationError::MissingArgument { field: "symbol" })?;
        let price = price.ok_or(ValidationError::MissingArgument { field: "price" })?;

        Ok(Self::new(trade_date, Symbol::parse(symbol)?, Price::new(price)?))
    }

    pub fn symbol(&self) -> &Symbol {
        &self.symbol
    }

    pub fn trade_date(&self) -> TradeDate {
        self.trade_date
    }

    /// Fold another price into the running statistics.
    ///
    /// Fails when the running sum would exceed the decimal range or could not
    /// be represented exactly; the statistics are left untouched in both cases.
    pub fn update(&self, price: Price) -> Result<(), ValidationError> {
        self.stats.lock().record(price)
    }

    pub fn stats(&self) -> PriceStats {
        *self.stats.lock()
    }

    pub fn low_price(&self) -> Decimal {
        self.stats().low_price
    }

    pub fn high_price(&self) -> Decimal {
        self.stats().high_price
    }

    pub fn calc_average_price(&self, rounding_mode: RoundingMode) -> Decimal {
        self.stats().average_price(rounding_mode)
    }

    /// Immutable view of the accumulator; every field comes from one lock acquisition.
    pub fn snapshot(&self, rounding_mode: RoundingMode) -> SecuritySnapshot {
        SecuritySnapshot::new(
            self.symbol.clone(),
            self.trade_date,
            self.stats(),
            rounding_mode,
        )
    }
}
