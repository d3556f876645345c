use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::accumulator::PriceStats;
use crate::domain::{RoundingMode, Symbol, TradeDate};

/// Point-in-time view of one tracked security.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecuritySnapshot {
    pub symbol: Symbol,
    pub trade_date: TradeDate,
    pub low_price: Decimal,
    pub high_price: Decimal,
    pub average_price: Decimal,
    pub price_sum: Decimal,
    pub price_count: u64,
}

impl SecuritySnapshot {
    pub(crate) fn new(
        symbol: Symbol,
        trade_date: TradeDate,
        stats: PriceStats,
        rounding_mode: RoundingMode,
    ) -> Self {
        Self {
            symbol,
            trade_date,
            low_price: stats.low_price,
            high_price: stats.high_price,
            average_price: stats.average_price(rounding_mode),
            price_sum: stats.price_sum,
            price_count: stats.price_count,
        }
    }
}
