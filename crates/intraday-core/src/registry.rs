//! Concurrent symbol → accumulator registry.

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::accumulator::PriceAccumulator;
use crate::config::RegistryConfig;
use crate::domain::{Price, RoundingMode, Symbol, TradeDate};
use crate::snapshot::SecuritySnapshot;
use crate::{LookupError, ValidationError};

/// What a single booking did to the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum BookOutcome {
    /// First price seen for the symbol.
    Created,
    /// Price folded into the symbol's accumulator for the same trade date.
    Updated,
    /// A different trade date arrived; the previous day's statistics were discarded.
    Replaced { previous_date: TradeDate },
}

/// Thread-safe registry owning one [`PriceAccumulator`] per canonical symbol.
///
/// Share it across threads by reference or behind an `Arc`; callers only ever
/// receive [`SecuritySnapshot`] values, never the accumulators themselves.
#[derive(Debug, Default)]
pub struct SecurityRegistry {
    entries: DashMap<Symbol, PriceAccumulator>,
    config: RegistryConfig,
}

impl SecurityRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: RegistryConfig) -> Self {
        Self {
            entries: DashMap::new(),
            config,
        }
    }

    pub fn config(&self) -> RegistryConfig {
        self.config
    }

    /// Record a price for `symbol` on `trade_date`.
    ///
    /// The create/update/replace decision and its commit run under the map's
    /// entry lock for that symbol, so two first bookings of the same symbol
    /// can never both observe it as absent. Validation happens before the map
    /// is touched; a rejected booking leaves every accumulator unchanged.
    pub fn book(
        &self,
        trade_date: TradeDate,
        symbol: &str,
        price: Decimal,
    ) -> Result<BookOutcome, ValidationError> {
        let symbol = Symbol::parse(symbol)?;
        let price = Price::new(price)?;

        match self.entries.entry(symbol) {
            Entry::Vacant(entry) => {
                let accumulator = PriceAccumulator::new(trade_date, entry.key().clone(), price);
                entry.insert(accumulator);
                Ok(BookOutcome::Created)
            }
            Entry::Occupied(entry) if entry.get().trade_date() == trade_date => {
                entry.get().update(price)?;
                Ok(BookOutcome::Updated)
            }
            Entry::Occupied(mut entry) => {
                let accumulator = PriceAccumulator::new(trade_date, entry.key().clone(), price);
                let previous = entry.insert(accumulator);
                Ok(BookOutcome::Replaced {
                    previous_date: previous.trade_date(),
                })
            }
        }
    }

    /// Snapshot of one symbol, averaged with the configured rounding mode.
    pub fn get(&self, symbol: &str) -> Result<SecuritySnapshot, LookupError> {
        self.get_with_rounding(symbol, self.config.rounding_mode)
    }

    pub fn get_with_rounding(
        &self,
        symbol: &str,
        rounding_mode: RoundingMode,
    ) -> Result<SecuritySnapshot, LookupError> {
        let symbol = Symbol::parse(symbol)?;
        self.entries
            .get(&symbol)
            .map(|entry| entry.value().snapshot(rounding_mode))
            .ok_or_else(|| LookupError::NotFound {
                symbol: symbol.to_string(),
            })
    }

    /// Snapshots of every tracked symbol, ordered by canonical symbol.
    ///
    /// Each snapshot is internally consistent; bookings that race with the
    /// enumeration may or may not be reflected.
    pub fn list(&self) -> Vec<SecuritySnapshot> {
        self.list_with_rounding(self.config.rounding_mode)
    }

    pub fn list_with_rounding(&self, rounding_mode: RoundingMode) -> Vec<SecuritySnapshot> {
        let mut snapshots = self
            .entries
            .iter()
            .map(|entry| entry.value().snapshot(rounding_mode))
            .collect::<Vec<_>>();
        snapshots.sort_unstable_by(|left, right| left.symbol.cmp(&right.symbol));
        snapshots
    }

    pub fn contains(&self, symbol: &str) -> bool {
        Symbol::parse(symbol)
            .map(|symbol| self.entries.contains_key(&symbol))
            .unwrap_or(false)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
