use serde::{Deserialize, Serialize};

use crate::domain::RoundingMode;

/// Configuration for a [`SecurityRegistry`](crate::SecurityRegistry).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RegistryConfig {
    /// Rounding applied to average prices in `get` and `list` results.
    pub rounding_mode: RoundingMode,
}

impl RegistryConfig {
    pub fn with_rounding_mode(mut self, rounding_mode: RoundingMode) -> Self {
        self.rounding_mode = rounding_mode;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_rounds_half_up() {
        assert_eq!(RegistryConfig::default().rounding_mode, RoundingMode::HalfUp);
    }

    #[test]
    fn builder_overrides_rounding() {
        let config = RegistryConfig::default().with_rounding_mode(RoundingMode::HalfEven);
        assert_eq!(config.rounding_mode, RoundingMode::HalfEven);
    }
}
