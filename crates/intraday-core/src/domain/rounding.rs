use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// How the least significant digit of an average price is resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundingMode {
    /// Nearest neighbour, ties away from zero.
    #[default]
    HalfUp,
    /// Nearest neighbour, ties toward zero.
    HalfDown,
    /// Nearest neighbour, ties to the even neighbour.
    HalfEven,
    /// Away from zero.
    Up,
    /// Toward zero.
    Down,
    /// Toward positive infinity.
    Ceiling,
    /// Toward negative infinity.
    Floor,
}

impl RoundingMode {
    pub const fn strategy(self) -> RoundingStrategy {
        match self {
            Self::HalfUp => RoundingStrategy::MidpointAwayFromZero,
            Self::HalfDown => RoundingStrategy::MidpointTowardZero,
            Self::HalfEven => RoundingStrategy::MidpointNearestEven,
            Self::Up => RoundingStrategy::AwayFromZero,
            Self::Down => RoundingStrategy::ToZero,
            Self::Ceiling => RoundingStrategy::ToPositiveInfinity,
            Self::Floor => RoundingStrategy::ToNegativeInfinity,
        }
    }

    /// Round `value` to `scale` fractional digits.
    pub fn round(self, value: Decimal, scale: u32) -> Decimal {
        value.round_dp_with_strategy(scale, self.strategy())
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn default_is_half_up() {
        assert_eq!(RoundingMode::default(), RoundingMode::HalfUp);
    }

    #[test]
    fn resolves_ties_per_mode() {
        let tie = dec!(190.345);
        assert_eq!(RoundingMode::HalfUp.round(tie, 2), dec!(190.35));
        assert_eq!(RoundingMode::HalfDown.round(tie, 2), dec!(190.34));
        assert_eq!(RoundingMode::HalfEven.round(tie, 2), dec!(190.34));
        assert_eq!(RoundingMode::Up.round(dec!(1.001), 2), dec!(1.01));
        assert_eq!(RoundingMode::Down.round(dec!(1.009), 2), dec!(1.00));
        assert_eq!(RoundingMode::Ceiling.round(dec!(1.001), 2), dec!(1.01));
        assert_eq!(RoundingMode::Floor.round(dec!(1.009), 2), dec!(1.00));
    }
}
