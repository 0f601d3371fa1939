//! Fare and balance configuration.

use serde::{Deserialize, Serialize};

use crate::domain::MINIMUM_FARE;

/// Configuration for a card's balance limit and fares.
///
/// There is no separate penalty amount: a journey left open is charged
/// its own fare when the card next touches in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FareConfig {
    /// Maximum balance the card may hold.
    pub max_balance: i64,

    /// Flat fare charged for any journey. Also the floor the balance
    /// must meet before a touch-in is accepted.
    pub minimum_fare: i64,
}

impl FareConfig {
    /// Create a configuration with the given limits.
    pub fn new(max_balance: i64, minimum_fare: i64) -> Self {
        Self {
            max_balance,
            minimum_fare,
        }
    }
}

impl Default for FareConfig {
    fn default() -> Self {
        Self {
            max_balance: 90,
            minimum_fare: MINIMUM_FARE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = FareConfig::default();

        assert_eq!(config.max_balance, 90);
        assert_eq!(config.minimum_fare, 1);
    }

    #[test]
    fn custom_config() {
        let config = FareConfig::new(200, 3);

        assert_eq!(config.max_balance, 200);
        assert_eq!(config.minimum_fare, 3);
    }
}
