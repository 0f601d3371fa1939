//! Card error types.
//!
//! A closed set of failures for card operations. Every failure is
//! immediate and leaves the card unchanged; callers can retry after
//! topping up or touching correctly.

/// Errors produced by card operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CardError {
    /// Top-up would push the balance over the configured limit
    #[error("top-up of {amount} would take balance {balance} over the {limit} limit")]
    LimitExceeded {
        /// Balance at the time of the attempt
        balance: i64,
        /// Amount the caller tried to add
        amount: i64,
        /// Configured maximum balance
        limit: i64,
    },

    /// Balance below the minimum fare at touch-in
    #[error("insufficient funds: balance {balance} is below the minimum fare {minimum_fare}")]
    InsufficientFunds {
        /// Balance at the time of the attempt
        balance: i64,
        /// Configured minimum fare
        minimum_fare: i64,
    },

    /// Touch-out invoked with no journey in progress
    #[error("no journey in progress")]
    NoActiveJourney,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = CardError::LimitExceeded {
            balance: 85,
            amount: 10,
            limit: 90,
        };
        assert_eq!(
            err.to_string(),
            "top-up of 10 would take balance 85 over the 90 limit"
        );

        let err = CardError::InsufficientFunds {
            balance: 0,
            minimum_fare: 1,
        };
        assert_eq!(
            err.to_string(),
            "insufficient funds: balance 0 is below the minimum fare 1"
        );

        let err = CardError::NoActiveJourney;
        assert_eq!(err.to_string(), "no journey in progress");
    }
}
