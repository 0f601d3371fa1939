//! Card state machine.
//!
//! A [`Card`] is the single owner of a balance, an optional open
//! journey, and the history of completed trips. Touch-in opens a
//! journey, touch-out closes it, charges its fare, and archives it.

mod config;

pub use config::FareConfig;

use tracing::debug;

use crate::domain::{CardError, Journey, Station};

/// A prepaid fare card.
///
/// The journey status moves Idle → Traveling on touch-in and back to
/// Idle on touch-out. Touching in while already traveling is not an
/// error: the open journey is charged its fare as a penalty and
/// discarded (it never reaches the trip history), and a fresh journey
/// opens at the new entry station.
///
/// # Examples
///
/// ```
/// use fare_card::card::Card;
/// use fare_card::domain::Station;
///
/// let mut card = Card::new();
/// card.top_up(10).unwrap();
/// card.touch_in(Some(Station::new("Victoria"))).unwrap();
/// card.touch_out(Some(Station::new("Brixton"))).unwrap();
///
/// assert_eq!(card.balance(), 9);
/// assert_eq!(card.trip_history().len(), 1);
/// assert!(!card.in_journey());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Card {
    balance: i64,
    trip_history: Vec<Journey>,
    journey: Option<Journey>,
    config: FareConfig,
}

impl Card {
    /// Creates an empty card with the default fare configuration.
    pub fn new() -> Self {
        Self::with_balance(0)
    }

    /// Creates a card preloaded with the given balance.
    pub fn with_balance(balance: i64) -> Self {
        Self::with_config(balance, FareConfig::default())
    }

    /// Creates a card with an explicit configuration.
    pub fn with_config(balance: i64, config: FareConfig) -> Self {
        Card {
            balance,
            trip_history: Vec::new(),
            journey: None,
            config,
        }
    }

    /// Current balance in whole currency units.
    ///
    /// The balance never exceeds the configured maximum, but it can go
    /// negative: touch-out deducts unconditionally once a journey is
    /// open, and the penalty path can drain the balance below the fare
    /// first.
    pub fn balance(&self) -> i64 {
        self.balance
    }

    /// Completed journeys, oldest first.
    ///
    /// Journeys discarded by the penalty path never appear here.
    pub fn trip_history(&self) -> &[Journey] {
        &self.trip_history
    }

    /// The journey currently in progress, if any.
    pub fn current_journey(&self) -> Option<&Journey> {
        self.journey.as_ref()
    }

    /// The card's fare configuration.
    pub fn config(&self) -> &FareConfig {
        &self.config
    }

    /// Returns true while a journey is in progress.
    pub fn in_journey(&self) -> bool {
        self.journey.is_some()
    }

    /// Adds `amount` to the balance and returns the new balance.
    ///
    /// The amount itself is not validated; only the resulting balance
    /// is checked against the limit.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::LimitExceeded`] if the top-up would push
    /// the balance over the configured maximum. The balance is left
    /// unchanged.
    pub fn top_up(&mut self, amount: i64) -> Result<i64, CardError> {
        if self.balance.saturating_add(amount) > self.config.max_balance {
            return Err(CardError::LimitExceeded {
                balance: self.balance,
                amount,
                limit: self.config.max_balance,
            });
        }
        self.balance += amount;
        debug!(amount, balance = self.balance, "topped up");
        Ok(self.balance)
    }

    /// Begins a journey at `station`.
    ///
    /// If the previous journey was never touched out, it is charged its
    /// fare as a penalty and discarded without reaching the history.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::InsufficientFunds`] if the balance is below
    /// the minimum fare. Nothing changes, including any open journey.
    pub fn touch_in(&mut self, station: Option<Station>) -> Result<(), CardError> {
        if self.balance < self.config.minimum_fare {
            return Err(CardError::InsufficientFunds {
                balance: self.balance,
                minimum_fare: self.config.minimum_fare,
            });
        }

        if let Some(abandoned) = self.journey.take() {
            // Missed touch-out: the open journey is forfeit, not archived.
            self.balance -= abandoned.fare();
            debug!(
                penalty = abandoned.fare(),
                balance = self.balance,
                "penalised missed touch-out"
            );
        }

        self.journey = Some(Journey::with_fare(station, self.config.minimum_fare));
        Ok(())
    }

    /// Ends the current journey at `station`, deducts its fare, and
    /// archives it in the trip history.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::NoActiveJourney`] if no journey is in
    /// progress. The balance and history are left unchanged.
    pub fn touch_out(&mut self, station: Option<Station>) -> Result<(), CardError> {
        let mut journey = self.journey.take().ok_or(CardError::NoActiveJourney)?;
        journey.end(station);
        self.balance -= journey.fare();
        debug!(
            fare = journey.fare(),
            balance = self.balance,
            "journey completed"
        );
        self.trip_history.push(journey);
        Ok(())
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// No sequence of top-ups leaves the balance over the limit,
        /// and each outcome is exact: success adds the amount, failure
        /// changes nothing.
        #[test]
        fn balance_never_exceeds_the_limit(
            amounts in proptest::collection::vec(0i64..=120, 1..20),
        ) {
            let mut card = Card::new();
            for amount in amounts {
                let before = card.balance();
                match card.top_up(amount) {
                    Ok(new_balance) => {
                        prop_assert_eq!(new_balance, before + amount);
                        prop_assert_eq!(card.balance(), new_balance);
                    }
                    Err(_) => prop_assert_eq!(card.balance(), before),
                }
                prop_assert!(card.balance() <= card.config().max_balance);
            }
        }

        /// A random sequence of taps keeps the card consistent with a
        /// naive shadow model of balance, journey status, and history.
        #[test]
        fn random_taps_match_a_shadow_model(
            ops in proptest::collection::vec(0u8..3, 1..40),
        ) {
            let mut card = Card::with_balance(20);
            let mut balance = 20i64;
            let mut open = false;
            let mut history = 0usize;

            for op in ops {
                match op {
                    0 => {
                        if balance + 5 <= 90 {
                            prop_assert!(card.top_up(5).is_ok());
                            balance += 5;
                        } else {
                            prop_assert!(card.top_up(5).is_err());
                        }
                    }
                    1 => {
                        if balance < 1 {
                            prop_assert!(card.touch_in(None).is_err());
                        } else {
                            if open {
                                balance -= 1;
                            }
                            prop_assert!(card.touch_in(None).is_ok());
                            open = true;
                        }
                    }
                    _ => {
                        if open {
                            prop_assert!(card.touch_out(None).is_ok());
                            balance -= 1;
                            history += 1;
                            open = false;
                        } else {
                            prop_assert!(card.touch_out(None).is_err());
                        }
                    }
                }

                prop_assert_eq!(card.balance(), balance);
                prop_assert_eq!(card.in_journey(), open);
                prop_assert_eq!(card.trip_history().len(), history);
            }
        }
    }
}
