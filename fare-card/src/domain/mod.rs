//! Domain types for the fare card.
//!
//! Plain data carried by the card: station identifiers, journey
//! records, and the error taxonomy. The state machine itself lives in
//! [`crate::card`].

mod error;
mod journey;
mod station;

pub use error::CardError;
pub use journey::{Journey, MINIMUM_FARE};
pub use station::Station;
