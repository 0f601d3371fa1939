//! Journey record.
//!
//! A `Journey` is a single trip on the card: opened at touch-in with the
//! entry station, closed at touch-out with the exit station. Fares are
//! flat in this model; every journey charges the minimum fare rather
//! than a price derived from the two stations.

use serde::{Deserialize, Serialize};

use super::Station;

/// Flat fare charged for any journey, in whole currency units.
pub const MINIMUM_FARE: i64 = 1;

/// A single open-or-closed trip.
///
/// An open journey has no exit station; [`Journey::end`] closes it. The
/// fare is stamped at construction and never changes afterwards.
///
/// # Examples
///
/// ```
/// use fare_card::domain::{Journey, Station};
///
/// let mut journey = Journey::new(Some(Station::new("Victoria")));
/// journey.end(Some(Station::new("Brixton")));
///
/// assert_eq!(journey.station_in().map(Station::as_str), Some("Victoria"));
/// assert_eq!(journey.station_out().map(Station::as_str), Some("Brixton"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Journey {
    station_in: Option<Station>,
    station_out: Option<Station>,
    fare: i64,
}

impl Journey {
    /// Opens a journey at the given entry station, charged at the
    /// canonical minimum fare.
    pub fn new(station_in: Option<Station>) -> Self {
        Self::with_fare(station_in, MINIMUM_FARE)
    }

    /// Opens a journey with an explicit fare.
    ///
    /// Used by the card to stamp its configured fare onto the journey.
    pub fn with_fare(station_in: Option<Station>, fare: i64) -> Self {
        Journey {
            station_in,
            station_out: None,
            fare,
        }
    }

    /// Returns the entry station, if one was recorded.
    pub fn station_in(&self) -> Option<&Station> {
        self.station_in.as_ref()
    }

    /// Returns the exit station, if the journey has been ended.
    pub fn station_out(&self) -> Option<&Station> {
        self.station_out.as_ref()
    }

    /// Returns the flat fare for this journey.
    pub fn fare(&self) -> i64 {
        self.fare
    }

    /// Returns true once an exit station has been recorded.
    pub fn is_complete(&self) -> bool {
        self.station_out.is_some()
    }

    /// Records the exit station and returns it.
    ///
    /// Calling `end` again simply overwrites the previous exit station.
    pub fn end(&mut self, station_out: Option<Station>) -> Option<&Station> {
        self.station_out = station_out;
        self.station_out.as_ref()
    }
}
