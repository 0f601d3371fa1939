//! Station identifier type.

use std::fmt;

use serde::{Deserialize, Serialize};

/// An opaque station identifier.
///
/// The card keeps no station registry, so any identifier is accepted
/// as-is; two stations are the same exactly when their identifiers are
/// equal.
///
/// # Examples
///
/// ```
/// use fare_card::domain::Station;
///
/// let victoria = Station::new("Victoria");
/// assert_eq!(victoria.as_str(), "Victoria");
/// assert_eq!(victoria, Station::from("Victoria"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Station(String);

impl Station {
    /// Creates a station from any identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Station(id.into())
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Station {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Station {
    fn from(id: &str) -> Self {
        Station(id.to_string())
    }
}

impl From<String> for Station {
    fn from(id: String) -> Self {
        Station(id)
    }
}
