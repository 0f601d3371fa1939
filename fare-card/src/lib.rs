//! Prepaid fare card state machine.
//!
//! Models a transit smartcard: it holds a balance, opens a journey on
//! touch-in, and charges the flat fare on touch-out. A touch-in while a
//! journey is still open charges that journey's fare as a penalty.

pub mod card;
pub mod domain;
