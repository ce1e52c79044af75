//! Core exercise logic
//!
//! Pure functions for the change counter and the pyramid printer. Nothing in
//! here touches standard streams, so every computation can be tested directly.

pub mod change;
pub mod pyramid;

pub use change::{count_coins, make_change, validate_change_owed, Coin, CoinBreakdown};
pub use pyramid::{render, render_row, rows, Height, MAX_HEIGHT, MIN_HEIGHT};

#[cfg(test)]
mod change_proptest;

#[cfg(test)]
mod pyramid_proptest;
