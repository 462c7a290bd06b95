//! Lane Racer Library
//!
//! A three-lane arcade racing game whose simulation can run headless or with a Bevy UI.

pub mod simulation;

#[cfg(feature = "ui")]
pub mod ui;
