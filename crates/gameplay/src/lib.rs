//! Seats, learner actions, and betting history.
//!
//! ## Actions
//!
//! - [`Action`] — Canonical learner decision: call, fold, or a pot-fraction raise
//! - [`Fraction`] — Supported raise sizes (1/3, 1/2, 2/3, pot)
//! - [`normalize`] — Raw selection to [`Action`], failing with [`NormalizeError`]
//! - [`Key`] — Reference-solution key, canonical or foreign
//!
//! ## History
//!
//! - [`Seat`] — The six fixed seats, UTG through BB
//! - [`Play`] — One prior move, `"UTG raise 3"`
//! - [`History`] — Prior moves grouped by street
mod action;
mod fraction;
mod history;
mod key;
mod normalize;
mod play;
mod seat;

pub use action::*;
pub use fraction::*;
pub use history::*;
pub use key::*;
pub use normalize::*;
pub use play::*;
pub use seat::*;
