//! Card primitives for training scenarios.
//!
//! Parsing from the wire notation used by scenario decks (`"As"`, `"AKs"`)
//! and the street/board consistency rules.
//!
//! ## Core Types
//!
//! - [`Card`] — Single card, rank then suit
//! - [`Street`] — Betting round; a scenario's stage
//! - [`Board`] — Community cards (0, 3, 4, or 5)
//! - [`Hole`] — Learner's private cards or abstracted hand class
mod board;
mod card;
mod hole;
mod rank;
mod street;
mod suit;

pub use board::*;
pub use card::*;
pub use hole::*;
pub use rank::*;
pub use street::*;
pub use suit::*;
