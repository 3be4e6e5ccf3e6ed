//! Grading of learner actions against precomputed GTO reference mixes.
//!
//! A reference solution is authored either as percentages or as tier labels.
//! It is converted once into a [`Solution`], in which every action carries a
//! [`Tier`]. Grading a canonical action against that solution yields a
//! [`Verdict`] and the [`Breakdown`] of the mix by tier; [`explain`] turns the
//! result into text.
//!
//! ## Tiers and Verdicts
//!
//! | frequency  | tier       | verdict               |
//! |------------|------------|-----------------------|
//! | ≥ 50%      | 1 (high)   | 2 (correct)           |
//! | 30% to 50% | 2 (medium) | 1 (partially correct) |
//! | < 30%      | 3 (low)    | 0 (incorrect)         |
//! | absent     | none       | 0 (incorrect)         |
mod breakdown;
mod explain;
mod grade;
mod solution;
mod spot;
mod tier;
mod verdict;
mod weights;

pub use breakdown::*;
pub use explain::*;
pub use grade::*;
pub use solution::*;
pub use spot::*;
pub use tier::*;
pub use verdict::*;
pub use weights::*;
