//! Training scenarios and the store that serves them.
//!
//! A [`Scenario`] is validated once, when a deck is loaded, and never changes
//! afterwards. The [`Store`] buckets scenarios into per-[`Mode`] pools and
//! picks the next one to serve according to its [`Policy`].
mod deck;
mod mode;
mod policy;
mod scenario;
mod store;

pub use mode::*;
pub use policy::*;
pub use scenario::*;
pub use store::*;
