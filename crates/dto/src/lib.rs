//! Data transfer objects for API communication.
//!
//! Request and response types for the judging API and the deck file format,
//! serializable via `serde`. These types bridge the gap between the Rust
//! domain model and JSON payloads; conversions live with the domain types.
mod record;
mod request;
mod response;

pub use record::*;
pub use request::*;
pub use response::*;
