//! Fantasy Premier League data acquisition.

pub mod http;
pub mod source;
pub mod types;

pub use http::{FplClient, BOOTSTRAP_URL};
pub use source::PlayerSource;
pub use types::PlayerRecord;
