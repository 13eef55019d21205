//! # cmc-models
//!
//! Data models for CoinMarketCap Pro API responses.
//!
//! The client hands back the upstream JSON untouched. These types are an
//! optional, typed view over that JSON for callers who want one:
//!
//! ```ignore
//! use cmc_models::{Envelope, Listing};
//!
//! let value = client.get_tickers(TickersOptions::new().limit(3)).await?;
//! let listings: Envelope<Vec<Listing>> = Envelope::from_value(value)?;
//! if listings.status.is_error() {
//!     eprintln!("{:?}", listings.status.error_message);
//! }
//! ```

#![warn(clippy::all)]

pub mod common;
pub mod crypto;
pub mod global;

// Re-export common types for convenience
pub use common::*;

// Re-export all model types
pub use crypto::*;
pub use global::*;
