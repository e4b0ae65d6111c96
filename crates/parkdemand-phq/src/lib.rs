//! PredictHQ API client for the suggested-radius lookup, with a memoizing cache.

pub mod cache;
pub mod client;
pub mod error;
pub mod types;

pub use cache::RadiusCache;
pub use client::PhqClient;
pub use error::PhqError;
