pub mod depth;
pub mod error;
pub mod feed;
pub mod record;

#[cfg(feature = "api")]
pub mod client;
