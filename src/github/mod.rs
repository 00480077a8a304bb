pub mod client;
pub mod error;
pub mod responses;

pub use client::GhClient;
pub use error::Error;
