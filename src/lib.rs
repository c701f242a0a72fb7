//! Client for TWDB nanopublication stores.
//!
//! [`TwdbClient`] fetches, uploads and deletes [`Nanopublication`]s over HTTP,
//! exchanging them as TriG by default.

mod client;
mod config;
mod error;
mod http;
mod nanopub;

pub use crate::client::{TwdbClient, nanopublication_url};
pub use crate::config::{ClientConfig, DEFAULT_SERVER_BASE_URL};
pub use crate::error::{Error, Result};
pub use crate::nanopub::{Nanopublication, RdfFormat};
