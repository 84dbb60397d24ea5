//! Typed client for the MetService public weather data API.
//!
//! This crate defines:
//! - Lenient codecs for the API's mixed native/string-encoded scalars and
//!   its offset-qualified timestamps
//! - Typed records for each feed (forecast, observations, pollen, rise/set)
//! - A thin HTTP client that fetches and decodes those feeds
//! - On-disk configuration for the client
//!
//! It is used by `metservice-cli`, but can also be reused by other binaries or services.
//!
//! ```no_run
//! use metservice_core::{Client, MetServiceApi};
//!
//! # async fn run() -> metservice_core::Result<()> {
//! let forecast = Client::new().forecast("Dunedin").await?;
//! for day in &forecast.days {
//!     println!("{:?}: {:?} max {:?}", day.date, day.forecast_word, day.max);
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod codec;
pub mod config;
pub mod error;
pub mod model;
pub mod resource;
pub mod timestamp;

pub use client::{BASE_URL, Client, ClientBuilder, MetServiceApi, decode};
pub use config::Config;
pub use error::{Error, Result};
pub use model::*;
pub use resource::{Entity, Resource};
pub use timestamp::{Timestamp, TimestampError};
