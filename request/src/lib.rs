//! A small HTTP client that defaults requests to JSON.
//!
//! ```no_run
//! # async fn run() -> request::Result<()> {
//! use request::{Headers, RequestClient};
//!
//! let client = RequestClient::new()?;
//! let response = client.get("https://example.com/api", &Headers::new()).await?;
//! println!("{}", response.status());
//! # Ok(())
//! # }
//! ```
mod config;
mod error;

pub mod http;

pub use bytes::Bytes;
pub use config::*;
pub use error::*;
pub use http::{Headers, RequestClient, DEFAULT_CONTENT_TYPE};
pub use reqwest::{Method, Response, StatusCode};
