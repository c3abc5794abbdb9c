//! Library management REST client
//!
//! A typed client for the library service: books, users, lendings and
//! statistics. [`ApiClient`] is constructed explicitly and takes any
//! [`Transport`], so callers choose between the real HTTP transport and
//! a substitute.

pub mod client;
pub mod config;
pub mod error;
pub mod filters;
pub mod models;
pub mod transport;

pub use client::{books::BookSearch, ApiClient};
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use transport::{ApiRequest, ApiResponse, HttpTransport, Transport};
