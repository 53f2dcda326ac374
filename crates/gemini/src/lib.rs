//! Client for the Google generative-language REST API.
//!
//! Provides the [`GenerativeModel`] seam used by the API handlers, a
//! [`GeminiClient`] implementation over [`reqwest`], and structured
//! classification of upstream failures.

pub mod client;
pub mod config;
pub mod error;
pub mod messages;

pub use client::{GeminiClient, GenerativeModel};
pub use config::GeminiConfig;
pub use error::{GeminiError, UpstreamErrorKind};
