//! Core components of the `headlines-rs` client.
//!
//! This module contains the foundational building blocks of the library, including:
//! - The main [`NewsClient`] and its builder.
//! - The primary [`NewsError`] type.
//! - The [`HeadlinesService`] seam the repository fetches through.
//! - Internal networking helpers.

/// The main client (`NewsClient`), builder, and configuration.
pub mod client;
/// The primary error type (`NewsError`) for the crate.
pub mod error;
/// Service traits for abstracting how headline pages are fetched.
pub mod services;

#[cfg(feature = "test-mode")]
pub(crate) mod fixtures;

pub(crate) mod net;

// convenient re-exports so most code can just `use crate::core::NewsClient`
pub use client::{NewsClient, NewsClientBuilder};
pub use error::NewsError;
pub use services::HeadlinesService;
