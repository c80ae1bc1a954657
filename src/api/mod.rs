/// Remote classification API module
///
/// This module handles:
/// - Building the multipart upload request (client.rs)
/// - Interpreting the response `description` field (verdict.rs)
/// - The error taxonomy surfaced to the user (error.rs)

pub mod client;
pub mod error;
pub mod verdict;

pub use client::{classify_image, Analysis};
pub use verdict::Verdict;
