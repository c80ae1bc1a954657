/// State management module
///
/// This module handles all application state, including:
/// - The upload/result session state machine (session.rs)
/// - Request tokens guarding against overlapping uploads

pub mod session;

pub use session::{Phase, RequestToken, Session};
