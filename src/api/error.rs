use thiserror::Error;

/// Failures of a single classification request.
///
/// The `Display` output of each variant is exactly the line shown to the
/// user, so callers can surface an error with plain `to_string()`:
/// - non-2xx response: "Server Error: 500"
/// - transport / body decode failure: "Error: <message>"
/// - unreadable file: "Error: <message>"
#[derive(Error, Debug)]
pub enum ClassifyError {
    /// The endpoint answered with a non-success HTTP status
    #[error("Server Error: {0}")]
    ServerStatus(u16),

    /// Network failure, or the response body was not valid JSON
    #[error("Error: {0}")]
    Request(#[from] reqwest::Error),

    /// The selected file could not be read
    #[error("Error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_status_display() {
        let err = ClassifyError::ServerStatus(500);
        assert_eq!(err.to_string(), "Server Error: 500");
    }

    #[test]
    fn test_io_error_display_is_prefixed() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let err = ClassifyError::from(io);
        assert_eq!(err.to_string(), "Error: no such file");
    }
}
