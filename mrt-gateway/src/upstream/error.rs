//! Upstream fetch error types.

/// Errors that can occur when fetching the upstream document.
#[derive(Debug, thiserror::Error)]
pub enum UpstreamError {
    /// Transport failure: DNS, refused connection, timeout, truncated body
    #[error("HTTP error: {0}")]
    Network(#[from] reqwest::Error),

    /// Upstream answered with something other than 200 OK
    #[error("unexpected status code: {status}")]
    Status { status: reqwest::StatusCode },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_display() {
        let err = UpstreamError::Status {
            status: reqwest::StatusCode::SERVICE_UNAVAILABLE,
        };
        assert_eq!(err.to_string(), "unexpected status code: 503 Service Unavailable");
    }
}
