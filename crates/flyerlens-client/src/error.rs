use thiserror::Error;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Shown when the backend rejects a request without a readable `detail`.
pub const SERVER_FALLBACK_MESSAGE: &str = "AI extraction failed";

/// Shown when the backend answers OK but reports `success: false`.
pub const UNSUCCESSFUL_MESSAGE: &str = "AI extraction returned unsuccessful response";

/// Shown when the request or response decoding failed below the API contract.
pub const TRANSPORT_FALLBACK_MESSAGE: &str =
    "AI extraction unavailable. Please enter event details manually.";

/// Which of the failure classes an [`AnalyzeError`] belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnalyzeErrorKind {
    ServerFailure,
    UnsuccessfulExtraction,
    TransportFailure,
}

/// Failure of a flyer analysis. `Display` is the user-facing message.
#[derive(Error, Debug)]
pub enum AnalyzeError {
    /// Non-OK status; `message` is the server's `detail` or the fallback.
    #[error("{message}")]
    ServerFailure { status: u16, message: String },

    #[error("AI extraction returned unsuccessful response")]
    UnsuccessfulExtraction,

    /// The underlying error is kept for logs, never shown.
    #[error("{message}")]
    TransportFailure {
        message: String,
        #[source]
        source: Option<BoxError>,
    },
}

impl AnalyzeError {
    pub fn kind(&self) -> AnalyzeErrorKind {
        match self {
            AnalyzeError::ServerFailure { .. } => AnalyzeErrorKind::ServerFailure,
            AnalyzeError::UnsuccessfulExtraction => AnalyzeErrorKind::UnsuccessfulExtraction,
            AnalyzeError::TransportFailure { .. } => AnalyzeErrorKind::TransportFailure,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            AnalyzeError::ServerFailure { message, .. } => message.as_str(),
            AnalyzeError::UnsuccessfulExtraction => UNSUCCESSFUL_MESSAGE,
            AnalyzeError::TransportFailure { message, .. } => message.as_str(),
        }
    }

    /// HTTP status for server failures.
    pub fn status(&self) -> Option<u16> {
        match self {
            AnalyzeError::ServerFailure { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub(crate) fn server(status: u16, detail: Option<String>) -> Self {
        AnalyzeError::ServerFailure {
            status,
            message: detail.unwrap_or_else(|| SERVER_FALLBACK_MESSAGE.to_string()),
        }
    }

    pub(crate) fn transport(source: Option<BoxError>) -> Self {
        AnalyzeError::TransportFailure {
            message: TRANSPORT_FALLBACK_MESSAGE.to_string(),
            source,
        }
    }
}

impl From<reqwest::Error> for AnalyzeError {
    fn from(err: reqwest::Error) -> Self {
        AnalyzeError::transport(Some(err.into()))
    }
}

#[derive(Error, Debug)]
#[error("failed to build HTTP client: {0}")]
pub struct ClientBuildError(#[from] reqwest::Error);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_failure_uses_detail_verbatim() {
        let err = AnalyzeError::server(400, Some("Invalid file type".into()));
        assert_eq!(err.kind(), AnalyzeErrorKind::ServerFailure);
        assert_eq!(err.message(), "Invalid file type");
        assert_eq!(err.to_string(), "Invalid file type");
        assert_eq!(err.status(), Some(400));
    }

    #[test]
    fn server_failure_without_detail_falls_back() {
        let err = AnalyzeError::server(500, None);
        assert_eq!(err.to_string(), "AI extraction failed");
    }

    #[test]
    fn unsuccessful_has_fixed_message() {
        let err = AnalyzeError::UnsuccessfulExtraction;
        assert_eq!(err.kind(), AnalyzeErrorKind::UnsuccessfulExtraction);
        assert_eq!(err.to_string(), "AI extraction returned unsuccessful response");
        assert_eq!(err.message(), err.to_string());
        assert_eq!(err.status(), None);
    }

    #[test]
    fn transport_failure_hides_source_from_message() {
        let err = AnalyzeError::transport(None);
        assert_eq!(err.kind(), AnalyzeErrorKind::TransportFailure);
        assert_eq!(
            err.to_string(),
            "AI extraction unavailable. Please enter event details manually."
        );
        assert!(std::error::Error::source(&err).is_none());
    }
}
