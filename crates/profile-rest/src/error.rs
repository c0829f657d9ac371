//! Error types for profile-rest.

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
#[error("{kind}")]
pub struct Error {
    pub kind: ErrorKind,
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl Error {
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind, source: None }
    }

    /// Returns the HTTP status code this error carries, if any.
    pub fn status(&self) -> Option<u16> {
        match &self.kind {
            ErrorKind::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns true if this is a user-recoverable validation failure (HTTP 400).
    ///
    /// Validation failures are surfaced to the user but never escalated to
    /// telemetry.
    pub fn is_validation_error(&self) -> bool {
        self.status() == Some(400)
    }

    /// Returns the server-provided message for API errors.
    pub fn server_message(&self) -> Option<&str> {
        match &self.kind {
            ErrorKind::Api { message, .. } => Some(message),
            _ => None,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ErrorKind {
    /// API error response with a status code and server message.
    #[error("API error: {status} {message}")]
    Api { status: u16, message: String },
    /// Transport or infrastructure error from the HTTP client.
    #[error("Client error: {0}")]
    Client(String),
    #[error("{0}")]
    Other(String),
}

impl From<gantry_profile_client::Error> for Error {
    fn from(err: gantry_profile_client::Error) -> Self {
        let kind = match (&err.kind, err.status()) {
            (gantry_profile_client::ErrorKind::Api { status, message }, _) => ErrorKind::Api {
                status: *status,
                message: message.clone(),
            },
            (_, Some(status)) => ErrorKind::Api {
                status,
                message: err.server_message().unwrap_or_default().to_string(),
            },
            _ => ErrorKind::Client(err.to_string()),
        };
        Error {
            kind,
            source: Some(Box::new(err)),
        }
    }
}
