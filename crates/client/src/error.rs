/// Errors from the backlog HTTP client.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The HTTP request itself failed (network, DNS, decoding).
    #[error("Network error: {0}")]
    Request(#[from] reqwest::Error),

    /// The server answered with a non-2xx status.
    #[error("{message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// The server's `error` message, or the raw body if it had none.
        message: String,
    },
}

impl ClientError {
    /// HTTP status for API errors, `None` for transport failures.
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Api { status, .. } => Some(*status),
            ClientError::Request(_) => None,
        }
    }

    /// Text for a danger notice: `Error: <server message>` for API errors,
    /// the transport error as-is otherwise.
    pub fn notice_message(&self) -> String {
        match self {
            ClientError::Api { message, .. } => format!("Error: {message}"),
            ClientError::Request(_) => self.to_string(),
        }
    }
}
