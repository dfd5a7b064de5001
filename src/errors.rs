use std::fmt;

#[derive(Debug)]
pub enum AppError {
    /// Transport-level failure (connection refused, timeout, bad body).
    Http(reqwest::Error),
    /// Non-2xx backend response with whatever detail the backend supplied.
    Api { status: u16, detail: String },
    /// Client-side validation rejected the form before any network call.
    Validation(String),
    /// 401 from the backend; the stored credential has been cleared.
    Unauthorized,
    Session(String),
    Config(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Http(e) => write!(f, "Request error: {e}"),
            AppError::Api { status, detail } => write!(f, "Backend error ({status}): {detail}"),
            AppError::Validation(msg) => write!(f, "{msg}"),
            AppError::Unauthorized => write!(f, "Session expired, please log in again"),
            AppError::Session(msg) => write!(f, "Session error: {msg}"),
            AppError::Config(msg) => write!(f, "Configuration error: {msg}"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<reqwest::Error> for AppError {
    fn from(e: reqwest::Error) -> Self {
        AppError::Http(e)
    }
}

impl AppError {
    /// Message suitable for showing inline in a dialog. Backend detail is
    /// surfaced verbatim; transport failures get a generic fallback.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Api { detail, .. } => detail.clone(),
            AppError::Validation(msg) => msg.clone(),
            _ => "Something went wrong, please try again".to_string(),
        }
    }
}
