use thiserror::Error;

#[derive(Error, Debug)]
pub enum CheckError {
    #[error("HTTP error: {}", status_line(.status, .reason))]
    HttpStatusError { status: u16, reason: String },

    #[error("URL error: {reason}")]
    NetworkError { reason: String },

    #[error("Fetch error: {message}")]
    FetchError { message: String },

    #[error("Invalid keyword pattern: {0}")]
    PatternError(#[from] regex::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Invalid value for '{field}' ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Transport,
    Protocol,
    Fetch,
    Configuration,
    Output,
}

impl CheckError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            CheckError::HttpStatusError { .. } => ErrorCategory::Protocol,
            CheckError::NetworkError { .. } => ErrorCategory::Transport,
            CheckError::FetchError { .. } => ErrorCategory::Fetch,
            CheckError::PatternError(_) | CheckError::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
            CheckError::IoError(_) | CheckError::SerializationError(_) => ErrorCategory::Output,
        }
    }

    /// Process exit code for a run that ended with this error.
    ///
    /// Every fetch-level failure maps to 3. Rejected configuration uses 2,
    /// which is what clap already returns for malformed arguments.
    pub fn exit_code(&self) -> u8 {
        match self.category() {
            ErrorCategory::Transport | ErrorCategory::Protocol | ErrorCategory::Fetch => 3,
            ErrorCategory::Configuration => 2,
            ErrorCategory::Output => 1,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Transport => "Check network connectivity and that the host resolves",
            ErrorCategory::Protocol => "Check that --url points at an existing search page",
            ErrorCategory::Fetch => "Retry later; the response could not be read",
            ErrorCategory::Configuration => "Fix the command line arguments and run again",
            ErrorCategory::Output => "Check that stdout is writable",
        }
    }
}

impl From<reqwest::Error> for CheckError {
    fn from(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            return CheckError::HttpStatusError {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or_default().to_string(),
            };
        }

        if err.is_connect() || err.is_timeout() || err.is_request() || err.is_redirect() {
            return CheckError::NetworkError {
                reason: root_cause(&err),
            };
        }

        CheckError::FetchError {
            message: err.to_string(),
        }
    }
}

// reqwest wraps the interesting part (DNS failure, refused connection, ...)
// several layers down the source chain.
fn root_cause(err: &(dyn std::error::Error + 'static)) -> String {
    let mut current = err;
    while let Some(source) = current.source() {
        current = source;
    }
    current.to_string()
}

// Non-standard codes have no reason phrase.
fn status_line(status: &u16, reason: &str) -> String {
    let reason = reason.trim();
    if reason.is_empty() {
        status.to_string()
    } else {
        format!("{} {}", status, reason)
    }
}

pub type Result<T> = std::result::Result<T, CheckError>;
