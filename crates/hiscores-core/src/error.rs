use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Hiscores unavailable: {0}")]
    ServiceUnavailable(String),

    #[error("Received status code {status} with reason '{reason}' for request '{url}'")]
    InvalidResponse {
        status: u16,
        reason: String,
        url: String,
    },

    #[error("Schema '{schema}' is invalid for line '{line}': must be same length")]
    SchemaMismatch { schema: String, line: String },

    #[error("Field '{field}' is not an integer in line '{line}'")]
    InvalidInteger { field: String, line: String },

    #[error("Expected skill line of API result is malformed: {0}")]
    MalformedSkillData(Box<Error>),

    #[error("Expected activity line of API result is malformed: {0}")]
    MalformedActivityData(Box<Error>),

    #[error("Received invalid query in API result: '{0}'")]
    InvalidRequestEcho(String),

    #[error("Request timed out: {0}")]
    Timeout(String),

    #[error("{0}")]
    Http(String),

    #[error("Config parse error: {0}")]
    ConfigParseError(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Whether a caller may reasonably retry the request that produced this error.
    ///
    /// Only outages (timeouts, the maintenance page) qualify. Status and
    /// schema failures will not fix themselves on a second attempt.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Error::ServiceUnavailable(_) | Error::Timeout(_))
    }

    /// True for any failure raised while parsing the response body.
    pub fn is_parse_error(&self) -> bool {
        matches!(
            self,
            Error::SchemaMismatch { .. }
                | Error::InvalidInteger { .. }
                | Error::MalformedSkillData(_)
                | Error::MalformedActivityData(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            return Error::Timeout(e.to_string());
        }
        let message = if e.is_connect() {
            format!("Connection failed: {}", e)
        } else if e.is_request() {
            format!("Request error: {}", e)
        } else if let Some(status) = e.status() {
            format!("HTTP {} error: {}", status.as_u16(), e)
        } else {
            format!("HTTP error: {}", e)
        };
        Error::Http(message)
    }
}
