use thiserror::Error;

use crate::timestamp;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum Error {
    /// Building or sending the request failed, or the body could not be read.
    #[error("request to MetService failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The caller's deadline passed before the response was decoded.
    #[error("request to MetService did not finish before the deadline")]
    DeadlineExceeded,

    /// MetService answered with something other than 200. The body is not read.
    #[error("bad response status code: {code}")]
    UpstreamStatus { code: u16 },

    #[error("malformed timestamp at `{field}`: {message}")]
    MalformedTimestamp { field: String, message: String },

    #[error("unexpected value at `{field}`: {message}")]
    SchemaMismatch { field: String, message: String },
}

impl Error {
    pub fn is_transport(&self) -> bool {
        matches!(self, Error::Transport(_) | Error::DeadlineExceeded)
    }

    pub fn status_code(&self) -> Option<u16> {
        match self {
            Error::UpstreamStatus { code } => Some(*code),
            _ => None,
        }
    }

    /// Field path of a decode failure, e.g. `days[0].max`.
    pub fn field(&self) -> Option<&str> {
        match self {
            Error::MalformedTimestamp { field, .. } | Error::SchemaMismatch { field, .. } => {
                Some(field)
            }
            _ => None,
        }
    }

    /// Timestamp failures are told apart by the `MALFORMED` prefix that every
    /// `TimestampError` message starts with.
    pub(crate) fn from_decode(err: serde_path_to_error::Error<serde_json::Error>) -> Self {
        let field = err.path().to_string();
        let message = err.into_inner().to_string();

        if message.starts_with(timestamp::MALFORMED) {
            Error::MalformedTimestamp { field, message }
        } else {
            Error::SchemaMismatch { field, message }
        }
    }
}
