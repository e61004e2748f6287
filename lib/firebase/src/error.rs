use std::fmt;
use std::time::Duration;

#[derive(Debug)]
pub enum Error {
    StreamClosed,
    Idle(Duration),
    InvalidBaseUrl(String),
    Status(reqwest::StatusCode),
    MalformedEvent(&'static str, serde_json::Error),
    Http(reqwest::Error),
    Url(url::ParseError),
    Json(serde_json::Error),
    Io(std::io::Error),
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Self::Http(err)
    }
}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Self {
        Self::Url(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StreamClosed => write!(f, "stream closed"),
            Self::Idle(timeout) => write!(f, "no event for {}s", timeout.as_secs_f32()),
            Self::InvalidBaseUrl(url) => write!(f, "{url} cannot be a database url"),
            Self::Status(status) => write!(f, "unexpected status {status}"),
            Self::MalformedEvent(event, err) => write!(f, "malformed `{event}` event: {err}"),
            Self::Http(err) => write!(f, "http error: {err}"),
            Self::Url(err) => write!(f, "url error: {err}"),
            Self::Json(err) => write!(f, "json error: {err}"),
            Self::Io(err) => write!(f, "io error: {err}"),
        }
    }
}

impl std::error::Error for Error {}
