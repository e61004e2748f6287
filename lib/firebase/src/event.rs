use bytes::{Buf, BytesMut};
use log::trace;
use serde::Deserialize;
use serde_json::Value;
use tokio_util::codec::Decoder;

use crate::{Error, Path};

/// One dispatched server-sent event.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ServerEvent {
    pub event: String,
    pub data: String,
}

/// Splits a `text/event-stream` body into [`ServerEvent`]s.
#[derive(Debug, Default)]
pub struct EventStreamDecoder {
    pending: ServerEvent,
    has_data: bool,
}

impl EventStreamDecoder {
    fn take_line(src: &mut BytesMut) -> Option<String> {
        let end = src.iter().position(|&b| b == b'\n')?;

        let line = src.split_to(end);
        src.advance(1);

        let line = line.strip_suffix(b"\r").unwrap_or(&line[..]);
        Some(String::from_utf8_lossy(line).into_owned())
    }

    fn dispatch(&mut self) -> Option<ServerEvent> {
        if self.pending.event.is_empty() && !self.has_data {
            return None;
        }

        self.has_data = false;
        Some(std::mem::take(&mut self.pending))
    }

    fn handle_field(&mut self, line: &str) {
        if line.starts_with(':') {
            return;
        }

        let (field, value) = match line.split_once(':') {
            Some((field, value)) => (field, value.strip_prefix(' ').unwrap_or(value)),
            None => (line, ""),
        };

        match field {
            "event" => self.pending.event = value.to_string(),
            "data" => {
                if self.has_data {
                    self.pending.data.push('\n');
                }

                self.pending.data.push_str(value);
                self.has_data = true;
            }
            _ => trace!("ignored field {field}"),
        }
    }
}

impl Decoder for EventStreamDecoder {
    type Item = ServerEvent;
    type Error = Error;

    fn decode(&mut self, src: &mut BytesMut) -> Result<Option<Self::Item>, Self::Error> {
        while let Some(line) = Self::take_line(src) {
            if line.is_empty() {
                if let Some(event) = self.dispatch() {
                    return Ok(Some(event));
                }
            } else {
                self.handle_field(&line);
            }
        }

        Ok(None)
    }

    fn decode_eof(&mut self, src: &mut BytesMut) -> Result<Option<Self::Item>, Self::Error> {
        let event = self.decode(src)?;

        if event.is_none() {
            // an event without its terminating blank line is never dispatched
            src.clear();
        }

        Ok(event)
    }
}

/// The events a database stream emits.
#[derive(Clone, Debug, PartialEq)]
pub enum StreamEvent {
    Put { path: Path, data: Value },
    Patch { path: Path, data: Value },
    KeepAlive,
    Cancel(String),
    AuthRevoked(String),
    Unknown(String),
}

#[derive(Deserialize)]
struct Payload {
    path: String,
    data: Value,
}

impl TryFrom<ServerEvent> for StreamEvent {
    type Error = Error;

    fn try_from(event: ServerEvent) -> Result<Self, Self::Error> {
        match event.event.as_str() {
            "put" => {
                let Payload { path, data } = serde_json::from_str(&event.data)
                    .map_err(|err| Error::MalformedEvent("put", err))?;

                Ok(StreamEvent::Put {
                    path: Path::from(path.as_str()),
                    data,
                })
            }
            "patch" => {
                let Payload { path, data } = serde_json::from_str(&event.data)
                    .map_err(|err| Error::MalformedEvent("patch", err))?;

                Ok(StreamEvent::Patch {
                    path: Path::from(path.as_str()),
                    data,
                })
            }
            "keep-alive" => Ok(StreamEvent::KeepAlive),
            "cancel" => Ok(StreamEvent::Cancel(reason(&event.data))),
            "auth_revoked" => Ok(StreamEvent::AuthRevoked(reason(&event.data))),
            _ => Ok(StreamEvent::Unknown(event.event)),
        }
    }
}

fn reason(data: &str) -> String {
    match serde_json::from_str::<Value>(data) {
        Ok(Value::String(reason)) => reason,
        Ok(Value::Null) => String::new(),
        _ => data.to_string(),
    }
}
