use std::io;
use std::pin::{pin, Pin};
use std::task::{Context, Poll};
use std::time::Duration;

use futures_util::{Stream, StreamExt};
use log::{debug, error, info, trace, warn};
use reqwest::StatusCode;
use serde_json::Value;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time;
use tokio_stream::wrappers::ReceiverStream;
use tokio_util::codec::FramedRead;
use tokio_util::io::StreamReader;

use crate::{Error, EventStreamDecoder, Reference, Result, StreamEvent, Tree};

const MIN_RECONNECT_DELAY: Duration = Duration::from_secs(1);
const MAX_RECONNECT_DELAY: Duration = Duration::from_secs(30);
/// The server sends `keep-alive` about every 30 seconds.
const IDLE_TIMEOUT: Duration = Duration::from_secs(60);

#[derive(Clone, Debug, PartialEq)]
pub enum ListenEvent {
    /// The whole value of the listened node after a change.
    Value(Value),
    /// The server closed the listener, e.g. rules no longer allow reading
    /// the node or the credential expired. Nothing follows this event.
    Cancelled(String),
    /// The connection dropped. The listener reconnects on its own.
    Interrupted(String),
}

/// Stream of [`ListenEvent`]s of one node. Dropping it stops listening.
pub struct Listener {
    events: ReceiverStream<ListenEvent>,
    task: JoinHandle<()>,
}

impl Listener {
    pub(crate) fn spawn(reference: Reference) -> Listener {
        let (tx, rx) = mpsc::channel(16);
        let task = tokio::spawn(run(reference, tx));

        Listener {
            events: ReceiverStream::new(rx),
            task,
        }
    }
}

impl Stream for Listener {
    type Item = ListenEvent;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        Pin::new(&mut self.events).poll_next(cx)
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        self.task.abort();
    }
}

async fn run(reference: Reference, tx: mpsc::Sender<ListenEvent>) {
    let mut backoff = Backoff::default();

    loop {
        match listen_once(&reference, &tx, &mut backoff, IDLE_TIMEOUT).await {
            Ok(()) => return,
            Err(err) => {
                error!("lost stream of {}: {err}", reference.path());

                if tx.send(ListenEvent::Interrupted(err.to_string())).await.is_err() {
                    return;
                }
            }
        }

        let delay = backoff.next_delay();
        info!("reconnecting to {} in {}s", reference.path(), delay.as_secs());
        time::sleep(delay).await;
    }
}

/// Returns `Ok` once listening is over for good: the server cancelled it,
/// refused it, or nobody reads the events anymore.
async fn listen_once(
    reference: &Reference,
    tx: &mpsc::Sender<ListenEvent>,
    backoff: &mut Backoff,
    idle_timeout: Duration,
) -> Result<()> {
    let response = match reference.open_stream().await {
        Err(Error::Status(status)) if is_denied(status) => {
            warn!("{} refused listening: {status}", reference.path());

            let reason = format!("permission denied: {status}");
            tx.send(ListenEvent::Cancelled(reason)).await.ok();

            return Ok(());
        }
        response => response?,
    };
    info!("listening {}", reference.path());

    let body = response
        .bytes_stream()
        .map(|chunk| chunk.map_err(|err| io::Error::new(io::ErrorKind::Other, err)));

    let mut events = pin!(FramedRead::new(
        StreamReader::new(body),
        EventStreamDecoder::default()
    ));

    let mut session = Session::default();

    loop {
        let event = match time::timeout(idle_timeout, events.next()).await {
            Ok(Some(event)) => event?,
            Ok(None) => return Err(Error::StreamClosed),
            Err(_) => return Err(Error::Idle(idle_timeout)),
        };
        backoff.reset();

        let event = StreamEvent::try_from(event)?;
        trace!("{} got {:?}", reference.path(), event);

        let Some(update) = session.handle(event) else {
            continue;
        };

        let is_final = matches!(update, ListenEvent::Cancelled(_));

        if tx.send(update).await.is_err() || is_final {
            return Ok(());
        }
    }
}

fn is_denied(status: StatusCode) -> bool {
    status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN
}

/// Delay before the next reconnection attempt. Doubles per failed attempt
/// and starts over once the server delivers an event.
#[derive(Debug)]
struct Backoff {
    delay: Duration,
}

impl Default for Backoff {
    fn default() -> Self {
        Backoff {
            delay: MIN_RECONNECT_DELAY,
        }
    }
}

impl Backoff {
    fn next_delay(&mut self) -> Duration {
        let delay = self.delay;
        self.delay = (delay * 2).min(MAX_RECONNECT_DELAY);
        delay
    }

    fn reset(&mut self) {
        self.delay = MIN_RECONNECT_DELAY;
    }
}

/// State of one connection. The server starts every connection with a
/// `put` of the whole node, so a fresh tree per connection is enough.
#[derive(Default)]
struct Session {
    tree: Tree,
}

impl Session {
    fn handle(&mut self, event: StreamEvent) -> Option<ListenEvent> {
        match event {
            StreamEvent::Put { path, data } => {
                self.tree.put(&path, data);
                Some(ListenEvent::Value(self.tree.value().clone()))
            }
            StreamEvent::Patch { path, data } => {
                self.tree.patch(&path, data);
                Some(ListenEvent::Value(self.tree.value().clone()))
            }
            StreamEvent::KeepAlive => None,
            StreamEvent::Cancel(reason) => Some(ListenEvent::Cancelled(reason)),
            StreamEvent::AuthRevoked(reason) => {
                Some(ListenEvent::Cancelled(format!("auth revoked: {reason}")))
            }
            StreamEvent::Unknown(name) => {
                debug!("ignored event {name}");
                None
            }
        }
    }
}
