use futures_util::stream::BoxStream;

use crate::{Field, Snapshot};

#[derive(Clone, Debug, PartialEq)]
pub enum Notification {
    Snapshot(Snapshot),
    /// The subscription failed or was cancelled by the backend.
    Cancelled(String),
}

/// Narrow view of the remote smartroom node.
#[cfg_attr(test, mockall::automock)]
pub trait RemoteNode {
    fn subscribe(&self) -> BoxStream<'static, Notification>;

    /// Fire-and-forget: no confirmation is awaited and failures are not
    /// reported back.
    fn write(&self, field: Field, value: bool);
}
