use firebase::{ListenEvent, Reference};
use futures_util::stream::{BoxStream, StreamExt};
use log::{debug, error, warn};

use crate::{Field, Notification, RemoteNode, Snapshot};

impl RemoteNode for Reference {
    fn subscribe(&self) -> BoxStream<'static, Notification> {
        self.listen().map(notification).boxed()
    }

    fn write(&self, field: Field, value: bool) {
        let child = self.child(&field.to_string());

        tokio::spawn(async move {
            match child.set(&value).await {
                Ok(()) => debug!("wrote {} = {value}", child.path()),
                Err(err) => error!("unable to write {} = {value}: {err}", child.path()),
            }
        });
    }
}

fn notification(event: ListenEvent) -> Notification {
    match event {
        ListenEvent::Value(value) => Notification::Snapshot(Snapshot::new(value)),
        ListenEvent::Cancelled(reason) => {
            warn!("subscription cancelled: {reason}");
            Notification::Cancelled(reason)
        }
        ListenEvent::Interrupted(reason) => Notification::Cancelled(reason),
    }
}
