use std::future::Future;
use std::io::Write;

use futures_util::StreamExt;
use log::{error, info};
use smartroom::{Reconciler, RemoteNode};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::{DispatchLine, ErasedError, Input, Screen, HELP};

/// Drives the screen until `quit`, the end of `input` or `shutdown`.
/// Pending notifications are applied before the next input line.
pub async fn run<N, R, W, S>(
    mut reconciler: Reconciler<N>,
    input: R,
    mut output: W,
    shutdown: S,
) -> Result<(), ErasedError>
where
    N: RemoteNode,
    R: AsyncBufRead + Unpin,
    W: Write,
    S: Future<Output = ()>,
{
    let mut notifications = reconciler.subscribe();
    let mut lines = input.lines();

    tokio::pin!(shutdown);

    writeln!(output, "{}\n", Screen(&reconciler.view()))?;
    writeln!(output, "{HELP}")?;

    loop {
        tokio::select! {
            biased;

            _ = &mut shutdown => break,
            Some(notification) = notifications.next() => {
                reconciler.reconcile(notification);
                writeln!(output, "\n{}", Screen(&reconciler.view()))?;
            }
            line = lines.next_line() => {
                let Some(line) = line? else {
                    info!("input closed");
                    break;
                };

                match line.parse::<Input>() {
                    Ok(Input::Command(command)) => {
                        writeln!(output, "{}", DispatchLine(reconciler.dispatch(command)))?;
                    }
                    Ok(Input::Quit) => break,
                    Ok(Input::Empty) => (),
                    Err(err) => {
                        error!("{err}");
                        writeln!(output, "{HELP}")?;
                    }
                }
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use smartroom::{Field, Notification, Snapshot};

    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    use futures_util::stream::{self, BoxStream};
    use serde_json::json;

    #[derive(Clone, Default)]
    struct FakeNode {
        notifications: Vec<Notification>,
        writes: Arc<Mutex<Vec<(Field, bool)>>>,
    }

    impl FakeNode {
        fn with_snapshot(value: serde_json::Value) -> Self {
            FakeNode {
                notifications: vec![Notification::Snapshot(Snapshot::new(value))],
                ..FakeNode::default()
            }
        }
    }

    impl RemoteNode for FakeNode {
        fn subscribe(&self) -> BoxStream<'static, Notification> {
            stream::iter(self.notifications.clone()).boxed()
        }

        fn write(&self, field: Field, value: bool) {
            self.writes.lock().unwrap().push((field, value));
        }
    }

    #[tokio::test]
    async fn test_commands_in_manual_mode() {
        let node = FakeNode::with_snapshot(json!({ "manualMode": true, "fanStatus": false }));
        let mut output = Vec::new();

        run(
            Reconciler::new(node.clone()),
            &b"fan\nled\nquit\nmode\n"[..],
            &mut output,
            std::future::pending(),
        )
        .await
        .unwrap();

        assert_eq!(
            *node.writes.lock().unwrap(),
            [(Field::FanStatus, true), (Field::LedStatus, true)]
        );

        let output = String::from_utf8(output).unwrap();
        assert!(output.contains("sent fanStatus = true"));
        assert!(output.contains("sent ledStatus = true"));
    }

    #[tokio::test]
    async fn test_toggles_suppressed_in_auto_mode() {
        let node = FakeNode::with_snapshot(json!({ "manualMode": false }));
        let mut output = Vec::new();

        run(
            Reconciler::new(node.clone()),
            &b"fan\nturbo\nmanual\n"[..],
            &mut output,
            std::future::pending(),
        )
        .await
        .unwrap();

        assert_eq!(*node.writes.lock().unwrap(), [(Field::ManualMode, true)]);

        let output = String::from_utf8(output).unwrap();
        assert!(output.contains("switch to manual mode"));
        assert!(output.contains(HELP));
    }

    #[tokio::test]
    async fn test_shutdown_stops_waiting_for_input() {
        let node = FakeNode::with_snapshot(json!({ "manualMode": true }));
        let (_stdin, input) = tokio::io::duplex(64);

        let result = tokio::time::timeout(
            Duration::from_secs(5),
            run(
                Reconciler::new(node.clone()),
                tokio::io::BufReader::new(input),
                Vec::new(),
                tokio::time::sleep(Duration::from_millis(50)),
            ),
        )
        .await
        .expect("loop kept running after shutdown");

        assert!(result.is_ok());
        assert!(node.writes.lock().unwrap().is_empty());
    }
}
