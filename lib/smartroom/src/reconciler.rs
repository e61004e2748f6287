use futures_util::stream::BoxStream;
use log::{debug, info, trace, warn};

use crate::{Command, Field, Notification, RemoteNode, RoomState, View};

/// Outcome of [`Reconciler::dispatch`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Dispatch {
    Written { field: Field, value: bool },
    /// Actuator toggles are ignored outside of manual mode.
    Suppressed(Command),
}

/// Keeps the local [`RoomState`] in line with the remote node and turns
/// commands into writes.
pub struct Reconciler<N> {
    node: N,
    state: RoomState,
    connected: bool,
}

impl<N: RemoteNode> Reconciler<N> {
    pub fn new(node: N) -> Self {
        Self {
            node,
            state: RoomState::default(),
            connected: false,
        }
    }

    pub fn subscribe(&self) -> BoxStream<'static, Notification> {
        self.node.subscribe()
    }

    pub fn reconcile(&mut self, notification: Notification) {
        match notification {
            Notification::Snapshot(snapshot) => {
                let unknown = snapshot.unknown_keys();
                if !unknown.is_empty() {
                    debug!("ignored keys {:?}", unknown);
                }

                if !self.connected {
                    info!("connected");
                }

                self.state = RoomState::from_snapshot(&snapshot);
                self.connected = true;

                trace!("reconciled {:?}", self.state);
            }
            Notification::Cancelled(reason) => {
                if self.connected {
                    warn!("disconnected: {reason}");
                }

                self.connected = false;
            }
        }
    }

    /// Issues at most one write. The cached state is left alone; it changes
    /// once the node echoes the new value back.
    pub fn dispatch(&self, command: Command) -> Dispatch {
        let (field, value) = match command {
            Command::ToggleFan | Command::ToggleLed if !self.state.manual_mode => {
                info!("ignoring {:?} in auto mode", command);
                return Dispatch::Suppressed(command);
            }
            Command::ToggleFan => (Field::FanStatus, !self.state.fan_status),
            Command::ToggleLed => (Field::LedStatus, !self.state.led_status),
            Command::ToggleMode => (Field::ManualMode, !self.state.manual_mode),
            Command::SetMode(mode) => (Field::ManualMode, mode.is_manual()),
        };

        info!("set {field} = {value}");
        self.node.write(field, value);

        Dispatch::Written { field, value }
    }

    pub fn state(&self) -> &RoomState {
        &self.state
    }

    pub fn is_connected(&self) -> bool {
        self.connected
    }

    pub fn view(&self) -> View {
        View::new(&self.state, self.connected)
    }
}
