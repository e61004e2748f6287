mod command;
pub use command::{Command, Mode};

mod config;
pub use config::Config;

mod error;
pub use error::Error;

mod field;
pub use field::Field;

mod firebase_node;

mod node;
pub use node::{Notification, RemoteNode};

mod reconciler;
pub use reconciler::{Dispatch, Reconciler};

mod snapshot;
pub use snapshot::Snapshot;

mod state;
pub use state::RoomState;

pub mod view;
pub use view::View;

pub type Result<T> = std::result::Result<T, Error>;
