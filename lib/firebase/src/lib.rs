mod database;
pub use database::{Database, Reference};

mod error;
pub use error::Error;

mod event;
pub use event::{EventStreamDecoder, ServerEvent, StreamEvent};

mod listener;
pub use listener::{ListenEvent, Listener};

mod path;
pub use path::Path;

mod tree;
pub use tree::Tree;

pub type Result<T> = std::result::Result<T, Error>;
