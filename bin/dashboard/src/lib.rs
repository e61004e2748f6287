mod input;
pub use input::{Input, HELP};

mod run;
pub use run::run;

mod screen;
pub use screen::{DispatchLine, Screen};

pub type ErasedError = Box<dyn std::error::Error + Send + Sync + 'static>;
