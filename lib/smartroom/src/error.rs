use std::fmt;

#[derive(Debug)]
pub enum Error {
    MissingVariable(&'static str),
    UnknownCommand(String),
    Firebase(firebase::Error),
}

impl From<firebase::Error> for Error {
    fn from(err: firebase::Error) -> Self {
        Self::Firebase(err)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingVariable(name) => write!(f, "set ENV variable {name}"),
            Self::UnknownCommand(command) => write!(f, "unknown command `{command}`"),
            Self::Firebase(err) => write!(f, "firebase error: {err}"),
        }
    }
}

impl std::error::Error for Error {}
