use crate::{configure::ConfigurationError, parse::ParseError};
use std::{
    error::Error,
    fmt::{self, Display, Formatter},
};
use tokio::{io, task::JoinError};

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ApplicationError {
    Build,
    Compile(String),
    Configuration(ConfigurationError),
    Other(String),
    Parse(ParseError),
    Read(String),
    WatcherRunning,
    Write(String),
}

impl ApplicationError {
    pub fn read(error: impl Display) -> Self {
        Self::Read(error.to_string())
    }

    pub fn write(error: impl Display) -> Self {
        Self::Write(error.to_string())
    }

    pub fn compile(error: impl Display) -> Self {
        Self::Compile(error.to_string())
    }
}

impl Error for ApplicationError {}

impl Display for ApplicationError {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        match self {
            Self::Build => write!(formatter, "build failed"),
            Self::Compile(message) => write!(formatter, "compilation failed: {}", message),
            Self::Configuration(error) => write!(formatter, "{}", error),
            Self::Other(message) => write!(formatter, "{}", message),
            Self::Parse(error) => write!(formatter, "{}", error),
            Self::Read(message) => write!(formatter, "failed to read: {}", message),
            Self::WatcherRunning => write!(formatter, "watcher already running"),
            Self::Write(message) => write!(formatter, "failed to write: {}", message),
        }
    }
}

impl From<Box<dyn Error + Send + Sync>> for ApplicationError {
    fn from(error: Box<dyn Error + Send + Sync>) -> Self {
        Self::Other(error.to_string())
    }
}

impl From<ConfigurationError> for ApplicationError {
    fn from(error: ConfigurationError) -> Self {
        Self::Configuration(error)
    }
}

impl From<io::Error> for ApplicationError {
    fn from(error: io::Error) -> Self {
        Self::Other(error.to_string())
    }
}

impl From<JoinError> for ApplicationError {
    fn from(error: JoinError) -> Self {
        Self::Other(error.to_string())
    }
}

impl From<ParseError> for ApplicationError {
    fn from(error: ParseError) -> Self {
        Self::Parse(error)
    }
}
