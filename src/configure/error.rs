use std::{
    error::Error,
    fmt::{self, Display, Formatter},
};

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ConfigurationError {
    InvalidValue(String, String),
    UnknownKey(String),
}

impl Error for ConfigurationError {}

impl Display for ConfigurationError {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        match self {
            Self::InvalidValue(key, value) => {
                write!(formatter, "invalid value \"{value}\" for \"{key}\"")
            }
            Self::UnknownKey(key) => write!(formatter, "unknown configuration key \"{key}\""),
        }
    }
}
