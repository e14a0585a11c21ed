use std::{
    error::Error,
    fmt::{self, Display},
};

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ParseError {
    message: String,
    line: usize,
}

impl ParseError {
    pub fn new(message: impl Into<String>, line: usize) -> Self {
        Self {
            message: message.into(),
            line,
        }
    }

    pub fn from_nom(source: &str, error: nom::Err<nom::error::Error<&str>>) -> Self {
        match error {
            nom::Err::Error(error) | nom::Err::Failure(error) => Self::new(
                format!("unexpected input ({:?})", error.code),
                line_number(source, error.input),
            ),
            nom::Err::Incomplete(_) => Self::new("unexpected end of input", line_number(source, "")),
        }
    }
}

fn line_number(source: &str, rest: &str) -> usize {
    let offset = source.len().saturating_sub(rest.len());

    source[..offset].matches('\n').count() + 1
}

impl Error for ParseError {}

impl Display for ParseError {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "line {}: {}", self.line, &self.message)
    }
}
