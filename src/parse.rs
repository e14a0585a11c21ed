mod error;
mod parser;

pub use self::error::ParseError;
use crate::ast::Setting;

/// Extracts the module names of all `@import` statements in a stylesheet.
pub fn parse_imports(source: &str) -> Result<Vec<&str>, ParseError> {
    parser::imports(source)
        .map(|(_, imports)| imports)
        .map_err(|error| ParseError::from_nom(source, error))
}

pub fn parse_configuration(source: &str) -> Result<Vec<Setting<'_>>, ParseError> {
    parser::configuration(source)
        .map(|(_, settings)| settings)
        .map_err(|error| ParseError::from_nom(source, error))
}
