use itertools::Itertools;
use std::{
    error::Error,
    fmt::{self, Display, Formatter},
    path::PathBuf,
};

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ValidationError {
    CircularImport(Vec<PathBuf>),
}

impl Error for ValidationError {}

impl Display for ValidationError {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        match self {
            Self::CircularImport(paths) => {
                write!(
                    formatter,
                    "import cycle detected: {}",
                    paths
                        .iter()
                        .chain(paths.first())
                        .dedup()
                        .map(|path| path.display())
                        .join(" -> ")
                )
            }
        }
    }
}
