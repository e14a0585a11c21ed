use std::{
    fmt::{self, Display, Formatter},
    path::PathBuf,
};

/// A stylesheet that was actually recompiled.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CompileEvent {
    source: PathBuf,
    output: PathBuf,
}

impl CompileEvent {
    pub fn new(source: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            output: output.into(),
        }
    }
}

impl Display for CompileEvent {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        write!(
            formatter,
            "css {} -> {}",
            self.source.display(),
            self.output.display()
        )
    }
}
