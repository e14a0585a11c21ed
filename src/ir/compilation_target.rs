use super::DependencySet;
use std::path::{Path, PathBuf};

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CompilationTarget {
    source: PathBuf,
    output: PathBuf,
    dependencies: DependencySet,
}

impl CompilationTarget {
    pub fn new(source: PathBuf, output: PathBuf, dependencies: DependencySet) -> Self {
        Self {
            source,
            output,
            dependencies,
        }
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    pub fn output(&self) -> &Path {
        &self.output
    }

    pub fn dependencies(&self) -> &DependencySet {
        &self.dependencies
    }
}
