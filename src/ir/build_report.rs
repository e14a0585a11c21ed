use super::CompileEvent;
use crate::error::ApplicationError;
use std::path::{Path, PathBuf};

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct BuildReport {
    events: Vec<CompileEvent>,
    failures: Vec<BuildFailure>,
}

impl BuildReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[CompileEvent] {
        &self.events
    }

    pub fn failures(&self) -> &[BuildFailure] {
        &self.failures
    }

    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn add_event(&mut self, event: CompileEvent) {
        self.events.push(event);
    }

    pub fn add_failure(&mut self, failure: BuildFailure) {
        self.failures.push(failure);
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BuildFailure {
    source: PathBuf,
    error: ApplicationError,
}

impl BuildFailure {
    pub fn new(source: impl Into<PathBuf>, error: ApplicationError) -> Self {
        Self {
            source: source.into(),
            error,
        }
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    pub fn error(&self) -> &ApplicationError {
        &self.error
    }
}
