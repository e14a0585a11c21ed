use super::CompileOptions;
use std::{
    path::{Path, PathBuf},
    time::Duration,
};

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum DependencyPolicy {
    /// Resolves dependencies once when a watcher starts.
    #[default]
    Captured,
    /// Resolves targets and dependencies again on every tick.
    Refresh,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Configuration {
    root_directory: PathBuf,
    source_directory: PathBuf,
    output_directory: PathBuf,
    configuration_file: PathBuf,
    name_suffix: String,
    compile_options: CompileOptions,
    interval: Duration,
    dependency_policy: DependencyPolicy,
}

impl Configuration {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        root_directory: impl Into<PathBuf>,
        source_directory: impl Into<PathBuf>,
        output_directory: impl Into<PathBuf>,
        configuration_file: impl Into<PathBuf>,
        name_suffix: impl Into<String>,
        compile_options: CompileOptions,
        interval: Duration,
        dependency_policy: DependencyPolicy,
    ) -> Self {
        Self {
            root_directory: root_directory.into(),
            source_directory: source_directory.into(),
            output_directory: output_directory.into(),
            configuration_file: configuration_file.into(),
            name_suffix: name_suffix.into(),
            compile_options,
            interval,
            dependency_policy,
        }
    }

    pub fn source_directory(&self) -> &Path {
        &self.source_directory
    }

    pub fn output_directory(&self) -> &Path {
        &self.output_directory
    }

    pub fn configuration_file(&self) -> &Path {
        &self.configuration_file
    }

    pub fn compile_options(&self) -> &CompileOptions {
        &self.compile_options
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn dependency_policy(&self) -> DependencyPolicy {
        self.dependency_policy
    }

    /// Derives the output path of an entry stylesheet.
    pub fn output_path(&self, source: &Path) -> PathBuf {
        let mut name = source
            .file_stem()
            .unwrap_or_default()
            .to_string_lossy()
            .into_owned();

        if !name.ends_with(&self.name_suffix) {
            name.push_str(&self.name_suffix);
        }

        name.push_str(".css");

        self.output_directory.join(name)
    }

    /// Shortens a path for display relative to the project root.
    pub fn relative_path<'a>(&self, path: &'a Path) -> &'a Path {
        path.strip_prefix(&self.root_directory).unwrap_or(path)
    }
}
