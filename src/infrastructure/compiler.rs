use crate::ir::{CompileOptions, DEFAULT_PRECISION, OutputStyle};
use async_trait::async_trait;
use std::{error::Error, fmt::Debug, path::Path};
use tokio::task::spawn_blocking;

#[async_trait]
pub trait Compiler: Debug {
    /// Compiles a stylesheet into CSS text.
    async fn compile(
        &self,
        path: &Path,
        options: &CompileOptions,
    ) -> Result<String, Box<dyn Error + Send + Sync>>;

    /// Lists the options set away from their defaults that have no effect.
    fn ignored_options(&self, _options: &CompileOptions) -> Vec<String> {
        vec![]
    }
}

/// A compiler backed by `grass`.
///
/// `grass` fixes numeric precision and never emits source comments.
#[derive(Debug, Default)]
pub struct GrassCompiler {}

impl GrassCompiler {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Compiler for GrassCompiler {
    async fn compile(
        &self,
        path: &Path,
        options: &CompileOptions,
    ) -> Result<String, Box<dyn Error + Send + Sync>> {
        let path = path.to_owned();
        let style = match options.output_style() {
            OutputStyle::Expanded => grass::OutputStyle::Expanded,
            OutputStyle::Compressed => grass::OutputStyle::Compressed,
        };

        Ok(spawn_blocking(move || {
            grass::from_path(&path, &grass::Options::default().style(style))
                .map_err(|error| error.to_string())
        })
        .await??)
    }

    fn ignored_options(&self, options: &CompileOptions) -> Vec<String> {
        let mut names = vec![];

        if options.precision() != DEFAULT_PRECISION {
            names.push(format!("precision = {}", options.precision()));
        }

        if options.source_comments() {
            names.push("source_comments = true".into());
        }

        names
    }
}
