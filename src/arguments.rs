use crate::{
    configure::{Settings, parse_interval},
    ir::{DependencyPolicy, OutputStyle},
};
use clap::Parser;
use std::{path::PathBuf, time::Duration};

#[derive(Parser)]
#[clap(about = "Incremental SCSS to CSS builder", version)]
pub struct Arguments {
    #[clap(short = 'C', help = "Set a project root directory")]
    pub directory: Option<PathBuf>,
    #[clap(long, help = "Set a configuration file")]
    pub config: Option<PathBuf>,
    #[clap(long, help = "Set a source directory [default: assets/scss]")]
    pub source: Option<PathBuf>,
    #[clap(long, help = "Set an output directory [default: assets/css]")]
    pub output: Option<PathBuf>,
    #[clap(long, help = "Set an output style [default: compressed]")]
    pub output_style: Option<OutputStyle>,
    #[clap(long, help = "Set a numeric precision [default: 5]")]
    pub precision: Option<usize>,
    #[clap(long, help = "Emit source comments")]
    pub source_comments: bool,
    #[clap(long, help = "Append a suffix to output file names")]
    pub name_suffix: Option<String>,
    #[clap(long, help = "Keep rebuilding until interrupted")]
    pub watch: bool,
    #[clap(
        long,
        help = "Set a watch interval in seconds [default: 1]",
        value_parser = parse_interval
    )]
    pub interval: Option<Duration>,
    #[clap(long, help = "Resolve dependencies again on every watch pass")]
    pub refresh_dependencies: bool,
    #[clap(long, help = "Set a log prefix")]
    pub log_prefix: Option<String>,
    #[clap(long, help = "Show no message on failure of builds")]
    pub quiet: bool,
    #[clap(long, help = "Show debug logs", env = "CASCADE_DEBUG")]
    pub debug: bool,
}

impl Arguments {
    pub fn settings(&self) -> Settings {
        Settings {
            source_directory: self.source.clone(),
            output_directory: self.output.clone(),
            output_style: self.output_style,
            precision: self.precision,
            source_comments: self.source_comments.then_some(true),
            name_suffix: self.name_suffix.clone(),
            interval: self.interval,
            dependency_policy: self
                .refresh_dependencies
                .then_some(DependencyPolicy::Refresh),
        }
    }
}
