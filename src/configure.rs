mod error;

pub use self::error::ConfigurationError;
use crate::{
    ast::Setting,
    context::Context,
    error::ApplicationError,
    ir::{CompileOptions, Configuration, DEFAULT_PRECISION, DependencyPolicy, OutputStyle},
    parse::parse_configuration,
};
use clap::ValueEnum;
use std::{
    path::{Path, PathBuf},
    time::Duration,
};

pub const DEFAULT_CONFIGURATION_FILE: &str = "cascade.ini";
const DEFAULT_SOURCE_DIRECTORY: &str = "assets/scss";
const DEFAULT_OUTPUT_DIRECTORY: &str = "assets/css";
const DEFAULT_INTERVAL: Duration = Duration::from_secs(1);

const SOURCE_DIRECTORY_KEY: &str = "source_dir";
const OUTPUT_DIRECTORY_KEY: &str = "output_dir";
const OUTPUT_STYLE_KEY: &str = "output_style";
const PRECISION_KEY: &str = "precision";
const SOURCE_COMMENTS_KEY: &str = "source_comments";
const NAME_SUFFIX_KEY: &str = "name_suffix";
const INTERVAL_KEY: &str = "interval";

/// Partial settings from one configuration layer.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Settings {
    pub source_directory: Option<PathBuf>,
    pub output_directory: Option<PathBuf>,
    pub output_style: Option<OutputStyle>,
    pub precision: Option<usize>,
    pub source_comments: Option<bool>,
    pub name_suffix: Option<String>,
    pub interval: Option<Duration>,
    pub dependency_policy: Option<DependencyPolicy>,
}

impl Settings {
    pub fn from_file(settings: &[Setting]) -> Result<Self, ConfigurationError> {
        let mut this = Self::default();

        for setting in settings {
            let value = setting.value();

            match setting.key() {
                SOURCE_DIRECTORY_KEY => this.source_directory = Some(value.into()),
                OUTPUT_DIRECTORY_KEY => this.output_directory = Some(value.into()),
                OUTPUT_STYLE_KEY => {
                    this.output_style = Some(
                        OutputStyle::from_str(value, true)
                            .map_err(|_| invalid_value(OUTPUT_STYLE_KEY, value))?,
                    )
                }
                PRECISION_KEY => {
                    this.precision = Some(
                        value
                            .parse()
                            .map_err(|_| invalid_value(PRECISION_KEY, value))?,
                    )
                }
                SOURCE_COMMENTS_KEY => {
                    this.source_comments = Some(parse_boolean(SOURCE_COMMENTS_KEY, value)?)
                }
                NAME_SUFFIX_KEY => this.name_suffix = Some(value.into()),
                INTERVAL_KEY => this.interval = Some(parse_interval(value)?),
                key => return Err(ConfigurationError::UnknownKey(key.into())),
            }
        }

        Ok(this)
    }

    /// Overlays another layer on top of this one.
    pub fn merge(self, other: Self) -> Self {
        Self {
            source_directory: other.source_directory.or(self.source_directory),
            output_directory: other.output_directory.or(self.output_directory),
            output_style: other.output_style.or(self.output_style),
            precision: other.precision.or(self.precision),
            source_comments: other.source_comments.or(self.source_comments),
            name_suffix: other.name_suffix.or(self.name_suffix),
            interval: other.interval.or(self.interval),
            dependency_policy: other.dependency_policy.or(self.dependency_policy),
        }
    }

    pub fn into_configuration(
        self,
        root_directory: &Path,
        configuration_file: impl Into<PathBuf>,
    ) -> Configuration {
        Configuration::new(
            root_directory,
            root_directory.join(
                self.source_directory
                    .unwrap_or_else(|| DEFAULT_SOURCE_DIRECTORY.into()),
            ),
            root_directory.join(
                self.output_directory
                    .unwrap_or_else(|| DEFAULT_OUTPUT_DIRECTORY.into()),
            ),
            configuration_file,
            self.name_suffix.unwrap_or_default(),
            CompileOptions::new(
                self.output_style.unwrap_or_default(),
                self.precision.unwrap_or(DEFAULT_PRECISION),
                self.source_comments.unwrap_or_default(),
            ),
            self.interval.unwrap_or(DEFAULT_INTERVAL),
            self.dependency_policy.unwrap_or_default(),
        )
    }
}

/// Reads settings from a configuration file.
///
/// A missing file yields empty settings unless it is required.
pub async fn read_settings(
    context: &Context,
    path: &Path,
    required: bool,
) -> Result<Settings, ApplicationError> {
    if !required && context.file_system().metadata(path).await.is_err() {
        return Ok(Settings::default());
    }

    let mut source = String::new();

    context
        .file_system()
        .read_file_to_string(path, &mut source)
        .await
        .map_err(ApplicationError::read)?;

    Ok(Settings::from_file(&parse_configuration(&source)?)?)
}

/// Parses a positive number of seconds.
pub fn parse_interval(value: &str) -> Result<Duration, ConfigurationError> {
    match value.trim().parse::<f64>() {
        Ok(seconds) if seconds.is_finite() && seconds > 0.0 => Ok(Duration::from_secs_f64(seconds)),
        _ => Err(invalid_value(INTERVAL_KEY, value)),
    }
}

fn parse_boolean(key: &str, value: &str) -> Result<bool, ConfigurationError> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Ok(true),
        "false" | "no" | "off" | "0" => Ok(false),
        _ => Err(invalid_value(key, value)),
    }
}

fn invalid_value(key: &str, value: &str) -> ConfigurationError {
    ConfigurationError::InvalidValue(key.into(), value.into())
}
