mod arguments;
mod ast;
mod configure;
mod context;
mod error;
mod infrastructure;
mod ir;
mod log;
mod options;
mod parse;
mod resolve;
mod run;
mod staleness;
#[cfg(test)]
mod test_utilities;
mod validation;
mod watch;

use arguments::Arguments;
use clap::Parser;
use configure::{DEFAULT_CONFIGURATION_FILE, read_settings};
use context::Context;
use error::ApplicationError;
use infrastructure::{GrassCompiler, OsConsole, OsFileSystem};
use ir::Configuration;
use options::Options;
use run::{build_all, warn_ignored_options};
use std::{env::set_current_dir, path::Path, process::exit, sync::Arc, time::Duration};
use tokio::{select, signal::ctrl_c, time::sleep};
use watch::Watcher;

#[tokio::main]
async fn main() {
    let arguments = Arguments::parse();
    let context = Arc::new(Context::new(
        GrassCompiler::new(),
        OsConsole::new(),
        OsFileSystem::new(),
        Options {
            debug: arguments.debug,
            quiet: arguments.quiet,
            log_prefix: arguments.log_prefix.clone(),
        },
    ));

    if let Err(error) = execute(&context, &arguments).await {
        if !(arguments.quiet && matches!(error, ApplicationError::Build)) {
            let _ = context
                .console()
                .lock()
                .await
                .write_stderr(
                    format!(
                        "{}cascade: {}\n",
                        arguments.log_prefix.as_deref().unwrap_or_default(),
                        error
                    )
                    .as_bytes(),
                )
                .await;
        }

        // Delay for the error message to be written completely hopefully.
        sleep(Duration::from_millis(1)).await;

        exit(1)
    }
}

async fn execute(context: &Arc<Context>, arguments: &Arguments) -> Result<(), ApplicationError> {
    if let Some(directory) = &arguments.directory {
        set_current_dir(directory)?;
    }

    let root = context
        .file_system()
        .canonicalize_path(Path::new("."))
        .await
        .map_err(ApplicationError::read)?;
    let configuration_file = root.join(
        arguments
            .config
            .as_deref()
            .unwrap_or(Path::new(DEFAULT_CONFIGURATION_FILE)),
    );
    let configuration = Arc::new(
        read_settings(context, &configuration_file, arguments.config.is_some())
            .await?
            .merge(arguments.settings())
            .into_configuration(&root, configuration_file),
    );

    warn_ignored_options(context, &configuration).await?;

    if arguments.watch {
        return watch(context, configuration).await;
    }

    let report = build_all(context, &configuration).await?;

    debug!(
        context,
        "{} stylesheets compiled, {} failed",
        report.events().len(),
        report.failures().len()
    );

    if report.is_success() {
        Ok(())
    } else {
        Err(ApplicationError::Build)
    }
}

async fn watch(
    context: &Arc<Context>,
    configuration: Arc<Configuration>,
) -> Result<(), ApplicationError> {
    let watcher = Arc::new(Watcher::new());
    let mut handle = watcher.start(context.clone(), configuration)?;

    select! {
        result = &mut handle => return result?,
        result = ctrl_c() => result?,
    }

    watcher.stop();

    handle.await?
}
