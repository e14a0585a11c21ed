use crate::{
    context::Context,
    debug,
    error::ApplicationError,
    ir::{BuildFailure, BuildReport, CompilationTarget, CompileEvent, Configuration},
    log,
    resolve::resolve,
    staleness::is_stale,
};
use async_recursion::async_recursion;
use std::{
    collections::HashSet,
    ffi::OsStr,
    path::{Path, PathBuf},
};

const SOURCE_EXTENSIONS: &[&str] = &["scss", "sass"];
const PARTIAL_PREFIX: char = '_';

/// Compiles every entry stylesheet whose output is stale.
pub async fn build_all(
    context: &Context,
    configuration: &Configuration,
) -> Result<BuildReport, ApplicationError> {
    let mut report = BuildReport::new();
    let targets = resolve_targets(context, configuration, &mut report).await?;

    build_targets(context, configuration, &targets, &mut report).await?;
    log_failures(context, configuration, &report).await?;

    Ok(report)
}

/// Finds entry stylesheets and resolves their dependencies.
///
/// Entries that cannot be read or resolved are recorded as failures and left
/// out. Only an unreadable source directory fails as a whole.
pub async fn resolve_targets(
    context: &Context,
    configuration: &Configuration,
    report: &mut BuildReport,
) -> Result<Vec<CompilationTarget>, ApplicationError> {
    let mut targets = vec![];

    for source in find_sources(context, configuration.source_directory(), report).await? {
        match resolve(context, configuration.configuration_file(), &source).await {
            Ok(dependencies) => targets.push(CompilationTarget::new(
                source.clone(),
                configuration.output_path(&source),
                dependencies,
            )),
            Err(error) => report.add_failure(BuildFailure::new(source, error)),
        }
    }

    Ok(targets)
}

pub async fn build_targets(
    context: &Context,
    configuration: &Configuration,
    targets: &[CompilationTarget],
    report: &mut BuildReport,
) -> Result<(), ApplicationError> {
    context
        .file_system()
        .create_directory(configuration.output_directory())
        .await
        .map_err(ApplicationError::write)?;

    for target in targets {
        match build_target(context, configuration, target).await {
            Ok(Some(event)) => report.add_event(event),
            Ok(None) => {}
            Err(error) => report.add_failure(BuildFailure::new(target.source(), error)),
        }
    }

    Ok(())
}

pub async fn log_failures(
    context: &Context,
    configuration: &Configuration,
    report: &BuildReport,
) -> Result<(), ApplicationError> {
    if report.is_success() {
        return Ok(());
    }

    let mut console = context.console().lock().await;

    for failure in report.failures() {
        log!(
            context,
            console,
            "{}: {}",
            configuration.relative_path(failure.source()).display(),
            failure.error()
        );
    }

    Ok(())
}

/// Warns about compile options that the compiler does not honor.
pub async fn warn_ignored_options(
    context: &Context,
    configuration: &Configuration,
) -> Result<(), ApplicationError> {
    let options = context
        .compiler()
        .ignored_options(configuration.compile_options());

    if !options.is_empty() {
        let mut console = context.console().lock().await;

        log!(
            context,
            console,
            "ignoring options unsupported by the compiler: {}",
            options.join(", ")
        );
    }

    Ok(())
}

async fn build_target(
    context: &Context,
    configuration: &Configuration,
    target: &CompilationTarget,
) -> Result<Option<CompileEvent>, ApplicationError> {
    if !is_stale(context, target.output(), target.dependencies()).await? {
        debug!(
            context,
            "{} is up to date",
            configuration.relative_path(target.output()).display()
        );

        return Ok(None);
    }

    let css = context
        .compiler()
        .compile(target.source(), configuration.compile_options())
        .await
        .map_err(ApplicationError::compile)?;

    if let Some(directory) = target.output().parent() {
        context
            .file_system()
            .create_directory(directory)
            .await
            .map_err(ApplicationError::write)?;
    }

    context
        .file_system()
        .write_file(target.output(), css.as_bytes())
        .await
        .map_err(ApplicationError::write)?;

    let event = CompileEvent::new(
        configuration.relative_path(target.source()),
        configuration.relative_path(target.output()),
    );

    // Progress lines are best effort once the output is in place.
    if !context.options().quiet {
        context
            .console()
            .lock()
            .await
            .write_stdout(format!("{}\n", event).as_bytes())
            .await
            .ok();
    }

    Ok(Some(event))
}

async fn find_sources(
    context: &Context,
    directory: &Path,
    report: &mut BuildReport,
) -> Result<Vec<PathBuf>, ApplicationError> {
    let mut directories = HashSet::new();
    let mut sources = vec![];
    let paths = list_directory(context, directory, &mut directories).await?;

    find_sources_in(context, paths, &mut directories, &mut sources, report).await?;

    Ok(sources)
}

#[async_recursion]
async fn find_sources_in(
    context: &Context,
    paths: Vec<PathBuf>,
    directories: &mut HashSet<PathBuf>,
    sources: &mut Vec<PathBuf>,
    report: &mut BuildReport,
) -> Result<(), ApplicationError> {
    for path in paths {
        match context.file_system().metadata(&path).await {
            Ok(metadata) if metadata.is_file() => {
                if is_entry(&path) {
                    sources.push(path);
                }
            }
            Ok(_) => match list_directory(context, &path, directories).await {
                Ok(paths) => {
                    find_sources_in(context, paths, directories, sources, report).await?
                }
                Err(error) => report.add_failure(BuildFailure::new(path, error)),
            },
            Err(error) if is_entry(&path) => {
                report.add_failure(BuildFailure::new(path, ApplicationError::read(error)))
            }
            Err(error) => {
                debug!(context, "skipping {}: {}", path.display(), error);
            }
        }
    }

    Ok(())
}

async fn list_directory(
    context: &Context,
    directory: &Path,
    directories: &mut HashSet<PathBuf>,
) -> Result<Vec<PathBuf>, ApplicationError> {
    // Symbolic links can make directory trees cyclic.
    if !directories.insert(
        context
            .file_system()
            .canonicalize_path(directory)
            .await
            .map_err(ApplicationError::read)?,
    ) {
        return Ok(vec![]);
    }

    context
        .file_system()
        .read_directory(directory)
        .await
        .map_err(ApplicationError::read)
}

fn is_entry(path: &Path) -> bool {
    path.extension()
        .and_then(OsStr::to_str)
        .is_some_and(|extension| SOURCE_EXTENSIONS.contains(&extension))
        && !path
            .file_name()
            .and_then(OsStr::to_str)
            .is_some_and(|name| name.starts_with(PARTIAL_PREFIX))
}
