use crate::{
    context::Context,
    debug,
    error::ApplicationError,
    ir::DependencySet,
    parse::parse_imports,
    validation::{ImportMap, validate_imports},
};
use async_recursion::async_recursion;
use futures::future::try_join_all;
use itertools::Itertools;
use std::{
    ffi::OsStr,
    path::{Path, PathBuf},
};

const CSS_EXTENSION: &str = ".css";
const PARTIAL_PREFIX: &str = "_";

/// Resolves the transitive dependency set of a stylesheet.
///
/// The set contains the stylesheet itself, every file it imports directly or
/// indirectly, and the configuration file if it exists.
pub async fn resolve(
    context: &Context,
    configuration_file: &Path,
    target: &Path,
) -> Result<DependencySet, ApplicationError> {
    let target = context
        .file_system()
        .canonicalize_path(target)
        .await
        .map_err(ApplicationError::read)?;
    let mut imports = ImportMap::new();

    resolve_imports(context, &target, &mut imports).await?;

    if let Err(error) = validate_imports(&imports) {
        debug!(context, "{}", error);
    }

    let mut dependencies = imports.into_keys().collect::<DependencySet>();

    if is_file(context, configuration_file).await {
        dependencies.insert(configuration_file);
    }

    debug!(
        context,
        "dependencies of {}: {}",
        target.display(),
        dependencies.iter().map(Path::display).join(", ")
    );

    Ok(dependencies)
}

// Paths already in the import map are never descended into twice.
#[async_recursion]
async fn resolve_imports(
    context: &Context,
    path: &Path,
    imports: &mut ImportMap,
) -> Result<(), ApplicationError> {
    if imports.contains_key(path) {
        return Ok(());
    }

    imports.insert(path.to_owned(), vec![]);

    let mut source = String::new();

    context
        .file_system()
        .read_file_to_string(path, &mut source)
        .await
        .map_err(ApplicationError::read)?;

    let directory = path.parent().unwrap_or(Path::new(""));
    let mut dependencies = Vec::<PathBuf>::new();

    for name in parse_imports(&source)? {
        // Sass compiles `.css` imports into plain CSS `@import url(...)` rules.
        if name.ends_with(CSS_EXTENSION) {
            continue;
        }

        for dependency in find_imports(context, directory, name).await? {
            if !dependencies.contains(&dependency) {
                dependencies.push(dependency);
            }
        }
    }

    for dependency in &dependencies {
        resolve_imports(context, dependency, imports).await?;
    }

    imports.insert(path.to_owned(), dependencies);

    Ok(())
}

async fn find_imports(
    context: &Context,
    directory: &Path,
    name: &str,
) -> Result<Vec<PathBuf>, ApplicationError> {
    Ok(try_join_all(
        candidate_paths(directory, name)
            .into_iter()
            .map(|path| find_file(context, path)),
    )
    .await?
    .into_iter()
    .flatten()
    .collect())
}

async fn find_file(context: &Context, path: PathBuf) -> Result<Option<PathBuf>, ApplicationError> {
    if !is_file(context, &path).await {
        return Ok(None);
    }

    Ok(Some(
        context
            .file_system()
            .canonicalize_path(&path)
            .await
            .map_err(ApplicationError::read)?,
    ))
}

async fn is_file(context: &Context, path: &Path) -> bool {
    matches!(
        context.file_system().metadata(path).await,
        Ok(metadata) if metadata.is_file()
    )
}

/// Lists the files an import name may refer to, in priority order.
fn candidate_paths(directory: &Path, name: &str) -> Vec<PathBuf> {
    let name = Path::new(name);
    let Some(base) = name.file_name().and_then(OsStr::to_str) else {
        return vec![];
    };
    let directory = directory.join(name.parent().unwrap_or(Path::new("")));

    [
        base.to_owned(),
        format!("{PARTIAL_PREFIX}{base}"),
        format!("{base}.scss"),
        format!("{base}{CSS_EXTENSION}"),
        format!("{PARTIAL_PREFIX}{base}.scss"),
        format!("{PARTIAL_PREFIX}{base}{CSS_EXTENSION}"),
    ]
    .into_iter()
    .map(|file_name| directory.join(file_name))
    .collect()
}
