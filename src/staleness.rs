use crate::{context::Context, error::ApplicationError, ir::DependencySet};
use std::path::Path;

/// Checks if an output is missing or older than any of its dependencies.
///
/// Equal modification times count as up to date.
pub async fn is_stale(
    context: &Context,
    output: &Path,
    dependencies: &DependencySet,
) -> Result<bool, ApplicationError> {
    let Ok(metadata) = context.file_system().metadata(output).await else {
        return Ok(true);
    };
    let output_time = metadata.modified_time();

    for dependency in dependencies.iter() {
        if context
            .file_system()
            .metadata(dependency)
            .await
            .map_err(ApplicationError::read)?
            .modified_time()
            > output_time
        {
            return Ok(true);
        }
    }

    Ok(false)
}
