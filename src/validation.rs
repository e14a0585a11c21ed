mod error;

pub use self::error::ValidationError;
use petgraph::{Graph, algo::tarjan_scc, graph::NodeIndex};
use std::{
    collections::HashMap,
    path::{Path, PathBuf},
};

/// Direct imports of each stylesheet.
pub type ImportMap = HashMap<PathBuf, Vec<PathBuf>>;

pub fn validate_imports(imports: &ImportMap) -> Result<(), ValidationError> {
    if let Some(cycle) = find_import_cycle(imports) {
        return Err(ValidationError::CircularImport(cycle));
    }

    Ok(())
}

fn find_import_cycle(imports: &ImportMap) -> Option<Vec<PathBuf>> {
    let mut graph = Graph::<&Path, ()>::new();
    let mut indices = HashMap::<&Path, NodeIndex>::new();

    for (path, dependencies) in imports {
        for path in [path].into_iter().chain(dependencies) {
            if !indices.contains_key(path.as_path()) {
                indices.insert(path.as_path(), graph.add_node(path.as_path()));
            }
        }
    }

    for (path, dependencies) in imports {
        for dependency in dependencies {
            graph.add_edge(indices[path.as_path()], indices[dependency.as_path()], ());
        }
    }

    tarjan_scc(&graph)
        .into_iter()
        .find(|component| {
            component.len() > 1
                || component
                    .first()
                    .is_some_and(|&index| graph.contains_edge(index, index))
        })
        .map(|component| {
            let mut paths = component
                .into_iter()
                .map(|index| graph[index].to_owned())
                .collect::<Vec<_>>();
            paths.sort();
            paths
        })
}
