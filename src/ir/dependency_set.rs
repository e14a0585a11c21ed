use std::{
    collections::BTreeSet,
    path::{Path, PathBuf},
};

/// Files whose modification makes a compiled stylesheet out of date.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct DependencySet {
    paths: BTreeSet<PathBuf>,
}

impl DependencySet {
    pub fn insert(&mut self, path: impl Into<PathBuf>) -> bool {
        self.paths.insert(path.into())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Path> {
        self.paths.iter().map(PathBuf::as_path)
    }
}

impl<P: Into<PathBuf>> FromIterator<P> for DependencySet {
    fn from_iter<T: IntoIterator<Item = P>>(iterator: T) -> Self {
        Self {
            paths: iterator.into_iter().map(Into::into).collect(),
        }
    }
}
