mod metadata;

pub use self::metadata::Metadata;
use async_trait::async_trait;
use std::{
    error::Error,
    ffi::OsString,
    fmt::{self, Debug, Display, Formatter},
    io,
    path::{Path, PathBuf},
};
use tokio::{
    fs::{self, File},
    io::AsyncReadExt,
};

const TEMPORARY_EXTENSION: &str = "tmp";

#[async_trait]
pub trait FileSystem: Debug {
    async fn read_file_to_string(
        &self,
        path: &Path,
        buffer: &mut String,
    ) -> Result<(), Box<dyn Error + Send + Sync>>;
    async fn metadata(&self, path: &Path) -> Result<Metadata, Box<dyn Error + Send + Sync>>;
    async fn read_directory(&self, path: &Path) -> Result<Vec<PathBuf>, Box<dyn Error + Send + Sync>>;
    async fn create_directory(&self, path: &Path) -> Result<(), Box<dyn Error + Send + Sync>>;
    async fn canonicalize_path(&self, path: &Path) -> Result<PathBuf, Box<dyn Error + Send + Sync>>;
    /// Writes a file through a sibling temporary file so that readers never
    /// observe partial contents.
    async fn write_file(&self, path: &Path, content: &[u8]) -> Result<(), Box<dyn Error + Send + Sync>>;
}

#[derive(Debug, Default)]
pub struct OsFileSystem {}

impl OsFileSystem {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl FileSystem for OsFileSystem {
    async fn read_file_to_string(
        &self,
        path: &Path,
        buffer: &mut String,
    ) -> Result<(), Box<dyn Error + Send + Sync>> {
        File::open(path)
            .await
            .map_err(|error| OsFileSystemError::new(error, path))?
            .read_to_string(buffer)
            .await
            .map_err(|error| OsFileSystemError::new(error, path))?;

        Ok(())
    }

    async fn metadata(&self, path: &Path) -> Result<Metadata, Box<dyn Error + Send + Sync>> {
        Ok(Metadata::try_from(
            fs::metadata(path)
                .await
                .map_err(|error| OsFileSystemError::new(error, path))?,
        )
        .map_err(|error| OsFileSystemError::new(error, path))?)
    }

    async fn read_directory(&self, path: &Path) -> Result<Vec<PathBuf>, Box<dyn Error + Send + Sync>> {
        let mut entries = fs::read_dir(path)
            .await
            .map_err(|error| OsFileSystemError::new(error, path))?;
        let mut paths = vec![];

        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|error| OsFileSystemError::new(error, path))?
        {
            paths.push(entry.path());
        }

        paths.sort();

        Ok(paths)
    }

    async fn create_directory(&self, path: &Path) -> Result<(), Box<dyn Error + Send + Sync>> {
        fs::create_dir_all(path)
            .await
            .map_err(|error| OsFileSystemError::new(error, path))?;

        Ok(())
    }

    async fn canonicalize_path(&self, path: &Path) -> Result<PathBuf, Box<dyn Error + Send + Sync>> {
        Ok(fs::canonicalize(path)
            .await
            .map_err(|error| OsFileSystemError::new(error, path))?)
    }

    async fn write_file(&self, path: &Path, content: &[u8]) -> Result<(), Box<dyn Error + Send + Sync>> {
        let temporary_path = temporary_path(path);

        fs::write(&temporary_path, content)
            .await
            .map_err(|error| OsFileSystemError::new(error, &temporary_path))?;

        if let Err(error) = fs::rename(&temporary_path, path).await {
            fs::remove_file(&temporary_path).await.ok();

            return Err(OsFileSystemError::new(error, path).into());
        }

        Ok(())
    }
}

fn temporary_path(path: &Path) -> PathBuf {
    let mut name = OsString::from(".");
    name.push(path.file_name().unwrap_or_default());
    name.push(".");
    name.push(TEMPORARY_EXTENSION);

    path.with_file_name(name)
}

#[derive(Debug)]
pub struct OsFileSystemError {
    error: io::Error,
    path: String,
}

impl OsFileSystemError {
    pub fn new(error: io::Error, path: &Path) -> Self {
        Self {
            error,
            path: path.display().to_string(),
        }
    }
}

impl Error for OsFileSystemError {}

impl Display for OsFileSystemError {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        write!(formatter, "{}: {}", &self.error, &self.path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    #[tokio::test]
    async fn read_directory_sorted() {
        let directory = tempdir().unwrap();

        for name in ["c.scss", "a.scss", "b"] {
            std::fs::write(directory.path().join(name), "").unwrap();
        }

        assert_eq!(
            OsFileSystem::new()
                .read_directory(directory.path())
                .await
                .unwrap(),
            vec![
                directory.path().join("a.scss"),
                directory.path().join("b"),
                directory.path().join("c.scss"),
            ]
        );
    }

    #[tokio::test]
    async fn write_file() {
        let directory = tempdir().unwrap();
        let path = directory.path().join("main.css");

        OsFileSystem::new().write_file(&path, b"a{}").await.unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "a{}");
        assert!(!temporary_path(&path).exists());
    }

    #[tokio::test]
    async fn overwrite_file() {
        let directory = tempdir().unwrap();
        let path = directory.path().join("main.css");
        let file_system = OsFileSystem::new();

        file_system.write_file(&path, b"a{}").await.unwrap();
        file_system.write_file(&path, b"b{}").await.unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "b{}");
    }

    #[tokio::test]
    async fn fail_to_write_file_in_missing_directory() {
        let directory = tempdir().unwrap();

        assert!(
            OsFileSystem::new()
                .write_file(&directory.path().join("foo/main.css"), b"")
                .await
                .is_err()
        );
    }

    #[tokio::test]
    async fn read_metadata() {
        let directory = tempdir().unwrap();
        let path = directory.path().join("foo.scss");
        std::fs::write(&path, "").unwrap();
        let file_system = OsFileSystem::new();

        assert!(file_system.metadata(&path).await.unwrap().is_file());
        assert!(!file_system.metadata(directory.path()).await.unwrap().is_file());
        assert!(
            file_system
                .metadata(&directory.path().join("bar.scss"))
                .await
                .is_err()
        );
    }

    #[test]
    fn get_temporary_path() {
        assert_eq!(
            temporary_path(Path::new("foo/main.css")),
            PathBuf::from("foo/.main.css.tmp")
        );
    }
}
