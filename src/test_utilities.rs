use crate::{
    context::Context,
    infrastructure::{Compiler, Console, OsFileSystem},
    ir::CompileOptions,
    options::Options,
};
use async_trait::async_trait;
use std::{
    error::Error,
    fs::{self, File},
    path::Path,
    sync::{Arc, Mutex},
    time::SystemTime,
};

const SYNTAX_ERROR_MARKER: &str = "@error";

pub fn context() -> Context {
    context_with_console(MemoryConsole::new())
}

pub fn context_with_console(console: MemoryConsole) -> Context {
    Context::new(FakeCompiler, console, OsFileSystem::new(), Options::default())
}

pub fn write(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }

    fs::write(path, content).unwrap();
}

pub fn set_modified_time(path: &Path, time: SystemTime) {
    File::options()
        .write(true)
        .open(path)
        .unwrap()
        .set_modified(time)
        .unwrap();
}

/// Emits a comment naming the source instead of real CSS.
#[derive(Debug)]
pub struct FakeCompiler;

#[async_trait]
impl Compiler for FakeCompiler {
    async fn compile(
        &self,
        path: &Path,
        _options: &CompileOptions,
    ) -> Result<String, Box<dyn Error + Send + Sync>> {
        let source = tokio::fs::read_to_string(path).await?;

        if source.contains(SYNTAX_ERROR_MARKER) {
            return Err(format!("syntax error in {}", path.display()).into());
        }

        Ok(format!("/* {} */\n", path.display()))
    }
}

#[derive(Clone, Debug, Default)]
pub struct MemoryConsole {
    stdout: Arc<Mutex<Vec<u8>>>,
    stderr: Arc<Mutex<Vec<u8>>>,
}

impl MemoryConsole {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stdout(&self) -> String {
        String::from_utf8_lossy(&self.stdout.lock().unwrap()).into_owned()
    }

    pub fn stderr(&self) -> String {
        String::from_utf8_lossy(&self.stderr.lock().unwrap()).into_owned()
    }
}

#[async_trait]
impl Console for MemoryConsole {
    async fn write_stdout(&mut self, buffer: &[u8]) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.stdout.lock().unwrap().extend_from_slice(buffer);

        Ok(())
    }

    async fn write_stderr(&mut self, buffer: &[u8]) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.stderr.lock().unwrap().extend_from_slice(buffer);

        Ok(())
    }
}
