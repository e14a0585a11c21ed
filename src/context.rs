use crate::{
    infrastructure::{Compiler, Console, FileSystem},
    options::Options,
};
use tokio::sync::Mutex;

pub struct Context {
    compiler: Box<dyn Compiler + Send + Sync + 'static>,
    console: Mutex<Box<dyn Console + Send + Sync + 'static>>,
    file_system: Box<dyn FileSystem + Send + Sync + 'static>,
    options: Options,
}

impl Context {
    pub fn new(
        compiler: impl Compiler + Send + Sync + 'static,
        console: impl Console + Send + Sync + 'static,
        file_system: impl FileSystem + Send + Sync + 'static,
        options: Options,
    ) -> Self {
        Self {
            compiler: Box::new(compiler),
            console: Mutex::new(Box::new(console)),
            file_system: Box::new(file_system),
            options,
        }
    }

    pub fn compiler(&self) -> &(dyn Compiler + Send + Sync) {
        &*self.compiler
    }

    pub fn console(&self) -> &Mutex<Box<dyn Console + Send + Sync>> {
        &self.console
    }

    pub fn file_system(&self) -> &(dyn FileSystem + Send + Sync) {
        &*self.file_system
    }

    pub fn options(&self) -> &Options {
        &self.options
    }
}
