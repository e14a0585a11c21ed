mod compiler;
mod console;
mod file_system;

pub use compiler::*;
pub use console::*;
pub use file_system::*;
