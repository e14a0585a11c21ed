mod build_report;
mod compilation_target;
mod compile_event;
mod compile_options;
mod configuration;
mod dependency_set;

pub use build_report::*;
pub use compilation_target::*;
pub use compile_event::*;
pub use compile_options::*;
pub use configuration::*;
pub use dependency_set::*;
