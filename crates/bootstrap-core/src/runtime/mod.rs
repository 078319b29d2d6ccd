//! Host process integration: scoped child invocation and capability probes

pub mod probe;
pub mod process;

pub use probe::command_exists;
pub use process::run;
