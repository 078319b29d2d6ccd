//! Bootstrap Core - scaffolding a new project from a remote template archive
//!
//! This library provides the ordered, failure-aware pipeline that turns an
//! empty (or nearly empty) directory into a working project: it validates
//! the target name and directory, downloads and unpacks a template archive,
//! rewrites project metadata, installs dependencies, and optionally runs a
//! one-shot setup script.
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! - **Leaf components** - directory safety gate, archive download and
//!   extraction, metadata rewriting, scoped process invocation
//! - **Orchestration** - [`Pipeline`] sequences the components over an
//!   injected [`TemplateRegistry`] and returns typed errors to the caller
//! - **CLI/TUI interface** - optional cliclack-based prompts (feature-gated)
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based prompts module
//!
//! # Example Usage (without TUI)
//!
//! ```ignore
//! use bootstrap_core::{Options, Pipeline, TemplateRegistry};
//! use url::Url;
//!
//! let mut registry = TemplateRegistry::new();
//! registry.register(
//!     "typescript-lib",
//!     Url::parse("https://github.com/owner/starter/archive/main.zip")?,
//! );
//!
//! let pipeline = Pipeline::new(registry, Options::default());
//! let report = pipeline.run("typescript-lib", "./my-app".as_ref()).await?;
//! ```

pub mod archive;
pub mod error;
pub mod pipeline;
pub mod project;
pub mod registry;
pub mod runtime;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use error::{Error, Result};
pub use pipeline::{Options, Pipeline, Report};
pub use registry::{Template, TemplateOrigin, TemplateRegistry};
