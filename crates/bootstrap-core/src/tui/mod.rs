//! Interactive prompt layer (feature-gated)
//!
//! Thin cliclack-based prompts that fill in whatever the CLI arguments left
//! unanswered. The pipeline itself never prompts.

pub mod prompts;

pub use prompts::{collect, Answers};
