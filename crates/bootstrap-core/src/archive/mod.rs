//! Archive acquisition and unpacking
//!
//! This module provides:
//! - Streaming download of a template archive to a local file
//! - Zip extraction with one leading path segment stripped

pub mod download;
pub mod extract;

pub use download::download;
pub use extract::extract;
