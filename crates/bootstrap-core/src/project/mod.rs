//! Project directory concerns: naming rules, the conflict safety gate,
//! package metadata rewriting, and the one-shot init script.

pub mod init_script;
pub mod metadata;
pub mod name;
pub mod safety;
