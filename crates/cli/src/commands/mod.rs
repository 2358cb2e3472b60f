//! CLI command implementations.

pub mod check;
pub mod init;
pub mod path;
pub mod region;
pub mod show;
