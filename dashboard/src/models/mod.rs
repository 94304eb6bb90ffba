//! Dashboard models

pub mod container;
pub mod deployment;
pub mod host;
