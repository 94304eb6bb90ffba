//! Persistent dashboard settings

pub mod settings;
