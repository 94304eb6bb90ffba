//! Theseus Dashboard Library
//!
//! Deployment builder, management API client and container status view for
//! the Theseus dashboard.

pub mod app;
pub mod builder;
pub mod errors;
pub mod filesys;
pub mod http;
pub mod logs;
pub mod models;
pub mod render;
pub mod storage;
pub mod utils;
