//! Management API client

pub mod api;
pub mod client;
pub mod containers;
pub mod hosts;
pub mod webtop;
