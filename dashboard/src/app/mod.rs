//! Dashboard page flow

pub mod dashboard;
pub mod options;
