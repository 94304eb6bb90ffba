//! Deployment configuration builder
//!
//! Folds the launch form into a [`DeploymentRequest`](crate::models::deployment::DeploymentRequest).

pub mod config;
pub mod defaults;
pub mod form;
