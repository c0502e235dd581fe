//! Intentscape - 3D intent exploration
//!
//! Type a question, let a decision backend map it to an intent node, and
//! watch the camera fly there in a 3D point cloud.

pub mod backend;
pub mod cli;
pub mod config;
pub mod error;
pub mod explorer;
pub mod models;
