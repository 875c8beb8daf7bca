//! Document store: the workspace model, its persistence and configuration

pub mod config;
pub mod document;
pub mod error;
pub mod storage;
pub mod store;
pub mod workspace;
