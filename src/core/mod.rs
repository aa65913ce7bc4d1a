pub mod app;
pub mod batch;
pub mod classify;
pub mod cli;
pub mod config;
pub mod discovery;
pub mod manifest;
pub mod paths;
