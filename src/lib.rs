//! adcraft: multi-platform ad creative generation
//!
//! Turns one campaign brief (brand assets, product, tagline, target platforms) into a set of
//! platform-sized image creatives and promotional videos. Jobs are fanned out concurrently
//! against a pluggable generation backend; partial failures are collected rather than
//! aborting the run. Campaign edits are kept in an undo/redo snapshot history.

pub mod assets;
pub mod campaign_file;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod generation;
pub mod history;
pub mod logging;
pub mod progress;
pub mod provider;
pub mod studio;
pub mod suggestions;
pub mod types;
