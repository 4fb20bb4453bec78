//! Routegraph Core Library
//!
//! Core domain logic for routegraph: building weighted undirected graphs from
//! edge records and running path, spanning, distance and ranking analyses.

pub mod config;
pub mod error;
pub mod format;
pub mod graph;
pub mod logging;
pub mod records;
pub mod report;
pub mod source;
