//! Configuration type definitions

use serde::{Deserialize, Serialize};

use crate::format::OutputFormat;
use crate::graph::DEFAULT_COST;

/// Top-level routegraph configuration (`routegraph.toml`)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RouteGraphConfig {
    /// How raw edge records are turned into graph edges
    #[serde(default)]
    pub ingest: IngestConfig,

    /// Output defaults
    #[serde(default)]
    pub output: OutputConfig,
}

/// Configuration for edge ingestion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngestConfig {
    /// Weight used when a record has no cost or an unparseable one
    #[serde(default = "default_cost")]
    pub default_cost: f64,

    /// Record key holding the origin node name
    #[serde(default = "default_from_field")]
    pub from_field: String,

    /// Record key holding the destination node name
    #[serde(default = "default_to_field")]
    pub to_field: String,

    /// Record key holding the connection cost
    #[serde(default = "default_cost_field")]
    pub cost_field: String,
}

impl Default for IngestConfig {
    fn default() -> Self {
        Self {
            default_cost: default_cost(),
            from_field: default_from_field(),
            to_field: default_to_field(),
            cost_field: default_cost_field(),
        }
    }
}

/// Configuration for output
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Format used when `--format` is not given
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<OutputFormat>,
}

fn default_cost() -> f64 {
    DEFAULT_COST
}

fn default_from_field() -> String {
    "from".to_string()
}

fn default_to_field() -> String {
    "to".to_string()
}

fn default_cost_field() -> String {
    "cost".to_string()
}
