//! Edge sources
//!
//! The engine never reads storage itself. Whatever holds the network hands it
//! a list of [`RawEdge`] records through the [`EdgeSource`] trait; the
//! [`GraphBuilder`] turns those into a [`Graph`].

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::{bail_unsupported, trace_time};
use crate::config::IngestConfig;
use crate::error::{Result, RouteGraphError};
use crate::graph::{Graph, GraphBuilder};

/// One connection record as exported by a store: an open set of fields, of
/// which the origin, destination and cost are read during ingestion.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawEdge {
    fields: Map<String, Value>,
}

impl RawEdge {
    /// Record with the default `from` / `to` / `cost` keys
    pub fn new(from: impl Into<Value>, to: impl Into<Value>, cost: Option<Value>) -> Self {
        let mut record = Self::default()
            .with_field("from", from.into())
            .with_field("to", to.into());
        if let Some(cost) = cost {
            record = record.with_field("cost", cost);
        }
        record
    }

    pub fn with_field(mut self, key: impl Into<String>, value: Value) -> Self {
        self.fields.insert(key.into(), value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }
}

/// Provider of raw connection records
pub trait EdgeSource {
    fn load_edges(&self) -> Result<Vec<RawEdge>>;
}

impl EdgeSource for Vec<RawEdge> {
    fn load_edges(&self) -> Result<Vec<RawEdge>> {
        Ok(self.clone())
    }
}

/// Load every record from `source` and build a graph from it
pub fn load_graph(source: &dyn EdgeSource, config: &IngestConfig) -> Result<Graph> {
    let start = Instant::now();
    let records = source.load_edges()?;
    let mut builder = GraphBuilder::new();
    builder.add_records_with(&records, config);
    let graph = builder.build();
    trace_time!(start, "load_graph", records = records.len());
    Ok(graph)
}

/// Serialization of an edge file, chosen by extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeFileFormat {
    Json,
    Yaml,
}

impl EdgeFileFormat {
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_lowercase)
            .unwrap_or_default();
        match extension.as_str() {
            "json" => Ok(EdgeFileFormat::Json),
            "yaml" | "yml" => Ok(EdgeFileFormat::Yaml),
            other => bail_unsupported!("edge file extension", other, "json, yaml, yml"),
        }
    }
}

/// Edge list stored in a JSON or YAML file.
///
/// The document is either a sequence of records or a mapping with an `edges`
/// key holding that sequence.
#[derive(Debug, Clone)]
pub struct EdgeFile {
    path: PathBuf,
}

impl EdgeFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn invalid(&self, reason: impl Into<String>) -> RouteGraphError {
        RouteGraphError::InvalidEdgeSource {
            path: self.path.clone(),
            reason: reason.into(),
        }
    }

    fn parse(&self, content: &str) -> Result<Vec<RawEdge>> {
        let document: Value = match EdgeFileFormat::from_path(&self.path)? {
            EdgeFileFormat::Json => serde_json::from_str(content)?,
            EdgeFileFormat::Yaml => serde_yaml::from_str(content)?,
        };

        let items = match document {
            Value::Array(items) => items,
            Value::Object(mut map) => match map.remove("edges") {
                Some(Value::Array(items)) => items,
                Some(_) => return Err(self.invalid("`edges` must be a list of records")),
                None => return Err(self.invalid("missing `edges` list")),
            },
            Value::Null => Vec::new(),
            _ => return Err(self.invalid("expected a list of records")),
        };

        items
            .into_iter()
            .enumerate()
            .map(|(index, item)| match item {
                Value::Object(fields) => Ok(RawEdge { fields }),
                _ => Err(self.invalid(format!("record {} is not a mapping", index))),
            })
            .collect()
    }
}

impl EdgeSource for EdgeFile {
    #[tracing::instrument(skip(self), fields(path = %self.path.display()))]
    fn load_edges(&self) -> Result<Vec<RawEdge>> {
        if !self.path.is_file() {
            return Err(RouteGraphError::EdgeSourceNotFound {
                path: self.path.clone(),
            });
        }

        let content = fs::read_to_string(&self.path)
            .map_err(|e| RouteGraphError::io_operation("read", self.path.display(), e))?;
        let records = self.parse(&content)?;
        tracing::debug!(records = records.len(), "loaded edge records");
        Ok(records)
    }
}
