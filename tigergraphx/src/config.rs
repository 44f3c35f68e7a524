// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Graph configuration
//!
//! A [`GraphConfig`] bundles the logical schema with client-side options and
//! can be loaded from JSON:
//!
//! ```json
//! {
//!   "schema": { "graph_name": "Social", "nodes": { ... }, "edges": { ... } },
//!   "options": { "num_edge_samples": 500 }
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{GraphError, GraphResult};
use crate::schema::GraphSchema;

/// Client-side behavior options
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphOptions {
    /// Maximum number of edges sampled when listing the edges of one node
    pub num_edge_samples: usize,

    /// Name of the installed query that computes node degree
    pub degree_query_name: String,

    /// Drop an existing graph of the same name before creating the schema
    pub drop_existing_graph: bool,
}

impl Default for GraphOptions {
    fn default() -> Self {
        Self {
            num_edge_samples: 1000,
            degree_query_name: "api_degree".to_string(),
            drop_existing_graph: false,
        }
    }
}

/// Schema plus options
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphConfig {
    pub schema: GraphSchema,
    #[serde(default)]
    pub options: GraphOptions,
}

impl GraphConfig {
    pub fn new(schema: GraphSchema) -> Self {
        Self {
            schema,
            options: GraphOptions::default(),
        }
    }

    pub fn with_options(mut self, options: GraphOptions) -> Self {
        self.options = options;
        self
    }

    pub fn from_json_str(json: &str) -> GraphResult<Self> {
        let config: GraphConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> GraphResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    fn validate(&self) -> GraphResult<()> {
        if self.options.num_edge_samples == 0 {
            return Err(GraphError::Config(
                "num_edge_samples must be at least 1".to_string(),
            ));
        }
        if self.options.degree_query_name.trim().is_empty() {
            return Err(GraphError::Config(
                "degree_query_name must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
