// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
// Graph creation and removal on the remote side

use log::{info, warn};
use std::sync::Arc;

use super::context::GraphContext;
use crate::error::{GraphError, GraphResult};
use crate::schema::ddl::{create_graph_script, drop_graph_script, install_degree_query_script};

/// Marker printed by the remote when a schema-change job completes
const SCHEMA_CHANGE_SUCCEEDED: &str = "Local schema change succeeded";

/// Marker printed by the remote when a query fails type or semantic checks
const QUERY_SEMANTIC_ERROR: &str = "Saved as draft query with type/semantic error";

pub struct SchemaManager {
    context: Arc<GraphContext>,
}

impl SchemaManager {
    pub fn new(context: Arc<GraphContext>) -> Self {
        Self { context }
    }

    /// Create the graph and all of its types
    ///
    /// With `drop_existing_graph`, a graph of the same name is dropped first;
    /// a failed drop is logged and creation proceeds.
    pub fn create_schema(&self, drop_existing_graph: bool) -> GraphResult<()> {
        let graph_name = self.context.graph_name();
        if drop_existing_graph {
            if let Err(e) = self.drop_graph() {
                warn!("Could not drop graph '{}': {}", graph_name, e);
            }
        }

        let script = create_graph_script(&self.context.schema);
        let output = self.context.transport().run_gsql(&script)?;
        if !output.contains(SCHEMA_CHANGE_SUCCEEDED) {
            return Err(GraphError::SchemaChange {
                graph: graph_name.to_string(),
                output: output.trim().to_string(),
            });
        }
        info!("Graph '{}' created", graph_name);
        Ok(())
    }

    pub fn drop_graph(&self) -> GraphResult<()> {
        let graph_name = self.context.graph_name();
        let output = self
            .context
            .transport()
            .run_gsql(&drop_graph_script(graph_name))?;
        info!("Dropped graph '{}': {}", graph_name, output.trim());
        Ok(())
    }

    /// Create and install the helper queries the managers rely on
    pub fn install_queries(&self) -> GraphResult<()> {
        let graph_name = self.context.graph_name();
        let query_name = &self.context.options.degree_query_name;
        let script = install_degree_query_script(graph_name, query_name);
        let output = self.context.transport().run_gsql(&script)?;
        if output.contains(QUERY_SEMANTIC_ERROR) {
            return Err(GraphError::QueryInstall {
                query: query_name.clone(),
                output: output.trim().to_string(),
            });
        }
        info!("Installed query '{}' on graph '{}'", query_name, graph_name);
        Ok(())
    }
}
