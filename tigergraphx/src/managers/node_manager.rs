// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Single-node operations
//!
//! Attribute bags are validated against the schema before anything is sent,
//! and validation failures are returned as errors. Transport failures are
//! logged and collapsed: writes yield `Ok(None)`, predicates yield `false`.

use log::{debug, error};
use serde_json::{Map, Value};
use std::sync::Arc;

use super::context::GraphContext;
use crate::error::{GraphError, GraphResult};
use crate::exec::discard_failure;
use crate::query::compile_node_edges_query;
use crate::result::{edge_keys, record_attributes, EdgeKey};
use crate::value::Attributes;

/// A node to add: an id, optionally with its own attributes
#[derive(Debug, Clone, PartialEq)]
pub struct NodeInput {
    pub id: String,
    pub attributes: Attributes,
}

impl From<&str> for NodeInput {
    fn from(id: &str) -> Self {
        NodeInput {
            id: id.to_string(),
            attributes: Attributes::new(),
        }
    }
}

impl From<String> for NodeInput {
    fn from(id: String) -> Self {
        NodeInput {
            id,
            attributes: Attributes::new(),
        }
    }
}

impl<S: Into<String>> From<(S, Attributes)> for NodeInput {
    fn from((id, attributes): (S, Attributes)) -> Self {
        NodeInput {
            id: id.into(),
            attributes,
        }
    }
}

pub struct NodeManager {
    context: Arc<GraphContext>,
}

impl NodeManager {
    pub fn new(context: Arc<GraphContext>) -> Self {
        Self { context }
    }

    pub fn add_node(
        &self,
        node_id: &str,
        node_type: &str,
        attributes: &Attributes,
    ) -> GraphResult<Option<usize>> {
        self.context
            .schema
            .node(node_type)?
            .validate_attributes(node_type, attributes)?;
        Ok(discard_failure(
            self.context
                .transport()
                .upsert_node(node_type, node_id, attributes),
            format_args!("Error adding node {}", node_id),
        ))
    }

    /// Add several nodes of one type in a single batch
    ///
    /// `common` is merged into every node's attributes and wins on conflict.
    pub fn add_nodes_from<I, N>(
        &self,
        nodes: I,
        node_type: &str,
        common: &Attributes,
    ) -> GraphResult<Option<usize>>
    where
        I: IntoIterator<Item = N>,
        N: Into<NodeInput>,
    {
        let node_schema = self.context.schema.node(node_type)?;
        let mut batch = Vec::new();
        for node in nodes {
            let NodeInput { id, mut attributes } = node.into();
            for (name, value) in common {
                attributes.insert(name.clone(), value.clone());
            }
            node_schema.validate_attributes(node_type, &attributes)?;
            batch.push((id, attributes));
        }
        debug!("Upserting {} node(s) of type '{}'", batch.len(), node_type);
        Ok(discard_failure(
            self.context.transport().upsert_nodes(node_type, &batch),
            "Error adding nodes",
        ))
    }

    /// Returns `true` only when the remote reports at least one deleted node
    pub fn remove_node(&self, node_id: &str, node_type: &str) -> bool {
        discard_failure(
            self.context.transport().delete_node(node_type, node_id),
            format_args!("Error removing node {}", node_id),
        )
        .is_some_and(|deleted| deleted > 0)
    }

    pub fn has_node(&self, node_id: &str, node_type: &str) -> bool {
        discard_failure(
            self.context.transport().retrieve_node(node_type, node_id),
            format_args!("Error checking node {}", node_id),
        )
        .is_some_and(|records| !records.is_empty())
    }

    /// Attributes of one node
    ///
    /// A remote not-found error propagates as [`GraphError::NotFound`]; any
    /// other transport failure, or an empty result, yields `Ok(None)`.
    pub fn get_node_data(
        &self,
        node_id: &str,
        node_type: &str,
    ) -> GraphResult<Option<Map<String, Value>>> {
        match self.context.transport().retrieve_node(node_type, node_id) {
            Ok(records) => Ok(records.first().and_then(record_attributes).cloned()),
            Err(e) if e.is_not_found() => Err(GraphError::NotFound(format!(
                "node '{}' of type '{}'",
                node_id, node_type
            ))),
            Err(e) => {
                error!("Error retrieving node {}: {}", node_id, e);
                Ok(None)
            }
        }
    }

    /// Sample of the edges incident to one node, at most
    /// `num_edge_samples` of them
    pub fn get_node_edges(
        &self,
        node_id: &str,
        node_type: &str,
        edge_types: &[String],
    ) -> GraphResult<Vec<EdgeKey>> {
        let query = compile_node_edges_query(
            self.context.graph_name(),
            node_type,
            node_id,
            edge_types,
            self.context.options.num_edge_samples,
        )?;
        match self.context.adapter.run_interpreted(&query) {
            Ok(response) => Ok(edge_keys(&self.context.schema, &response)),
            Err(e) => {
                error!("Error retrieving edges for node {}: {}", node_id, e);
                Ok(Vec::new())
            }
        }
    }

    /// Delete every node of every type; stops at the first failure
    pub fn clear(&self) -> bool {
        for node_type in self.context.schema.nodes().keys() {
            if let Err(e) = self.context.transport().delete_nodes(node_type) {
                error!("Error clearing graph: {}", e);
                return false;
            }
        }
        true
    }
}
