// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
// Single-edge operations

use log::{debug, error};
use serde_json::{Map, Value};
use std::sync::Arc;

use super::context::GraphContext;
use crate::error::{GraphError, GraphResult};
use crate::exec::discard_failure;
use crate::result::record_attributes;
use crate::value::Attributes;

/// An edge to add: endpoint ids, optionally with the edge's own attributes
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeInput {
    pub src_id: String,
    pub tgt_id: String,
    pub attributes: Attributes,
}

impl<S: Into<String>, T: Into<String>> From<(S, T)> for EdgeInput {
    fn from((src_id, tgt_id): (S, T)) -> Self {
        EdgeInput {
            src_id: src_id.into(),
            tgt_id: tgt_id.into(),
            attributes: Attributes::new(),
        }
    }
}

impl<S: Into<String>, T: Into<String>> From<(S, T, Attributes)> for EdgeInput {
    fn from((src_id, tgt_id, attributes): (S, T, Attributes)) -> Self {
        EdgeInput {
            src_id: src_id.into(),
            tgt_id: tgt_id.into(),
            attributes,
        }
    }
}

/// Fully resolved edge type triple
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeTypes {
    pub src_type: String,
    pub edge_type: String,
    pub tgt_type: String,
}

pub struct EdgeManager {
    context: Arc<GraphContext>,
}

impl EdgeManager {
    pub fn new(context: Arc<GraphContext>) -> Self {
        Self { context }
    }

    fn validate(&self, types: &EdgeTypes, attributes: &Attributes) -> GraphResult<()> {
        self.context
            .schema
            .edge(&types.edge_type)?
            .validate_attributes(&types.edge_type, attributes)?;
        Ok(())
    }

    /// Insert or update one edge; a transport failure yields `Ok(None)`
    pub fn add_edge(
        &self,
        src_id: &str,
        tgt_id: &str,
        types: &EdgeTypes,
        attributes: &Attributes,
    ) -> GraphResult<Option<usize>> {
        self.validate(types, attributes)?;
        Ok(discard_failure(
            self.context.transport().upsert_edge(
                &types.src_type,
                src_id,
                &types.edge_type,
                &types.tgt_type,
                tgt_id,
                attributes,
            ),
            format_args!("Error adding edge from {} to {}", src_id, tgt_id),
        ))
    }

    /// Add several edges of one type in a single batch; `common` wins on conflict
    pub fn add_edges_from<I, E>(
        &self,
        edges: I,
        types: &EdgeTypes,
        common: &Attributes,
    ) -> GraphResult<Option<usize>>
    where
        I: IntoIterator<Item = E>,
        E: Into<EdgeInput>,
    {
        let mut batch = Vec::new();
        for edge in edges {
            let EdgeInput {
                src_id,
                tgt_id,
                mut attributes,
            } = edge.into();
            for (name, value) in common {
                attributes.insert(name.clone(), value.clone());
            }
            self.validate(types, &attributes)?;
            batch.push((src_id, tgt_id, attributes));
        }
        debug!(
            "Upserting {} edge(s) of type '{}'",
            batch.len(),
            types.edge_type
        );
        Ok(discard_failure(
            self.context.transport().upsert_edges(
                &types.src_type,
                &types.edge_type,
                &types.tgt_type,
                &batch,
            ),
            "Error adding edges",
        ))
    }

    pub fn has_edge(&self, src_id: &str, tgt_id: &str, types: &EdgeTypes) -> bool {
        discard_failure(
            self.context.transport().get_edge_count(
                &types.src_type,
                src_id,
                &types.edge_type,
                &types.tgt_type,
                tgt_id,
            ),
            format_args!("Error checking edge from {} to {}", src_id, tgt_id),
        )
        .is_some_and(|count| count > 0)
    }

    /// Attributes of the edge between two nodes
    ///
    /// With parallel edges (discriminated edge types) the first edge
    /// returned by the remote is used.
    pub fn get_edge_data(
        &self,
        src_id: &str,
        tgt_id: &str,
        types: &EdgeTypes,
    ) -> GraphResult<Option<Map<String, Value>>> {
        let result = self.context.transport().get_edges(
            &types.src_type,
            src_id,
            &types.edge_type,
            &types.tgt_type,
            tgt_id,
        );
        match result {
            Ok(records) => Ok(records.first().and_then(record_attributes).cloned()),
            Err(e) if e.is_not_found() => Err(GraphError::NotFound(format!(
                "edge '{}' from '{}' to '{}'",
                types.edge_type, src_id, tgt_id
            ))),
            Err(e) => {
                error!(
                    "Error retrieving edge from {} to {}: {}",
                    src_id, tgt_id, e
                );
                Ok(None)
            }
        }
    }
}
