// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Spec-driven retrieval
//!
//! Compile errors propagate. Transport failures are logged by the
//! execution adapter and turned into an empty [`DataFrame`].

use std::sync::Arc;

use super::context::GraphContext;
use crate::error::GraphResult;
use crate::exec::{discard_failure, QueryResponse};
use crate::query::{
    compile_edge_query, compile_neighbor_query, compile_node_query, CompiledQuery, QueryParams,
};
use crate::result::{normalize_edges, normalize_nodes, DataFrame};
use crate::spec::{EdgeSpec, NeighborSpec, NodeSpec};

pub struct QueryManager {
    context: Arc<GraphContext>,
}

impl QueryManager {
    pub fn new(context: Arc<GraphContext>) -> Self {
        Self { context }
    }

    /// Run an installed query; `None` on failure
    pub fn run_query(&self, query_name: &str, params: &QueryParams) -> Option<QueryResponse> {
        self.context.adapter.run_installed_or_none(query_name, params)
    }

    fn run(&self, query: &CompiledQuery) -> Option<QueryResponse> {
        discard_failure(
            self.context.adapter.run_interpreted(query),
            "Error running interpreted query",
        )
    }

    pub fn get_nodes_from_spec(&self, spec: &NodeSpec) -> GraphResult<DataFrame> {
        let query = compile_node_query(self.context.graph_name(), spec)?;
        Ok(self.run(&query).map_or_else(DataFrame::empty, |response| {
            normalize_nodes(&self.context.schema, &response, spec.return_attributes())
        }))
    }

    pub fn get_neighbors_from_spec(&self, spec: &NeighborSpec) -> GraphResult<DataFrame> {
        let query = compile_neighbor_query(self.context.graph_name(), spec)?;
        Ok(self.run(&query).map_or_else(DataFrame::empty, |response| {
            normalize_nodes(&self.context.schema, &response, spec.return_attributes())
        }))
    }

    pub fn get_edges_from_spec(&self, spec: &EdgeSpec) -> GraphResult<DataFrame> {
        let query = compile_edge_query(self.context.graph_name(), spec)?;
        Ok(self.run(&query).map_or_else(DataFrame::empty, |response| {
            normalize_edges(&response, spec.return_attributes(), spec.limit())
        }))
    }
}
