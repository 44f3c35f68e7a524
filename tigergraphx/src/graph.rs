// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Graph facade
//!
//! [`Graph`] owns the schema for its lifetime, resolves omitted node and
//! edge types through it, and delegates to the per-concern managers.
//! Type resolution failures are always returned as errors; remote failures
//! follow the policy of the manager handling the call.

use serde_json::{Map, Value};
use std::sync::Arc;

use crate::config::{GraphConfig, GraphOptions};
use crate::error::GraphResult;
use crate::exec::{QueryResponse, Transport};
use crate::managers::{
    EdgeInput, EdgeManager, EdgeTypes, GraphContext, NodeInput, NodeManager, QueryManager,
    SchemaManager, StatisticsManager,
};
use crate::query::QueryParams;
use crate::result::{DataFrame, EdgeKey};
use crate::schema::GraphSchema;
use crate::spec::{EdgeSpec, NeighborSpec, NodeSpec};
use crate::value::Attributes;

fn owned(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

pub struct Graph {
    context: Arc<GraphContext>,
    node_manager: NodeManager,
    edge_manager: EdgeManager,
    query_manager: QueryManager,
    statistics_manager: StatisticsManager,
    schema_manager: SchemaManager,
}

impl Graph {
    /// Wrap an existing remote graph
    pub fn new(schema: GraphSchema, transport: Arc<dyn Transport>) -> Self {
        Self::with_options(schema, transport, GraphOptions::default())
    }

    pub fn with_options(
        schema: GraphSchema,
        transport: Arc<dyn Transport>,
        options: GraphOptions,
    ) -> Self {
        let context = Arc::new(GraphContext::new(schema, transport, options));
        Self {
            node_manager: NodeManager::new(Arc::clone(&context)),
            edge_manager: EdgeManager::new(Arc::clone(&context)),
            query_manager: QueryManager::new(Arc::clone(&context)),
            statistics_manager: StatisticsManager::new(Arc::clone(&context)),
            schema_manager: SchemaManager::new(Arc::clone(&context)),
            context,
        }
    }

    pub fn from_config(config: GraphConfig, transport: Arc<dyn Transport>) -> Self {
        Self::with_options(config.schema, transport, config.options)
    }

    /// Build the graph, create its schema on the remote side (honoring
    /// `drop_existing_graph`) and install the degree query
    pub fn create(config: GraphConfig, transport: Arc<dyn Transport>) -> GraphResult<Self> {
        let graph = Self::from_config(config, transport);
        graph.create_schema(graph.context.options.drop_existing_graph)?;
        graph.install_queries()?;
        Ok(graph)
    }

    pub fn name(&self) -> &str {
        self.context.graph_name()
    }

    pub fn schema(&self) -> &GraphSchema {
        self.context.schema()
    }

    pub fn options(&self) -> &GraphOptions {
        self.context.options()
    }

    fn node_type(&self, node_type: Option<&str>) -> GraphResult<String> {
        Ok(self.schema().resolve_node_type(node_type)?)
    }

    fn edge_types(
        &self,
        src_type: Option<&str>,
        edge_type: Option<&str>,
        tgt_type: Option<&str>,
    ) -> GraphResult<EdgeTypes> {
        let (src_type, edge_type, tgt_type) =
            self.schema()
                .resolve_edge_endpoints(src_type, edge_type, tgt_type)?;
        Ok(EdgeTypes {
            src_type,
            edge_type,
            tgt_type,
        })
    }

    // ------------------------------------------------------------------
    // Schema
    // ------------------------------------------------------------------

    pub fn create_schema(&self, drop_existing_graph: bool) -> GraphResult<()> {
        self.schema_manager.create_schema(drop_existing_graph)
    }

    pub fn drop_graph(&self) -> GraphResult<()> {
        self.schema_manager.drop_graph()
    }

    pub fn install_queries(&self) -> GraphResult<()> {
        self.schema_manager.install_queries()
    }

    // ------------------------------------------------------------------
    // Nodes
    // ------------------------------------------------------------------

    pub fn add_node(
        &self,
        node_id: &str,
        node_type: Option<&str>,
        attributes: &Attributes,
    ) -> GraphResult<Option<usize>> {
        let node_type = self.node_type(node_type)?;
        self.node_manager.add_node(node_id, &node_type, attributes)
    }

    pub fn add_nodes_from<I, N>(
        &self,
        nodes: I,
        node_type: Option<&str>,
        common: &Attributes,
    ) -> GraphResult<Option<usize>>
    where
        I: IntoIterator<Item = N>,
        N: Into<NodeInput>,
    {
        let node_type = self.node_type(node_type)?;
        self.node_manager.add_nodes_from(nodes, &node_type, common)
    }

    pub fn remove_node(&self, node_id: &str, node_type: Option<&str>) -> GraphResult<bool> {
        let node_type = self.node_type(node_type)?;
        Ok(self.node_manager.remove_node(node_id, &node_type))
    }

    pub fn has_node(&self, node_id: &str, node_type: Option<&str>) -> GraphResult<bool> {
        let node_type = self.node_type(node_type)?;
        Ok(self.node_manager.has_node(node_id, &node_type))
    }

    pub fn get_node_data(
        &self,
        node_id: &str,
        node_type: Option<&str>,
    ) -> GraphResult<Option<Map<String, Value>>> {
        let node_type = self.node_type(node_type)?;
        self.node_manager.get_node_data(node_id, &node_type)
    }

    pub fn get_node_edges(
        &self,
        node_id: &str,
        node_type: Option<&str>,
        edge_types: &[&str],
    ) -> GraphResult<Vec<EdgeKey>> {
        let node_type = self.node_type(node_type)?;
        self.node_manager
            .get_node_edges(node_id, &node_type, &owned(edge_types))
    }

    pub fn degree(
        &self,
        node_id: &str,
        node_type: Option<&str>,
        edge_types: &[&str],
    ) -> GraphResult<usize> {
        let node_type = self.node_type(node_type)?;
        Ok(self
            .statistics_manager
            .degree(node_id, &node_type, &owned(edge_types)))
    }

    /// Node count of one type, or of every node type when omitted
    pub fn number_of_nodes(&self, node_type: Option<&str>) -> GraphResult<usize> {
        let node_types = match node_type.filter(|t| !t.is_empty()) {
            Some(name) => vec![self.node_type(Some(name))?],
            None => self.schema().nodes().keys().cloned().collect(),
        };
        Ok(self.statistics_manager.number_of_nodes(&node_types))
    }

    /// Edge count of one type, or of every edge type when omitted
    pub fn number_of_edges(&self, edge_type: Option<&str>) -> GraphResult<usize> {
        let edge_types = match edge_type.filter(|t| !t.is_empty()) {
            Some(name) => vec![self.schema().resolve_edge_type(Some(name))?],
            None => self.schema().edges().keys().cloned().collect(),
        };
        Ok(self.statistics_manager.number_of_edges(&edge_types))
    }

    /// Delete all nodes (and with them all edges) of every node type
    pub fn clear(&self) -> bool {
        self.node_manager.clear()
    }

    // ------------------------------------------------------------------
    // Edges
    // ------------------------------------------------------------------

    pub fn add_edge(
        &self,
        src_id: &str,
        tgt_id: &str,
        src_type: Option<&str>,
        edge_type: Option<&str>,
        tgt_type: Option<&str>,
        attributes: &Attributes,
    ) -> GraphResult<Option<usize>> {
        let types = self.edge_types(src_type, edge_type, tgt_type)?;
        self.edge_manager.add_edge(src_id, tgt_id, &types, attributes)
    }

    pub fn add_edges_from<I, E>(
        &self,
        edges: I,
        src_type: Option<&str>,
        edge_type: Option<&str>,
        tgt_type: Option<&str>,
        common: &Attributes,
    ) -> GraphResult<Option<usize>>
    where
        I: IntoIterator<Item = E>,
        E: Into<EdgeInput>,
    {
        let types = self.edge_types(src_type, edge_type, tgt_type)?;
        self.edge_manager.add_edges_from(edges, &types, common)
    }

    pub fn has_edge(
        &self,
        src_id: &str,
        tgt_id: &str,
        src_type: Option<&str>,
        edge_type: Option<&str>,
        tgt_type: Option<&str>,
    ) -> GraphResult<bool> {
        let types = self.edge_types(src_type, edge_type, tgt_type)?;
        Ok(self.edge_manager.has_edge(src_id, tgt_id, &types))
    }

    pub fn get_edge_data(
        &self,
        src_id: &str,
        tgt_id: &str,
        src_type: Option<&str>,
        edge_type: Option<&str>,
        tgt_type: Option<&str>,
    ) -> GraphResult<Option<Map<String, Value>>> {
        let types = self.edge_types(src_type, edge_type, tgt_type)?;
        self.edge_manager.get_edge_data(src_id, tgt_id, &types)
    }

    // ------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------

    /// Run an installed query; `None` on failure
    pub fn run_query(&self, query_name: &str, params: &QueryParams) -> Option<QueryResponse> {
        self.query_manager.run_query(query_name, params)
    }

    /// All nodes of one type (or of the sole type when omitted)
    pub fn get_nodes(&self, node_type: Option<&str>) -> GraphResult<DataFrame> {
        let mut builder = NodeSpec::builder();
        if let Some(node_type) = node_type {
            builder = builder.node_type(node_type);
        }
        let spec = builder.build_with_schema(self.schema())?;
        self.get_nodes_from_spec(&spec)
    }

    pub fn get_nodes_from_spec(&self, spec: &NodeSpec) -> GraphResult<DataFrame> {
        self.query_manager.get_nodes_from_spec(spec)
    }

    /// Neighbors of a set of start nodes over any edge type
    pub fn get_neighbors(
        &self,
        start_nodes: &[&str],
        start_node_type: Option<&str>,
    ) -> GraphResult<DataFrame> {
        let mut builder = NeighborSpec::builder(start_nodes.iter().copied());
        if let Some(node_type) = start_node_type {
            builder = builder.start_node_type(node_type);
        }
        let spec = builder.build_with_schema(self.schema())?;
        self.get_neighbors_from_spec(&spec)
    }

    pub fn get_neighbors_from_spec(&self, spec: &NeighborSpec) -> GraphResult<DataFrame> {
        self.query_manager.get_neighbors_from_spec(spec)
    }

    /// All edges of one type (or of any type when omitted)
    pub fn get_edges(&self, edge_type: Option<&str>) -> GraphResult<DataFrame> {
        let mut builder = EdgeSpec::builder();
        if let Some(edge_type) = edge_type.filter(|t| !t.is_empty()) {
            builder = builder.edge_type(edge_type);
        }
        let spec = builder.build_with_schema(self.schema())?;
        self.get_edges_from_spec(&spec)
    }

    pub fn get_edges_from_spec(&self, spec: &EdgeSpec) -> GraphResult<DataFrame> {
        self.query_manager.get_edges_from_spec(spec)
    }
}
