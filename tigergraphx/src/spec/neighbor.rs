// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Neighbor traversal spec

use super::{
    check_aliases, check_limit, check_projection, normalize_filter, SpecError, SpecResult,
    DEFAULT_EDGE_ALIAS, DEFAULT_START_ALIAS, DEFAULT_TARGET_ALIAS,
};
use crate::schema::GraphSchema;

/// Validated one-hop traversal request from a set of start nodes
///
/// Empty edge or target type lists mean "any type". Edge type names are
/// passed through verbatim, so reverse-edge names (`reverse_<edge>`) and
/// direction-marked names are accepted.
#[derive(Debug, Clone, PartialEq)]
pub struct NeighborSpec {
    pub(crate) start_nodes: Vec<String>,
    pub(crate) start_node_type: String,
    pub(crate) start_alias: String,
    pub(crate) edge_types: Vec<String>,
    pub(crate) edge_alias: String,
    pub(crate) target_node_types: Vec<String>,
    pub(crate) target_alias: String,
    pub(crate) filter: Option<String>,
    pub(crate) return_attributes: Option<Vec<String>>,
    pub(crate) limit: Option<usize>,
}

impl NeighborSpec {
    pub fn builder<I, S>(start_nodes: I) -> NeighborSpecBuilder
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        NeighborSpecBuilder::new(start_nodes.into_iter().map(Into::into).collect())
    }

    pub fn start_nodes(&self) -> &[String] {
        &self.start_nodes
    }

    pub fn start_node_type(&self) -> &str {
        &self.start_node_type
    }

    pub fn start_alias(&self) -> &str {
        &self.start_alias
    }

    pub fn edge_types(&self) -> &[String] {
        &self.edge_types
    }

    pub fn edge_alias(&self) -> &str {
        &self.edge_alias
    }

    pub fn target_node_types(&self) -> &[String] {
        &self.target_node_types
    }

    pub fn target_alias(&self) -> &str {
        &self.target_alias
    }

    pub fn filter(&self) -> Option<&str> {
        self.filter.as_deref()
    }

    pub fn return_attributes(&self) -> Option<&[String]> {
        self.return_attributes.as_deref()
    }

    pub fn limit(&self) -> Option<usize> {
        self.limit
    }
}

/// Builder for [`NeighborSpec`]
#[derive(Debug, Clone)]
pub struct NeighborSpecBuilder {
    start_nodes: Vec<String>,
    start_node_type: Option<String>,
    start_alias: String,
    edge_types: Vec<String>,
    edge_alias: String,
    target_node_types: Vec<String>,
    target_alias: String,
    filter: Option<String>,
    return_attributes: Option<Vec<String>>,
    limit: Option<usize>,
}

impl NeighborSpecBuilder {
    fn new(start_nodes: Vec<String>) -> Self {
        Self {
            start_nodes,
            start_node_type: None,
            start_alias: DEFAULT_START_ALIAS.to_string(),
            edge_types: Vec::new(),
            edge_alias: DEFAULT_EDGE_ALIAS.to_string(),
            target_node_types: Vec::new(),
            target_alias: DEFAULT_TARGET_ALIAS.to_string(),
            filter: None,
            return_attributes: None,
            limit: None,
        }
    }

    pub fn start_node_type(mut self, node_type: impl Into<String>) -> Self {
        self.start_node_type = Some(node_type.into());
        self
    }

    pub fn start_alias(mut self, alias: impl Into<String>) -> Self {
        self.start_alias = alias.into();
        self
    }

    pub fn edge_type(mut self, edge_type: impl Into<String>) -> Self {
        self.edge_types.push(edge_type.into());
        self
    }

    pub fn edge_types<I, S>(mut self, edge_types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.edge_types.extend(edge_types.into_iter().map(Into::into));
        self
    }

    pub fn edge_alias(mut self, alias: impl Into<String>) -> Self {
        self.edge_alias = alias.into();
        self
    }

    pub fn target_node_type(mut self, node_type: impl Into<String>) -> Self {
        self.target_node_types.push(node_type.into());
        self
    }

    pub fn target_node_types<I, S>(mut self, node_types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.target_node_types
            .extend(node_types.into_iter().map(Into::into));
        self
    }

    pub fn target_alias(mut self, alias: impl Into<String>) -> Self {
        self.target_alias = alias.into();
        self
    }

    pub fn filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = Some(filter.into());
        self
    }

    pub fn return_attributes<I, S>(mut self, attributes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.return_attributes = Some(attributes.into_iter().map(Into::into).collect());
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn build(self) -> SpecResult<NeighborSpec> {
        let start_node_type = match self.start_node_type.as_deref().filter(|t| !t.is_empty()) {
            Some(name) => name.to_string(),
            None => return Err(SpecError::MissingNodeType),
        };
        self.finish(start_node_type)
    }

    /// Build the spec, resolving the start node type and checking target
    /// node types against the schema
    pub fn build_with_schema(self, schema: &GraphSchema) -> SpecResult<NeighborSpec> {
        let start_node_type = schema.resolve_node_type(self.start_node_type.as_deref())?;
        for target in &self.target_node_types {
            schema.node(target)?;
        }
        self.finish(start_node_type)
    }

    fn finish(self, start_node_type: String) -> SpecResult<NeighborSpec> {
        if self.start_nodes.is_empty() {
            return Err(SpecError::EmptyStartNodes);
        }
        check_aliases(&[&self.start_alias, &self.edge_alias, &self.target_alias])?;
        check_projection(&self.return_attributes)?;
        check_limit(self.limit)?;
        Ok(NeighborSpec {
            start_nodes: self.start_nodes,
            start_node_type,
            start_alias: self.start_alias,
            edge_types: self.edge_types,
            edge_alias: self.edge_alias,
            target_node_types: self.target_node_types,
            target_alias: self.target_alias,
            filter: normalize_filter(self.filter),
            return_attributes: self.return_attributes,
            limit: self.limit,
        })
    }
}
