// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Edge retrieval spec

use super::{
    check_aliases, check_limit, check_projection, normalize_filter, SpecResult,
    DEFAULT_EDGE_ALIAS, DEFAULT_START_ALIAS, DEFAULT_TARGET_ALIAS,
};
use crate::schema::GraphSchema;

/// Validated edge retrieval request
///
/// Empty type lists mean "any type" for that position of the pattern.
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeSpec {
    pub(crate) source_node_types: Vec<String>,
    pub(crate) source_alias: String,
    pub(crate) edge_types: Vec<String>,
    pub(crate) edge_alias: String,
    pub(crate) target_node_types: Vec<String>,
    pub(crate) target_alias: String,
    pub(crate) filter: Option<String>,
    pub(crate) return_attributes: Option<Vec<String>>,
    pub(crate) limit: Option<usize>,
}

impl EdgeSpec {
    pub fn builder() -> EdgeSpecBuilder {
        EdgeSpecBuilder::default()
    }

    pub fn source_node_types(&self) -> &[String] {
        &self.source_node_types
    }

    pub fn source_alias(&self) -> &str {
        &self.source_alias
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

#[derive(Debug, Clone)]
pub struct EdgeSpecBuilder {
    source_node_types: Vec<String>,
    source_alias: String,
    edge_types: Vec<String>,
    edge_alias: String,
    target_node_types: Vec<String>,
    target_alias: String,
    filter: Option<String>,
    return_attributes: Option<Vec<String>>,
    limit: Option<usize>,
}

impl Default for EdgeSpecBuilder {
    fn default() -> Self {
        Self {
            source_node_types: Vec::new(),
            source_alias: DEFAULT_START_ALIAS.to_string(),
            edge_types: Vec::new(),
            edge_alias: DEFAULT_EDGE_ALIAS.to_string(),
            target_node_types: Vec::new(),
            target_alias: DEFAULT_TARGET_ALIAS.to_string(),
            filter: None,
            return_attributes: None,
            limit: None,
        }
    }
}

fn collect<I, S>(items: I) -> impl Iterator<Item = String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    items.into_iter().map(Into::into)
}

impl EdgeSpecBuilder {
    pub fn source_node_type(mut self, node_type: impl Into<String>) -> Self {
        self.source_node_types.push(node_type.into());
        self
    }

    pub fn source_node_types<I, S>(mut self, node_types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.source_node_types.extend(collect(node_types));
        self
    }

    pub fn source_alias(mut self, alias: impl Into<String>) -> Self {
        self.source_alias = alias.into();
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
        self.edge_types.extend(collect(edge_types));
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
        self.target_node_types.extend(collect(node_types));
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

    /// Edge attributes to return; endpoint ids are always included
    pub fn return_attributes<I, S>(mut self, attributes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.return_attributes = Some(collect(attributes).collect());
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn build(self) -> SpecResult<EdgeSpec> {
        check_aliases(&[&self.source_alias, &self.edge_alias, &self.target_alias])?;
        check_projection(&self.return_attributes)?;
        check_limit(self.limit)?;
        Ok(EdgeSpec {
            source_node_types: self.source_node_types,
            source_alias: self.source_alias,
            edge_types: self.edge_types,
            edge_alias: self.edge_alias,
            target_node_types: self.target_node_types,
            target_alias: self.target_alias,
            filter: normalize_filter(self.filter),
            return_attributes: self.return_attributes,
            limit: self.limit,
        })
    }

    /// Build the spec after checking every named node and edge type
    pub fn build_with_schema(self, schema: &GraphSchema) -> SpecResult<EdgeSpec> {
        for node_type in self.source_node_types.iter().chain(&self.target_node_types) {
            schema.node(node_type)?;
        }
        for edge_type in &self.edge_types {
            schema.edge(edge_type)?;
        }
        self.build()
    }
}
