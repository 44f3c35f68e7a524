// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Node retrieval spec

use super::{
    check_alias, check_limit, check_projection, normalize_filter, SpecError, SpecResult,
    DEFAULT_START_ALIAS,
};
use crate::schema::GraphSchema;

/// Which nodes seed a node retrieval
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeTarget {
    /// All nodes of one type
    Type(String),
    /// All nodes of every type
    AllTypes,
}

/// Validated node retrieval request
///
/// # Examples
///
/// ```no_run
/// # use tigergraphx::spec::NodeSpec;
/// let spec = NodeSpec::builder()
///     .node_type("Community")
///     .filter("s.rank > 0")
///     .return_attributes(["id", "rank"])
///     .limit(10)
///     .build()?;
/// # Ok::<(), tigergraphx::spec::SpecError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct NodeSpec {
    pub(crate) target: NodeTarget,
    pub(crate) alias: String,
    pub(crate) filter: Option<String>,
    pub(crate) return_attributes: Option<Vec<String>>,
    pub(crate) limit: Option<usize>,
}

impl NodeSpec {
    pub fn builder() -> NodeSpecBuilder {
        NodeSpecBuilder::default()
    }

    pub fn target(&self) -> &NodeTarget {
        &self.target
    }

    /// Node type when a single type was requested
    pub fn node_type(&self) -> Option<&str> {
        match &self.target {
            NodeTarget::Type(name) => Some(name),
            NodeTarget::AllTypes => None,
        }
    }

    pub fn alias(&self) -> &str {
        &self.alias
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

/// Builder for [`NodeSpec`]
#[derive(Debug, Clone)]
pub struct NodeSpecBuilder {
    node_type: Option<String>,
    all_node_types: bool,
    alias: String,
    filter: Option<String>,
    return_attributes: Option<Vec<String>>,
    limit: Option<usize>,
}

impl Default for NodeSpecBuilder {
    fn default() -> Self {
        Self {
            node_type: None,
            all_node_types: false,
            alias: DEFAULT_START_ALIAS.to_string(),
            filter: None,
            return_attributes: None,
            limit: None,
        }
    }
}

impl NodeSpecBuilder {
    pub fn node_type(mut self, node_type: impl Into<String>) -> Self {
        self.node_type = Some(node_type.into());
        self
    }

    /// Seed from every node type; takes precedence over [`Self::node_type`]
    pub fn all_node_types(mut self) -> Self {
        self.all_node_types = true;
        self
    }

    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = alias.into();
        self
    }

    /// Predicate in the query dialect, referencing the node alias
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

    /// Build the spec; a node type (or all node types) must be given
    pub fn build(self) -> SpecResult<NodeSpec> {
        let target = if self.all_node_types {
            NodeTarget::AllTypes
        } else {
            match self.node_type.as_deref().filter(|t| !t.is_empty()) {
                Some(name) => NodeTarget::Type(name.to_string()),
                None => return Err(SpecError::MissingNodeType),
            }
        };
        self.finish(target)
    }

    /// Build the spec, resolving an omitted node type through the schema
    pub fn build_with_schema(self, schema: &GraphSchema) -> SpecResult<NodeSpec> {
        let target = if self.all_node_types {
            NodeTarget::AllTypes
        } else {
            NodeTarget::Type(schema.resolve_node_type(self.node_type.as_deref())?)
        };
        self.finish(target)
    }

    fn finish(self, target: NodeTarget) -> SpecResult<NodeSpec> {
        check_alias(&self.alias)?;
        check_projection(&self.return_attributes)?;
        check_limit(self.limit)?;
        Ok(NodeSpec {
            target,
            alias: self.alias,
            filter: normalize_filter(self.filter),
            return_attributes: self.return_attributes,
            limit: self.limit,
        })
    }
}
