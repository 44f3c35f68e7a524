// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Node, edge and graph schema definitions
//!
//! All three types validate their invariants in their constructors and in
//! deserialization (through `serde(try_from)`), so a value of any of these
//! types is always well-formed.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::Path;

use super::keywords::is_reserved_keyword;
use super::types::{AttributeSchema, VectorAttributeSchema};
use super::{ElementKind, SchemaError, SchemaResult};
use crate::value::{AttributeValue, Attributes};

fn default_primary_key() -> String {
    "id".to_string()
}

fn check_attribute_names(attributes: &IndexMap<String, AttributeSchema>) -> SchemaResult<()> {
    for (name, attr) in attributes {
        if is_reserved_keyword(name) {
            return Err(SchemaError::ReservedAttributeName(name.clone()));
        }
        attr.check_default(name)?;
    }
    Ok(())
}

fn check_attribute_values(
    type_name: &str,
    schema: &IndexMap<String, AttributeSchema>,
    values: &Attributes,
) -> SchemaResult<()> {
    for (name, value) in values {
        let attr = schema
            .get(name)
            .ok_or_else(|| SchemaError::UnknownAttribute {
                type_name: type_name.to_string(),
                attribute: name.clone(),
            })?;
        attr.check_value(name, value)?;
    }
    Ok(())
}

/// Schema of a node (vertex) type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "NodeSchemaDef")]
pub struct NodeSchema {
    primary_key: String,
    attributes: IndexMap<String, AttributeSchema>,
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    vector_attributes: IndexMap<String, VectorAttributeSchema>,
}

#[derive(Deserialize)]
struct NodeSchemaDef {
    #[serde(default = "default_primary_key")]
    primary_key: String,
    #[serde(default)]
    attributes: IndexMap<String, AttributeSchema>,
    #[serde(default)]
    vector_attributes: IndexMap<String, VectorAttributeSchema>,
}

impl TryFrom<NodeSchemaDef> for NodeSchema {
    type Error = SchemaError;

    fn try_from(def: NodeSchemaDef) -> SchemaResult<Self> {
        NodeSchema::new(def.primary_key, def.attributes, def.vector_attributes)
    }
}

impl NodeSchema {
    /// Create a node schema, validating the primary key and attribute names
    pub fn new(
        primary_key: impl Into<String>,
        attributes: IndexMap<String, AttributeSchema>,
        vector_attributes: IndexMap<String, VectorAttributeSchema>,
    ) -> SchemaResult<Self> {
        let primary_key = primary_key.into();
        check_attribute_names(&attributes)?;
        if !attributes.contains_key(&primary_key) {
            return Err(SchemaError::MissingPrimaryKey(primary_key));
        }
        for (name, vector) in &vector_attributes {
            if is_reserved_keyword(name) {
                return Err(SchemaError::ReservedVectorAttributeName(name.clone()));
            }
            vector.check_dimension(name)?;
        }
        Ok(Self {
            primary_key,
            attributes,
            vector_attributes,
        })
    }

    pub fn primary_key(&self) -> &str {
        &self.primary_key
    }

    pub fn attributes(&self) -> &IndexMap<String, AttributeSchema> {
        &self.attributes
    }

    pub fn vector_attributes(&self) -> &IndexMap<String, VectorAttributeSchema> {
        &self.vector_attributes
    }

    /// Check an attribute bag against this node type
    pub fn validate_attributes(&self, type_name: &str, values: &Attributes) -> SchemaResult<()> {
        check_attribute_values(type_name, &self.attributes, values)
    }
}

/// Schema of an edge type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "EdgeSchemaDef")]
pub struct EdgeSchema {
    is_directed_edge: bool,
    from_node_type: String,
    to_node_type: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    discriminator: Vec<String>,
    attributes: IndexMap<String, AttributeSchema>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum DiscriminatorDef {
    Single(String),
    Multiple(Vec<String>),
}

#[derive(Deserialize)]
struct EdgeSchemaDef {
    is_directed_edge: bool,
    from_node_type: String,
    to_node_type: String,
    #[serde(default)]
    discriminator: Option<DiscriminatorDef>,
    #[serde(default)]
    attributes: IndexMap<String, AttributeSchema>,
}

impl TryFrom<EdgeSchemaDef> for EdgeSchema {
    type Error = SchemaError;

    fn try_from(def: EdgeSchemaDef) -> SchemaResult<Self> {
        let discriminator = match def.discriminator {
            None => Vec::new(),
            Some(DiscriminatorDef::Single(name)) => vec![name],
            Some(DiscriminatorDef::Multiple(names)) => names,
        };
        EdgeSchema::new(
            def.is_directed_edge,
            def.from_node_type,
            def.to_node_type,
            discriminator,
            def.attributes,
        )
    }
}

impl EdgeSchema {
    /// Create an edge schema, validating attribute names and discriminators
    pub fn new(
        is_directed_edge: bool,
        from_node_type: impl Into<String>,
        to_node_type: impl Into<String>,
        discriminator: Vec<String>,
        attributes: IndexMap<String, AttributeSchema>,
    ) -> SchemaResult<Self> {
        check_attribute_names(&attributes)?;
        if let Some(missing) = discriminator.iter().find(|d| !attributes.contains_key(*d)) {
            return Err(SchemaError::MissingDiscriminator(missing.clone()));
        }
        Ok(Self {
            is_directed_edge,
            from_node_type: from_node_type.into(),
            to_node_type: to_node_type.into(),
            discriminator,
            attributes,
        })
    }

    pub fn is_directed(&self) -> bool {
        self.is_directed_edge
    }

    pub fn from_node_type(&self) -> &str {
        &self.from_node_type
    }

    pub fn to_node_type(&self) -> &str {
        &self.to_node_type
    }

    pub fn discriminator(&self) -> &[String] {
        &self.discriminator
    }

    pub fn attributes(&self) -> &IndexMap<String, AttributeSchema> {
        &self.attributes
    }

    /// Check an attribute bag against this edge type
    pub fn validate_attributes(&self, type_name: &str, values: &Attributes) -> SchemaResult<()> {
        check_attribute_values(type_name, &self.attributes, values)
    }

    /// Discriminator values taken from an attribute bag, in declaration order
    pub fn discriminator_values<'a>(&self, values: &'a Attributes) -> Vec<&'a AttributeValue> {
        self.discriminator
            .iter()
            .filter_map(|name| values.get(name))
            .collect()
    }
}

/// Logical schema of a whole graph
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "GraphSchemaDef")]
pub struct GraphSchema {
    graph_name: String,
    nodes: IndexMap<String, NodeSchema>,
    edges: IndexMap<String, EdgeSchema>,
}

#[derive(Deserialize)]
struct GraphSchemaDef {
    graph_name: String,
    #[serde(default)]
    nodes: IndexMap<String, NodeSchema>,
    #[serde(default)]
    edges: IndexMap<String, EdgeSchema>,
}

impl TryFrom<GraphSchemaDef> for GraphSchema {
    type Error = SchemaError;

    fn try_from(def: GraphSchemaDef) -> SchemaResult<Self> {
        GraphSchema::new(def.graph_name, def.nodes, def.edges)
    }
}

impl GraphSchema {
    /// Create a graph schema; every edge endpoint must name a defined node type
    pub fn new(
        graph_name: impl Into<String>,
        nodes: IndexMap<String, NodeSchema>,
        edges: IndexMap<String, EdgeSchema>,
    ) -> SchemaResult<Self> {
        for (edge_name, edge) in &edges {
            if !nodes.contains_key(&edge.from_node_type) || !nodes.contains_key(&edge.to_node_type)
            {
                return Err(SchemaError::UndefinedEndpoint {
                    edge: edge_name.clone(),
                    from: edge.from_node_type.clone(),
                    to: edge.to_node_type.clone(),
                });
            }
        }
        Ok(Self {
            graph_name: graph_name.into(),
            nodes,
            edges,
        })
    }

    pub fn from_json_str(json: &str) -> SchemaResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> SchemaResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    pub fn to_json_string(&self) -> SchemaResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn graph_name(&self) -> &str {
        &self.graph_name
    }

    pub fn nodes(&self) -> &IndexMap<String, NodeSchema> {
        &self.nodes
    }

    pub fn edges(&self) -> &IndexMap<String, EdgeSchema> {
        &self.edges
    }

    pub fn node(&self, node_type: &str) -> SchemaResult<&NodeSchema> {
        self.nodes
            .get(node_type)
            .ok_or_else(|| SchemaError::UnknownType {
                kind: ElementKind::Node,
                name: node_type.to_string(),
            })
    }

    pub fn edge(&self, edge_type: &str) -> SchemaResult<&EdgeSchema> {
        self.edges
            .get(edge_type)
            .ok_or_else(|| SchemaError::UnknownType {
                kind: ElementKind::Edge,
                name: edge_type.to_string(),
            })
    }

    /// Primary key attribute name of a node type, if the type is known
    pub fn primary_key_of(&self, node_type: &str) -> Option<&str> {
        self.nodes.get(node_type).map(|n| n.primary_key())
    }

    /// Resolve an optional node type reference
    ///
    /// An explicit (non-empty) name must be defined. When the name is
    /// omitted, the sole node type is returned; zero or several defined
    /// types is an ambiguity error.
    pub fn resolve_node_type(&self, explicit: Option<&str>) -> SchemaResult<String> {
        resolve(ElementKind::Node, explicit, self.nodes.keys())
    }

    /// Resolve an optional edge type reference, with the same rules as
    /// [`GraphSchema::resolve_node_type`]
    pub fn resolve_edge_type(&self, explicit: Option<&str>) -> SchemaResult<String> {
        resolve(ElementKind::Edge, explicit, self.edges.keys())
    }

    /// Resolve the edge type plus both endpoint node types of an edge
    /// reference. Omitted endpoint types are taken from the edge definition.
    pub fn resolve_edge_endpoints(
        &self,
        src_type: Option<&str>,
        edge_type: Option<&str>,
        tgt_type: Option<&str>,
    ) -> SchemaResult<(String, String, String)> {
        let edge_type = self.resolve_edge_type(edge_type)?;
        let edge = self.edge(&edge_type)?;
        let src = match src_type.filter(|s| !s.is_empty()) {
            Some(name) => self.node(name).map(|_| name.to_string())?,
            None => edge.from_node_type.clone(),
        };
        let tgt = match tgt_type.filter(|s| !s.is_empty()) {
            Some(name) => self.node(name).map(|_| name.to_string())?,
            None => edge.to_node_type.clone(),
        };
        Ok((src, edge_type, tgt))
    }
}

fn resolve<'a>(
    kind: ElementKind,
    explicit: Option<&str>,
    mut defined: impl ExactSizeIterator<Item = &'a String>,
) -> SchemaResult<String> {
    if let Some(name) = explicit.filter(|s| !s.is_empty()) {
        return if defined.any(|d| d == name) {
            Ok(name.to_string())
        } else {
            Err(SchemaError::UnknownType {
                kind,
                name: name.to_string(),
            })
        };
    }
    match defined.len() {
        1 => defined
            .next()
            .cloned()
            .ok_or_else(|| SchemaError::AmbiguousType {
                kind,
                hint: format!("no {} types", kind),
            }),
        0 => Err(SchemaError::AmbiguousType {
            kind,
            hint: format!("no {} types", kind),
        }),
        _ => Err(SchemaError::AmbiguousType {
            kind,
            hint: format!("multiple {} types", kind),
        }),
    }
}
