// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
// Schema module - logical graph schema model and validation
//
// Node types, edge types and their attributes are validated once at
// construction time; afterwards the schema is read-only and shared by the
// compiler, the normalizer and the managers.

pub mod ddl;
pub mod graph_schema;
pub mod keywords;
pub mod types;

pub use graph_schema::{EdgeSchema, GraphSchema, NodeSchema};
pub use keywords::is_reserved_keyword;
pub use types::{AttributeSchema, DataType, VectorAttributeSchema, VectorMetric};

use thiserror::Error;

/// Kind of schema element, used in ambiguity and lookup messages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    Node,
    Edge,
}

impl std::fmt::Display for ElementKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ElementKind::Node => write!(f, "node"),
            ElementKind::Edge => write!(f, "edge"),
        }
    }
}

#[derive(Error, Debug)]
pub enum SchemaError {
    #[error("Primary key '{0}' is not defined in attributes.")]
    MissingPrimaryKey(String),

    #[error("Attribute name '{0}' is a reserved keyword.")]
    ReservedAttributeName(String),

    #[error("Vector attribute name '{0}' is a reserved keyword.")]
    ReservedVectorAttributeName(String),

    #[error("Discriminator attribute '{0}' is not defined in attributes.")]
    MissingDiscriminator(String),

    #[error("Edge '{edge}' requires nodes '{from}' and '{to}' to be defined")]
    UndefinedEndpoint {
        edge: String,
        from: String,
        to: String,
    },

    #[error("Default value of attribute '{attribute}' must be of type {expected}, got {got}")]
    InvalidDefaultValue {
        attribute: String,
        expected: String,
        got: String,
    },

    #[error("Vector attribute '{0}' must have a dimension of at least 1")]
    InvalidDimension(String),

    #[error("Please specify a {kind} type, as the graph has {hint}.")]
    AmbiguousType { kind: ElementKind, hint: String },

    #[error("Unknown {kind} type: {name}")]
    UnknownType { kind: ElementKind, name: String },

    #[error("Unknown attribute '{attribute}' for type '{type_name}'")]
    UnknownAttribute {
        type_name: String,
        attribute: String,
    },

    #[error("Invalid value for attribute '{attribute}': expected {expected}, got {got}")]
    InvalidAttributeValue {
        attribute: String,
        expected: String,
        got: String,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

pub type SchemaResult<T> = Result<T, SchemaError>;
