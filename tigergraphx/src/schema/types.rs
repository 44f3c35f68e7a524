// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
// Attribute-level schema definitions

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{SchemaError, SchemaResult};
use crate::value::AttributeValue;

/// Primitive attribute types supported by the query dialect
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum DataType {
    Int,
    Uint,
    Float,
    Double,
    Bool,
    String,
    Datetime,
}

impl DataType {
    /// Keyword used for this type in DDL and parameter declarations
    pub fn as_gsql(&self) -> &'static str {
        match self {
            DataType::Int => "INT",
            DataType::Uint => "UINT",
            DataType::Float => "FLOAT",
            DataType::Double => "DOUBLE",
            DataType::Bool => "BOOL",
            DataType::String => "STRING",
            DataType::Datetime => "DATETIME",
        }
    }

    /// Check whether a value can be stored in an attribute of this type
    pub fn accepts(&self, value: &AttributeValue) -> bool {
        match (self, value) {
            (DataType::String, AttributeValue::String(_)) => true,
            (DataType::Int, AttributeValue::Int(_)) => true,
            (DataType::Uint, AttributeValue::Int(n)) => *n >= 0,
            (DataType::Float | DataType::Double, AttributeValue::Int(_))
            | (DataType::Float | DataType::Double, AttributeValue::Float(_)) => true,
            (DataType::Bool, AttributeValue::Bool(_)) => true,
            (DataType::Datetime, v) => v.as_datetime().is_some(),
            _ => false,
        }
    }

    fn expected_description(&self) -> &'static str {
        match self {
            DataType::String => "str",
            DataType::Int => "int",
            DataType::Uint => "non-negative int",
            DataType::Float | DataType::Double => "float or int",
            DataType::Bool => "bool",
            DataType::Datetime => "datetime",
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_gsql())
    }
}

/// Schema of a single node or edge attribute
///
/// Accepts either the full form `{"data_type": "STRING", "default_value": "x"}`
/// or the shorthand `"STRING"` when deserialized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "AttributeSchemaDef")]
pub struct AttributeSchema {
    pub data_type: DataType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<AttributeValue>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum AttributeSchemaDef {
    Short(DataType),
    Full {
        data_type: DataType,
        #[serde(default)]
        default_value: Option<AttributeValue>,
    },
}

impl From<AttributeSchemaDef> for AttributeSchema {
    fn from(def: AttributeSchemaDef) -> Self {
        match def {
            AttributeSchemaDef::Short(data_type) => AttributeSchema::new(data_type),
            AttributeSchemaDef::Full {
                data_type,
                default_value,
            } => AttributeSchema {
                data_type,
                default_value,
            },
        }
    }
}

impl AttributeSchema {
    pub fn new(data_type: DataType) -> Self {
        Self {
            data_type,
            default_value: None,
        }
    }

    /// Create an attribute schema with a default value of the matching type
    pub fn with_default(
        data_type: DataType,
        default_value: impl Into<AttributeValue>,
    ) -> SchemaResult<Self> {
        let schema = Self {
            data_type,
            default_value: Some(default_value.into()),
        };
        schema.check_default("default_value")?;
        Ok(schema)
    }

    /// Verify that the default value (if any) is compatible with the data type
    pub fn check_default(&self, attribute: &str) -> SchemaResult<()> {
        match &self.default_value {
            Some(value) if !self.data_type.accepts(value) => {
                Err(SchemaError::InvalidDefaultValue {
                    attribute: attribute.to_string(),
                    expected: self.data_type.expected_description().to_string(),
                    got: value.type_name().to_string(),
                })
            }
            _ => Ok(()),
        }
    }

    /// Verify a concrete value for this attribute
    pub fn check_value(&self, attribute: &str, value: &AttributeValue) -> SchemaResult<()> {
        if self.data_type.accepts(value) {
            Ok(())
        } else {
            Err(SchemaError::InvalidAttributeValue {
                attribute: attribute.to_string(),
                expected: self.data_type.expected_description().to_string(),
                got: value.type_name().to_string(),
            })
        }
    }
}

impl From<DataType> for AttributeSchema {
    fn from(data_type: DataType) -> Self {
        AttributeSchema::new(data_type)
    }
}

/// Similarity metric of a vector attribute
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum VectorMetric {
    #[default]
    Cosine,
    L2,
    Ip,
}

impl VectorMetric {
    pub fn as_gsql(&self) -> &'static str {
        match self {
            VectorMetric::Cosine => "COSINE",
            VectorMetric::L2 => "L2",
            VectorMetric::Ip => "IP",
        }
    }
}

/// Schema of an embedding attribute
///
/// A bare integer deserializes as the dimension with all other fields at
/// their defaults; unknown fields are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "VectorAttributeSchemaDef")]
pub struct VectorAttributeSchema {
    pub dimension: u32,
    pub index_type: String,
    pub data_type: String,
    pub metric: VectorMetric,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum VectorAttributeSchemaDef {
    Dimension(u32),
    Full {
        dimension: u32,
        #[serde(default = "default_index_type")]
        index_type: String,
        #[serde(default = "default_vector_data_type")]
        data_type: String,
        #[serde(default)]
        metric: VectorMetric,
    },
}

fn default_index_type() -> String {
    "HNSW".to_string()
}

fn default_vector_data_type() -> String {
    "FLOAT".to_string()
}

impl TryFrom<VectorAttributeSchemaDef> for VectorAttributeSchema {
    type Error = String;

    fn try_from(def: VectorAttributeSchemaDef) -> Result<Self, Self::Error> {
        let schema = match def {
            VectorAttributeSchemaDef::Dimension(dimension) => Self::with_dimension(dimension),
            VectorAttributeSchemaDef::Full {
                dimension,
                index_type,
                data_type,
                metric,
            } => Self {
                dimension,
                index_type,
                data_type,
                metric,
            },
        };
        if schema.dimension == 0 {
            return Err("vector attribute dimension must be at least 1".to_string());
        }
        Ok(schema)
    }
}

impl VectorAttributeSchema {
    /// Vector attribute with default index type, element type and metric
    pub fn with_dimension(dimension: u32) -> Self {
        Self {
            dimension,
            index_type: default_index_type(),
            data_type: default_vector_data_type(),
            metric: VectorMetric::default(),
        }
    }

    pub fn with_metric(mut self, metric: VectorMetric) -> Self {
        self.metric = metric;
        self
    }

    pub(crate) fn check_dimension(&self, name: &str) -> SchemaResult<()> {
        if self.dimension == 0 {
            return Err(SchemaError::InvalidDimension(name.to_string()));
        }
        Ok(())
    }
}
