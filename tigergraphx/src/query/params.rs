// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
// Typed query parameters

use indexmap::IndexMap;
use serde::Serialize;

use crate::value::AttributeValue;

/// Ordered parameter bindings (parameter name -> value)
pub type QueryParams = IndexMap<String, ParamValue>;

/// Reference to a single node by id and type
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct VertexRef {
    pub id: String,
    #[serde(rename = "type")]
    pub node_type: String,
}

impl VertexRef {
    pub fn new(id: impl Into<String>, node_type: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            node_type: node_type.into(),
        }
    }
}

/// Value bound to a query parameter
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ParamValue {
    Scalar(AttributeValue),
    List(Vec<AttributeValue>),
    Vertex(VertexRef),
    VertexSet(Vec<VertexRef>),
}

impl ParamValue {
    pub fn vertex(id: impl Into<String>, node_type: impl Into<String>) -> Self {
        ParamValue::Vertex(VertexRef::new(id, node_type))
    }

    /// Set of nodes sharing one type
    pub fn vertex_set<I, S>(ids: I, node_type: &str) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ParamValue::VertexSet(
            ids.into_iter()
                .map(|id| VertexRef::new(id, node_type))
                .collect(),
        )
    }

    pub fn list<I, V>(values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<AttributeValue>,
    {
        ParamValue::List(values.into_iter().map(Into::into).collect())
    }

    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}

impl From<AttributeValue> for ParamValue {
    fn from(value: AttributeValue) -> Self {
        ParamValue::Scalar(value)
    }
}

macro_rules! scalar_param_from {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for ParamValue {
                fn from(value: $ty) -> Self {
                    ParamValue::Scalar(AttributeValue::from(value))
                }
            }
        )*
    };
}

scalar_param_from!(&str, String, i64, i32, u32, f64, bool);
