// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Flattening of nested query responses into tables
//!
//! A response is a list of result sets, each mapping output variable names to
//! values. Every list-valued variable is treated as a list of records:
//!
//! - node records carry `v_id`/`id`, `v_type`/`type` and an `attributes` object
//! - edge records carry `from_id`, `to_id`, `e_type` and an `attributes` object
//!
//! Records that are not objects, or that lack an identifier, are skipped
//! with a warning.

use log::warn;
use serde_json::{Map, Value};

use super::table::{DataFrame, Row};
use crate::exec::ResultSet;
use crate::schema::GraphSchema;

/// Column used for the node identifier when the node type is unknown
pub const FALLBACK_ID_COLUMN: &str = "v_id";
pub const FROM_ID_COLUMN: &str = "from_id";
pub const TO_ID_COLUMN: &str = "to_id";

/// Composite identity of an edge as seen in a response
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeKey {
    pub from_id: String,
    pub to_id: String,
    /// Single value for one discriminator attribute, an array for several
    pub discriminator: Option<Value>,
}

fn records(response: &[ResultSet]) -> impl Iterator<Item = &Value> {
    response
        .iter()
        .flat_map(|set| set.values())
        .filter_map(Value::as_array)
        .flatten()
}

fn id_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn field<'a>(record: &'a Map<String, Value>, names: &[&str]) -> Option<&'a Value> {
    names.iter().find_map(|name| record.get(*name))
}

/// Attribute object of a node or edge record
pub fn record_attributes(record: &Value) -> Option<&Map<String, Value>> {
    record.get("attributes").and_then(Value::as_object)
}

struct NodeRecord<'a> {
    id: String,
    node_type: Option<&'a str>,
    attributes: Option<&'a Map<String, Value>>,
}

fn parse_node(record: &Value) -> Option<NodeRecord<'_>> {
    let Some(obj) = record.as_object() else {
        warn!("Skipping non-object node record: {}", record);
        return None;
    };
    let Some(id) = field(obj, &["v_id", "id"]).and_then(id_text) else {
        warn!("Skipping node record without identifier: {}", record);
        return None;
    };
    Some(NodeRecord {
        id,
        node_type: field(obj, &["v_type", "type"]).and_then(Value::as_str),
        attributes: obj.get("attributes").and_then(Value::as_object),
    })
}

/// Flatten node records
///
/// The identifier column is named after the primary key of the record's
/// node type. With a projection, the columns are exactly the projection;
/// without one, they are the identifier columns followed by every attribute
/// key seen, in first-seen order.
pub fn normalize_nodes(
    schema: &GraphSchema,
    response: &[ResultSet],
    projection: Option<&[String]>,
) -> DataFrame {
    let nodes: Vec<NodeRecord> = records(response).filter_map(parse_node).collect();
    if nodes.is_empty() {
        return match projection {
            Some(cols) => DataFrame::with_columns(cols.to_vec()),
            None => DataFrame::empty(),
        };
    }

    let id_column = |node: &NodeRecord| -> String {
        node.node_type
            .and_then(|t| schema.primary_key_of(t))
            .unwrap_or(FALLBACK_ID_COLUMN)
            .to_string()
    };

    let columns = match projection {
        Some(cols) => cols.to_vec(),
        None => {
            let mut columns: Vec<String> = Vec::new();
            let mut add = |name: &str| {
                if !columns.iter().any(|c| c == name) {
                    columns.push(name.to_string());
                }
            };
            for node in &nodes {
                add(&id_column(node));
            }
            for node in &nodes {
                for key in node.attributes.into_iter().flat_map(|a| a.keys()) {
                    add(key);
                }
            }
            columns
        }
    };

    let mut frame = DataFrame::with_columns(columns);
    for node in &nodes {
        let id_col = id_column(node);
        let mut row = Row::new();
        for col in frame.columns() {
            let value = node
                .attributes
                .and_then(|a| a.get(col))
                .cloned()
                .or_else(|| {
                    if *col == id_col || (projection.is_some() && col == FALLBACK_ID_COLUMN) {
                        Some(Value::String(node.id.clone()))
                    } else if col == "v_type" {
                        node.node_type.map(|t| Value::String(t.to_string()))
                    } else {
                        None
                    }
                });
            if let Some(value) = value {
                row.insert(col.clone(), value);
            }
        }
        frame.push_row(row);
    }
    frame
}

struct EdgeRecord<'a> {
    from_id: String,
    to_id: String,
    obj: &'a Map<String, Value>,
    attributes: Option<&'a Map<String, Value>>,
}

fn parse_edge(record: &Value) -> Option<EdgeRecord<'_>> {
    let Some(obj) = record.as_object() else {
        warn!("Skipping non-object edge record: {}", record);
        return None;
    };
    let from_id = obj.get(FROM_ID_COLUMN).and_then(id_text);
    let to_id = obj.get(TO_ID_COLUMN).and_then(id_text);
    match (from_id, to_id) {
        (Some(from_id), Some(to_id)) => Some(EdgeRecord {
            from_id,
            to_id,
            obj,
            attributes: obj.get("attributes").and_then(Value::as_object),
        }),
        _ => {
            warn!("Skipping edge record without endpoints: {}", record);
            None
        }
    }
}

/// Flatten edge records
///
/// Columns are `from_id`, `to_id`, then either the projection or every
/// attribute key seen. Projected names that are not attributes are looked
/// up among the record's own fields (`e_type`, `from_type`, ...).
pub fn normalize_edges(
    response: &[ResultSet],
    projection: Option<&[String]>,
    limit: Option<usize>,
) -> DataFrame {
    let edges: Vec<EdgeRecord> = records(response).filter_map(parse_edge).collect();
    if edges.is_empty() && projection.is_none() {
        return DataFrame::empty();
    }

    let mut columns = vec![FROM_ID_COLUMN.to_string(), TO_ID_COLUMN.to_string()];
    let mut add = |name: &str| {
        if !columns.iter().any(|c| c == name) {
            columns.push(name.to_string());
        }
    };
    match projection {
        Some(cols) => cols.iter().for_each(|c| add(c)),
        None => {
            for edge in &edges {
                for key in edge.attributes.into_iter().flat_map(|a| a.keys()) {
                    add(key);
                }
            }
        }
    }

    let mut frame = DataFrame::with_columns(columns);
    for edge in edges.iter().take(limit.unwrap_or(usize::MAX)) {
        let mut row = Row::new();
        row.insert(FROM_ID_COLUMN.to_string(), Value::String(edge.from_id.clone()));
        row.insert(TO_ID_COLUMN.to_string(), Value::String(edge.to_id.clone()));
        for col in &frame.columns()[2..] {
            let value = edge
                .attributes
                .and_then(|a| a.get(col))
                .or_else(|| edge.obj.get(col));
            if let Some(value) = value {
                row.insert(col.clone(), value.clone());
            }
        }
        frame.push_row(row);
    }
    frame
}

/// Endpoint ids and discriminator values of every edge record
pub fn edge_keys(schema: &GraphSchema, response: &[ResultSet]) -> Vec<EdgeKey> {
    records(response)
        .filter_map(parse_edge)
        .map(|edge| {
            let discriminator_names = edge
                .obj
                .get("e_type")
                .and_then(Value::as_str)
                .and_then(|t| schema.edges().get(t))
                .map(|e| e.discriminator())
                .unwrap_or_default();
            let mut values: Vec<Value> = discriminator_names
                .iter()
                .map(|name| {
                    edge.attributes
                        .and_then(|a| a.get(name))
                        .cloned()
                        .unwrap_or(Value::Null)
                })
                .collect();
            let discriminator = match values.len() {
                0 => None,
                1 => values.pop(),
                _ => Some(Value::Array(values)),
            };
            EdgeKey {
                from_id: edge.from_id,
                to_id: edge.to_id,
                discriminator,
            }
        })
        .collect()
}
