// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
// Graph statistics backed by installed queries and transport counters

use log::warn;
use std::sync::Arc;

use super::context::GraphContext;
use crate::exec::discard_failure;
use crate::query::{ParamValue, QueryParams};

pub struct StatisticsManager {
    context: Arc<GraphContext>,
}

impl StatisticsManager {
    pub fn new(context: Arc<GraphContext>) -> Self {
        Self { context }
    }

    /// Degree of a node over the given edge types (all types when empty);
    /// 0 when the query fails or returns nothing usable
    pub fn degree(&self, node_id: &str, node_type: &str, edge_types: &[String]) -> usize {
        let mut params = QueryParams::new();
        params.insert("input".to_string(), ParamValue::vertex(node_id, node_type));
        params.insert(
            "edge_types".to_string(),
            ParamValue::list(edge_types.iter().cloned()),
        );

        let query_name = &self.context.options.degree_query_name;
        let Some(response) = self.context.adapter.run_installed_or_none(query_name, &params)
        else {
            return 0;
        };
        match response.first().and_then(|set| set.get("degree")) {
            Some(value) => value.as_u64().map_or_else(
                || {
                    warn!("Unexpected degree value for node {}: {}", node_id, value);
                    0
                },
                |degree| degree as usize,
            ),
            None => 0,
        }
    }

    /// Number of nodes of the given types; a failed count contributes 0
    pub fn number_of_nodes(&self, node_types: &[String]) -> usize {
        node_types
            .iter()
            .filter_map(|node_type| {
                discard_failure(
                    self.context.transport().count_nodes(node_type),
                    format_args!("Error counting nodes of type '{}'", node_type),
                )
            })
            .sum()
    }

    /// Number of edges of the given types; a failed count contributes 0
    pub fn number_of_edges(&self, edge_types: &[String]) -> usize {
        edge_types
            .iter()
            .filter_map(|edge_type| {
                discard_failure(
                    self.context.transport().count_edges(edge_type),
                    format_args!("Error counting edges of type '{}'", edge_type),
                )
            })
            .sum()
    }
}
