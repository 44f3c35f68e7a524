// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Transport collaborator interface
//!
//! The transport owns the connection to the remote database (HTTP client,
//! authentication, deadlines). This crate only produces script text and
//! parameter bindings for it, and consumes the decoded JSON it returns.

use thiserror::Error;

use crate::query::QueryParams;
use crate::value::Attributes;

/// One decoded result set: output variable name -> value (usually a list of records)
pub type ResultSet = serde_json::Map<String, serde_json::Value>;

/// Decoded response of a query run
pub type QueryResponse = Vec<ResultSet>;

/// Errors reported by a transport implementation
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TransportError {
    #[error("Request failed: {0}")]
    Request(String),

    #[error("Remote error: {0}")]
    Remote(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Request timed out after {0} ms")]
    Timeout(u64),

    #[error("Request cancelled")]
    Cancelled,

    #[error("Failed to decode response: {0}")]
    Decode(String),

    #[error("Operation not supported by transport: {0}")]
    Unsupported(&'static str),
}

impl TransportError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, TransportError::NotFound(_))
    }
}

impl From<serde_json::Error> for TransportError {
    fn from(error: serde_json::Error) -> Self {
        TransportError::Decode(error.to_string())
    }
}

pub type TransportResult<T> = Result<T, TransportError>;

/// Synchronous access to a remote graph
///
/// The six required operations are what the core needs; the provided
/// operations have conservative defaults (batch writes fall back to single
/// writes, the rest report [`TransportError::Unsupported`]).
pub trait Transport: Send + Sync {
    /// Run a pre-installed query by name
    fn run_installed_query(&self, name: &str, params: &QueryParams)
        -> TransportResult<QueryResponse>;

    /// Run an interpreted query script
    fn run_interpreted_query(
        &self,
        script: &str,
        params: &QueryParams,
    ) -> TransportResult<QueryResponse>;

    /// Insert or update one node; returns the number of nodes accepted
    fn upsert_node(
        &self,
        node_type: &str,
        node_id: &str,
        attributes: &Attributes,
    ) -> TransportResult<usize>;

    /// Insert or update one edge; returns the number of edges accepted
    fn upsert_edge(
        &self,
        src_type: &str,
        src_id: &str,
        edge_type: &str,
        tgt_type: &str,
        tgt_id: &str,
        attributes: &Attributes,
    ) -> TransportResult<usize>;

    /// Number of edges of a type between two nodes
    fn get_edge_count(
        &self,
        src_type: &str,
        src_id: &str,
        edge_type: &str,
        tgt_type: &str,
        tgt_id: &str,
    ) -> TransportResult<usize>;

    /// Edge records of a type between two nodes
    fn get_edges(
        &self,
        src_type: &str,
        src_id: &str,
        edge_type: &str,
        tgt_type: &str,
        tgt_id: &str,
    ) -> TransportResult<Vec<serde_json::Value>>;

    /// Node records with the given id; a missing node is an empty list or `NotFound`
    fn retrieve_node(
        &self,
        _node_type: &str,
        _node_id: &str,
    ) -> TransportResult<Vec<serde_json::Value>> {
        Err(TransportError::Unsupported("retrieve_node"))
    }

    /// Delete one node; returns the number of nodes deleted
    fn delete_node(&self, _node_type: &str, _node_id: &str) -> TransportResult<usize> {
        Err(TransportError::Unsupported("delete_node"))
    }

    /// Delete every node of a type; returns the number of nodes deleted
    fn delete_nodes(&self, _node_type: &str) -> TransportResult<usize> {
        Err(TransportError::Unsupported("delete_nodes"))
    }

    /// Number of nodes of one type
    fn count_nodes(&self, _node_type: &str) -> TransportResult<usize> {
        Err(TransportError::Unsupported("count_nodes"))
    }

    /// Number of edges of one type
    fn count_edges(&self, _edge_type: &str) -> TransportResult<usize> {
        Err(TransportError::Unsupported("count_edges"))
    }

    /// Insert or update a batch of nodes of one type
    fn upsert_nodes(
        &self,
        node_type: &str,
        nodes: &[(String, Attributes)],
    ) -> TransportResult<usize> {
        let mut accepted = 0;
        for (node_id, attributes) in nodes {
            accepted += self.upsert_node(node_type, node_id, attributes)?;
        }
        Ok(accepted)
    }

    /// Insert or update a batch of edges sharing source, edge and target types
    fn upsert_edges(
        &self,
        src_type: &str,
        edge_type: &str,
        tgt_type: &str,
        edges: &[(String, String, Attributes)],
    ) -> TransportResult<usize> {
        let mut accepted = 0;
        for (src_id, tgt_id, attributes) in edges {
            accepted += self.upsert_edge(src_type, src_id, edge_type, tgt_type, tgt_id, attributes)?;
        }
        Ok(accepted)
    }

    /// Run a raw administrative command and return its textual output
    fn run_gsql(&self, _command: &str) -> TransportResult<String> {
        Err(TransportError::Unsupported("run_gsql"))
    }
}
