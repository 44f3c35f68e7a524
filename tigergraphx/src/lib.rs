// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! TigerGraphX - a node/edge object model over a remote TigerGraph database
//!
//! Callers describe what they want with validated specs and attribute bags;
//! the crate compiles interpreted GSQL, dispatches it through an injected
//! [`Transport`], and flattens the nested JSON responses into [`DataFrame`]s.
//!
//! # Features
//!
//! - **Schema Model**: node and edge types validated at construction
//!   (reserved names, primary keys, discriminators, defaults)
//! - **Specs**: immutable node, neighbor and edge retrieval requests
//! - **Query Compiler**: deterministic GSQL rendering with fixed clause order
//! - **Result Normalizer**: nested records to flat, column-stable tables
//! - **Managers**: node, edge, query, statistics and schema operations
//!
//! # Usage
//!
//! ```no_run
//! # use std::sync::Arc;
//! # use tigergraphx::{Graph, GraphSchema, NodeSpec, Transport};
//! # fn transport() -> Arc<dyn Transport> { unimplemented!() }
//! let schema = GraphSchema::from_json_file("schema.json")?;
//! let graph = Graph::new(schema, transport());
//!
//! let spec = NodeSpec::builder()
//!     .node_type("Community")
//!     .filter("s.rank > 0")
//!     .limit(10)
//!     .build_with_schema(graph.schema())?;
//! println!("{}", graph.get_nodes_from_spec(&spec)?);
//! # Ok::<(), tigergraphx::GraphError>(())
//! ```
//!
//! Failure policy: schema and spec validation errors are always returned;
//! remote failures on bulk reads produce an empty table, and failed writes
//! produce `Ok(None)`. Both are logged through the `log` facade.

pub mod config;
pub mod error;
pub mod exec;
pub mod graph;
pub mod managers;
pub mod query;
pub mod result;
pub mod schema;
pub mod spec;
pub mod value;

pub use config::{GraphConfig, GraphOptions};
pub use error::{GraphError, GraphResult};
pub use exec::{QueryResponse, ResultSet, Transport, TransportError, TransportResult};
pub use graph::Graph;
pub use managers::{EdgeInput, NodeInput};
pub use query::{CompiledQuery, ParamValue, QueryParams};
pub use result::{DataFrame, EdgeKey};
pub use schema::{
    AttributeSchema, DataType, EdgeSchema, GraphSchema, NodeSchema, VectorAttributeSchema,
    VectorMetric,
};
pub use spec::{EdgeSpec, NeighborSpec, NodeSpec};
pub use value::{AttributeValue, Attributes};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
