// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
// Query module - compiles specs into interpreted query scripts

pub mod compiler;
pub mod params;
mod script;

pub use compiler::{
    compile_edge_query, compile_neighbor_query, compile_node_edges_query, compile_node_query,
    CompileError, CompileResult, CompiledQuery,
};
pub use params::{ParamValue, QueryParams, VertexRef};
