// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Spec-to-script compilation
//!
//! Every entry point is a pure function of its inputs: it builds a
//! [`Script`] clause tree, renders it, and returns the text together with
//! the parameter bindings the caller must send alongside it.

use log::debug;
use thiserror::Error;

use super::params::{ParamValue, QueryParams};
use super::script::{Print, Script, Seed, Select};
use crate::spec::{is_identifier, EdgeSpec, NeighborSpec, NodeSpec, NodeTarget};

/// Accumulator that collects traversed edges
const EDGE_ACCUM: &str = "@@edges";

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CompileError {
    #[error("Invalid graph name: '{0}'")]
    InvalidGraphName(String),

    #[error("Projection list must not be empty")]
    EmptyProjection,

    #[error("Start node set must not be empty")]
    EmptyStartNodes,

    #[error("Limit must be a positive integer")]
    InvalidLimit,
}

pub type CompileResult<T> = Result<T, CompileError>;

/// Script text plus the parameters to bind when running it
#[derive(Debug, Clone, PartialEq)]
pub struct CompiledQuery {
    pub script: String,
    pub params: QueryParams,
}

fn check_graph_name(graph_name: &str) -> CompileResult<()> {
    if is_identifier(graph_name) {
        Ok(())
    } else {
        Err(CompileError::InvalidGraphName(graph_name.to_string()))
    }
}

fn check_projection(projection: Option<&[String]>) -> CompileResult<Option<Vec<String>>> {
    match projection {
        Some([]) => Err(CompileError::EmptyProjection),
        Some(attrs) => Ok(Some(attrs.to_vec())),
        None => Ok(None),
    }
}

fn check_limit(limit: Option<usize>) -> CompileResult<Option<usize>> {
    match limit {
        Some(0) => Err(CompileError::InvalidLimit),
        other => Ok(other),
    }
}

fn has_direction_marker(edge_type: &str) -> bool {
    edge_type.ends_with('>') || edge_type.starts_with('<')
}

/// `-(<edge types>:<alias>)-`
///
/// A single plain edge type is written bare; several types, or any
/// direction-marked type, are joined with `|` and parenthesized.
fn edge_step(edge_types: &[String], alias: &str) -> String {
    let types = match edge_types {
        [] => String::new(),
        [single] if !has_direction_marker(single) => single.clone(),
        many => format!("({})", many.join("|")),
    };
    format!("-({}:{})-", types, alias)
}

/// `<node types>:<alias>`, with an empty type list rendered as a wildcard
fn node_step(node_types: &[String], alias: &str) -> String {
    match node_types {
        [] => format!(":{}", alias),
        [single] => format!("{}:{}", single, alias),
        many => format!("({}):{}", many.join("|"), alias),
    }
}

fn seed_source(node_types: &[String]) -> String {
    if node_types.is_empty() {
        "ANY".to_string()
    } else {
        node_types
            .iter()
            .map(|t| format!("{}.*", t))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

fn finish(script: Script, params: QueryParams) -> CompiledQuery {
    let script = script.render();
    debug!("Compiled query script:\n{}", script);
    CompiledQuery { script, params }
}

/// Compile a node retrieval
///
/// The refinement clause is emitted only when a filter or a limit is present.
pub fn compile_node_query(graph_name: &str, spec: &NodeSpec) -> CompileResult<CompiledQuery> {
    check_graph_name(graph_name)?;
    let projection = check_projection(spec.return_attributes())?;
    let limit = check_limit(spec.limit())?;

    let source = match spec.target() {
        NodeTarget::Type(node_type) => format!("{}.*", node_type),
        NodeTarget::AllTypes => "ANY".to_string(),
    };

    let refine = if spec.filter().is_some() || limit.is_some() {
        Some(Select {
            var: "Nodes".to_string(),
            alias: spec.alias().to_string(),
            from: format!("Nodes:{}", spec.alias()),
            filter: spec.filter().map(str::to_string),
            accum: None,
            limit,
        })
    } else {
        None
    };

    let script = Script {
        graph_name: graph_name.to_string(),
        params: Vec::new(),
        declarations: Vec::new(),
        seed: Seed {
            var: "Nodes".to_string(),
            source,
        },
        refine,
        print: Print::VertexSet {
            var: "Nodes".to_string(),
            projection,
        },
    };
    Ok(finish(script, QueryParams::new()))
}

/// Compile a one-hop neighbor traversal
///
/// The start nodes are bound to the typed `start_nodes` parameter.
pub fn compile_neighbor_query(
    graph_name: &str,
    spec: &NeighborSpec,
) -> CompileResult<CompiledQuery> {
    check_graph_name(graph_name)?;
    if spec.start_nodes().is_empty() {
        return Err(CompileError::EmptyStartNodes);
    }
    let projection = check_projection(spec.return_attributes())?;
    let limit = check_limit(spec.limit())?;

    let from = format!(
        "Nodes:{} {} {}",
        spec.start_alias(),
        edge_step(spec.edge_types(), spec.edge_alias()),
        node_step(spec.target_node_types(), spec.target_alias())
    );

    let script = Script {
        graph_name: graph_name.to_string(),
        params: vec![format!(
            "SET<VERTEX<{}>> start_nodes",
            spec.start_node_type()
        )],
        declarations: Vec::new(),
        seed: Seed {
            var: "Nodes".to_string(),
            source: "start_nodes".to_string(),
        },
        refine: Some(Select {
            var: "Neighbors".to_string(),
            alias: spec.target_alias().to_string(),
            from,
            filter: spec.filter().map(str::to_string),
            accum: None,
            limit,
        }),
        print: Print::VertexSet {
            var: "Neighbors".to_string(),
            projection,
        },
    };

    let mut params = QueryParams::new();
    params.insert(
        "start_nodes".to_string(),
        ParamValue::vertex_set(spec.start_nodes().iter().cloned(), spec.start_node_type()),
    );
    Ok(finish(script, params))
}

/// Compile an edge retrieval
///
/// Matching edges are gathered in an edge accumulator and printed as
/// `Edges`; attribute projection is left to the result normalizer.
pub fn compile_edge_query(graph_name: &str, spec: &EdgeSpec) -> CompileResult<CompiledQuery> {
    check_graph_name(graph_name)?;
    check_projection(spec.return_attributes())?;
    let limit = check_limit(spec.limit())?;

    let from = format!(
        "Source:{} {} {}",
        spec.source_alias(),
        edge_step(spec.edge_types(), spec.edge_alias()),
        node_step(spec.target_node_types(), spec.target_alias())
    );

    let script = Script {
        graph_name: graph_name.to_string(),
        params: Vec::new(),
        declarations: vec![format!("ListAccum<EDGE> {};", EDGE_ACCUM)],
        seed: Seed {
            var: "Source".to_string(),
            source: seed_source(spec.source_node_types()),
        },
        refine: Some(Select {
            var: "Results".to_string(),
            alias: spec.source_alias().to_string(),
            from,
            filter: spec.filter().map(str::to_string),
            accum: Some(format!("{} += {}", EDGE_ACCUM, spec.edge_alias())),
            limit,
        }),
        print: Print::Accumulator {
            accum: EDGE_ACCUM.to_string(),
            label: "Edges".to_string(),
        },
    };
    Ok(finish(script, QueryParams::new()))
}

/// Compile a sample of the edges incident to a single node
pub fn compile_node_edges_query(
    graph_name: &str,
    node_type: &str,
    node_id: &str,
    edge_types: &[String],
    num_edge_samples: usize,
) -> CompileResult<CompiledQuery> {
    check_graph_name(graph_name)?;
    let limit = check_limit(Some(num_edge_samples))?;

    let script = Script {
        graph_name: graph_name.to_string(),
        params: vec![format!("SET<VERTEX<{}>> start_nodes", node_type)],
        declarations: vec![format!("ListAccum<EDGE> {};", EDGE_ACCUM)],
        seed: Seed {
            var: "Nodes".to_string(),
            source: "start_nodes".to_string(),
        },
        refine: Some(Select {
            var: "Results".to_string(),
            alias: "s".to_string(),
            from: format!("Nodes:s {} :t", edge_step(edge_types, "e")),
            filter: None,
            accum: Some(format!("{} += e", EDGE_ACCUM)),
            limit,
        }),
        print: Print::Accumulator {
            accum: EDGE_ACCUM.to_string(),
            label: "edges".to_string(),
        },
    };

    let mut params = QueryParams::new();
    params.insert(
        "start_nodes".to_string(),
        ParamValue::vertex_set([node_id], node_type),
    );
    Ok(finish(script, params))
}
