// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
// Spec module - immutable request descriptors consumed by the query compiler
//
// A spec can only be obtained through its builder, which validates aliases,
// projections, limits and start-node sets. Specs built with a schema also
// have their implicit node type resolved, so the compiler never has to guess.

pub mod edge;
pub mod neighbor;
pub mod node;

pub use edge::{EdgeSpec, EdgeSpecBuilder};
pub use neighbor::{NeighborSpec, NeighborSpecBuilder};
pub use node::{NodeSpec, NodeSpecBuilder, NodeTarget};

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use crate::schema::{is_reserved_keyword, SchemaError};

/// Default alias of the start (or source) node
pub const DEFAULT_START_ALIAS: &str = "s";
/// Default alias of the traversed edge
pub const DEFAULT_EDGE_ALIAS: &str = "e";
/// Default alias of the target node
pub const DEFAULT_TARGET_ALIAS: &str = "t";

static IDENTIFIER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("identifier pattern"));

#[derive(Error, Debug)]
pub enum SpecError {
    #[error(transparent)]
    Schema(#[from] SchemaError),

    #[error("Alias '{0}' is not a valid identifier")]
    InvalidAlias(String),

    #[error("Alias '{0}' is a reserved keyword.")]
    ReservedAlias(String),

    #[error("Alias '{0}' is used more than once")]
    DuplicateAlias(String),

    #[error("Attribute list '{0}' must not be empty; omit it to return all attributes")]
    EmptyProjection(&'static str),

    #[error("Limit must be a positive integer")]
    InvalidLimit,

    #[error("At least one start node is required")]
    EmptyStartNodes,

    #[error("Please specify a node type or request all node types.")]
    MissingNodeType,
}

pub type SpecResult<T> = Result<T, SpecError>;

pub(crate) fn is_identifier(name: &str) -> bool {
    IDENTIFIER.is_match(name)
}

pub(crate) fn check_alias(alias: &str) -> SpecResult<()> {
    if !is_identifier(alias) {
        return Err(SpecError::InvalidAlias(alias.to_string()));
    }
    if is_reserved_keyword(alias) {
        return Err(SpecError::ReservedAlias(alias.to_string()));
    }
    Ok(())
}

/// Validate a set of aliases that appear together in one traversal clause
pub(crate) fn check_aliases(aliases: &[&str]) -> SpecResult<()> {
    for (i, alias) in aliases.iter().enumerate() {
        check_alias(alias)?;
        if aliases[..i].contains(alias) {
            return Err(SpecError::DuplicateAlias(alias.to_string()));
        }
    }
    Ok(())
}

pub(crate) fn check_projection(projection: &Option<Vec<String>>) -> SpecResult<()> {
    match projection {
        Some(attrs) if attrs.is_empty() => Err(SpecError::EmptyProjection("return_attributes")),
        _ => Ok(()),
    }
}

pub(crate) fn check_limit(limit: Option<usize>) -> SpecResult<()> {
    match limit {
        Some(0) => Err(SpecError::InvalidLimit),
        _ => Ok(()),
    }
}

/// An empty filter string carries no predicate
pub(crate) fn normalize_filter(filter: Option<String>) -> Option<String> {
    filter
        .map(|f| f.trim().to_string())
        .filter(|f| !f.is_empty())
}
