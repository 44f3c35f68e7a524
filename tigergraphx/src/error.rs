// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Crate-level error type

use thiserror::Error;

use crate::exec::TransportError;
use crate::query::CompileError;
use crate::schema::SchemaError;
use crate::spec::SpecError;

#[derive(Error, Debug)]
pub enum GraphError {
    #[error("Schema error: {0}")]
    Schema(#[from] SchemaError),

    #[error("Invalid spec: {0}")]
    Spec(SpecError),

    #[error("Compile error: {0}")]
    Compile(#[from] CompileError),

    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Schema change failed for graph '{graph}': {output}")]
    SchemaChange { graph: String, output: String },

    #[error("Installing query '{query}' failed: {output}")]
    QueryInstall { query: String, output: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type GraphResult<T> = Result<T, GraphError>;

/// Schema failures raised while building a spec surface as [`GraphError::Schema`]
impl From<SpecError> for GraphError {
    fn from(error: SpecError) -> Self {
        match error {
            SpecError::Schema(e) => GraphError::Schema(e),
            other => GraphError::Spec(other),
        }
    }
}
