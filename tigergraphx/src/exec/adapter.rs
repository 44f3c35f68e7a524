// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Dispatch of compiled and installed queries through the transport
//!
//! The `run_*` methods return the transport outcome unchanged; callers on
//! read paths collapse failures with [`discard_failure`], which logs the
//! error at `error` level.

use log::{debug, error};
use std::fmt::Display;
use std::sync::Arc;

use super::transport::{QueryResponse, Transport, TransportResult};
use crate::query::{CompiledQuery, QueryParams};

/// Collapse a transport outcome to `Option`, logging the failure
pub fn discard_failure<T>(result: TransportResult<T>, context: impl Display) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            error!("{}: {}", context, e);
            None
        }
    }
}

#[derive(Clone)]
pub struct ExecutionAdapter {
    transport: Arc<dyn Transport>,
}

impl ExecutionAdapter {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &dyn Transport {
        self.transport.as_ref()
    }

    pub fn run_installed(&self, name: &str, params: &QueryParams) -> TransportResult<QueryResponse> {
        debug!("Running installed query '{}' with {} parameter(s)", name, params.len());
        self.transport.run_installed_query(name, params)
    }

    pub fn run_interpreted(&self, query: &CompiledQuery) -> TransportResult<QueryResponse> {
        debug!("Running interpreted query:\n{}", query.script);
        self.transport
            .run_interpreted_query(&query.script, &query.params)
    }

    /// Run an installed query, yielding `None` on failure
    pub fn run_installed_or_none(&self, name: &str, params: &QueryParams) -> Option<QueryResponse> {
        discard_failure(
            self.run_installed(name, params),
            format_args!("Error running installed query '{}'", name),
        )
    }
}

impl std::fmt::Debug for ExecutionAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExecutionAdapter").finish_non_exhaustive()
    }
}
