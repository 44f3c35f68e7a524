// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
// Shared state of the managers of one graph

use std::sync::Arc;

use crate::config::GraphOptions;
use crate::exec::{ExecutionAdapter, Transport};
use crate::schema::GraphSchema;

/// Read-only state shared by every manager of a graph
#[derive(Debug)]
pub struct GraphContext {
    pub(crate) schema: Arc<GraphSchema>,
    pub(crate) adapter: ExecutionAdapter,
    pub(crate) options: GraphOptions,
}

impl GraphContext {
    pub fn new(schema: GraphSchema, transport: Arc<dyn Transport>, options: GraphOptions) -> Self {
        Self {
            schema: Arc::new(schema),
            adapter: ExecutionAdapter::new(transport),
            options,
        }
    }

    pub fn schema(&self) -> &GraphSchema {
        &self.schema
    }

    pub fn graph_name(&self) -> &str {
        self.schema.graph_name()
    }

    pub fn adapter(&self) -> &ExecutionAdapter {
        &self.adapter
    }

    pub fn transport(&self) -> &dyn Transport {
        self.adapter.transport()
    }

    pub fn options(&self) -> &GraphOptions {
        &self.options
    }
}
