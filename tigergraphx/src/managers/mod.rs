// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
// Managers module - per-concern orchestration over a shared graph context

pub mod context;
pub mod edge_manager;
pub mod node_manager;
pub mod query_manager;
pub mod schema_manager;
pub mod statistics_manager;

pub use context::GraphContext;
pub use edge_manager::{EdgeInput, EdgeManager, EdgeTypes};
pub use node_manager::{NodeInput, NodeManager};
pub use query_manager::QueryManager;
pub use schema_manager::SchemaManager;
pub use statistics_manager::StatisticsManager;
