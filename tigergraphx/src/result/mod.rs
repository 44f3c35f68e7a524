// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
// Result module - tabular results and response normalization

pub mod normalizer;
pub mod table;

pub use normalizer::{edge_keys, normalize_edges, normalize_nodes, record_attributes, EdgeKey};
pub use table::{DataFrame, Row};
