// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
// Exec module - transport interface and query dispatch

pub mod adapter;
pub mod transport;

pub use adapter::{discard_failure, ExecutionAdapter};
pub use transport::{
    QueryResponse, ResultSet, Transport, TransportError, TransportResult,
};
