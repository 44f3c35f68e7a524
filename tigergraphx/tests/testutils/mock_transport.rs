//! In-memory transport for integration tests
//!
//! Keeps nodes and edges in memory, records every call, returns queued
//! responses for query runs, and can be told to fail any operation.

use parking_lot::Mutex;
use serde_json::{json, Value};
use std::collections::{HashMap, VecDeque};

use tigergraphx::value::attributes_to_json;
use tigergraphx::{
    Attributes, QueryParams, QueryResponse, Transport, TransportError, TransportResult,
};

/// A recorded transport call
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    InstalledQuery {
        name: String,
        params: QueryParams,
    },
    InterpretedQuery {
        script: String,
        params: QueryParams,
    },
    UpsertNode {
        node_type: String,
        node_id: String,
        attributes: Attributes,
    },
    UpsertNodes {
        node_type: String,
        nodes: Vec<(String, Attributes)>,
    },
    UpsertEdge {
        src_type: String,
        src_id: String,
        edge_type: String,
        tgt_type: String,
        tgt_id: String,
        attributes: Attributes,
    },
    UpsertEdges {
        edge_type: String,
        count: usize,
    },
    EdgeCount {
        edge_type: String,
        src_id: String,
        tgt_id: String,
    },
    GetEdges {
        edge_type: String,
        src_id: String,
        tgt_id: String,
    },
    RetrieveNode {
        node_type: String,
        node_id: String,
    },
    DeleteNode {
        node_type: String,
        node_id: String,
    },
    DeleteNodes {
        node_type: String,
    },
    CountNodes(String),
    CountEdges(String),
    Gsql(String),
}

#[derive(Debug, Clone)]
struct StoredEdge {
    src_type: String,
    src_id: String,
    edge_type: String,
    tgt_type: String,
    tgt_id: String,
    attributes: Attributes,
}

#[derive(Default)]
struct MockState {
    calls: Vec<Call>,
    nodes: HashMap<(String, String), Attributes>,
    edges: Vec<StoredEdge>,
    query_responses: VecDeque<QueryResponse>,
    gsql_outputs: VecDeque<String>,
    failures: HashMap<&'static str, TransportError>,
}

#[derive(Default)]
pub struct MockTransport {
    state: Mutex<MockState>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every later call of `operation` fail with `error`
    pub fn fail(&self, operation: &'static str, error: TransportError) {
        self.state.lock().failures.insert(operation, error);
    }

    pub fn recover(&self, operation: &'static str) {
        self.state.lock().failures.remove(operation);
    }

    /// Queue the response of the next installed or interpreted query
    pub fn push_response(&self, response: Value) {
        let response: QueryResponse =
            serde_json::from_value(response).expect("response must be a list of objects");
        self.state.lock().query_responses.push_back(response);
    }

    /// Queue the output of the next raw command
    pub fn push_gsql_output(&self, output: &str) {
        self.state.lock().gsql_outputs.push_back(output.to_string());
    }

    pub fn calls(&self) -> Vec<Call> {
        self.state.lock().calls.clone()
    }

    pub fn node_count(&self) -> usize {
        self.state.lock().nodes.len()
    }

    pub fn node(&self, node_type: &str, node_id: &str) -> Option<Attributes> {
        self.state
            .lock()
            .nodes
            .get(&(node_type.to_string(), node_id.to_string()))
            .cloned()
    }

    pub fn edge_count(&self) -> usize {
        self.state.lock().edges.len()
    }

    /// Scripts of all interpreted queries, in call order
    pub fn scripts(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                Call::InterpretedQuery { script, .. } => Some(script),
                _ => None,
            })
            .collect()
    }

    fn begin(&self, operation: &'static str, call: Call) -> TransportResult<()> {
        let mut state = self.state.lock();
        state.calls.push(call);
        match state.failures.get(operation) {
            Some(error) => Err(error.clone()),
            None => Ok(()),
        }
    }

    fn matching_edges(
        state: &MockState,
        src_type: &str,
        src_id: &str,
        edge_type: &str,
        tgt_type: &str,
        tgt_id: &str,
    ) -> Vec<StoredEdge> {
        state
            .edges
            .iter()
            .filter(|e| {
                e.src_type == src_type
                    && e.src_id == src_id
                    && e.edge_type == edge_type
                    && e.tgt_type == tgt_type
                    && e.tgt_id == tgt_id
            })
            .cloned()
            .collect()
    }
}

impl Transport for MockTransport {
    fn run_installed_query(
        &self,
        name: &str,
        params: &QueryParams,
    ) -> TransportResult<QueryResponse> {
        self.begin(
            "run_installed_query",
            Call::InstalledQuery {
                name: name.to_string(),
                params: params.clone(),
            },
        )?;
        Ok(self.state.lock().query_responses.pop_front().unwrap_or_default())
    }

    fn run_interpreted_query(
        &self,
        script: &str,
        params: &QueryParams,
    ) -> TransportResult<QueryResponse> {
        self.begin(
            "run_interpreted_query",
            Call::InterpretedQuery {
                script: script.to_string(),
                params: params.clone(),
            },
        )?;
        Ok(self.state.lock().query_responses.pop_front().unwrap_or_default())
    }

    fn upsert_node(
        &self,
        node_type: &str,
        node_id: &str,
        attributes: &Attributes,
    ) -> TransportResult<usize> {
        self.begin(
            "upsert_node",
            Call::UpsertNode {
                node_type: node_type.to_string(),
                node_id: node_id.to_string(),
                attributes: attributes.clone(),
            },
        )?;
        self.state.lock().nodes.insert(
            (node_type.to_string(), node_id.to_string()),
            attributes.clone(),
        );
        Ok(1)
    }

    fn upsert_nodes(
        &self,
        node_type: &str,
        nodes: &[(String, Attributes)],
    ) -> TransportResult<usize> {
        self.begin(
            "upsert_nodes",
            Call::UpsertNodes {
                node_type: node_type.to_string(),
                nodes: nodes.to_vec(),
            },
        )?;
        let mut state = self.state.lock();
        for (node_id, attributes) in nodes {
            state
                .nodes
                .insert((node_type.to_string(), node_id.clone()), attributes.clone());
        }
        Ok(nodes.len())
    }

    fn upsert_edge(
        &self,
        src_type: &str,
        src_id: &str,
        edge_type: &str,
        tgt_type: &str,
        tgt_id: &str,
        attributes: &Attributes,
    ) -> TransportResult<usize> {
        self.begin(
            "upsert_edge",
            Call::UpsertEdge {
                src_type: src_type.to_string(),
                src_id: src_id.to_string(),
                edge_type: edge_type.to_string(),
                tgt_type: tgt_type.to_string(),
                tgt_id: tgt_id.to_string(),
                attributes: attributes.clone(),
            },
        )?;
        self.state.lock().edges.push(StoredEdge {
            src_type: src_type.to_string(),
            src_id: src_id.to_string(),
            edge_type: edge_type.to_string(),
            tgt_type: tgt_type.to_string(),
            tgt_id: tgt_id.to_string(),
            attributes: attributes.clone(),
        });
        Ok(1)
    }

    fn upsert_edges(
        &self,
        src_type: &str,
        edge_type: &str,
        tgt_type: &str,
        edges: &[(String, String, Attributes)],
    ) -> TransportResult<usize> {
        self.begin(
            "upsert_edges",
            Call::UpsertEdges {
                edge_type: edge_type.to_string(),
                count: edges.len(),
            },
        )?;
        let mut state = self.state.lock();
        for (src_id, tgt_id, attributes) in edges {
            state.edges.push(StoredEdge {
                src_type: src_type.to_string(),
                src_id: src_id.clone(),
                edge_type: edge_type.to_string(),
                tgt_type: tgt_type.to_string(),
                tgt_id: tgt_id.clone(),
                attributes: attributes.clone(),
            });
        }
        Ok(edges.len())
    }

    fn get_edge_count(
        &self,
        src_type: &str,
        src_id: &str,
        edge_type: &str,
        tgt_type: &str,
        tgt_id: &str,
    ) -> TransportResult<usize> {
        self.begin(
            "get_edge_count",
            Call::EdgeCount {
                edge_type: edge_type.to_string(),
                src_id: src_id.to_string(),
                tgt_id: tgt_id.to_string(),
            },
        )?;
        let state = self.state.lock();
        Ok(Self::matching_edges(&state, src_type, src_id, edge_type, tgt_type, tgt_id).len())
    }

    fn get_edges(
        &self,
        src_type: &str,
        src_id: &str,
        edge_type: &str,
        tgt_type: &str,
        tgt_id: &str,
    ) -> TransportResult<Vec<Value>> {
        self.begin(
            "get_edges",
            Call::GetEdges {
                edge_type: edge_type.to_string(),
                src_id: src_id.to_string(),
                tgt_id: tgt_id.to_string(),
            },
        )?;
        let state = self.state.lock();
        Ok(
            Self::matching_edges(&state, src_type, src_id, edge_type, tgt_type, tgt_id)
                .into_iter()
                .map(|e| {
                    json!({
                        "e_type": e.edge_type,
                        "from_type": e.src_type,
                        "from_id": e.src_id,
                        "to_type": e.tgt_type,
                        "to_id": e.tgt_id,
                        "attributes": attributes_to_json(&e.attributes),
                    })
                })
                .collect(),
        )
    }

    fn retrieve_node(&self, node_type: &str, node_id: &str) -> TransportResult<Vec<Value>> {
        self.begin(
            "retrieve_node",
            Call::RetrieveNode {
                node_type: node_type.to_string(),
                node_id: node_id.to_string(),
            },
        )?;
        let state = self.state.lock();
        Ok(state
            .nodes
            .get(&(node_type.to_string(), node_id.to_string()))
            .map(|attributes| {
                vec![json!({
                    "v_id": node_id,
                    "v_type": node_type,
                    "attributes": attributes_to_json(attributes),
                })]
            })
            .unwrap_or_default())
    }

    fn delete_node(&self, node_type: &str, node_id: &str) -> TransportResult<usize> {
        self.begin(
            "delete_node",
            Call::DeleteNode {
                node_type: node_type.to_string(),
                node_id: node_id.to_string(),
            },
        )?;
        let removed = self
            .state
            .lock()
            .nodes
            .remove(&(node_type.to_string(), node_id.to_string()));
        Ok(usize::from(removed.is_some()))
    }

    fn delete_nodes(&self, node_type: &str) -> TransportResult<usize> {
        self.begin(
            "delete_nodes",
            Call::DeleteNodes {
                node_type: node_type.to_string(),
            },
        )?;
        let mut state = self.state.lock();
        let before = state.nodes.len();
        state.nodes.retain(|(t, _), _| t != node_type);
        Ok(before - state.nodes.len())
    }

    fn count_nodes(&self, node_type: &str) -> TransportResult<usize> {
        self.begin("count_nodes", Call::CountNodes(node_type.to_string()))?;
        let state = self.state.lock();
        Ok(state.nodes.keys().filter(|(t, _)| t == node_type).count())
    }

    fn count_edges(&self, edge_type: &str) -> TransportResult<usize> {
        self.begin("count_edges", Call::CountEdges(edge_type.to_string()))?;
        let state = self.state.lock();
        Ok(state.edges.iter().filter(|e| e.edge_type == edge_type).count())
    }

    fn run_gsql(&self, command: &str) -> TransportResult<String> {
        self.begin("run_gsql", Call::Gsql(command.to_string()))?;
        Ok(self.state.lock().gsql_outputs.pop_front().unwrap_or_default())
    }
}
