//! Sample schemas and graphs for integration tests

use std::sync::Arc;

use tigergraphx::{AttributeValue, Attributes, Graph, GraphOptions, GraphSchema};

use super::mock_transport::MockTransport;

pub const SOCIAL_SCHEMA_JSON: &str = r#"{
    "graph_name": "Social",
    "nodes": {
        "User": {
            "primary_key": "id",
            "attributes": {
                "id": "STRING",
                "name": "STRING",
                "age": "UINT"
            }
        },
        "Product": {
            "primary_key": "sku",
            "attributes": {
                "sku": "STRING",
                "price": {"data_type": "DOUBLE", "default_value": 0.0}
            },
            "vector_attributes": {"emb": 4}
        }
    },
    "edges": {
        "purchased": {
            "is_directed_edge": true,
            "from_node_type": "User",
            "to_node_type": "Product",
            "discriminator": "ts",
            "attributes": {"ts": "DATETIME", "quantity": "UINT"}
        },
        "friend_of": {
            "is_directed_edge": false,
            "from_node_type": "User",
            "to_node_type": "User",
            "attributes": {"since": "DATETIME"}
        }
    }
}"#;

pub const COMMUNITY_SCHEMA_JSON: &str = r#"{
    "graph_name": "MyGraph",
    "nodes": {
        "Community": {
            "primary_key": "id",
            "attributes": {"id": "STRING", "rank": "INT", "summary": "STRING"}
        }
    },
    "edges": {
        "linked_to": {
            "is_directed_edge": false,
            "from_node_type": "Community",
            "to_node_type": "Community"
        }
    }
}"#;

pub fn social_schema() -> GraphSchema {
    GraphSchema::from_json_str(SOCIAL_SCHEMA_JSON).expect("social schema must parse")
}

/// One node type and one edge type, so every type can be omitted
pub fn community_schema() -> GraphSchema {
    GraphSchema::from_json_str(COMMUNITY_SCHEMA_JSON).expect("community schema must parse")
}

pub fn social_graph() -> (Graph, Arc<MockTransport>) {
    graph_with_mock(social_schema(), GraphOptions::default())
}

pub fn community_graph() -> (Graph, Arc<MockTransport>) {
    graph_with_mock(community_schema(), GraphOptions::default())
}

pub fn graph_with_mock(schema: GraphSchema, options: GraphOptions) -> (Graph, Arc<MockTransport>) {
    super::init_logging();
    let transport = Arc::new(MockTransport::new());
    let graph = Graph::with_options(schema, transport.clone(), options);
    (graph, transport)
}

pub fn attrs<const N: usize>(pairs: [(&str, AttributeValue); N]) -> Attributes {
    pairs
        .into_iter()
        .map(|(name, value)| (name.to_string(), value))
        .collect()
}
