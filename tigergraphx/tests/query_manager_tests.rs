// Spec-driven retrieval: compiled scripts, parameters and normalized tables

#[path = "testutils/mod.rs"]
mod testutils;

use serde_json::json;
use tigergraphx::schema::SchemaError;
use tigergraphx::{
    DataFrame, EdgeSpec, GraphError, NeighborSpec, NodeSpec, ParamValue, QueryParams,
    TransportError,
};
use testutils::fixtures::{community_graph, social_graph};
use testutils::mock_transport::Call;

#[test]
fn test_node_query_script_and_table() {
    let (graph, transport) = community_graph();
    transport.push_response(json!([{
        "Nodes": [
            {"v_id": "c1", "v_type": "Community", "attributes": {"id": "c1", "rank": 3}},
            {"v_id": "c2", "v_type": "Community", "attributes": {"id": "c2", "rank": 1, "summary": "small"}}
        ]
    }]));

    let spec = NodeSpec::builder()
        .node_type("Community")
        .limit(10)
        .build_with_schema(graph.schema())
        .expect("valid spec");
    let frame = graph.get_nodes_from_spec(&spec).expect("compiles");

    assert_eq!(
        transport.scripts(),
        vec!["INTERPRET QUERY() FOR GRAPH MyGraph {\n  Nodes = {Community.*};\n  Nodes =\n    SELECT s\n    FROM Nodes:s\n    LIMIT 10\n  ;\n  PRINT Nodes;\n}".to_string()]
    );

    assert_eq!(frame.len(), 2);
    assert_eq!(frame.columns(), &["id", "rank", "summary"]);
    assert_eq!(frame.get(0, "rank"), Some(&json!(3)));
    assert_eq!(frame.get(0, "summary"), Some(&json!(null)));
    assert_eq!(frame.get(1, "summary"), Some(&json!("small")));
}

#[test]
fn test_node_query_projection_keeps_columns_when_empty() {
    let (graph, transport) = community_graph();
    let spec = NodeSpec::builder()
        .node_type("Community")
        .return_attributes(["id", "rank"])
        .build()
        .expect("valid spec");

    let frame = graph.get_nodes_from_spec(&spec).expect("compiles");
    assert!(frame.is_empty());
    assert_eq!(frame.columns(), &["id", "rank"]);

    let script = transport.scripts().pop().expect("query sent");
    assert!(script.contains("  PRINT Nodes[\n    Nodes.id AS id,\n    Nodes.rank AS rank\n  ];\n"));
}

#[test]
fn test_get_nodes_infers_single_type() {
    let (graph, transport) = community_graph();
    graph.get_nodes(None).expect("one node type");
    let script = transport.scripts().pop().expect("query sent");
    assert!(script.contains("Nodes = {Community.*};"));

    let (graph, _transport) = social_graph();
    assert!(matches!(
        graph.get_nodes(None),
        Err(GraphError::Schema(_))
    ));
}

#[test]
fn test_type_errors_from_specs_match_manager_errors() {
    let (graph, transport) = social_graph();

    let from_spec = graph.get_neighbors(&["u1"], None).expect_err("two node types");
    let from_write = graph
        .add_node("u1", None, &Default::default())
        .expect_err("two node types");
    assert!(matches!(
        from_spec,
        GraphError::Schema(SchemaError::AmbiguousType { .. })
    ));
    assert_eq!(from_spec.to_string(), from_write.to_string());

    assert!(matches!(
        graph.get_edges(Some("follows")),
        Err(GraphError::Schema(SchemaError::UnknownType { .. }))
    ));
    assert!(transport.calls().is_empty());
}

#[test]
fn test_neighbor_query() {
    let (graph, transport) = community_graph();
    transport.push_response(json!([{
        "Neighbors": [
            {"v_id": "c7", "v_type": "Community", "attributes": {"id": "c7", "rank": 9, "summary": "x"}}
        ]
    }]));

    let spec = NeighborSpec::builder(["c1", "c2"])
        .edge_types(["linked_to", "reverse_linked_to"])
        .target_node_types(["Community"])
        .return_attributes(["id", "rank"])
        .limit(10)
        .build_with_schema(graph.schema())
        .expect("start type is inferred");
    let frame = graph.get_neighbors_from_spec(&spec).expect("compiles");

    match transport.calls().last() {
        Some(Call::InterpretedQuery { script, params }) => {
            assert!(script.starts_with(
                "INTERPRET QUERY(\n  SET<VERTEX<Community>> start_nodes\n) FOR GRAPH MyGraph {\n"
            ));
            assert!(script.contains(
                "    FROM Nodes:s -((linked_to|reverse_linked_to):e)- Community:t\n    LIMIT 10\n"
            ));
            assert_eq!(
                params.get("start_nodes"),
                Some(&ParamValue::vertex_set(["c1", "c2"], "Community"))
            );
        }
        other => panic!("unexpected call: {:?}", other),
    }

    assert_eq!(frame.columns(), &["id", "rank"]);
    assert_eq!(frame.get(0, "id"), Some(&json!("c7")));
}

#[test]
fn test_get_neighbors_rejects_empty_start_nodes() {
    let (graph, transport) = community_graph();
    assert!(matches!(
        graph.get_neighbors(&[], None),
        Err(GraphError::Spec(_))
    ));
    assert!(transport.calls().is_empty());
}

#[test]
fn test_edge_query() {
    let (graph, transport) = social_graph();
    transport.push_response(json!([{
        "Edges": [
            {"e_type": "purchased", "from_id": "u1", "to_id": "p1", "from_type": "User", "to_type": "Product",
             "attributes": {"ts": "2024-01-01 00:00:00", "quantity": 2}},
            {"e_type": "purchased", "from_id": "u2", "to_id": "p1", "from_type": "User", "to_type": "Product",
             "attributes": {"ts": "2024-01-02 00:00:00", "quantity": 5}},
            {"e_type": "purchased", "from_id": "u3", "to_id": "p2", "from_type": "User", "to_type": "Product",
             "attributes": {"ts": "2024-01-03 00:00:00", "quantity": 1}}
        ]
    }]));

    let spec = EdgeSpec::builder()
        .source_node_type("User")
        .edge_type("purchased")
        .target_node_type("Product")
        .return_attributes(["quantity", "e_type"])
        .limit(2)
        .build_with_schema(graph.schema())
        .expect("valid spec");
    let frame = graph.get_edges_from_spec(&spec).expect("compiles");

    let script = transport.scripts().pop().expect("query sent");
    assert!(script.contains("  ListAccum<EDGE> @@edges;\n  Source = {User.*};\n"));
    assert!(script.contains("    ACCUM @@edges += e\n    LIMIT 2\n"));

    assert_eq!(frame.columns(), &["from_id", "to_id", "quantity", "e_type"]);
    assert_eq!(frame.len(), 2);
    assert_eq!(frame.get(1, "quantity"), Some(&json!(5)));
    assert_eq!(frame.get(1, "e_type"), Some(&json!("purchased")));
}

#[test]
fn test_get_edges_without_type_uses_any_seed() {
    let (graph, transport) = social_graph();
    graph.get_edges(None).expect("no type needed");
    let script = transport.scripts().pop().expect("query sent");
    assert!(script.contains("Source = {ANY};"));
    assert!(script.contains("FROM Source:s -(:e)- :t"));
}

#[test]
fn test_transport_failure_yields_empty_table() {
    let (graph, transport) = social_graph();
    transport.fail("run_interpreted_query", TransportError::Timeout(30_000));

    let nodes = graph.get_nodes(Some("User")).expect("compiles");
    assert_eq!(nodes, DataFrame::empty());

    let edges = graph.get_edges(Some("friend_of")).expect("compiles");
    assert!(edges.is_empty());
    assert!(edges.columns().is_empty());

    let neighbors = graph
        .get_neighbors(&["u1"], Some("User"))
        .expect("compiles");
    assert!(neighbors.is_empty());
}

#[test]
fn test_empty_response_is_stable() {
    let (graph, _transport) = social_graph();
    let first = graph.get_nodes(Some("User")).expect("compiles");
    let second = graph.get_nodes(Some("User")).expect("compiles");
    assert!(first.is_empty());
    assert_eq!(first, second);
}

#[test]
fn test_run_query() {
    let (graph, transport) = social_graph();
    transport.push_response(json!([{"total": 42}]));

    let mut params = QueryParams::new();
    params.insert("limit".to_string(), ParamValue::from(5));
    let response = graph
        .run_query("count_users", &params)
        .expect("query succeeds");
    assert_eq!(response[0].get("total"), Some(&json!(42)));
    assert!(transport.calls().contains(&Call::InstalledQuery {
        name: "count_users".to_string(),
        params,
    }));

    transport.fail("run_installed_query", TransportError::Remote("missing".to_string()));
    assert!(graph.run_query("count_users", &QueryParams::new()).is_none());
}
