// Graph facade: schema lifecycle, statistics and options

#[path = "testutils/mod.rs"]
mod testutils;

use std::sync::Arc;

use serde_json::json;
use tigergraphx::{
    Graph, GraphConfig, GraphError, GraphOptions, ParamValue, TransportError,
};
use testutils::fixtures::{community_schema, graph_with_mock, social_graph, social_schema};
use testutils::mock_transport::{Call, MockTransport};

const SUCCESS_OUTPUT: &str = "Local schema change succeeded.\nThe job has been dropped.";

fn gsql_calls(transport: &MockTransport) -> Vec<String> {
    transport
        .calls()
        .into_iter()
        .filter_map(|c| match c {
            Call::Gsql(command) => Some(command),
            _ => None,
        })
        .collect()
}

#[test]
fn test_create_schema_success() {
    let (graph, transport) = social_graph();
    transport.push_gsql_output(SUCCESS_OUTPUT);

    graph.create_schema(false).expect("schema change succeeds");

    let commands = gsql_calls(&transport);
    assert_eq!(commands.len(), 1);
    assert!(commands[0].starts_with("CREATE GRAPH Social()"));
}

#[test]
fn test_create_schema_reports_failed_change() {
    let (graph, transport) = social_graph();
    transport.push_gsql_output("Semantic Check Fails: vertex type User already exists");

    match graph.create_schema(false) {
        Err(GraphError::SchemaChange { graph, output }) => {
            assert_eq!(graph, "Social");
            assert!(output.contains("already exists"));
        }
        other => panic!("expected schema change failure, got {:?}", other.err()),
    }
}

#[test]
fn test_create_schema_propagates_transport_failure() {
    let (graph, transport) = social_graph();
    transport.fail("run_gsql", TransportError::Request("connection refused".to_string()));
    assert!(matches!(
        graph.create_schema(false),
        Err(GraphError::Transport(TransportError::Request(_)))
    ));
}

#[test]
fn test_create_with_drop_existing_graph() {
    testutils::init_logging();
    let transport = Arc::new(MockTransport::new());
    transport.push_gsql_output("The graph Social is dropped.");
    transport.push_gsql_output(SUCCESS_OUTPUT);

    let config = GraphConfig::new(social_schema()).with_options(GraphOptions {
        drop_existing_graph: true,
        ..GraphOptions::default()
    });
    let graph = Graph::create(config, transport.clone()).expect("graph is created");
    assert_eq!(graph.name(), "Social");

    let commands = gsql_calls(&transport);
    assert_eq!(commands.len(), 3);
    assert_eq!(commands[0], "DROP GRAPH Social CASCADE");
    assert!(commands[1].starts_with("CREATE GRAPH Social()"));
    assert!(commands[2].starts_with("USE GRAPH Social\nCREATE OR REPLACE QUERY api_degree("));
    assert!(commands[2].ends_with("INSTALL QUERY api_degree"));
}

#[test]
fn test_create_installs_configured_degree_query() {
    testutils::init_logging();
    let transport = Arc::new(MockTransport::new());
    transport.push_gsql_output(SUCCESS_OUTPUT);

    let config = GraphConfig::new(social_schema()).with_options(GraphOptions {
        degree_query_name: "node_degree".to_string(),
        ..GraphOptions::default()
    });
    let graph = Graph::create(config, transport.clone()).expect("graph is created");

    let commands = gsql_calls(&transport);
    assert_eq!(commands.len(), 2);
    assert!(commands[1].ends_with("INSTALL QUERY node_degree"));

    transport.push_response(json!([{"degree": 4}]));
    assert_eq!(graph.degree("u1", Some("User"), &[]).expect("User is defined"), 4);
    assert!(matches!(
        transport.calls().last(),
        Some(Call::InstalledQuery { name, .. }) if name == "node_degree"
    ));
}

#[test]
fn test_create_fails_when_query_does_not_install() {
    testutils::init_logging();
    let transport = Arc::new(MockTransport::new());
    transport.push_gsql_output(SUCCESS_OUTPUT);
    transport.push_gsql_output(
        "Saved as draft query with type/semantic error: [api_degree].",
    );

    match Graph::create(GraphConfig::new(social_schema()), transport.clone()) {
        Err(GraphError::QueryInstall { query, output }) => {
            assert_eq!(query, "api_degree");
            assert!(output.contains("semantic error"));
        }
        other => panic!("expected install failure, got {:?}", other.err()),
    }
}

#[test]
fn test_create_stops_when_schema_change_fails() {
    testutils::init_logging();
    let transport = Arc::new(MockTransport::new());
    transport.push_gsql_output("Semantic Check Fails");

    assert!(matches!(
        Graph::create(GraphConfig::new(social_schema()), transport.clone()),
        Err(GraphError::SchemaChange { .. })
    ));
    assert_eq!(gsql_calls(&transport).len(), 1, "no install after a failed change");
}

#[test]
fn test_drop_graph() {
    let (graph, transport) = social_graph();
    graph.drop_graph().expect("drop succeeds");
    assert_eq!(gsql_calls(&transport), vec!["DROP GRAPH Social CASCADE"]);
}

#[test]
fn test_degree() {
    let (graph, transport) = social_graph();
    transport.push_response(json!([{"degree": 7}]));

    let degree = graph
        .degree("u1", Some("User"), &["friend_of"])
        .expect("User is defined");
    assert_eq!(degree, 7);

    match transport.calls().last() {
        Some(Call::InstalledQuery { name, params }) => {
            assert_eq!(name, "api_degree");
            assert_eq!(params.get("input"), Some(&ParamValue::vertex("u1", "User")));
            assert_eq!(
                params.get("edge_types"),
                Some(&ParamValue::list(["friend_of"]))
            );
        }
        other => panic!("unexpected call: {:?}", other),
    }
}

#[test]
fn test_degree_failures_yield_zero() {
    let (graph, transport) = social_graph();
    transport.push_response(json!([{"degree": "lots"}]));
    assert_eq!(graph.degree("u1", Some("User"), &[]).expect("User is defined"), 0);

    assert_eq!(graph.degree("u1", Some("User"), &[]).expect("User is defined"), 0);

    transport.fail("run_installed_query", TransportError::Timeout(5));
    assert_eq!(graph.degree("u1", Some("User"), &[]).expect("User is defined"), 0);
}

#[test]
fn test_custom_options_flow_into_queries() {
    let options = GraphOptions {
        num_edge_samples: 25,
        degree_query_name: "node_degree".to_string(),
        drop_existing_graph: false,
    };
    let (graph, transport) = graph_with_mock(community_schema(), options);

    graph
        .get_node_edges("c1", None, &[])
        .expect("single node type");
    let script = transport.scripts().pop().expect("query sent");
    assert!(script.contains("LIMIT 25"));

    graph.degree("c1", None, &[]).expect("single node type");
    assert!(matches!(
        transport.calls().last(),
        Some(Call::InstalledQuery { name, .. }) if name == "node_degree"
    ));
}

#[test]
fn test_type_resolution_errors_surface_before_transport() {
    let (graph, transport) = social_graph();
    assert!(graph.degree("u1", None, &[]).is_err());
    assert!(graph.has_node("u1", Some("Ghost")).is_err());
    assert!(graph
        .has_edge("u1", "u2", Some("Ghost"), Some("friend_of"), None)
        .is_err());
    assert!(transport.calls().is_empty());
}

#[test]
fn test_number_of_nodes_and_edges() {
    let (graph, transport) = social_graph();
    graph
        .add_nodes_from(["u1", "u2", "u3"], Some("User"), &Default::default())
        .expect("valid nodes");
    graph
        .add_node("p1", Some("Product"), &Default::default())
        .expect("valid node");
    graph
        .add_edges_from([("u1", "u2"), ("u2", "u3")], None, Some("friend_of"), None, &Default::default())
        .expect("valid edges");

    assert_eq!(graph.number_of_nodes(Some("User")).expect("User is defined"), 3);
    assert_eq!(graph.number_of_nodes(None).expect("no type needed"), 4);
    assert_eq!(graph.number_of_edges(Some("friend_of")).expect("defined"), 2);
    assert_eq!(graph.number_of_edges(None).expect("no type needed"), 2);

    assert!(matches!(
        graph.number_of_nodes(Some("Ghost")),
        Err(GraphError::Schema(_))
    ));

    transport.fail("count_nodes", TransportError::Timeout(50));
    assert_eq!(graph.number_of_nodes(None).expect("no type needed"), 0);
}
