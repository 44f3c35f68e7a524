// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
// DDL rendering for graph creation and removal

use super::graph_schema::{EdgeSchema, GraphSchema, NodeSchema};
use super::types::AttributeSchema;

/// Name of the schema-change job used to populate a freshly created graph
pub fn schema_change_job_name(graph_name: &str) -> String {
    format!("schema_change_job_for_graph_{}", graph_name)
}

/// Render the full script that creates the graph and all of its types
pub fn create_graph_script(schema: &GraphSchema) -> String {
    let graph_name = schema.graph_name();
    let job_name = schema_change_job_name(graph_name);

    let mut statements = Vec::new();
    for (name, node) in schema.nodes() {
        statements.push(add_vertex_statement(name, node));
    }
    for (name, edge) in schema.edges() {
        statements.push(add_edge_statement(name, edge));
    }
    for (name, node) in schema.nodes() {
        for (attr_name, vector) in node.vector_attributes() {
            statements.push(format!(
                "ALTER VERTEX {} ADD VECTOR ATTRIBUTE {}(DIMENSION={}, METRIC=\"{}\");",
                name,
                attr_name,
                vector.dimension,
                vector.metric.as_gsql()
            ));
        }
    }

    let body: String = statements
        .iter()
        .map(|s| format!("  {}\n", s))
        .collect();

    format!(
        "CREATE GRAPH {graph}()\n\
         CREATE SCHEMA_CHANGE JOB {job} FOR GRAPH {graph} {{\n\
         {body}\
         }}\n\
         RUN SCHEMA_CHANGE JOB {job}\n\
         DROP JOB {job}",
        graph = graph_name,
        job = job_name,
        body = body
    )
}

/// Render the statement that removes a graph together with its types
pub fn drop_graph_script(graph_name: &str) -> String {
    format!("DROP GRAPH {} CASCADE", graph_name)
}

fn attribute_definition(name: &str, attr: &AttributeSchema) -> String {
    match &attr.default_value {
        Some(value) => format!(
            "{} {} DEFAULT {}",
            name,
            attr.data_type.as_gsql(),
            value.to_gsql_literal()
        ),
        None => format!("{} {}", name, attr.data_type.as_gsql()),
    }
}

fn add_vertex_statement(name: &str, node: &NodeSchema) -> String {
    let mut columns = Vec::with_capacity(node.attributes().len());
    for (attr_name, attr) in node.attributes() {
        if attr_name == node.primary_key() {
            columns.insert(
                0,
                format!("PRIMARY_ID {} {}", attr_name, attr.data_type.as_gsql()),
            );
        } else {
            columns.push(attribute_definition(attr_name, attr));
        }
    }
    format!(
        "ADD VERTEX {}({}) WITH PRIMARY_ID_AS_ATTRIBUTE=\"true\";",
        name,
        columns.join(", ")
    )
}

fn add_edge_statement(name: &str, edge: &EdgeSchema) -> String {
    let mut columns = vec![
        format!("FROM {}", edge.from_node_type()),
        format!("TO {}", edge.to_node_type()),
    ];
    if !edge.discriminator().is_empty() {
        let keys: Vec<String> = edge
            .discriminator()
            .iter()
            .filter_map(|d| {
                edge.attributes()
                    .get(d)
                    .map(|attr| format!("{} {}", d, attr.data_type.as_gsql()))
            })
            .collect();
        columns.push(format!("DISCRIMINATOR({})", keys.join(", ")));
    }
    for (attr_name, attr) in edge.attributes() {
        if !edge.discriminator().contains(attr_name) {
            columns.push(attribute_definition(attr_name, attr));
        }
    }

    if edge.is_directed() {
        format!(
            "ADD DIRECTED EDGE {}({}) WITH REVERSE_EDGE=\"reverse_{}\";",
            name,
            columns.join(", "),
            name
        )
    } else {
        format!("ADD UNDIRECTED EDGE {}({});", name, columns.join(", "))
    }
}

/// Render the script that creates and installs the degree query
///
/// The query takes `input` (a vertex) and `edge_types` (empty means every
/// edge type) and prints the summed outdegree as `degree`.
pub fn install_degree_query_script(graph_name: &str, query_name: &str) -> String {
    format!(
        "USE GRAPH {graph}\n\
         CREATE OR REPLACE QUERY {query}(VERTEX input, SET<STRING> edge_types) {{\n\
         \x20 SumAccum<INT> @@sum_degree;\n\
         \x20 IF edge_types.size() == 0 THEN\n\
         \x20   @@sum_degree += input.outdegree();\n\
         \x20 ELSE\n\
         \x20   FOREACH edge_type IN edge_types DO\n\
         \x20     @@sum_degree += input.outdegree(edge_type);\n\
         \x20   END;\n\
         \x20 END;\n\
         \x20 PRINT @@sum_degree AS degree;\n\
         }}\n\
         INSTALL QUERY {query}",
        graph = graph_name,
        query = query_name
    )
}
