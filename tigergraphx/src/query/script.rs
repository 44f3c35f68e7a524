// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
// Structured interpreted-query script
//
// A script is a fixed sequence of optional clause nodes:
// header (parameters) -> declarations -> seed -> refine -> print.
// Rendering walks the fields in that order, so clause order cannot drift.

const INDENT: &str = "  ";
const CLAUSE_INDENT: &str = "    ";

/// `<var> = {<source>};`
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Seed {
    pub var: String,
    pub source: String,
}

/// `<var> = SELECT <alias> FROM <pattern> [WHERE] [ACCUM] [LIMIT];`
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Select {
    pub var: String,
    pub alias: String,
    pub from: String,
    pub filter: Option<String>,
    pub accum: Option<String>,
    pub limit: Option<usize>,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Print {
    /// `PRINT <var>;` or `PRINT <var>[<var>.<attr> AS <attr>, ...];`
    VertexSet {
        var: String,
        projection: Option<Vec<String>>,
    },
    /// `PRINT <accum> AS <label>;`
    Accumulator { accum: String, label: String },
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Script {
    pub graph_name: String,
    pub params: Vec<String>,
    pub declarations: Vec<String>,
    pub seed: Seed,
    pub refine: Option<Select>,
    pub print: Print,
}

impl Script {
    pub fn render(&self) -> String {
        let mut out = String::new();

        if self.params.is_empty() {
            out.push_str("INTERPRET QUERY()");
        } else {
            out.push_str("INTERPRET QUERY(\n");
            let params: Vec<String> = self
                .params
                .iter()
                .map(|p| format!("{}{}", INDENT, p))
                .collect();
            out.push_str(&params.join(",\n"));
            out.push_str("\n)");
        }
        out.push_str(&format!(" FOR GRAPH {} {{\n", self.graph_name));

        for decl in &self.declarations {
            out.push_str(&format!("{}{}\n", INDENT, decl));
        }

        out.push_str(&format!(
            "{}{} = {{{}}};\n",
            INDENT, self.seed.var, self.seed.source
        ));

        if let Some(select) = &self.refine {
            out.push_str(&format!("{}{} =\n", INDENT, select.var));
            out.push_str(&format!("{}SELECT {}\n", CLAUSE_INDENT, select.alias));
            out.push_str(&format!("{}FROM {}\n", CLAUSE_INDENT, select.from));
            if let Some(filter) = &select.filter {
                out.push_str(&format!("{}WHERE {}\n", CLAUSE_INDENT, filter));
            }
            if let Some(accum) = &select.accum {
                out.push_str(&format!("{}ACCUM {}\n", CLAUSE_INDENT, accum));
            }
            if let Some(limit) = select.limit {
                out.push_str(&format!("{}LIMIT {}\n", CLAUSE_INDENT, limit));
            }
            out.push_str(&format!("{};\n", INDENT));
        }

        match &self.print {
            Print::VertexSet {
                var,
                projection: None,
            } => out.push_str(&format!("{}PRINT {};\n", INDENT, var)),
            Print::VertexSet {
                var,
                projection: Some(attrs),
            } => {
                out.push_str(&format!("{}PRINT {}[\n", INDENT, var));
                let items: Vec<String> = attrs
                    .iter()
                    .map(|attr| format!("{}{}.{} AS {}", CLAUSE_INDENT, var, attr, attr))
                    .collect();
                out.push_str(&items.join(",\n"));
                out.push_str(&format!("\n{}];\n", INDENT));
            }
            Print::Accumulator { accum, label } => {
                out.push_str(&format!("{}PRINT {} AS {};\n", INDENT, accum, label))
            }
        }

        out.push('}');
        out
    }
}
