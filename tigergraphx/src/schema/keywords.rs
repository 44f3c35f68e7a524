// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
// Reserved keywords of the GSQL dialect

use once_cell::sync::Lazy;
use std::collections::HashSet;

static RESERVED_KEYWORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "ACCUM", "ADD", "ALL", "ALLOCATE", "ALTER", "AND", "ANY", "AS", "ASC", "AVG", "BAG",
        "BATCH", "BETWEEN", "BIGINT", "BLOB", "BOOL", "BOOLEAN", "BOTH", "BREAK", "BY", "CALL",
        "CASCADE", "CASE", "CATCH", "CHAR", "CHARACTER", "CHECK", "CLOB", "COALESCE",
        "COMPRESS", "CONST", "CONSTRAINT", "CONTINUE", "COST", "COUNT", "CREATE",
        "CURRENT_DATE", "CURRENT_TIME", "CURRENT_TIMESTAMP", "CURSOR", "DATETIME",
        "DATETIME_ADD", "DATETIME_SUB", "DECIMAL", "DECLARE", "DEFAULT", "DELETE", "DESC",
        "DISTINCT", "DO", "DOUBLE", "DROP", "EDGE", "ELSE", "ELSEIF", "END", "ESCAPE",
        "EXCEPTION", "EXISTS", "FALSE", "FILE", "FILTER", "FIXED_BINARY", "FLOAT", "FOR",
        "FOREACH", "FROM", "GLOBAL", "GRANTS", "GRAPH", "GROUP", "GROUPBY", "HAVING",
        "HEADER", "IF", "IN", "INDEX", "INPUT_LINE_FILTER", "INSERT", "INT", "INT16",
        "INT32", "INT32_T", "INT64_T", "INT8", "INTEGER", "INTERPRET", "INTERSECT",
        "INTERVAL", "INTO", "IS", "ISEMPTY", "JOB", "JOIN", "JSONARRAY", "JSONOBJECT",
        "KAFKA", "KEY", "LEADING", "LIKE", "LIMIT", "LIST", "LOAD", "LOADACCUM", "LOG",
        "LONG", "MAP", "MINUS", "NOBODY", "NOT", "NOW", "NULL", "OFFSET", "ON",
        "OPENCYPHER", "OR", "ORDER", "PINNED", "POST_ACCUM", "POST-ACCUM", "PRIMARY",
        "PRIMARY_ID", "PRINT", "PROXY", "QUERY", "QUIT", "RAISE", "RANGE", "REDUCE",
        "REPLACE", "RESET_COLLECTION_ACCUM", "RETURN", "RETURNS", "RUN", "SAMPLE", "SELECT",
        "SELECTVERTEX", "SET", "STATIC", "STRING", "SUM", "TARGET", "TEMP_TABLE", "THEN",
        "TO", "TO_CSV", "TO_DATETIME", "TRAILING", "TRIM", "TRUE", "TRY", "TUPLE", "TYPE",
        "TYPEDEF", "UINT", "UINT16", "UINT32", "UINT32_T", "UINT64_T", "UINT8", "UINT8_T",
        "UNION", "UPDATE", "UPSERT", "USING", "VALUES", "VERTEX", "WHEN", "WHERE", "WHILE",
        "WITH",
    ]
    .into_iter()
    .collect()
});

/// Check whether a name collides (case-insensitively) with a reserved keyword
pub fn is_reserved_keyword(name: &str) -> bool {
    RESERVED_KEYWORDS.contains(name.to_ascii_uppercase().as_str())
}
