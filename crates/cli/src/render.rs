//! Graphviz rendering of a possibility table: each edge annotated with the
//! labels it can take.

use edgelab::labeling::{format_label_set, Edge, PossibilityTable};
use std::fmt::Write;

pub fn to_dot(edges: &[Edge], table: &PossibilityTable) -> String {
    let mut out = String::from("graph possibilities {\n");
    for (e, labels) in edges.iter().zip(table) {
        // writing into a String cannot fail
        let _ = writeln!(
            out,
            "  {} -- {} [label=\"{}\"];",
            e.0,
            e.1,
            format_label_set(labels)
        );
    }
    out.push_str("}\n");
    out
}
