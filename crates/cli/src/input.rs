//! Graph and constraint sources for the CLI: inline edge lists, presets,
//! JSON problem files and CSV edge lists.

use anyhow::{anyhow, bail, ensure, Context, Result};
use edgelab::labeling::{AllowedLabels, Edge, LabelSet};
use polars::prelude::*;
use serde::Deserialize;
use std::path::Path;

/// Problem file layout (`.json`). Parameters left out here must come from
/// the command line.
#[derive(Debug, Default, Deserialize)]
pub struct ProblemFile {
    pub edges: Vec<(usize, usize)>,
    pub a: Option<usize>,
    pub b: Option<usize>,
    pub k: Option<usize>,
    #[serde(default)]
    pub allowed: Vec<AllowedEntry>,
}

#[derive(Debug, Deserialize)]
pub struct AllowedEntry {
    pub edge: (usize, usize),
    pub labels: Vec<usize>,
}

impl ProblemFile {
    pub fn edges(&self) -> Vec<Edge> {
        self.edges.iter().copied().map(Edge::from).collect()
    }

    pub fn allowed(&self) -> Vec<(Edge, LabelSet)> {
        self.allowed
            .iter()
            .map(|e| (Edge::from(e.edge), e.labels.iter().copied().collect()))
            .collect()
    }
}

/// `"3-7"` → `Edge(3, 7)`.
pub fn parse_edge(s: &str) -> Result<Edge> {
    let (u, v) = s
        .trim()
        .split_once('-')
        .with_context(|| format!("edge `{s}` must look like U-V"))?;
    let u = u.trim().parse().with_context(|| format!("bad vertex in `{s}`"))?;
    let v = v.trim().parse().with_context(|| format!("bad vertex in `{s}`"))?;
    Ok(Edge(u, v))
}

/// `"0-1, 0-2"` → two edges, order preserved.
pub fn parse_edge_list(s: &str) -> Result<Vec<Edge>> {
    s.split(',')
        .filter(|part| !part.trim().is_empty())
        .map(parse_edge)
        .collect()
}

/// `"0-1=1,2"` → edge `(0, 1)` restricted to labels {1, 2}.
pub fn parse_allow(s: &str) -> Result<(Edge, LabelSet)> {
    let (edge, labels) = s
        .split_once('=')
        .with_context(|| format!("constraint `{s}` must look like U-V=L1,L2"))?;
    let labels = labels
        .split(',')
        .filter(|l| !l.trim().is_empty())
        .map(|l| {
            l.trim()
                .parse::<usize>()
                .with_context(|| format!("bad label `{l}` in `{s}`"))
        })
        .collect::<Result<LabelSet>>()?;
    Ok((parse_edge(edge)?, labels))
}

/// Merge constraint entries; an edge named twice keeps the common labels.
pub fn merge_allowed(entries: impl IntoIterator<Item = (Edge, LabelSet)>) -> AllowedLabels {
    let mut out = AllowedLabels::new();
    for (edge, labels) in entries {
        out.entry(edge)
            .and_modify(|cur: &mut LabelSet| cur.retain(|l| labels.contains(l)))
            .or_insert(labels);
    }
    out
}

/// Named graphs: `extended-four-star`, `star:N`, `path:N`, `cycle:N`.
pub fn preset(name: &str) -> Result<Vec<Edge>> {
    if name == "extended-four-star" {
        return Ok(edgelab::extended_four_star());
    }
    let (kind, n) = name
        .split_once(':')
        .with_context(|| format!("unknown preset `{name}`"))?;
    let n: usize = n
        .parse()
        .with_context(|| format!("bad size in preset `{name}`"))?;
    let edges = match kind {
        "star" => (1..=n).map(|v| Edge(0, v)).collect(),
        "path" => (0..n).map(|v| Edge(v, v + 1)).collect(),
        "cycle" => {
            ensure!(n >= 3, "cycle needs at least 3 edges");
            (0..n).map(|v| Edge(v, (v + 1) % n)).collect()
        }
        _ => bail!("unknown preset kind `{kind}`"),
    };
    Ok(edges)
}

pub fn read_problem_file(path: &Path) -> Result<ProblemFile> {
    let text =
        std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))
}

/// Edge list from a CSV with integer columns `u` and `v`, row order kept.
pub fn read_csv_edges(path: &Path) -> Result<Vec<Edge>> {
    let df = LazyCsvReader::new(path)
        .with_infer_schema_length(Some(100))
        .finish()?
        .collect()
        .with_context(|| format!("reading {}", path.display()))?;
    tracing::info!(rows = df.height(), cols = df.width(), "edge_csv_shape");
    let u = endpoint_column(&df, "u")?;
    let v = endpoint_column(&df, "v")?;
    Ok(u.into_iter().zip(v).map(|(u, v)| Edge(u, v)).collect())
}

/// Vertex ids of one CSV column. Non-integer columns, negative ids and empty
/// cells are errors; nothing is rounded or truncated.
fn endpoint_column(df: &DataFrame, name: &str) -> Result<Vec<usize>> {
    let col = df
        .column(name)
        .with_context(|| format!("edge csv needs a `{name}` column"))?;
    ensure!(
        col.dtype().is_integer(),
        "column `{name}` must hold integer vertex ids, found {}",
        col.dtype()
    );
    let col = col
        .strict_cast(&DataType::Int64)
        .with_context(|| format!("column `{name}` does not fit in i64"))?;
    col.i64()?
        .into_iter()
        .enumerate()
        .map(|(row, id)| match id {
            Some(id) if id >= 0 => Ok(id as usize),
            Some(id) => Err(anyhow!("row {row}: negative vertex {id} in `{name}`")),
            None => Err(anyhow!("row {row}: missing `{name}`")),
        })
        .collect()
}

/// Pick a reader by extension.
pub fn read_input(path: &Path) -> Result<ProblemFile> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("json") => read_problem_file(path),
        Some("csv") => {
            let edges = read_csv_edges(path)?;
            Ok(ProblemFile {
                edges: edges.iter().map(|e| (e.0, e.1)).collect(),
                ..ProblemFile::default()
            })
        }
        _ => bail!("unsupported input {} (want .json or .csv)", path.display()),
    }
}
