mod input;
mod provenance;
mod render;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use edgelab::labeling::{
    labelings, possibilities, range_branch, AllowedLabels, Edge, LabelParams, SearchCfg,
};
use serde_json::json;
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;

#[derive(Parser)]
#[command(name = "edgelab")]
#[command(about = "Enumerate L(a,b)-k edge labelings of small gadget graphs")]
struct Cmd {
    /// Log search statistics at debug level
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Print every valid labeling
    Solve {
        #[command(flatten)]
        graph: GraphArgs,
        /// Write JSON here (plus a provenance sidecar) instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Print the labels each edge can take
    Poss {
        #[command(flatten)]
        graph: GraphArgs,
        /// Keep mirror-image labelings
        #[arg(long)]
        no_symmetry: bool,
        /// Print Graphviz DOT instead of JSON
        #[arg(long)]
        dot: bool,
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// For each label of FIXED, the labels INTEREST can take
    Range {
        #[command(flatten)]
        graph: GraphArgs,
        #[arg(long, value_parser = input::parse_edge)]
        fixed: Edge,
        #[arg(long, value_parser = input::parse_edge)]
        interest: Edge,
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Print a small provenance JSON block
    Report,
}

#[derive(Args)]
#[group(required = true, multiple = false)]
struct Source {
    /// Inline edge list, e.g. "0-1,0-2,1-5"
    #[arg(long)]
    edges: Option<String>,
    /// extended-four-star, star:N, path:N or cycle:N
    #[arg(long)]
    preset: Option<String>,
    /// Problem file (.json) or edge list (.csv with columns u,v)
    #[arg(long)]
    input: Option<PathBuf>,
}

#[derive(Args)]
struct GraphArgs {
    #[command(flatten)]
    source: Source,
    /// Minimum label distance between adjacent edges
    #[arg(short)]
    a: Option<usize>,
    /// Minimum label distance between edges at distance two
    #[arg(short)]
    b: Option<usize>,
    /// Number of labels (0..k)
    #[arg(short)]
    k: Option<usize>,
    /// Restrict an edge's labels, e.g. "0-1=1"; repeatable
    #[arg(long, value_parser = input::parse_allow)]
    allow: Vec<(Edge, edgelab::labeling::LabelSet)>,
}

/// A fully resolved query.
struct Problem {
    edges: Vec<Edge>,
    params: LabelParams,
    allowed: AllowedLabels,
}

impl GraphArgs {
    fn load(self) -> Result<Problem> {
        let file = match &self.source.input {
            Some(path) => Some(input::read_input(path)?),
            None => None,
        };
        let edges = if let Some(s) = &self.source.edges {
            input::parse_edge_list(s)?
        } else if let Some(name) = &self.source.preset {
            input::preset(name)?
        } else {
            file.as_ref().map(|f| f.edges()).unwrap_or_default()
        };
        let pick = |cli: Option<usize>, from_file: Option<usize>, name: &str| {
            cli.or(from_file)
                .with_context(|| format!("-{name} missing (flag or problem file)"))
        };
        let params = LabelParams::new(
            pick(self.a, file.as_ref().and_then(|f| f.a), "a")?,
            pick(self.b, file.as_ref().and_then(|f| f.b), "b")?,
            pick(self.k, file.as_ref().and_then(|f| f.k), "k")?,
        );
        let from_file = file.as_ref().map(|f| f.allowed()).unwrap_or_default();
        let allowed = input::merge_allowed(from_file.into_iter().chain(self.allow));
        Ok(Problem {
            edges,
            params,
            allowed,
        })
    }
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_max_level(if cmd.verbose { Level::DEBUG } else { Level::INFO })
        .init();
    match cmd.action {
        Action::Solve { graph, out } => solve(graph.load()?, out),
        Action::Poss {
            graph,
            no_symmetry,
            dot,
            out,
        } => poss(graph.load()?, !no_symmetry, dot, out),
        Action::Range {
            graph,
            fixed,
            interest,
            out,
        } => range(graph.load()?, fixed, interest, out),
        Action::Report => report(),
    }
}

fn solve(p: Problem, out: Option<PathBuf>) -> Result<()> {
    tracing::info!(edges = p.edges.len(), k = p.params.k, "solve");
    let sols = labelings(&p.edges, p.params, &p.allowed)?;
    let doc = json!({ "count": sols.len(), "labelings": sols });
    emit("solve", &p, doc.to_string(), out)
}

fn poss(p: Problem, remove_symmetry: bool, dot: bool, out: Option<PathBuf>) -> Result<()> {
    tracing::info!(edges = p.edges.len(), k = p.params.k, remove_symmetry, "poss");
    let table = possibilities(&p.edges, p.params, SearchCfg { remove_symmetry }, &p.allowed)?;
    let text = if dot {
        render::to_dot(&p.edges, &table)
    } else {
        serde_json::to_string(&table)?
    };
    emit("poss", &p, text, out)
}

fn range(mut p: Problem, fixed: Edge, interest: Edge, out: Option<PathBuf>) -> Result<()> {
    tracing::info!(%fixed, %interest, "range");
    if !p.allowed.is_empty() {
        tracing::warn!("--allow is ignored by range queries");
        // keep the sidecar to inputs the search actually used
        p.allowed.clear();
    }
    let res = range_branch(&p.edges, p.params, fixed, interest)?;
    emit("range", &p, serde_json::to_string(&res)?, out)
}

/// Print to stdout, or write to `out` with a provenance sidecar.
fn emit(command: &'static str, p: &Problem, text: String, out: Option<PathBuf>) -> Result<()> {
    let Some(out) = out else {
        println!("{text}");
        return Ok(());
    };
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(&out, text).with_context(|| format!("writing {}", out.display()))?;
    let payload = provenance::Payload::new(command, &p.edges, p.params, &p.allowed);
    let sidecar = provenance::write_sidecar(&out, payload)?;
    tracing::info!(out = %out.display(), provenance = %sidecar.display(), "written");
    Ok(())
}

fn report() -> Result<()> {
    let obj = json!({
        "code_rev": provenance::current_git_rev(),
        "edgelab_version": edgelab::VERSION,
        "params": {},
        "outputs": []
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
