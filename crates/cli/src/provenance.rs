//! Provenance sidecars for result files: which labeling problem produced an
//! artifact, with which code revision.

use anyhow::{Context, Result};
use edgelab::labeling::{AllowedLabels, Edge, LabelParams};
use serde_json::{json, Value};
use std::fs;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::process::Command;

/// The labeling problem behind one artifact, as recorded in its sidecar.
pub struct Payload {
    pub command: &'static str,
    pub edges: Vec<Edge>,
    pub params: LabelParams,
    /// Constraints that actually took part in the search.
    pub allowed: AllowedLabels,
}

impl Payload {
    pub fn new(
        command: &'static str,
        edges: &[Edge],
        params: LabelParams,
        allowed: &AllowedLabels,
    ) -> Self {
        Self {
            command,
            edges: edges.to_vec(),
            params,
            allowed: allowed.clone(),
        }
    }

    fn problem_json(&self) -> Value {
        let allowed: Vec<Value> = self
            .allowed
            .iter()
            .map(|(e, labels)| json!({ "edge": (e.0, e.1), "labels": labels }))
            .collect();
        json!({
            "edge_count": self.edges.len(),
            "edges": self.edges.iter().map(|e| (e.0, e.1)).collect::<Vec<_>>(),
            "a": self.params.a,
            "b": self.params.b,
            "k": self.params.k,
            "allowed": allowed,
        })
    }
}

/// Write `<stem>.provenance.json` next to `artifact`: git commit, crate version,
/// callsite, command, the labeling problem and the output path.
#[track_caller]
pub fn write_sidecar<P: AsRef<Path>>(artifact: P, payload: Payload) -> Result<PathBuf> {
    let artifact = artifact.as_ref();
    let sidecar = provenance_path(artifact);
    let callsite = Location::caller();
    let doc = json!({
        "code_rev": current_git_rev(),
        "edgelab_version": edgelab::VERSION,
        "command": payload.command,
        "callsite": format!("{}:{}", callsite.file(), callsite.line()),
        "problem": payload.problem_json(),
        "outputs": [artifact.to_string_lossy()]
    });
    fs::write(&sidecar, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", sidecar.display()))?;
    Ok(sidecar)
}

/// `out/star.json` → `out/star.provenance.json`.
fn provenance_path(artifact: &Path) -> PathBuf {
    let stem = artifact
        .file_stem()
        .map_or_else(|| "artifact".into(), |s| s.to_string_lossy());
    artifact.with_file_name(format!("{stem}.provenance.json"))
}

/// `GIT_COMMIT` (build time, then run time), else `git rev-parse HEAD`,
/// else "unknown".
pub fn current_git_rev() -> String {
    let from_env = option_env!("GIT_COMMIT")
        .map(str::to_string)
        .or_else(|| std::env::var("GIT_COMMIT").ok())
        .filter(|rev| !rev.is_empty());
    if let Some(rev) = from_env {
        return rev;
    }
    Command::new("git")
        .args(["rev-parse", "HEAD"])
        .output()
        .ok()
        .filter(|output| output.status.success())
        .and_then(|output| String::from_utf8(output.stdout).ok())
        .map(|rev| rev.trim().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}
