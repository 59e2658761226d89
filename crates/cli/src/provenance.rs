use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::{json, Value};
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Write `summary` as pretty JSON to `path` plus a `<stem>.provenance.json`
/// sidecar recording the code revision, tool version and `params`.
pub fn write_summary<S: Serialize>(path: &Path, summary: &S, params: Value) -> Result<PathBuf> {
    ensure_parent(path)?;
    fs::write(path, serde_json::to_vec_pretty(summary)?)
        .with_context(|| format!("writing {}", path.display()))?;
    write_sidecar(path, params)
}

fn write_sidecar(artifact: &Path, params: Value) -> Result<PathBuf> {
    let sidecar = provenance_path(artifact);
    ensure_parent(&sidecar)?;
    let doc = json!({
        "code_rev": current_git_rev(),
        "version": thrackle::VERSION,
        "params": params,
        "outputs": [artifact.to_string_lossy()]
    });
    fs::write(&sidecar, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", sidecar.display()))?;
    Ok(sidecar)
}

fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating directory {}", parent.display()))?;
        }
    }
    Ok(())
}

fn provenance_path(artifact: &Path) -> PathBuf {
    let mut name = artifact
        .file_stem()
        .map(|s| s.to_os_string())
        .unwrap_or_else(|| OsString::from("summary"));
    name.push(".provenance.json");
    artifact.with_file_name(name)
}

fn current_git_rev() -> String {
    if let Some(rev) = option_env!("GIT_COMMIT").filter(|s| !s.is_empty()) {
        return rev.to_string();
    }
    if let Ok(rev) = std::env::var("GIT_COMMIT") {
        if !rev.is_empty() {
            return rev;
        }
    }
    Command::new("git")
        .args(["rev-parse", "HEAD"])
        .output()
        .ok()
        .filter(|output| output.status.success())
        .and_then(|output| String::from_utf8(output.stdout).ok())
        .map(|s| s.trim().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[derive(Serialize)]
    struct Counts {
        embeddings: u64,
    }

    #[test]
    fn provenance_path_rewrites_extension() {
        let derived = provenance_path(Path::new("/tmp/runs/c5.json"));
        assert_eq!(derived, Path::new("/tmp/runs/c5.provenance.json"));
    }

    #[test]
    fn summary_and_sidecar_are_written() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("c5.json");
        let sidecar = write_summary(&path, &Counts { embeddings: 3 }, json!({"limit": null})).unwrap();
        let summary: Value = serde_json::from_slice(&fs::read(&path).unwrap()).unwrap();
        assert_eq!(summary["embeddings"], 3);
        let prov: Value = serde_json::from_slice(&fs::read(sidecar).unwrap()).unwrap();
        assert_eq!(prov["outputs"][0], path.to_string_lossy().as_ref());
        assert_eq!(prov["version"], thrackle::VERSION);
        assert!(prov["params"]["limit"].is_null());
    }
}
