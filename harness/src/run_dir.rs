//! Run directory persistence: write/verify the artifacts of one judged attempt.
//!
//! # Directory layout
//!
//! ```text
//! <dir>/
//!   run_manifest.json    # canonical JSON: artifact names + content hashes
//!   result_digest.txt    # digest of the search result record
//!   search_result.json   # artifact (canonical JSON)
//!   subgraph.dot         # artifact (Graphviz DOT)
//! ```
//!
//! The directory path is never part of any hash surface.
//!
//! # Fail-closed verification
//!
//! - Missing declared artifact or metadata file → error
//! - Extra undeclared file → error
//! - Artifact content hash mismatch → error
//! - Result digest mismatch → error

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use serde_json::json;
use tracing::info;

use codelock_kernel::proof::canon::{canonical_json_bytes, CanonError};
use codelock_kernel::proof::hash::{
    canonical_hash, ContentHash, DOMAIN_RUN_ARTIFACT, DOMAIN_SEARCH_RESULT,
};

use crate::config::LockConfig;
use crate::render::to_dot;
use crate::session::AttemptReport;

const MANIFEST_FILENAME: &str = "run_manifest.json";
const DIGEST_FILENAME: &str = "result_digest.txt";
const RESULT_FILENAME: &str = "search_result.json";
const SUBGRAPH_FILENAME: &str = "subgraph.dot";

const RUN_FILENAMES: [&str; 4] = [
    MANIFEST_FILENAME,
    DIGEST_FILENAME,
    RESULT_FILENAME,
    SUBGRAPH_FILENAME,
];

const MANIFEST_SCHEMA_VERSION: &str = "run_manifest.v1";

/// One file of a run directory, held in memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunArtifact {
    pub name: String,
    pub content: Vec<u8>,
    pub content_hash: ContentHash,
}

impl RunArtifact {
    fn new(name: &str, content: Vec<u8>) -> Self {
        let content_hash = canonical_hash(DOMAIN_RUN_ARTIFACT, &content);
        Self {
            name: name.to_string(),
            content,
            content_hash,
        }
    }
}

/// What was written, as returned by [`write_run_dir`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunManifest {
    /// Artifacts sorted by name.
    pub artifacts: Vec<RunArtifact>,
    pub result_digest: ContentHash,
}

#[derive(Debug, thiserror::Error)]
pub enum RunDirError {
    #[error("I/O error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Canon(#[from] CanonError),
    #[error("missing file: {name}")]
    MissingFile { name: String },
    #[error("undeclared extra file: {name}")]
    ExtraFile { name: String },
    #[error("{} already holds {name}, which is not a run artifact", dir.display())]
    ForeignFile { dir: PathBuf, name: String },
    #[error("manifest invalid: {detail}")]
    ManifestInvalid { detail: String },
    #[error("content hash mismatch for {name}: declared={declared}, actual={actual}")]
    ArtifactHashMismatch {
        name: String,
        declared: String,
        actual: String,
    },
    #[error("digest mismatch: stored={stored}, recomputed={recomputed}")]
    DigestMismatch { stored: String, recomputed: String },
}

fn io_err(path: &Path) -> impl FnOnce(std::io::Error) -> RunDirError + '_ {
    move |source| RunDirError::Io {
        path: path.to_path_buf(),
        source,
    }
}

/// Build the in-memory artifacts for `report`.
///
/// # Errors
///
/// [`RunDirError::Canon`] if the result record cannot be canonicalized.
pub fn build_run_artifacts(
    config: &LockConfig,
    report: &AttemptReport,
) -> Result<RunManifest, RunDirError> {
    let record = json!({
        "schema_version": "run_record.v1",
        "config": config.to_json_value(),
        "attempt": report.attempt.as_str(),
        "verdict": report.verdict.as_str(),
        "result": report.result.to_json_value(),
    });
    let result_bytes = canonical_json_bytes(&record)?;
    let result = &report.result;
    let dot = to_dot(&result.path, &result.start, &result.goal);

    let artifacts = vec![
        RunArtifact::new(RESULT_FILENAME, result_bytes),
        RunArtifact::new(SUBGRAPH_FILENAME, dot.into_bytes()),
    ];
    Ok(RunManifest {
        artifacts,
        result_digest: result.digest()?,
    })
}

fn manifest_bytes(manifest: &RunManifest) -> Result<Vec<u8>, CanonError> {
    let artifacts: Vec<serde_json::Value> = manifest
        .artifacts
        .iter()
        .map(|a| {
            json!({
                "name": a.name,
                "content_hash": a.content_hash.as_str(),
            })
        })
        .collect();
    canonical_json_bytes(&json!({
        "schema_version": MANIFEST_SCHEMA_VERSION,
        "artifacts": artifacts,
        "result_digest": manifest.result_digest.as_str(),
    }))
}

/// Refuse a target directory holding anything but a previous run, so a
/// written directory always verifies.
fn ensure_run_only(dir: &Path) -> Result<(), RunDirError> {
    if !dir.exists() {
        return Ok(());
    }
    for entry in std::fs::read_dir(dir).map_err(io_err(dir))? {
        let name = entry
            .map_err(io_err(dir))?
            .file_name()
            .to_string_lossy()
            .to_string();
        if !RUN_FILENAMES.contains(&name.as_str()) {
            return Err(RunDirError::ForeignFile {
                dir: dir.to_path_buf(),
                name,
            });
        }
    }
    Ok(())
}

/// Write the run directory for `report` under `dir`, creating it if needed.
///
/// An existing directory may only contain files of an earlier run, which
/// are overwritten.
///
/// # Errors
///
/// [`RunDirError::ForeignFile`] if `dir` holds any other file,
/// [`RunDirError::Io`] on filesystem failures, [`RunDirError::Canon`] on
/// serialization failures.
pub fn write_run_dir(
    dir: &Path,
    config: &LockConfig,
    report: &AttemptReport,
) -> Result<RunManifest, RunDirError> {
    let manifest = build_run_artifacts(config, report)?;
    ensure_run_only(dir)?;
    std::fs::create_dir_all(dir).map_err(io_err(dir))?;

    for artifact in &manifest.artifacts {
        let path = dir.join(&artifact.name);
        std::fs::write(&path, &artifact.content).map_err(io_err(&path))?;
    }
    let manifest_path = dir.join(MANIFEST_FILENAME);
    std::fs::write(&manifest_path, manifest_bytes(&manifest)?).map_err(io_err(&manifest_path))?;
    let digest_path = dir.join(DIGEST_FILENAME);
    std::fs::write(&digest_path, manifest.result_digest.as_str()).map_err(io_err(&digest_path))?;

    info!(
        dir = %dir.display(),
        result_digest = %manifest.result_digest,
        "run directory written"
    );
    Ok(manifest)
}

fn read_file(dir: &Path, name: &str) -> Result<Vec<u8>, RunDirError> {
    let path = dir.join(name);
    if !path.is_file() {
        return Err(RunDirError::MissingFile {
            name: name.to_string(),
        });
    }
    std::fs::read(&path).map_err(io_err(&path))
}

fn invalid(detail: &str) -> RunDirError {
    RunDirError::ManifestInvalid {
        detail: detail.to_string(),
    }
}

/// Verify a run directory written by [`write_run_dir`].
///
/// Returns the verified result digest.
///
/// # Errors
///
/// Any [`RunDirError`] describing the first inconsistency found.
pub fn verify_run_dir(dir: &Path) -> Result<ContentHash, RunDirError> {
    let manifest_raw = read_file(dir, MANIFEST_FILENAME)?;
    let manifest: serde_json::Value = serde_json::from_slice(&manifest_raw)
        .map_err(|e| invalid(&format!("not JSON: {e}")))?;
    if manifest["schema_version"] != MANIFEST_SCHEMA_VERSION {
        return Err(invalid("unknown schema_version"));
    }
    let entries = manifest["artifacts"]
        .as_array()
        .ok_or_else(|| invalid("artifacts is not an array"))?;

    let mut declared: BTreeSet<String> = [MANIFEST_FILENAME, DIGEST_FILENAME]
        .iter()
        .map(ToString::to_string)
        .collect();

    for entry in entries {
        let name = entry["name"]
            .as_str()
            .ok_or_else(|| invalid("artifact entry missing name"))?;
        let declared_hash = entry["content_hash"]
            .as_str()
            .and_then(ContentHash::parse)
            .ok_or_else(|| invalid("artifact entry missing content_hash"))?;
        if declared_hash.algorithm() != "sha256" {
            return Err(invalid(&format!(
                "unsupported hash algorithm {} for {name}",
                declared_hash.algorithm()
            )));
        }
        let content = read_file(dir, name)?;
        let actual = canonical_hash(DOMAIN_RUN_ARTIFACT, &content);
        if actual != declared_hash {
            return Err(RunDirError::ArtifactHashMismatch {
                name: name.to_string(),
                declared: declared_hash.as_str().to_string(),
                actual: actual.as_str().to_string(),
            });
        }
        declared.insert(name.to_string());
    }

    for entry in std::fs::read_dir(dir).map_err(io_err(dir))? {
        let entry = entry.map_err(io_err(dir))?;
        let name = entry.file_name().to_string_lossy().to_string();
        if !declared.contains(&name) {
            return Err(RunDirError::ExtraFile { name });
        }
    }

    let record: serde_json::Value = serde_json::from_slice(&read_file(dir, RESULT_FILENAME)?)
        .map_err(|e| invalid(&format!("{RESULT_FILENAME} is not JSON: {e}")))?;
    let result_bytes = canonical_json_bytes(&record["result"])?;
    let recomputed = canonical_hash(DOMAIN_SEARCH_RESULT, &result_bytes);

    let stored = String::from_utf8_lossy(&read_file(dir, DIGEST_FILENAME)?).to_string();
    let manifest_digest = manifest["result_digest"].as_str().unwrap_or_default();
    for claimed in [stored.trim(), manifest_digest] {
        if claimed != recomputed.as_str() {
            return Err(RunDirError::DigestMismatch {
                stored: claimed.to_string(),
                recomputed: recomputed.as_str().to_string(),
            });
        }
    }
    Ok(recomputed)
}
