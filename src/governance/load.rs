use crate::governance::model::Context;
use std::fs;
use std::path::{Path, PathBuf};

pub const SIGS_YAML: &str = "sigs.yaml";

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("unable to find sigs.yaml in {} or any parent directory", .start.display())]
    NotFound { start: PathBuf },

    #[error("read {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("error parsing file: {}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

/// Look for sigs.yaml in `start`, then in each of its ancestors.
pub fn find_sigs_yaml(start: &Path) -> Result<PathBuf, LoadError> {
    start
        .ancestors()
        .map(|dir| dir.join(SIGS_YAML))
        .find(|candidate| candidate.is_file())
        .ok_or_else(|| LoadError::NotFound {
            start: start.to_path_buf(),
        })
}

/// Read and deserialize a governance file.
pub fn load_context(path: &Path) -> Result<Context, LoadError> {
    let text = fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let context = parse_context(&text).map_err(|source| LoadError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::info!(
        path = %path.display(),
        sigs = context.sigs.len(),
        workinggroups = context.workinggroups.len(),
        usergroups = context.usergroups.len(),
        committees = context.committees.len(),
        total = context.group_count(),
        "loaded governance file"
    );
    Ok(context)
}

pub fn parse_context(text: &str) -> Result<Context, serde_yaml::Error> {
    // An empty document is a valid (if useless) context.
    if text.trim().is_empty() {
        return Ok(Context::default());
    }
    serde_yaml::from_str(text)
}
