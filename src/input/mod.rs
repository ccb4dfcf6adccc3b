use std::collections::HashSet;
use std::io::BufRead;
use std::path::{Path, PathBuf};

use thiserror::Error;

pub mod reader;

use crate::model::ProjectsData;
use reader::open_maybe_gz;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed dataset {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

pub fn load_dataset(path: &Path) -> Result<ProjectsData, InputError> {
    let reader = open_maybe_gz(path)?;
    let data = parse_dataset(reader).map_err(|source| InputError::Json {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::info!(
        path = %path.display(),
        projects = data.projects.len(),
        scanner_version = %data.scan_info.scanner_version,
        "loaded portfolio dataset"
    );
    Ok(data)
}

/// Parses a dataset document and drops records whose id was already seen.
pub fn parse_dataset<R: BufRead>(reader: R) -> Result<ProjectsData, serde_json::Error> {
    let mut data: ProjectsData = serde_json::from_reader(reader)?;
    dedupe_ids(&mut data);
    Ok(data)
}

fn dedupe_ids(data: &mut ProjectsData) {
    let mut seen: HashSet<String> = HashSet::with_capacity(data.projects.len());
    data.projects.retain(|p| {
        if seen.insert(p.id.clone()) {
            true
        } else {
            tracing::warn!(id = %p.id, "duplicate project id in dataset; keeping first");
            false
        }
    });
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/tests.rs"]
mod tests;
