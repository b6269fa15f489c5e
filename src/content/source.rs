//! @acp:module "Content Sources"
//! @acp:summary "Discover, fingerprint and load question database files"
//! @acp:domain content
//! @acp:layer io

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use glob::Pattern;
use serde::Serialize;
use sha2::{Digest, Sha256};
use walkdir::WalkDir;

use super::template::TemplateGenerator;
use super::types::QuestionDatabase;
use crate::error::{QuizError, Result};
use crate::selection::QuestionGenerator;

/// @acp:summary "One question database on disk"
#[derive(Debug, Clone, Serialize)]
pub struct ContentSource {
    /// File stem, also the generators' source reference
    pub name: String,
    pub path: PathBuf,
    /// SHA-256 of the file content (hex)
    pub fingerprint: String,
    /// Selected for loading
    pub used: bool,
    /// Readable and parseable as far as we know
    pub available: bool,
}

impl ContentSource {
    pub fn short_fingerprint(&self) -> &str {
        &self.fingerprint[..self.fingerprint.len().min(12)]
    }
}

/// Hex SHA-256 digest
pub fn fingerprint(bytes: &[u8]) -> String {
    Sha256::digest(bytes)
        .iter()
        .map(|b| format!("{:02x}", b))
        .collect()
}

/// Walk `dir` for files whose name matches any `include` glob.
///
/// Results are sorted by file name. Sources listed in `disabled` start unused.
pub fn discover_sources(
    dir: &Path,
    include: &[String],
    disabled: &[String],
) -> Result<Vec<ContentSource>> {
    let patterns = include
        .iter()
        .map(|p| Pattern::new(p))
        .collect::<std::result::Result<Vec<_>, _>>()?;

    if !dir.exists() {
        tracing::warn!("Question directory does not exist: {}", dir.display());
        return Ok(Vec::new());
    }

    let mut sources = Vec::new();
    for entry in WalkDir::new(dir).sort_by_file_name() {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }

        let file_name = entry.file_name().to_string_lossy();
        if !patterns.iter().any(|p| p.matches(&file_name)) {
            continue;
        }

        let path = entry.path().to_path_buf();
        let name = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| file_name.to_string());
        let bytes = std::fs::read(&path)?;

        sources.push(ContentSource {
            used: !disabled.contains(&name),
            name,
            path,
            fingerprint: fingerprint(&bytes),
            available: true,
        });
    }

    Ok(sources)
}

/// Parse a database file, choosing the format from its extension
pub fn parse_database(path: &Path) -> Result<QuestionDatabase> {
    let extension = path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();
    let content = std::fs::read_to_string(path)?;

    match extension.as_str() {
        "json" => Ok(serde_json::from_str(&content)?),
        "yaml" | "yml" => Ok(serde_yaml::from_str(&content)?),
        _ => Err(QuizError::UnsupportedSourceFormat(path.display().to_string())),
    }
}

/// Build template generators from one source
pub fn load_source(source: &ContentSource) -> Result<Vec<TemplateGenerator>> {
    let database = parse_database(&source.path)?;
    database
        .generators
        .into_iter()
        .map(|def| TemplateGenerator::from_def(def, Some(source.name.clone())))
        .collect()
}

/// Load every used, available source.
///
/// A source that fails to load is marked unused and unavailable. If nothing
/// could be loaded, the first available source is enabled as a fallback.
/// Sources whose content duplicates an already loaded one are skipped.
pub fn load_sources(sources: &mut [ContentSource]) -> Vec<Box<dyn QuestionGenerator>> {
    let mut generators: Vec<Box<dyn QuestionGenerator>> = Vec::new();
    let mut seen = HashSet::new();
    let mut loaded_any = false;

    for source in sources.iter_mut() {
        if source.used && source.available && load_into(source, &mut seen, &mut generators) {
            loaded_any = true;
        }
    }

    if !loaded_any {
        if let Some(fallback) = sources.iter_mut().find(|s| s.available) {
            tracing::warn!(
                "Since no usable question database was found, {} has been enabled",
                fallback.name
            );
            fallback.used = true;
            load_into(fallback, &mut seen, &mut generators);
        }
    }

    generators
}

fn load_into(
    source: &mut ContentSource,
    seen: &mut HashSet<String>,
    generators: &mut Vec<Box<dyn QuestionGenerator>>,
) -> bool {
    if !seen.insert(source.fingerprint.clone()) {
        tracing::warn!("Skipping duplicate question database: {}", source.name);
        return false;
    }

    match load_source(source) {
        Ok(loaded) => {
            tracing::debug!(source = %source.name, generators = loaded.len(), "Loaded source");
            generators.extend(
                loaded
                    .into_iter()
                    .map(|g| Box::new(g) as Box<dyn QuestionGenerator>),
            );
            true
        }
        Err(e) => {
            tracing::warn!("Failed to load {}: {}", source.path.display(), e);
            source.used = false;
            source.available = false;
            false
        }
    }
}
