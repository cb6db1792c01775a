//! Locating metadata documents in directories, archives and remote URLs
//!
//! Every discovery path probes the well-known filenames in profile
//! detection order, so a crate carrying both the current and the legacy
//! metadata file resolves to the current one.

use std::collections::HashSet;
use std::fs::File;
use std::io::{BufReader, Read, Seek};
use std::path::{Path, PathBuf};

use serde_json::Value;
use url::Url;
use zip::ZipArchive;

use crate::error::MetadataError;
use crate::profile::CrateProfile;
use crate::read::{read_metadata_obj, EntityMap};

/// Source from which to load a metadata document
#[derive(Debug, Clone)]
pub enum MetadataSource {
    /// Explicit path to a metadata file
    File(PathBuf),
    /// Crate directory containing a well-known metadata file
    Directory(PathBuf),
    /// Zip archive with the metadata file at its root
    Zip(PathBuf),
    /// Remote URL (may or may not end with a well-known filename)
    Url(String),
}

impl MetadataSource {
    /// Classify a user-supplied source string
    pub fn detect(source: &str) -> MetadataSource {
        if source.starts_with("http://") || source.starts_with("https://") {
            return MetadataSource::Url(source.to_string());
        }
        let path = PathBuf::from(source);
        if path.is_dir() {
            MetadataSource::Directory(path)
        } else if path.extension().and_then(|e| e.to_str()) == Some("zip") {
            MetadataSource::Zip(path)
        } else {
            MetadataSource::File(path)
        }
    }

    /// Load the raw document together with the name it was reached under
    pub fn load(&self) -> Result<(String, Value), MetadataError> {
        match self {
            MetadataSource::File(path) => load_from_file(path),
            MetadataSource::Directory(dir) => {
                let path = find_metadata_in_directory(dir)?;
                load_from_file(&path)
            }
            MetadataSource::Zip(path) => load_from_zip(path),
            MetadataSource::Url(url) => load_from_url(url),
        }
    }

    /// Load and parse into `(context, entity_map)`
    pub fn read(&self) -> Result<(Value, EntityMap), MetadataError> {
        let (name, document) = self.load()?;
        read_metadata_obj(document, &name)
    }
}

fn load_from_file(path: &Path) -> Result<(String, Value), MetadataError> {
    let file = File::open(path)?;
    let document = serde_json::from_reader(BufReader::new(file))?;
    Ok((path.display().to_string(), document))
}

/// Find the well-known metadata file in a crate directory
pub fn find_metadata_in_directory(dir: &Path) -> Result<PathBuf, MetadataError> {
    for profile in CrateProfile::DETECTION_ORDER {
        let candidate = dir.join(profile.basename());
        if candidate.is_file() {
            return Ok(candidate);
        }
    }
    Err(MetadataError::Load {
        path: dir.display().to_string(),
        reason: "no ro-crate-metadata.json or ro-crate-metadata.jsonld found".to_string(),
    })
}

fn load_from_zip(path: &Path) -> Result<(String, Value), MetadataError> {
    let load_err = |reason: String| MetadataError::Load {
        path: path.display().to_string(),
        reason,
    };

    let file = File::open(path)?;
    let mut archive =
        ZipArchive::new(file).map_err(|e| load_err(format!("failed to read zip archive: {}", e)))?;

    let entry_name = find_metadata_in_archive(&mut archive).ok_or_else(|| {
        load_err("no metadata file found at archive root".to_string())
    })?;

    let mut entry = archive
        .by_name(&entry_name)
        .map_err(|e| load_err(format!("failed to extract {}: {}", entry_name, e)))?;
    let mut content = String::new();
    entry.read_to_string(&mut content)?;

    let document = serde_json::from_str(&content)?;
    Ok((format!("{}!/{}", path.display(), entry_name), document))
}

/// Find the metadata entry in a zip archive.
///
/// Probes the archive root first, then a single shared top-level
/// directory (the layout produced by zipping a crate folder).
fn find_metadata_in_archive<R: Read + Seek>(archive: &mut ZipArchive<R>) -> Option<String> {
    let names: Vec<String> = archive.file_names().map(String::from).collect();

    for profile in CrateProfile::DETECTION_ORDER {
        if names.iter().any(|n| n == profile.basename()) {
            return Some(profile.basename().to_string());
        }
    }

    let top_level: HashSet<&str> = names.iter().filter_map(|n| n.split('/').next()).collect();
    if top_level.len() == 1 {
        let prefix = top_level.into_iter().next()?;
        for profile in CrateProfile::DETECTION_ORDER {
            let candidate = format!("{}/{}", prefix, profile.basename());
            if names.iter().any(|n| *n == candidate) {
                return Some(candidate);
            }
        }
    }

    None
}

fn load_from_url(url: &str) -> Result<(String, Value), MetadataError> {
    // A URL that already names the metadata file is fetched as-is.
    if CrateProfile::DETECTION_ORDER
        .iter()
        .any(|p| url.ends_with(p.basename()))
    {
        let content = fetch(url)?;
        let document = serde_json::from_str(&content)?;
        return Ok((url.to_string(), document));
    }

    for candidate in url_candidates(url)? {
        if let Ok(content) = fetch(candidate.as_str()) {
            if let Ok(document) = serde_json::from_str::<Value>(&content) {
                if document.is_object() {
                    return Ok((candidate.to_string(), document));
                }
            }
        }
    }

    Err(MetadataError::Load {
        path: url.to_string(),
        reason: "URL does not point at an RO-Crate metadata document".to_string(),
    })
}

/// Well-known metadata URLs under a base URL, in detection order
fn url_candidates(url: &str) -> Result<Vec<Url>, MetadataError> {
    let invalid = |e: url::ParseError| MetadataError::Load {
        path: url.to_string(),
        reason: format!("invalid URL: {}", e),
    };
    let base = Url::parse(&format!("{}/", url.trim_end_matches('/'))).map_err(invalid)?;
    CrateProfile::DETECTION_ORDER
        .iter()
        .map(|p| base.join(p.basename()).map_err(invalid))
        .collect()
}

fn fetch(url: &str) -> Result<String, MetadataError> {
    let response = reqwest::blocking::get(url)
        .and_then(|r| r.error_for_status())
        .map_err(|e| MetadataError::Load {
            path: url.to_string(),
            reason: format!("HTTP request failed: {}", e),
        })?;
    response.text().map_err(|e| MetadataError::Load {
        path: url.to_string(),
        reason: format!("failed to read response: {}", e),
    })
}
