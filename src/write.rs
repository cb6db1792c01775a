//! Committing rendered metadata to files and archive entries
//!
//! Filesystem destinations are written through a staged temp file that
//! is atomically renamed into place; no partial document is ever visible
//! at the final path. Archive destinations receive the fully rendered
//! content in a single commit.

use std::io::{self, Seek, Write};
use std::path::Path;

use serde_json::Value;
use tempfile::NamedTempFile;
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

use crate::error::MetadataError;
use crate::generate::to_canonical_bytes;

/// Write a metadata document to a file, atomically.
///
/// The document is rendered in canonical form, staged in a temp file in
/// the destination directory, then renamed into place. On failure the
/// staged file is discarded and the destination is left untouched.
pub fn write_metadata(path: impl AsRef<Path>, document: &Value) -> Result<(), MetadataError> {
    let path = path.as_ref();
    let bytes = to_canonical_bytes(document)?;

    // Stage in the same directory so the rename cannot cross filesystems.
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut staged = NamedTempFile::new_in(dir)?;
    staged.write_all(&bytes)?;
    staged.persist(path).map_err(|e| MetadataError::Io(e.error))?;
    Ok(())
}

/// Destination that commits complete named entries, e.g. an archive writer
pub trait EntrySink {
    fn put_entry(&mut self, name: &str, content: &[u8]) -> io::Result<()>;
}

/// Write a metadata document as a named entry of a sink.
///
/// Rendering happens entirely before the sink is touched, so the sink
/// only ever receives complete content. Entry-level atomicity beyond
/// that is the sink's own contract.
pub fn write_metadata_entry<S: EntrySink>(
    sink: &mut S,
    name: &str,
    document: &Value,
) -> Result<(), MetadataError> {
    let bytes = to_canonical_bytes(document)?;
    sink.put_entry(name, &bytes)?;
    Ok(())
}

impl<W: Write + Seek> EntrySink for ZipWriter<W> {
    fn put_entry(&mut self, name: &str, content: &[u8]) -> io::Result<()> {
        self.start_file(name, SimpleFileOptions::default())
            .map_err(io::Error::other)?;
        self.write_all(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generate::build_document;
    use crate::profile::CrateProfile;
    use crate::read::read_metadata;
    use crate::resolve::find_root_entity_id;
    use crate::vocab::ROOT_ENTITY_ID;
    use serde_json::{json, Map};
    use std::io::{Cursor, Read};

    fn sample_document() -> Value {
        let graph = vec![
            CrateProfile::V1_1.descriptor_properties(),
            json!({"@id": ROOT_ENTITY_ID, "@type": "Dataset", "name": "Sample"}),
        ];
        build_document(CrateProfile::V1_1, graph, &Map::new())
    }

    #[test]
    fn test_write_metadata() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CrateProfile::V1_1.basename());
        let doc = sample_document();

        write_metadata(&path, &doc).unwrap();

        let written = std::fs::read(&path).unwrap();
        assert_eq!(written, to_canonical_bytes(&doc).unwrap());
        // No staging leftovers in the directory.
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_write_metadata_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CrateProfile::V1_1.basename());
        std::fs::write(&path, "stale").unwrap();

        let doc = sample_document();
        write_metadata(&path, &doc).unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), to_canonical_bytes(&doc).unwrap());
    }

    #[test]
    fn test_roundtrip_through_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CrateProfile::V1_1.basename());
        write_metadata(&path, &sample_document()).unwrap();

        let (context, entities) = read_metadata(&path).unwrap();
        assert_eq!(context, json!("https://w3id.org/ro/crate/1.1/context"));
        let (m_id, r_id) = find_root_entity_id(&entities).unwrap();
        assert_eq!(m_id, "ro-crate-metadata.json");
        assert_eq!(r_id, "./");
    }

    #[test]
    fn test_write_metadata_entry_to_zip() {
        let doc = sample_document();
        let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
        write_metadata_entry(&mut writer, CrateProfile::V1_1.basename(), &doc).unwrap();
        let cursor = writer.finish().unwrap();

        let mut archive = zip::ZipArchive::new(cursor).unwrap();
        let mut entry = archive.by_name(CrateProfile::V1_1.basename()).unwrap();
        let mut content = Vec::new();
        entry.read_to_end(&mut content).unwrap();
        assert_eq!(content, to_canonical_bytes(&doc).unwrap());
    }
}
