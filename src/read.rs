//! Reading RO-Crate metadata documents
//!
//! Parses a metadata document into its @context and an entity map keyed
//! by @id. The map is the addressable view of the @graph; records are
//! moved out of the parsed document, not copied.

use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde_json::Value;

use crate::entity::extract_id;
use crate::error::MetadataError;

/// Entity records keyed by @id
pub type EntityMap = HashMap<String, Value>;

/// Read a metadata document from a file.
///
/// Returns the @context (whatever shape the source used) and the entity
/// map built from the @graph.
pub fn read_metadata(path: impl AsRef<Path>) -> Result<(Value, EntityMap), MetadataError> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let document: Value = serde_json::from_reader(BufReader::new(file))?;
    read_metadata_obj(document, &path.display().to_string())
}

/// Read an already-parsed metadata document.
///
/// `source_name` identifies the document in error messages (a path, URL,
/// or archive entry name).
pub fn read_metadata_obj(
    document: Value,
    source_name: &str,
) -> Result<(Value, EntityMap), MetadataError> {
    let malformed = || MetadataError::MalformedDocument {
        source_name: source_name.to_string(),
    };

    let mut top = match document {
        Value::Object(obj) => obj,
        _ => return Err(malformed()),
    };

    let context = top.remove("@context").ok_or_else(malformed)?;
    let graph = match top.remove("@graph") {
        Some(Value::Array(graph)) => graph,
        _ => return Err(malformed()),
    };

    let mut entities = EntityMap::with_capacity(graph.len());
    for record in graph {
        // Records without a string @id are not addressable; skip them.
        if let Some(id) = extract_id(&record).map(String::from) {
            entities.insert(id, record);
        }
    }

    Ok((context, entities))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;

    fn sample_document() -> Value {
        json!({
            "@context": "https://w3id.org/ro/crate/1.1/context",
            "@graph": [
                {
                    "@id": "ro-crate-metadata.json",
                    "@type": "CreativeWork",
                    "about": {"@id": "./"}
                },
                {
                    "@id": "./",
                    "@type": "Dataset",
                    "name": "Sample"
                }
            ]
        })
    }

    #[test]
    fn test_read_metadata_obj() {
        let (context, entities) = read_metadata_obj(sample_document(), "test").unwrap();
        assert_eq!(context, json!("https://w3id.org/ro/crate/1.1/context"));
        assert_eq!(entities.len(), 2);
        assert_eq!(entities["./"]["name"], "Sample");
        assert_eq!(entities["ro-crate-metadata.json"]["@type"], "CreativeWork");
    }

    #[test]
    fn test_context_returned_unmodified() {
        let doc = json!({
            "@context": ["https://w3id.org/ro/crate/1.1/context", {"Extra": "https://example.org/Extra"}],
            "@graph": []
        });
        let (context, _) = read_metadata_obj(doc, "test").unwrap();
        assert_eq!(
            context,
            json!(["https://w3id.org/ro/crate/1.1/context", {"Extra": "https://example.org/Extra"}])
        );
    }

    #[test]
    fn test_missing_context() {
        let doc = json!({"@graph": []});
        let err = read_metadata_obj(doc, "bad.json").unwrap_err();
        assert!(matches!(err, MetadataError::MalformedDocument { .. }));
        assert!(err.to_string().contains("bad.json"));
        assert!(err.to_string().contains("must have a @context and a @graph"));
    }

    #[test]
    fn test_missing_graph() {
        let doc = json!({"@context": "https://w3id.org/ro/crate/1.1/context"});
        let err = read_metadata_obj(doc, "bad.json").unwrap_err();
        assert!(matches!(err, MetadataError::MalformedDocument { .. }));
    }

    #[test]
    fn test_graph_not_array() {
        let doc = json!({
            "@context": "https://w3id.org/ro/crate/1.1/context",
            "@graph": {"@id": "./"}
        });
        let err = read_metadata_obj(doc, "bad.json").unwrap_err();
        assert!(matches!(err, MetadataError::MalformedDocument { .. }));
    }

    #[test]
    fn test_top_level_not_object() {
        let err = read_metadata_obj(json!([1, 2]), "bad.json").unwrap_err();
        assert!(matches!(err, MetadataError::MalformedDocument { .. }));
    }

    #[test]
    fn test_records_without_id_skipped() {
        let doc = json!({
            "@context": "https://w3id.org/ro/crate/1.1/context",
            "@graph": [
                {"@id": "./", "@type": "Dataset"},
                {"@type": "Thing", "name": "anonymous"},
                {"@id": 42, "@type": "Thing"}
            ]
        });
        let (_, entities) = read_metadata_obj(doc, "test").unwrap();
        assert_eq!(entities.len(), 1);
        assert!(entities.contains_key("./"));
    }

    #[test]
    fn test_duplicate_ids_last_wins() {
        let doc = json!({
            "@context": "https://w3id.org/ro/crate/1.1/context",
            "@graph": [
                {"@id": "./", "@type": "Dataset", "name": "first"},
                {"@id": "./", "@type": "Dataset", "name": "second"}
            ]
        });
        let (_, entities) = read_metadata_obj(doc, "test").unwrap();
        assert_eq!(entities["./"]["name"], "second");
    }

    #[test]
    fn test_read_metadata_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ro-crate-metadata.json");
        std::fs::write(&path, sample_document().to_string()).unwrap();

        let (context, entities) = read_metadata(&path).unwrap();
        assert_eq!(context, json!("https://w3id.org/ro/crate/1.1/context"));
        assert_eq!(entities.len(), 2);
    }

    #[test]
    fn test_read_metadata_missing_file() {
        let err = read_metadata("/nonexistent/ro-crate-metadata.json").unwrap_err();
        assert!(matches!(err, MetadataError::Io(_)));
    }

    #[test]
    fn test_read_metadata_invalid_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ro-crate-metadata.json");
        let mut file = File::create(&path).unwrap();
        file.write_all(b"{not json").unwrap();

        let err = read_metadata(&path).unwrap_err();
        assert!(matches!(err, MetadataError::Json(_)));
    }
}
