//! Canonical metadata document assembly and serialization
//!
//! Builds `{"@context": ..., "@graph": [...]}` from an ordered entity
//! sequence and renders it deterministically so that generated documents
//! can be diffed byte-for-byte across runs.

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::{json, Map, Serializer, Value};

use crate::error::MetadataError;
use crate::profile::CrateProfile;

/// Assemble a metadata document.
///
/// `graph` is taken verbatim; iteration order is decided by the caller
/// and preserved. When `extra_terms` is non-empty, the @context becomes
/// a two-element array of the profile's base context URI and the terms;
/// the base URI is never replaced.
pub fn build_document(
    profile: CrateProfile,
    graph: Vec<Value>,
    extra_terms: &Map<String, Value>,
) -> Value {
    let context = if extra_terms.is_empty() {
        json!(profile.context_uri())
    } else {
        json!([profile.context_uri(), extra_terms])
    };
    json!({
        "@context": context,
        "@graph": graph
    })
}

/// Render a document in canonical form: keys sorted at every object
/// level, 4-space indentation, trailing content byte-stable.
///
/// Key order comes from serde_json's default map representation, which
/// keeps object keys sorted; the `preserve_order` feature must stay
/// disabled.
pub fn to_canonical_bytes(document: &Value) -> Result<Vec<u8>, MetadataError> {
    let mut out = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = Serializer::with_formatter(&mut out, formatter);
    document.serialize(&mut serializer)?;
    Ok(out)
}

/// Render a document in canonical form as a string
pub fn to_canonical_string(document: &Value) -> Result<String, MetadataError> {
    let bytes = to_canonical_bytes(document)?;
    // serde_json only emits valid UTF-8
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
