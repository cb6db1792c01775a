//! RO-Crate Metadata Library
//!
//! This library reads, validates and generates the metadata document of
//! an RO-Crate: the JSON-LD file describing a packaged collection of
//! research data.
//!
//! # Overview
//!
//! A metadata document is a JSON object with an `@context` and an
//! `@graph` of entity records. Its self-describing descriptor entity
//! (named `ro-crate-metadata.json`, or `ro-crate-metadata.jsonld` for
//! legacy crates) points at the root data entity through its `about`
//! property. This library:
//!
//! 1. Parses a document into an entity map addressable by `@id`
//! 2. Locates and validates the descriptor/root pair
//! 3. Assembles canonical documents from an ordered entity sequence,
//!    with optional vocabulary extension terms merged into the `@context`
//! 4. Serializes deterministically (sorted keys, fixed indentation) so
//!    generated documents are byte-for-byte reproducible
//!
//! # Usage
//!
//! ## Read and validate a crate's metadata
//!
//! ```ignore
//! use rocrate_metadata::{find_root_entity_id, read_metadata};
//!
//! let (context, entities) = read_metadata("ro-crate-metadata.json")?;
//! let (descriptor_id, root_id) = find_root_entity_id(&entities)?;
//! println!("root entity: {}", root_id);
//! ```
//!
//! ## Generate a metadata file
//!
//! ```ignore
//! use rocrate_metadata::{build_document, write_metadata, CrateProfile};
//!
//! let graph = vec![
//!     CrateProfile::V1_1.descriptor_properties(),
//!     serde_json::json!({"@id": "./", "@type": "Dataset"}),
//! ];
//! let document = build_document(CrateProfile::V1_1, graph, &serde_json::Map::new());
//! write_metadata("ro-crate-metadata.json", &document)?;
//! ```

pub mod entity;
pub mod error;
pub mod generate;
pub mod profile;
pub mod read;
pub mod resolve;
pub mod source;
pub mod vocab;
pub mod write;

// Re-export main types for convenience
pub use crate::error::MetadataError;
pub use crate::generate::{build_document, to_canonical_bytes, to_canonical_string};
pub use crate::profile::CrateProfile;
pub use crate::read::{read_metadata, read_metadata_obj, EntityMap};
pub use crate::resolve::find_root_entity_id;
pub use crate::source::MetadataSource;
pub use crate::vocab::{testing_extra_terms, ROOT_ENTITY_ID};
pub use crate::write::{write_metadata, write_metadata_entry, EntrySink};
