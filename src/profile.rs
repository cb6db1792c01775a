//! RO-Crate profile variants
//!
//! Each profile fixes the well-known metadata filename and the conformance
//! URI declared by the metadata descriptor. Profiles are a closed set of
//! constants, not a hierarchy.

use serde_json::{json, Value};

use crate::vocab::ROOT_ENTITY_ID;

/// A versioned RO-Crate metadata profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CrateProfile {
    /// RO-Crate 1.1 (current): ro-crate-metadata.json
    V1_1,
    /// RO-Crate 1.0 (legacy): ro-crate-metadata.jsonld
    V1_0,
}

impl CrateProfile {
    /// Order in which well-known identifiers are probed wherever both
    /// could apply. The current profile always wins over the legacy one.
    pub const DETECTION_ORDER: [CrateProfile; 2] = [CrateProfile::V1_1, CrateProfile::V1_0];

    /// Well-known filename of the metadata document
    pub const fn basename(self) -> &'static str {
        match self {
            CrateProfile::V1_1 => "ro-crate-metadata.json",
            CrateProfile::V1_0 => "ro-crate-metadata.jsonld",
        }
    }

    /// Conformance URI declared by the metadata descriptor
    pub const fn conforms_to(self) -> &'static str {
        match self {
            CrateProfile::V1_1 => "https://w3id.org/ro/crate/1.1",
            CrateProfile::V1_0 => "https://w3id.org/ro/crate/1.0",
        }
    }

    /// Base @context URI for generated documents
    pub const fn context_uri(self) -> &'static str {
        match self {
            CrateProfile::V1_1 => "https://w3id.org/ro/crate/1.1/context",
            CrateProfile::V1_0 => "https://w3id.org/ro/crate/1.0/context",
        }
    }

    /// Default properties of the metadata descriptor for this profile
    pub fn descriptor_properties(self) -> Value {
        json!({
            "@id": self.basename(),
            "@type": "CreativeWork",
            "conformsTo": {"@id": self.conforms_to()},
            "about": {"@id": ROOT_ENTITY_ID}
        })
    }
}

impl Default for CrateProfile {
    fn default() -> Self {
        CrateProfile::V1_1
    }
}
