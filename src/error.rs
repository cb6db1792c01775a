//! Error types for RO-Crate metadata handling

use thiserror::Error;

#[derive(Error, Debug)]
pub enum MetadataError {
    #[error("{source_name} must have a @context and a @graph")]
    MalformedDocument { source_name: String },

    #[error("metadata file descriptor not found")]
    DescriptorNotFound,

    #[error("metadata descriptor must be of type \"CreativeWork\"")]
    DescriptorNotCreativeWork,

    #[error("metadata descriptor does not reference the root entity")]
    RootNotReferenced,

    #[error("root entity must have \"Dataset\" among its types")]
    RootNotDataset,

    #[error("failed to load metadata from {path}: {reason}")]
    Load { path: String, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl MetadataError {
    /// True for descriptor/root validation failures, as opposed to
    /// "this is not an RO-Crate document at all" (`DescriptorNotFound`).
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            MetadataError::DescriptorNotCreativeWork
                | MetadataError::RootNotReferenced
                | MetadataError::RootNotDataset
        )
    }
}
