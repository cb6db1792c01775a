//! Locating and validating the metadata descriptor and root entity
//!
//! The descriptor is looked up under the well-known identifiers in
//! profile detection order. It must be of type "CreativeWork" (the exact
//! string, not a list) and its `about` must reference, in object form,
//! an entity of the map whose types include "Dataset".

use serde_json::Value;

use crate::entity::has_type;
use crate::error::MetadataError;
use crate::profile::CrateProfile;
use crate::read::EntityMap;

/// Find the metadata descriptor and the root data entity.
///
/// Expects the entity map produced by `read_metadata`. Returns the @id
/// of the descriptor and the root, in that order. Fails with
/// `DescriptorNotFound` when no well-known identifier is present, and
/// with a validation error when the pair violates the document contract.
pub fn find_root_entity_id(entities: &EntityMap) -> Result<(String, String), MetadataError> {
    let (descriptor_id, descriptor) = CrateProfile::DETECTION_ORDER
        .iter()
        .find_map(|profile| entities.get_key_value(profile.basename()))
        .ok_or(MetadataError::DescriptorNotFound)?;
    let root_id = check_descriptor(descriptor, entities)?;
    Ok((descriptor_id.clone(), root_id))
}

fn check_descriptor(descriptor: &Value, entities: &EntityMap) -> Result<String, MetadataError> {
    // Exactly the string "CreativeWork"; a list is invalid here.
    if descriptor.get("@type").and_then(Value::as_str) != Some("CreativeWork") {
        return Err(MetadataError::DescriptorNotCreativeWork);
    }

    // Only the {"@id": ...} object form references the root.
    let root_id = descriptor
        .get("about")
        .and_then(|about| about.get("@id"))
        .and_then(Value::as_str)
        .ok_or(MetadataError::RootNotReferenced)?;
    let root = entities
        .get(root_id)
        .ok_or(MetadataError::RootNotReferenced)?;

    if !has_type(root, "Dataset") {
        return Err(MetadataError::RootNotDataset);
    }

    Ok(root_id.to_string())
}
