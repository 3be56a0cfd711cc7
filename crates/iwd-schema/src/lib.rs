//! # iwd-schema: Release Checks
//!
//! The three checks a release must pass, each implementing
//! [`iwd_core::Check`]:
//!
//! - [`StructureCheck`]: every required path exists.
//! - [`MetadataCheck`]: `hacs.json` parses, carries the required fields,
//!   and lists `automation` among its domains.
//! - [`BlueprintCheck`]: the blueprint YAML parses under the
//!   [`yaml`] loader (which accepts the `!input` tag) and carries the
//!   required keys at every level.
//!
//! Within a check, validation stops at the first finding. Across checks,
//! nothing is shared; the runner decides how outcomes combine.
//!
//! The pure rule functions [`evaluate_blueprint`] and [`evaluate_metadata`]
//! operate on already-parsed documents and return typed violations, so the
//! rules can be exercised without touching the filesystem.

pub mod blueprint;
pub mod document;
pub mod error;
pub mod metadata;
pub mod structure;
pub mod yaml;

pub use blueprint::{
    evaluate_blueprint, BlueprintCheck, BlueprintViolation, BLUEPRINT_DOMAIN,
    REQUIRED_BLUEPRINT_KEYS, REQUIRED_INPUTS, REQUIRED_KEYS,
};
pub use error::{DocumentError, ShapeError, TagError};
pub use metadata::{
    evaluate_metadata, MetadataCheck, MetadataViolation, REQUIRED_DOMAIN, REQUIRED_FIELDS,
};
pub use structure::StructureCheck;
pub use yaml::INPUT_TAG;
