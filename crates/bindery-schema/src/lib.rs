//! Resource Container manifest schema for Bindery.
//!
//! This crate defines the schema layer: the serializable Resource Container
//! manifest entities (`Manifest`, `DublinCore`, `Checking`, `Project`), and
//! the untyped `RawManifest` mapping with read-time accessor helpers used by
//! the container reader.

pub mod manifest;
pub mod raw;

pub use manifest::{Checking, DublinCore, Language, Manifest, Project, Source};
pub use raw::{parse_json_mapping, parse_yaml_mapping, RawManifest};

use thiserror::Error;

/// Resource Container specification version this crate targets.
pub const SPEC_VERSION: &str = "0.2";

/// The `conformsto` value for manifests produced against [`SPEC_VERSION`].
pub fn conforms_to() -> String {
    format!("rc{SPEC_VERSION}")
}

#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("failed to parse YAML manifest: {0}")]
    ParseYaml(#[from] serde_yaml::Error),
    #[error("failed to parse JSON manifest: {0}")]
    ParseJson(#[from] serde_json::Error),
    #[error("top-level manifest value is not a mapping")]
    NotAMapping,
}
