use crate::SchemaError;
use serde::{Deserialize, Serialize};

/// A complete Resource Container manifest: bibliographic record, checking
/// metadata, and the list of translatable projects the container holds.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct Manifest {
    pub dublin_core: DublinCore,
    pub checking: Checking,
    pub projects: Vec<Project>,
}

/// Dublin Core-style bibliographic record describing the container.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct DublinCore {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(rename = "conformsto")]
    pub conforms_to: String,
    pub format: String,
    pub identifier: String,
    pub title: String,
    pub subject: String,
    pub description: String,
    pub language: Language,
    pub source: Vec<Source>,
    pub rights: String,
    pub creator: String,
    pub contributor: Vec<String>,
    pub relation: Vec<String>,
    pub publisher: String,
    pub issued: String,
    pub modified: String,
    pub version: String,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct Language {
    pub identifier: String,
    pub title: String,
    pub direction: String,
}

/// A source text the translation was produced from.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct Source {
    pub identifier: String,
    pub language: String,
    pub version: String,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct Checking {
    pub checking_entity: Vec<String>,
    pub checking_level: String,
}

/// One translatable unit inside a container, rooted at `path` relative to
/// the container directory.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct Project {
    pub identifier: String,
    pub title: String,
    pub sort: u32,
    pub path: String,
    pub versification: String,
    pub categories: Vec<String>,
}

impl Manifest {
    pub fn to_yaml(&self) -> Result<String, SchemaError> {
        Ok(serde_yaml::to_string(self)?)
    }

    pub fn to_json_pretty(&self) -> Result<String, SchemaError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
