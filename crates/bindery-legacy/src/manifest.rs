use serde::{Deserialize, Serialize};

/// The flat legacy project manifest, as written to `manifest.json` by the
/// old translation tool. Bookkeeping fields the tool also writes
/// (`package_version`, `generator`, `finished_chunks`) are accepted and
/// ignored.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct LegacyManifest {
    pub format: String,
    pub resource: ResourceInfo,
    pub project: ProjectInfo,
    pub target_language: TargetLanguage,
    #[serde(default)]
    pub source_translations: Vec<SourceTranslation>,
    #[serde(default)]
    pub translators: Vec<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct ResourceInfo {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct ProjectInfo {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct TargetLanguage {
    pub id: String,
    pub name: String,
    pub direction: String,
}

/// One source text the legacy project was translated from. The per-source
/// checking level and modification date are parsed but never propagated to
/// the converted manifest.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct SourceTranslation {
    pub language_id: String,
    pub resource_id: String,
    #[serde(default)]
    pub checking_level: String,
    #[serde(default)]
    pub date_modified: String,
    pub version: String,
}
