use crate::manifest::LegacyManifest;
use bindery_schema::{conforms_to, Checking, DublinCore, Language, Manifest, Project, Source};
use chrono::Local;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

const MANIFEST_FILE: &str = "manifest.json";
const CONTENT_DIR: &str = "content";

const DEFAULT_RIGHTS: &str = "CC BY-SA 4.0";
const DEFAULT_CREATOR: &str = "Unknown Creator";
const DEFAULT_PUBLISHER: &str = "Door43";
const DEFAULT_SUBJECT: &str = "Bible";
const DEFAULT_VERSIFICATION: &str = "kjv";
const CHECKING_ENTITY: &str = "Wycliffe Associates";
const CHECKING_LEVEL: &str = "1";

/// Terminal error for legacy project construction. Wraps the root cause; no
/// partially-constructed project ever exists.
#[derive(Debug, Error)]
#[error("'{}' is not a valid project", .path.display())]
pub struct LegacyError {
    path: PathBuf,
    #[source]
    source: LegacyErrorKind,
}

impl LegacyError {
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn kind(&self) -> &LegacyErrorKind {
        &self.source
    }
}

#[derive(Debug, Error)]
pub enum LegacyErrorKind {
    #[error("not a directory")]
    NotADirectory,
    #[error("failed to read manifest.json: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse manifest.json: {0}")]
    Parse(#[from] serde_json::Error),
}

/// A legacy translation-studio project directory with its parsed manifest.
///
/// The manifest is read exactly once, at construction. Unlike container
/// resolution there is exactly one source file and no fallback: any failure
/// is terminal.
#[derive(Debug, Clone)]
pub struct LegacyProject {
    dir: PathBuf,
    manifest: LegacyManifest,
}

impl LegacyProject {
    pub fn open(path: impl AsRef<Path>) -> Result<Self, LegacyError> {
        let dir = path.as_ref().to_path_buf();
        let manifest = Self::read_manifest(&dir).map_err(|source| LegacyError {
            path: dir.clone(),
            source,
        })?;
        Ok(Self { dir, manifest })
    }

    fn read_manifest(dir: &Path) -> Result<LegacyManifest, LegacyErrorKind> {
        if !dir.is_dir() {
            return Err(LegacyErrorKind::NotADirectory);
        }
        let content = fs::read_to_string(dir.join(MANIFEST_FILE))?;
        Ok(serde_json::from_str(&content)?)
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn manifest(&self) -> &LegacyManifest {
        &self.manifest
    }

    /// Map the legacy manifest into a Resource Container manifest. Total:
    /// given a constructed project this never fails. The output shares no
    /// storage with the legacy manifest.
    pub fn rc_manifest(&self) -> Manifest {
        Manifest {
            dublin_core: self.dublin_core(),
            checking: Checking {
                checking_entity: vec![CHECKING_ENTITY.to_owned()],
                checking_level: CHECKING_LEVEL.to_owned(),
            },
            projects: vec![self.rc_project()],
        }
    }

    fn dublin_core(&self) -> DublinCore {
        // Both dates are the conversion date; the legacy timestamps are
        // deliberately not carried over.
        let today = Local::now().date_naive().to_string();
        DublinCore {
            kind: "book".to_owned(),
            conforms_to: conforms_to(),
            format: format!("text/{}", self.manifest.format),
            identifier: self.manifest.resource.id.clone(),
            title: self.manifest.resource.name.clone(),
            subject: DEFAULT_SUBJECT.to_owned(),
            description: String::new(),
            language: Language {
                identifier: self.manifest.target_language.id.clone(),
                title: self.manifest.target_language.name.clone(),
                direction: self.manifest.target_language.direction.clone(),
            },
            source: self
                .manifest
                .source_translations
                .iter()
                .map(|s| Source {
                    identifier: s.resource_id.clone(),
                    language: s.language_id.clone(),
                    version: s.version.clone(),
                })
                .collect(),
            rights: DEFAULT_RIGHTS.to_owned(),
            creator: DEFAULT_CREATOR.to_owned(),
            contributor: self.manifest.translators.clone(),
            relation: Vec::new(),
            publisher: DEFAULT_PUBLISHER.to_owned(),
            issued: today.clone(),
            modified: today,
            version: "1".to_owned(),
        }
    }

    fn rc_project(&self) -> Project {
        let path = if self.dir.join(CONTENT_DIR).is_dir() {
            "./content"
        } else {
            "./"
        };
        Project {
            identifier: self.manifest.project.id.clone(),
            title: self.manifest.project.name.clone(),
            sort: 1,
            path: path.to_owned(),
            versification: DEFAULT_VERSIFICATION.to_owned(),
            categories: Vec::new(),
        }
    }
}
