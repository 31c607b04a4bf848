use crate::project::ProjectEntry;
use crate::resource::Resource;
use bindery_schema::raw::{self, RawManifest};
use bindery_schema::{parse_json_mapping, parse_yaml_mapping, Checking, Manifest, SchemaError};
use serde_json::Value;
use std::cell::{OnceCell, RefCell};
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Checking entity recorded when a manifest carries none.
pub const DEFAULT_CHECKING_ENTITY: &str = "Wycliffe Associates";
/// Checking level recorded when a manifest carries none.
pub const DEFAULT_CHECKING_LEVEL: &str = "1";

/// Extensions that qualify a file as a chunk. The empty entry admits files
/// with no extension at all.
const CHUNK_EXTENSIONS: &[&str] = &["", "txt", "text", "md", "usfm"];

#[derive(Debug, Clone, Copy)]
enum ManifestFormat {
    Yaml,
    Json,
}

/// Manifest candidates in resolution priority order. The JSON names after
/// `manifest.json` accommodate containers packaged by other ecosystems'
/// conventions; the list and its order are part of the resolution contract.
const MANIFEST_CANDIDATES: &[(&str, ManifestFormat)] = &[
    ("manifest.yaml", ManifestFormat::Yaml),
    ("manifest.json", ManifestFormat::Json),
    ("package.json", ManifestFormat::Json),
    ("project.json", ManifestFormat::Json),
    ("meta.json", ManifestFormat::Json),
];

/// A Resource Container rooted at a directory.
///
/// The manifest is resolved at most once per instance, on first access, by
/// trying the candidate files in priority order and falling back to a
/// synthetic manifest named after the container. Candidate files that exist
/// but fail to parse are recorded as warnings and never abort resolution.
/// Derived views are memoized independently; an instance performs no I/O
/// after its caches are filled.
#[derive(Debug)]
pub struct Container {
    dir: Option<PathBuf>,
    repo_name: Option<String>,
    raw: OnceCell<RawManifest>,
    resource: OnceCell<Resource>,
    projects: OnceCell<Vec<ProjectEntry>>,
    warnings: RefCell<BTreeSet<String>>,
}

impl Container {
    /// Open the container at `dir`. The directory may be absent; resolution
    /// then falls back to a synthetic manifest named after its base name.
    pub fn open(dir: impl Into<PathBuf>) -> Self {
        Self::new(Some(dir.into()), None, None)
    }

    /// Open the container at `dir` under an explicit name, used in warning
    /// messages and as the synthetic-manifest identifier.
    pub fn open_named(dir: impl Into<PathBuf>, repo_name: impl Into<String>) -> Self {
        Self::new(Some(dir.into()), Some(repo_name.into()), None)
    }

    /// A directory-less container known only by name. Its manifest is always
    /// the synthetic one.
    pub fn from_name(repo_name: impl Into<String>) -> Self {
        Self::new(None, Some(repo_name.into()), None)
    }

    /// A container over a pre-supplied raw manifest. File resolution is
    /// bypassed entirely.
    pub fn from_raw(raw: RawManifest) -> Self {
        Self::new(None, None, Some(raw))
    }

    fn new(dir: Option<PathBuf>, repo_name: Option<String>, raw: Option<RawManifest>) -> Self {
        let cell = OnceCell::new();
        if let Some(raw) = raw {
            // Pre-supplied manifests bypass resolution; the cell starts full.
            let _ = cell.set(raw);
        }
        Self {
            dir,
            repo_name,
            raw: cell,
            resource: OnceCell::new(),
            projects: OnceCell::new(),
            warnings: RefCell::new(BTreeSet::new()),
        }
    }

    /// The container directory, if one was given.
    pub fn path(&self) -> Option<&Path> {
        self.dir.as_deref()
    }

    /// The container's name: the explicitly supplied name, else the
    /// directory's base name, else empty.
    pub fn repo_name(&self) -> String {
        if let Some(name) = &self.repo_name {
            return name.clone();
        }
        self.dir
            .as_deref()
            .and_then(Path::file_name)
            .and_then(|name| name.to_str())
            .unwrap_or("")
            .to_owned()
    }

    /// Warnings accumulated during manifest resolution, in sorted order.
    /// The set is never cleared.
    pub fn warnings(&self) -> Vec<String> {
        self.warnings.borrow().iter().cloned().collect()
    }

    /// The resolved raw manifest. Resolution runs on first access and is
    /// cached for the instance's lifetime.
    pub fn manifest(&self) -> &RawManifest {
        self.raw.get_or_init(|| self.resolve_manifest())
    }

    fn resolve_manifest(&self) -> RawManifest {
        if let Some(dir) = self.dir.as_deref() {
            if dir.is_dir() {
                if let Some(found) = self.manifest_from_dir(dir) {
                    return found;
                }
            }
        }
        synthetic_manifest(&self.repo_name())
    }

    fn manifest_from_dir(&self, dir: &Path) -> Option<RawManifest> {
        for (file_name, format) in MANIFEST_CANDIDATES {
            let path = dir.join(file_name);
            if !path.is_file() {
                continue;
            }
            debug!("trying manifest candidate {}", path.display());
            let content = match fs::read_to_string(&path) {
                Ok(content) => content,
                Err(err) => {
                    self.record_warning(file_name, &err.to_string());
                    continue;
                }
            };
            let parsed = match format {
                ManifestFormat::Yaml => parse_yaml_mapping(&content),
                ManifestFormat::Json => parse_json_mapping(&content),
            };
            match parsed {
                Ok(map) => return Some(map),
                Err(SchemaError::NotAMapping) => {
                    // Parsed cleanly but holds no mapping (e.g. an empty
                    // document): skip to the next candidate without warning.
                    debug!("candidate {} is not a mapping", path.display());
                }
                Err(err) => self.record_warning(file_name, &err.to_string()),
            }
        }
        None
    }

    fn record_warning(&self, file_name: &str, detail: &str) {
        let message = format!("Badly formed '{file_name}' in {}: {detail}", self.repo_name());
        debug!("{message}");
        self.warnings.borrow_mut().insert(message);
    }

    /// The resource record view: `dublin_core`, else `resource`, else the
    /// whole raw manifest (legacy flat layout). First match wins.
    pub fn resource(&self) -> &Resource {
        self.resource.get_or_init(|| {
            let manifest = self.manifest();
            let record = raw::map_of(manifest, "dublin_core")
                .or_else(|| raw::map_of(manifest, "resource"))
                .unwrap_or(manifest);
            Resource::from_raw(record)
        })
    }

    pub fn checking_entity(&self) -> Vec<String> {
        raw::map_of(self.manifest(), "checking")
            .and_then(|checking| raw::string_seq_of(checking, "checking_entity"))
            .unwrap_or_else(|| vec![DEFAULT_CHECKING_ENTITY.to_owned()])
    }

    pub fn checking_level(&self) -> String {
        raw::map_of(self.manifest(), "checking").map_or_else(
            || DEFAULT_CHECKING_LEVEL.to_owned(),
            |checking| raw::str_of(checking, "checking_level", DEFAULT_CHECKING_LEVEL),
        )
    }

    /// The project list: the `projects` sequence, else the singular `project`
    /// mapping wrapped in a one-element list, else one synthesized default
    /// entry rooted at the container root. The fallback order is fixed.
    pub fn projects(&self) -> &[ProjectEntry] {
        self.projects.get_or_init(|| {
            let manifest = self.manifest();
            if let Some(entries) = raw::seq_of(manifest, "projects") {
                if !entries.is_empty() {
                    return entries
                        .iter()
                        .map(|value| {
                            value
                                .as_object()
                                .map_or_else(ProjectEntry::default_root, ProjectEntry::from_raw)
                        })
                        .collect();
                }
            }
            if let Some(single) = raw::map_of(manifest, "project") {
                return vec![ProjectEntry::from_raw(single)];
            }
            vec![ProjectEntry::default_root()]
        })
    }

    /// Look up a project. With an identifier: exact match or `None`. Without:
    /// the sole entry, a synthesized default when the list is empty, or
    /// `None` when several entries make the lookup ambiguous.
    pub fn project(&self, identifier: Option<&str>) -> Option<ProjectEntry> {
        let projects = self.projects();
        match identifier {
            Some(id) => projects.iter().find(|p| p.identifier == id).cloned(),
            None => match projects.len() {
                1 => Some(projects[0].clone()),
                0 => Some(ProjectEntry::default_root()),
                _ => None,
            },
        }
    }

    pub fn project_count(&self) -> usize {
        self.projects().len()
    }

    pub fn project_ids(&self) -> Vec<String> {
        self.projects().iter().map(|p| p.identifier.clone()).collect()
    }

    /// Re-express the resolved container as a serializable manifest.
    pub fn as_manifest(&self) -> Manifest {
        Manifest {
            dublin_core: self.resource().to_dublin_core(),
            checking: Checking {
                checking_entity: self.checking_entity(),
                checking_level: self.checking_level(),
            },
            projects: self.projects().iter().map(ProjectEntry::to_project).collect(),
        }
    }

    /// Chapter directories under the project, sorted ascending. Hidden
    /// entries and directories with no qualifying chunks are excluded.
    /// An unresolvable project or missing directory yields an empty list.
    pub fn chapters(&self, project_id: Option<&str>) -> Vec<String> {
        let Some(project) = self.project(project_id) else {
            return Vec::new();
        };
        let Some(project_dir) = self.project_dir(&project) else {
            return Vec::new();
        };
        let Ok(entries) = fs::read_dir(&project_dir) else {
            return Vec::new();
        };
        let mut chapters: Vec<String> = entries
            .filter_map(Result::ok)
            .filter(|entry| entry.path().is_dir())
            .filter_map(|entry| entry.file_name().into_string().ok())
            .filter(|name| !name.starts_with('.'))
            .filter(|name| !self.chunks(&project.identifier, Some(name.as_str())).is_empty())
            .collect();
        chapters.sort();
        chapters
    }

    /// Chunk files under `<project.path>/<chapter>`, sorted ascending. When
    /// `chapter_id` is omitted the project id doubles as the chapter (flat
    /// container layout). Hidden files and unknown extensions are excluded.
    pub fn chunks(&self, project_id: &str, chapter_id: Option<&str>) -> Vec<String> {
        let chapter = chapter_id.unwrap_or(project_id);
        let Some(project) = self.project(Some(project_id)) else {
            return Vec::new();
        };
        let Some(project_dir) = self.project_dir(&project) else {
            return Vec::new();
        };
        let Ok(entries) = fs::read_dir(project_dir.join(chapter)) else {
            return Vec::new();
        };
        let mut chunks: Vec<String> = entries
            .filter_map(Result::ok)
            .filter(|entry| entry.path().is_file())
            .filter_map(|entry| entry.file_name().into_string().ok())
            .filter(|name| !name.starts_with('.'))
            .filter(|name| CHUNK_EXTENSIONS.contains(&extension_of(name)))
            .collect();
        chunks.sort();
        chunks
    }

    /// USFM files directly under the project directory, in enumeration order.
    /// Callers must not depend on ordering.
    pub fn usfm_files(&self, project_id: Option<&str>) -> Vec<String> {
        let Some(project) = self.project(project_id) else {
            return Vec::new();
        };
        let Some(project_dir) = self.project_dir(&project) else {
            return Vec::new();
        };
        let Ok(entries) = fs::read_dir(&project_dir) else {
            return Vec::new();
        };
        entries
            .filter_map(Result::ok)
            .filter(|entry| entry.path().is_file())
            .filter_map(|entry| entry.file_name().into_string().ok())
            .filter(|name| extension_of(name) == "usfm")
            .collect()
    }

    fn project_dir(&self, project: &ProjectEntry) -> Option<PathBuf> {
        self.dir.as_deref().map(|dir| dir.join(&project.path))
    }
}

fn extension_of(name: &str) -> &str {
    Path::new(name)
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or("")
}

fn synthetic_manifest(name: &str) -> RawManifest {
    let mut dublin_core = RawManifest::new();
    dublin_core.insert(
        "identifier".to_owned(),
        Value::String(name.trim().to_owned()),
    );
    let mut root = RawManifest::new();
    root.insert("dublin_core".to_owned(), Value::Object(dublin_core));
    root
}
