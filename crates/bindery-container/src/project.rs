use bindery_schema::raw::{self, RawManifest};
use bindery_schema::Project;

/// View over one project entry in a container manifest.
///
/// `path` is relative to the container root. A container whose manifest
/// declares no projects gets exactly one default entry rooted at `"."`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectEntry {
    pub identifier: String,
    pub title: String,
    pub sort: u32,
    pub path: String,
    pub versification: String,
    pub categories: Vec<String>,
}

impl ProjectEntry {
    pub(crate) fn from_raw(map: &RawManifest) -> Self {
        Self {
            identifier: raw::str_of(map, "identifier", ""),
            title: raw::str_of(map, "title", ""),
            sort: u32::try_from(raw::int_of(map, "sort", 0)).unwrap_or(0),
            path: raw::str_of(map, "path", "."),
            versification: raw::str_of(map, "versification", ""),
            categories: raw::string_seq_of(map, "categories").unwrap_or_default(),
        }
    }

    /// The default entry synthesized for containers that declare no projects.
    pub(crate) fn default_root() -> Self {
        Self {
            identifier: String::new(),
            title: String::new(),
            sort: 1,
            path: ".".to_owned(),
            versification: String::new(),
            categories: Vec::new(),
        }
    }

    /// Re-express this view as the serializable project record.
    pub fn to_project(&self) -> Project {
        Project {
            identifier: self.identifier.clone(),
            title: self.title.clone(),
            sort: self.sort,
            path: self.path.clone(),
            versification: self.versification.clone(),
            categories: self.categories.clone(),
        }
    }
}
