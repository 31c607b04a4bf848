use bindery_schema::raw::{self, RawManifest};
use bindery_schema::{conforms_to, DublinCore, Language, Source};
use serde_json::Value;

/// Bibliographic view over a raw manifest's resource record.
///
/// Every field is defaulted at read time: strings default to empty (except
/// `conforms_to`, which defaults to the current Resource Container version),
/// sequences to empty. The underlying raw manifest is never modified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resource {
    pub kind: String,
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

impl Resource {
    pub(crate) fn from_raw(map: &RawManifest) -> Self {
        let language = raw::map_of(map, "language")
            .map(|lang| Language {
                identifier: raw::str_of(lang, "identifier", ""),
                title: raw::str_of(lang, "title", ""),
                direction: raw::str_of(lang, "direction", ""),
            })
            .unwrap_or_default();

        let source = raw::seq_of(map, "source")
            .map(|entries| {
                entries
                    .iter()
                    .filter_map(Value::as_object)
                    .map(|entry| Source {
                        identifier: raw::str_of(entry, "identifier", ""),
                        language: raw::str_of(entry, "language", ""),
                        version: raw::str_of(entry, "version", ""),
                    })
                    .collect()
            })
            .unwrap_or_default();

        Self {
            kind: raw::str_of(map, "type", ""),
            conforms_to: raw::str_of(map, "conformsto", &conforms_to()),
            format: raw::str_of(map, "format", ""),
            identifier: raw::str_of(map, "identifier", ""),
            title: raw::str_of(map, "title", ""),
            subject: raw::str_of(map, "subject", ""),
            description: raw::str_of(map, "description", ""),
            language,
            source,
            rights: raw::str_of(map, "rights", ""),
            creator: raw::str_of(map, "creator", ""),
            contributor: raw::string_seq_of(map, "contributor").unwrap_or_default(),
            relation: raw::string_seq_of(map, "relation").unwrap_or_default(),
            publisher: raw::str_of(map, "publisher", ""),
            issued: raw::str_of(map, "issued", ""),
            modified: raw::str_of(map, "modified", ""),
            version: raw::str_of(map, "version", ""),
        }
    }

    /// Re-express this view as the serializable Dublin Core record.
    pub fn to_dublin_core(&self) -> DublinCore {
        DublinCore {
            kind: self.kind.clone(),
            conforms_to: self.conforms_to.clone(),
            format: self.format.clone(),
            identifier: self.identifier.clone(),
            title: self.title.clone(),
            subject: self.subject.clone(),
            description: self.description.clone(),
            language: self.language.clone(),
            source: self.source.clone(),
            rights: self.rights.clone(),
            creator: self.creator.clone(),
            contributor: self.contributor.clone(),
            relation: self.relation.clone(),
            publisher: self.publisher.clone(),
            issued: self.issued.clone(),
            modified: self.modified.clone(),
            version: self.version.clone(),
        }
    }
}
