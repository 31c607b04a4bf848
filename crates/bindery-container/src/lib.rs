//! Resource Container reader for Bindery.
//!
//! A [`Container`] wraps a container directory and resolves its manifest from
//! a fixed list of candidate files, falling back to a synthetic manifest
//! derived from the directory name. Typed views over the raw manifest
//! (resource record, project list, checking metadata) are computed lazily and
//! memoized per instance. Listing helpers enumerate a project's chapters,
//! chunks, and USFM files.

pub mod container;
pub mod project;
pub mod resource;

pub use container::{Container, DEFAULT_CHECKING_ENTITY, DEFAULT_CHECKING_LEVEL};
pub use project::ProjectEntry;
pub use resource::Resource;
