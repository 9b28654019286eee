//! Static file serving: traversal-safe path resolution, MIME lookup, and
//! file delivery from a document root.

pub mod files;
pub mod mime;
pub mod path;
