//! Request-target resolution against the document root.
//!
//! Deliberately not generic path normalization: only a segment that is
//! exactly `.` or exactly `..` takes part in dot handling. `...`, `....`,
//! `..x` and every other dotted name is an ordinary path component. Library
//! canonicalization routines treat those inconsistently across platforms,
//! which is why the classification is spelled out here.

/// Classification of one `/`-delimited segment of a request target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    /// Consecutive slashes produce empty segments; they collapse.
    Empty,
    /// Exactly `.`; ignored.
    CurDir,
    /// Exactly `..`; pops the previously resolved component.
    ParentDir,
    /// Anything else, however many leading dots. A real file or directory
    /// name.
    Literal(&'a str),
}

/// Classifies a single segment. Exact string match only.
pub fn classify(segment: &str) -> Segment<'_> {
    match segment {
        "" => Segment::Empty,
        "." => Segment::CurDir,
        ".." => Segment::ParentDir,
        other => Segment::Literal(other),
    }
}

/// Resolves a request target into root-relative path components, applying
/// segment classification left-to-right.
///
/// Returns `None` when a `..` pops with no components left: the target
/// escapes the document root and must be answered 404. The target is used
/// literally; there is no percent-decoding or query handling.
pub fn resolve_target(target: &str) -> Option<Vec<&str>> {
    let mut components = Vec::new();
    for segment in target.split('/') {
        match classify(segment) {
            Segment::Empty | Segment::CurDir => {}
            Segment::ParentDir => {
                components.pop()?;
            }
            Segment::Literal(name) => components.push(name),
        }
    }
    Some(components)
}
