/// MIME type used when no table entry matches.
pub const DEFAULT_MIME: &str = "application/octet-stream";

const DEFAULT_TABLE: &[(&str, &str)] = &[
    ("html", "text/html"),
    ("jpg", "image/jpeg"),
    ("jpeg", "image/jpeg"),
    ("css", "text/css"),
    ("js", "text/javascript"),
];

/// Extension → MIME lookup table.
///
/// Injected at construction rather than held as global state, so tests and
/// embedders can supply their own entries.
#[derive(Debug, Clone)]
pub struct MimeTable {
    entries: Vec<(&'static str, &'static str)>,
    fallback: &'static str,
}

impl Default for MimeTable {
    fn default() -> Self {
        Self {
            entries: DEFAULT_TABLE.to_vec(),
            fallback: DEFAULT_MIME,
        }
    }
}

impl MimeTable {
    pub fn new(entries: Vec<(&'static str, &'static str)>, fallback: &'static str) -> Self {
        Self { entries, fallback }
    }

    /// MIME type for a filename, keyed by the text after the **last** `.`.
    ///
    /// Case-sensitive. No dot, or an unknown suffix, falls back to the
    /// default. A leading-dot name like `.css` still resolves by its literal
    /// suffix text.
    ///
    /// # Example
    ///
    /// ```
    /// # use statik::serve::mime::MimeTable;
    /// let table = MimeTable::default();
    /// assert_eq!(table.mime_for("index.html"), "text/html");
    /// assert_eq!(table.mime_for("a.css.html.js.jpg"), "image/jpeg");
    /// assert_eq!(table.mime_for("README"), "application/octet-stream");
    /// ```
    pub fn mime_for(&self, filename: &str) -> &'static str {
        let Some((_, suffix)) = filename.rsplit_once('.') else {
            return self.fallback;
        };
        self.entries
            .iter()
            .find(|(ext, _)| *ext == suffix)
            .map(|(_, mime)| *mime)
            .unwrap_or(self.fallback)
    }
}
