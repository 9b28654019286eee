use statik::serve::mime::{DEFAULT_MIME, MimeTable};

#[test]
fn test_default_table_entries() {
    let table = MimeTable::default();

    assert_eq!(table.mime_for("index.html"), "text/html");
    assert_eq!(table.mime_for("photo.jpg"), "image/jpeg");
    assert_eq!(table.mime_for("photo.jpeg"), "image/jpeg");
    assert_eq!(table.mime_for("style.css"), "text/css");
    assert_eq!(table.mime_for("app.js"), "text/javascript");
}

#[test]
fn test_unknown_suffix_falls_back_to_default() {
    let table = MimeTable::default();

    assert_eq!(table.mime_for("archive.tar"), DEFAULT_MIME);
    assert_eq!(table.mime_for("data.bin"), DEFAULT_MIME);
}

#[test]
fn test_no_suffix_falls_back_to_default() {
    let table = MimeTable::default();

    assert_eq!(table.mime_for("README"), DEFAULT_MIME);
    assert_eq!(table.mime_for(""), DEFAULT_MIME);
}

#[test]
fn test_last_suffix_wins_with_multiple_dots() {
    let table = MimeTable::default();

    assert_eq!(table.mime_for("a.css.html.js.jpg"), "image/jpeg");
    assert_eq!(table.mime_for("jquery.min.js"), "text/javascript");
}

#[test]
fn test_leading_dot_filename_uses_literal_suffix() {
    let table = MimeTable::default();

    assert_eq!(table.mime_for(".css"), "text/css");
}

#[test]
fn test_trailing_dot_is_an_empty_suffix() {
    let table = MimeTable::default();

    assert_eq!(table.mime_for("file."), DEFAULT_MIME);
}

#[test]
fn test_lookup_is_case_sensitive() {
    let table = MimeTable::default();

    assert_eq!(table.mime_for("INDEX.HTML"), DEFAULT_MIME);
    assert_eq!(table.mime_for("photo.JPG"), DEFAULT_MIME);
}

#[test]
fn test_custom_table_injection() {
    let table = MimeTable::new(vec![("wasm", "application/wasm")], "text/plain");

    assert_eq!(table.mime_for("module.wasm"), "application/wasm");
    assert_eq!(table.mime_for("index.html"), "text/plain");
}
