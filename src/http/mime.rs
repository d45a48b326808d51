//! Content-Type detection based on file extensions.

/// Known extensions and their MIME types. Matched against the request path
/// as a case-sensitive suffix, in table order; first match wins.
const MIME_TYPES: &[(&str, &str)] = &[
    (".html", "text/html"),
    (".css", "text/css"),
    (".js", "application/javascript"),
    (".json", "application/json"),
    (".jpg", "image/jpeg"),
    (".jpeg", "image/jpeg"),
    (".png", "image/png"),
    (".gif", "image/gif"),
    (".txt", "text/plain"),
    (".pdf", "application/pdf"),
    (".xml", "application/xml"),
];

/// Content-Type for anything without a known extension.
pub const OCTET_STREAM: &str = "application/octet-stream";

/// Resolves the Content-Type for a path by its extension.
///
/// Pure lookup, never fails; unknown extensions get [`OCTET_STREAM`].
pub fn content_type(path: &str) -> &'static str {
    for (ext, mime) in MIME_TYPES {
        if path.ends_with(ext) {
            return mime;
        }
    }
    OCTET_STREAM
}
