//! Derived file predicates.
//!
//! Pure functions over `FileObject`; nothing here is stored on the entry.

use crate::model::FileObject;

/// Mimetypes the daemon can decompress.
pub const ARCHIVE_MIMETYPES: &[&str] = &[
    "application/vnd.rar",
    "application/x-rar-compressed",
    "application/x-tar",
    "application/x-br",
    "application/x-bzip2",
    "application/gzip",
    "application/x-gzip",
    "application/x-lzip",
    "application/x-sz",
    "application/x-xz",
    "application/zstd",
    "application/zip",
    "application/x-7z-compressed",
];

/// Mimetype fragments that rule out the text editor.
const NON_EDITABLE_MIMETYPES: &[&str] = &[
    "application/jar",
    "application/octet-stream",
    "inode/directory",
];

pub fn is_archive_type(file: &FileObject) -> bool {
    file.is_file && ARCHIVE_MIMETYPES.contains(&file.mimetype.as_str())
}

pub fn is_directory(file: &FileObject) -> bool {
    file.mimetype == "inode/directory"
}

/// A regular, non-archive file whose mimetype is text-like. Images are out
/// except SVG.
pub fn is_editable(file: &FileObject) -> bool {
    if !file.is_file || is_archive_type(file) {
        return false;
    }

    let mime = file.mimetype.as_str();
    if NON_EDITABLE_MIMETYPES.iter().any(|m| mime.contains(m)) {
        return false;
    }

    !is_raster_image(mime)
}

fn is_raster_image(mime: &str) -> bool {
    mime.strip_prefix("image/")
        .is_some_and(|subtype| !subtype.starts_with("svg+xml"))
}
