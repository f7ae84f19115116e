use paperfacet_core::CatalogError;
use std::io::ErrorKind;
use std::path::Path;

/// Map catalog loading errors to user-friendly messages
/// Returns (title, message, details)
pub fn map_file_load_error(error: &CatalogError, path: &Path) -> (String, String, String) {
    match error {
        CatalogError::Io { source, .. } if source.kind() == ErrorKind::NotFound => (
            "File Not Found".to_string(),
            "The catalog file could not be found.".to_string(),
            format!(
                "Path: {}\n\nPlease verify the file exists, or point PAPERFACET_DATA at it.",
                path.display()
            ),
        ),
        CatalogError::Io { source, .. } if source.kind() == ErrorKind::PermissionDenied => (
            "Permission Denied".to_string(),
            "Permission denied.".to_string(),
            format!("You don't have permission to read this file:\n{}", path.display()),
        ),
        CatalogError::Json(e) => (
            "Invalid JSON".to_string(),
            "The catalog file is not valid JSON.".to_string(),
            e.to_string(),
        ),
        CatalogError::Schema(errors) => (
            "Validation Error".to_string(),
            "The catalog file does not have the expected shape.".to_string(),
            errors.join("\n"),
        ),
        other => (
            "Error Loading File".to_string(),
            "Failed to load catalog file.".to_string(),
            other.to_string(),
        ),
    }
}

/// Map export errors to user-friendly messages
/// Returns (title, message, details)
pub fn map_export_error(error: &anyhow::Error, path: &Path) -> (String, String, String) {
    let io_kind = error.chain().find_map(|cause| {
        cause
            .downcast_ref::<std::io::Error>()
            .map(|io_error| io_error.kind())
    });
    let error_string = format!("{:#}", error);

    match io_kind {
        Some(ErrorKind::PermissionDenied) => (
            "Permission Denied".to_string(),
            "Permission denied.".to_string(),
            format!("You don't have permission to write to:\n{}", path.display()),
        ),
        Some(ErrorKind::NotFound) => (
            "Directory Not Found".to_string(),
            "The export directory does not exist.".to_string(),
            format!("Path: {}\n\nCreate the directory first.", path.display()),
        ),
        _ if error_string.contains("No space left") => (
            "Disk Full".to_string(),
            "Disk full.".to_string(),
            "There is no space left on the device to write the export.".to_string(),
        ),
        _ => (
            "Error Writing Export".to_string(),
            "Failed to write export file.".to_string(),
            error_string,
        ),
    }
}
