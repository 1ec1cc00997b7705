//! Image upload validation and storage.
//!
//! Uploads are restricted to a fixed image-extension allow-list and stored
//! under generated unique names so two files sharing an original name never
//! overwrite each other.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use actix_multipart::form::MultipartForm;
use actix_multipart::form::tempfile::TempFile;
use thiserror::Error;
use uuid::Uuid;

/// Extensions accepted for uploaded images, lowercase.
pub const ALLOWED_IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "webp"];

#[derive(Debug, Error)]
pub enum UploadError {
    #[error("No selected file")]
    MissingFileName,
    #[error("File type not allowed")]
    DisallowedExtension,
    #[error("failed to store upload: {0}")]
    Io(#[from] io::Error),
}

/// Multipart payload carrying a single image under the `image` field.
#[derive(MultipartForm)]
pub struct UploadImageForm {
    #[multipart(limit = "10MB")]
    pub image: TempFile,
}

/// Return the lowercased extension if the file name carries an allowed one.
pub fn allowed_extension(file_name: &str) -> Option<String> {
    let (stem, ext) = file_name.rsplit_once('.')?;
    if stem.is_empty() {
        return None;
    }
    let ext = ext.to_lowercase();
    ALLOWED_IMAGE_EXTENSIONS.contains(&ext.as_str()).then_some(ext)
}

/// Move an uploaded temp file into the upload directory under a unique
/// generated name. Returns the stored file name.
pub fn store_upload(
    source: &Path,
    original_name: &str,
    upload_dir: &Path,
) -> Result<String, UploadError> {
    if original_name.is_empty() {
        return Err(UploadError::MissingFileName);
    }
    let ext = allowed_extension(original_name).ok_or(UploadError::DisallowedExtension)?;
    let stored_name = format!("{}.{ext}", Uuid::new_v4());
    let destination: PathBuf = upload_dir.join(&stored_name);
    // Copy rather than rename: the temp file may live on another filesystem.
    fs::copy(source, &destination)?;
    Ok(stored_name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn accepts_allow_listed_extensions_case_insensitively() {
        assert_eq!(allowed_extension("photo.PNG").as_deref(), Some("png"));
        assert_eq!(allowed_extension("photo.jpeg").as_deref(), Some("jpeg"));
    }

    #[test]
    fn rejects_disallowed_or_missing_extensions() {
        assert_eq!(allowed_extension("malware.exe"), None);
        assert_eq!(allowed_extension("noextension"), None);
        assert_eq!(allowed_extension(".png"), None);
    }

    #[test]
    fn stores_same_original_name_under_distinct_names() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut source = tempfile::NamedTempFile::new().expect("tempfile");
        source.write_all(b"fake image bytes").expect("write");

        let first = store_upload(source.path(), "photo.jpg", dir.path()).unwrap();
        let second = store_upload(source.path(), "photo.jpg", dir.path()).unwrap();

        assert_ne!(first, second);
        assert!(dir.path().join(&first).exists());
        assert!(dir.path().join(&second).exists());
    }

    #[test]
    fn refuses_to_store_disallowed_files() {
        let dir = tempfile::tempdir().expect("tempdir");
        let source = tempfile::NamedTempFile::new().expect("tempfile");

        assert!(matches!(
            store_upload(source.path(), "script.sh", dir.path()),
            Err(UploadError::DisallowedExtension)
        ));
        assert!(matches!(
            store_upload(source.path(), "", dir.path()),
            Err(UploadError::MissingFileName)
        ));
    }
}
