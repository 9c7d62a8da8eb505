//! Pre-upload validation of selected files.
//!
//! Validation only reports; it never drops or mutates files. The caller
//! decides whether errors block submission.

#[cfg(test)]
#[path = "upload_test.rs"]
mod upload_test;

use crate::config::DEFAULT_MAX_UPLOAD_BYTES;

/// Metadata of one selected file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UploadFile {
    pub name: String,
    /// Declared media type (`File.type`), possibly empty.
    pub media_type: String,
    pub size: u64,
}

/// The files as given plus every problem found with them.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UploadCheck {
    pub files: Vec<UploadFile>,
    pub errors: Vec<String>,
}

impl UploadCheck {
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Validate against `allowed_types` and the 10 MiB ceiling.
#[must_use]
pub fn validate_upload(files: Vec<UploadFile>, allowed_types: &[&str]) -> UploadCheck {
    validate_upload_with_limit(files, allowed_types, DEFAULT_MAX_UPLOAD_BYTES)
}

/// Validate against `allowed_types` and an explicit byte ceiling.
#[must_use]
pub fn validate_upload_with_limit(files: Vec<UploadFile>, allowed_types: &[&str], max_bytes: u64) -> UploadCheck {
    let mut errors = Vec::new();
    for file in &files {
        if !allowed_types.contains(&file.media_type.as_str()) {
            errors.push(format!("File \"{}\" is not a supported format.", file.name));
        }
        if file.size > max_bytes {
            errors.push(format!("File \"{}\" exceeds the {}MB size limit.", file.name, max_bytes / (1024 * 1024)));
        }
    }
    UploadCheck { files, errors }
}

/// Collect metadata from a file input's current selection.
#[cfg(feature = "hydrate")]
pub fn files_from_input(input: &web_sys::HtmlInputElement) -> Vec<UploadFile> {
    let Some(list) = input.files() else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .map(|file| {
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let size = file.size() as u64;
            UploadFile { name: file.name(), media_type: file.type_(), size }
        })
        .collect()
}
