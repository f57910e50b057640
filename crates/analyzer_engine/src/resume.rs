use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use bytes::Bytes;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ResumeLoadError {
    #[error("cannot read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("{0:?} is empty")]
    Empty(PathBuf),
}

/// A file read from disk together with the media type it declares.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedResume {
    pub name: String,
    pub media_type: &'static str,
    pub bytes: Bytes,
}

/// Reads a resume the way a browser file picker hands it over: the bytes
/// plus a media type declared from the file extension, not the content.
pub fn load_resume(path: &Path) -> Result<LoadedResume, ResumeLoadError> {
    let bytes = fs::read(path).map_err(|source| ResumeLoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    if bytes.is_empty() {
        return Err(ResumeLoadError::Empty(path.to_path_buf()));
    }

    let name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "resume".to_string());

    Ok(LoadedResume {
        media_type: declared_media_type(path),
        name,
        bytes: Bytes::from(bytes),
    })
}

pub fn declared_media_type(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);
    match ext.as_deref() {
        Some("pdf") => "application/pdf",
        Some("doc") => "application/msword",
        Some("docx") => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        Some("txt") => "text/plain",
        Some("rtf") => "application/rtf",
        _ => "application/octet-stream",
    }
}
