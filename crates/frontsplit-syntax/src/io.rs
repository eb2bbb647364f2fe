use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum ReadError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Read a whole document from disk. The bytes are returned as they are;
/// the scanner copes with invalid UTF-8.
pub fn read_document(path: &Path) -> Result<Vec<u8>, ReadError> {
    if !path.exists() {
        return Err(ReadError::NotFound(path.to_path_buf()));
    }
    Ok(fs::read(path)?)
}

/// Read a whole document from any reader, such as stdin
pub fn read_from<R: Read>(mut reader: R) -> Result<Vec<u8>, ReadError> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    Ok(bytes)
}
