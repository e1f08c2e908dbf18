use std::fs;
use std::path::Path;

use crate::error::{FtError, Result};

/// Reads the whole file as UTF-8 text.
pub fn load_text(path: &Path) -> Result<String> {
    let text = fs::read_to_string(path).map_err(|source| FtError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!("Read {} bytes from {:?}", text.len(), path);
    Ok(text)
}

/// Reads the whole file untouched; copy mode never decodes.
pub fn load_bytes(path: &Path) -> Result<Vec<u8>> {
    let bytes = fs::read(path).map_err(|source| FtError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!("Read {} bytes from {:?}", bytes.len(), path);
    Ok(bytes)
}

/// Creates or truncates `path` and writes `contents` to it.
pub fn save(path: &Path, contents: impl AsRef<[u8]>) -> Result<()> {
    let contents = contents.as_ref();
    fs::write(path, contents).map_err(|source| FtError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!("Wrote {} bytes to {:?}", contents.len(), path);
    Ok(())
}
