// src/file.rs

use std::{
    fs,
    io,
    path::{Path, PathBuf},
};

use crate::error::{Error, Result};

/// Read a page or source file. Invalid UTF-8 is replaced rather than
/// rejected so a single stray byte does not stop a whole run.
pub fn read_text(path: &Path) -> Result<String> {
    let bytes = fs::read(path).map_err(|e| Error::io(path, e))?;
    match String::from_utf8(bytes) {
        Ok(s) => Ok(s),
        Err(e) => {
            logw!("{}: not valid UTF-8, decoding lossily", path.display());
            Ok(String::from_utf8_lossy(e.as_bytes()).into_owned())
        }
    }
}

pub fn write_text(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }
    fs::write(path, contents).map_err(|e| Error::io(path, e))
}

/// Write only when `new` differs from `old`. Returns true if written.
pub fn write_if_changed(path: &Path, old: &str, new: &str) -> Result<bool> {
    if old == new { return Ok(false); }
    write_text(path, new)?;
    Ok(true)
}

/// `*.html` files directly under `dir` (no recursion), sorted by name.
pub fn root_html_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut out = Vec::new();
    for entry in fs::read_dir(dir).map_err(|e| Error::io(dir, e))? {
        let path = entry.map_err(|e| Error::io(dir, e))?.path();
        let is_html = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("html"));
        if is_html && path.is_file() {
            out.push(path);
        }
    }
    out.sort();
    Ok(out)
}

pub fn ensure_directory(dir: &Path) -> Result<()> {
    if dir.exists() && !dir.is_dir() {
        let e = io::Error::new(io::ErrorKind::AlreadyExists, "path exists but is not a directory");
        return Err(Error::io(dir, e));
    }
    if !dir.exists() { fs::create_dir_all(dir).map_err(|e| Error::io(dir, e))?; }
    Ok(())
}

pub fn file_name(path: &Path) -> String {
    path.file_name().map(|n| n.to_string_lossy().into_owned()).unwrap_or_default()
}
