//! JSON rendering and atomic file replacement.

use crate::error::OverlayError;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

const INDENT: &[u8] = b"    ";

/// Render `value` as 4-space indented JSON with a trailing newline.
pub fn to_pretty_json<T: Serialize + ?Sized>(value: &T) -> Result<String, OverlayError> {
    let mut buf = Vec::new();
    let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
    value.serialize(&mut ser)?;
    buf.push(b'\n');
    // serde_json only emits valid UTF-8
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Serialize `value` to `path`, replacing any existing file.
///
/// Writes a sibling temporary file first and renames it over the target.
pub fn write_json_to_file<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<(), OverlayError> {
    let rendered = to_pretty_json(value)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| OverlayError::io(parent, e))?;
    }

    let temp_path = temp_path_for(path);
    fs::write(&temp_path, rendered.as_bytes()).map_err(|e| OverlayError::io(&temp_path, e))?;

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        OverlayError::io(path, e)
    })?;

    debug!(path = %path.display(), bytes = rendered.len(), "Wrote JSON file");
    Ok(())
}

fn temp_path_for(path: &Path) -> PathBuf {
    let mut name: OsString = path.as_os_str().to_owned();
    name.push(".tmp");
    PathBuf::from(name)
}
