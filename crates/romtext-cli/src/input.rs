//! Loading width tables, layout profiles and source text.
//!
//! Text is read as raw bytes: the sanitizer, not the loader, decides what to
//! do with bytes outside printable ASCII.

use anyhow::{Context, Result};
use romtext_spec::{CharacterWidthTable, LayoutProfile, ProfileError};
use std::fs;
use std::io::Read;
use std::path::Path;

/// Loads a width table from a JSON array file.
pub fn load_widths(path: &Path) -> Result<CharacterWidthTable> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read width table: {}", path.display()))?;
    CharacterWidthTable::from_json_str(&json)
        .with_context(|| format!("Invalid width table: {}", path.display()))
}

/// Resolves the layout profile from a built-in name or a JSON file.
///
/// A profile file wins over a name; with neither, the default profile is used.
pub fn load_profile(name: Option<&str>, file: Option<&Path>) -> Result<LayoutProfile> {
    if let Some(path) = file {
        let json = fs::read_to_string(path)
            .with_context(|| format!("Failed to read profile: {}", path.display()))?;
        return LayoutProfile::from_json_str(&json)
            .with_context(|| format!("Invalid profile: {}", path.display()));
    }

    match name {
        Some(name) => LayoutProfile::by_name(name)
            .ok_or_else(|| anyhow::Error::from(ProfileError::UnknownProfile(name.to_string()))),
        None => Ok(LayoutProfile::default()),
    }
}

/// Reads the source text from a file, or from stdin when `path` is `None`.
pub fn read_text(path: Option<&Path>) -> Result<Vec<u8>> {
    match path {
        Some(path) => {
            fs::read(path).with_context(|| format!("Failed to read text: {}", path.display()))
        }
        None => {
            let mut buf = Vec::new();
            std::io::stdin()
                .lock()
                .read_to_end(&mut buf)
                .context("Failed to read text from stdin")?;
            Ok(buf)
        }
    }
}

/// Splits source text into input lines.
///
/// A final line break does not open an extra empty line, and a `\r` before a
/// line break is dropped so CRLF files read like LF files.
pub fn split_lines(text: &[u8]) -> Vec<&[u8]> {
    if text.is_empty() {
        return Vec::new();
    }
    let text = text.strip_suffix(b"\n").unwrap_or(text);
    text.split(|&b| b == b'\n')
        .map(|line| line.strip_suffix(b"\r").unwrap_or(line))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_split_lines() {
        let empty: Vec<&[u8]> = vec![];
        assert_eq!(split_lines(b""), empty);
        assert_eq!(split_lines(b"\n"), vec![&b""[..]]);
        assert_eq!(split_lines(b"a\nb"), vec![&b"a"[..], &b"b"[..]]);
        assert_eq!(split_lines(b"a\nb\n"), vec![&b"a"[..], &b"b"[..]]);
        assert_eq!(
            split_lines(b"a\r\n\r\nb\r\n"),
            vec![&b"a"[..], &b""[..], &b"b"[..]]
        );
    }

    #[test]
    fn test_load_widths() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", serde_json::to_string(&vec![8u32; 96]).unwrap()).unwrap();
        let table = load_widths(file.path()).unwrap();
        assert_eq!(table.len(), 96);
    }

    #[test]
    fn test_load_widths_reports_short_table() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "[8, 8, 8]").unwrap();
        let err = load_widths(file.path()).unwrap_err();
        let msg = format!("{:#}", err);
        assert!(msg.contains("expected at least 96"), "message was: {}", msg);
    }

    #[test]
    fn test_load_profile() {
        assert_eq!(load_profile(None, None).unwrap(), LayoutProfile::default());
        assert_eq!(load_profile(Some("wide"), None).unwrap(), LayoutProfile::wide());
        assert!(load_profile(Some("nope"), None).is_err());

        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"name": "small", "bank_max_bytes": 256}}"#).unwrap();
        let profile = load_profile(Some("wide"), Some(file.path())).unwrap();
        assert_eq!(profile.name, "small");
        assert_eq!(profile.bank_max_bytes, 256);
        assert_eq!(profile.line_max_pixels, 160);
    }

    #[test]
    fn test_read_text_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"caf\xc3\xa9\n").unwrap();
        assert_eq!(read_text(Some(file.path())).unwrap(), b"caf\xc3\xa9\n".to_vec());
    }
}
