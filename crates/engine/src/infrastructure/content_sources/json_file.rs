//! Content pack read from a JSON file on disk.

use std::fs;
use std::path::PathBuf;

use tribunal_domain::ContentPack;

use super::builtin::parse_pack;
use crate::infrastructure::ports::{ContentError, ContentSource};

/// Loads a pack with the same shape as the built-in asset.
pub struct JsonFileContent {
    path: PathBuf,
}

impl JsonFileContent {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ContentSource for JsonFileContent {
    fn describe(&self) -> String {
        format!("file {}", self.path.display())
    }

    fn load(&self) -> Result<ContentPack, ContentError> {
        let json = fs::read_to_string(&self.path).map_err(|source| ContentError::Io {
            path: self.path.clone(),
            source,
        })?;
        parse_pack(&json)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::infrastructure::content_sources::BuiltinContent;

    #[test]
    fn loads_pack_written_to_disk() {
        let pack = BuiltinContent::new().load().expect("built-in pack");
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        let json = serde_json::to_string(&pack).expect("serialize");
        file.write_all(json.as_bytes()).expect("write");

        let loaded = JsonFileContent::new(file.path()).load().expect("load");

        assert_eq!(loaded, pack);
    }

    #[test]
    fn missing_file_reports_io_error_with_path() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("absent.json");

        let err = JsonFileContent::new(&path).load().unwrap_err();

        match err {
            ContentError::Io { path: reported, .. } => assert_eq!(reported, path),
            other => panic!("expected Io error, got {other:?}"),
        }
    }

    #[test]
    fn malformed_file_reports_json_error() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(b"{\"intro\": ").expect("write");

        let err = JsonFileContent::new(file.path()).load().unwrap_err();

        assert!(matches!(err, ContentError::Json(_)));
    }

    #[test]
    fn describe_names_the_file() {
        let source = JsonFileContent::new("/tmp/trial.json");
        assert_eq!(source.describe(), "file /tmp/trial.json");
    }
}
