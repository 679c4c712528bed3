//! TOML file source.

use std::path::{Path, PathBuf};

use super::source::{ConfigEntry, ConfigSource};
use super::ConfigError;

/// Loads a TOML file as a single root entry.
///
/// A missing required file is an error; a missing optional file contributes
/// nothing.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
    required: bool,
}

impl FileSource {
    pub fn new(path: impl AsRef<Path>, required: bool) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            required,
        }
    }
}

impl ConfigSource for FileSource {
    fn entries(&self) -> Result<Vec<ConfigEntry>, ConfigError> {
        let contents = match std::fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                if self.required {
                    return Err(ConfigError::FileNotFound(self.path.clone()));
                }
                tracing::debug!(path = %self.path.display(), "optional config file missing");
                return Ok(vec![]);
            }
            Err(e) => {
                return Err(ConfigError::ReadError {
                    path: self.path.clone(),
                    source: e,
                })
            }
        };

        let table = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
            path: self.path.clone(),
            source: e,
        })?;
        tracing::debug!(path = %self.path.display(), "loaded config file");
        Ok(vec![ConfigEntry::root(table)])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_file_source_loads_valid_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[database]\nhost = \"localhost\"").unwrap();

        let entries = FileSource::new(file.path(), true).entries().unwrap();

        assert_eq!(entries.len(), 1);
        assert!(entries[0].path.is_empty());
        assert_eq!(
            entries[0].value["database"]["host"].as_str(),
            Some("localhost")
        );
    }

    #[test]
    fn test_file_source_required_missing() {
        let result = FileSource::new("/nonexistent/path/config.toml", true).entries();

        assert!(matches!(result, Err(ConfigError::FileNotFound(_))));
    }

    #[test]
    fn test_file_source_optional_missing() {
        let entries = FileSource::new("/nonexistent/path/config.toml", false)
            .entries()
            .unwrap();

        assert!(entries.is_empty());
    }

    #[test]
    fn test_file_source_invalid_toml() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "not = [valid").unwrap();

        let result = FileSource::new(file.path(), false).entries();

        assert!(matches!(result, Err(ConfigError::ParseError { .. })));
    }
}
