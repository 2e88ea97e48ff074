use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Dataset-level constants written into every taxon record.
/// Any subset can be overridden from a JSON file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DatasetMetadata {
    /// Namespace used in `taxonID`, e.g. `alien-plants-belgium:taxon:<md5>`
    pub slug: String,
    pub license: String,
    pub rights_holder: String,
    pub dataset_id: String,
    pub dataset_name: String,
}

impl Default for DatasetMetadata {
    fn default() -> Self {
        Self {
            slug: "alien-plants-belgium".to_string(),
            license: "http://creativecommons.org/publicdomain/zero/1.0/".to_string(),
            rights_holder: "Botanic Garden Meise".to_string(),
            dataset_id: "https://doi.org/10.15468/wtda1m".to_string(),
            dataset_name: "Manual of the Alien Plants of Belgium".to_string(),
        }
    }
}

impl DatasetMetadata {
    /// Load metadata from a JSON file, or the defaults when no file is given
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read metadata file: {:?}", path))?;
        serde_json::from_str(&text)
            .with_context(|| format!("Failed to parse metadata file: {:?}", path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_without_file_uses_defaults() {
        let metadata = DatasetMetadata::load(None).unwrap();
        assert_eq!(metadata, DatasetMetadata::default());
        assert_eq!(metadata.slug, "alien-plants-belgium");
    }

    #[test]
    fn test_partial_override() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"rights_holder": "Meise Botanic Garden"}}"#).unwrap();

        let metadata = DatasetMetadata::load(Some(file.path())).unwrap();
        assert_eq!(metadata.rights_holder, "Meise Botanic Garden");
        assert_eq!(metadata.dataset_name, "Manual of the Alien Plants of Belgium");
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        assert!(DatasetMetadata::load(Some(file.path())).is_err());
    }
}
