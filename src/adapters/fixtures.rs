use crate::core::{Catalog, FixtureSource};
use crate::utils::error::{CatalogError, Result};
use crate::utils::validation::{validate_file_extension, Validate};
use std::path::{Path, PathBuf};

/// Reads a TOML or JSON fixture file from disk, chosen by extension.
#[derive(Debug, Clone)]
pub struct FileFixtureSource {
    path: PathBuf,
}

impl FileFixtureSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl FixtureSource for FileFixtureSource {
    async fn load(&self) -> Result<Catalog> {
        let path_str = self.path.display().to_string();
        validate_file_extension("fixtures", &path_str, &["toml", "json"])?;

        tracing::debug!("Reading fixtures from {}", path_str);
        let content = tokio::fs::read_to_string(&self.path).await?;

        let catalog = match self.path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Catalog::from_json_str(&content)?,
            _ => toml::from_str(&content).map_err(|e| CatalogError::toml(path_str.clone(), e))?,
        };
        catalog.validate()?;

        tracing::info!("📚 Loaded {} items from {}", catalog.len(), path_str);
        Ok(catalog)
    }
}

/// The demo fixture set compiled into the crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinFixtures;

impl FixtureSource for BuiltinFixtures {
    async fn load(&self) -> Result<Catalog> {
        let catalog = Catalog::builtin()?;
        tracing::debug!("Using built-in fixtures ({} items)", catalog.len());
        Ok(catalog)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_load_toml_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("site.toml");
        std::fs::write(
            &path,
            r#"
[[blog_posts]]
id = "p1"
title = "Threat modelling basics"
author = "Robin"
category = "security-strategy"
"#,
        )
        .unwrap();

        let catalog = FileFixtureSource::new(&path).load().await.unwrap();
        assert_eq!(catalog.blog_posts.len(), 1);
    }

    #[tokio::test]
    async fn test_load_json_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("site.json");
        std::fs::write(&path, r#"{"testimonials": []}"#).unwrap();

        let catalog = FileFixtureSource::new(&path).load().await.unwrap();
        assert!(catalog.is_empty());
    }

    #[tokio::test]
    async fn test_missing_file_is_io_error() {
        let err = FileFixtureSource::new("/definitely/not/here.toml")
            .load()
            .await
            .unwrap_err();
        assert!(matches!(err, CatalogError::IoError(_)));
    }

    #[tokio::test]
    async fn test_unsupported_extension() {
        let err = FileFixtureSource::new("site.yaml").load().await.unwrap_err();
        assert!(matches!(err, CatalogError::InvalidConfigValueError { .. }));
    }

    #[tokio::test]
    async fn test_builtin_fixtures() {
        let catalog = BuiltinFixtures.load().await.unwrap();
        assert!(catalog.len() >= 9);
    }
}
