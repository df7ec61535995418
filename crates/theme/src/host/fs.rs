//! Filesystem-backed asset source.

use std::path::PathBuf;

use anyhow::{Context, Result};
use async_trait::async_trait;
use tracing::debug;

use super::AssetSource;

/// Reads theme assets from the platform install root.
///
/// Uploaded presets live in a separate directory when the host keeps them
/// on disk; without one, no stored presets exist.
#[derive(Debug, Clone)]
pub struct FsAssets {
    dirroot: PathBuf,
    presets_dir: Option<PathBuf>,
}

impl FsAssets {
    pub fn new(dirroot: impl Into<PathBuf>) -> Self {
        Self {
            dirroot: dirroot.into(),
            presets_dir: None,
        }
    }

    /// Directory holding admin-uploaded preset files.
    pub fn with_presets_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.presets_dir = Some(dir.into());
        self
    }
}

#[async_trait]
impl AssetSource for FsAssets {
    async fn read_asset(&self, relative_path: &str) -> Result<String> {
        let path = self.dirroot.join(relative_path);
        debug!(path = %path.display(), "reading theme asset");
        tokio::fs::read_to_string(&path)
            .await
            .with_context(|| format!("failed to read theme asset {}", path.display()))
    }

    async fn stored_preset(&self, filename: &str) -> Result<Option<String>> {
        let Some(dir) = &self.presets_dir else {
            return Ok(None);
        };
        // Preset names are bare file names; anything with a separator is not ours.
        if filename.contains(['/', '\\']) || filename.starts_with('.') {
            return Ok(None);
        }

        let path = dir.join(filename);
        match tokio::fs::read_to_string(&path).await {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e).with_context(|| format!("failed to read preset {}", path.display())),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("trellis-fs-{name}-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[tokio::test]
    async fn reads_relative_asset() {
        let root = scratch_dir("asset");
        std::fs::create_dir_all(root.join("theme/trellis/style")).unwrap();
        std::fs::write(root.join("theme/trellis/style/moodle.css"), "body{}").unwrap();

        let assets = FsAssets::new(&root);
        let css = assets.read_asset("theme/trellis/style/moodle.css").await.unwrap();
        assert_eq!(css, "body{}");
        assert!(assets.read_asset("missing.css").await.is_err());
    }

    #[tokio::test]
    async fn stored_presets_are_optional() {
        let root = scratch_dir("preset");
        std::fs::write(root.join("ocean.scss"), "$primary: teal;").unwrap();

        let without = FsAssets::new(&root);
        assert!(without.stored_preset("ocean.scss").await.unwrap().is_none());

        let with = FsAssets::new(&root).with_presets_dir(&root);
        assert_eq!(
            with.stored_preset("ocean.scss").await.unwrap().as_deref(),
            Some("$primary: teal;")
        );
        assert!(with.stored_preset("missing.scss").await.unwrap().is_none());
        assert!(with.stored_preset("../ocean.scss").await.unwrap().is_none());
    }
}
