//! Owning-package discovery.
//!
//! Style file scopes are named by path relative to the nearest enclosing
//! package; the package name and directory are resolved once at config time
//! and reused for every SSR transform.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use super::ConfigError;

#[derive(Debug, Deserialize)]
struct Manifest {
    name: Option<String>,
}

/// Identity of the package that owns the project's style files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageInfo {
    pub name: String,
    /// Directory containing the manifest; file scopes are relative to it.
    pub dir: PathBuf,
}

impl PackageInfo {
    /// Walk up from `root` to the nearest `package.json` carrying a `name`.
    ///
    /// Manifests without a `name` field are skipped, continuing upward.
    pub fn discover(root: &Path) -> Result<Self, ConfigError> {
        for dir in root.ancestors() {
            let manifest_path = dir.join("package.json");
            if !manifest_path.is_file() {
                continue;
            }
            let raw = fs::read_to_string(&manifest_path)
                .map_err(|e| ConfigError::Io(manifest_path.clone(), e))?;
            let manifest: Manifest = serde_json::from_str(&raw)
                .map_err(|e| ConfigError::Manifest(manifest_path.clone(), e))?;
            if let Some(name) = manifest.name {
                return Ok(Self {
                    name,
                    dir: dir.to_path_buf(),
                });
            }
        }
        Err(ConfigError::MissingPackage(root.to_path_buf()))
    }

    /// Package-relative path for a file, normalized to forward slashes.
    pub fn scope_path(&self, file: &Path) -> String {
        let rel = file.strip_prefix(&self.dir).unwrap_or(file);
        rel.components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_discover_in_root() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("package.json"), r#"{"name":"app"}"#).unwrap();

        let info = PackageInfo::discover(dir.path()).unwrap();
        assert_eq!(info.name, "app");
        assert_eq!(info.dir, dir.path());
    }

    #[test]
    fn test_discover_walks_up_past_nameless_manifest() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("package.json"), r#"{"name":"workspace"}"#).unwrap();

        let nested = dir.path().join("packages/ui");
        fs::create_dir_all(&nested).unwrap();
        fs::write(nested.join("package.json"), r#"{"private":true}"#).unwrap();

        let info = PackageInfo::discover(&nested).unwrap();
        assert_eq!(info.name, "workspace");
        assert_eq!(info.dir, dir.path());
    }

    #[test]
    fn test_discover_missing() {
        let dir = TempDir::new().unwrap();
        let err = PackageInfo::discover(dir.path()).unwrap_err();
        assert!(matches!(err, ConfigError::MissingPackage(_)));
    }

    #[test]
    fn test_discover_malformed_manifest() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("package.json"), "{not json").unwrap();

        let err = PackageInfo::discover(dir.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Manifest(..)));
    }

    #[test]
    fn test_scope_path_relative_to_package() {
        let info = PackageInfo {
            name: "app".into(),
            dir: PathBuf::from("/srv/app"),
        };
        assert_eq!(
            info.scope_path(Path::new("/srv/app/src/theme.css.ts")),
            "src/theme.css.ts"
        );
    }

    #[test]
    fn test_scope_path_outside_package_kept_as_is() {
        let info = PackageInfo {
            name: "app".into(),
            dir: PathBuf::from("/srv/app"),
        };
        assert_eq!(
            info.scope_path(Path::new("elsewhere/a.css.ts")),
            "elsewhere/a.css.ts"
        );
    }
}
