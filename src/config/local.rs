use crate::core::SourceProvider;
use crate::utils::error::{LintError, Result};
use std::path::{Path, PathBuf};
use tokio::fs;

/// Reads sources from, and writes reports to, the local file system.
#[derive(Debug, Clone, Default)]
pub struct LocalSource;

impl LocalSource {
    pub fn new() -> Self {
        Self
    }
}

fn has_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| extensions.iter().any(|allowed| allowed == ext))
}

fn is_excluded(path: &Path, exclude_dirs: &[String]) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| exclude_dirs.iter().any(|excluded| excluded == name))
}

impl SourceProvider for LocalSource {
    async fn list_files(
        &self,
        root: &Path,
        extensions: &[String],
        exclude_dirs: &[String],
    ) -> Result<Vec<PathBuf>> {
        let metadata = fs::metadata(root)
            .await
            .map_err(|_| LintError::PathNotFoundError {
                path: root.display().to_string(),
            })?;

        // An explicitly named file is checked whatever its extension.
        if metadata.is_file() {
            return Ok(vec![root.to_path_buf()]);
        }

        let mut files = Vec::new();
        let mut pending = vec![root.to_path_buf()];

        while let Some(dir) = pending.pop() {
            let mut entries = fs::read_dir(&dir).await?;
            while let Some(entry) = entries.next_entry().await? {
                let path = entry.path();
                let file_type = entry.file_type().await?;

                if file_type.is_dir() {
                    if is_excluded(&path, exclude_dirs) {
                        tracing::debug!("Skipping excluded directory {}", path.display());
                    } else {
                        pending.push(path);
                    }
                } else if has_extension(&path, extensions) {
                    files.push(path);
                }
            }
        }

        files.sort();
        Ok(files)
    }

    async fn read_file(&self, path: &Path) -> Result<String> {
        let bytes = fs::read(path).await?;
        String::from_utf8(bytes).map_err(|e| {
            LintError::IoError(std::io::Error::new(std::io::ErrorKind::InvalidData, e))
        })
    }

    async fn write_file(&self, path: &Path, data: &[u8]) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).await?;
            }
        }

        fs::write(path, data).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn exts() -> Vec<String> {
        vec!["cpp".to_string(), "h".to_string()]
    }

    #[test]
    fn test_list_files_filters_and_sorts() {
        let dir = TempDir::new().unwrap();
        let root = dir.path();
        std::fs::create_dir_all(root.join("Source/Game")).unwrap();
        std::fs::create_dir_all(root.join("Intermediate")).unwrap();
        std::fs::write(root.join("Source/Game/B.cpp"), "").unwrap();
        std::fs::write(root.join("Source/Game/A.h"), "").unwrap();
        std::fs::write(root.join("Source/readme.md"), "").unwrap();
        std::fs::write(root.join("Intermediate/Gen.h"), "").unwrap();

        let files = tokio_test::block_on(LocalSource::new().list_files(
            root,
            &exts(),
            &["Intermediate".to_string()],
        ))
        .unwrap();

        assert_eq!(
            files,
            vec![root.join("Source/Game/A.h"), root.join("Source/Game/B.cpp")]
        );
    }

    #[test]
    fn test_single_file_root_is_returned_as_is() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("Actor.txt");
        std::fs::write(&file, "class AThing;").unwrap();

        let files = tokio_test::block_on(LocalSource::new().list_files(&file, &exts(), &[])).unwrap();
        assert_eq!(files, vec![file]);
    }

    #[test]
    fn test_missing_root_is_reported() {
        let result = tokio_test::block_on(LocalSource::new().list_files(
            Path::new("/definitely/not/here"),
            &exts(),
            &[],
        ));
        assert!(matches!(result, Err(LintError::PathNotFoundError { .. })));
    }

    #[tokio::test]
    async fn test_non_utf8_file_is_a_read_error() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("Latin1.cpp");
        std::fs::write(&file, [0x63, 0x6c, 0xe9, 0xff]).unwrap();

        assert!(LocalSource::new().read_file(&file).await.is_err());
    }

    #[tokio::test]
    async fn test_write_file_creates_parent_dirs() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("reports/nested/naming.txt");

        LocalSource::new().write_file(&out, b"ok").await.unwrap();
        assert_eq!(std::fs::read_to_string(out).unwrap(), "ok");
    }
}
