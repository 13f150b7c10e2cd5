//! File-system output for generated sources.

use std::path::{Path, PathBuf};

use eyre::{Context, Result};

use crate::emit::SdkFile;

/// Write generated files under `output_dir`, creating parent directories
/// as needed. Returns the absolute paths written, in input order.
pub fn write_files(output_dir: &Path, files: &[SdkFile]) -> Result<Vec<PathBuf>> {
    let mut written = Vec::with_capacity(files.len());
    for file in files {
        let path = output_dir.join(&file.path);
        write_file(&path, &file.content)
            .wrap_err_with(|| format!("failed to write {}", path.display()))?;
        written.push(path);
    }
    Ok(written)
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_creates_nested_directories() {
        let dir = tempfile::tempdir().unwrap();
        let files = vec![
            SdkFile {
                path: PathBuf::from("acme_sdk/sdk/models.py"),
                content: "# models\n".to_string(),
            },
            SdkFile {
                path: PathBuf::from("acme_sdk/sdk/methods.py"),
                content: "# methods\n".to_string(),
            },
        ];

        let written = write_files(dir.path(), &files).unwrap();
        assert_eq!(written.len(), 2);
        assert_eq!(
            std::fs::read_to_string(&written[0]).unwrap(),
            "# models\n"
        );
        assert_eq!(
            std::fs::read_to_string(&written[1]).unwrap(),
            "# methods\n"
        );
    }

    #[test]
    fn test_write_overwrites_existing() {
        let dir = tempfile::tempdir().unwrap();
        let file = SdkFile {
            path: PathBuf::from("models.py"),
            content: "new\n".to_string(),
        };
        std::fs::write(dir.path().join("models.py"), "old\n").unwrap();

        write_files(dir.path(), std::slice::from_ref(&file)).unwrap();
        assert_eq!(
            std::fs::read_to_string(dir.path().join("models.py")).unwrap(),
            "new\n"
        );
    }
}
