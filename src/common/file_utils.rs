use crate::errors::AppError;
use log::debug;
use std::path::Path;

/// Creates the directory that will hold `file_path`, if it is missing.
pub fn ensure_parent_directory(file_path: &Path) -> Result<(), AppError> {
    let dir_path = match file_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => return Ok(()),
    };
    if !dir_path.exists() {
        debug!("Directory '{}' does not exist, attempting to create it.", dir_path.display());
        std::fs::create_dir_all(dir_path).map_err(|e| {
            AppError::Io(format!(
                "Failed to create directory '{}': {}",
                dir_path.display(),
                e
            ))
        })?;
    } else if !dir_path.is_dir() {
        return Err(AppError::Io(format!(
            "Path '{}' exists but is not a directory.",
            dir_path.display()
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_creates_missing_parents() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("a").join("b").join("presets.json");
        ensure_parent_directory(&target).unwrap();
        assert!(dir.path().join("a").join("b").is_dir());
    }

    #[test]
    fn test_bare_file_name_needs_nothing() {
        assert!(ensure_parent_directory(Path::new("presets.json")).is_ok());
    }

    #[test]
    fn test_parent_that_is_a_file_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "x").unwrap();
        let err = ensure_parent_directory(&blocker.join("presets.json")).unwrap_err();
        assert!(matches!(err, AppError::Io(_)));
    }
}
