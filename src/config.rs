//! Up-front argument validation. Bad paths fail here, before any work
//! starts, so partial output is never left behind.

use crate::core::errors::{Error, Result};
use std::fs;
use std::path::Path;

/// The input must exist and be a directory.
pub fn validate_input_path(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(Error::configuration(format!(
            "input path does not exist: {}",
            path.display()
        )));
    }
    if !path.is_dir() {
        return Err(Error::configuration(format!(
            "input path is not a directory: {}",
            path.display()
        )));
    }
    Ok(())
}

/// The conversion input may be a single view file or a directory.
pub fn validate_convert_input(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(Error::configuration(format!(
            "input path does not exist: {}",
            path.display()
        )));
    }
    if path.is_file() && path.extension().is_none_or(|e| e != "cshtml") {
        return Err(Error::configuration(format!(
            "input file is not a Razor view: {}",
            path.display()
        )));
    }
    Ok(())
}

/// Create the output directory (and parents) if needed.
pub fn ensure_output_dir(dir: &Path) -> Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(Error::configuration(format!(
            "output path exists and is not a directory: {}",
            dir.display()
        )));
    }
    fs::create_dir_all(dir)
        .map_err(|e| Error::file_system("failed to create output directory", dir.to_path_buf(), e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_input_is_rejected() {
        let err = validate_input_path(Path::new("/no/such/dir")).unwrap_err();
        assert!(err.to_string().contains("does not exist"));
    }

    #[test]
    fn file_input_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("x.cs");
        fs::write(&file, "class X {}").unwrap();
        let err = validate_input_path(&file).unwrap_err();
        assert!(err.to_string().contains("not a directory"));
    }

    #[test]
    fn convert_input_accepts_a_single_view_file() {
        let dir = tempfile::tempdir().unwrap();
        let view = dir.path().join("Index.cshtml");
        fs::write(&view, "<h1>x</h1>").unwrap();
        assert!(validate_convert_input(&view).is_ok());
        assert!(validate_convert_input(dir.path()).is_ok());

        let other = dir.path().join("Order.cs");
        fs::write(&other, "class Order {}").unwrap();
        assert!(validate_convert_input(&other).is_err());
    }

    #[test]
    fn output_dir_is_created_with_parents() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a/b/c");
        ensure_output_dir(&nested).unwrap();
        assert!(nested.is_dir());
    }

    #[test]
    fn output_path_colliding_with_file_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("out");
        fs::write(&file, "").unwrap();
        assert!(ensure_output_dir(&file).is_err());
    }
}
