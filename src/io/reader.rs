//! Bounded, fault-tolerant file acquisition.
//!
//! Every failure mode here degrades to an empty [`SourceUnit`] plus one
//! diagnostic line; the reader never propagates an error into the pipeline.

use crate::core::SourceUnit;
use log::warn;
use std::path::Path;

/// Files above this ceiling are skipped and treated as absent.
pub const MAX_FILE_SIZE_BYTES: u64 = 1024 * 1024;

/// Read a source file, returning an empty unit if it exceeds the size
/// ceiling or cannot be read. Invalid UTF-8 sequences are replaced, not
/// rejected.
pub fn read_source(path: &Path) -> SourceUnit {
    let size = match std::fs::metadata(path) {
        Ok(meta) => meta.len(),
        Err(e) => {
            warn!("Skipping unreadable file: {} ({e})", path.display());
            return SourceUnit::new(path.to_path_buf(), String::new(), 0);
        }
    };

    if size > MAX_FILE_SIZE_BYTES {
        warn!("Skipping large file: {} ({size} bytes)", path.display());
        return SourceUnit::new(path.to_path_buf(), String::new(), size);
    }

    match std::fs::read(path) {
        Ok(bytes) => {
            let text = String::from_utf8_lossy(&bytes).into_owned();
            SourceUnit::new(path.to_path_buf(), text, size)
        }
        Err(e) => {
            warn!("Skipping unreadable file: {} ({e})", path.display());
            SourceUnit::new(path.to_path_buf(), String::new(), size)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn reads_small_file_fully() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Order.cs");
        std::fs::write(&path, "public class Order {}").unwrap();

        let unit = read_source(&path);
        assert_eq!(unit.text, "public class Order {}");
        assert_eq!(unit.bytes, 21);
        assert!(!unit.is_empty());
    }

    #[test]
    fn oversized_file_yields_empty_unit() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("huge.cs");
        let mut f = std::fs::File::create(&path).unwrap();
        let chunk = vec![b'x'; 64 * 1024];
        for _ in 0..17 {
            f.write_all(&chunk).unwrap();
        }
        drop(f);

        let unit = read_source(&path);
        assert!(unit.is_empty());
        assert!(unit.bytes > MAX_FILE_SIZE_BYTES);
    }

    #[test]
    fn missing_file_yields_empty_unit() {
        let unit = read_source(Path::new("/nonexistent/NoSuch.cs"));
        assert!(unit.is_empty());
        assert_eq!(unit.bytes, 0);
    }

    #[test]
    fn invalid_utf8_is_replaced_not_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("latin1.cs");
        std::fs::write(&path, b"class Caf\xe9 {}").unwrap();

        let unit = read_source(&path);
        assert!(!unit.is_empty());
        assert!(unit.text.contains('\u{FFFD}'));
    }
}
