//! Shell freshness check.

use std::fs;
use std::io;
use std::path::Path;

/// Whether `derived` must be regenerated from `source`.
///
/// True when `derived` does not exist, or was last modified strictly
/// before `source`. Equal timestamps count as fresh.
pub fn needs_rebuild(source: &Path, derived: &Path) -> io::Result<bool> {
    let derived_modified = match fs::metadata(derived) {
        Ok(meta) => meta.modified()?,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(true),
        Err(e) => return Err(e),
    };

    let source_modified = fs::metadata(source)?.modified()?;

    Ok(derived_modified < source_modified)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::time::{Duration, SystemTime};
    use tempfile::tempdir;

    fn touch(path: &Path, at: SystemTime) {
        fs::write(path, "x").unwrap();
        File::options()
            .write(true)
            .open(path)
            .unwrap()
            .set_modified(at)
            .unwrap();
    }

    #[test]
    fn missing_shell_needs_rebuild() {
        let temp = tempdir().unwrap();
        let source = temp.path().join("intro.adoc");
        touch(&source, SystemTime::now());

        assert!(needs_rebuild(&source, &temp.path().join("intro.html")).unwrap());
    }

    #[test]
    fn newer_shell_is_fresh() {
        let temp = tempdir().unwrap();
        let base = SystemTime::UNIX_EPOCH + Duration::from_secs(1_700_000_000);
        let source = temp.path().join("intro.adoc");
        let shell = temp.path().join("intro.html");
        touch(&source, base);
        touch(&shell, base + Duration::from_secs(60));

        assert!(!needs_rebuild(&source, &shell).unwrap());
    }

    #[test]
    fn equal_timestamps_are_fresh() {
        let temp = tempdir().unwrap();
        let base = SystemTime::UNIX_EPOCH + Duration::from_secs(1_700_000_000);
        let source = temp.path().join("intro.adoc");
        let shell = temp.path().join("intro.html");
        touch(&source, base);
        touch(&shell, base);

        assert!(!needs_rebuild(&source, &shell).unwrap());
    }

    #[test]
    fn older_shell_needs_rebuild() {
        let temp = tempdir().unwrap();
        let base = SystemTime::UNIX_EPOCH + Duration::from_secs(1_700_000_000);
        let source = temp.path().join("intro.adoc");
        let shell = temp.path().join("intro.html");
        touch(&source, base + Duration::from_secs(60));
        touch(&shell, base);

        assert!(needs_rebuild(&source, &shell).unwrap());
    }

    #[test]
    fn missing_source_with_existing_shell_is_an_error() {
        let temp = tempdir().unwrap();
        let shell = temp.path().join("intro.html");
        touch(&shell, SystemTime::now());

        assert!(needs_rebuild(&temp.path().join("intro.adoc"), &shell).is_err());
    }
}
