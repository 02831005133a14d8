//! Tray icon lookup

use std::path::{Path, PathBuf};

/// First existing `relative` path under `roots`, if any.
///
/// A missing icon is not an error: the tray is simply not created.
pub fn locate_tray_icon<P: AsRef<Path>>(roots: &[P], relative: &Path) -> Option<PathBuf> {
    roots
        .iter()
        .map(|root| root.as_ref().join(relative))
        .find(|candidate| candidate.is_file())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_present_icon_is_found() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("assets")).unwrap();
        std::fs::write(dir.path().join("assets/tray.png"), b"png").unwrap();

        let found = locate_tray_icon(&[dir.path()], Path::new("assets/tray.png"));
        assert_eq!(found, Some(dir.path().join("assets/tray.png")));
    }

    #[test]
    fn test_absent_icon_is_none() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(
            locate_tray_icon(&[dir.path()], Path::new("assets/tray.png")),
            None
        );

        let roots: [PathBuf; 0] = [];
        assert_eq!(locate_tray_icon(&roots, Path::new("assets/tray.png")), None);
    }

    #[test]
    fn test_directories_do_not_count() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("assets/tray.png")).unwrap();
        assert_eq!(
            locate_tray_icon(&[dir.path()], Path::new("assets/tray.png")),
            None
        );
    }

    #[test]
    fn test_later_roots_are_searched() {
        let empty = tempfile::tempdir().unwrap();
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("assets")).unwrap();
        std::fs::write(dir.path().join("assets/tray.png"), b"png").unwrap();

        let found = locate_tray_icon(&[empty.path(), dir.path()], Path::new("assets/tray.png"));
        assert_eq!(found, Some(dir.path().join("assets/tray.png")));
    }
}
